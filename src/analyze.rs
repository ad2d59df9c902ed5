//! Batch analysis orchestration.
//!
//! Coordinates the full run: discovery → per-document pipeline (segment →
//! score → rank → assemble) → sink. The lexicon and the combined keyword set
//! are built once and shared read-only; documents are independent and
//! processed in parallel. A failure scoped to one document is reported with
//! the document name attached and never aborts the batch.

use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::assemble::assemble;
use crate::config::Config;
use crate::discover::discover_documents;
use crate::extract::{self, Page};
use crate::keywords::combined_keywords;
use crate::lexicon::Lexicon;
use crate::models::ResultSet;
use crate::progress::{AnalyzeEvent, ProgressMode};
use crate::rank::select_and_rank;
use crate::score::{relevance_score, score_units};
use crate::segment::segment_pages;
use crate::sink::write_result;

/// Run the ranking pipeline for one document's already-extracted pages.
///
/// Synchronous and self-contained: everything it produces is owned by this
/// call, so concurrent invocations for different documents share nothing but
/// the read-only lexicon and keyword set.
pub fn analyze_document(
    document: &str,
    pages: &[Page],
    persona: &str,
    job: &str,
    keywords: &HashSet<String>,
    lexicon: &Lexicon,
    config: &Config,
) -> ResultSet {
    let units = segment_pages(document, pages);
    let scored = score_units(units, keywords, lexicon);
    let ranked = select_and_rank(
        scored,
        config.selection.max_sections,
        config.selection.max_title_len,
    );
    assemble(document, persona, job, chrono::Utc::now(), ranked)
}

/// Run a full batch: discover documents, rank each against the persona and
/// job text, and persist one JSON record per document that processes.
pub fn run_analyze(
    config: &Config,
    persona: &str,
    job: &str,
    dry_run: bool,
    limit: Option<usize>,
    progress: ProgressMode,
) -> Result<()> {
    // Batch-fatal when the lexicon is unavailable; nothing can be scored.
    let lexicon = Lexicon::load(&config.lexicon.language)
        .context("lexical resource unavailable, cannot start batch")?;
    let keywords = combined_keywords(persona, job, &lexicon);

    let reporter = progress.reporter();
    reporter.report(AnalyzeEvent::Discovering {
        root: config.input.root.display().to_string(),
    });

    let mut documents = discover_documents(config)?;
    if let Some(lim) = limit {
        documents.truncate(lim);
    }

    if dry_run {
        println!("analyze (dry-run)");
        println!("  documents found: {}", documents.len());
        let total_paragraphs: usize = documents
            .iter()
            .filter_map(|path| extract::extract_pages(path).ok())
            .map(|pages| segment_pages("tmp", &pages).len())
            .sum();
        println!("  paragraphs to score: {}", total_paragraphs);
        println!("  keywords: {}", keywords.len());
        return Ok(());
    }

    let total = documents.len() as u64;
    let done = AtomicU64::new(0);

    let outcomes: Vec<Result<(), (String, String)>> = documents
        .par_iter()
        .map(|path| {
            let name = document_name(path);
            let outcome = process_one(path, &name, persona, job, &keywords, &lexicon, config);
            match &outcome {
                Ok(()) => {
                    let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                    reporter.report(AnalyzeEvent::Analyzed {
                        document: name,
                        n,
                        total,
                    });
                }
                Err((doc, reason)) => {
                    done.fetch_add(1, Ordering::Relaxed);
                    reporter.report(AnalyzeEvent::Skipped {
                        document: doc.clone(),
                        reason: reason.clone(),
                    });
                }
            }
            outcome
        })
        .collect();

    let failed: Vec<&(String, String)> = outcomes.iter().filter_map(|o| o.as_ref().err()).collect();

    println!("analyze");
    println!("  documents found: {}", documents.len());
    println!("  results written: {}", documents.len() - failed.len());
    println!("  skipped: {}", failed.len());
    for (doc, reason) in &failed {
        eprintln!("  !! {}: {}", doc, reason);
    }
    println!("ok");

    Ok(())
}

/// Extract, rank, and persist a single document. Errors carry the document
/// name so the caller can report them without aborting the batch.
fn process_one(
    path: &Path,
    name: &str,
    persona: &str,
    job: &str,
    keywords: &HashSet<String>,
    lexicon: &Lexicon,
    config: &Config,
) -> Result<(), (String, String)> {
    let pages = extract::extract_pages(path)
        .map_err(|e| (name.to_string(), e.to_string()))?;

    let result = analyze_document(name, &pages, persona, job, keywords, lexicon, config);

    write_result(&config.output.dir, path, &result)
        .map_err(|e| (name.to_string(), format!("sink failure: {}", e)))?;

    Ok(())
}

/// Rank a single document and print the sections to stdout (no sink).
pub fn run_rank_file(config: &Config, path: &Path, persona: &str, job: &str) -> Result<()> {
    let lexicon = Lexicon::load(&config.lexicon.language)
        .context("lexical resource unavailable")?;
    let keywords = combined_keywords(persona, job, &lexicon);

    let name = document_name(path);
    let pages = extract::extract_pages(path)
        .map_err(|e| anyhow::anyhow!("{}: {}", name, e))?;
    let result = analyze_document(&name, &pages, persona, job, &keywords, &lexicon, config);

    if result.extracted_sections.is_empty() {
        println!("No relevant sections.");
        return Ok(());
    }

    println!("{:<6} {:<8} {:<6} TITLE", "RANK", "SCORE", "PAGE");
    for (section, excerpt) in result
        .extracted_sections
        .iter()
        .zip(result.subsection_analysis.iter())
    {
        let score = relevance_score(&excerpt.refined_text, &keywords, &lexicon);
        println!(
            "{:<6} {:<8.4} {:<6} {}",
            section.importance_rank, score, section.page_number, section.section_title
        );
    }

    Ok(())
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, LexiconConfig, OutputConfig, SelectionConfig};

    fn test_config(root: &Path) -> Config {
        Config {
            input: InputConfig {
                root: root.to_path_buf(),
                include_globs: vec!["**/*.txt".to_string()],
                exclude_globs: Vec::new(),
                follow_symlinks: false,
            },
            output: OutputConfig {
                dir: root.join("out"),
            },
            lexicon: LexiconConfig::default(),
            selection: SelectionConfig::default(),
        }
    }

    fn page(number: u32, text: &str) -> Page {
        Page {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn relevant_paragraph_outranks_filler() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let lexicon = Lexicon::load("english").unwrap();
        let keywords = combined_keywords("climate scientist", "assess risk", &lexicon);

        let pages = [page(1, "Climate risk.\n\nUnrelated filler text about cooking.")];
        let result = analyze_document(
            "report.pdf",
            &pages,
            "climate scientist",
            "assess risk",
            &keywords,
            &lexicon,
            &config,
        );

        assert_eq!(result.extracted_sections.len(), 1);
        let top = &result.extracted_sections[0];
        assert_eq!(top.importance_rank, 1);
        assert_eq!(top.section_title, "Climate risk.");
        assert_eq!(top.page_number, 1);
        assert_eq!(result.subsection_analysis[0].refined_text, "Climate risk.");
    }

    #[test]
    fn empty_keywords_give_empty_result_not_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let lexicon = Lexicon::load("english").unwrap();
        let keywords = combined_keywords("", "", &lexicon);
        assert!(keywords.is_empty());

        let pages = [page(1, "Any content at all.")];
        let result =
            analyze_document("doc.txt", &pages, "", "", &keywords, &lexicon, &config);
        assert!(result.extracted_sections.is_empty());
        assert!(result.subsection_analysis.is_empty());
        assert_eq!(result.metadata.input_document, "doc.txt");
    }

    #[test]
    fn empty_document_gives_empty_result() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let lexicon = Lexicon::load("english").unwrap();
        let keywords = combined_keywords("analyst", "review", &lexicon);

        let result =
            analyze_document("doc.txt", &[], "analyst", "review", &keywords, &lexicon, &config);
        assert!(result.extracted_sections.is_empty());
    }

    #[test]
    fn batch_writes_one_record_per_document_and_skips_failures() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("alpha.txt"),
            "Rust programming guide.\n\nCooking notes.",
        )
        .unwrap();
        std::fs::write(tmp.path().join("beta.txt"), "More rust material here.").unwrap();

        let config = test_config(tmp.path());
        run_analyze(
            &config,
            "rust programmer",
            "learn the language",
            false,
            None,
            ProgressMode::Off,
        )
        .unwrap();

        assert!(config.output.dir.join("alpha.json").exists());
        assert!(config.output.dir.join("beta.json").exists());

        let alpha: ResultSet = serde_json::from_str(
            &std::fs::read_to_string(config.output.dir.join("alpha.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(alpha.metadata.persona, "rust programmer");
        assert_eq!(alpha.extracted_sections[0].importance_rank, 1);
    }
}
