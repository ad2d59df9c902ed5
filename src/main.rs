//! # Docsift CLI (`sift`)
//!
//! The `sift` binary ranks document sections by relevance to a reader
//! persona and a job-to-be-done description.
//!
//! ## Usage
//!
//! ```bash
//! sift --config ./config/sift.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sift analyze` | Rank every discovered document and write one JSON result each |
//! | `sift rank <file>` | Rank a single document and print the sections |
//! | `sift inputs` | List the input root's health and discoverable documents |
//!
//! ## Examples
//!
//! ```bash
//! # Batch run over the configured input directory
//! sift analyze --persona "climate scientist" --job "assess regional risk"
//!
//! # Preview counts without writing anything
//! sift analyze --persona "analyst" --job "review findings" --dry-run
//!
//! # Inspect a single document on stdout
//! sift rank report.pdf --persona "analyst" --job "review findings"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docsift::{analyze, config, inputs, progress::ProgressMode};

/// Docsift — persona-driven document section ranking.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/sift.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "sift",
    about = "Docsift — rank document sections by relevance to a persona and task",
    version,
    long_about = "Docsift segments documents into paragraphs, extracts keywords from a reader \
    persona and job-to-be-done description, scores each paragraph by keyword density, and emits \
    the top-ranked sections per document as JSON."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/sift.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Rank every discovered document against the persona/job description.
    ///
    /// Discovers documents under the configured input root, runs the ranking
    /// pipeline on each, and writes one JSON record per document to the
    /// output directory. Documents that fail extraction are reported and
    /// skipped; they never abort the batch.
    Analyze {
        /// Reader persona description (free text).
        #[arg(long, default_value = "")]
        persona: String,

        /// Job-to-be-done description (free text).
        #[arg(long, default_value = "")]
        job: String,

        /// Show document and paragraph counts without writing results.
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of documents to process.
        #[arg(long)]
        limit: Option<usize>,

        /// Progress reporting on stderr: off, human, or json.
        /// Defaults to human when stderr is a TTY.
        #[arg(long)]
        progress: Option<String>,
    },

    /// Rank a single document and print its sections to stdout.
    Rank {
        /// Path to the document (.pdf, .txt, or .md).
        file: PathBuf,

        /// Reader persona description (free text).
        #[arg(long, default_value = "")]
        persona: String,

        /// Job-to-be-done description (free text).
        #[arg(long, default_value = "")]
        job: String,
    },

    /// List the input root's health and the documents a batch would process.
    Inputs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            persona,
            job,
            dry_run,
            limit,
            progress,
        } => {
            let mode = match progress.as_deref() {
                Some(s) => ProgressMode::parse(s)
                    .ok_or_else(|| anyhow::anyhow!("unknown progress mode: {}", s))?,
                None => ProgressMode::default_for_tty(),
            };
            analyze::run_analyze(&cfg, &persona, &job, dry_run, limit, mode)?;
        }
        Commands::Rank { file, persona, job } => {
            analyze::run_rank_file(&cfg, &file, &persona, &job)?;
        }
        Commands::Inputs => {
            inputs::list_inputs(&cfg)?;
        }
    }

    Ok(())
}
