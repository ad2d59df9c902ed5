//! Result assembly.
//!
//! Packages run metadata with the ranked sections and their excerpts into the
//! final [`ResultSet`]. Purely structural: no scoring decisions are made
//! here, and a ResultSet is either fully assembled or not produced at all.

use chrono::{DateTime, Utc};

use crate::models::{Excerpt, RankedSection, ResultSet, RunMetadata};

/// Assemble one document's result record.
pub fn assemble(
    document: &str,
    persona: &str,
    job: &str,
    generated_at: DateTime<Utc>,
    ranked: Vec<(RankedSection, Excerpt)>,
) -> ResultSet {
    let (extracted_sections, subsection_analysis) = ranked.into_iter().unzip();
    ResultSet {
        metadata: RunMetadata {
            input_document: document.to_string(),
            persona: persona.to_string(),
            job_to_be_done: job.to_string(),
            processing_timestamp: generated_at.to_rfc3339(),
        },
        extracted_sections,
        subsection_analysis,
    }
}
