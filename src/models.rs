//! Core data models for the ranking pipeline.
//!
//! These types flow from segmentation through scoring and ranking into the
//! persisted result record. Output field names are part of the on-disk JSON
//! contract and must not change.

use serde::{Deserialize, Serialize};

/// One paragraph of extracted text, tied to its document and page.
///
/// Created during segmentation and immutable afterwards; scoring wraps it in
/// a [`ScoredUnit`] rather than mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentUnit {
    pub document: String,
    /// 1-based page number within the source document.
    pub page_number: u32,
    /// Non-empty paragraph text.
    pub text: String,
    /// 0-based paragraph position within the page.
    pub paragraph_index: usize,
}

/// A content unit with its relevance score attached.
///
/// The score is always positive here: zero-scored units are dropped before
/// ranking and never reach this type's consumers.
#[derive(Debug, Clone)]
pub struct ScoredUnit {
    pub unit: ContentUnit,
    pub score: f64,
}

/// A selected, titled, ranked section in the final output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSection {
    pub document: String,
    pub page_number: u32,
    pub section_title: String,
    /// 1 = most relevant; ranks are contiguous and unique per document.
    pub importance_rank: u32,
}

/// The full paragraph text behind a ranked section, in the same rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Excerpt {
    pub document: String,
    pub page_number: u32,
    pub refined_text: String,
}

/// Run metadata recorded alongside each document's result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub input_document: String,
    pub persona: String,
    pub job_to_be_done: String,
    /// RFC 3339 / ISO-8601 generation timestamp.
    pub processing_timestamp: String,
}

/// One document's complete ranked output, persisted as a single JSON record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub metadata: RunMetadata,
    pub extracted_sections: Vec<RankedSection>,
    pub subsection_analysis: Vec<Excerpt>,
}
