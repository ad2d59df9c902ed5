//! Keyword-density relevance scoring.
//!
//! The score of a paragraph is the number of *distinct* normalized tokens
//! that appear in the keyword set, divided by the *total* token count of the
//! paragraph (repeats included). Density rather than raw count: a short
//! paragraph made of matching terms outranks a long one that mentions them in
//! passing, and repeating a matched word cannot inflate the numerator.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::models::{ContentUnit, ScoredUnit};
use crate::normalize::normalize;

/// Score one paragraph of text against a keyword set. Pure and deterministic.
///
/// Returns a value in `[0, 1]`; exactly 0.0 when the keyword set is empty,
/// the text normalizes to zero tokens, or no keyword appears.
pub fn relevance_score(text: &str, keywords: &HashSet<String>, lexicon: &Lexicon) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let tokens = normalize(text, lexicon);
    if tokens.is_empty() {
        return 0.0;
    }
    let matched: HashSet<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| keywords.contains(*t))
        .collect();
    matched.len() as f64 / tokens.len() as f64
}

/// Score all units for one document, dropping every unit that scores 0.
///
/// Output preserves segmentation order, which the ranker relies on as its
/// tie-break order.
pub fn score_units(
    units: Vec<ContentUnit>,
    keywords: &HashSet<String>,
    lexicon: &Lexicon,
) -> Vec<ScoredUnit> {
    units
        .into_iter()
        .filter_map(|unit| {
            let score = relevance_score(&unit.text, keywords, lexicon);
            (score > 0.0).then_some(ScoredUnit { unit, score })
        })
        .collect()
}
