//! Text normalization for relevance matching.
//!
//! Canonicalizes raw paragraph text before scoring: lowercase, drop every
//! character outside the alphanumeric/whitespace set, then tokenize with the
//! lexicon. Pure function of its inputs.

use crate::lexicon::Lexicon;

/// Normalize `text` into lowercase word tokens suitable for keyword matching.
///
/// Empty or whitespace-only input yields an empty token list; that is a valid
/// outcome, not an error.
pub fn normalize(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    lexicon.tokenize(&stripped)
}
