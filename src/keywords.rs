//! Keyword extraction from persona and job descriptions.
//!
//! Turns a free-text description into the set of significant terms used as
//! the relevance signal: lowercase word tokens with punctuation stripped,
//! stop words removed, and duplicates collapsed. Words keep their place when
//! punctuation sits next to them ("scientist," contributes "scientist");
//! tokens with no alphanumeric content contribute nothing.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::normalize::normalize;

/// Extract the keyword set from a free-text description.
///
/// Descriptions go through the same canonicalization as scored text, so a
/// keyword always matches its own occurrence in a paragraph. An empty
/// description yields an empty set; downstream scoring then scores every
/// unit as zero, which is a valid degenerate outcome.
pub fn extract_keywords(description: &str, lexicon: &Lexicon) -> HashSet<String> {
    normalize(description, lexicon)
        .into_iter()
        .filter(|w| !lexicon.is_stop_word(w))
        .collect()
}

/// Combined keyword set for a batch run: union of the persona-derived and
/// job-derived sets, applied identically to every document.
pub fn combined_keywords(persona: &str, job: &str, lexicon: &Lexicon) -> HashSet<String> {
    let mut keywords = extract_keywords(persona, lexicon);
    keywords.extend(extract_keywords(job, lexicon));
    keywords
}
