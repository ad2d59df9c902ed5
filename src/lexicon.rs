//! Shared lexical resource: word tokenizer plus per-language stop words.
//!
//! Stop-word lists are embedded at compile time from `data/stop_words.json`
//! (a JSON object keyed by language name). A [`Lexicon`] is loaded once at
//! process start for the configured language and shared read-only by every
//! document run, so cross-document parallelism needs no locking.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};

/// Embedded stop-word lists for the supported languages.
const STOP_WORDS_JSON: &str = include_str!("../data/stop_words.json");

/// A loaded lexical resource for one natural language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: String,
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Load the lexicon for `language`.
    ///
    /// Fails when the language has no embedded stop-word list. This is a
    /// startup-time failure: no document can be processed without it.
    pub fn load(language: &str) -> Result<Self> {
        let lists: HashMap<String, Vec<String>> = serde_json::from_str(STOP_WORDS_JSON)
            .context("embedded stop-word data is not valid JSON")?;

        let words = lists.get(language).with_context(|| {
            let mut known: Vec<&str> = lists.keys().map(|k| k.as_str()).collect();
            known.sort_unstable();
            format!(
                "no stop-word list for language '{}' (available: {})",
                language,
                known.join(", ")
            )
        })?;

        Ok(Self {
            language: language.to_string(),
            stop_words: words.iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Split text into lowercase word tokens on whitespace.
    ///
    /// Punctuation is kept attached to its token; callers that need clean
    /// word forms strip non-alphanumerics first (see [`crate::normalize`]).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| w.to_lowercase())
            .collect()
    }

    /// Whether `word` is a stop word in this lexicon's language.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
