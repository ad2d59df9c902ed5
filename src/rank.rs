//! Ranking, selection, and section-title derivation.
//!
//! Sorts scored units by descending relevance with a stable sort, so equal
//! scores keep their segmentation order (page, then paragraph within page).
//! The top `max_sections` units become ranked sections with 1-based
//! contiguous ranks and a title derived from each unit's first line.

use crate::models::{Excerpt, RankedSection, ScoredUnit};

/// Placeholder title for units whose first line is empty after trimming.
pub const PLACEHOLDER_TITLE: &str = "Relevant Content";

/// Select and rank the top units for one document.
///
/// Input units must already carry positive scores in segmentation order.
/// Returns at most `max_sections` (section, excerpt) pairs aligned by rank;
/// an empty input yields an empty selection.
pub fn select_and_rank(
    mut scored: Vec<ScoredUnit>,
    max_sections: usize,
    max_title_len: usize,
) -> Vec<(RankedSection, Excerpt)> {
    // Stable: ties keep pre-sort (segmentation) order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(max_sections);

    scored
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let section = RankedSection {
                document: s.unit.document.clone(),
                page_number: s.unit.page_number,
                section_title: derive_title(&s.unit.text, max_title_len),
                importance_rank: i as u32 + 1,
            };
            let excerpt = Excerpt {
                document: s.unit.document,
                page_number: s.unit.page_number,
                refined_text: s.unit.text,
            };
            (section, excerpt)
        })
        .collect()
}

/// Derive a section title from the first line of a unit's text.
///
/// A first line within `max_len` characters is returned verbatim; a longer
/// one is cut to `max_len` and backed up to the last space boundary (when one
/// exists) with an ellipsis appended. An all-whitespace first line falls back
/// to [`PLACEHOLDER_TITLE`].
pub fn derive_title(text: &str, max_len: usize) -> String {
    let first_line = text
        .trim()
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim();

    if first_line.is_empty() {
        return PLACEHOLDER_TITLE.to_string();
    }
    if first_line.chars().count() <= max_len {
        return first_line.to_string();
    }

    let cut: String = first_line.chars().take(max_len).collect();
    let head = match cut.rfind(' ') {
        Some(pos) => &cut[..pos],
        None => cut.as_str(),
    };
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentUnit;

    fn unit(page: u32, idx: usize, text: &str, score: f64) -> ScoredUnit {
        ScoredUnit {
            unit: ContentUnit {
                document: "doc.pdf".into(),
                page_number: page,
                text: text.into(),
                paragraph_index: idx,
            },
            score,
        }
    }

    #[test]
    fn sorts_descending_by_score() {
        let ranked = select_and_rank(
            vec![unit(1, 0, "low", 0.2), unit(1, 1, "high", 0.9), unit(2, 0, "mid", 0.5)],
            10,
            100,
        );
        let titles: Vec<&str> = ranked.iter().map(|(s, _)| s.section_title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
    }

    #[test]
    fn ranks_are_contiguous_from_one() {
        let ranked = select_and_rank(
            (0..5).map(|i| unit(1, i, "text", 0.5)).collect(),
            10,
            100,
        );
        let ranks: Vec<u32> = ranked.iter().map(|(s, _)| s.importance_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ties_keep_segmentation_order() {
        let ranked = select_and_rank(
            vec![
                unit(1, 0, "first", 0.5),
                unit(1, 1, "second", 0.5),
                unit(2, 0, "third", 0.5),
            ],
            10,
            100,
        );
        let titles: Vec<&str> = ranked.iter().map(|(s, _)| s.section_title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn selection_is_capped() {
        let ranked = select_and_rank(
            (0..15).map(|i| unit(1, i, "text", 1.0 - i as f64 * 0.01)).collect(),
            10,
            100,
        );
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked.last().unwrap().0.importance_rank, 10);
    }

    #[test]
    fn empty_input_empty_selection() {
        assert!(select_and_rank(Vec::new(), 10, 100).is_empty());
    }

    #[test]
    fn excerpts_align_with_sections() {
        let ranked = select_and_rank(
            vec![unit(2, 0, "Title line\n\nBody follows.", 0.7), unit(1, 0, "Other", 0.3)],
            10,
            100,
        );
        assert_eq!(ranked[0].0.page_number, 2);
        assert_eq!(ranked[0].1.page_number, 2);
        assert_eq!(ranked[0].1.refined_text, "Title line\n\nBody follows.");
    }

    #[test]
    fn short_first_line_is_verbatim() {
        assert_eq!(derive_title("Climate risk.\nMore text.", 100), "Climate risk.");
    }

    #[test]
    fn long_first_line_truncates_at_space_with_ellipsis() {
        let line = "alpha beta gamma delta";
        // 10 chars in: "alpha beta" — last space is between the words kept.
        assert_eq!(derive_title(line, 12), "alpha beta...");
    }

    #[test]
    fn long_unbroken_line_truncates_hard() {
        let line = "a".repeat(50);
        assert_eq!(derive_title(&line, 10), format!("{}...", "a".repeat(10)));
    }

    #[test]
    fn whitespace_first_line_uses_placeholder() {
        assert_eq!(derive_title("   \n", 100), PLACEHOLDER_TITLE);
    }
}
