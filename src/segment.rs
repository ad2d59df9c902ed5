//! Paragraph-boundary segmentation of per-page text.
//!
//! Splits each page's text on blank lines (`\n\n`) into content units. A page
//! whose text yields no paragraphs after trimming is kept whole as a single
//! unit, so no page with actual content is silently dropped.
//!
//! Documents that use single newlines as paragraph breaks will segment as one
//! unit per page. That granularity is deliberate; do not split finer here
//! without revisiting the scoring behavior it feeds.

use crate::extract::Page;
use crate::models::ContentUnit;

/// Segment one document's pages into content units in page-then-paragraph
/// order. Paragraph indices restart at 0 on every page.
pub fn segment_pages(document: &str, pages: &[Page]) -> Vec<ContentUnit> {
    let mut units = Vec::new();

    for page in pages {
        let mut paragraphs: Vec<&str> = page
            .text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        // Whole-page fallback for pages with content but no blank-line breaks
        // surviving the trim.
        if paragraphs.is_empty() {
            let whole = page.text.trim();
            if whole.is_empty() {
                continue;
            }
            paragraphs.push(whole);
        }

        for (paragraph_index, text) in paragraphs.into_iter().enumerate() {
            units.push(ContentUnit {
                document: document.to_string(),
                page_number: page.number,
                text: text.to_string(),
                paragraph_index,
            });
        }
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, text: &str) -> Page {
        Page {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn splits_on_blank_lines() {
        let units = segment_pages("doc.pdf", &[page(1, "First para.\n\nSecond para.")]);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].text, "First para.");
        assert_eq!(units[0].paragraph_index, 0);
        assert_eq!(units[1].text, "Second para.");
        assert_eq!(units[1].paragraph_index, 1);
    }

    #[test]
    fn trims_and_drops_empty_candidates() {
        let units = segment_pages("doc.pdf", &[page(1, "  One.  \n\n   \n\n  Two.  ")]);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].text, "One.");
        assert_eq!(units[1].text, "Two.");
    }

    #[test]
    fn single_newline_page_stays_whole() {
        let units = segment_pages("doc.pdf", &[page(1, "Line one.\nLine two.\nLine three.")]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "Line one.\nLine two.\nLine three.");
    }

    #[test]
    fn nonempty_page_always_yields_a_unit() {
        // All-blank-line candidates, but the page itself carries content.
        let units = segment_pages("doc.pdf", &[page(3, "\n\nonly text\n\n")]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "only text");
        assert_eq!(units[0].page_number, 3);
    }

    #[test]
    fn whitespace_only_page_yields_nothing() {
        let units = segment_pages("doc.pdf", &[page(1, "   \n \n  ")]);
        assert!(units.is_empty());
    }

    #[test]
    fn indices_reset_per_page() {
        let units = segment_pages(
            "doc.pdf",
            &[page(1, "A.\n\nB."), page(2, "C.\n\nD.")],
        );
        let idx: Vec<(u32, usize)> = units
            .iter()
            .map(|u| (u.page_number, u.paragraph_index))
            .collect();
        assert_eq!(idx, vec![(1, 0), (1, 1), (2, 0), (2, 1)]);
    }
}
