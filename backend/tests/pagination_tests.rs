//! Tests for the book pagination engine

use proptest::prelude::*;
use shared::{
    clean_story_content, paginate, split_into_pages, Language, BACKGROUNDS, MIN_PARAGRAPH_CHARS,
    PAGE_CHAR_BUDGET, SCENES,
};

fn paragraph(words: usize) -> String {
    vec!["banana"; words].join(" ")
}

// =============================================================================
// Page splitting tests
// =============================================================================

mod splitting {
    use super::*;

    #[test]
    fn noise_fragments_are_dropped() {
        let content = format!("ok\n\n{}\n\n...", paragraph(50));
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 1);
        assert!(!pages[0].contains("ok"));
    }

    #[test]
    fn short_paragraphs_merge_into_one_page() {
        let content = format!("{}\n\n{}", paragraph(8), paragraph(8));
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn long_paragraphs_get_their_own_page() {
        let long = paragraph(60); // well over the page budget
        let content = format!("{}\n\n{}\n\n{}", long, long, long);
        assert_eq!(split_into_pages(&content).len(), 3);
    }

    #[test]
    fn empty_content_yields_no_pages() {
        assert!(split_into_pages("").is_empty());
        assert!(split_into_pages("short").is_empty());
    }
}

// =============================================================================
// Spread assembly tests
// =============================================================================

mod spreads {
    use super::*;

    #[test]
    fn first_spread_opens_with_the_title() {
        let content = format!("{}\n\n{}", paragraph(60), paragraph(60));
        let spreads = paginate(&content, "The Clever Crow", Language::English);
        assert_eq!(spreads[0].left_chapter, "The Clever Crow");
        assert_eq!(spreads[0].left_page, 1);
        assert_eq!(spreads[0].right_page, 2);
    }

    #[test]
    fn later_spreads_use_page_headers() {
        let long = paragraph(60);
        let content = format!("{}\n\n{}\n\n{}", long, long, long);
        let spreads = paginate(&content, "Title", Language::English);
        assert_eq!(spreads.len(), 2);
        assert_eq!(spreads[1].left_chapter, "Page 3");
        assert_eq!(spreads[1].right_chapter, "Page 4");
    }

    #[test]
    fn bengali_reader_gets_bengali_headers() {
        let long = paragraph(60);
        let content = format!("{}\n\n{}\n\n{}", long, long, long);
        let spreads = paginate(&content, "কাকের গল্প", Language::Bengali);
        assert_eq!(spreads[1].left_chapter, "পৃষ্ঠা 3");
        assert_eq!(spreads[1].right_chapter, "পৃষ্ঠা 4");
    }

    #[test]
    fn odd_page_count_leaves_last_right_page_blank() {
        let long = paragraph(60);
        let content = format!("{}\n\n{}\n\n{}", long, long, long);
        let spreads = paginate(&content, "Title", Language::English);
        assert!(spreads[1].right_text.is_empty());
    }

    #[test]
    fn unpaginatable_content_gets_a_closing_spread() {
        let spreads = paginate("tiny", "Tiny Tale", Language::English);
        assert_eq!(spreads.len(), 1);
        assert_eq!(spreads[0].left_chapter, "Tiny Tale");
        assert_eq!(spreads[0].left_text, "tiny");
        assert_eq!(spreads[0].right_chapter, "The End");
    }

    #[test]
    fn closing_spread_is_localized() {
        let spreads = paginate("", "ছোট", Language::Bengali);
        assert_eq!(spreads[0].right_chapter, "সমাপ্ত");
    }
}

// =============================================================================
// Property tests
// =============================================================================

fn paragraphs_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::collection::vec("[a-z]{3,8}", 10..80).prop_map(|words| words.join(" ")),
        1..20,
    )
    .prop_map(|paragraphs| paragraphs.join("\n\n"))
}

/// Like paragraphs_strategy, but also produces fragments short enough to
/// fall under the noise threshold
fn mixed_paragraphs_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::collection::vec("[a-z]{3,8}", 1..80).prop_map(|words| words.join(" ")),
        1..20,
    )
    .prop_map(|paragraphs| paragraphs.join("\n\n"))
}

proptest! {
    /// Page numbers are a contiguous odd/even sequence across spreads
    #[test]
    fn prop_page_numbers_are_sequential(content in paragraphs_strategy()) {
        let spreads = paginate(&content, "T", Language::English);
        for (i, spread) in spreads.iter().enumerate() {
            prop_assert_eq!(spread.left_page, i as u32 * 2 + 1);
            prop_assert_eq!(spread.right_page, i as u32 * 2 + 2);
        }
    }

    /// There is always at least one spread, and left pages are never empty
    /// when the content itself was readable
    #[test]
    fn prop_reader_always_has_something_to_show(content in paragraphs_strategy()) {
        let spreads = paginate(&content, "T", Language::English);
        prop_assert!(!spreads.is_empty());
        prop_assert!(!spreads[0].left_text.is_empty());
    }

    /// Decorations always come from the fixed catalogues
    #[test]
    fn prop_decorations_come_from_catalogue(content in paragraphs_strategy()) {
        for spread in paginate(&content, "T", Language::English) {
            prop_assert!(BACKGROUNDS.contains(&spread.left_background.as_str()));
            prop_assert!(BACKGROUNDS.contains(&spread.right_background.as_str()));
            prop_assert!(SCENES.contains(&spread.scene.as_str()));
            prop_assert_eq!(spread.left_emojis.len(), 3);
            prop_assert_eq!(spread.right_emojis.len(), 3);
        }
    }

    /// Merged pages respect the character budget (plus the separator added
    /// by the final merge) unless a single paragraph already exceeds it
    #[test]
    fn prop_pages_respect_budget(content in paragraphs_strategy()) {
        for page in split_into_pages(&content) {
            let single_paragraph = !page.contains("\n\n");
            prop_assert!(page.chars().count() < PAGE_CHAR_BUDGET + 2 || single_paragraph);
        }
    }

    /// No surviving page is below the noise threshold
    #[test]
    fn prop_no_noise_pages(content in paragraphs_strategy()) {
        for page in split_into_pages(&content) {
            prop_assert!(page.chars().count() > MIN_PARAGRAPH_CHARS);
        }
    }

    /// Rejoining the pages reproduces the cleaned content, minus the
    /// fragments dropped as noise
    #[test]
    fn prop_pages_rejoin_to_cleaned_content(content in mixed_paragraphs_strategy()) {
        let cleaned = clean_story_content(&content);
        let kept: Vec<&str> = cleaned
            .split("\n\n")
            .filter(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)
            .collect();
        let pages = split_into_pages(&cleaned);
        prop_assert_eq!(pages.join("\n\n"), kept.join("\n\n"));
    }

    /// The reader's spread texts carry the whole story: concatenated
    /// left/right pages equal the cleaned content
    #[test]
    fn prop_spread_texts_rejoin_to_cleaned_content(content in paragraphs_strategy()) {
        let cleaned = clean_story_content(&content);
        let spreads = paginate(&content, "T", Language::English);
        let texts: Vec<String> = spreads
            .iter()
            .flat_map(|s| [s.left_text.clone(), s.right_text.clone()])
            .filter(|t| !t.is_empty())
            .collect();
        prop_assert_eq!(texts.join("\n\n"), cleaned);
    }
}
