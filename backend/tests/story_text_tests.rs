//! Tests for story text cleaning and reading metrics

use proptest::prelude::*;
use shared::{clean_story_content, reading_time_minutes, word_count, CHILD_READING_WPM};

// =============================================================================
// Content cleaning tests
// Generated stories sometimes arrive with JSON debris around the actual text
// =============================================================================

mod cleaning {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = "Once upon a time there was a brave girl.\n\nShe lived near a forest.";
        assert_eq!(clean_story_content(text), text);
    }

    #[test]
    fn moral_lesson_tail_removed() {
        let raw = "The story ends here.\",\n\"moral_lesson\": \"Always be honest\"}";
        let cleaned = clean_story_content(raw);
        assert!(!cleaned.contains("moral_lesson"));
        assert!(!cleaned.contains("Always be honest"));
        assert!(cleaned.starts_with("The story ends here."));
    }

    #[test]
    fn quiz_tail_removed() {
        let raw = "Final paragraph of the story.\",\n\"quiz\": [{\"question\": \"Who was brave?\", \"options\": [\"A\"]}]}";
        let cleaned = clean_story_content(raw);
        assert!(!cleaned.contains("quiz"));
        assert!(!cleaned.contains("Who was brave?"));
    }

    #[test]
    fn json_head_removed() {
        let raw = "{\"title\": \"The River\", \"content\": \"By the river lived a frog.";
        assert_eq!(clean_story_content(raw), "By the river lived a frog.");
    }

    #[test]
    fn escaped_newlines_become_real_paragraph_breaks() {
        let raw = "First.\\n\\nSecond.";
        assert_eq!(clean_story_content(raw), "First.\n\nSecond.");
    }

    #[test]
    fn surrounding_quotes_trimmed() {
        assert_eq!(clean_story_content("\"A quoted story.\""), "A quoted story.");
    }

    #[test]
    fn bengali_text_survives_cleaning() {
        let raw = "এক দেশে ছিল এক ছোট্ট মেয়ে।\n\nসে প্রতিদিন নদীর ধারে খেলত।";
        assert_eq!(clean_story_content(raw), raw);
    }
}

// =============================================================================
// Reading metrics tests
// =============================================================================

mod reading_metrics {
    use super::*;

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced \n out \t words  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
        assert_eq!(reading_time_minutes(CHILD_READING_WPM), 1);
        assert_eq!(reading_time_minutes(CHILD_READING_WPM + 1), 2);
    }
}

// =============================================================================
// Property tests
// =============================================================================

fn story_text_strategy() -> impl Strategy<Value = String> {
    // Paragraphs of plain words, no JSON-ish characters
    proptest::collection::vec(
        proptest::collection::vec("[a-z]{3,8}", 5..30).prop_map(|words| words.join(" ")),
        1..6,
    )
    .prop_map(|paragraphs| paragraphs.join("\n\n"))
}

proptest! {
    /// Cleaning plain prose is stable: a second pass changes nothing
    #[test]
    fn prop_cleaning_plain_text_is_idempotent(text in story_text_strategy()) {
        let once = clean_story_content(&text);
        let twice = clean_story_content(&once);
        prop_assert_eq!(once, twice);
    }

    /// Cleaning never leaves more than one consecutive blank line
    #[test]
    fn prop_no_excess_blank_lines(text in story_text_strategy()) {
        let cleaned = clean_story_content(&text);
        prop_assert!(!cleaned.contains("\n\n\n"));
    }

    /// Cleaning plain prose preserves the word count
    #[test]
    fn prop_cleaning_preserves_words(text in story_text_strategy()) {
        prop_assert_eq!(word_count(&clean_story_content(&text)), word_count(&text));
    }

    /// A reader at the configured pace always finishes within the estimate
    #[test]
    fn prop_reading_time_covers_word_count(words in 0u32..100_000) {
        let minutes = reading_time_minutes(words);
        prop_assert!(minutes * CHILD_READING_WPM >= words);
        // Estimate is tight: one minute less would not be enough
        if minutes > 0 {
            prop_assert!((minutes - 1) * CHILD_READING_WPM < words);
        }
    }
}
