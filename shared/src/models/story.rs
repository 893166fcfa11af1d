//! Story text utilities
//!
//! Generated stories arrive as free text that occasionally carries JSON
//! debris from the model response. These helpers normalize the text before
//! it is stored or paginated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words-per-minute assumed for a child reader
pub const CHILD_READING_WPM: u32 = 100;

static MORAL_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is),?\s*"moral_lesson"\s*:.*$"#).expect("valid regex"));
static QUIZ_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is),?\s*"quiz"\s*:\s*\[.*$"#).expect("valid regex"));
static TRAILING_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\}\s*$").expect("valid regex"));
static JSON_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*\{\s*"title"\s*:\s*"[^"]*"\s*,?\s*"content"\s*:\s*""#)
        .expect("valid regex")
});
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Strip JSON debris and escape sequences from story content
pub fn clean_story_content(content: &str) -> String {
    let mut text = content.to_string();

    text = MORAL_TAIL.replace(&text, "").into_owned();
    text = QUIZ_TAIL.replace(&text, "").into_owned();
    text = TRAILING_BRACE.replace(&text, "").into_owned();
    text = JSON_HEAD.replace(&text, "").into_owned();

    // Unescape sequences left over from a raw JSON string
    text = text
        .replace("\\n\\n", "\n\n")
        .replace("\\n", "\n")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\");

    let text = text
        .trim()
        .trim_start_matches(['"', '\''])
        .trim_end_matches(['"', '\'']);

    EXCESS_NEWLINES.replace_all(text, "\n\n").trim().to_string()
}

/// Count words by whitespace splitting
pub fn word_count(content: &str) -> u32 {
    content.split_whitespace().count() as u32
}

/// Estimated reading time in minutes, rounded up
pub fn reading_time_minutes(words: u32) -> u32 {
    words.div_ceil(CHILD_READING_WPM)
}
