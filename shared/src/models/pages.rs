//! Book pagination engine
//!
//! Turns flat story text into two-page "spreads" for the page-turning
//! reader: paragraphs are merged up to a per-page character budget, paired
//! left/right, and decorated with rotating backgrounds, scenes, and emoji
//! sets from a fixed catalogue.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::story::clean_story_content;
use crate::types::Language;

/// Fragments at or below this length are treated as noise and dropped
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// Character budget for one book page
pub const PAGE_CHAR_BUDGET: usize = 350;

/// Illustration backgrounds rotated across pages
pub const BACKGROUNDS: [&str; 6] = ["forest", "night", "sunset", "magical", "water", "golden"];

/// Ambient scenes rotated across spreads
pub const SCENES: [&str; 5] = ["night", "forest", "water", "magical", "sunset"];

/// Emoji decorations rotated across pages
pub const EMOJI_SETS: [[&str; 3]; 10] = [
    ["🌲", "🏠", "✨"],
    ["✨", "🌟", "💫"],
    ["🦊", "🐰", "🌳"],
    ["🗺️", "🧭", "🎒"],
    ["🌊", "💧", "🐟"],
    ["🍃", "🛶", "🎉"],
    ["🧚", "✨", "🌳"],
    ["❤️", "🤝", "💪"],
    ["🌸", "💐", "🌺"],
    ["🌙", "⭐", "💫"],
];

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// One open spread of the book: a left and a right page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpread {
    pub left_chapter: String,
    pub left_text: String,
    pub left_background: String,
    pub left_emojis: Vec<String>,
    pub left_page: u32,
    pub right_chapter: String,
    pub right_text: String,
    pub right_background: String,
    pub right_emojis: Vec<String>,
    pub right_page: u32,
    pub scene: String,
}

fn page_header(language: Language, page_number: u32) -> String {
    match language {
        Language::Bengali => format!("পৃষ্ঠা {}", page_number),
        Language::English => format!("Page {}", page_number),
    }
}

fn closing_header(language: Language) -> &'static str {
    match language {
        Language::Bengali => "সমাপ্ত",
        Language::English => "The End",
    }
}

fn closing_text(language: Language) -> &'static str {
    match language {
        Language::Bengali => "গল্প শেষ! আশা করি ভালো লেগেছে! 🌟",
        Language::English => "The story is over. Hope you loved it! 🌟",
    }
}

fn emoji_set(index: usize) -> Vec<String> {
    EMOJI_SETS[index % EMOJI_SETS.len()]
        .iter()
        .map(|e| e.to_string())
        .collect()
}

/// Split cleaned content into display paragraphs, merging short ones
/// until the page character budget is reached
pub fn split_into_pages(content: &str) -> Vec<String> {
    let paragraphs: Vec<&str> = PARAGRAPH_BREAK
        .split(content)
        .map(str::trim)
        .filter(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect();

    let mut merged: Vec<String> = Vec::new();
    let mut current = String::new();

    for para in paragraphs {
        if current.chars().count() + para.chars().count() < PAGE_CHAR_BUDGET {
            if current.is_empty() {
                current = para.to_string();
            } else {
                current.push_str("\n\n");
                current.push_str(para);
            }
        } else {
            if !current.is_empty() {
                merged.push(current);
            }
            current = para.to_string();
        }
    }
    if !current.is_empty() {
        merged.push(current);
    }

    merged
}

/// Paginate story content into book spreads
pub fn paginate(content: &str, title: &str, language: Language) -> Vec<PageSpread> {
    let cleaned = clean_story_content(content);
    let pages = split_into_pages(&cleaned);

    let mut spreads = Vec::new();

    for (spread_index, pair) in pages.chunks(2).enumerate() {
        let left = pair.first().cloned().unwrap_or_default();
        let right = pair.get(1).cloned().unwrap_or_default();
        let left_page = spread_index as u32 * 2 + 1;
        let right_page = left_page + 1;

        spreads.push(PageSpread {
            left_chapter: if spread_index == 0 {
                title.to_string()
            } else {
                page_header(language, left_page)
            },
            left_text: left,
            left_background: BACKGROUNDS[spread_index % BACKGROUNDS.len()].to_string(),
            left_emojis: emoji_set(spread_index),
            left_page,
            right_chapter: page_header(language, right_page),
            right_text: right,
            right_background: BACKGROUNDS[(spread_index + 1) % BACKGROUNDS.len()].to_string(),
            right_emojis: emoji_set(spread_index + 1),
            right_page,
            scene: SCENES[spread_index % SCENES.len()].to_string(),
        });
    }

    if spreads.is_empty() {
        // Content too short to paginate: single spread with a closing page
        spreads.push(PageSpread {
            left_chapter: title.to_string(),
            left_text: if cleaned.is_empty() {
                content.trim().to_string()
            } else {
                cleaned
            },
            left_background: "forest".to_string(),
            left_emojis: vec!["📚".to_string(), "✨".to_string(), "🌟".to_string()],
            left_page: 1,
            right_chapter: closing_header(language).to_string(),
            right_text: closing_text(language).to_string(),
            right_background: "magical".to_string(),
            right_emojis: vec!["🎉".to_string(), "💫".to_string(), "❤️".to_string()],
            right_page: 2,
            scene: "night".to_string(),
        });
    }

    spreads
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    #[test]
    fn test_short_fragments_dropped() {
        let content = format!("tiny\n\n{}", paragraph(40));
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 1);
        assert!(!pages[0].contains("tiny"));
    }

    #[test]
    fn test_small_paragraphs_merge() {
        let content = format!("{}\n\n{}", paragraph(10), paragraph(10));
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("\n\n"));
    }

    #[test]
    fn test_large_paragraphs_stay_separate() {
        let big = paragraph(80); // 5 chars per word: ~400 chars
        let content = format!("{}\n\n{}", big, big);
        let pages = split_into_pages(&content);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_spreads_pair_pages() {
        let big = paragraph(80);
        let content = format!("{}\n\n{}\n\n{}", big, big, big);
        let spreads = paginate(&content, "The Fox", Language::English);
        assert_eq!(spreads.len(), 2);
        assert_eq!(spreads[0].left_chapter, "The Fox");
        assert_eq!(spreads[0].left_page, 1);
        assert_eq!(spreads[0].right_page, 2);
        assert_eq!(spreads[1].left_chapter, "Page 3");
        assert_eq!(spreads[1].right_text, "");
    }

    #[test]
    fn test_bengali_page_headers() {
        let big = paragraph(80);
        let content = format!("{}\n\n{}\n\n{}", big, big, big);
        let spreads = paginate(&content, "শিয়ালের গল্প", Language::Bengali);
        assert_eq!(spreads[1].left_chapter, "পৃষ্ঠা 3");
    }

    #[test]
    fn test_empty_content_gets_closing_spread() {
        let spreads = paginate("", "Empty", Language::English);
        assert_eq!(spreads.len(), 1);
        assert_eq!(spreads[0].right_chapter, "The End");
    }

    #[test]
    fn test_decorations_rotate() {
        let big = paragraph(80);
        let content = vec![big; 14].join("\n\n");
        let spreads = paginate(&content, "Long", Language::English);
        assert_eq!(spreads.len(), 7);
        assert_eq!(spreads[0].left_background, "forest");
        assert_eq!(spreads[6].left_background, BACKGROUNDS[6 % 6]);
        assert_eq!(spreads[0].scene, SCENES[0]);
        assert_eq!(spreads[5].scene, SCENES[5 % 5]);
    }
}
