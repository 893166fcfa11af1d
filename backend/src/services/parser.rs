//! Model response parsing
//!
//! The provider is asked for JSON only, but real responses range from clean
//! JSON to JSON wrapped in markdown fences to half-escaped prose. Parsing
//! runs three strategies in order, then falls back to treating the whole
//! response as story text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use shared::models::QuizQuestionPayload;
use shared::types::Language;

/// A story recovered from a model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStory {
    pub title: String,
    pub content: String,
    pub moral_lesson: String,
    pub quiz: Vec<QuizQuestionPayload>,
}

/// Request context used when the response cannot be parsed as JSON
#[derive(Debug, Clone)]
pub struct ParseFallback<'a> {
    pub kid_name: &'a str,
    pub requested_title: Option<&'a str>,
    pub language: Language,
    pub moral: &'a str,
}

#[derive(Debug, Deserialize)]
struct RawStory {
    title: Option<String>,
    content: Option<String>,
    moral_lesson: Option<String>,
    quiz: Option<Vec<RawQuizQuestion>>,
}

#[derive(Debug, Deserialize)]
struct RawQuizQuestion {
    question: Option<String>,
    options: Option<Vec<String>>,
    correct_answer: Option<String>,
}

static JSON_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));
static TITLE_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""title"\s*:\s*"([^"]+)""#).expect("valid regex"));
static CONTENT_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"content"\s*:\s*"(.*?)"\s*[,}]"#).expect("valid regex"));
static MORAL_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""moral_lesson"\s*:\s*"([^"]+)""#).expect("valid regex"));
static QUIZ_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"quiz"\s*:\s*\[(.*?)\]"#).expect("valid regex"));

/// Remove markdown code fences around a response
pub fn strip_code_fences(response: &str) -> &str {
    let mut text = response.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

fn normalize_quiz(raw: Option<Vec<RawQuizQuestion>>) -> Vec<QuizQuestionPayload> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(|q| {
            let question = q.question?;
            let options = q.options.unwrap_or_default();
            // Missing answer key defaults to the first option
            let correct_answer = q
                .correct_answer
                .or_else(|| options.first().cloned())
                .unwrap_or_default();
            Some(QuizQuestionPayload {
                question,
                options,
                correct_answer,
            })
        })
        .collect()
}

fn from_raw(raw: RawStory, fallback: &ParseFallback) -> Option<ParsedStory> {
    let title = raw.title?;
    let content = raw.content?;
    if title.trim().is_empty() || content.trim().is_empty() {
        return None;
    }
    Some(ParsedStory {
        title,
        content,
        moral_lesson: raw
            .moral_lesson
            .unwrap_or_else(|| fallback.moral.to_string()),
        quiz: normalize_quiz(raw.quiz),
    })
}

fn default_title(fallback: &ParseFallback) -> String {
    if let Some(title) = fallback.requested_title {
        if !title.trim().is_empty() {
            return title.trim().to_string();
        }
    }
    match fallback.language {
        Language::Bengali => format!("{}-এর অভিযান", fallback.kid_name),
        Language::English => format!("{}'s Adventure", fallback.kid_name),
    }
}

/// Parse a model response into a story, trying progressively looser
/// strategies before giving up and keeping the raw text
pub fn parse_model_response(response: &str, fallback: &ParseFallback) -> ParsedStory {
    let cleaned = strip_code_fences(response);

    // Strategy 1: direct JSON parse
    if let Ok(raw) = serde_json::from_str::<RawStory>(cleaned) {
        if let Some(story) = from_raw(raw, fallback) {
            return story;
        }
    }

    // Strategy 2: extract the outermost JSON block and parse that
    if let Some(block) = JSON_BLOCK.find(response) {
        if let Ok(raw) = serde_json::from_str::<RawStory>(block.as_str()) {
            if let Some(story) = from_raw(raw, fallback) {
                return story;
            }
        }
    }

    // Strategy 3: field-level extraction
    if let (Some(title), Some(content)) = (
        TITLE_FIELD.captures(response),
        CONTENT_FIELD.captures(response),
    ) {
        let quiz = QUIZ_FIELD
            .captures(response)
            .and_then(|c| {
                serde_json::from_str::<Vec<RawQuizQuestion>>(&format!("[{}]", &c[1])).ok()
            })
            .map(|raw| normalize_quiz(Some(raw)))
            .unwrap_or_default();

        return ParsedStory {
            title: title[1].to_string(),
            content: content[1].replace("\\n", "\n").replace("\\\"", "\""),
            moral_lesson: MORAL_FIELD
                .captures(response)
                .map(|c| c[1].to_string())
                .unwrap_or_else(|| fallback.moral.to_string()),
            quiz,
        };
    }

    // Fallback: keep the raw text as content
    ParsedStory {
        title: default_title(fallback),
        content: response.replace("```json", "").replace("```", "").trim().to_string(),
        moral_lesson: fallback.moral.to_string(),
        quiz: Vec::new(),
    }
}
