//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Supported story languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bengali,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Bengali => "bn",
            Language::English => "en",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Bengali => "bengali",
            Language::English => "english",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bengali" | "bn" => Some(Language::Bengali),
            "english" | "en" => Some(Language::English),
            _ => None,
        }
    }
}

/// Gender of a kid profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
            Gender::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "boy" => Some(Gender::Boy),
            "girl" => Some(Gender::Girl),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Subscription plan of a parent account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Monthly,
    Yearly,
    Lifetime,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Monthly => "monthly",
            Plan::Yearly => "yearly",
            Plan::Lifetime => "lifetime",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(Plan::Free),
            "monthly" => Some(Plan::Monthly),
            "yearly" => Some(Plan::Yearly),
            "lifetime" => Some(Plan::Lifetime),
            _ => None,
        }
    }
}

/// Kind of story to generate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    #[default]
    Adventure,
    Fairytale,
    Educational,
    Bedtime,
    Moral,
    Fantasy,
    Reallife,
}

impl StoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryType::Adventure => "adventure",
            StoryType::Fairytale => "fairytale",
            StoryType::Educational => "educational",
            StoryType::Bedtime => "bedtime",
            StoryType::Moral => "moral",
            StoryType::Fantasy => "fantasy",
            StoryType::Reallife => "reallife",
        }
    }
}

/// Requested story length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// Word and paragraph budget derived from a story length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthConfig {
    pub words: u32,
    pub paragraphs: u32,
    pub words_per_paragraph: u32,
}

impl StoryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
        }
    }

    /// Word/paragraph budget for the generation prompt
    pub fn config(&self) -> LengthConfig {
        match self {
            StoryLength::Short => LengthConfig {
                words: 600,
                paragraphs: 5,
                words_per_paragraph: 120,
            },
            StoryLength::Medium => LengthConfig {
                words: 1200,
                paragraphs: 10,
                words_per_paragraph: 120,
            },
            StoryLength::Long => LengthConfig {
                words: 1800,
                paragraphs: 15,
                words_per_paragraph: 120,
            },
        }
    }
}

/// Mood of the generated story
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Calm,
    Exciting,
    Thoughtful,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Exciting => "exciting",
            Mood::Thoughtful => "thoughtful",
        }
    }
}

/// Cosmetic book theme applied by the reading UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookTheme {
    #[default]
    Sparkle,
    Bubbles,
    Rainbow,
    Starry,
    Hearts,
    Forest,
    Ocean,
    Candy,
    Butterfly,
    Space,
    Classic,
}

impl BookTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookTheme::Sparkle => "sparkle",
            BookTheme::Bubbles => "bubbles",
            BookTheme::Rainbow => "rainbow",
            BookTheme::Starry => "starry",
            BookTheme::Hearts => "hearts",
            BookTheme::Forest => "forest",
            BookTheme::Ocean => "ocean",
            BookTheme::Candy => "candy",
            BookTheme::Butterfly => "butterfly",
            BookTheme::Space => "space",
            BookTheme::Classic => "classic",
        }
    }
}
