//! Prompt construction for story generation
//!
//! Builds the system and user prompts sent to the model provider. The
//! catalogues below give each setting, moral, and story type a short
//! bilingual description so the prompt reads naturally in both languages.

use shared::types::{Gender, Language, Mood, StoryLength, StoryType};

/// Parameters for building a story prompt
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub kid_name: String,
    pub gender: Gender,
    pub age: i32,
    pub language: Language,
    pub story_type: StoryType,
    pub length: StoryLength,
    pub setting: String,
    pub moral: String,
    pub mood: Mood,
    pub include_quiz: bool,
}

/// (key, bengali, english) description triples
type Catalogue = &'static [(&'static str, &'static str, &'static str)];

const SETTINGS: Catalogue = &[
    (
        "magical_forest",
        "রহস্যময় জাদুর বন যেখানে গাছপালা কথা বলে, পরীরা উড়ে বেড়ায়",
        "a mysterious magical forest where trees whisper and fairies flutter",
    ),
    (
        "underwater",
        "গভীর সমুদ্রের নিচে রঙিন প্রবাল আর মাছেদের রাজ্য",
        "deep underwater kingdom with colorful corals and talking fish",
    ),
    (
        "space",
        "তারায় ভরা মহাকাশে অজানা গ্রহের অভিযান",
        "a journey through starry space to unknown planets",
    ),
    (
        "kingdom",
        "প্রাচীন রাজপ্রাসাদ যেখানে রাজা-রানী আর রাজকুমার-রাজকুমারী থাকে",
        "an ancient royal palace with kings, queens, princes and princesses",
    ),
    (
        "village",
        "সবুজ গ্রাম যেখানে নদী বয়ে যায়, পাখিরা গান গায়",
        "a green village where rivers flow and birds sing",
    ),
    (
        "school",
        "রঙিন স্কুল যেখানে বন্ধুরা একসাথে শেখে আর খেলে",
        "a colorful school where friends learn and play together",
    ),
    ("home", "উষ্ণ পরিবারের মায়াময় বাড়ি", "a warm, loving family home"),
];

const MORALS: Catalogue = &[
    ("friendship", "সত্যিকারের বন্ধুত্বের মূল্য", "the value of true friendship"),
    ("honesty", "সততার শক্তি", "the power of honesty"),
    ("courage", "সাহস দেখানোর গুরুত্ব", "the importance of showing courage"),
    ("kindness", "দয়া ও সহানুভূতি", "kindness and compassion"),
    ("sharing", "ভাগ করে নেওয়ার আনন্দ", "the joy of sharing"),
    ("responsibility", "দায়িত্ববোধ", "sense of responsibility"),
    ("teamwork", "একসাথে কাজ করার শক্তি", "the power of working together"),
];

const STORY_TYPES: Catalogue = &[
    ("adventure", "রোমাঞ্চকর অ্যাডভেঞ্চার", "thrilling adventure"),
    ("fairytale", "জাদুময় রূপকথা", "magical fairy tale"),
    ("educational", "শিক্ষণীয় গল্প", "educational story"),
    ("bedtime", "মিষ্টি ঘুমপাড়ানি গল্প", "sweet bedtime story"),
    ("moral", "নৈতিক শিক্ষার গল্প", "moral story"),
    ("fantasy", "কল্পনার রাজ্যের গল্প", "fantasy story"),
    ("reallife", "বাস্তব জীবনের গল্প", "story from everyday life"),
];

fn lookup(catalogue: Catalogue, key: &str, language: Language) -> &'static str {
    let entry = catalogue
        .iter()
        .find(|(k, _, _)| *k == key)
        .unwrap_or(&catalogue[0]);
    match language {
        Language::Bengali => entry.1,
        Language::English => entry.2,
    }
}

fn mood_description(mood: Mood, language: Language) -> &'static str {
    match (language, mood) {
        (Language::Bengali, Mood::Happy) => "হাসিখুশি ও আনন্দময়",
        (Language::Bengali, Mood::Exciting) => "উত্তেজনাপূর্ণ",
        (Language::Bengali, Mood::Calm) => "শান্ত ও প্রশান্ত",
        (Language::Bengali, Mood::Thoughtful) => "চিন্তাশীল",
        (Language::English, mood) => mood.as_str(),
    }
}

/// System prompt establishing the storyteller persona
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Bengali => {
            "তুমি বাংলাদেশের একজন বিখ্যাত শিশুসাহিত্যিক। তুমি উপেন্দ্রকিশোর রায়চৌধুরী, সুকুমার রায়, এবং রবীন্দ্রনাথের মতো সুন্দর বাংলায় গল্প লেখো।\n\n\
             তোমার লেখার বৈশিষ্ট্য:\n\
             • সহজ, সরল বাংলা ভাষা যা ৩-১২ বছরের বাচ্চারা বুঝতে পারে\n\
             • প্রাণবন্ত বর্ণনা - দৃশ্য যেন চোখে ভাসে\n\
             • চরিত্রদের মধ্যে স্বাভাবিক সংলাপ\n\
             • আবেগ ও অনুভূতির প্রকাশ\n\
             • প্রতিটি অনুচ্ছেদ কমপক্ষে ১০০ শব্দের\n\
             • গল্পে উত্থান-পতন ও চমক\n\
             • শেষে সুন্দর শিক্ষা\n\n\
             তুমি সবসময় শুধু valid JSON ফরম্যাটে উত্তর দাও। কোনো অতিরিক্ত ব্যাখ্যা বা markdown দাও না।"
        }
        Language::English => {
            "You are an award-winning children's story writer. You write like Roald Dahl, Dr. Seuss, and classic fairy tale authors.\n\n\
             Your writing style:\n\
             • Simple, engaging language for ages 3-12\n\
             • Vivid, colorful descriptions that paint pictures\n\
             • Natural dialogue between characters\n\
             • Express emotions and feelings clearly\n\
             • Each paragraph is at least 100 words\n\
             • Stories have twists and surprises\n\
             • Clear moral lesson at the end\n\n\
             Always respond with valid JSON only. No explanations or markdown."
        }
    }
}

/// Build the user prompt for one story request
pub fn build_story_prompt(params: &PromptParams) -> String {
    let cfg = params.length.config();
    let setting = lookup(SETTINGS, &params.setting, params.language);
    let moral = lookup(MORALS, &params.moral, params.language);
    let story_type = lookup(STORY_TYPES, params.story_type.as_str(), params.language);
    let mood = mood_description(params.mood, params.language);

    let quiz_block = quiz_format(params.language, params.include_quiz);

    match params.language {
        Language::Bengali => {
            let gender_word = match params.gender {
                Gender::Girl => "মেয়ের",
                _ => "ছেলের",
            };
            format!(
                "{name} নামের {age} বছরের এক {gender_word} জন্য একটি {story_type} লেখো।\n\n\
                 গল্পের পটভূমি: {setting}\n\
                 গল্পের মেজাজ: {mood}\n\
                 শিক্ষা: {moral}\n\n\
                 লেখার নিয়ম:\n\
                 • মোট {words} শব্দের গল্প লিখবে\n\
                 • {paragraphs}টি আলাদা প্যারাগ্রাফে ভাগ করবে (প্রতিটি প্যারাগ্রাফ কমপক্ষে {words_per} শব্দ)\n\
                 • {name} প্রধান চরিত্র, কিন্তু প্রতি বাক্যে নাম ব্যবহার করবে না\n\
                 • \"সে\", \"তার\", \"ও\" ইত্যাদি সর্বনাম ব্যবহার করো\n\
                 • গল্প বিভিন্নভাবে শুরু করো - \"একদিন\", \"সেই গ্রামে\", \"অনেক দিন আগে\"\n\
                 • চরিত্রদের মধ্যে সংলাপ থাকবে\n\
                 • দৃশ্যের বর্ণনা থাকবে - রং, গন্ধ, শব্দ, অনুভূতি\n\
                 • গল্পে উত্থান-পতন থাকবে - সমস্যা ও সমাধান\n\
                 • শেষে সুন্দর একটি উপসংহার\n\n\
                 JSON ফরম্যাট:\n\
                 {{\n\
                   \"title\": \"বাংলায় গল্পের শিরোনাম\",\n\
                   \"content\": \"প্রথম প্যারাগ্রাফ...\\n\\nদ্বিতীয় প্যারাগ্রাফ...\\n\\n...আরও প্যারাগ্রাফ\",\n\
                   \"moral_lesson\": \"গল্পের শিক্ষা\"{quiz_block}\n\
                 }}\n\n\
                 শুধু JSON দাও, অন্য কিছু না।",
                name = params.kid_name,
                age = params.age,
                words = cfg.words,
                paragraphs = cfg.paragraphs,
                words_per = cfg.words_per_paragraph,
            )
        }
        Language::English => {
            let pronouns = match params.gender {
                Gender::Girl => "she/her",
                Gender::Boy => "he/him",
                Gender::Other => "they/them",
            };
            format!(
                "Write a {story_type} for a {age}-year-old {gender} named {name}.\n\n\
                 Setting: {setting}\n\
                 Mood: {mood}\n\
                 Moral: {moral}\n\n\
                 Writing Guidelines:\n\
                 • Total {words} words\n\
                 • {paragraphs} separate paragraphs (each at least {words_per} words)\n\
                 • {name} is the main character, but DON'T use their name in every sentence\n\
                 • Use pronouns naturally: {pronouns}\n\
                 • Start the story in varied ways - \"One day\", \"In a faraway land\", \"As the sun rose\"\n\
                 • Include dialogue between characters\n\
                 • Describe scenes vividly - colors, sounds, feelings\n\
                 • Have a problem and solution\n\
                 • End with a satisfying conclusion\n\n\
                 JSON Format:\n\
                 {{\n\
                   \"title\": \"Story Title\",\n\
                   \"content\": \"First paragraph...\\n\\nSecond paragraph...\\n\\n...more paragraphs\",\n\
                   \"moral_lesson\": \"The lesson from the story\"{quiz_block}\n\
                 }}\n\n\
                 Return ONLY valid JSON.",
                name = params.kid_name,
                age = params.age,
                gender = params.gender.as_str(),
                words = cfg.words,
                paragraphs = cfg.paragraphs,
                words_per = cfg.words_per_paragraph,
            )
        }
    }
}

fn quiz_format(language: Language, include_quiz: bool) -> &'static str {
    if !include_quiz {
        return "";
    }
    match language {
        Language::Bengali => {
            ",\n  \"quiz\": [\n    {\n      \"question\": \"গল্প থেকে প্রশ্ন?\",\n      \"options\": [\"উত্তর ১\", \"উত্তর ২\", \"উত্তর ৩\", \"উত্তর ৪\"],\n      \"correct_answer\": \"সঠিক উত্তর\"\n    },\n    {\n      \"question\": \"আরেকটি প্রশ্ন?\",\n      \"options\": [\"উত্তর ১\", \"উত্তর ২\", \"উত্তর ৩\", \"উত্তর ৪\"],\n      \"correct_answer\": \"সঠিক উত্তর\"\n    }\n  ]"
        }
        Language::English => {
            ",\n  \"quiz\": [\n    {\n      \"question\": \"Question about the story?\",\n      \"options\": [\"Option 1\", \"Option 2\", \"Option 3\", \"Option 4\"],\n      \"correct_answer\": \"Correct option\"\n    },\n    {\n      \"question\": \"Another question?\",\n      \"options\": [\"Option 1\", \"Option 2\", \"Option 3\", \"Option 4\"],\n      \"correct_answer\": \"Correct option\"\n    }\n  ]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PromptParams {
        PromptParams {
            kid_name: "Arya".to_string(),
            gender: Gender::Girl,
            age: 7,
            language: Language::English,
            story_type: StoryType::Adventure,
            length: StoryLength::Medium,
            setting: "magical_forest".to_string(),
            moral: "kindness".to_string(),
            mood: Mood::Happy,
            include_quiz: false,
        }
    }

    #[test]
    fn test_prompt_contains_kid_and_budget() {
        let prompt = build_story_prompt(&params());
        assert!(prompt.contains("Arya"));
        assert!(prompt.contains("1200 words"));
        assert!(prompt.contains("10 separate paragraphs"));
        assert!(prompt.contains("she/her"));
    }

    #[test]
    fn test_quiz_block_only_when_requested() {
        let without = build_story_prompt(&params());
        assert!(!without.contains("\"quiz\""));

        let mut with_quiz = params();
        with_quiz.include_quiz = true;
        let with = build_story_prompt(&with_quiz);
        assert!(with.contains("\"quiz\""));
        assert!(with.contains("correct_answer"));
    }

    #[test]
    fn test_bengali_prompt_is_bengali() {
        let mut p = params();
        p.language = Language::Bengali;
        p.kid_name = "মিতা".to_string();
        let prompt = build_story_prompt(&p);
        assert!(prompt.contains("মিতা"));
        assert!(prompt.contains("মেয়ের"));
        assert!(prompt.contains("JSON"));
        assert!(!prompt.contains("Writing Guidelines"));
    }

    #[test]
    fn test_unknown_setting_falls_back() {
        let mut p = params();
        p.setting = "volcano".to_string();
        let prompt = build_story_prompt(&p);
        assert!(prompt.contains("magical forest"));
    }

    #[test]
    fn test_system_prompt_enforces_json() {
        assert!(system_prompt(Language::English).contains("valid JSON only"));
        assert!(system_prompt(Language::Bengali).contains("JSON"));
    }
}
