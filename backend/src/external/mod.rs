//! External API integrations

pub mod story_model;

pub use story_model::StoryModelClient;
