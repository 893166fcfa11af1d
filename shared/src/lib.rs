//! Shared types and models for the Magical Tales storybook platform
//!
//! This crate contains types shared between the backend, future client
//! components, and the test suites: domain enums, story text utilities,
//! the book pagination engine, and validation helpers.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
