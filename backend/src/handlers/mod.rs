//! HTTP handlers

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod kid;
pub mod share;
pub mod story;

pub use auth::*;
pub use dashboard::*;
pub use health::*;
pub use kid::*;
pub use share::*;
pub use story::*;
