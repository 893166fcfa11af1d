//! Business logic services

pub mod auth;
pub mod dashboard;
pub mod kid;
pub mod parser;
pub mod prompt;
pub mod share;
pub mod story;

pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use kid::KidService;
pub use share::ShareService;
pub use story::StoryService;
