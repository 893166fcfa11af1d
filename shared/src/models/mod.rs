//! Domain models for the Magical Tales storybook platform

mod kid;
mod pages;
mod quiz;
mod story;

pub use kid::*;
pub use pages::*;
pub use quiz::*;
pub use story::*;
