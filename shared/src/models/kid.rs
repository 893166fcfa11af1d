//! Kid profile models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Compact kid view embedded in story responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KidSummary {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
}
