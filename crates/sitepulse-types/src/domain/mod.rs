pub mod analytics;
pub mod contact;
pub mod media;
pub mod post;
pub mod project;
pub mod service;
pub mod settings;
pub mod team;

pub use analytics::*;
pub use contact::*;
pub use media::*;
pub use post::*;
pub use project::*;
pub use service::*;
pub use settings::*;
pub use team::*;

use serde::{Deserialize, Serialize};

/// Editorial lifecycle shared by services, projects, and posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Draft,
    Published,
}

impl Default for PublishStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStatus::Draft => write!(f, "draft"),
            PublishStatus::Published => write!(f, "published"),
        }
    }
}
