//! Errors raised while building or writing an addon.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddonError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("recipe ingredient '{item_id}' must have a count of at least 1, got {count}")]
    InvalidIngredientCount { item_id: String, count: u32 },
}

impl AddonError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = AddonError> = std::result::Result<T, E>;
