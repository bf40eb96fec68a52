//! Error type for the structural failures the engine surfaces to callers.
//!
//! Bad *content* (unknown actions, out-of-range indices, unmatched grid
//! boundaries) never reaches this type; it is absorbed during replay.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid state document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The action log exceeds the configured maximum.
    #[error("action log has {count} entries, limit is {max}")]
    TooManyActions { count: usize, max: usize },

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("refusing to delete the default LocalState folder {}", path.display())]
    DefaultFolder { path: PathBuf },

    /// A folder name that is empty, a path, or would land inside its source.
    #[error("invalid folder name '{0}'")]
    InvalidFolderName(String),

    #[error("{} already exists", path.display())]
    FolderExists { path: PathBuf },
}
