//! Error types for the content configuration boundary.
//!
//! Merging, building and rendering are total. The only fallible edges are
//! parsing flat field names and loading overrides from JSON.

use std::path::PathBuf;

use thiserror::Error;

/// A flat field name that is not one of the recognised content fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content field `{name}`")]
pub struct FieldNameError {
    /// The name as it was given
    pub name: String,
}

/// Failure to load [`ContentOverrides`](crate::ContentOverrides) from JSON.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The text is not a flat JSON object of string values
    #[error("invalid content overrides JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The overrides file could not be read
    #[error("failed to read content overrides from {}: {source}", path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
