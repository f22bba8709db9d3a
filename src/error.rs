//! Error handling types and utilities.

use crate::entity::Kind;
use std::path::PathBuf;

/// A specialized Result type for application-level operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary and the reload worker.
pub type Result<T> = anyhow::Result<T>;

/// Error returned by exact lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No entity of the requested kind carries this name.
    #[error("Cannot find a {kind} named '{name}'")]
    NotFound { kind: Kind, name: String },
}

/// Error returned when loading a documentation corpus fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The corpus file could not be read.
    #[error("Failed to read corpus at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The corpus file is not a valid entity list.
    #[error("Failed to parse corpus at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
