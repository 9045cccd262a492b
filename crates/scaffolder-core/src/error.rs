//! Error types for template materialization and synchronization

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the core tree operations
///
/// Every variant is fatal to the operation that produced it. Nothing is retried
/// and already-written files are left in place.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// User input failed a format or existence check; nothing was touched
    #[error("{0}")]
    Validation(String),

    /// A template or source tree entry could not be read
    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination file or directory could not be created, written or erased
    #[error("Failed to write {}: {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The synchronization manifest could not be read
    #[error("Failed to read sync manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The synchronization manifest is not valid YAML for a manifest
    #[error("Invalid sync manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ScaffoldError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn source_read(path: &Path, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn destination_write(path: &Path, source: std::io::Error) -> Self {
        Self::DestinationWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for errors raised before any filesystem mutation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
