//! Error types for scanning operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a scan.
///
/// A scanner that hit one of these stays uninitialized; queries against
/// it return empty results.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The working directory needed to resolve a relative root is unavailable.
    #[error("Cannot resolve working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    /// More nodes than a handle can address.
    #[error("Too many nodes ({nodes}) for one scan")]
    CapacityExceeded { nodes: usize },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Check whether this error only denies access to one subtree.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A directory could not be opened; its subtree was skipped.
    PermissionDenied,
    /// A file's metadata could not be read; its size is recorded as 0.
    MetadataError,
    /// An entry name is not valid UTF-8; the entry was ignored.
    InvalidName,
}

/// Non-fatal condition encountered during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a permission denied warning.
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let message = format!("Permission denied: {}", path.display());
        Self::new(path, message, WarningKind::PermissionDenied)
    }

    /// Create a metadata error warning.
    pub fn metadata_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self::new(path, format!("Metadata error: {error}"), WarningKind::MetadataError)
    }

    /// Create a warning for an entry whose name is not valid UTF-8.
    pub fn invalid_name(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let message = format!("Name is not valid UTF-8: {}", path.display());
        Self::new(path, message, WarningKind::InvalidName)
    }
}
