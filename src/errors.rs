//! Error types for the ambient parts of adops.
//!
//! Calculations never fail; a missing value is an [`Outcome::Message`]. The
//! errors here cover configuration files, the `init` command and terminal
//! setup.
//!
//! [`Outcome::Message`]: crate::core::Outcome::Message

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for adops operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be parsed or failed validation
    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// `init` refused to overwrite an existing file
    #[error("Configuration file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    /// Create a configuration error for a file
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
