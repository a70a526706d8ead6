//! Error types for solrq-core.

use std::path::{Path, PathBuf};

/// Result type alias for Solrq operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing request parameters.
///
/// Building parameters never fails; these variants cover loading
/// configuration and the opt-in strict setters.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error while reading or writing a file
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File that could not be accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A setter received a value it cannot accept
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument that was rejected
        name: String,
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument<N, M>(name: N, message: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Error::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
