//! Error types shared by every rotor writer

use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or writing logs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Level name could not be parsed
    #[error("Invalid log level: {0:?}")]
    InvalidLevel(String),

    /// A settings source held a malformed line or value
    #[error("Invalid setting {key}: {message}")]
    Settings {
        /// Key or line reference the problem was found at
        key: String,
        /// What was wrong with it
        message: String,
    },

    /// Failed to create log directory
    #[error("Failed to create log directory at {path}: {source}")]
    CreateDirectory {
        /// The path that failed to be created
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to open or create a log file (or read a settings file)
    #[error("Failed to open {path}: {source}")]
    Open {
        /// The file that could not be opened
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to list a log directory
    #[error("Failed to read log directory at {path}: {source}")]
    ReadDirectory {
        /// The directory that could not be listed
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Rotation was aborted; the record was still written to the active file
    #[error("Failed to rotate log file {path}: {source}")]
    Rotation {
        /// The active file that should have been rotated
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Appending a record to a log file failed
    #[error("Failed to write log file {path}: {source}")]
    Write {
        /// The file the record was meant for
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Writing to the console stream failed
    #[error("Failed to write to console: {0}")]
    Console(#[source] io::Error),

    /// A process-wide logger is already installed
    #[error("A global logger has already been installed")]
    AlreadyInitialized,
}

impl Error {
    /// Whether the record that triggered this error still reached its file
    pub fn record_written(&self) -> bool {
        matches!(self, Error::Rotation { .. })
    }
}
