//! File-based logger implementation with rotation
//!
//! This crate provides a [`FileLogger`] that implements the `rotor-logger`
//! contract and supports:
//! - A primary file for every enabled record and an `.error` file that
//!   duplicates records at ERROR and above
//! - Rotation by size or at the start of each calendar day, renaming the
//!   active file to `<name>.backup.<timestamp>`
//! - Concurrent writers, with per-file locking around check, rotate and append
//! - Plain settings records, optionally read from an INI section

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod clock;
mod config;
mod rotation;
mod settings;
mod writer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ERROR_FILE_SUFFIX, FileLoggerConfig, FileLoggerConfigBuilder};
pub use rotation::{
    BACKUP_MARKER, BACKUP_TIMESTAMP_FORMAT, RotationPolicy, backup_path, unique_backup_path,
};
pub use rotor_logger::{Error, Result};
pub use settings::LoggerSettings;
pub use writer::{FileLogger, StreamKind};
