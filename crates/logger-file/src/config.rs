//! File writer configuration

use crate::RotationPolicy;
use chrono::FixedOffset;
use rotor_logger::{Error, Level, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Suffix appended to the primary file name for the error-only stream
pub const ERROR_FILE_SUFFIX: &str = ".error";

/// Configuration for [`FileLogger`](crate::FileLogger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLoggerConfig {
    /// Minimum level written
    pub level: Level,
    /// Directory holding the log files
    pub directory: PathBuf,
    /// Base name of the primary file
    pub file_name: String,
    /// When to rotate
    #[serde(default)]
    pub rotation: RotationPolicy,
    /// Offset from UTC, in seconds, of the time zone whose midnight starts a
    /// new day for [`RotationPolicy::Daily`]. Defaults to the clock's offset
    /// when the writer is created.
    #[serde(default)]
    pub utc_offset_secs: Option<i32>,
}

impl FileLoggerConfig {
    /// `<directory>/<file_name>`
    pub fn primary_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// `<directory>/<file_name>.error`
    pub fn error_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}{ERROR_FILE_SUFFIX}", self.file_name))
    }

    /// Configured reference time zone, if any
    pub fn reference_offset(&self) -> Result<Option<FixedOffset>> {
        match self.utc_offset_secs {
            None => Ok(None),
            Some(secs) => FixedOffset::east_opt(secs).map(Some).ok_or_else(|| Error::Settings {
                key: "utc_offset_secs".to_string(),
                message: format!("{secs} is out of range"),
            }),
        }
    }

    /// Reject values no writer can work with
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(Error::Settings {
                key: "file_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let RotationPolicy::BySize { max_bytes: 0 } = self.rotation {
            return Err(Error::Settings {
                key: "max_bytes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        self.reference_offset()?;
        Ok(())
    }
}

/// Builder for [`FileLoggerConfig`]
#[derive(Debug, Clone)]
pub struct FileLoggerConfigBuilder {
    config: FileLoggerConfig,
}

impl FileLoggerConfigBuilder {
    /// Start from a directory and file name; debug level, 10 MiB size rotation
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            config: FileLoggerConfig {
                level: Level::Debug,
                directory: directory.into(),
                file_name: file_name.into(),
                rotation: RotationPolicy::default(),
                utc_offset_secs: None,
            },
        }
    }

    /// Set the minimum level
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    /// Rotate once the file reaches `max_bytes`
    pub fn max_size(mut self, max_bytes: u64) -> Self {
        self.config.rotation = RotationPolicy::BySize { max_bytes };
        self
    }

    /// Rotate at the first write of each new day
    pub fn daily(mut self) -> Self {
        self.config.rotation = RotationPolicy::Daily;
        self
    }

    /// Set the rotation policy
    pub fn rotation(mut self, rotation: RotationPolicy) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Fix the time zone that day boundaries are measured in
    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.config.utc_offset_secs = Some(offset.local_minus_utc());
        self
    }

    /// Finish, validating the result
    pub fn build(self) -> Result<FileLoggerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
