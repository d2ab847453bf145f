//! Rotating file writer
//!
//! A [`FileLogger`] owns two append-mode handles: the primary stream, which
//! receives every enabled record, and the error stream (`<name>.error`), which
//! additionally receives records at [`Level::Error`] and above. Each stream
//! sits behind its own mutex, and the rotation check, the rotation itself and
//! the append all happen while that mutex is held.

use crate::clock::{Clock, SystemClock};
use crate::rotation::{BACKUP_MARKER, backup_sort_key, unique_backup_path};
use crate::{FileLoggerConfig, LoggerSettings, RotationPolicy};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
use parking_lot::Mutex;
use rotor_logger::{Error, Level, Logger, Record, Result, render};
use std::fs::{self, File, OpenOptions};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// One of the two files a [`FileLogger`] writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// `<directory>/<file_name>`
    Primary,
    /// `<directory>/<file_name>.error`
    Error,
}

/// File system calls a stream makes
#[derive(Debug, Clone, Copy)]
struct FileOps {
    open: fn(&Path) -> io::Result<File>,
    size: fn(&File) -> io::Result<u64>,
}

impl Default for FileOps {
    fn default() -> Self {
        Self {
            open: open_append,
            size: file_size,
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn file_size(file: &File) -> io::Result<u64> {
    file.metadata().map(|meta| meta.len())
}

/// Report a failure the caller is not told about. Goes to stderr when no
/// tracing subscriber has been installed.
fn report(message: &str, path: &Path, error: &dyn fmt::Display) {
    if tracing::dispatcher::has_been_set() {
        warn!(path = %path.display(), error = %error, "{message}");
    } else {
        eprintln!("rotor-logger-file: {message}: {}: {error}", path.display());
    }
}

/// An open log file and its rotation bookkeeping
#[derive(Debug)]
struct Stream {
    path: PathBuf,
    file: File,
    last_rotation: NaiveDate,
    /// Timestamp of the newest backup this stream created
    last_backup: Option<DateTime<FixedOffset>>,
    ops: FileOps,
}

impl Stream {
    fn open(path: PathBuf, today: NaiveDate, offset: FixedOffset) -> Result<Self> {
        let ops = FileOps::default();
        let file = (ops.open)(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;

        // A file that already holds records was last "rotated" when it was last written
        let last_rotation = file
            .metadata()
            .ok()
            .filter(|meta| meta.len() > 0)
            .and_then(|meta| meta.modified().ok())
            .map(|modified| {
                DateTime::<Utc>::from(modified)
                    .with_timezone(&offset)
                    .date_naive()
            })
            .map_or(today, |day| day.min(today));

        Ok(Self {
            path,
            file,
            last_rotation,
            last_backup: None,
            ops,
        })
    }

    /// Rotate if the policy says so, then append `line`.
    ///
    /// The clock is read here, with the stream lock held, so rotations of one
    /// stream see non-decreasing times. A failed write wins over a failed
    /// rotation; a failed rotation is returned only after the line reached the
    /// file that is still active.
    fn append(
        &mut self,
        line: &[u8],
        policy: &RotationPolicy,
        clock: &dyn Clock,
        offset: FixedOffset,
    ) -> Result<()> {
        let now = clock.now();
        let today = now.with_timezone(&offset).date_naive();
        let rotation = self.rotate_if_due(policy, &now, today).err();

        let written = self.file.write_all(line).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        });

        match (written, rotation) {
            (Err(e), Some(rotation)) => {
                report("log rotation failed before a failed write", &self.path, &rotation);
                Err(e)
            }
            (Err(e), None) | (Ok(()), Some(e)) => Err(e),
            (Ok(()), None) => Ok(()),
        }
    }

    fn rotate_if_due(
        &mut self,
        policy: &RotationPolicy,
        now: &DateTime<FixedOffset>,
        today: NaiveDate,
    ) -> Result<()> {
        let size = match (self.ops.size)(&self.file) {
            Ok(size) => size,
            Err(e) => {
                report("cannot stat log file, skipping rotation check", &self.path, &e);
                return Ok(());
            }
        };

        if !policy.should_rotate(size, self.last_rotation, today) {
            return Ok(());
        }

        // Nothing to archive
        if size == 0 {
            self.last_rotation = today;
            return Ok(());
        }

        self.rotate(now, today)
    }

    fn rotate(&mut self, now: &DateTime<FixedOffset>, today: NaiveDate) -> Result<()> {
        // Backup names must keep increasing even if the clock steps back
        let stamp = match self.last_backup {
            Some(prev) if *now <= prev => prev + TimeDelta::microseconds(1),
            _ => *now,
        };
        let backup = unique_backup_path(&self.path, &stamp);

        // The old handle stays valid (and at the original path) if this fails
        fs::rename(&self.path, &backup).map_err(|source| Error::Rotation {
            path: self.path.clone(),
            source,
        })?;

        let fresh = match (self.ops.open)(&self.path) {
            Ok(file) => file,
            Err(source) => {
                // Put the file back so the old handle is at the original path again
                if let Err(e) = fs::rename(&backup, &self.path) {
                    report("could not restore log file after a failed reopen", &backup, &e);
                }
                return Err(Error::Rotation {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // Close the old generation before anything is written to the new one
        drop(std::mem::replace(&mut self.file, fresh));
        self.last_rotation = today;
        self.last_backup = Some(stamp);

        debug!(path = %self.path.display(), backup = %backup.display(), "rotated log file");
        Ok(())
    }
}

/// Logger that appends to a file, rotating it by size or by day
pub struct FileLogger {
    config: FileLoggerConfig,
    /// Time zone day boundaries are measured in
    offset: FixedOffset,
    clock: Arc<dyn Clock>,
    primary: Mutex<Stream>,
    error: Mutex<Stream>,
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("config", &self.config)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl FileLogger {
    /// Create a file logger using the wall clock
    pub fn new(config: FileLoggerConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a file logger from a plain settings record
    pub fn from_settings(settings: &LoggerSettings) -> Result<Self> {
        Self::new(settings.to_config()?)
    }

    /// Create a file logger reading time from `clock`.
    ///
    /// Creates the directory if needed and opens both files in append mode.
    pub fn with_clock(config: FileLoggerConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        fs::create_dir_all(&config.directory).map_err(|source| Error::CreateDirectory {
            path: config.directory.clone(),
            source,
        })?;

        let now = clock.now();
        let offset = config.reference_offset()?.unwrap_or(*now.offset());
        let today = now.with_timezone(&offset).date_naive();

        let primary = Stream::open(config.primary_path(), today, offset)?;
        // `primary` is closed on drop if this fails
        let error = Stream::open(config.error_path(), today, offset)?;

        debug!(path = %primary.path.display(), rotation = ?config.rotation, "opened log file");

        Ok(Self {
            config,
            offset,
            clock,
            primary: Mutex::new(primary),
            error: Mutex::new(error),
        })
    }

    /// The configuration this writer was built from
    pub fn config(&self) -> &FileLoggerConfig {
        &self.config
    }

    /// Path of the primary file
    pub fn primary_path(&self) -> PathBuf {
        self.config.primary_path()
    }

    /// Path of the error-only file
    pub fn error_path(&self) -> PathBuf {
        self.config.error_path()
    }

    /// Day of the last rotation of a stream, in the reference time zone
    pub fn last_rotation(&self, kind: StreamKind) -> NaiveDate {
        self.stream(kind).lock().last_rotation
    }

    /// Backups of a stream currently on disk, oldest first
    pub fn backup_files(&self, kind: StreamKind) -> Result<Vec<PathBuf>> {
        let path = self.stream(kind).lock().path.clone();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let prefix = match path.file_name() {
            Some(name) => format!("{}{BACKUP_MARKER}", name.to_string_lossy()),
            None => return Ok(Vec::new()),
        };

        let entries = fs::read_dir(&dir).map_err(|source| Error::ReadDirectory {
            path: dir.clone(),
            source,
        })?;

        let mut backups: Vec<(String, PathBuf)> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                let suffix = name.strip_prefix(&prefix)?.to_string();
                Some((suffix, entry.path()))
            })
            .collect();
        backups.sort_by_key(|(suffix, _)| backup_sort_key(suffix));

        Ok(backups.into_iter().map(|(_, path)| path).collect())
    }

    fn stream(&self, kind: StreamKind) -> &Mutex<Stream> {
        match kind {
            StreamKind::Primary => &self.primary,
            StreamKind::Error => &self.error,
        }
    }
}

impl Logger for FileLogger {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        if !self.is_enabled(record.level) {
            return Ok(());
        }

        // Rendered once so both streams get identical bytes
        let line = render(&self.clock.now(), record);
        let policy = &self.config.rotation;
        let clock = &*self.clock;

        let primary = self
            .primary
            .lock()
            .append(line.as_bytes(), policy, clock, self.offset);

        if !record.level.is_error() {
            return primary;
        }

        let error = self
            .error
            .lock()
            .append(line.as_bytes(), policy, clock, self.offset);

        match (primary, error) {
            (Ok(()), other) | (other, Ok(())) => other,
            (Err(first), Err(second)) => {
                // Report the one that lost a record
                let (kept, other) = if first.record_written() && !second.record_written() {
                    (second, first)
                } else {
                    (first, second)
                };
                report("second log stream also failed", &self.error_path(), &other);
                Err(kept)
            }
        }
    }

    fn flush(&self) -> Result<()> {
        for stream in [&self.primary, &self.error] {
            let mut stream = stream.lock();
            let path = stream.path.clone();
            stream
                .file
                .flush()
                .map_err(|source| Error::Write { path, source })?;
        }
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        Level::enabled(self.config.level, level)
    }
}
