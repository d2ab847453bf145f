//! Console writer

use crate::{Error, Level, Logger, Record, Result, format::render};
use chrono::Local;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Logger that writes rendered lines to standard output (or any other sink).
/// No rotation, no file ownership.
#[derive(Debug)]
pub struct ConsoleLogger<W: Write + Send = io::Stdout> {
    /// Minimum log level
    min_level: Level,
    /// Lock for the sink (to prevent interleaving)
    out: Mutex<W>,
}

impl ConsoleLogger {
    /// Create a console logger over stdout
    pub fn new(min_level: Level) -> Self {
        Self::with_writer(min_level, io::stdout())
    }

    /// Create a console logger from a level name such as `"info"`
    pub fn from_level_str(level: &str) -> Result<Self> {
        Ok(Self::new(level.parse()?))
    }
}

impl<W: Write + Send> ConsoleLogger<W> {
    /// Create a console logger over an arbitrary sink
    pub fn with_writer(min_level: Level, out: W) -> Self {
        Self {
            min_level,
            out: Mutex::new(out),
        }
    }

    /// Configured minimum level
    pub fn level(&self) -> Level {
        self.min_level
    }

    /// Consume the logger and return its sink
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Logger for ConsoleLogger<W> {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        if !self.is_enabled(record.level) {
            return Ok(());
        }

        let line = render(&Local::now(), record);
        let mut out = self.out.lock();
        out.write_all(line.as_bytes()).map_err(Error::Console)?;
        out.flush().map_err(Error::Console)
    }

    fn flush(&self) -> Result<()> {
        self.out.lock().flush().map_err(Error::Console)
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        Level::enabled(self.min_level, level)
    }
}
