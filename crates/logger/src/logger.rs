//! Core logger trait

use crate::{CallSite, Level, Record, Result};
use std::fmt;

/// The contract every writer implements. Callers depend only on this trait.
pub trait Logger: Send + Sync {
    /// Write a record. Records below the configured level are ignored and
    /// return `Ok`; I/O and rotation problems are returned, never swallowed.
    fn log(&self, record: &Record<'_>) -> Result<()>;

    /// Flush any buffered output
    fn flush(&self) -> Result<()>;

    /// Check if a level is enabled (for skipping message formatting)
    fn is_enabled(&self, level: Level) -> bool;
}

/// The five-method facade. Each method binds a fixed level.
pub trait LoggerExt: Logger {
    /// Format and log at an arbitrary level
    #[inline]
    fn log_args(&self, level: Level, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.log(&Record::from_args(level, site, args))
    }

    /// Log debug
    #[inline]
    fn debug(&self, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Level::Debug, site, args)
    }

    /// Log info
    #[inline]
    fn info(&self, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Level::Info, site, args)
    }

    /// Log a warning
    #[inline]
    fn warning(&self, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Level::Warning, site, args)
    }

    /// Log an error
    #[inline]
    fn error(&self, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Level::Error, site, args)
    }

    /// Log a fatal condition. Does not exit the process.
    #[inline]
    fn fatal(&self, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_args(Level::Fatal, site, args)
    }
}

// Implement for all loggers
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _record: &Record<'_>) -> Result<()> {
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }
}
