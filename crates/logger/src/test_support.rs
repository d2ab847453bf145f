//! Test support utilities
//!
//! This module provides utilities for capturing logs during tests.
//! It's only available when the `test-support` feature is enabled.

use crate::{Level, Logger, Record, Result, format::render};
use chrono::{DateTime, FixedOffset, Local};
use parking_lot::Mutex;
use std::sync::Arc;

/// A logger that captures rendered lines in memory for testing
#[derive(Clone)]
pub struct CaptureLogger {
    lines: Arc<Mutex<Vec<String>>>,
    min_level: Level,
    fixed_time: Option<DateTime<FixedOffset>>,
}

impl CaptureLogger {
    /// Create a new capture logger
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            min_level: Level::Debug,
            fixed_time: None,
        }
    }

    /// Create with a specific level
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Stamp every line with `now` instead of the wall clock
    pub fn with_fixed_time(mut self, now: DateTime<FixedOffset>) -> Self {
        self.fixed_time = Some(now);
        self
    }

    /// Get all captured lines, newline-terminated
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Get all captured output as one string
    pub fn logs(&self) -> String {
        self.lines.lock().concat()
    }

    /// Clear captured logs
    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    /// Check if logs contain a specific string
    pub fn contains(&self, text: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(text))
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, record: &Record<'_>) -> Result<()> {
        if !self.is_enabled(record.level) {
            return Ok(());
        }
        let line = match &self.fixed_time {
            Some(now) => render(now, record),
            None => render(&Local::now(), record),
        };
        self.lines.lock().push(line);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        // No-op for in-memory logger
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self, level: Level) -> bool {
        Level::enabled(self.min_level, level)
    }
}
