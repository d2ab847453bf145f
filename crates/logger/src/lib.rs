//! Leveled logging with explicit call-site capture
//!
//! This crate defines the logging contract shared by every rotor writer:
//! - [`Level`], the DEBUG < INFO < WARNING < ERROR < FATAL scale
//! - [`Record`] and [`CallSite`], captured at the caller by the macros
//! - [`render`], the one-line text layout
//! - [`Logger`] / [`LoggerExt`], the five-method facade
//! - [`ConsoleLogger`], a writer over standard output
//!
//! The rotating file writer lives in `rotor-logger-file`.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod error;
mod format;
mod level;
mod logger;
mod macros;
mod record;
mod stdout;

pub mod compat;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use error::{Error, Result};
pub use format::{TIMESTAMP_FORMAT, render};
pub use level::Level;
pub use logger::{Logger, LoggerExt, NoOpLogger};
#[doc(hidden)]
pub use record::__function_path;
pub use record::{CallSite, Record};
pub use stdout::ConsoleLogger;

use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Arc<dyn Logger>> = OnceLock::new();
static NOOP: NoOpLogger = NoOpLogger;

/// Install the process-wide logger used by the macros when no `logger:` is given.
/// Can only be called once.
pub fn init(logger: Arc<dyn Logger>) -> Result<()> {
    GLOBAL.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide logger, or a no-op logger before [`init`]
pub fn logger() -> &'static dyn Logger {
    match GLOBAL.get() {
        Some(logger) => logger.as_ref(),
        None => &NOOP,
    }
}
