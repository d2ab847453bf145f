//! Bridge from the `log` crate to rotor-logger

use crate::{CallSite, Level, Logger, Record};
use ::log::{Log, Metadata, Record as LogRecord};
use std::sync::Arc;

/// Wrapper to implement the log crate's Log trait
pub struct LogBridge {
    logger: Arc<dyn Logger>,
}

impl LogBridge {
    /// Create a new log bridge
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.is_enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // `log` only knows the module, so it stands in for the function
        let site = CallSite::new(
            record.file_static().unwrap_or("<unknown>"),
            record.module_path_static().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        );
        let ours = Record::from_args(map_level(record.level()), site, *record.args());

        // `Log::log` has no way to hand the error back
        if let Err(e) = self.logger.log(&ours) {
            tracing::warn!(error = %e, log_target = record.target(), "failed to write bridged log record");
        }
    }

    fn flush(&self) {
        if let Err(e) = self.logger.flush() {
            tracing::warn!(error = %e, "failed to flush bridged logger");
        }
    }
}

/// Map log levels to our levels. `Trace` folds into `Debug`.
pub fn map_level(level: ::log::Level) -> Level {
    match level {
        ::log::Level::Error => Level::Error,
        ::log::Level::Warn => Level::Warning,
        ::log::Level::Info => Level::Info,
        ::log::Level::Debug | ::log::Level::Trace => Level::Debug,
    }
}

/// Initialize the log crate to use a rotor logger
///
/// This will capture all logs from crates using the `log` crate macros.
///
/// # Example
/// ```no_run
/// use rotor_logger::{ConsoleLogger, Level, compat::init_log_bridge};
/// use std::sync::Arc;
///
/// let logger = Arc::new(ConsoleLogger::new(Level::Info));
/// init_log_bridge(logger).expect("Failed to set log bridge");
/// ```
pub fn init_log_bridge(logger: Arc<dyn Logger>) -> Result<(), ::log::SetLoggerError> {
    let max_level = if logger.is_enabled(Level::Debug) {
        ::log::LevelFilter::Trace
    } else if logger.is_enabled(Level::Info) {
        ::log::LevelFilter::Info
    } else if logger.is_enabled(Level::Warning) {
        ::log::LevelFilter::Warn
    } else {
        ::log::LevelFilter::Error
    };

    // log::set_logger requires a 'static logger
    let bridge = Box::leak(Box::new(LogBridge::new(logger)));
    ::log::set_logger(bridge)?;
    ::log::set_max_level(max_level);
    Ok(())
}
