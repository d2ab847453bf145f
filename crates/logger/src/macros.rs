//! Logging macros
//!
//! Every macro captures the caller's file, line and enclosing function via
//! [`call_site!`], so the rendered location is always the code that issued the
//! call and never a frame inside the logger.
//!
//! Each macro evaluates to `rotor_logger::Result<()>`.
//!
//! ```no_run
//! use rotor_logger::{ConsoleLogger, Level, info, error};
//!
//! let console = ConsoleLogger::new(Level::Info);
//! info!(logger: console, "listening on {}", 8080)?;
//!
//! // Without `logger:` the process-wide logger installed by `init` is used
//! error!("falling back to {}", "defaults")?;
//! # Ok::<(), rotor_logger::Error>(())
//! ```

/// Capture the current call site
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(
            ::core::file!(),
            $crate::__function_path(__type_name_of(__here)),
            ::core::line!(),
        )
    }};
}

/// Log at an explicit level
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::LoggerExt as _;
        ($logger).log_args($level, $crate::call_site!(), ::core::format_args!($($arg)+))
    }};
    ($level:expr, $($arg:tt)+) => {{
        use $crate::LoggerExt as _;
        $crate::logger().log_args($level, $crate::call_site!(), ::core::format_args!($($arg)+))
    }};
}

/// Log debug
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log info
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log a warning
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

/// Log an error
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal condition. Does not exit the process.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Fatal, $($arg)+)
    };
}
