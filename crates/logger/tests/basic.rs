//! Basic tests for the logger facade

use rotor_logger::*;
use std::sync::Arc;

#[test]
fn test_macros_capture_the_caller() {
    let capture = test_support::CaptureLogger::new();

    info!(logger: capture, "The answer is {}", 42).unwrap();
    let line = line!() - 1;

    let logs = capture.logs();
    assert!(logs.contains("[INFO]"));
    assert!(logs.contains("The answer is 42"));
    assert!(
        logs.contains(&format!("[basic.rs-basic::test_macros_capture_the_caller-{line}]")),
        "{logs}"
    );
}

#[test]
fn test_closure_call_site_reports_enclosing_function() {
    let capture = test_support::CaptureLogger::new();
    let log_from_closure = || warning!(logger: capture, "inside closure");
    log_from_closure().unwrap();

    assert!(capture.contains("-basic::test_closure_call_site_reports_enclosing_function-"));
}

#[test]
fn test_level_filtering_for_every_pair() {
    for configured in Level::ALL {
        let capture = test_support::CaptureLogger::new().with_level(configured);

        for incoming in Level::ALL {
            log!(logger: capture, incoming, "record at {incoming}").unwrap();
        }

        for incoming in Level::ALL {
            let present = capture.contains(&format!("record at {incoming}"));
            assert_eq!(present, incoming >= configured, "configured {configured}, incoming {incoming}");
        }
    }
}

#[test]
fn test_every_facade_method_binds_its_level() {
    let capture = test_support::CaptureLogger::new();
    let logger: Arc<dyn Logger> = Arc::new(capture.clone());

    debug!(logger: logger, "d").unwrap();
    info!(logger: logger, "i").unwrap();
    warning!(logger: logger, "w").unwrap();
    error!(logger: logger, "e").unwrap();
    fatal!(logger: logger, "f").unwrap();

    let levels: Vec<String> = capture
        .lines()
        .iter()
        .map(|line| line.split("] [").nth(1).unwrap_or_default().to_string())
        .collect();
    assert_eq!(levels, ["DEBUG", "INFO", "WARNING", "ERROR", "FATAL"]);
}

#[test]
fn test_global_logger() {
    // Before init the macros go nowhere
    info!("dropped").unwrap();

    let capture = test_support::CaptureLogger::new();
    init(Arc::new(capture.clone())).unwrap();
    assert!(matches!(
        init(Arc::new(NoOpLogger)),
        Err(Error::AlreadyInitialized)
    ));

    error!("via the global logger: {}", "ok").unwrap();
    assert!(capture.contains("[ERROR]"));
    assert!(capture.contains("via the global logger: ok"));
    assert!(!capture.contains("dropped"));
}

#[test]
fn test_noop_logger() {
    let logger = Arc::new(NoOpLogger);

    // NoOpLogger should never be enabled
    for level in Level::ALL {
        assert!(!logger.is_enabled(level));
    }

    // Test that it doesn't fail when used
    fatal!(logger: logger, "This goes nowhere").unwrap();
    logger.flush().unwrap();
}
