//! Demonstrates the test support functionality

use chrono::{FixedOffset, TimeZone};
use rotor_logger::test_support::*;
use rotor_logger::*;

#[test]
fn test_capture_logger() {
    let capture = CaptureLogger::new();
    let logger: std::sync::Arc<dyn Logger> = std::sync::Arc::new(capture.clone());

    // Log directly to the logger instance
    logger.info(call_site!(), format_args!("This is captured")).unwrap();
    logger.error(call_site!(), format_args!("This is also captured")).unwrap();

    // Check the captured logs
    assert!(capture.contains("This is captured"));
    assert!(capture.contains("ERROR"));
    assert_eq!(capture.lines().len(), 2);

    capture.clear();
    assert!(capture.logs().is_empty());
}

#[test]
fn test_fixed_time_gives_exact_lines() {
    let now = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 2, 15, 4, 5)
        .unwrap();
    let capture = CaptureLogger::new().with_fixed_time(now);

    let site = CallSite::new("src/jobs.rs", "worker::jobs::run", 12);
    capture.warning(site, format_args!("retrying job {}", 3)).unwrap();

    assert_eq!(
        capture.logs(),
        "[2024-01-02 15:04:05] [WARNING] [jobs.rs-worker::jobs::run-12] retrying job 3\n"
    );
}
