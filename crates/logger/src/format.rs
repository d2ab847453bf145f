//! Line rendering

use crate::Record;
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Timestamp layout used at the start of every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a record as one newline-terminated line:
/// `[<timestamp>] [<LEVEL>] [<file>-<function>-<line>] <message>`
pub fn render<Tz>(now: &DateTime<Tz>, record: &Record<'_>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut line = String::with_capacity(64 + record.message.len());
    // Writing into a String cannot fail
    let _ = writeln!(
        line,
        "[{}] [{}] [{}] {}",
        now.format(TIMESTAMP_FORMAT),
        record.level,
        record.call_site,
        record.message
    );
    line
}
