//! When to rotate, and what to call the file that is rotated out

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Timestamp layout of backup file suffixes. Sorts chronologically.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S-%6f";

/// Marker between the original file name and the backup timestamp
pub const BACKUP_MARKER: &str = ".backup.";

/// Rotation trigger, chosen once at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Rotate before a write once the file holds at least `max_bytes`
    BySize {
        /// Size threshold in bytes
        max_bytes: u64,
    },
    /// Rotate before the first write of each new calendar day
    Daily,
}

impl RotationPolicy {
    /// Decide whether a stream must rotate before the next write.
    ///
    /// `current_size` is ignored by [`RotationPolicy::Daily`]; the days are
    /// ignored by [`RotationPolicy::BySize`].
    pub fn should_rotate(&self, current_size: u64, last_rotation: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            RotationPolicy::BySize { max_bytes } => current_size >= max_bytes,
            RotationPolicy::Daily => today > last_rotation,
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        RotationPolicy::BySize {
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

/// `<path>.backup.<timestamp>` for a rotation happening at `now`
pub fn backup_path(path: &Path, now: &DateTime<FixedOffset>) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_MARKER);
    name.push(now.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

/// Like [`backup_path`], adding `.1`, `.2`, ... until the name is unused.
///
/// Callers must hold the stream's lock so no other rotation can claim the
/// same name between the check and the rename.
pub fn unique_backup_path(path: &Path, now: &DateTime<FixedOffset>) -> PathBuf {
    let base = backup_path(path, now);
    if !base.exists() {
        return base;
    }

    let mut n = 1u32;
    loop {
        let mut name = base.clone().into_os_string();
        name.push(format!(".{n}"));
        let candidate = PathBuf::from(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Sort key for a backup file name: its timestamp, then its collision counter
pub(crate) fn backup_sort_key(suffix: &str) -> (String, u32) {
    match suffix.split_once('.') {
        Some((stamp, n)) => (stamp.to_string(), n.parse().unwrap_or(0)),
        None => (suffix.to_string(), 0),
    }
}
