//! File metadata capture
//!
//! Stats each listed file and formats its timestamps in local time. A failed
//! stat is never fatal: the caller records the path as a warning and emits the
//! file without metadata.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::Metadata;
use std::path::Path;

/// Default timestamp pattern: the C locale's `%c` (e.g. `Sun Jul  8 00:34:60 2001`)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%c";

/// Which metadata elements to emit for each file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureFlags {
    #[serde(default)]
    pub size: bool,
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub modified: bool,
    #[serde(default)]
    pub accessed: bool,
}

impl CaptureFlags {
    pub fn all() -> Self {
        Self {
            size: true,
            created: true,
            modified: true,
            accessed: true,
        }
    }

    /// Flags set in either `self` or `other`
    pub fn union(self, other: CaptureFlags) -> Self {
        Self {
            size: self.size || other.size,
            created: self.created || other.created,
            modified: self.modified || other.modified,
            accessed: self.accessed || other.accessed,
        }
    }

    pub fn any(&self) -> bool {
        self.size || self.created || self.modified || self.accessed
    }
}

/// Stat result for one file. Timestamps the platform cannot provide are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub size: u64,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub accessed: Option<DateTime<Local>>,
}

impl FileStats {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            size: metadata.len(),
            created: created_time(metadata),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            accessed: metadata.accessed().ok().map(DateTime::<Local>::from),
        }
    }
}

/// Stat `path`, following symlinks.
pub fn stat(path: &str) -> std::io::Result<FileStats> {
    let metadata = std::fs::metadata(Path::new(path))?;
    Ok(FileStats::from_metadata(&metadata))
}

/// Inode change time, as the legacy listing reported for "created".
#[cfg(unix)]
fn created_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    use chrono::TimeZone;
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    Local.timestamp_opt(metadata.ctime(), nanos).single()
}

#[cfg(not(unix))]
fn created_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    metadata.created().ok().map(DateTime::<Local>::from)
}

/// Format `timestamp` with a strftime pattern; `None` if the pattern is invalid.
pub fn format_timestamp(timestamp: &DateTime<Local>, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", timestamp.format(pattern)).ok()?;
    Some(out)
}

/// Whether `pattern` parses as a strftime format
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !pattern.is_empty() && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}
