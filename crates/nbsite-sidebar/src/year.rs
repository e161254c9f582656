//! Dating notebooks.
//!
//! Everything that needs a year for a path goes through [`YearSource`], so the
//! platform-dependent birth-time query stays in one place and callers (or
//! tests) can swap in modification time or a fixed table.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local};

use crate::error::{Result, SidebarError};

/// Calendar year, displayed with four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Year of `time` in the local time zone.
    pub fn of(time: SystemTime) -> Self {
        let local: DateTime<Local> = time.into();
        Self(local.year())
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Capability: the year a notebook file belongs to.
pub trait YearSource {
    fn year_of(&self, path: &Path) -> Result<Year>;
}

/// Which filesystem timestamp dates a notebook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampKind {
    /// Birth time. Not available on every platform / filesystem.
    #[default]
    Created,
    Modified,
}

impl FromStr for TimestampKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created" | "birth" => Ok(Self::Created),
            "modified" | "mtime" => Ok(Self::Modified),
            other => Err(format!("unknown timestamp kind `{other}` (expected created|modified)")),
        }
    }
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Modified => "modified",
        })
    }
}

/// [`YearSource`] backed by file metadata.
///
/// A failed query is an error for the whole run; there is no per-file fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTimestampYear {
    pub kind: TimestampKind,
}

impl FileTimestampYear {
    pub const fn new(kind: TimestampKind) -> Self {
        Self { kind }
    }
}

impl YearSource for FileTimestampYear {
    fn year_of(&self, path: &Path) -> Result<Year> {
        let timestamp_err = |source| SidebarError::Timestamp {
            path: path.to_path_buf(),
            source,
        };
        let metadata = fs::metadata(path).map_err(timestamp_err)?;
        let time = match self.kind {
            TimestampKind::Created => metadata.created(),
            TimestampKind::Modified => metadata.modified(),
        }
        .map_err(timestamp_err)?;
        Ok(Year::of(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs::File;

    #[test]
    fn year_displays_with_four_digits() {
        assert_eq!(Year::new(2024).to_string(), "2024");
        assert_eq!(Year::new(987).to_string(), "0987");
    }

    #[test]
    fn timestamp_kind_parses() {
        assert_eq!("created".parse::<TimestampKind>(), Ok(TimestampKind::Created));
        assert_eq!("Modified".parse::<TimestampKind>(), Ok(TimestampKind::Modified));
        assert!("atime".parse::<TimestampKind>().is_err());
    }

    #[test]
    fn modified_year_follows_file_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.ipynb");
        let file = File::create(&path).unwrap();
        let mid_2021 = Local.with_ymd_and_hms(2021, 6, 15, 12, 0, 0).unwrap();
        file.set_modified(mid_2021.into()).unwrap();
        drop(file);

        let year = FileTimestampYear::new(TimestampKind::Modified)
            .year_of(&path)
            .unwrap();

        assert_eq!(year, Year::new(2021));
    }

    #[test]
    fn missing_file_is_a_timestamp_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileTimestampYear::default()
            .year_of(&dir.path().join("gone.ipynb"))
            .unwrap_err();
        assert!(matches!(err, SidebarError::Timestamp { .. }));
    }
}
