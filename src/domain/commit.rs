use crate::error::{Result, VersionManagerError};
use chrono::{DateTime, FixedOffset};

/// Date layout emitted by `git log` (e.g. "Mon Jan 02 15:04:05 2006 -0700")
pub const GIT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// Date layout used in rendered reports and changelogs
pub const REPORT_DATE_FORMAT: &str = "%Y_%m_%d-%H_%M_%S";

/// Author identity as it appears on a commit header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// One commit extracted from a revision window
///
/// `title` is the first line of the commit message; `message` is the rest of
/// the body with each line left-trimmed and concatenated without separators,
/// matching the layout of the raw log text this was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub author: User,
    pub date: DateTime<FixedOffset>,
    pub title: String,
    pub message: String,
}

impl Commit {
    /// Commit date in the report layout
    pub fn report_date(&self) -> String {
        self.date.format(REPORT_DATE_FORMAT).to_string()
    }
}

/// Parse a date string in the fixed git log layout.
///
/// An unrecognized layout is a [VersionManagerError::Format]; there is no
/// fallback default date.
pub fn parse_git_date(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(input, GIT_DATE_FORMAT)
        .map_err(|e| VersionManagerError::format(format!("invalid commit date '{}': {}", input, e)))
}
