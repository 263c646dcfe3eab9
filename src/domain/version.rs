use crate::error::{Result, VersionManagerError};
use std::fmt;

/// Release maturity stage embedded in a version tag
///
/// Discriminants match the values written into generated version files,
/// so `Unknown` doubles as the unset sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unknown = -1,
    Development = 0,
    Release = 1,
    ReleaseCandidate = 2,
    Alpha = 3,
    Beta = 4,
}

impl Stage {
    /// Look up a stage from its tag token, defaulting to `Unknown`
    /// for anything not in the fixed table.
    pub fn from_token(token: &str) -> Self {
        match token {
            "dev" => Stage::Development,
            "rel" => Stage::Release,
            "rc" => Stage::ReleaseCandidate,
            "alpha" => Stage::Alpha,
            "beta" => Stage::Beta,
            _ => Stage::Unknown,
        }
    }

    /// Numeric value as written into generated version files
    pub fn value(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Stage::Unknown => "unknown",
            Stage::Development => "dev",
            Stage::Release => "rel",
            Stage::ReleaseCandidate => "rc",
            Stage::Alpha => "alpha",
            Stage::Beta => "beta",
        };
        write!(f, "{}", token)
    }
}

/// Structured representation of a version tag string
///
/// Tags have the form `<major>.<minor>.<bug>-<stage>.<stage_rev>` with any
/// suffix omittable from the right. Fields left unfilled by a partial tag
/// stay at their sentinel values (-1 / `Stage::Unknown`); a partial tag is a
/// valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub bug: i32,
    pub stage: Stage,
    pub stage_rev: i32,
}

impl Default for Version {
    fn default() -> Self {
        Version {
            major: -1,
            minor: -1,
            bug: -1,
            stage: Stage::Unknown,
            stage_rev: -1,
        }
    }
}

impl Version {
    /// Parse a tag string, greedily filling fields left to right until the
    /// delimiter grammar runs out.
    ///
    /// Missing trailing segments leave the remaining fields unset. A
    /// non-numeric token where an integer is expected is a
    /// [VersionManagerError::Format] naming the field that failed.
    ///
    /// # Example
    /// ```
    /// use version_manager::domain::{Stage, Version};
    ///
    /// let v = Version::parse("1.2.1-rc.3").unwrap();
    /// assert_eq!(v.major, 1);
    /// assert_eq!(v.stage, Stage::ReleaseCandidate);
    /// assert_eq!(v.stage_rev, 3);
    ///
    /// let partial = Version::parse("2").unwrap();
    /// assert_eq!(partial.minor, -1);
    /// ```
    pub fn parse(tag: &str) -> Result<Self> {
        let mut version = Version::default();

        let (token, rest) = split_once_on(tag, '.');
        version.major = parse_field(token, "major")?;
        let Some(rest) = rest else {
            return Ok(version);
        };

        let (token, rest) = split_once_on(rest, '.');
        version.minor = parse_field(token, "minor")?;
        let Some(rest) = rest else {
            return Ok(version);
        };

        let (token, rest) = split_once_on(rest, '-');
        version.bug = parse_field(token, "bug")?;
        let Some(rest) = rest else {
            return Ok(version);
        };

        let (token, rest) = split_once_on(rest, '.');
        version.stage = Stage::from_token(token);
        let Some(rest) = rest else {
            return Ok(version);
        };

        version.stage_rev = parse_field(rest, "stage revision")?;

        Ok(version)
    }
}

/// Split on the first occurrence of `sep`, returning the leading token and
/// the remainder (if the separator was present).
fn split_once_on(input: &str, sep: char) -> (&str, Option<&str>) {
    match input.split_once(sep) {
        Some((head, tail)) => (head, Some(tail)),
        None => (input, None),
    }
}

fn parse_field(token: &str, field: &str) -> Result<i32> {
    token.parse::<i32>().map_err(|_| {
        VersionManagerError::format(format!("invalid {} segment: '{}'", field, token))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bug)?;
        if self.stage != Stage::Unknown || self.stage_rev >= 0 {
            write!(f, "-{}.{}", self.stage, self.stage_rev)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_tag() {
        let v = Version::parse("1.2.1-rc.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.bug, 1);
        assert_eq!(v.stage, Stage::ReleaseCandidate);
        assert_eq!(v.stage_rev, 3);
    }

    #[test]
    fn test_parse_zero_tag() {
        let v = Version::parse("0.0.0-dev.0").unwrap();
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 0);
        assert_eq!(v.bug, 0);
        assert_eq!(v.stage, Stage::Development);
        assert_eq!(v.stage_rev, 0);
    }

    #[test]
    fn test_parse_major_only() {
        let v = Version::parse("2").unwrap();
        assert_eq!(v.major, 2);
        assert_eq!(v.minor, -1);
        assert_eq!(v.bug, -1);
        assert_eq!(v.stage, Stage::Unknown);
        assert_eq!(v.stage_rev, -1);
    }

    #[test]
    fn test_parse_without_stage_suffix() {
        let v = Version::parse("3.4.5").unwrap();
        assert_eq!(v.major, 3);
        assert_eq!(v.minor, 4);
        assert_eq!(v.bug, 5);
        assert_eq!(v.stage, Stage::Unknown);
        assert_eq!(v.stage_rev, -1);
    }

    #[test]
    fn test_parse_stage_without_revision() {
        let v = Version::parse("1.0.0-beta").unwrap();
        assert_eq!(v.stage, Stage::Beta);
        assert_eq!(v.stage_rev, -1);
    }

    #[test]
    fn test_parse_unknown_stage_token() {
        // Unrecognized stage tokens map to Unknown, never fail
        let v = Version::parse("1.0.0-nightly.2").unwrap();
        assert_eq!(v.stage, Stage::Unknown);
        assert_eq!(v.stage_rev, 2);
    }

    #[test]
    fn test_parse_all_known_stages() {
        let cases = [
            ("dev", Stage::Development),
            ("rel", Stage::Release),
            ("rc", Stage::ReleaseCandidate),
            ("alpha", Stage::Alpha),
            ("beta", Stage::Beta),
        ];

        for (token, stage) in cases {
            let tag = format!("1.2.3-{}.4", token);
            let v = Version::parse(&tag).unwrap();
            assert_eq!(v.stage, stage, "stage token '{}'", token);
            assert_eq!(v.stage_rev, 4);
        }
    }

    #[test]
    fn test_parse_non_numeric_major() {
        let err = Version::parse("abc.2.3").unwrap_err();
        assert!(err.to_string().contains("major"));
    }

    #[test]
    fn test_parse_empty_string() {
        let err = Version::parse("").unwrap_err();
        assert!(matches!(err, VersionManagerError::Format(_)));
    }

    #[test]
    fn test_parse_non_numeric_stage_rev() {
        let err = Version::parse("1.2.3-rc.x").unwrap_err();
        assert!(err.to_string().contains("stage revision"));
    }

    #[test]
    fn test_stage_values_match_generated_header() {
        assert_eq!(Stage::Development.value(), 0);
        assert_eq!(Stage::Release.value(), 1);
        assert_eq!(Stage::ReleaseCandidate.value(), 2);
        assert_eq!(Stage::Alpha.value(), 3);
        assert_eq!(Stage::Beta.value(), 4);
        assert_eq!(Stage::Unknown.value(), -1);
    }

    #[test]
    fn test_display_round_trip() {
        let v = Version::parse("1.2.1-rc.3").unwrap();
        assert_eq!(v.to_string(), "1.2.1-rc.3");
    }

    #[test]
    fn test_display_without_stage() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }
}
