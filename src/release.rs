//! Release information service
//!
//! Orchestrates the collaborator and the two parsers: raw tag and log text
//! comes in from [GitCli], structured [Version] and [Commit] values go out.
//! Every query builds a fresh result; nothing is cached between calls, and a
//! failed git invocation surfaces immediately with no retries.

use crate::domain::{Commit, Version};
use crate::error::Result;
use crate::git::GitCli;
use crate::parser::{CommitLogParser, ParseMode};

pub struct ReleaseInfo<G: GitCli> {
    git: G,
    parser: CommitLogParser,
}

impl<G: GitCli> ReleaseInfo<G> {
    /// Service parsing all commit blocks in a range (the default)
    pub fn new(git: G) -> Self {
        Self::with_mode(git, ParseMode::AllBlocks)
    }

    /// Service with an explicit scan mode; `ParseMode::FirstOnly` reproduces
    /// the truncating behavior of the tool this replaces.
    pub fn with_mode(git: G, mode: ParseMode) -> Self {
        ReleaseInfo {
            git,
            parser: CommitLogParser::new(mode),
        }
    }

    /// Commits in the revision window `newer...older`, newest first.
    ///
    /// The two refs are opaque to this crate; they are handed to the
    /// collaborator unvalidated.
    pub fn release_window(&self, newer: &str, older: &str) -> Result<Vec<Commit>> {
        let log_text = self.git.log_range(newer, older)?;
        self.parser.parse(&log_text)
    }

    /// Parse a tag string into its structured fields
    pub fn tag_version(&self, tag: &str) -> Result<Version> {
        Version::parse(tag)
    }

    /// Nearest tag reachable from HEAD
    pub fn current_tag(&self) -> Result<String> {
        Ok(trim_eol(&self.git.describe("HEAD")?))
    }

    /// Nearest tag reachable from HEAD~1
    pub fn previous_tag(&self) -> Result<String> {
        Ok(trim_eol(&self.git.describe("HEAD~1")?))
    }

    /// Hash of the current commit
    pub fn current_hash(&self) -> Result<String> {
        Ok(trim_eol(&self.git.rev_parse("HEAD")?))
    }

    /// Hash of the previous commit
    pub fn previous_hash(&self) -> Result<String> {
        Ok(trim_eol(&self.git.rev_parse("HEAD~1")?))
    }

    /// Push all local tags to the named remote
    pub fn push_tags(&self, remote: &str) -> Result<()> {
        self.git.push_tags(remote)
    }
}

/// Git prints one trailing newline per answer; strip it (and any CR).
fn trim_eol(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stage;
    use crate::git::MockGit;

    const LOG: &str = "\
commit abc123
Author: Jane Doe <jane@x.com>
Date:   Mon Jan 02 15:04:05 2006 -0700

    Fix bug

    line1
    line2

commit def456
Author: John Roe <john@y.org>
Date:   Tue Jan 03 09:00:00 2006 +0200

    Add feature

    body text
";

    fn service() -> ReleaseInfo<MockGit> {
        let mut git = MockGit::new();
        git.set_tag("HEAD", "1.2.1-rc.3\n");
        git.set_tag("HEAD~1", "1.2.0\r\n");
        git.set_hash("HEAD", "def456\n");
        git.set_hash("HEAD~1", "abc123\n");
        git.set_log_text(LOG);
        ReleaseInfo::new(git)
    }

    #[test]
    fn test_current_and_previous_tags_are_trimmed() {
        let info = service();
        assert_eq!(info.current_tag().unwrap(), "1.2.1-rc.3");
        assert_eq!(info.previous_tag().unwrap(), "1.2.0");
    }

    #[test]
    fn test_hashes_are_trimmed() {
        let info = service();
        assert_eq!(info.current_hash().unwrap(), "def456");
        assert_eq!(info.previous_hash().unwrap(), "abc123");
    }

    #[test]
    fn test_release_window_parses_all_commits() {
        let info = service();
        let commits = info.release_window("def456", "abc123").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "abc123");
    }

    #[test]
    fn test_release_window_first_only_mode() {
        let mut git = MockGit::new();
        git.set_log_text(LOG);
        let info = ReleaseInfo::with_mode(git, ParseMode::FirstOnly);
        let commits = info.release_window("a", "b").unwrap();
        assert_eq!(commits.len(), 1);
    }

    #[test]
    fn test_empty_window_is_empty_sequence() {
        let git = MockGit::new();
        let info = ReleaseInfo::new(git);
        assert!(info.release_window("a", "b").unwrap().is_empty());
    }

    #[test]
    fn test_tag_version_delegates_to_grammar() {
        let info = service();
        let version = info.tag_version("1.2.1-rc.3").unwrap();
        assert_eq!(version.major, 1);
        assert_eq!(version.stage, Stage::ReleaseCandidate);
    }

    #[test]
    fn test_failed_collaborator_surfaces_as_command_error() {
        let git = MockGit::new();
        let info = ReleaseInfo::new(git);
        let err = info.current_tag().unwrap_err();
        assert!(matches!(err, crate::VersionManagerError::Command(_)));
    }
}
