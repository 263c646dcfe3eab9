use crate::error::{Result, VersionManagerError};
use crate::git::GitCli;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock collaborator serving canned raw text, for tests
///
/// Refs with no configured response behave like a failed git invocation,
/// which is what the real binary does for unknown refs.
pub struct MockGit {
    describe_responses: HashMap<String, String>,
    rev_parse_responses: HashMap<String, String>,
    log_text: String,
    pushed_remotes: Mutex<Vec<String>>,
}

impl MockGit {
    pub fn new() -> Self {
        MockGit {
            describe_responses: HashMap::new(),
            rev_parse_responses: HashMap::new(),
            log_text: String::new(),
            pushed_remotes: Mutex::new(Vec::new()),
        }
    }

    /// Set the tag returned by `describe` for a ref
    pub fn set_tag(&mut self, refname: impl Into<String>, tag: impl Into<String>) {
        self.describe_responses.insert(refname.into(), tag.into());
    }

    /// Set the hash returned by `rev_parse` for a ref
    pub fn set_hash(&mut self, refname: impl Into<String>, hash: impl Into<String>) {
        self.rev_parse_responses.insert(refname.into(), hash.into());
    }

    /// Set the raw log text returned for any revision range
    pub fn set_log_text(&mut self, text: impl Into<String>) {
        self.log_text = text.into();
    }

    /// Remotes that received a tag push, in call order
    pub fn pushed_remotes(&self) -> Vec<String> {
        self.pushed_remotes.lock().unwrap().clone()
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli for MockGit {
    fn describe(&self, refname: &str) -> Result<String> {
        self.describe_responses.get(refname).cloned().ok_or_else(|| {
            VersionManagerError::command(format!("no tag configured for ref '{}'", refname))
        })
    }

    fn rev_parse(&self, refname: &str) -> Result<String> {
        self.rev_parse_responses.get(refname).cloned().ok_or_else(|| {
            VersionManagerError::command(format!("no hash configured for ref '{}'", refname))
        })
    }

    fn log_range(&self, _newer: &str, _older: &str) -> Result<String> {
        Ok(self.log_text.clone())
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.pushed_remotes.lock().unwrap().push(remote.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_describe() {
        let mut git = MockGit::new();
        git.set_tag("HEAD", "1.2.3\n");

        assert_eq!(git.describe("HEAD").unwrap(), "1.2.3\n");
        assert!(git.describe("HEAD~1").is_err());
    }

    #[test]
    fn test_mock_rev_parse() {
        let mut git = MockGit::new();
        git.set_hash("HEAD", "abc123\n");

        assert_eq!(git.rev_parse("HEAD").unwrap(), "abc123\n");
        assert!(git.rev_parse("missing").is_err());
    }

    #[test]
    fn test_mock_push_records_remote() {
        let git = MockGit::new();
        git.push_tags("origin").unwrap();
        assert_eq!(git.pushed_remotes(), vec!["origin".to_string()]);
    }

    #[test]
    fn test_mock_default_log_is_empty() {
        let git = MockGit::default();
        assert_eq!(git.log_range("a", "b").unwrap(), "");
    }
}
