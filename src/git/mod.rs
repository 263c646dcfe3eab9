//! Version-control collaborator abstraction
//!
//! The rest of the crate treats git as an opaque producer of raw text: the
//! nearest tag for a ref, the hash of a ref, and the log text between two
//! refs. The [GitCli] trait captures exactly that surface, with
//! [command::CommandGit] shelling out to the real `git` binary and
//! [mock::MockGit] serving canned text in tests.
//!
//! Ref identifiers are passed through untouched; nothing here validates or
//! interprets them.

pub mod command;
pub mod mock;

pub use command::CommandGit;
pub use mock::MockGit;

use crate::error::Result;

/// Opaque text-producing git operations
///
/// Implementations map invocation failures and non-zero exit statuses to
/// [crate::error::VersionManagerError::Command]. Output is returned exactly
/// as produced, trailing newlines included; callers decide what to trim.
pub trait GitCli: Send + Sync {
    /// Nearest tag reachable from `refname` (e.g. `git describe <ref> --abbrev=0 --tags`)
    fn describe(&self, refname: &str) -> Result<String>;

    /// Commit hash of `refname` (e.g. `git rev-parse --verify <ref>`)
    fn rev_parse(&self, refname: &str) -> Result<String>;

    /// Raw log text for the revision range `newer...older`
    fn log_range(&self, newer: &str, older: &str) -> Result<String>;

    /// Push all local tags to the named remote
    fn push_tags(&self, remote: &str) -> Result<()>;
}
