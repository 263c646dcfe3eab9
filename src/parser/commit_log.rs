//! Scanner for raw `git log` text
//!
//! The log layout is a fixed sequence per commit block: a `commit <hash>`
//! header, an `Author: <name> <<email>>` line, a `Date:   <date>` line, one
//! blank line, the title line, one blank line, then message body lines until
//! the next header or end of input. Line order is the wire contract; the
//! scanner is an explicit state machine over lines rather than index
//! arithmetic.

use crate::domain::commit::parse_git_date;
use crate::domain::{Commit, User};
use crate::error::{Result, VersionManagerError};
use chrono::{DateTime, FixedOffset};

/// How many commit blocks a scan extracts.
///
/// The tool this replaces stopped after the first block of a multi-commit
/// range, which truncated every changelog to one entry. `AllBlocks` is the
/// default; `FirstOnly` reproduces the old truncating behavior for callers
/// that depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    AllBlocks,
    FirstOnly,
}

/// Scanner states, one per structural line of a commit block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectHeader,
    ExpectAuthor,
    ExpectDate,
    ExpectBlank1,
    ExpectTitle,
    ExpectBlank2,
    InMessage,
}

/// Fields of the block currently being scanned
struct BlockBuilder {
    hash: String,
    author: Option<User>,
    date: Option<DateTime<FixedOffset>>,
    title: Option<String>,
    message: String,
}

impl BlockBuilder {
    fn new(hash: String) -> Self {
        BlockBuilder {
            hash,
            author: None,
            date: None,
            title: None,
            message: String::new(),
        }
    }

    fn finish(self) -> Result<Commit> {
        let author = self
            .author
            .ok_or_else(|| VersionManagerError::format("log block missing author line"))?;
        let date = self
            .date
            .ok_or_else(|| VersionManagerError::format("log block missing date line"))?;
        let title = self
            .title
            .ok_or_else(|| VersionManagerError::format("log block missing title line"))?;

        Ok(Commit {
            hash: self.hash,
            author,
            date,
            title,
            message: self.message,
        })
    }
}

/// Parses multi-commit log text into an ordered commit sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitLogParser {
    mode: ParseMode,
}

impl CommitLogParser {
    pub fn new(mode: ParseMode) -> Self {
        CommitLogParser { mode }
    }

    /// Scan `log_text` into commits, newest first (the log's own order).
    ///
    /// Empty input yields an empty sequence. A block missing one of its
    /// structural lines, or carrying an unparseable date, is a
    /// [VersionManagerError::Format]; nothing is silently defaulted.
    pub fn parse(&self, log_text: &str) -> Result<Vec<Commit>> {
        let mut commits = Vec::new();
        let mut state = State::ExpectHeader;
        let mut block: Option<BlockBuilder> = None;

        for raw_line in log_text.lines() {
            let line = raw_line.trim_end_matches('\r');

            match state {
                State::ExpectHeader => {
                    if line.starts_with("commit") {
                        block = Some(BlockBuilder::new(parse_header(line)?));
                        state = State::ExpectAuthor;
                    }
                    // Anything before the first header (e.g. merge noise) is skipped.
                }
                State::ExpectAuthor => {
                    let builder = block.as_mut().ok_or_else(missing_header)?;
                    builder.author = Some(parse_author(line)?);
                    state = State::ExpectDate;
                }
                State::ExpectDate => {
                    let builder = block.as_mut().ok_or_else(missing_header)?;
                    builder.date = Some(parse_date(line)?);
                    state = State::ExpectBlank1;
                }
                State::ExpectBlank1 => {
                    if !line.trim().is_empty() {
                        return Err(VersionManagerError::format(format!(
                            "expected blank line after date, found '{}'",
                            line
                        )));
                    }
                    state = State::ExpectTitle;
                }
                State::ExpectTitle => {
                    let builder = block.as_mut().ok_or_else(missing_header)?;
                    builder.title = Some(line.trim_start().to_string());
                    state = State::ExpectBlank2;
                }
                State::ExpectBlank2 => {
                    if line.starts_with("commit") {
                        // Title-only block ran straight into the next header.
                        let done = block.take().ok_or_else(missing_header)?.finish()?;
                        commits.push(done);
                        if self.mode == ParseMode::FirstOnly {
                            return Ok(commits);
                        }
                        block = Some(BlockBuilder::new(parse_header(line)?));
                        state = State::ExpectAuthor;
                    } else if line.trim().is_empty() {
                        state = State::InMessage;
                    } else {
                        return Err(VersionManagerError::format(format!(
                            "expected blank line after title, found '{}'",
                            line
                        )));
                    }
                }
                State::InMessage => {
                    if line.starts_with("commit") {
                        let done = block.take().ok_or_else(missing_header)?.finish()?;
                        commits.push(done);
                        if self.mode == ParseMode::FirstOnly {
                            return Ok(commits);
                        }
                        block = Some(BlockBuilder::new(parse_header(line)?));
                        state = State::ExpectAuthor;
                    } else {
                        let builder = block.as_mut().ok_or_else(missing_header)?;
                        builder.message.push_str(line.trim_start());
                    }
                }
            }
        }

        if let Some(builder) = block.take() {
            match state {
                // Reaching end of input after the title is a complete block.
                State::ExpectBlank2 | State::InMessage => commits.push(builder.finish()?),
                _ => {
                    return Err(VersionManagerError::format(
                        "log text ended inside a commit block",
                    ))
                }
            }
        }

        Ok(commits)
    }
}

fn missing_header() -> VersionManagerError {
    VersionManagerError::format("log block missing commit header")
}

/// `commit <hash>` → hash
fn parse_header(line: &str) -> Result<String> {
    let hash = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| VersionManagerError::format("commit header missing hash"))?;
    Ok(hash.to_string())
}

/// `Author: <name> <<email>>` → User
fn parse_author(line: &str) -> Result<User> {
    let rest = line
        .strip_prefix("Author:")
        .ok_or_else(|| VersionManagerError::format("log block missing author line"))?
        .trim_start();

    let (name, email_part) = rest
        .split_once('<')
        .ok_or_else(|| VersionManagerError::format("author line missing email"))?;

    let email = match email_part.split_once('>') {
        Some((email, _)) => email,
        None => email_part,
    };

    Ok(User {
        name: name.trim_end().to_string(),
        email: email.trim().to_string(),
    })
}

/// `Date:   <date>` → parsed timestamp
fn parse_date(line: &str) -> Result<DateTime<FixedOffset>> {
    let rest = line
        .strip_prefix("Date:")
        .ok_or_else(|| VersionManagerError::format("log block missing date line"))?;
    parse_git_date(rest.trim())
}
