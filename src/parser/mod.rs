//! Parsers turning raw version-control text into the domain model

pub mod commit_log;

pub use commit_log::{CommitLogParser, ParseMode};
