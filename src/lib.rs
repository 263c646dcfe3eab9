pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod git;
pub mod parser;
pub mod release;
pub mod ui;

pub use error::{Result, VersionManagerError};
