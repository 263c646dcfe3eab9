//! Domain logic - pure data model independent of git invocation

pub mod commit;
pub mod version;

pub use commit::{Commit, User};
pub use version::{Stage, Version};
