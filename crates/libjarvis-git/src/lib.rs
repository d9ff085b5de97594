//! Git history backend for jarvis
//!
//! Provides `GitHistory`, a `HistoryProvider` that reads the most recent
//! commits on HEAD with git2. Directories that are not repositories, and
//! repositories without commits, report `JarvisError::NotFound`.

mod error;
mod history;

pub use error::GitError;
pub use history::{GitHistory, format_commit_time, SHORT_HASH_LEN};
