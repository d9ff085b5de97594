use std::path::Path;
use chrono::{FixedOffset, TimeZone};
use git2::{Commit, ErrorCode, Repository, Sort};
use libjarvis_core::{HistoryEntry, HistoryProvider, JarvisError};
use tracing::debug;

use crate::GitError;

/// Length of the abbreviated commit hash
pub const SHORT_HASH_LEN: usize = 8;

/// History provider backed by the repository at the project root
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHistory;

impl GitHistory {
    pub fn new() -> Self {
        Self
    }

    /// Read up to `limit` commits reachable from HEAD, newest first.
    ///
    /// Only `project_path` itself is checked; parent directories are not
    /// searched for a repository.
    pub fn read_recent(&self, project_path: &Path, limit: usize) -> Result<Vec<HistoryEntry>, GitError> {
        let repo = Repository::open(project_path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::NotARepo
            } else {
                GitError::Git(e)
            }
        })?;

        match repo.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Err(GitError::NoHistory);
            }
            Err(e) => return Err(e.into()),
        }

        let mut revwalk = repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        let mut entries = Vec::with_capacity(limit);
        for oid in revwalk.take(limit) {
            let commit = repo.find_commit(oid?)?;
            entries.push(entry_from_commit(&commit));
        }

        debug!(path = %project_path.display(), count = entries.len(), "Read git history");
        Ok(entries)
    }
}

impl HistoryProvider for GitHistory {
    fn recent_changes(&self, project_path: &Path, limit: usize) -> Result<Vec<HistoryEntry>, JarvisError> {
        Ok(self.read_recent(project_path, limit)?)
    }
}

fn entry_from_commit(commit: &Commit<'_>) -> HistoryEntry {
    let mut hash = commit.id().to_string();
    hash.truncate(SHORT_HASH_LEN);

    HistoryEntry {
        hash,
        message: String::from_utf8_lossy(commit.message_bytes()).trim().to_string(),
        author: String::from_utf8_lossy(commit.author().name_bytes()).into_owned(),
        date: format_commit_time(commit.time()),
    }
}

/// Format a commit time as RFC 3339 in the committer's own offset
pub fn format_commit_time(time: git2::Time) -> String {
    FixedOffset::east_opt(time.offset_minutes() * 60)
        .and_then(|tz| tz.timestamp_opt(time.seconds(), 0).single())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| time.seconds().to_string())
}
