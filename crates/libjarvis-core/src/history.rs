//! Pluggable version-history source for project context
//!
//! The analyzer receives a `HistoryProvider` at construction. `NoHistory`
//! stands in when no backend is linked or history is switched off; the git
//! backend lives in `libjarvis-git`.

use std::path::Path;
use crate::error::JarvisError;
use crate::types::HistoryEntry;

/// Number of history entries captured per scan
pub const RECENT_CHANGES_LIMIT: usize = 5;

/// Read-only source of recent history entries
pub trait HistoryProvider: Send + Sync {
    /// Whether this provider can return history at all
    fn is_available(&self) -> bool {
        true
    }

    /// Up to `limit` most recent entries on the current head, newest first.
    ///
    /// Return `JarvisError::NotFound` when `project_path` is not under
    /// version control.
    fn recent_changes(&self, project_path: &Path, limit: usize) -> Result<Vec<HistoryEntry>, JarvisError>;
}

/// Provider used when history integration is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryProvider for NoHistory {
    fn is_available(&self) -> bool {
        false
    }

    fn recent_changes(&self, _project_path: &Path, _limit: usize) -> Result<Vec<HistoryEntry>, JarvisError> {
        Ok(Vec::new())
    }
}
