use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::language::is_config_file;

/// A single file captured by a project scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the project root
    pub path: String,
    pub language: String,
    /// Size in bytes at scan time
    pub size: u64,
    /// First 500 characters, with a marker appended when truncated
    pub preview: String,
}

/// A recent commit on the project's current head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Abbreviated commit hash (8 hex chars)
    pub hash: String,
    pub message: String,
    pub author: String,
    /// Commit timestamp, RFC 3339 with the committer's offset
    pub date: String,
}

impl HistoryEntry {
    /// First line of the commit message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Snapshot of a project directory, built fresh for each request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub project_path: PathBuf,
    /// Files in discovery order
    pub files: Vec<FileRecord>,
    pub languages: BTreeSet<String>,
    /// Relative paths of recognized config files; always a subset of `files`
    pub config_files: Vec<String>,
    pub recent_changes: Vec<HistoryEntry>,
    pub file_count: usize,
    /// Whether a history backend was configured for the scan
    pub history_enabled: bool,
}

impl ProjectContext {
    /// Create an empty context for a project root
    pub fn new(project_path: PathBuf, history_enabled: bool) -> Self {
        Self {
            project_path,
            files: Vec::new(),
            languages: BTreeSet::new(),
            config_files: Vec::new(),
            recent_changes: Vec::new(),
            file_count: 0,
            history_enabled,
        }
    }

    /// Record a scanned file, keeping the derived fields in step
    pub fn push_file(&mut self, record: FileRecord) {
        self.languages.insert(record.language.clone());
        if is_config_file(&record.path) {
            self.config_files.push(record.path.clone());
        }
        self.files.push(record);
        self.file_count = self.files.len();
    }

    /// Basename of the project path
    pub fn project_name(&self) -> String {
        project_name(&self.project_path)
    }
}

fn project_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
