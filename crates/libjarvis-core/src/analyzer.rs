//! Project context analysis
//!
//! `ProjectAnalyzer` owns a project root, its `AnalyzerConfig`, and a
//! `HistoryProvider`. Analysis never fails: unreadable files, bad patterns
//! and history errors are logged and leave the affected fields empty.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{save_analyzer_config, AnalyzerConfig};
use crate::error::JarvisError;
use crate::history::{HistoryProvider, RECENT_CHANGES_LIMIT};
use crate::language::detect_language;
use crate::prompt::build_prompt;
use crate::relevance::relevant_files_content;
use crate::scan::{expand_includes, make_preview, relative_path, ExcludeMatcher};
use crate::settings::SettingsUpdate;
use crate::summary::render_summary;
use crate::types::{FileRecord, HistoryEntry, ProjectContext};

pub struct ProjectAnalyzer {
    project_path: PathBuf,
    config: AnalyzerConfig,
    history: Box<dyn HistoryProvider>,
}

impl ProjectAnalyzer {
    /// Create an analyzer with an explicit configuration
    pub fn new(
        project_path: impl Into<PathBuf>,
        config: AnalyzerConfig,
        history: Box<dyn HistoryProvider>,
    ) -> Self {
        Self {
            project_path: project_path.into(),
            config,
            history,
        }
    }

    /// Create an analyzer using the project's stored config (or defaults)
    pub fn open(project_path: impl Into<PathBuf>, history: Box<dyn HistoryProvider>) -> Self {
        let project_path = project_path.into();
        let config = AnalyzerConfig::load_or_default(&project_path);
        Self::new(project_path, config, history)
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scan the project and build a fresh context
    pub fn analyze_project_structure(&self) -> ProjectContext {
        let mut context = ProjectContext::new(self.project_path.clone(), self.history.is_available());

        let excludes = ExcludeMatcher::new(&self.config.exclude_patterns);
        let candidates: Vec<(PathBuf, String)> = expand_includes(&self.project_path, &self.config.include_patterns)
            .into_iter()
            .filter_map(|path| {
                let rel = relative_path(&self.project_path, &path);
                if excludes.is_excluded(&rel) {
                    None
                } else {
                    Some((path, rel))
                }
            })
            .take(self.config.max_files)
            .collect();

        for (path, rel) in candidates {
            match self.read_file_record(&path, rel) {
                Ok(Some(record)) => context.push_file(record),
                Ok(None) => {}
                Err(e) => warn!("Could not read file {}: {}", path.display(), e),
            }
        }

        context.recent_changes = self.recent_changes();
        context.file_count = context.files.len();

        info!(
            project = %self.project_path.display(),
            files = context.file_count,
            changes = context.recent_changes.len(),
            "Analyzed project"
        );
        context
    }

    /// Human-readable summary of a context
    pub fn generate_context_summary(&self, context: &ProjectContext) -> String {
        render_summary(context)
    }

    /// Path and preview blocks of up to three files relevant to `query`
    pub fn get_relevant_files_content(&self, query: &str, context: &ProjectContext) -> String {
        relevant_files_content(query, context)
    }

    /// Prompt for the external agent. With `include_context` off the query
    /// is returned as-is and no scan happens.
    pub fn augmented_prompt(&self, query: &str, include_context: bool) -> String {
        if !include_context {
            return query.to_string();
        }
        let context = self.analyze_project_structure();
        let summary = self.generate_context_summary(&context);
        let relevant = self.get_relevant_files_content(query, &context);
        build_prompt(query, &summary, &relevant)
    }

    /// Apply a settings update and persist the result
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<(), JarvisError> {
        self.config.apply(update);
        self.save_config()
    }

    /// Restore default settings and persist them
    pub fn reset_settings(&mut self) -> Result<(), JarvisError> {
        self.config = AnalyzerConfig::default();
        self.save_config()
    }

    /// Persist the current settings to the project config file
    pub fn save_config(&self) -> Result<(), JarvisError> {
        save_analyzer_config(&self.project_path, &self.config)?;
        debug!(project = %self.project_path.display(), "Saved analyzer config");
        Ok(())
    }

    /// Build the record for one candidate; `None` for skipped entries
    fn read_file_record(&self, path: &Path, rel: String) -> Result<Option<FileRecord>, JarvisError> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Ok(None);
        }

        let size = metadata.len();
        if size > self.config.max_file_size {
            debug!(path = %rel, size, "Skipping file over size limit");
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let language = detect_language(&rel).to_string();
        Ok(Some(FileRecord {
            path: rel,
            language,
            size,
            preview: make_preview(&content),
        }))
    }

    fn recent_changes(&self) -> Vec<HistoryEntry> {
        if !self.history.is_available() {
            info!("Git integration disabled - skipping history");
            return Vec::new();
        }

        match self.history.recent_changes(&self.project_path, RECENT_CHANGES_LIMIT) {
            Ok(mut entries) => {
                entries.truncate(RECENT_CHANGES_LIMIT);
                entries
            }
            Err(JarvisError::NotFound(msg)) => {
                debug!("No history for {}: {}", self.project_path.display(), msg);
                Vec::new()
            }
            Err(e) => {
                warn!("Error getting Git info: {}", e);
                Vec::new()
            }
        }
    }
}
