use std::path::PathBuf;
use libjarvis_core::{HistoryProvider, JarvisError, NoHistory, ProjectAnalyzer};
use crate::cli::Cli;

/// Resolved project for a jarvis command
pub struct JarvisContext {
    pub project_path: PathBuf,
    pub history_enabled: bool,
}

impl JarvisContext {
    /// Resolve the project directory from `--project` or the current directory
    pub fn resolve(cli: &Cli) -> Result<Self, JarvisError> {
        let path = match cli.project {
            Some(ref path) => path.clone(),
            None => std::env::current_dir()?,
        };

        if !path.is_dir() {
            return Err(JarvisError::NotFound(format!(
                "Project directory not found: {}",
                path.display()
            )));
        }

        Ok(Self {
            project_path: path.canonicalize()?,
            history_enabled: !cli.no_history,
        })
    }

    /// History backend for this invocation
    pub fn history_provider(&self) -> Box<dyn HistoryProvider> {
        if self.history_enabled {
            default_history()
        } else {
            Box::new(NoHistory)
        }
    }

    /// Open an analyzer with the project's stored settings
    pub fn open_analyzer(&self) -> ProjectAnalyzer {
        ProjectAnalyzer::open(self.project_path.clone(), self.history_provider())
    }
}

#[cfg(feature = "git")]
fn default_history() -> Box<dyn HistoryProvider> {
    Box::new(libjarvis_git::GitHistory::new())
}

#[cfg(not(feature = "git"))]
fn default_history() -> Box<dyn HistoryProvider> {
    Box::new(NoHistory)
}
