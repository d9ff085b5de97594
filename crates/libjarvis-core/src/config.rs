use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use crate::error::JarvisError;
use crate::settings::SettingsUpdate;

/// Project-local config file name
pub const CONFIG_FILE: &str = ".jarvis_config.json";

/// Analyzer configuration stored in `<project>/.jarvis_config.json`
///
/// Fields missing from the stored record take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Glob patterns, each expanded recursively under the project root
    pub include_patterns: Vec<String>,
    /// Tokens matched against relative paths (see `scan::ExcludeMatcher`)
    pub exclude_patterns: Vec<String>,
    /// Maximum number of candidate files examined per scan
    pub max_files: usize,
    /// Files larger than this many bytes are skipped
    pub max_file_size: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            include_patterns: [
                "*.py", "*.js", "*.java", "*.cpp", "*.html", "*.css", "*.json", "*.yml", "*.yaml",
                "*.md",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            exclude_patterns: ["__pycache__", "node_modules", ".git", "venv", ".env", "*.log"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_files: 50,
            max_file_size: 10_000,
        }
    }
}

impl AnalyzerConfig {
    /// Load the project config, falling back to defaults when the file is
    /// absent or unreadable.
    pub fn load_or_default(project_path: &Path) -> Self {
        match load_analyzer_config(project_path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(path = %config_path(project_path).display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                error!("Error loading config: {}", e);
                Self::default()
            }
        }
    }

    /// Apply a settings update; `None` fields keep their current value
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(include) = update.include_patterns {
            self.include_patterns = include;
        }
        if let Some(exclude) = update.exclude_patterns {
            self.exclude_patterns = exclude;
        }
        if let Some(max_files) = update.max_files {
            self.max_files = max_files;
        }
        if let Some(max_file_size) = update.max_file_size {
            self.max_file_size = max_file_size;
        }
    }
}

/// Get the config file path for a project
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE)
}

/// Load analyzer config from `<project>/.jarvis_config.json`
pub fn load_analyzer_config(project_path: &Path) -> Result<Option<AnalyzerConfig>, JarvisError> {
    let path = config_path(project_path);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)?;
    let config: AnalyzerConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Save analyzer config to `<project>/.jarvis_config.json`
pub fn save_analyzer_config(project_path: &Path, config: &AnalyzerConfig) -> Result<(), JarvisError> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path(project_path), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();

        let config = AnalyzerConfig {
            include_patterns: vec!["*.rs".to_string()],
            exclude_patterns: vec!["target".to_string()],
            max_files: 7,
            max_file_size: 2048,
        };

        save_analyzer_config(dir.path(), &config).unwrap();
        let loaded = load_analyzer_config(dir.path()).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert!(load_analyzer_config(dir.path()).unwrap().is_none());
        assert_eq!(AnalyzerConfig::load_or_default(dir.path()), AnalyzerConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        assert!(load_analyzer_config(dir.path()).is_err());
        assert_eq!(AnalyzerConfig::load_or_default(dir.path()), AnalyzerConfig::default());
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"max_files": 3}"#).unwrap();

        let config = AnalyzerConfig::load_or_default(dir.path());
        assert_eq!(config.max_files, 3);
        assert_eq!(config.max_file_size, 10_000);
        assert_eq!(config.include_patterns, AnalyzerConfig::default().include_patterns);
    }

    #[test]
    fn test_stored_field_names() {
        let json = serde_json::to_value(AnalyzerConfig::default()).unwrap();
        for key in ["include_patterns", "exclude_patterns", "max_files", "max_file_size"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut config = AnalyzerConfig::default();
        config.apply(SettingsUpdate {
            max_files: Some(10),
            ..Default::default()
        });

        assert_eq!(config.max_files, 10);
        assert_eq!(config.max_file_size, 10_000);
        assert_eq!(config.exclude_patterns, AnalyzerConfig::default().exclude_patterns);
    }
}
