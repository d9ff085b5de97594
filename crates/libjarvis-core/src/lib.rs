pub mod types;
pub mod language;
pub mod scan;
pub mod history;
pub mod summary;
pub mod relevance;
pub mod prompt;
pub mod settings;
pub mod config;
pub mod analyzer;
pub mod error;

pub use error::JarvisError;
pub use types::{FileRecord, HistoryEntry, ProjectContext};
pub use analyzer::ProjectAnalyzer;
pub use history::{HistoryProvider, NoHistory, RECENT_CHANGES_LIMIT};
pub use relevance::{rank_relevant_files, ScoredFile};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use settings::{parse_pattern_list, prompt_settings_update, SettingsUpdate};
pub use config::{AnalyzerConfig, CONFIG_FILE, load_analyzer_config, save_analyzer_config};
