use thiserror::Error;

/// Main error type for jarvis operations
#[derive(Debug, Error)]
pub enum JarvisError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history error: {0}")]
    History(String),
}

impl JarvisError {
    /// Get the error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            JarvisError::InvalidArgs(_) => "invalid_args",
            JarvisError::NotFound(_) => "not_found",
            JarvisError::Io(_) => "io_error",
            JarvisError::Json(_) => "invalid_config",
            JarvisError::History(_) => "history_error",
        }
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            JarvisError::InvalidArgs(_) => 2,
            JarvisError::NotFound(_) => 3,
            JarvisError::Io(_) => 5,
            JarvisError::Json(_) => 5,
            _ => 1,
        }
    }

    /// Get actionable suggestions for fixing the error
    pub fn suggestions(&self) -> Vec<&'static str> {
        match self {
            JarvisError::NotFound(msg) => {
                if msg.contains("directory") {
                    vec!["Pass an existing project directory with --project <dir>"]
                } else {
                    vec![]
                }
            }
            JarvisError::Json(_) => vec![
                "Check .jarvis_config.json for syntax errors",
                "Or run 'jarvis config reset' to restore the defaults",
            ],
            JarvisError::Io(_) => vec![
                "Check that the project directory is writable",
            ],
            _ => vec![],
        }
    }
}
