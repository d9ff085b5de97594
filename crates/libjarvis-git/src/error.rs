use libjarvis_core::JarvisError;
use thiserror::Error;

/// Errors that can occur while reading git history
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository")]
    NotARepo,

    #[error("Repository has no commits")]
    NoHistory,
}

impl From<GitError> for JarvisError {
    fn from(e: GitError) -> Self {
        match e {
            GitError::NotARepo | GitError::NoHistory => JarvisError::NotFound(e.to_string()),
            GitError::Git(inner) => JarvisError::History(inner.message().to_string()),
        }
    }
}
