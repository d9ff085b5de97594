//! Candidate enumeration for project scans
//!
//! Include patterns are globs expanded as `<root>/**/<pattern>`; hidden
//! files and directories are never matched. Exclude
//! tokens are matched as substrings of the root-relative path; tokens that
//! contain glob metacharacters are additionally matched as globs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use glob::{MatchOptions, Pattern};
use tracing::warn;

/// Number of characters kept in a file preview
pub const PREVIEW_CHARS: usize = 500;

/// Appended to previews that were cut short
pub const TRUNCATION_MARKER: &str = "...";

/// Expand include patterns under `root`, in discovery order.
///
/// A file matched by several patterns is reported once, at its first
/// position. Invalid patterns and unreadable entries are logged and skipped.
pub fn expand_includes(root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let root_str = Pattern::escape(&root.to_string_lossy());
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    for pattern in patterns {
        let full = format!("{}/**/{}", root_str.trim_end_matches('/'), pattern);
        let paths = match glob::glob_with(&full, options) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(pattern = %pattern, "Skipping invalid include pattern: {}", e);
                continue;
            }
        };

        for entry in paths {
            match entry {
                Ok(path) => {
                    if seen.insert(path.clone()) {
                        found.push(path);
                    }
                }
                Err(e) => warn!("Could not read {}: {}", e.path().display(), e.error()),
            }
        }
    }

    found
}

/// Path of `path` relative to `root`, as a display string
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Matcher for exclude tokens
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    tokens: Vec<String>,
    globs: Vec<Pattern>,
}

impl ExcludeMatcher {
    pub fn new(tokens: &[String]) -> Self {
        let mut matcher = Self::default();
        for token in tokens.iter().filter(|t| !t.is_empty()) {
            if token.contains(['*', '?', '[']) {
                match Pattern::new(token) {
                    Ok(pattern) => matcher.globs.push(pattern),
                    Err(e) => warn!(token = %token, "Exclude token is not a valid glob: {}", e),
                }
            }
            matcher.tokens.push(token.clone());
        }
        matcher
    }

    /// True if the relative path should be dropped from the scan
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        if self.tokens.iter().any(|t| relative_path.contains(t.as_str())) {
            return true;
        }

        let file_name = Path::new(relative_path)
            .file_name()
            .map(|n| n.to_string_lossy());
        self.globs.iter().any(|pattern| {
            pattern.matches(relative_path)
                || file_name.as_deref().is_some_and(|name| pattern.matches(name))
        })
    }
}

/// First `PREVIEW_CHARS` characters of `content`, plus the marker if longer.
/// Line endings are normalized to `\n` before cutting.
pub fn make_preview(content: &str) -> String {
    let content = if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content.to_string()
    };

    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], TRUNCATION_MARKER),
        None => content,
    }
}
