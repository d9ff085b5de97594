//! Keyword-overlap relevance for picking files to quote in a prompt
//!
//! A file's score is the number of query keywords found in its lowercased
//! path or preview. Files scoring zero are dropped; the rest are ordered by
//! descending score, ties keeping discovery order.

use serde::Serialize;
use crate::types::{FileRecord, ProjectContext};

/// Maximum files returned for a query
pub const MAX_RELEVANT_FILES: usize = 3;

/// A file paired with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredFile<'a> {
    pub file: &'a FileRecord,
    pub score: usize,
}

/// Lowercased whitespace-separated keywords of a query
pub fn keywords(query: &str) -> Vec<String> {
    query.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Number of keywords occurring in the file's path or preview
pub fn relevance_score(keywords: &[String], file: &FileRecord) -> usize {
    let path = file.path.to_lowercase();
    let preview = file.preview.to_lowercase();
    keywords.iter()
        .filter(|k| path.contains(k.as_str()) || preview.contains(k.as_str()))
        .count()
}

/// Up to `MAX_RELEVANT_FILES` files matching the query, best first
pub fn rank_relevant_files<'a>(query: &str, context: &'a ProjectContext) -> Vec<ScoredFile<'a>> {
    let keywords = keywords(query);
    let mut scored: Vec<ScoredFile<'a>> = context.files.iter()
        .map(|file| ScoredFile { file, score: relevance_score(&keywords, file) })
        .filter(|s| s.score > 0)
        .collect();

    // sort_by is stable, so equal scores stay in discovery order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RELEVANT_FILES);
    scored
}

/// Path and preview blocks of the files relevant to `query`
pub fn relevant_files_content(query: &str, context: &ProjectContext) -> String {
    rank_relevant_files(query, context)
        .iter()
        .map(|s| format!("File: {}\n{}\n", s.file.path, s.file.preview))
        .collect::<Vec<_>>()
        .join("\n")
}
