use crate::types::ProjectContext;

/// Config files listed before the overflow note
pub const SUMMARY_CONFIG_FILES: usize = 3;
/// History entries listed in a summary
pub const SUMMARY_CHANGES: usize = 3;
/// Files listed before the overflow note
pub const SUMMARY_FILES: usize = 5;

/// Render a human-readable summary of a project context.
///
/// Output depends only on `context`.
pub fn render_summary(context: &ProjectContext) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Project: {}", context.project_name()));
    lines.push(format!("Path: {}", context.project_path.display()));
    lines.push(format!("Files: {} files analyzed", context.file_count));

    if !context.languages.is_empty() {
        let languages: Vec<&str> = context.languages.iter().map(String::as_str).collect();
        lines.push(format!("Languages: {}", languages.join(", ")));
    }

    if !context.config_files.is_empty() {
        let shown: Vec<&str> = context.config_files.iter()
            .take(SUMMARY_CONFIG_FILES)
            .map(String::as_str)
            .collect();
        lines.push(format!("Config files: {}", shown.join(", ")));
        if context.config_files.len() > SUMMARY_CONFIG_FILES {
            lines.push(format!("   ... and {} more", context.config_files.len() - SUMMARY_CONFIG_FILES));
        }
    }

    if !context.recent_changes.is_empty() {
        lines.push("Recent changes:".to_string());
        for change in context.recent_changes.iter().take(SUMMARY_CHANGES) {
            lines.push(format!("   - {}: {}", change.hash, change.subject()));
        }
    } else if !context.history_enabled {
        lines.push("Git integration: disabled".to_string());
    }

    if !context.files.is_empty() {
        lines.push("Key files:".to_string());
        for file in context.files.iter().take(SUMMARY_FILES) {
            lines.push(format!("   - {} ({})", file.path, file.language));
        }
        if context.files.len() > SUMMARY_FILES {
            lines.push(format!("   ... and {} more files", context.files.len() - SUMMARY_FILES));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use crate::types::{FileRecord, HistoryEntry};

    fn file(path: &str, language: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            language: language.to_string(),
            size: 1,
            preview: String::new(),
        }
    }

    fn change(hash: &str, message: &str) -> HistoryEntry {
        HistoryEntry {
            hash: hash.to_string(),
            message: message.to_string(),
            author: "Alice".to_string(),
            date: "2023-11-14T22:13:20+00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_context() {
        let ctx = ProjectContext::new(PathBuf::from("/work/shop"), true);
        let summary = render_summary(&ctx);

        assert_eq!(summary, "Project: shop\nPath: /work/shop\nFiles: 0 files analyzed");
    }

    #[test]
    fn test_full_summary_layout() {
        let mut ctx = ProjectContext::new(PathBuf::from("/work/shop"), true);
        ctx.push_file(file("app.py", "Python"));
        ctx.push_file(file("package.json", "JSON"));
        ctx.recent_changes.push(change("0123abcd", "Add cart\n\nDetails"));

        let expected = "\
Project: shop
Path: /work/shop
Files: 2 files analyzed
Languages: JSON, Python
Config files: package.json
Recent changes:
   - 0123abcd: Add cart
Key files:
   - app.py (Python)
   - package.json (JSON)";
        assert_eq!(render_summary(&ctx), expected);
    }

    #[test]
    fn test_overflow_notes() {
        let mut ctx = ProjectContext::new(PathBuf::from("/work/shop"), true);
        for i in 0..4 {
            ctx.push_file(file(&format!("svc{}/Dockerfile", i), "Unknown"));
        }
        for i in 0..3 {
            ctx.push_file(file(&format!("m{}.py", i), "Python"));
        }
        for i in 0..5 {
            ctx.recent_changes.push(change(&format!("{:08}", i), "msg"));
        }

        let summary = render_summary(&ctx);
        assert!(summary.contains("Config files: svc0/Dockerfile, svc1/Dockerfile, svc2/Dockerfile\n"));
        assert!(summary.contains("   ... and 1 more\n"));
        assert!(summary.contains("   ... and 2 more files"));
        assert_eq!(summary.matches(": msg").count(), SUMMARY_CHANGES);
    }

    #[test]
    fn test_history_disabled_note() {
        let ctx = ProjectContext::new(PathBuf::from("/work/shop"), false);
        assert!(render_summary(&ctx).contains("Git integration: disabled"));

        let enabled = ProjectContext::new(PathBuf::from("/work/shop"), true);
        assert!(!render_summary(&enabled).contains("Git integration"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut ctx = ProjectContext::new(PathBuf::from("/work/shop"), false);
        ctx.push_file(file("b.md", "Markdown"));
        ctx.push_file(file("a.py", "Python"));

        assert_eq!(render_summary(&ctx), render_summary(&ctx.clone()));
    }
}
