use std::path::Path;

/// Label used for extensions missing from the table
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// File names (lowercase) that mark a project config file.
/// Matched as substrings of the lowercased relative path.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "pom.xml",
    ".env",
    "dockerfile",
    "docker-compose.yml",
];

/// Detect language label from file extension
pub fn detect_language(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("py") => "Python",
        Some("js") => "JavaScript",
        Some("java") => "Java",
        Some("cpp") => "C++",
        Some("html") => "HTML",
        Some("css") => "CSS",
        Some("json") => "JSON",
        Some("yml") | Some("yaml") => "YAML",
        Some("md") => "Markdown",
        Some("txt") => "Text",
        _ => UNKNOWN_LANGUAGE,
    }
}

/// Check whether a relative path names a known config file (case-insensitive)
pub fn is_config_file(relative_path: &str) -> bool {
    let lower = relative_path.to_lowercase();
    CONFIG_FILE_NAMES.iter().any(|name| lower.contains(name))
}
