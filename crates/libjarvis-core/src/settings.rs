//! User-driven changes to the analyzer configuration

use std::io::{self, BufRead, Write};
use crate::config::AnalyzerConfig;

/// Partial update to an `AnalyzerConfig`; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub include_patterns: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_files: Option<usize>,
    pub max_file_size: Option<u64>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Split comma-separated input into trimmed, non-empty items
pub fn parse_pattern_list(input: &str) -> Vec<String> {
    input.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ask for each setting in turn; an empty answer keeps the current value.
pub fn prompt_settings_update<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: &AnalyzerConfig,
) -> io::Result<SettingsUpdate> {
    writeln!(output, "Current settings:")?;
    writeln!(output, "  include_patterns: {}", current.include_patterns.join(", "))?;
    writeln!(output, "  exclude_patterns: {}", current.exclude_patterns.join(", "))?;
    writeln!(output, "  max_files: {}", current.max_files)?;
    writeln!(output, "  max_file_size: {}", current.max_file_size)?;
    writeln!(output)?;
    writeln!(output, "Configure settings (press Enter to keep current value):")?;

    let mut update = SettingsUpdate::default();

    let answer = ask(input, output, &format!(
        "Include patterns (comma-separated) [{}]: ",
        current.include_patterns.join(", ")
    ))?;
    if !answer.is_empty() {
        update.include_patterns = Some(parse_pattern_list(&answer));
    }

    let answer = ask(input, output, &format!(
        "Exclude patterns (comma-separated) [{}]: ",
        current.exclude_patterns.join(", ")
    ))?;
    if !answer.is_empty() {
        update.exclude_patterns = Some(parse_pattern_list(&answer));
    }

    let answer = ask(input, output, &format!("Max files to analyze [{}]: ", current.max_files))?;
    if !answer.is_empty() {
        match answer.parse() {
            Ok(n) => update.max_files = Some(n),
            Err(_) => writeln!(output, "Invalid number, keeping current value")?,
        }
    }

    let answer = ask(input, output, &format!("Max file size in bytes [{}]: ", current.max_file_size))?;
    if !answer.is_empty() {
        match answer.parse() {
            Ok(n) => update.max_file_size = Some(n),
            Err(_) => writeln!(output, "Invalid number, keeping current value")?,
        }
    }

    Ok(update)
}

/// Print a prompt and read one trimmed line (empty at end of input)
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
