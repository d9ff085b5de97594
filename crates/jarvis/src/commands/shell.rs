//! Interactive text loop
//!
//! Each query is answered with the prompt that would go to the agent.
//! Special commands: `context`, `config`, `no-context`, `help`, and
//! `quit` / `exit` / `bye`.

use std::io::{self, BufRead, Write};

use libjarvis_core::{JarvisError, ProjectAnalyzer};
use tracing::error;
use crate::cli::Cli;
use crate::commands::config::edit_settings;
use crate::context::JarvisContext;

const HELP: &str = "\
Special commands:
  'context'    - Show project context
  'config'     - Configure project analysis
  'no-context' - Disable context for next query
  'quit'       - Leave the shell";

pub fn run(cli: &Cli) -> Result<(), JarvisError> {
    let ctx = JarvisContext::resolve(cli)?;
    let mut analyzer = ctx.open_analyzer();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut analyzer, &mut stdin.lock(), &mut stdout.lock())
}

/// Read commands until a quit word or end of input
pub fn run_loop<R: BufRead, W: Write>(
    analyzer: &mut ProjectAnalyzer,
    input: &mut R,
    output: &mut W,
) -> Result<(), JarvisError> {
    writeln!(output, "Text mode active. Type your commands (or 'quit' to exit):")?;
    writeln!(output, "{}", HELP)?;

    let mut context_enabled = true;

    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let command = line.trim();

        match command.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "bye" => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            "help" => writeln!(output, "{}", HELP)?,
            "context" => {
                writeln!(output, "Analyzing project context...")?;
                let context = analyzer.analyze_project_structure();
                writeln!(output, "\n{}", analyzer.generate_context_summary(&context))?;
            }
            "config" => {
                // A failed save should not end the session
                match edit_settings(analyzer, input, output) {
                    Ok(()) => writeln!(output, "Configuration saved!")?,
                    Err(e) => {
                        error!("Error saving config: {}", e);
                        writeln!(output, "Could not save configuration: {}", e)?;
                    }
                }
            }
            "no-context" => {
                context_enabled = false;
                writeln!(output, "Context disabled for next query")?;
            }
            _ => {
                let prompt = analyzer.augmented_prompt(command, context_enabled);
                writeln!(output, "Prompt:\n{}", prompt)?;
                context_enabled = true;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libjarvis_core::{load_analyzer_config, NoHistory};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(analyzer: &mut ProjectAnalyzer, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run_loop(analyzer, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_context_command() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("app.py"), "print('hi')").unwrap();
        let mut analyzer = ProjectAnalyzer::open(dir.path(), Box::new(NoHistory));

        let out = run_script(&mut analyzer, "context\nquit\n");
        assert!(out.contains("Files: 1 files analyzed"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_no_context_applies_to_one_query() {
        let dir = tempdir().unwrap();
        let mut analyzer = ProjectAnalyzer::open(dir.path(), Box::new(NoHistory));

        let out = run_script(&mut analyzer, "no-context\nfirst question\nsecond question\n");
        assert!(out.contains("Prompt:\nfirst question\n"));
        assert!(out.contains("User Query: second question"));
        assert_eq!(out.matches("Project Context:").count(), 1);
    }

    #[test]
    fn test_config_command_saves() {
        let dir = tempdir().unwrap();
        let mut analyzer = ProjectAnalyzer::open(dir.path(), Box::new(NoHistory));

        let out = run_script(&mut analyzer, "config\n\n\n25\n\nexit\n");
        assert!(out.contains("Configuration saved!"));
        assert_eq!(load_analyzer_config(dir.path()).unwrap().unwrap().max_files, 25);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let dir = tempdir().unwrap();
        let mut analyzer = ProjectAnalyzer::open(dir.path(), Box::new(NoHistory));

        let out = run_script(&mut analyzer, "");
        assert!(out.starts_with("Text mode active."));
        assert!(!out.contains("Goodbye!"));
    }
}
