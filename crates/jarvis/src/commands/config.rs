use std::io::{self, BufRead, Write};

use comfy_table::Table;
use libjarvis_core::{
    config::config_path, parse_pattern_list, prompt_settings_update, AnalyzerConfig, JarvisError,
    ProjectAnalyzer, SettingsUpdate,
};
use tracing::info;
use crate::cli::{Cli, ConfigCommand};
use crate::context::JarvisContext;
use crate::output::{output_result, print_human};

pub fn run(cli: &Cli, cmd: ConfigCommand) -> Result<(), JarvisError> {
    match cmd {
        ConfigCommand::Show => run_show(cli),
        ConfigCommand::Set { include, exclude, max_files, max_file_size } => {
            let update = SettingsUpdate {
                include_patterns: include.as_deref().map(parse_pattern_list),
                exclude_patterns: exclude.as_deref().map(parse_pattern_list),
                max_files,
                max_file_size,
            };
            run_set(cli, update)
        }
        ConfigCommand::Reset => run_reset(cli),
        ConfigCommand::Edit => run_edit(cli),
    }
}

fn run_show(cli: &Cli) -> Result<(), JarvisError> {
    let ctx = JarvisContext::resolve(cli)?;
    let analyzer = ctx.open_analyzer();
    output_config(cli, &analyzer, "show");
    Ok(())
}

fn run_set(cli: &Cli, update: SettingsUpdate) -> Result<(), JarvisError> {
    if update.is_empty() {
        return Err(JarvisError::InvalidArgs(
            "Nothing to set; pass --include, --exclude, --max-files or --max-file-size".to_string(),
        ));
    }

    let ctx = JarvisContext::resolve(cli)?;
    let mut analyzer = ctx.open_analyzer();
    analyzer.update_settings(update)?;
    info!(path = %config_path(analyzer.project_path()).display(), "Configuration saved");

    output_config(cli, &analyzer, "set");
    Ok(())
}

fn run_reset(cli: &Cli) -> Result<(), JarvisError> {
    let ctx = JarvisContext::resolve(cli)?;
    let mut analyzer = ctx.open_analyzer();
    analyzer.reset_settings()?;

    output_config(cli, &analyzer, "reset");
    Ok(())
}

fn run_edit(cli: &Cli) -> Result<(), JarvisError> {
    let ctx = JarvisContext::resolve(cli)?;
    let mut analyzer = ctx.open_analyzer();

    let stdin = io::stdin();
    let stdout = io::stdout();
    edit_settings(&mut analyzer, &mut stdin.lock(), &mut stdout.lock())?;

    print_human(cli, "Configuration saved!");
    Ok(())
}

/// Interactive settings edit followed by a save
pub fn edit_settings<R: BufRead, W: Write>(
    analyzer: &mut ProjectAnalyzer,
    input: &mut R,
    output: &mut W,
) -> Result<(), JarvisError> {
    writeln!(output, "Project Analysis Configuration")?;
    let update = prompt_settings_update(input, output, analyzer.config())?;
    analyzer.update_settings(update)
}

fn output_config(cli: &Cli, analyzer: &ProjectAnalyzer, action: &str) {
    let config = analyzer.config();
    let output = serde_json::json!({
        "action": action,
        "path": config_path(analyzer.project_path()),
        "config": config,
    });
    output_result(cli, &output, &config_table(config));
}

fn config_table(config: &AnalyzerConfig) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["include_patterns".to_string(), config.include_patterns.join(", ")]);
    table.add_row(vec!["exclude_patterns".to_string(), config.exclude_patterns.join(", ")]);
    table.add_row(vec!["max_files".to_string(), config.max_files.to_string()]);
    table.add_row(vec!["max_file_size".to_string(), config.max_file_size.to_string()]);
    table.to_string()
}
