use comfy_table::Table;
use libjarvis_core::{FileRecord, JarvisError};
use crate::cli::Cli;
use crate::context::JarvisContext;
use crate::output::output_result;

pub fn run(cli: &Cli) -> Result<(), JarvisError> {
    let ctx = JarvisContext::resolve(cli)?;
    let context = ctx.open_analyzer().analyze_project_structure();

    let output = serde_json::json!({
        "files": context.files,
        "file_count": context.file_count,
    });
    output_result(cli, &output, &files_table(&context.files));
    Ok(())
}

fn files_table(files: &[FileRecord]) -> String {
    if files.is_empty() {
        return "No files matched the include patterns".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Path", "Language", "Size"]);
    for file in files {
        table.add_row(vec![file.path.clone(), file.language.clone(), file.size.to_string()]);
    }
    table.to_string()
}
