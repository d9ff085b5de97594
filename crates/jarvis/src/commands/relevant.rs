use libjarvis_core::{rank_relevant_files, JarvisError};
use crate::cli::Cli;
use crate::context::JarvisContext;
use crate::output::output_result;

pub fn run(cli: &Cli, query: Vec<String>) -> Result<(), JarvisError> {
    let query = query.join(" ");
    let ctx = JarvisContext::resolve(cli)?;
    let analyzer = ctx.open_analyzer();
    let context = analyzer.analyze_project_structure();

    let matches: Vec<serde_json::Value> = rank_relevant_files(&query, &context)
        .iter()
        .map(|s| {
            serde_json::json!({
                "path": s.file.path,
                "language": s.file.language,
                "score": s.score,
                "preview": s.file.preview,
            })
        })
        .collect();

    let content = analyzer.get_relevant_files_content(&query, &context);
    let human = if content.is_empty() {
        format!("No files relevant to '{}'", query)
    } else {
        content
    };

    let output = serde_json::json!({
        "query": query,
        "matches": matches,
        "count": matches.len(),
    });
    output_result(cli, &output, &human);
    Ok(())
}
