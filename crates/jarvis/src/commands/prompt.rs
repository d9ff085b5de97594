use libjarvis_core::{JarvisError, SYSTEM_PROMPT};
use crate::cli::Cli;
use crate::context::JarvisContext;
use crate::output::output_result;

pub fn run(cli: &Cli, query: Vec<String>, no_context: bool, system: bool) -> Result<(), JarvisError> {
    let query = query.join(" ");
    let ctx = JarvisContext::resolve(cli)?;
    let prompt = ctx.open_analyzer().augmented_prompt(&query, !no_context);

    let human = if system {
        format!("{}\n\n{}", SYSTEM_PROMPT, prompt)
    } else {
        prompt.clone()
    };

    let output = serde_json::json!({
        "system": SYSTEM_PROMPT,
        "prompt": prompt,
        "include_context": !no_context,
    });
    output_result(cli, &output, &human);
    Ok(())
}
