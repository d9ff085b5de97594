use libjarvis_core::JarvisError;
use crate::cli::Cli;
use crate::context::JarvisContext;
use crate::output::output_result;

pub fn run(cli: &Cli) -> Result<(), JarvisError> {
    let ctx = JarvisContext::resolve(cli)?;
    let analyzer = ctx.open_analyzer();

    let context = analyzer.analyze_project_structure();
    let summary = analyzer.generate_context_summary(&context);

    output_result(cli, &context, &summary);
    Ok(())
}
