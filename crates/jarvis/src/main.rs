mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Command};
use libjarvis_core::JarvisError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    if let Err(e) = run_command(&cli) {
        output::output_error(&cli, &e);
        std::process::exit(e.exit_code());
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_command(cli: &Cli) -> Result<(), JarvisError> {
    match &cli.command {
        Command::Context => commands::context::run(cli),
        Command::Files => commands::files::run(cli),
        Command::Relevant { query } => commands::relevant::run(cli, query.clone()),
        Command::Prompt { query, no_context, system } => {
            commands::prompt::run(cli, query.clone(), *no_context, *system)
        }
        Command::Config { cmd } => commands::config::run(cli, cmd.clone()),
        Command::Shell => commands::shell::run(cli),
    }
}
