use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jarvis", about = "Project-aware prompt assistant", version)]
pub struct Cli {
    /// Project directory to analyze (defaults to the current directory)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress human-readable output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Skip git history when building context
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze the project and print a context summary
    Context,

    /// List the files picked up by the analyzer
    Files,

    /// Show the files most relevant to a query
    Relevant {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Build the context-augmented prompt for a query
    Prompt {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,

        /// Send the query without project context
        #[arg(long)]
        no_context: bool,

        /// Print the assistant system prompt first
        #[arg(long)]
        system: bool,
    },

    /// Analyzer settings stored in .jarvis_config.json
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },

    /// Interactive text loop
    Shell,
}

#[derive(Clone, Subcommand)]
pub enum ConfigCommand {
    /// Show current settings
    Show,

    /// Update settings and save them
    Set {
        /// Include glob patterns (comma-separated)
        #[arg(long)]
        include: Option<String>,

        /// Exclude tokens (comma-separated)
        #[arg(long)]
        exclude: Option<String>,

        /// Maximum number of files to analyze
        #[arg(long)]
        max_files: Option<usize>,

        /// Maximum file size in bytes
        #[arg(long)]
        max_file_size: Option<u64>,
    },

    /// Restore default settings
    Reset,

    /// Edit settings interactively
    Edit,
}
