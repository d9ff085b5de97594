pub mod context;
pub mod files;
pub mod relevant;
pub mod prompt;
pub mod config;
pub mod shell;
