//! CLI layer: argument parsing and command dispatch for the demo binary

pub mod args;
pub mod commands;
pub mod demo;
pub mod error;

pub use args::Cli;
pub use commands::execute_command;
pub use error::{CliError, CliResult};
