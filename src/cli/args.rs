//! CLI argument definitions using clap
//!
//! Only the binary's own switches are parsed here; every other token is handed
//! to the dispatcher untouched.

use clap::{ArgAction, Parser};

/// Invoke the bundled demo functions and `MyMath` record from the command line
#[derive(Parser, Debug)]
#[command(name = "fuego")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Do not print results
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print errors
    #[arg(long)]
    pub no_errors: bool,

    /// Command and arguments, e.g. `AddInt 3 5` or `MyMath.Add --Offset=1 5 3`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}
