//! Display settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (both streams enabled)
//! 2. Environment variables: `FUEGO_*` prefix
//!
//! Callers can still override either switch before handing the settings to a
//! [`Dispatcher`](crate::application::Dispatcher).

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "FUEGO";

/// Whether dispatch results and errors are written out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Write results (comma-separated) and usage text to stdout
    pub print_to_stdout: bool,
    /// Write `Error: <message>` lines to stderr
    pub print_to_stderr: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            print_to_stdout: true,
            print_to_stderr: true,
        }
    }
}

impl Settings {
    /// Settings that print nothing; results and errors are only returned.
    pub fn silent() -> Self {
        Self {
            print_to_stdout: false,
            print_to_stderr: false,
        }
    }

    /// Load settings: defaults overridden by `FUEGO_PRINT_TO_STDOUT` / `FUEGO_PRINT_TO_STDERR`.
    pub fn load() -> ApplicationResult<Self> {
        Self::from_environment(Self::environment())
    }

    /// Same as [`Settings::load`] but reads the variables from `vars` instead of the process.
    pub fn load_from(vars: config::Map<String, String>) -> ApplicationResult<Self> {
        Self::from_environment(Self::environment().source(Some(vars)))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).prefix_separator("_")
    }

    /// Env vars replace defaults; unset keys keep the compiled value.
    fn from_environment(environment: Environment) -> ApplicationResult<Self> {
        Config::builder()
            .add_source(environment)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_err)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
