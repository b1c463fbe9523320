//! Make functions, structured values and lists of them invokable from the command line.
//!
//! A [`Target`] is described once through explicit type descriptors
//! ([`Function::new`], [`Record::builder`]); a [`Dispatcher`] then resolves a
//! token stream against it, converts the tokens into typed arguments, performs
//! the call and reports the results.
//!
//! ```
//! use fuego::{Dispatcher, Settings, Target, Value};
//!
//! let mut target = Target::callable("Add", |a: i64, b: i64| a + b);
//! let dispatcher = Dispatcher::new(Settings::silent());
//!
//! let outcome = dispatcher.dispatch(&mut target, &["prog", "Add", "3", "5"]).unwrap();
//! assert_eq!(outcome.values(), &[Value::Int64(8)]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, Dispatcher, Outcome};
pub use cli::{CliError, CliResult};
pub use config::Settings;
pub use domain::{
    ConversionError, Function, ParameterKind, Record, Scalar, Signature, StructuredTarget, Target,
    Value,
};
pub use infrastructure::{BufferedOutput, OutputSink, TerminalOutput};

/// Dispatch the process arguments against `target`.
///
/// Settings come from [`Settings::load`]; results and errors go to the terminal.
/// The process is never terminated here; map the error to an exit code yourself.
pub fn dispatch(target: &mut Target) -> ApplicationResult<Outcome> {
    let settings = Settings::load()?;
    let tokens: Vec<String> = std::env::args().collect();
    Dispatcher::new(settings).dispatch(target, &tokens)
}
