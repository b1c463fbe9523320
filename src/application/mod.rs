//! Application layer: resolution, invocation and usage
//!
//! This layer orchestrates the domain and writes through the I/O boundary traits.

pub mod engine;
pub mod error;
pub mod resolver;
pub mod usage;

pub use engine::{Dispatcher, Outcome};
pub use error::{ApplicationError, ApplicationResult};
pub use resolver::{resolve, Callee, Resolution};
pub use usage::{render_usage, HelpRequest, UsageEntry};
