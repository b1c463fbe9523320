//! Infrastructure layer: I/O boundary for results and errors
//!
//! The dispatcher writes through these traits so it can be tested with captured output.

pub mod traits;

pub use traits::{BufferedOutput, OutputSink, TerminalOutput};
