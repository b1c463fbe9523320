//! I/O boundary traits for testability
//!
//! The dispatcher never prints directly; it hands finished lines to an
//! [`OutputSink`].

use std::cell::RefCell;

use colored::Colorize;

/// Destination for dispatch output.
pub trait OutputSink {
    /// A line of results or usage text for the standard output stream.
    fn result(&self, line: &str);

    /// A line already prefixed with `Error: ` for the standard error stream.
    fn error(&self, line: &str);
}

impl<O: OutputSink + ?Sized> OutputSink for &O {
    fn result(&self, line: &str) {
        (**self).result(line)
    }

    fn error(&self, line: &str) {
        (**self).error(line)
    }
}

/// Writes to stdout/stderr; errors are red unless NO_COLOR is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalOutput;

impl OutputSink for TerminalOutput {
    fn result(&self, line: &str) {
        println!("{}", line);
    }

    fn error(&self, line: &str) {
        eprintln!("{}", line.red());
    }
}

/// Captures output lines in memory.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    results: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<String> {
        self.results.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl OutputSink for BufferedOutput {
    fn result(&self, line: &str) {
        self.results.borrow_mut().push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.errors.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<O: OutputSink>(sink: O) {
        sink.result("8");
        sink.error("Error: boom");
    }

    #[test]
    fn given_buffered_output_when_writing_through_reference_then_captures_lines() {
        let output = BufferedOutput::new();

        emit(&output);

        assert_eq!(output.results(), vec!["8"]);
        assert_eq!(output.errors(), vec!["Error: boom"]);
    }
}
