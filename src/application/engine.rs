//! Invocation engine: help interception, resolution, binding, the call, and reporting

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::resolver::resolve;
use crate::application::usage::{render_usage, HelpRequest};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{bind, Target, Value};
use crate::infrastructure::{OutputSink, TerminalOutput};

/// What a successful dispatch produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The callable ran; its results in declared order (possibly none).
    Returned(Vec<Value>),
    /// A help word was given; the usage text that was rendered instead.
    Usage(String),
}

impl Outcome {
    /// Returned values; empty for a usage request.
    pub fn values(&self) -> &[Value] {
        match self {
            Outcome::Returned(values) => values,
            Outcome::Usage(_) => &[],
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            Outcome::Returned(values) => values,
            Outcome::Usage(_) => Vec::new(),
        }
    }
}

/// Runs token streams against targets and reports through an [`OutputSink`].
pub struct Dispatcher<O = TerminalOutput> {
    settings: Settings,
    output: O,
}

impl Dispatcher<TerminalOutput> {
    pub fn new(settings: Settings) -> Self {
        Self::with_output(settings, TerminalOutput)
    }
}

impl Default for Dispatcher<TerminalOutput> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<O: OutputSink> Dispatcher<O> {
    pub fn with_output(settings: Settings, output: O) -> Self {
        Self { settings, output }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Dispatch `tokens` against `target`.
    ///
    /// Token 0 is the program marker. Every failure is final: nothing is called
    /// once resolution or binding fails. Field assignments on structured
    /// targets persist in `target` after the call.
    #[instrument(level = "debug", skip_all)]
    pub fn dispatch<S: AsRef<str>>(
        &self,
        target: &mut Target,
        tokens: &[S],
    ) -> ApplicationResult<Outcome> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        debug!("tokens: {:?}", tokens);

        match self.run(target, &tokens) {
            Ok(Outcome::Returned(values)) => {
                self.report_values(&values);
                Ok(Outcome::Returned(values))
            }
            Ok(usage) => Ok(usage),
            Err(err) => {
                debug!("dispatch failed: {:?}", err);
                self.report_error(&err);
                Err(err)
            }
        }
    }

    fn run(&self, target: &mut Target, tokens: &[String]) -> ApplicationResult<Outcome> {
        if let Some(request) = HelpRequest::detect(tokens) {
            let text = render_usage(&tokens[0], target, request.subcommand());
            if self.settings.print_to_stdout {
                self.output.result(&text);
            }
            return Ok(Outcome::Usage(text));
        }

        let resolution = resolve(target, tokens)?;
        for failure in &resolution.field_errors {
            self.report_error(failure);
        }

        let signature = resolution.callee.signature();
        let args = bind(&signature.params, &resolution.arguments)?;
        debug!("calling {} with {:?}", resolution.callee.name(), args);

        let values = resolution.callee.call(&args)?;
        debug!("{} returned {:?}", resolution.callee.name(), values);
        Ok(Outcome::Returned(values))
    }

    fn report_values(&self, values: &[Value]) {
        if self.settings.print_to_stdout && !values.is_empty() {
            self.output.result(&values.iter().join(", "));
        }
    }

    fn report_error(&self, err: &ApplicationError) {
        if self.settings.print_to_stderr {
            self.output.error(&format!("Error: {}", err));
        }
    }
}
