//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::kind::ParameterKind;

/// A single token could not become a value of the requested kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("cannot convert \"{token}\" to \"{kind}\" as needed")]
    CannotConvert { token: String, kind: ParameterKind },

    #[error("converting values of type \"{kind}\" is not yet supported")]
    UnsupportedConversion { kind: ParameterKind },
}

/// Binding a token list to a parameter list failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("not enough arguments were passed in to setup the function parameter values")]
    InsufficientArguments { required: usize, supplied: usize },

    #[error("could not generate the necessary function parameters list: {0}")]
    ParameterListGeneration(#[source] ConversionError),
}

/// A registered invoker received arguments that do not match its signature.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvokeError {
    #[error("argument {position} is not a \"{expected}\"")]
    ArgumentMismatch {
        position: usize,
        expected: ParameterKind,
    },

    #[error("expected {expected} arguments, got {supplied}")]
    ArgumentCount { expected: usize, supplied: usize },

    #[error("no member named \"{name}\"")]
    MissingMember { name: String },
}
