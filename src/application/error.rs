//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{BindError, ConversionError, InvokeError};

/// Everything a dispatch can fail with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    #[error("passing in \"{0}\" is not yet supported")]
    UnsupportedTargetType(String),

    #[error("not enough arguments were passed in to setup the function parameter values")]
    InsufficientArguments { required: usize, supplied: usize },

    #[error("method \"{method}\" does not exist on type \"{type_name}\"")]
    MethodDoesNotExist { method: String, type_name: String },

    #[error("could not generate the necessary function parameters list: {0}")]
    ParameterListGeneration(#[source] ConversionError),

    #[error("field \"{field}\" does not exist on type \"{type_name}\"")]
    FieldDoesNotExist { field: String, type_name: String },

    #[error("could not set field \"{field}\": {source}")]
    FieldAssignment {
        field: String,
        #[source]
        source: ConversionError,
    },

    #[error("invocation failed: {0}")]
    Invocation(#[from] InvokeError),

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// The conversion failure behind this error, if any.
    pub fn conversion_cause(&self) -> Option<&ConversionError> {
        match self {
            ApplicationError::ParameterListGeneration(cause)
            | ApplicationError::FieldAssignment { source: cause, .. } => Some(cause),
            _ => None,
        }
    }
}

impl From<BindError> for ApplicationError {
    fn from(err: BindError) -> Self {
        match err {
            BindError::InsufficientArguments { required, supplied } => {
                ApplicationError::InsufficientArguments { required, supplied }
            }
            BindError::ParameterListGeneration(cause) => {
                ApplicationError::ParameterListGeneration(cause)
            }
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParameterKind;

    #[test]
    fn given_bind_error_when_converting_then_keeps_variant_and_cause() {
        let cause = ConversionError::CannotConvert {
            token: "hi".into(),
            kind: ParameterKind::Int64,
        };

        let err = ApplicationError::from(BindError::ParameterListGeneration(cause.clone()));

        assert_eq!(err.conversion_cause(), Some(&cause));
        assert!(matches!(
            ApplicationError::from(BindError::InsufficientArguments {
                required: 2,
                supplied: 1
            }),
            ApplicationError::InsufficientArguments {
                required: 2,
                supplied: 1
            }
        ));
    }
}
