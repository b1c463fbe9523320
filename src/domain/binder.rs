//! Positional binding of tokens to a parameter list

use crate::domain::convert::convert;
use crate::domain::error::BindError;
use crate::domain::kind::{ParameterKind, Value};

/// Bind `tokens[i]` to `kinds[i]` for every declared parameter.
///
/// Trailing tokens beyond the parameter list are ignored. Binding stops at the
/// first token that does not convert.
pub fn bind<S: AsRef<str>>(kinds: &[ParameterKind], tokens: &[S]) -> Result<Vec<Value>, BindError> {
    if tokens.len() < kinds.len() {
        return Err(BindError::InsufficientArguments {
            required: kinds.len(),
            supplied: tokens.len(),
        });
    }

    kinds
        .iter()
        .zip(tokens)
        .map(|(kind, token)| convert(*kind, token.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(BindError::ParameterListGeneration)
}
