//! Scalar conversion: one token into one typed value

use std::str::FromStr;

use crate::domain::error::ConversionError;
use crate::domain::kind::{ParameterKind, Value};

const TRUE_SPELLINGS: [&str; 6] = ["true", "True", "TRUE", "t", "T", "1"];
const FALSE_SPELLINGS: [&str; 6] = ["false", "False", "FALSE", "f", "F", "0"];

/// Convert `token` into a value of `kind`.
///
/// Integers are parsed base-10 and bounded by the kind's width, unsigned kinds
/// reject a leading `-`. Floats that overflow the requested width fail instead of
/// silently becoming infinite. Strings are taken verbatim.
pub fn convert(kind: ParameterKind, token: &str) -> Result<Value, ConversionError> {
    let cannot = || ConversionError::CannotConvert {
        token: token.to_string(),
        kind,
    };

    match kind {
        ParameterKind::Int => parse(token).map(Value::Int).ok_or_else(cannot),
        ParameterKind::Int8 => parse(token).map(Value::Int8).ok_or_else(cannot),
        ParameterKind::Int16 => parse(token).map(Value::Int16).ok_or_else(cannot),
        ParameterKind::Int32 => parse(token).map(Value::Int32).ok_or_else(cannot),
        ParameterKind::Int64 => parse(token).map(Value::Int64).ok_or_else(cannot),
        ParameterKind::UInt => parse_unsigned(token).map(Value::UInt).ok_or_else(cannot),
        ParameterKind::UInt8 => parse_unsigned(token).map(Value::UInt8).ok_or_else(cannot),
        ParameterKind::UInt16 => parse_unsigned(token).map(Value::UInt16).ok_or_else(cannot),
        ParameterKind::UInt32 => parse_unsigned(token).map(Value::UInt32).ok_or_else(cannot),
        ParameterKind::UInt64 => parse_unsigned(token).map(Value::UInt64).ok_or_else(cannot),
        ParameterKind::Float32 => parse::<f32>(token)
            .filter(|v| v.is_finite() || spells_non_finite(token))
            .map(Value::Float32)
            .ok_or_else(cannot),
        ParameterKind::Float64 => parse::<f64>(token)
            .filter(|v| v.is_finite() || spells_non_finite(token))
            .map(Value::Float64)
            .ok_or_else(cannot),
        ParameterKind::Bool => parse_bool(token).map(Value::Bool).ok_or_else(cannot),
        ParameterKind::String => Ok(Value::String(token.to_string())),
        ParameterKind::Unsupported(_) => Err(ConversionError::UnsupportedConversion { kind }),
    }
}

fn parse<T: FromStr>(token: &str) -> Option<T> {
    token.parse().ok()
}

fn parse_unsigned<T: FromStr>(token: &str) -> Option<T> {
    if token.starts_with('-') {
        return None;
    }
    parse(token)
}

fn parse_bool(token: &str) -> Option<bool> {
    if TRUE_SPELLINGS.contains(&token) {
        Some(true)
    } else if FALSE_SPELLINGS.contains(&token) {
        Some(false)
    } else {
        None
    }
}

/// `inf`, `+infinity`, `NaN` and friends are accepted as written.
fn spells_non_finite(token: &str) -> bool {
    let unsigned = token.trim_start_matches(['+', '-']).to_ascii_lowercase();
    matches!(unsigned.as_str(), "inf" | "infinity" | "nan")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParameterKind::Int8, "127", Value::Int8(127))]
    #[case(ParameterKind::Int8, "-128", Value::Int8(-128))]
    #[case(ParameterKind::Int16, "+42", Value::Int16(42))]
    #[case(ParameterKind::Int, "-5", Value::Int(-5))]
    #[case(ParameterKind::UInt64, "18446744073709551615", Value::UInt64(u64::MAX))]
    #[case(ParameterKind::Float32, "3.14159", Value::Float32(3.14159))]
    #[case(ParameterKind::Float64, "1e3", Value::Float64(1000.0))]
    #[case(ParameterKind::Float64, "-inf", Value::Float64(f64::NEG_INFINITY))]
    #[case(ParameterKind::Bool, "T", Value::Bool(true))]
    #[case(ParameterKind::Bool, "0", Value::Bool(false))]
    #[case(ParameterKind::String, "  spaced  ", Value::String("  spaced  ".into()))]
    fn given_valid_token_when_converting_then_returns_value(
        #[case] kind: ParameterKind,
        #[case] token: &str,
        #[case] expected: Value,
    ) {
        assert_eq!(convert(kind, token).unwrap(), expected);
    }

    #[rstest]
    #[case(ParameterKind::Int8, "128")]
    #[case(ParameterKind::Int8, "-129")]
    #[case(ParameterKind::Int32, "1.5")]
    #[case(ParameterKind::Int64, "0x10")]
    #[case(ParameterKind::UInt8, "-1")]
    #[case(ParameterKind::UInt32, "-0")]
    #[case(ParameterKind::UInt16, "65536")]
    #[case(ParameterKind::Float32, "1e40")]
    #[case(ParameterKind::Float64, "1e400")]
    #[case(ParameterKind::Bool, "yes")]
    #[case(ParameterKind::Bool, "")]
    fn given_out_of_range_or_malformed_token_when_converting_then_cannot_convert(
        #[case] kind: ParameterKind,
        #[case] token: &str,
    ) {
        assert_eq!(
            convert(kind, token),
            Err(ConversionError::CannotConvert {
                token: token.to_string(),
                kind,
            })
        );
    }

    #[test]
    fn given_garbage_when_converting_every_kind_then_only_string_succeeds() {
        for kind in ParameterKind::SUPPORTED {
            let result = convert(kind, "not-a-number-or-bool");
            if kind == ParameterKind::String {
                assert_eq!(result, Ok(Value::String("not-a-number-or-bool".into())));
            } else {
                assert!(
                    matches!(result, Err(ConversionError::CannotConvert { .. })),
                    "{kind} accepted garbage"
                );
            }
        }
    }

    #[test]
    fn given_unsupported_kind_when_converting_then_unsupported_conversion() {
        let kind = ParameterKind::Unsupported("complex128");
        assert_eq!(
            convert(kind, "1"),
            Err(ConversionError::UnsupportedConversion { kind })
        );
    }

    #[test]
    fn given_formatted_values_when_converting_back_then_round_trips() {
        let values = [
            Value::Int(isize::MIN),
            Value::Int16(i16::MAX),
            Value::Int32(-7),
            Value::Int64(i64::MIN),
            Value::UInt(usize::MAX),
            Value::UInt8(255),
            Value::Float32(f32::MAX),
            Value::Float64(-1.9000000000000004),
            Value::Bool(false),
        ];
        for value in values {
            assert_eq!(convert(value.kind(), &value.to_string()).unwrap(), value);
        }
    }
}
