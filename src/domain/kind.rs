//! Scalar kinds and the typed values that flow through a dispatch

use std::fmt;

/// The scalar kinds a parameter, result or field can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Bool,
    String,
    /// A declared type the converter cannot produce; carries its name for error messages.
    Unsupported(&'static str),
}

impl ParameterKind {
    /// All kinds the converter can produce, in declaration order.
    pub const SUPPORTED: [ParameterKind; 14] = [
        ParameterKind::Int,
        ParameterKind::Int8,
        ParameterKind::Int16,
        ParameterKind::Int32,
        ParameterKind::Int64,
        ParameterKind::UInt,
        ParameterKind::UInt8,
        ParameterKind::UInt16,
        ParameterKind::UInt32,
        ParameterKind::UInt64,
        ParameterKind::Float32,
        ParameterKind::Float64,
        ParameterKind::Bool,
        ParameterKind::String,
    ];

    pub fn is_supported(&self) -> bool {
        !matches!(self, ParameterKind::Unsupported(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterKind::Int => "isize",
            ParameterKind::Int8 => "i8",
            ParameterKind::Int16 => "i16",
            ParameterKind::Int32 => "i32",
            ParameterKind::Int64 => "i64",
            ParameterKind::UInt => "usize",
            ParameterKind::UInt8 => "u8",
            ParameterKind::UInt16 => "u16",
            ParameterKind::UInt32 => "u32",
            ParameterKind::UInt64 => "u64",
            ParameterKind::Float32 => "f32",
            ParameterKind::Float64 => "f64",
            ParameterKind::Bool => "bool",
            ParameterKind::String => "String",
            ParameterKind::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A typed scalar: one bound argument, one returned result or one field assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt(usize),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    String(String),
}

impl Value {
    pub fn kind(&self) -> ParameterKind {
        match self {
            Value::Int(_) => ParameterKind::Int,
            Value::Int8(_) => ParameterKind::Int8,
            Value::Int16(_) => ParameterKind::Int16,
            Value::Int32(_) => ParameterKind::Int32,
            Value::Int64(_) => ParameterKind::Int64,
            Value::UInt(_) => ParameterKind::UInt,
            Value::UInt8(_) => ParameterKind::UInt8,
            Value::UInt16(_) => ParameterKind::UInt16,
            Value::UInt32(_) => ParameterKind::UInt32,
            Value::UInt64(_) => ParameterKind::UInt64,
            Value::Float32(_) => ParameterKind::Float32,
            Value::Float64(_) => ParameterKind::Float64,
            Value::Bool(_) => ParameterKind::Bool,
            Value::String(_) => ParameterKind::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::UInt8(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
        }
    }
}

/// Rust types that can appear as parameters, results or fields of a target.
pub trait Scalar: Sized {
    fn kind() -> ParameterKind;
    fn from_value(value: Value) -> Option<Self>;
    fn into_value(self) -> Value;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn kind() -> ParameterKind {
                    ParameterKind::$variant
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl IntoResults for $ty {
                fn result_kinds() -> Vec<ParameterKind> {
                    vec![ParameterKind::$variant]
                }

                fn into_values(self) -> Vec<Value> {
                    vec![Value::$variant(self)]
                }
            }
        )*
    };
}

/// Return types of registered callables: nothing, one scalar, or a tuple of scalars.
pub trait IntoResults {
    fn result_kinds() -> Vec<ParameterKind>;
    fn into_values(self) -> Vec<Value>;
}

impl_scalar! {
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => UInt,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
    String => String,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl IntoResults for () {
    fn result_kinds() -> Vec<ParameterKind> {
        Vec::new()
    }

    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

impl<A: Scalar, B: Scalar> IntoResults for (A, B) {
    fn result_kinds() -> Vec<ParameterKind> {
        vec![A::kind(), B::kind()]
    }

    fn into_values(self) -> Vec<Value> {
        vec![self.0.into_value(), self.1.into_value()]
    }
}

impl<A: Scalar, B: Scalar, C: Scalar> IntoResults for (A, B, C) {
    fn result_kinds() -> Vec<ParameterKind> {
        vec![A::kind(), B::kind(), C::kind()]
    }

    fn into_values(self) -> Vec<Value> {
        vec![self.0.into_value(), self.1.into_value(), self.2.into_value()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_float_with_integral_value_when_displayed_then_has_no_fraction() {
        assert_eq!(Value::Float64(9.0).to_string(), "9");
        assert_eq!(Value::Float64(-0.625).to_string(), "-0.625");
    }

    #[test]
    fn given_scalar_types_when_asking_kind_then_matches_value_kind() {
        assert_eq!(i8::kind(), 5i8.into_value().kind());
        assert_eq!(usize::kind(), ParameterKind::UInt);
        assert_eq!(String::kind(), Value::from("x").kind());
    }

    #[test]
    fn given_mismatched_value_when_extracting_then_returns_none() {
        assert_eq!(i64::from_value(Value::Int32(3)), None);
        assert_eq!(f64::from_value(Value::Float64(1.5)), Some(1.5));
    }

    #[test]
    fn given_tuple_results_when_flattening_then_keeps_declared_order() {
        assert_eq!(
            <(f64, isize)>::result_kinds(),
            vec![ParameterKind::Float64, ParameterKind::Int]
        );
        assert_eq!(
            (0.5f64, 3isize).into_values(),
            vec![Value::Float64(0.5), Value::Int(3)]
        );
        assert!(<()>::result_kinds().is_empty());
    }

    #[test]
    fn given_unsupported_kind_when_displayed_then_uses_declared_name() {
        let kind = ParameterKind::Unsupported("complex128");
        assert!(!kind.is_supported());
        assert_eq!(kind.to_string(), "complex128");
    }
}
