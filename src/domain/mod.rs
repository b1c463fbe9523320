//! Domain layer: scalar kinds, conversion, binding and target descriptors
//!
//! This layer is independent of external concerns (no I/O, no printing, no settings).

pub mod binder;
pub mod convert;
pub mod error;
pub mod kind;
pub mod target;

pub use binder::bind;
pub use convert::convert;
pub use error::{BindError, ConversionError, InvokeError};
pub use kind::{IntoResults, ParameterKind, Scalar, Value};
pub use target::{
    Function, IntoFunction, IntoMethod, Record, RecordBuilder, Signature, StructuredTarget, Target,
};
