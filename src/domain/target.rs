//! Targets and their type descriptors
//!
//! A target is described once, at registration, by its parameter kinds, result
//! kinds, fields and members. Dispatch only ever looks at these descriptors.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::InvokeError;
use crate::domain::kind::{IntoResults, ParameterKind, Scalar, Value};

/// Calls a registered function with already bound arguments.
pub type Invoker = Box<dyn Fn(&[Value]) -> Result<Vec<Value>, InvokeError> + Send + Sync>;

/// Calls a registered member with its receiver and already bound arguments.
pub type MethodInvoker<T> =
    Box<dyn Fn(&T, &[Value]) -> Result<Vec<Value>, InvokeError> + Send + Sync>;

type FieldSetter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), InvokeError> + Send + Sync>;

/// Ordered parameter and result kinds of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub params: Vec<ParameterKind>,
    pub results: Vec<ParameterKind>,
}

impl Signature {
    pub fn new(params: Vec<ParameterKind>, results: Vec<ParameterKind>) -> Self {
        Self { params, results }
    }
}

/// A named function value.
pub struct Function {
    name: String,
    signature: Signature,
    invoker: Invoker,
}

impl Function {
    /// Register a closure or fn item; kinds are derived from its argument and return types.
    pub fn new<Args, F>(name: impl Into<String>, f: F) -> Self
    where
        F: IntoFunction<Args>,
    {
        let (signature, invoker) = f.into_parts();
        Self {
            name: name.into(),
            signature,
            invoker,
        }
    }

    /// Register a hand-written invoker with an explicit signature.
    pub fn from_raw<F>(name: impl Into<String>, signature: Signature, invoker: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Vec<Value>, InvokeError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            signature,
            invoker: Box::new(invoker),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, InvokeError> {
        (self.invoker)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Closures and fn items usable as [`Function`]s.
///
/// `Args` is the tuple of argument types; it only exists to keep the arity
/// implementations apart.
pub trait IntoFunction<Args> {
    fn into_parts(self) -> (Signature, Invoker);
}

/// Closures usable as members of a [`Record`]; the first argument is the receiver.
pub trait IntoMethod<T, Args> {
    fn into_parts(self) -> (Signature, MethodInvoker<T>);
}

fn check_arity(args: &[Value], expected: usize) -> Result<(), InvokeError> {
    if args.len() != expected {
        return Err(InvokeError::ArgumentCount {
            expected,
            supplied: args.len(),
        });
    }
    Ok(())
}

fn take<S: Scalar>(args: &[Value], position: usize) -> Result<S, InvokeError> {
    args.get(position)
        .cloned()
        .and_then(S::from_value)
        .ok_or(InvokeError::ArgumentMismatch {
            position,
            expected: S::kind(),
        })
}

macro_rules! impl_callables {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> IntoFunction<($($arg,)*)> for F
        where
            F: Fn($($arg),*) -> R + Send + Sync + 'static,
            R: IntoResults,
            $($arg: Scalar,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn into_parts(self) -> (Signature, Invoker) {
                let signature = Signature::new(vec![$($arg::kind()),*], R::result_kinds());
                let arity = signature.params.len();
                let invoker: Invoker = Box::new(move |args: &[Value]| {
                    check_arity(args, arity)?;
                    let mut position = 0;
                    $(
                        let $arg = take::<$arg>(args, position)?;
                        position += 1;
                    )*
                    Ok(self($($arg),*).into_values())
                });
                (signature, invoker)
            }
        }

        impl<T, F, R, $($arg),*> IntoMethod<T, ($($arg,)*)> for F
        where
            T: 'static,
            F: Fn(&T, $($arg),*) -> R + Send + Sync + 'static,
            R: IntoResults,
            $($arg: Scalar,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn into_parts(self) -> (Signature, MethodInvoker<T>) {
                let signature = Signature::new(vec![$($arg::kind()),*], R::result_kinds());
                let arity = signature.params.len();
                let invoker: MethodInvoker<T> = Box::new(move |receiver: &T, args: &[Value]| {
                    check_arity(args, arity)?;
                    let mut position = 0;
                    $(
                        let $arg = take::<$arg>(args, position)?;
                        position += 1;
                    )*
                    Ok(self(receiver, $($arg),*).into_values())
                });
                (signature, invoker)
            }
        }
    };
}

impl_callables!();
impl_callables!(A1);
impl_callables!(A1, A2);
impl_callables!(A1, A2, A3);
impl_callables!(A1, A2, A3, A4);

/// Object-safe view of a structured value: settable fields plus bound members.
pub trait StructuredTarget: Send {
    fn type_name(&self) -> &str;

    /// Declared kind of a settable field.
    fn field_kind(&self, name: &str) -> Option<ParameterKind>;

    fn fields(&self) -> Vec<(&str, ParameterKind)>;

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), InvokeError>;

    fn method(&self, name: &str) -> Option<&Signature>;

    fn methods(&self) -> Vec<(&str, &Signature)>;

    fn call(&self, name: &str, args: &[Value]) -> Result<Vec<Value>, InvokeError>;

    fn as_any(&self) -> &dyn Any;
}

struct Field<T> {
    kind: ParameterKind,
    assign: FieldSetter<T>,
}

struct Method<T> {
    signature: Signature,
    invoke: MethodInvoker<T>,
}

/// A value of type `T` registered with its fields and members.
pub struct Record<T> {
    type_name: String,
    value: T,
    fields: BTreeMap<String, Field<T>>,
    methods: BTreeMap<String, Method<T>>,
}

impl<T: Send + 'static> Record<T> {
    pub fn builder(type_name: impl Into<String>, value: T) -> RecordBuilder<T> {
        RecordBuilder {
            record: Record {
                type_name: type_name.into(),
                value,
                fields: BTreeMap::new(),
                methods: BTreeMap::new(),
            },
        }
    }

    /// Current value, including any fields injected by earlier dispatches.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Send + 'static> StructuredTarget for Record<T> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field_kind(&self, name: &str) -> Option<ParameterKind> {
        self.fields.get(name).map(|field| field.kind)
    }

    fn fields(&self) -> Vec<(&str, ParameterKind)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.kind))
            .collect()
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), InvokeError> {
        let field = self.fields.get(name).ok_or_else(|| InvokeError::MissingMember {
            name: name.to_string(),
        })?;
        (field.assign)(&mut self.value, value)
    }

    fn method(&self, name: &str) -> Option<&Signature> {
        self.methods.get(name).map(|method| &method.signature)
    }

    fn methods(&self) -> Vec<(&str, &Signature)> {
        self.methods
            .iter()
            .map(|(name, method)| (name.as_str(), &method.signature))
            .collect()
    }

    fn call(&self, name: &str, args: &[Value]) -> Result<Vec<Value>, InvokeError> {
        let method = self.methods.get(name).ok_or_else(|| InvokeError::MissingMember {
            name: name.to_string(),
        })?;
        (method.invoke)(&self.value, args)
    }

    fn as_any(&self) -> &dyn Any {
        &self.value
    }
}

/// Registers the fields and members of a [`Record`].
pub struct RecordBuilder<T> {
    record: Record<T>,
}

impl<T: Send + 'static> RecordBuilder<T> {
    /// Expose a field settable with `--<name>=<value>`.
    pub fn field<V, A>(mut self, name: impl Into<String>, access: A) -> Self
    where
        V: Scalar,
        A: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        let assign: FieldSetter<T> = Box::new(move |target: &mut T, value: Value| {
            let value = V::from_value(value).ok_or(InvokeError::ArgumentMismatch {
                position: 0,
                expected: V::kind(),
            })?;
            *access(target) = value;
            Ok(())
        });
        self.record.fields.insert(
            name.into(),
            Field {
                kind: V::kind(),
                assign,
            },
        );
        self
    }

    /// Expose a member callable bound to the value.
    pub fn method<Args, F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: IntoMethod<T, Args>,
    {
        let (signature, invoke) = f.into_parts();
        self.record
            .methods
            .insert(name.into(), Method { signature, invoke });
        self
    }

    pub fn build(self) -> Record<T> {
        self.record
    }
}

/// Anything that can be made command-line invokable.
pub enum Target {
    Callable(Function),
    Structured(Box<dyn StructuredTarget>),
    Collection(Vec<Target>),
    /// A value without an invocable surface; dispatch rejects it.
    Unsupported(String),
}

impl Target {
    pub fn callable<Args, F>(name: impl Into<String>, f: F) -> Self
    where
        F: IntoFunction<Args>,
    {
        Target::Callable(Function::new(name, f))
    }

    pub fn structured<T: Send + 'static>(record: Record<T>) -> Self {
        Target::Structured(Box::new(record))
    }

    pub fn collection(items: impl IntoIterator<Item = Target>) -> Self {
        Target::Collection(items.into_iter().collect())
    }

    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Target::Unsupported(type_name.into())
    }

    /// Identity used for collection matching and usage text.
    pub fn name(&self) -> Option<&str> {
        match self {
            Target::Callable(function) => Some(function.name()),
            Target::Structured(record) => Some(record.type_name()),
            Target::Collection(_) | Target::Unsupported(_) => None,
        }
    }

    /// Short description of the variant, as reported in errors.
    pub fn describe(&self) -> String {
        match self {
            Target::Callable(_) => "func".to_string(),
            Target::Structured(_) => "struct".to_string(),
            Target::Collection(_) => "slice".to_string(),
            Target::Unsupported(type_name) => type_name.clone(),
        }
    }

    /// Borrow the value behind a structured target.
    pub fn record_value<T: 'static>(&self) -> Option<&T> {
        match self {
            Target::Structured(record) => record.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl From<Function> for Target {
    fn from(function: Function) -> Self {
        Target::Callable(function)
    }
}

impl<T: Send + 'static> From<Record<T>> for Target {
    fn from(record: Record<T>) -> Self {
        Target::structured(record)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Callable(function) => f.debug_tuple("Callable").field(function).finish(),
            Target::Structured(record) => f.debug_tuple("Structured").field(&record.type_name()).finish(),
            Target::Collection(items) => f.debug_tuple("Collection").field(items).finish(),
            Target::Unsupported(type_name) => f.debug_tuple("Unsupported").field(type_name).finish(),
        }
    }
}
