//! Target resolution: which callable do the tokens address, and with which arguments

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{convert, Function, InvokeError, Signature, StructuredTarget, Target, Value};

/// The concrete callable a token stream resolved to.
pub enum Callee<'t> {
    Function(&'t Function),
    Member {
        record: &'t dyn StructuredTarget,
        name: String,
        signature: &'t Signature,
    },
}

impl Callee<'_> {
    pub fn name(&self) -> &str {
        match self {
            Callee::Function(function) => function.name(),
            Callee::Member { name, .. } => name,
        }
    }

    pub fn signature(&self) -> &Signature {
        match self {
            Callee::Function(function) => function.signature(),
            Callee::Member { signature, .. } => signature,
        }
    }

    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, InvokeError> {
        match self {
            Callee::Function(function) => function.call(args),
            Callee::Member { record, name, .. } => record.call(name, args),
        }
    }
}

/// Outcome of resolving a target against a token stream.
pub struct Resolution<'t> {
    pub callee: Callee<'t>,
    /// Tokens left for the parameter binder.
    pub arguments: Vec<String>,
    /// `--field=value` assignments that were skipped.
    pub field_errors: Vec<ApplicationError>,
}

/// Resolve `tokens` against `target`.
///
/// Token 0 is the program marker and never becomes an argument. Structured
/// targets get their `--field=value` tokens applied before the member is
/// selected; those assignments are best-effort and never abort resolution.
#[instrument(level = "debug", skip_all, fields(target = %target.describe()))]
pub fn resolve<'t>(target: &'t mut Target, tokens: &[String]) -> ApplicationResult<Resolution<'t>> {
    match target {
        Target::Callable(function) => Ok(resolve_function(function, tokens)),
        Target::Structured(record) => {
            require_selector(tokens)?;
            let (remaining, field_errors) = inject_fields(record.as_mut(), tokens);
            let record: &'t dyn StructuredTarget = &**record;
            resolve_member(record, remaining, field_errors)
        }
        Target::Collection(items) => {
            require_selector(tokens)?;
            let selector = title_case(&tokens[1]);
            for item in items.iter_mut() {
                if selects(item, &selector) {
                    debug!("collection selector {:?} matched {:?}", selector, item.name());
                    return resolve(item, tokens);
                }
            }
            Err(ApplicationError::UnsupportedTargetType(tokens[1].clone()))
        }
        Target::Unsupported(type_name) => {
            Err(ApplicationError::UnsupportedTargetType(type_name.clone()))
        }
    }
}

/// Uppercase the first character of `token`, ASCII only.
pub fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut titled = String::with_capacity(token.len());
            titled.push(first.to_ascii_uppercase());
            titled.push_str(chars.as_str());
            titled
        }
        None => String::new(),
    }
}

/// Split `--<field>=<value>` into its field name and raw value.
pub fn parse_flag(token: &str) -> Option<(&str, &str)> {
    let body = token.strip_prefix("--")?;
    let (field, value) = body.split_once('=')?;
    if field.is_empty() {
        return None;
    }
    Some((field, value))
}

fn require_selector(tokens: &[String]) -> ApplicationResult<()> {
    if tokens.len() < 2 {
        return Err(ApplicationError::InsufficientArguments {
            required: 2,
            supplied: tokens.len(),
        });
    }
    Ok(())
}

fn resolve_function<'t>(function: &'t Function, tokens: &[String]) -> Resolution<'t> {
    // `prog Name args..` and `prog args..` both address a single function
    let skip = match tokens.get(1) {
        Some(token) if token == function.name() => 2,
        _ => 1,
    };
    Resolution {
        callee: Callee::Function(function),
        arguments: tokens.iter().skip(skip).cloned().collect(),
        field_errors: Vec::new(),
    }
}

fn resolve_member<'t>(
    record: &'t dyn StructuredTarget,
    remaining: Vec<String>,
    field_errors: Vec<ApplicationError>,
) -> ApplicationResult<Resolution<'t>> {
    require_selector(&remaining)?;

    let type_prefix = format!("{}.", record.type_name());
    let selector = &remaining[1];
    let name = selector.strip_prefix(&type_prefix).unwrap_or(selector);

    let signature = record
        .method(name)
        .ok_or_else(|| ApplicationError::MethodDoesNotExist {
            method: name.to_string(),
            type_name: record.type_name().to_string(),
        })?;

    Ok(Resolution {
        callee: Callee::Member {
            record,
            name: name.to_string(),
            signature,
        },
        arguments: remaining[2..].to_vec(),
        field_errors,
    })
}

/// Apply every flag token to its field and return the tokens that are left.
fn inject_fields(
    record: &mut dyn StructuredTarget,
    tokens: &[String],
) -> (Vec<String>, Vec<ApplicationError>) {
    let mut remaining = Vec::with_capacity(tokens.len());
    let mut failures = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match parse_flag(token).filter(|_| index > 0) {
            Some((field, raw)) => match assign_field(record, field, raw) {
                Ok(()) => debug!("set {}.{} = {:?}", record.type_name(), field, raw),
                Err(err) => {
                    warn!("skipping {:?}: {}", token, err);
                    failures.push(err);
                }
            },
            None => remaining.push(token.clone()),
        }
    }

    (remaining, failures)
}

fn assign_field(record: &mut dyn StructuredTarget, field: &str, raw: &str) -> ApplicationResult<()> {
    let kind = record
        .field_kind(field)
        .ok_or_else(|| ApplicationError::FieldDoesNotExist {
            field: field.to_string(),
            type_name: record.type_name().to_string(),
        })?;
    let value = convert(kind, raw).map_err(|source| ApplicationError::FieldAssignment {
        field: field.to_string(),
        source,
    })?;
    record.set_field(field, value)?;
    Ok(())
}

fn selects(item: &Target, selector: &str) -> bool {
    match item {
        Target::Callable(function) => function.name() == selector,
        Target::Structured(record) => selector
            .strip_prefix(record.type_name())
            .is_some_and(|rest| rest.starts_with('.')),
        Target::Collection(_) | Target::Unsupported(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConversionError, ParameterKind, Record};
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Shape {
        sides: u8,
    }

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    fn shape() -> Target {
        Record::builder("Shape", Shape::default())
            .field("Sides", |s: &mut Shape| &mut s.sides)
            .method("Perimeter", |s: &Shape, len: f64| f64::from(s.sides) * len)
            .build()
            .into()
    }

    #[rstest]
    #[case("addInt", "AddInt")]
    #[case("AddInt", "AddInt")]
    #[case("éclair", "éclair")]
    #[case("", "")]
    #[case("x", "X")]
    fn given_token_when_title_casing_then_uppercases_ascii_first_char(
        #[case] token: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(title_case(token), expected);
    }

    #[rstest]
    #[case("--Offset=1", Some(("Offset", "1")))]
    #[case("--Name=a=b", Some(("Name", "a=b")))]
    #[case("--Empty=", Some(("Empty", "")))]
    #[case("--Offset", None)]
    #[case("--=1", None)]
    #[case("-Offset=1", None)]
    #[case("-5", None)]
    fn given_token_when_parsing_flag_then_splits_on_first_equals(
        #[case] token: &str,
        #[case] expected: Option<(&str, &str)>,
    ) {
        assert_eq!(parse_flag(token), expected);
    }

    #[test]
    fn given_function_when_name_echoed_then_name_is_not_an_argument() {
        let mut target = Target::callable("Add", |a: i64, b: i64| a + b);

        let echoed = resolve(&mut target, &tokens(&["prog", "Add", "3", "5"])).unwrap();
        assert_eq!(echoed.arguments, tokens(&["3", "5"]));

        let plain = resolve(&mut target, &tokens(&["prog", "3", "5"])).unwrap();
        assert_eq!(plain.arguments, tokens(&["3", "5"]));
        assert_eq!(plain.callee.name(), "Add");
    }

    #[test]
    fn given_structured_with_flags_when_resolving_then_flags_are_removed() {
        let mut target = shape();

        let resolution =
            resolve(&mut target, &tokens(&["prog", "--Sides=4", "Perimeter", "2.5"])).unwrap();

        assert_eq!(resolution.callee.name(), "Perimeter");
        assert_eq!(resolution.arguments, tokens(&["2.5"]));
        assert!(resolution.field_errors.is_empty());
        drop(resolution);
        assert_eq!(target.record_value::<Shape>().map(|s| s.sides), Some(4));
    }

    #[test]
    fn given_bad_flags_when_resolving_then_collects_failures_and_continues() {
        let mut target = shape();

        let resolution = resolve(
            &mut target,
            &tokens(&["prog", "--Colour=red", "--Sides=-1", "Shape.Perimeter", "1"]),
        )
        .unwrap();

        assert_eq!(resolution.callee.name(), "Perimeter");
        assert_eq!(
            resolution.field_errors,
            vec![
                ApplicationError::FieldDoesNotExist {
                    field: "Colour".into(),
                    type_name: "Shape".into()
                },
                ApplicationError::FieldAssignment {
                    field: "Sides".into(),
                    source: ConversionError::CannotConvert {
                        token: "-1".into(),
                        kind: ParameterKind::UInt8
                    }
                },
            ]
        );
    }

    #[test]
    fn given_structured_with_only_flags_when_resolving_then_insufficient_arguments() {
        let mut target = shape();
        let result = resolve(&mut target, &tokens(&["prog", "--Sides=3"]));
        assert!(matches!(
            result,
            Err(ApplicationError::InsufficientArguments { .. })
        ));
    }

    #[test]
    fn given_foreign_type_prefix_when_resolving_then_method_does_not_exist() {
        let mut target = shape();
        let result = resolve(&mut target, &tokens(&["prog", "Circle.Perimeter", "1"]));
        assert_eq!(
            result.err(),
            Some(ApplicationError::MethodDoesNotExist {
                method: "Circle.Perimeter".into(),
                type_name: "Shape".into()
            })
        );
    }

    #[test]
    fn given_collection_when_selector_lowercase_then_matches_title_cased_name() {
        let mut target = Target::collection([
            Target::callable("Double", |a: i32| a * 2),
            shape(),
        ]);

        let resolution = resolve(&mut target, &tokens(&["prog", "double", "4"])).unwrap();

        // the nested function sees the original token, which is not its name
        assert_eq!(resolution.callee.name(), "Double");
        assert_eq!(resolution.arguments, tokens(&["double", "4"]));
    }

    #[test]
    fn given_collection_when_selector_names_record_member_then_recurses() {
        let mut target = Target::collection([Target::callable("Double", |a: i32| a * 2), shape()]);

        let resolution =
            resolve(&mut target, &tokens(&["prog", "Shape.Perimeter", "--Sides=5", "2"])).unwrap();

        assert_eq!(resolution.callee.name(), "Perimeter");
        assert_eq!(resolution.arguments, tokens(&["2"]));
    }

    #[test]
    fn given_collection_when_type_name_without_separator_then_no_match() {
        let mut target = Target::collection([shape()]);
        let result = resolve(&mut target, &tokens(&["prog", "ShapePerimeter", "2"]));
        assert_eq!(
            result.err(),
            Some(ApplicationError::UnsupportedTargetType("ShapePerimeter".into()))
        );
    }

    #[test]
    fn given_unsupported_target_when_resolving_then_unsupported_target_type() {
        let mut target = Target::unsupported("map");
        let result = resolve(&mut target, &tokens(&["prog", "Add", "5"]));
        assert_eq!(
            result.err(),
            Some(ApplicationError::UnsupportedTargetType("map".into()))
        );
    }
}
