//! Integration tests for typed parameters: width limits, signedness and spellings end to end

use rstest::rstest;

use fuego::domain::ConversionError;
use fuego::util::testing::init_test_setup;
use fuego::{ApplicationError, BufferedOutput, Dispatcher, ParameterKind, Settings, Target, Value};

fn describe(flag: bool, count: u8, delta: i16, label: String) -> (String, i32) {
    let sign = if flag { 1 } else { -1 };
    (label, sign * i32::from(count) + i32::from(delta))
}

fn dispatch(target: &mut Target, tokens: &[&str]) -> Result<Vec<Value>, ApplicationError> {
    init_test_setup();
    Dispatcher::with_output(Settings::silent(), BufferedOutput::new())
        .dispatch(target, tokens)
        .map(|outcome| outcome.into_values())
}

#[rstest]
#[case(&["prog", "true", "3", "-4", "x"], "x", -1)]
#[case(&["prog", "F", "255", "+0", "label with spaces"], "label with spaces", -255)]
#[case(&["prog", "1", "0", "-32768", ""], "", -32768)]
fn given_mixed_kinds_when_dispatching_then_each_token_converts_to_its_kind(
    #[case] tokens: &[&str],
    #[case] label: &str,
    #[case] total: i32,
) {
    let mut target = Target::callable("Describe", describe);

    let values = dispatch(&mut target, tokens).unwrap();

    assert_eq!(values, vec![Value::String(label.into()), Value::Int32(total)]);
}

#[rstest]
#[case(&["prog", "yes", "1", "1", "s"], "yes", ParameterKind::Bool)]
#[case(&["prog", "true", "256", "1", "s"], "256", ParameterKind::UInt8)]
#[case(&["prog", "true", "-1", "1", "s"], "-1", ParameterKind::UInt8)]
#[case(&["prog", "true", "1", "32768", "s"], "32768", ParameterKind::Int16)]
#[case(&["prog", "true", "1", "0x10", "s"], "0x10", ParameterKind::Int16)]
fn given_out_of_range_token_when_dispatching_then_names_token_and_kind(
    #[case] tokens: &[&str],
    #[case] token: &str,
    #[case] kind: ParameterKind,
) {
    let mut target = Target::callable("Describe", describe);

    let err = dispatch(&mut target, tokens).unwrap_err();

    assert_eq!(
        err.conversion_cause(),
        Some(&ConversionError::CannotConvert {
            token: token.into(),
            kind
        })
    );
}

#[rstest]
#[case("1e39", false)]
#[case("3.4e38", true)]
#[case("inf", true)]
#[case("-Infinity", true)]
fn given_float32_token_when_dispatching_then_overflow_is_rejected(
    #[case] token: &str,
    #[case] accepted: bool,
) {
    let mut target = Target::callable("Same", |x: f32| x);

    let result = dispatch(&mut target, &["prog", token]);

    assert_eq!(result.is_ok(), accepted, "{token}: {result:?}");
}

#[test]
fn given_float_results_when_printing_then_whole_numbers_drop_fraction() {
    init_test_setup();
    let dispatcher = Dispatcher::with_output(Settings::default(), BufferedOutput::new());
    let mut target = Target::callable("Halves", |x: f64| (x / 2.0, x * 2.0));

    dispatcher.dispatch(&mut target, &["prog", "3"]).unwrap();

    assert_eq!(dispatcher.output().results(), vec!["1.5, 6"]);
}
