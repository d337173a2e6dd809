//! Shared helpers for the integration suites.
#![allow(dead_code, unused_macros)]

use std::collections::HashMap;

use rebus::Value;

/// Build evaluation bindings from name/value pairs.
pub fn bindings(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// A declarative evaluation case: compile `input`, evaluate it (against
/// `bind` when given), and compare against the expectation.
macro_rules! eval_case {
    (name: $name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let expr = rebus::compile($input).expect("compilation failed");
            let result = expr.evaluate_empty().expect("evaluation failed");
            pretty_assertions::assert_eq!(result, rebus::Value::from($value));
        }
    };
    (name: $name:ident,
     input: $input:expr,
     bind: { $($key:literal => $bound:expr),* $(,)? },
     value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let bindings = crate::cases::bindings(&[$(($key, rebus::Value::from($bound))),*]);
            let expr = rebus::compile($input).expect("compilation failed");
            let result = expr.evaluate(&bindings).expect("evaluation failed");
            pretty_assertions::assert_eq!(result, rebus::Value::from($value));
        }
    };
    (name: $name:ident, input: $input:expr, compile_error: $kind:pat $(,)?) => {
        #[test]
        fn $name() {
            let error = rebus::compile($input).expect_err("compilation should fail");
            assert!(
                matches!(error.kind, $kind),
                "unexpected compile error: {error}"
            );
        }
    };
    (name: $name:ident, input: $input:expr, eval_error: $kind:pat $(,)?) => {
        #[test]
        fn $name() {
            let expr = rebus::compile($input).expect("compilation failed");
            let error = expr.evaluate_empty().expect_err("evaluation should fail");
            assert!(matches!(error, $kind), "unexpected eval error: {error}");
        }
    };
    (name: $name:ident,
     input: $input:expr,
     bind: { $($key:literal => $bound:expr),* $(,)? },
     eval_error: $kind:pat $(,)?) => {
        #[test]
        fn $name() {
            let bindings = crate::cases::bindings(&[$(($key, rebus::Value::from($bound))),*]);
            let expr = rebus::compile($input).expect("compilation failed");
            let error = expr.evaluate(&bindings).expect_err("evaluation should fail");
            assert!(matches!(error, $kind), "unexpected eval error: {error}");
        }
    };
}
