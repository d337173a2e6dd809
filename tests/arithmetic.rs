//! Arithmetic operators and numeric coercion.

use rebus::Value;

#[macro_use]
mod cases;

eval_case! {
    name: addition,
    input: "1 + 2",
    value: 3.0,
}

eval_case! {
    name: multiplication_binds_tighter,
    input: "1 + 2 * 3",
    value: 7.0,
}

eval_case! {
    name: parentheses_group,
    input: "(1 + 2) * 3",
    value: 9.0,
}

eval_case! {
    name: division_is_floating_point,
    input: "10 / 4",
    value: 2.5,
}

eval_case! {
    name: modulus,
    input: "10 % 3",
    value: 1.0,
}

eval_case! {
    name: exponent_is_right_associative,
    input: "2 ** 3 ** 2",
    value: 512.0,
}

eval_case! {
    name: unary_negation,
    input: "-5 + 3",
    value: -2.0,
}

eval_case! {
    name: negation_of_a_clause,
    input: "-(2 + 3)",
    value: -5.0,
}

eval_case! {
    name: subtraction_folds_left,
    input: "10 - 4 - 3",
    value: 3.0,
}

eval_case! {
    name: textual_operands_coerce_to_numbers,
    input: "x * 2",
    bind: { "x" => "21" },
    value: 42.0,
}

eval_case! {
    name: float_literals,
    input: "1.5 + 2.25",
    value: 3.75,
}

eval_case! {
    name: exponent_notation_literals,
    input: "1e3 + 1",
    value: 1001.0,
}

eval_case! {
    name: uncoercible_operand_is_a_type_error,
    input: "x - 1",
    bind: { "x" => "soon" },
    eval_error: rebus::EvalError::Type { .. },
}

eval_case! {
    name: booleans_do_not_coerce_to_numbers,
    input: "true + 1",
    eval_error: rebus::EvalError::Type { .. },
}

// Bitwise operators work on the 64-bit truncation of the numeric value.

eval_case! {
    name: bitwise_and,
    input: "12 & 10",
    value: 8.0,
}

eval_case! {
    name: bitwise_or,
    input: "12 | 3",
    value: 15.0,
}

eval_case! {
    name: bitwise_xor,
    input: "12 ^ 10",
    value: 6.0,
}

eval_case! {
    name: bitwise_not,
    input: "~5",
    value: -6.0,
}

eval_case! {
    name: shifts,
    input: "(1 << 6) + (256 >> 4)",
    value: 80.0,
}

eval_case! {
    name: shifts_bind_looser_than_addition,
    input: "2 + 1 << 2",
    value: 12.0,
}

#[test]
fn division_by_zero_follows_ieee() {
    let expr = rebus::compile("1 / 0").expect("compilation failed");
    let result = expr.evaluate_empty().expect("evaluation failed");
    match result {
        Value::Number(n) => assert!(n.is_infinite()),
        other => panic!("expected a number, got {other:?}"),
    }
}
