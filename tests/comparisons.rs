//! Comparison and equality operators.

#[macro_use]
mod cases;

eval_case! {
    name: numeric_ordering,
    input: "2 < 10",
    value: true,
}

eval_case! {
    name: arithmetic_binds_tighter_than_comparison,
    input: "1 + 2 > 2",
    value: true,
}

eval_case! {
    name: ordering_is_numeric_not_lexical_for_numbers,
    input: "9 < 10",
    value: true,
}

eval_case! {
    name: ordering_bounds,
    input: "(3 <= 3) && (3 >= 3) && !(3 > 3)",
    value: true,
}

eval_case! {
    name: string_ordering_is_lexicographic,
    input: "'abc' < 'abd'",
    value: true,
}

eval_case! {
    name: mixed_ordering_is_a_type_error,
    input: "'abc' < 10",
    eval_error: rebus::EvalError::Type { .. },
}

eval_case! {
    name: numeric_equality,
    input: "5 == 5.0",
    value: true,
}

eval_case! {
    name: string_equality,
    input: "'hello' == 'hello'",
    value: true,
}

eval_case! {
    name: inequality,
    input: "5 != 3",
    value: true,
}

eval_case! {
    name: equality_coerces_textual_numbers,
    input: "1 == '1'",
    value: true,
}

eval_case! {
    name: coerced_inequality,
    input: "'2' != 2",
    value: false,
}

eval_case! {
    name: uncoercible_equality_is_a_conversion_error,
    input: "'a' == 1",
    eval_error: rebus::EvalError::Conversion { .. },
}

eval_case! {
    name: comparison_binds_tighter_than_equality,
    input: "1 < 2 == 3 > 2",
    eval_error: rebus::EvalError::Conversion { .. },
}

eval_case! {
    name: coerced_ordering_on_bound_text,
    input: "x >= 10",
    bind: { "x" => "25" },
    value: true,
}
