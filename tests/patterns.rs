//! Pattern literals and the `=~` / `!~` matchers.

#[macro_use]
mod cases;

eval_case! {
    name: match_against_a_pattern_literal,
    input: "'release-1.2' =~ /^release-/",
    value: true,
}

eval_case! {
    name: negated_match,
    input: "'hotfix-3' !~ /^release-/",
    value: true,
}

eval_case! {
    name: unanchored_patterns_match_anywhere,
    input: "'abcdef' =~ /cde/",
    value: true,
}

eval_case! {
    name: escaped_delimiter_inside_a_pattern,
    input: r"'a/b' =~ /a\/b/",
    value: true,
}

eval_case! {
    name: character_classes,
    input: r"'v1.2.3' =~ /^v[0-9]+\.[0-9]+\.[0-9]+$/",
    value: true,
}

eval_case! {
    name: string_literal_right_side_matches,
    input: "'hello' =~ 'ell' && 'hello' !~ 'zzz'",
    value: true,
}

eval_case! {
    name: textual_right_side_compiles_at_evaluation_time,
    input: "'abc' =~ needle",
    bind: { "needle" => "b" },
    value: true,
}

eval_case! {
    name: invalid_runtime_pattern_is_an_eval_error,
    input: "'abc' =~ needle",
    bind: { "needle" => "(" },
    eval_error: rebus::EvalError::Pattern { .. },
}

eval_case! {
    name: invalid_pattern_literal_fails_at_compile_time,
    input: "'abc' =~ /(/",
    compile_error: rebus::CompileErrorKind::InvalidPattern(_),
}

eval_case! {
    name: unterminated_pattern_literal,
    input: "'abc' =~ /open",
    compile_error: rebus::CompileErrorKind::UnterminatedPattern,
}

eval_case! {
    name: non_string_subject_is_a_type_error,
    input: "5 =~ /5/",
    eval_error: rebus::EvalError::Type { .. },
}

eval_case! {
    name: slash_after_an_operand_is_division,
    input: "10 / 2 / 5",
    value: 1.0,
}

eval_case! {
    name: bound_pattern_values_match,
    input: "name =~ pat",
    bind: {
        "name" => "deploy-west",
        "pat" => rebus::Value::pattern(regex::Regex::new("^deploy-").unwrap()),
    },
    value: true,
}
