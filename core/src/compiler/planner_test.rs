//! Unit tests for the stage-tree builder.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::parser::{self, CompileErrorKind};
use crate::values::Value;

fn plan_source(source: &str) -> EvaluationStage {
    let tokens = parser::tokenize(source).expect("tokenizing failed");
    plan(&tokens, &FunctionRegistry::new()).expect("planning failed")
}

fn plan_error(source: &str) -> CompileErrorKind {
    let tokens = parser::tokenize(source).expect("tokenizing failed");
    plan(&tokens, &FunctionRegistry::new())
        .expect_err("planning should fail")
        .kind
}

fn registry_with(name: &str) -> FunctionRegistry {
    let mut functions = FunctionRegistry::new();
    let noop: ExpressionFunction = Arc::new(|_: &[Value]| Ok(Value::Null));
    functions.insert(name.into(), noop);
    functions
}

fn symbol(stage: &EvaluationStage) -> OperatorSymbol {
    match stage.kind {
        StageKind::Operator(symbol) => symbol,
        ref other => panic!("expected an operator stage, got {other:?}"),
    }
}

fn left(stage: &EvaluationStage) -> &EvaluationStage {
    stage.left.as_deref().expect("stage has a left child")
}

fn right(stage: &EvaluationStage) -> &EvaluationStage {
    stage.right.as_deref().expect("stage has a right child")
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let root = plan_source("1 + 2 * 3");
    assert_eq!(symbol(&root), OperatorSymbol::Add);
    assert_eq!(symbol(right(&root)), OperatorSymbol::Multiply);
}

#[test]
fn equal_precedence_folds_left() {
    let root = plan_source("10 - 4 - 3");
    assert_eq!(symbol(&root), OperatorSymbol::Subtract);
    assert_eq!(symbol(left(&root)), OperatorSymbol::Subtract);
}

#[test]
fn exponent_folds_right() {
    let root = plan_source("2 ** 3 ** 2");
    assert_eq!(symbol(&root), OperatorSymbol::Exponent);
    assert_eq!(symbol(right(&root)), OperatorSymbol::Exponent);
    assert!(matches!(
        left(&root).kind,
        StageKind::Literal(Value::Number(n)) if n == 2.0
    ));
}

#[test]
fn parentheses_override_precedence() {
    let root = plan_source("(1 + 2) * 3");
    assert_eq!(symbol(&root), OperatorSymbol::Multiply);
    assert_eq!(symbol(left(&root)), OperatorSymbol::Add);
}

#[test]
fn minus_in_prefix_position_negates() {
    let root = plan_source("-x");
    assert_eq!(symbol(&root), OperatorSymbol::Negate);
    assert!(root.left.is_none());
    assert!(matches!(right(&root).kind, StageKind::Parameter(ref n) if n == "x"));

    let root = plan_source("a - -b");
    assert_eq!(symbol(&root), OperatorSymbol::Subtract);
    assert_eq!(symbol(right(&root)), OperatorSymbol::Negate);
}

#[test]
fn ternary_builds_two_nested_stages() {
    let root = plan_source("a ? b : c");
    assert_eq!(symbol(&root), OperatorSymbol::TernaryFalse);
    assert_eq!(symbol(left(&root)), OperatorSymbol::TernaryTrue);
    assert!(matches!(right(&root).kind, StageKind::Parameter(ref n) if n == "c"));
}

#[test]
fn nested_ternaries_in_the_else_branch() {
    let root = plan_source("a ? 1 : b ? 2 : 3");
    assert_eq!(symbol(&root), OperatorSymbol::TernaryFalse);
    assert_eq!(symbol(right(&root)), OperatorSymbol::TernaryFalse);
}

#[test]
fn separators_fold_into_a_left_leaning_chain() {
    let root = plan_source("1, 2, 3");
    assert_eq!(symbol(&root), OperatorSymbol::Separator);
    assert_eq!(symbol(left(&root)), OperatorSymbol::Separator);
}

#[test]
fn registered_functions_plan_with_their_argument_clause() {
    let tokens = parser::tokenize("f(1, 2)").expect("tokenizing failed");
    let root = plan(&tokens, &registry_with("f")).expect("planning failed");
    assert!(matches!(root.kind, StageKind::Function { ref name, .. } if name == "f"));
    assert_eq!(symbol(right(&root)), OperatorSymbol::Separator);
}

#[test]
fn zero_argument_calls_have_no_right_child() {
    let tokens = parser::tokenize("f()").expect("tokenizing failed");
    let root = plan(&tokens, &registry_with("f")).expect("planning failed");
    assert!(root.right.is_none());
}

#[test]
fn unknown_functions_fail_at_plan_time() {
    assert!(matches!(
        plan_error("f(1)"),
        CompileErrorKind::UnknownFunction(ref name) if name == "f"
    ));
}

#[test]
fn accessor_paths_plan_as_leaves_unless_called() {
    let root = plan_source("a.b.c");
    assert!(matches!(
        root.kind,
        StageKind::Accessor { ref path, call: false } if path.len() == 3
    ));

    let root = plan_source("a.b(1)");
    assert!(matches!(root.kind, StageKind::Accessor { call: true, .. }));
    assert!(root.right.is_some());
}

#[test]
fn referenced_variables_come_back_in_source_order() {
    let root = plan_source("b + a * b + c.d");
    let names = referenced_variables(&root);
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn unbalanced_clauses_are_rejected() {
    assert_eq!(plan_error("(1 + 2"), CompileErrorKind::UnbalancedClause);
    assert_eq!(plan_error("1 + 2)"), CompileErrorKind::UnbalancedClause);
}

#[test]
fn trailing_operators_are_rejected() {
    assert!(matches!(
        plan_error("1 +"),
        CompileErrorKind::MissingOperand(_)
    ));
    assert_eq!(plan_error("1,"), CompileErrorKind::DanglingSeparator);
}

#[test]
fn binary_operators_need_a_left_operand() {
    assert!(matches!(
        plan_error("* 2"),
        CompileErrorKind::MissingOperand(_)
    ));
}

#[test]
fn adjacent_operands_are_rejected() {
    assert!(matches!(
        plan_error("1 2"),
        CompileErrorKind::UnexpectedToken(_)
    ));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(plan_error(""), CompileErrorKind::EmptyExpression);
    assert_eq!(plan_error("()"), CompileErrorKind::EmptyExpression);
}
