//! Stage-tree construction.
//!
//! [`plan`] turns the tokenizer's output into a binary tree of
//! [`EvaluationStage`] nodes via operator-precedence parsing, resolving
//! associativity, unary-vs-binary ambiguity, function-call argument
//! grouping, and accessor chains. The resulting tree is the compiled
//! artifact: immutable, exclusively owned top-down, and evaluated by the
//! [`crate::evaluator`] without further lookahead or precedence decisions.

mod planner;

pub mod stage;

#[cfg(test)]
mod planner_test;

pub use stage::{EvaluationStage, ExpressionFunction, OperatorSymbol, StageKind};

use ecow::EcoString;

use crate::parser::{CompileError, Token};

/// Registered host functions, looked up by name while planning.
pub type FunctionRegistry = hashbrown::HashMap<EcoString, ExpressionFunction>;

/// Build an evaluation stage tree from a token sequence.
pub fn plan(tokens: &[Token], functions: &FunctionRegistry) -> Result<EvaluationStage, CompileError> {
    planner::Planner::new(tokens, functions).plan()
}

/// The variable names a stage tree references, in source order, deduplicated.
pub fn referenced_variables(root: &EvaluationStage) -> Vec<EcoString> {
    let mut names = Vec::new();
    collect_variables(root, &mut names);
    names
}

fn collect_variables(stage: &EvaluationStage, names: &mut Vec<EcoString>) {
    if let Some(left) = &stage.left {
        collect_variables(left, names);
    }
    match &stage.kind {
        StageKind::Parameter(name) => {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        StageKind::Accessor { path, .. } => {
            if let Some(root_name) = path.first() {
                if !names.contains(root_name) {
                    names.push(root_name.clone());
                }
            }
        }
        _ => {}
    }
    if let Some(right) = &stage.right {
        collect_variables(right, names);
    }
}
