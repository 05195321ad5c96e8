//! Operon: a compiler from biological-assembly design rules to constraint
//! expression trees.
//!
//! Declarative rules over an ordered design of biological parts — pairing
//! ("A THEN B"), transcriptional interaction ("A DRIVES B"), ordered part
//! templates, and orientation/position constraints — compile against a
//! shared decision-variable matrix into trees of primitive constraints
//! (equality, conjunction, disjunction, implication, negation, extensional
//! support). The trees are handed to a constraint engine for propagation and
//! search; a bounded reference engine is bundled for tests and small designs.

pub mod component;
pub mod constraint;
pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod rules;
pub mod solve;

pub use component::{Component, PartType, Universe};
pub use constraint::{Assignment, Expr};
pub use error::CompileError;
pub use model::{Model, VarId, FORWARD, REVERSE};
pub use rules::{Operand, Operator, Rule, RuleKind, Selection};
pub use solve::{enumerate, is_satisfiable, Budget, Design, Placement};

/// Parse a rule script into rules, interning unseen components into the
/// universe (part types inferred from the leading-letter convention).
pub fn parse(input: &str, universe: &mut Universe) -> Result<Vec<Rule>, String> {
    use chumsky::prelude::*;

    let tokens = lexer::lexer()
        .parse(input)
        .map_err(|errs| error::format_lexer_errors(input, errs))?;

    let len = input.len();
    let sources = parser::parser()
        .parse(chumsky::Stream::from_iter(len..len + 1, tokens.into_iter()))
        .map_err(|errs| error::format_parser_errors(input, errs))?;

    Ok(sources.iter().map(|src| src.resolve(universe)).collect())
}
