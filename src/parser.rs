//! Parser for rule text.
//!
//! Parses token streams into rule sources, then resolves component names
//! against a universe. The grammar mirrors the stringified form of every
//! rule kind, so `to_string` round-trips through the parser:
//!
//! ```text
//! rule      := "NOT"? body "."
//! body      := operand "THEN" operand
//!            | ident OP ident          OP ∈ DRIVES | BEFORE | SAME_ORIENTATION
//!            | ident ("FORWARD" | "REVERSE")
//!            | "TEMPLATE" selection ("," selection)*
//! operand   := ident | selection
//! selection := "[" ident ("|" ident)* "]"
//! ```
//!
//! THEN operands may be bracketed groupings ("contains any of"); the other
//! pair operators take single components.

use chumsky::prelude::*;
use std::sync::Arc;

use crate::component::{Component, Universe};
use crate::error::CompileError;
use crate::lexer::Token;
use crate::rules::{Operand, Operator, Rule, RuleKind};

/// A parsed rule, before component names are resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSrc {
    pub negated: bool,
    pub body: BodySrc,
}

/// The operand shape of a parsed rule, by name. Pair operands are name
/// lists: a singleton for a plain component, longer for a grouping (the
/// grammar only produces groupings for THEN).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodySrc {
    Pair {
        op: Operator,
        a: Vec<String>,
        b: Vec<String>,
    },
    Oriented { op: Operator, c: String },
    Template { slots: Vec<Vec<String>> },
}

/// A singleton list is a plain component operand; anything longer is a
/// "contains any of" grouping.
fn operand(mut components: Vec<Arc<Component>>) -> Operand {
    if components.len() == 1 {
        Operand::One(components.remove(0))
    } else {
        Operand::AnyOf(components)
    }
}

impl RuleSrc {
    /// Resolve against a universe, interning unseen components with their
    /// part type inferred from the leading-letter convention.
    pub fn resolve(&self, universe: &mut Universe) -> Rule {
        let kind = match &self.body {
            BodySrc::Pair { op, a, b } => match op {
                Operator::Then => RuleKind::Then {
                    a: operand(a.iter().map(|n| universe.intern_inferred(n)).collect()),
                    b: operand(b.iter().map(|n| universe.intern_inferred(n)).collect()),
                },
                Operator::Drives | Operator::Before | Operator::SameOrientation => {
                    // The grammar guarantees singleton operands here.
                    let a = universe.intern_inferred(&a[0]);
                    let b = universe.intern_inferred(&b[0]);
                    match op {
                        Operator::Drives => RuleKind::Drives { a, b },
                        Operator::Before => RuleKind::Before { a, b },
                        _ => RuleKind::SameOrientation { a, b },
                    }
                }
                // The grammar only produces pair bodies for the above.
                _ => unreachable!("not a pair operator: {}", op),
            },
            BodySrc::Oriented { op, c } => {
                let c = universe.intern_inferred(c);
                match op {
                    Operator::Forward => RuleKind::Forward { c },
                    Operator::Reverse => RuleKind::Reverse { c },
                    _ => unreachable!("not an orientation operator: {}", op),
                }
            }
            BodySrc::Template { slots } => RuleKind::Template {
                slots: slots
                    .iter()
                    .map(|slot| slot.iter().map(|n| universe.intern_inferred(n)).collect())
                    .collect(),
            },
        };
        let rule = Rule::new(kind);
        if self.negated {
            rule.negate()
        } else {
            rule
        }
    }

    /// Resolve against a fixed universe, failing on any component name the
    /// universe does not already contain.
    pub fn resolve_strict(&self, universe: &Universe) -> Result<Rule, CompileError> {
        let require = |name: &String| {
            universe.lookup(name).ok_or_else(|| CompileError::UnknownComponent {
                name: name.clone(),
            })
        };
        let kind = match &self.body {
            BodySrc::Pair { op, a, b } => match op {
                Operator::Then => RuleKind::Then {
                    a: operand(a.iter().map(|n| require(n)).collect::<Result<_, _>>()?),
                    b: operand(b.iter().map(|n| require(n)).collect::<Result<_, _>>()?),
                },
                Operator::Drives | Operator::Before | Operator::SameOrientation => {
                    let a = require(&a[0])?;
                    let b = require(&b[0])?;
                    match op {
                        Operator::Drives => RuleKind::Drives { a, b },
                        Operator::Before => RuleKind::Before { a, b },
                        _ => RuleKind::SameOrientation { a, b },
                    }
                }
                _ => unreachable!("not a pair operator: {}", op),
            },
            BodySrc::Oriented { op, c } => {
                let c = require(c)?;
                match op {
                    Operator::Forward => RuleKind::Forward { c },
                    Operator::Reverse => RuleKind::Reverse { c },
                    _ => unreachable!("not an orientation operator: {}", op),
                }
            }
            BodySrc::Template { slots } => RuleKind::Template {
                slots: slots
                    .iter()
                    .map(|slot| slot.iter().map(require).collect())
                    .collect::<Result<_, _>>()?,
            },
        };
        let rule = Rule::new(kind);
        Ok(if self.negated { rule.negate() } else { rule })
    }
}

fn ident() -> impl Parser<Token, String, Error = Simple<Token>> + Clone {
    select! {
        Token::Ident(s) => s,
    }
}

/// Create a parser for a sequence of dot-terminated rules.
pub fn parser() -> impl Parser<Token, Vec<RuleSrc>, Error = Simple<Token>> + Clone {
    let selection = ident()
        .separated_by(just(Token::Pipe))
        .at_least(1)
        .delimited_by(just(Token::LBracket), just(Token::RBracket));

    // A THEN operand: a plain component, or a bracketed grouping.
    let operand = ident().map(|n| vec![n]).or(selection.clone());

    let then_pair = operand
        .clone()
        .then(just(Token::Then).to(Operator::Then))
        .then(operand)
        .map(|((a, op), b)| BodySrc::Pair { op, a, b });

    let pair_op = choice((
        just(Token::Drives).to(Operator::Drives),
        just(Token::Before).to(Operator::Before),
        just(Token::SameOrientation).to(Operator::SameOrientation),
    ));

    let pair = ident()
        .then(pair_op)
        .then(ident())
        .map(|((a, op), b)| BodySrc::Pair {
            op,
            a: vec![a],
            b: vec![b],
        });

    let orient_op = choice((
        just(Token::Forward).to(Operator::Forward),
        just(Token::Reverse).to(Operator::Reverse),
    ));

    let oriented = ident()
        .then(orient_op)
        .map(|(c, op)| BodySrc::Oriented { op, c });

    let template = just(Token::Template)
        .ignore_then(selection.separated_by(just(Token::Comma)).at_least(1))
        .map(|slots| BodySrc::Template { slots });

    let body = choice((template, then_pair, pair, oriented));

    just(Token::Not)
        .or_not()
        .then(body)
        .then_ignore(just(Token::Dot))
        .map(|(not, body)| RuleSrc {
            negated: not.is_some(),
            body,
        })
        .repeated()
        .then_ignore(end())
}
