//! Pairing rules: counting implications between operands.
//!
//! `A THEN B` holds iff "the design contains A somewhere" implies "the design
//! contains B somewhere". Operands may be groupings, in which case containment
//! means any member. A count being greater than zero is exactly an existential
//! over positions, so the encoding is an implication between two disjunctions.

use crate::constraint::Expr;
use crate::model::Model;

use super::Operand;

/// `A THEN B`: if any position holds (a member of) A, some position holds
/// (a member of) B.
pub(crate) fn then(a: &Operand, b: &Operand, model: &Model) -> Expr {
    Expr::if_then(contains(a, model), contains(b, model))
}

/// "The design contains this operand": disjunction over all positions and
/// all member ids. Empty for an empty grouping, which no assignment satisfies.
pub(crate) fn contains(operand: &Operand, model: &Model) -> Expr {
    let ids = operand.ids();
    let mut alternatives = Vec::with_capacity(model.len() * ids.len());
    for i in 0..model.len() {
        for &id in &ids {
            alternatives.push(Expr::EqConst(model.part(i), id));
        }
    }
    Expr::Or(alternatives)
}
