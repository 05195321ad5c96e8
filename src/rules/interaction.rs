//! Pairwise interaction rules.
//!
//! `A DRIVES B` encodes "component A transcriptionally drives component B":
//! A and B are placed with the same orientation, and either A occurs before B
//! with both forward-oriented, or B occurs before A with both
//! reverse-oriented — in both cases with no part of the terminator type
//! strictly between their positions.

use crate::component::{Component, PartType};
use crate::constraint::Expr;
use crate::model::Model;

use super::positioning;

/// `A DRIVES B`: same orientation, and the forward or the reverse
/// transcription case.
pub(crate) fn drives(a: &Component, b: &Component, model: &Model) -> Expr {
    let forward = Expr::And(vec![
        no_terminator_between(model, a, b),
        positioning::all_before(a, b, model),
        positioning::all_forward(a, model),
    ]);
    let reverse = Expr::And(vec![
        no_terminator_between(model, b, a),
        positioning::all_before(b, a, model),
        positioning::all_reverse(a, model),
    ]);
    Expr::And(vec![
        positioning::all_same_orientation(a, b, model),
        Expr::Or(vec![forward, reverse]),
    ])
}

/// For every ordered pair of positions (i, j): if `a` is placed at i and `b`
/// at j, no position strictly between i and j has the terminator type.
/// When i == j the clause degenerates to "position i does not hold b", since
/// one position cannot be both endpoints.
fn no_terminator_between(model: &Model, a: &Component, b: &Component) -> Expr {
    let n = model.len();
    let terminator = PartType::Terminator.code();

    let mut per_position = Vec::with_capacity(n);
    for i in 0..n {
        let mut downstream = Vec::with_capacity(n);
        for j in 0..n {
            if i == j {
                downstream.push(Expr::NeConst(model.part(j), b.id()));
            } else {
                let (lo, hi) = if i < j { (i, j) } else { (j, i) };
                let clear = (lo + 1..hi)
                    .map(|k| Expr::NeConst(model.part_type(k), terminator))
                    .collect();
                downstream.push(Expr::if_then(
                    Expr::EqConst(model.part(j), b.id()),
                    Expr::And(clear),
                ));
            }
        }
        per_position.push(Expr::if_then(
            Expr::EqConst(model.part(i), a.id()),
            Expr::And(downstream),
        ));
    }
    Expr::And(per_position)
}
