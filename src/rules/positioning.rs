//! Orientation and position sub-predicates.
//!
//! Each builder takes a component (or pair) and returns an expression that is
//! true iff every occurrence of that component, if any, satisfies the
//! direction or order property. A design with no occurrence satisfies all of
//! them vacuously. They serve both as first-class rules and as the
//! sub-constraints of DRIVES.

use crate::component::Component;
use crate::constraint::Expr;
use crate::model::{Model, FORWARD, REVERSE};

/// Every occurrence of `c` reads in the forward direction.
pub(crate) fn all_forward(c: &Component, model: &Model) -> Expr {
    all_oriented(c, FORWARD, model)
}

/// Every occurrence of `c` reads in the reverse direction.
pub(crate) fn all_reverse(c: &Component, model: &Model) -> Expr {
    all_oriented(c, REVERSE, model)
}

fn all_oriented(c: &Component, direction: i32, model: &Model) -> Expr {
    let clauses = (0..model.len())
        .map(|i| {
            Expr::if_then(
                Expr::EqConst(model.part(i), c.id()),
                Expr::EqConst(model.orientation(i), direction),
            )
        })
        .collect();
    Expr::And(clauses)
}

/// Every co-occurrence of `a` and `b` shares one orientation: for all
/// position pairs, if `a` is at i and `b` is at j then the two orientation
/// variables are equal.
pub(crate) fn all_same_orientation(a: &Component, b: &Component, model: &Model) -> Expr {
    let n = model.len();
    let mut clauses = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            clauses.push(Expr::if_then(
                Expr::And(vec![
                    Expr::EqConst(model.part(i), a.id()),
                    Expr::EqConst(model.part(j), b.id()),
                ]),
                Expr::EqVar(model.orientation(i), model.orientation(j)),
            ));
        }
    }
    Expr::And(clauses)
}

/// Every occurrence of `a` is before every occurrence of `b`: if `a` is at
/// position i, no position up to and including i holds `b`.
pub(crate) fn all_before(a: &Component, b: &Component, model: &Model) -> Expr {
    let clauses = (0..model.len())
        .map(|i| {
            let upstream_clear = (0..=i)
                .map(|j| Expr::NeConst(model.part(j), b.id()))
                .collect();
            Expr::if_then(
                Expr::EqConst(model.part(i), a.id()),
                Expr::And(upstream_clear),
            )
        })
        .collect();
    Expr::And(clauses)
}
