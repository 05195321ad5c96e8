//! Reference enumeration engine.
//!
//! Bounded exhaustive search over candidate designs: each position is
//! assigned a (component, orientation) pair from the universe, the TYPE row
//! is derived from the component (so the PART/TYPE linking invariant holds by
//! construction), and every compiled expression is evaluated against the
//! resulting assignment.
//!
//! This is deliberately generate-and-test, intended for tests and small
//! designs; production search belongs to an external propagation engine that
//! consumes the same expression trees.

use std::sync::Arc;

use crate::component::{Component, Universe};
use crate::constraint::{Assignment, Expr};
use crate::model::{Model, FORWARD, REVERSE};

/// Budget for an enumeration run.
#[derive(Clone, Debug)]
pub struct Budget {
    /// Stop after this many satisfying designs.
    pub max_solutions: usize,
    /// Stop after examining this many complete candidates.
    pub max_candidates: usize,
}

impl Budget {
    pub fn new(max_solutions: usize, max_candidates: usize) -> Self {
        Self {
            max_solutions,
            max_candidates,
        }
    }

    /// Enough for exhaustive walks over test-sized designs.
    pub fn exhaustive() -> Self {
        Self {
            max_solutions: usize::MAX,
            max_candidates: 10_000_000,
        }
    }

    /// A short budget for satisfiability checks.
    pub fn first_solution() -> Self {
        Self {
            max_solutions: 1,
            max_candidates: 10_000_000,
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            max_solutions: 1024,
            max_candidates: 1_000_000,
        }
    }
}

/// One position of a concrete design.
#[derive(Clone, Debug)]
pub struct Placement {
    pub component: Arc<Component>,
    /// [`FORWARD`] or [`REVERSE`].
    pub orientation: i32,
}

/// A concrete design: one placement per position.
#[derive(Clone, Debug)]
pub struct Design {
    pub placements: Vec<Placement>,
}

impl std::fmt::Display for Design {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, p) in self.placements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if p.orientation == REVERSE {
                write!(f, "-")?;
            }
            write!(f, "{}", p.component.name())?;
        }
        Ok(())
    }
}

/// Enumerate designs satisfying all of the given expressions, up to budget.
///
/// Every position ranges over the full universe and both orientations. The
/// PART/TYPE channeling is enforced directly (the TYPE variable of a
/// position always holds its component's type code), so callers do not need
/// to pass [`Model::linkage`] here.
pub fn enumerate(
    model: &Model,
    universe: &Universe,
    exprs: &[Expr],
    budget: &Budget,
) -> Vec<Design> {
    let components: Vec<Arc<Component>> = universe.iter().map(Arc::clone).collect();
    let mut asg = Assignment::new(model.num_vars());
    let mut stack: Vec<Placement> = Vec::with_capacity(model.len());
    let mut out = Vec::new();
    let mut candidates = 0usize;

    descend(
        model,
        &components,
        exprs,
        budget,
        &mut asg,
        &mut stack,
        &mut out,
        &mut candidates,
    );
    out
}

/// Whether any design satisfies all of the given expressions.
pub fn is_satisfiable(model: &Model, universe: &Universe, exprs: &[Expr]) -> bool {
    !enumerate(model, universe, exprs, &Budget::first_solution()).is_empty()
}

#[allow(clippy::too_many_arguments)]
fn descend(
    model: &Model,
    components: &[Arc<Component>],
    exprs: &[Expr],
    budget: &Budget,
    asg: &mut Assignment,
    stack: &mut Vec<Placement>,
    out: &mut Vec<Design>,
    candidates: &mut usize,
) {
    if out.len() >= budget.max_solutions || *candidates >= budget.max_candidates {
        return;
    }

    let i = stack.len();
    if i == model.len() {
        *candidates += 1;
        if exprs.iter().all(|e| e.eval(asg)) {
            out.push(Design {
                placements: stack.clone(),
            });
        }
        return;
    }

    for component in components {
        for orientation in [FORWARD, REVERSE] {
            asg.set(model.part(i), component.id());
            asg.set(model.part_type(i), component.part_type().code());
            asg.set(model.orientation(i), orientation);
            stack.push(Placement {
                component: Arc::clone(component),
                orientation,
            });
            descend(model, components, exprs, budget, asg, stack, out, candidates);
            stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::PartType;

    #[test]
    fn test_unconstrained_enumeration_counts() {
        let mut universe = Universe::new();
        universe.intern("p1", PartType::Promoter);
        universe.intern("c1", PartType::Cds);
        let model = Model::new(2);

        // 2 components x 2 orientations per position, 2 positions
        let all = enumerate(&model, &universe, &[], &Budget::exhaustive());
        assert_eq!(all.len(), 16);
    }

    #[test]
    fn test_budget_caps_solutions() {
        let mut universe = Universe::new();
        universe.intern("p1", PartType::Promoter);
        let model = Model::new(3);

        let some = enumerate(&model, &universe, &[], &Budget::new(3, 1_000_000));
        assert_eq!(some.len(), 3);
    }
}
