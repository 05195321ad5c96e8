//! The primitive constraint algebra.
//!
//! Rule compilation produces trees of these primitives: constant
//! equality/inequality on a variable, variable equality, conjunction,
//! disjunction, implication, negation, and extensional support tables.
//! The tree is an opaque value handed to whatever engine does the actual
//! propagation and search; [`Expr::eval`] gives the reference semantics over
//! a complete assignment and is what the bundled enumeration engine and the
//! test suite use.

use crate::model::VarId;

/// A constraint expression over decision variables.
///
/// `And([])` is true and `Or([])` is false, so empty conjunctions and
/// disjunctions compose without special cases.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `var = c`
    EqConst(VarId, i32),
    /// `var != c`
    NeConst(VarId, i32),
    /// `var = other`
    EqVar(VarId, VarId),
    /// Conjunction of all sub-expressions.
    And(Vec<Expr>),
    /// Disjunction of the sub-expressions.
    Or(Vec<Expr>),
    /// Logical negation.
    Not(Box<Expr>),
    /// Implication: if the condition holds, the consequent must hold.
    IfThen(Box<Expr>, Box<Expr>),
    /// Extensional support: the tuple of variables must equal one of the
    /// explicitly listed rows.
    Support { vars: Vec<VarId>, rows: Vec<Vec<i32>> },
}

impl Expr {
    /// Negation, boxing the operand.
    pub fn not(inner: Expr) -> Expr {
        Expr::Not(Box::new(inner))
    }

    /// Implication, boxing both operands.
    pub fn if_then(cond: Expr, then: Expr) -> Expr {
        Expr::IfThen(Box::new(cond), Box::new(then))
    }

    /// Evaluate against a complete assignment.
    pub fn eval(&self, asg: &Assignment) -> bool {
        match self {
            Expr::EqConst(v, c) => asg.get(*v) == *c,
            Expr::NeConst(v, c) => asg.get(*v) != *c,
            Expr::EqVar(v, w) => asg.get(*v) == asg.get(*w),
            Expr::And(es) => es.iter().all(|e| e.eval(asg)),
            Expr::Or(es) => es.iter().any(|e| e.eval(asg)),
            Expr::Not(e) => !e.eval(asg),
            Expr::IfThen(cond, then) => !cond.eval(asg) || then.eval(asg),
            Expr::Support { vars, rows } => rows
                .iter()
                .any(|row| row.iter().zip(vars).all(|(val, v)| asg.get(*v) == *val)),
        }
    }
}

/// A complete binding of every decision variable to a value.
///
/// Produced by the engine (or by tests), never by rule compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<i32>,
}

impl Assignment {
    /// An all-zero assignment over `num_vars` variables.
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: vec![0; num_vars],
        }
    }

    /// The value bound to a variable.
    pub fn get(&self, var: VarId) -> i32 {
        self.values[var.index()]
    }

    /// Bind a variable to a value.
    pub fn set(&mut self, var: VarId, value: i32) {
        self.values[var.index()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_empty_connectives() {
        let asg = Assignment::new(0);
        assert!(Expr::And(vec![]).eval(&asg));
        assert!(!Expr::Or(vec![]).eval(&asg));
    }

    #[test]
    fn test_if_then_truth_table() {
        let model = Model::new(1);
        let v = model.part(0);
        let mut asg = Assignment::new(model.num_vars());
        asg.set(v, 1);

        let vacuous = Expr::if_then(Expr::EqConst(v, 2), Expr::EqConst(v, 3));
        assert!(vacuous.eval(&asg));

        let violated = Expr::if_then(Expr::EqConst(v, 1), Expr::EqConst(v, 3));
        assert!(!violated.eval(&asg));
    }

    #[test]
    fn test_support_matches_listed_rows_only() {
        let model = Model::new(2);
        let support = Expr::Support {
            vars: vec![model.part(0), model.part(1)],
            rows: vec![vec![1, 2], vec![2, 1]],
        };

        let mut asg = Assignment::new(model.num_vars());
        asg.set(model.part(0), 1);
        asg.set(model.part(1), 2);
        assert!(support.eval(&asg));

        asg.set(model.part(1), 1);
        assert!(!support.eval(&asg));
    }
}
