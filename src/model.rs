//! The shared decision-variable matrix for a candidate design.
//!
//! A design of length N is represented by three parallel rows of integer
//! decision variables, indexed by position:
//! - `part(i)`: which component occupies position i (domain: component ids)
//! - `part_type(i)`: which category of part occupies position i (type codes)
//! - `orientation(i)`: which strand direction position i reads in ({-1, +1})
//!
//! The model is owned by the caller and read-only during compilation; rule
//! compilation only composes constraints over the variable handles, never
//! values. Binding variables to values is the engine's job.

use crate::component::Universe;
use crate::constraint::Expr;

/// Orientation domain value: reading in the forward direction.
pub const FORWARD: i32 = 1;
/// Orientation domain value: reading in the reverse direction.
pub const REVERSE: i32 = -1;

/// Handle to one integer decision variable.
///
/// Variables are identified by a dense index into the model's variable
/// space; an `Assignment` binds each index to a concrete value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u32);

impl VarId {
    /// The dense index of this variable.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The decision-variable matrix for a design of fixed length.
///
/// Variable layout: positions `0..N` are the PART row, `N..2N` the TYPE row,
/// `2N..3N` the ORIENTATION row. The TYPE row is NOT linked to the PART row
/// by the rule compilers; callers that solve must conjoin [`Model::linkage`]
/// (or enforce the linking themselves, as the reference engine does).
#[derive(Clone, Debug)]
pub struct Model {
    len: usize,
}

impl Model {
    /// Create the variable matrix for a design of `len` positions.
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of design positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the design has zero positions.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of decision variables (three rows).
    pub fn num_vars(&self) -> usize {
        self.len * 3
    }

    fn check_position(&self, i: usize) {
        assert!(
            i < self.len,
            "position {} out of range for design of length {}",
            i,
            self.len
        );
    }

    /// The PART variable at position `i`.
    ///
    /// Panics if `i` is out of range; positions are always iterated from
    /// `0..len()` by the compilers.
    pub fn part(&self, i: usize) -> VarId {
        self.check_position(i);
        VarId(i as u32)
    }

    /// The TYPE variable at position `i`.
    pub fn part_type(&self, i: usize) -> VarId {
        self.check_position(i);
        VarId((self.len + i) as u32)
    }

    /// The ORIENTATION variable at position `i`.
    pub fn orientation(&self, i: usize) -> VarId {
        self.check_position(i);
        VarId((2 * self.len + i) as u32)
    }

    /// The channeling constraint linking the PART and TYPE rows: whenever
    /// position i holds a component, the TYPE variable at i holds that
    /// component's type code.
    ///
    /// Rule compilation assumes this linking is already in force; callers
    /// hand the returned expression to the engine alongside the rules.
    pub fn linkage(&self, universe: &Universe) -> Expr {
        let mut links = Vec::with_capacity(self.len * universe.len());
        for i in 0..self.len {
            for c in universe.iter() {
                links.push(Expr::if_then(
                    Expr::EqConst(self.part(i), c.id()),
                    Expr::EqConst(self.part_type(i), c.part_type().code()),
                ));
            }
        }
        Expr::And(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::PartType;
    use crate::constraint::Assignment;

    #[test]
    fn test_rows_do_not_overlap() {
        let model = Model::new(4);
        assert_eq!(model.part(0).index(), 0);
        assert_eq!(model.part(3).index(), 3);
        assert_eq!(model.part_type(0).index(), 4);
        assert_eq!(model.orientation(0).index(), 8);
        assert_eq!(model.num_vars(), 12);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_position_out_of_range_panics() {
        Model::new(2).part(2);
    }

    #[test]
    fn test_linkage_rejects_mismatched_type() {
        let mut universe = Universe::new();
        let p = universe.intern("p1", PartType::Promoter);
        let model = Model::new(1);
        let link = model.linkage(&universe);

        let mut asg = Assignment::new(model.num_vars());
        asg.set(model.part(0), p.id());
        asg.set(model.part_type(0), PartType::Promoter.code());
        assert!(link.eval(&asg));

        asg.set(model.part_type(0), PartType::Terminator.code());
        assert!(!link.eval(&asg));
    }
}
