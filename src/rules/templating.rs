//! Templating rules: ordered part templates matched in windows.
//!
//! A template is an ordered list of slots, slot `s` holding the components
//! allowed at any design position congruent to `s` modulo the template
//! length L. The design, read in consecutive non-overlapping windows of
//! length L starting at position 0, must draw every window offset from that
//! slot's allowed set.
//!
//! Two equivalent encodings are provided:
//! - the windowed conjunction form ([`windows`]), the default;
//! - the extensional support form ([`support`]), which enumerates the
//!   cartesian product of the slots into an explicit allowed-tuple table and
//!   tiles it across the design, for engines that handle support constraints
//!   natively.

use crate::constraint::Expr;
use crate::error::CompileError;
use crate::model::Model;

use super::{Rule, Selection};

/// The windowed conjunction form: per window, per slot, a disjunction of the
/// slot's allowed component ids; conjoined across slots and windows.
///
/// Errs when the design length and template produce no complete window —
/// the template is longer than the design, the design length is not a
/// multiple of the template length, or either is zero. That is a
/// configuration error naming the rule, never an empty (vacuously true)
/// conjunction.
pub(crate) fn windows(
    rule: &Rule,
    slots: &[Selection],
    model: &Model,
) -> Result<Expr, CompileError> {
    let l = slots.len();
    let n = model.len();
    if l == 0 || n < l || n % l != 0 {
        return Err(CompileError::EmptyTemplate {
            rule: rule.to_string(),
            design_len: n,
        });
    }

    let mut window_exprs = Vec::with_capacity(n / l);
    for w in (0..n).step_by(l) {
        let per_slot = slots
            .iter()
            .enumerate()
            .map(|(s, selection)| {
                Expr::Or(
                    selection
                        .iter()
                        .map(|c| Expr::EqConst(model.part(w + s), c.id()))
                        .collect(),
                )
            })
            .collect();
        window_exprs.push(Expr::And(per_slot));
    }
    Ok(Expr::And(window_exprs))
}

/// The extensional support form: every full combination of one component per
/// slot becomes a row of an allowed-tuple table; the table's column pattern
/// is then repeated every L positions, one support constraint per window
/// over that window's PART variables, so the accepted designs are exactly
/// those of [`windows`]. Subject to the same complete-window guard.
pub(crate) fn support(
    rule: &Rule,
    slots: &[Selection],
    model: &Model,
) -> Result<Expr, CompileError> {
    let l = slots.len();
    let n = model.len();
    if l == 0 || n < l || n % l != 0 {
        return Err(CompileError::EmptyTemplate {
            rule: rule.to_string(),
            design_len: n,
        });
    }

    let table = combinations(slots);
    let per_window = (0..n)
        .step_by(l)
        .map(|w| Expr::Support {
            vars: (w..w + l).map(|i| model.part(i)).collect(),
            rows: table.clone(),
        })
        .collect();
    Ok(Expr::And(per_window))
}

/// Enumerate the cartesian product of the slots' allowed-component sets.
///
/// Returns one row per full combination (row count = product of slot sizes,
/// column count = template length), slot 0 varying slowest. The recursive
/// walk shares one row cursor, incremented as each leaf combination is
/// emitted and decremented on return from each level, so sibling branches
/// land on the correct rows; the cursor lives in this call's activation
/// only, so back-to-back or concurrent generations cannot interfere.
///
/// The walk only writes the cells that change along its path; the remaining
/// cells are back-filled from the row above afterwards. The first row is
/// always fully written by the leftmost path.
pub fn combinations(slots: &[Selection]) -> Vec<Vec<i32>> {
    let row_count: usize = slots.iter().map(|s| s.len()).product();
    let cols = slots.len();
    if row_count == 0 || cols == 0 {
        return Vec::new();
    }

    let mut table: Vec<Vec<Option<i32>>> = vec![vec![None; cols]; row_count];
    let mut cursor = 0usize;
    fill(slots, &mut table, 0, &mut cursor);

    let mut resolved: Vec<Vec<i32>> = Vec::with_capacity(row_count);
    for (r, row) in table.into_iter().enumerate() {
        let full = row
            .into_iter()
            .enumerate()
            .map(|(c, cell)| match cell {
                Some(id) => id,
                None => resolved[r - 1][c],
            })
            .collect();
        resolved.push(full);
    }
    resolved
}

fn fill(slots: &[Selection], table: &mut [Vec<Option<i32>>], col: usize, cursor: &mut usize) {
    if col >= slots.len() {
        return;
    }
    for component in &slots[col] {
        table[*cursor][col] = Some(component.id());
        fill(slots, table, col + 1, cursor);
        *cursor += 1;
    }
    *cursor -= 1;
}
