//! Proptest generators and shared fixtures for rule tests.
//!
//! Provides a fixed small component universe and strategies for generating
//! rules (as rule text, exercising the front-end on the way in) and designs.

use operon::{Assignment, Design, Model, PartType, Universe};
use proptest::prelude::*;

/// The fixture part names, covering every part type plus a terminator.
pub const PART_NAMES: [&str; 5] = ["p1", "p2", "c1", "c2", "t1"];

/// A universe holding the fixture parts, types inferred from their names.
pub fn fixture_universe() -> Universe {
    let mut universe = Universe::new();
    for name in PART_NAMES {
        universe.intern(name, PartType::infer(name));
    }
    universe
}

/// Strategy over the fixture part names.
pub fn arb_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(&PART_NAMES[..])
}

/// Rule text for a pairwise rule, optionally negated.
pub fn arb_pair_rule() -> impl Strategy<Value = String> {
    let ops = prop::sample::select(vec!["THEN", "DRIVES", "BEFORE", "SAME_ORIENTATION"]);
    (any::<bool>(), arb_name(), ops, arb_name()).prop_map(|(neg, a, op, b)| {
        format!("{}{} {} {}.", if neg { "NOT " } else { "" }, a, op, b)
    })
}

/// Rule text for an orientation rule, optionally negated.
pub fn arb_oriented_rule() -> impl Strategy<Value = String> {
    let dirs = prop::sample::select(vec!["FORWARD", "REVERSE"]);
    (any::<bool>(), arb_name(), dirs)
        .prop_map(|(neg, c, dir)| format!("{}{} {}.", if neg { "NOT " } else { "" }, c, dir))
}

/// Template slots as name lists: 1..=2 slots, each a distinct non-empty
/// subset of the fixture parts.
pub fn arb_slots() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    let slot = prop::sample::subsequence(PART_NAMES.to_vec(), 1..=PART_NAMES.len());
    prop::collection::vec(slot, 1..=2)
}

/// The assignment corresponding to a concrete design.
pub fn assignment_of(model: &Model, design: &Design) -> Assignment {
    let mut asg = Assignment::new(model.num_vars());
    for (i, p) in design.placements.iter().enumerate() {
        asg.set(model.part(i), p.component.id());
        asg.set(model.part_type(i), p.component.part_type().code());
        asg.set(model.orientation(i), p.orientation);
    }
    asg
}
