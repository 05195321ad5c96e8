//! Property tests: positive/negative compilation forms partition the design
//! space, compiled trees agree with the declarative reading of each rule, and
//! the two template encodings accept the same designs.

mod generators;

use generators::{arb_oriented_rule, arb_pair_rule, arb_slots, assignment_of, fixture_universe};
use operon::rules::templating::combinations;
use operon::{enumerate, parse, Budget, Model, Rule, Selection};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For every rule and every design, exactly one of the positive and
    /// negative forms holds.
    #[test]
    fn prop_negation_partitions_designs(text in prop_oneof![arb_pair_rule(), arb_oriented_rule()]) {
        let mut universe = fixture_universe();
        let rules = parse(&text, &mut universe).unwrap();
        prop_assert_eq!(rules.len(), 1);

        let model = Model::new(2);
        let pos = rules[0].compile_positive(&model).unwrap();
        let neg = rules[0].compile_negated(&model).unwrap();

        for design in enumerate(&model, &universe, &[], &Budget::exhaustive()) {
            let asg = assignment_of(&model, &design);
            prop_assert_ne!(pos.eval(&asg), neg.eval(&asg), "design {}", design);
        }
    }

    /// The compiled form of "A THEN B" agrees with the declarative reading:
    /// a design containing A must also contain B.
    #[test]
    fn prop_then_matches_containment_reading(
        a in generators::arb_name(),
        b in generators::arb_name(),
    ) {
        let mut universe = fixture_universe();
        let rules = parse(&format!("{} THEN {}.", a, b), &mut universe).unwrap();

        let model = Model::new(2);
        let expr = rules[0].compile(&model).unwrap();

        for design in enumerate(&model, &universe, &[], &Budget::exhaustive()) {
            let contains = |name: &str| design.placements.iter().any(|p| p.component.name() == name);
            let expected = !contains(a) || contains(b);
            let asg = assignment_of(&model, &design);
            prop_assert_eq!(expr.eval(&asg), expected, "design {}", design);
        }
    }

    /// The windowed template form accepts exactly the designs whose every
    /// window draws each offset from that slot's allowed set, and the
    /// support-table form accepts the same designs. Lengths with no complete
    /// window are rejected at compile time.
    #[test]
    fn prop_template_encodings_agree(slot_names in arb_slots()) {
        let universe = fixture_universe();
        let slots: Vec<Selection> = slot_names
            .iter()
            .map(|names| names.iter().map(|n| universe.lookup(n).unwrap()).collect())
            .collect();
        let l = slots.len();
        let rule = Rule::template(slots.clone());

        if l > 1 {
            prop_assert!(rule.compile(&Model::new(l + 1)).is_err());
        }

        let model = Model::new(2 * l);
        let windowed = rule.compile(&model).unwrap();
        let support = rule.compile_support(&model).unwrap().unwrap();

        for design in enumerate(&model, &universe, &[], &Budget::exhaustive()) {
            let expected = design.placements.chunks(l).all(|window| {
                window
                    .iter()
                    .zip(&slots)
                    .all(|(p, slot)| slot.iter().any(|c| c.id() == p.component.id()))
            });
            let asg = assignment_of(&model, &design);
            prop_assert_eq!(windowed.eval(&asg), expected, "design {}", design);
            prop_assert_eq!(support.eval(&asg), expected, "design {}", design);
        }
    }

    /// The combination table enumerates the full cartesian product of the
    /// slots, one distinct row per choice of one component per slot.
    #[test]
    fn prop_combination_table_is_the_cartesian_product(slot_names in arb_slots()) {
        let universe = fixture_universe();
        let slots: Vec<Selection> = slot_names
            .iter()
            .map(|names| names.iter().map(|n| universe.lookup(n).unwrap()).collect())
            .collect();

        let table = combinations(&slots);
        let expected: usize = slots.iter().map(|s| s.len()).product();
        prop_assert_eq!(table.len(), expected);

        for row in &table {
            prop_assert_eq!(row.len(), slots.len());
            for (col, id) in row.iter().enumerate() {
                prop_assert!(slots[col].iter().any(|c| c.id() == *id));
            }
        }
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }
}
