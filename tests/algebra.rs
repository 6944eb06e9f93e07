use std::collections::BTreeSet;

use mindset::interpreter::value::{
    algebra::{self, symmetric_multi_difference},
    ordinal::{ORDINAL_CACHE_SIZE, Successors},
    set::Set,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// A plain description of a set, turned into a [`Set`] inside each test.
#[derive(Debug, Clone)]
enum Shape {
    Ordinal(usize),
    Node(Vec<Self>),
}

impl Shape {
    fn build(&self) -> Set {
        match self {
            Self::Ordinal(n) => Set::ordinal(*n),
            Self::Node(children) => children.iter().map(Self::build).collect(),
        }
    }
}

fn shape() -> impl Strategy<Value = Shape> {
    (0usize..4).prop_map(Shape::Ordinal).prop_recursive(3, 24, 4, |inner| {
                                            prop::collection::vec(inner, 0..4).prop_map(Shape::Node)
                                        })
}

fn family() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(shape(), 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn union_laws(a in shape(), b in shape(), c in shape()) {
        let (a, b, c) = (a.build(), b.build(), c.build());

        prop_assert_eq!(a.union(&b), b.union(&a));
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        prop_assert_eq!(a.union(&a), a.clone());
    }

    #[test]
    fn intersection_laws(a in shape(), b in shape(), c in shape()) {
        let (a, b, c) = (a.build(), b.build(), c.build());

        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        prop_assert_eq!(a.intersection(&b).intersection(&c), a.intersection(&b.intersection(&c)));
        prop_assert_eq!(a.intersection(&a), a.clone());
    }

    #[test]
    fn difference_keeps_exactly_what_the_right_side_lacks(a in shape(), b in shape()) {
        let (a, b) = (a.build(), b.build());
        let difference = a.difference(&b);

        prop_assert!(difference.is_subset(&a));
        for element in &a {
            prop_assert_eq!(difference.contains(element), !b.contains(element));
        }
    }

    #[test]
    fn construction_is_order_independent(elements in family()) {
        let forward: Set = elements.iter().map(Shape::build).collect();
        let backward: Set = elements.iter().rev().map(Shape::build).collect();

        prop_assert_eq!(forward.to_string(), backward.to_string());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn symmetric_multi_difference_counts_parity(shapes in family(), rotation in 0usize..5) {
        let sets: Vec<BTreeSet<Set>> = shapes.iter().map(|s| s.build().elements().clone()).collect();

        let mut rotated = sets.clone();
        if !rotated.is_empty() {
            let by = rotation % rotated.len();
            rotated.rotate_left(by);
        }
        let reversed: Vec<BTreeSet<Set>> = sets.iter().rev().cloned().collect();

        let expected: BTreeSet<Set> =
            algebra::big_union(&sets).into_iter()
                                     .filter(|e| sets.iter().filter(|s| s.contains(e)).count() % 2 == 1)
                                     .collect();

        prop_assert_eq!(symmetric_multi_difference(&sets), expected.clone());
        prop_assert_eq!(symmetric_multi_difference(&rotated), expected.clone());
        prop_assert_eq!(symmetric_multi_difference(&reversed), expected);
    }

    #[test]
    fn ordinals_are_recognized_however_they_are_built(n in 0usize..300) {
        let by_hand: Set = (0..n).map(Set::ordinal).collect();

        prop_assert_eq!(by_hand.numeral(), Some(n));
        prop_assert_eq!(&by_hand, &Set::ordinal(n));
        prop_assert_eq!(Set::ordinal(n).successor(), Set::ordinal(n + 1));
    }
}

#[test]
fn powerset_sizes_are_exhaustive_up_to_five() {
    for n in 0..=5 {
        let ordinal = Set::ordinal(n);
        let shifted: Set = (0..n).map(|k| Set::singleton(Set::ordinal(k))).collect();

        for base in [ordinal, shifted] {
            let powerset = base.powerset();

            assert_eq!(powerset.len(), 1 << n);
            assert!(powerset.iter().all(|subset| subset.is_subset(&base)));
            assert!(powerset.contains(&Set::empty()));
            assert!(powerset.contains(&base));
        }
    }
}

#[test]
fn empty_family_intersects_to_nothing() {
    assert_eq!(Set::empty().big_intersection(), Set::empty());

    let family: Vec<BTreeSet<u8>> = Vec::new();
    assert!(algebra::big_intersection(&family).is_empty());
}

#[test]
fn ordinals_past_the_cache_continue_the_sequence() {
    let last_cached = Set::ordinal(ORDINAL_CACHE_SIZE - 1);
    let synthesized = Set::ordinal(ORDINAL_CACHE_SIZE + 10);

    assert_eq!(synthesized.len(), ORDINAL_CACHE_SIZE + 10);
    assert!(synthesized.contains(&last_cached));
    assert_eq!(Successors::new(last_cached).advance(11), synthesized);
}

#[test]
fn successors_yield_consecutive_ordinals() {
    let firsts: Vec<Set> = Successors::new(Set::empty()).take(5).collect();
    let expected: Vec<Set> = (0..5).map(Set::ordinal).collect();

    assert_eq!(firsts, expected);
}

#[test]
fn pair_collapses_on_equal_components() {
    let pair = Set::pair(Set::ordinal(1), Set::ordinal(1));
    assert_eq!(pair, Set::singleton(Set::singleton(Set::ordinal(1))));

    let pair = Set::pair(Set::ordinal(0), Set::ordinal(4));
    assert_eq!(pair.len(), 2);
    assert_eq!(pair.symmetric_multi_difference().symmetric_multi_difference(), Set::ordinal(4));
}

#[test]
fn display_uses_numerals_where_it_can() {
    let set: Set = [Set::ordinal(3), Set::singleton(Set::ordinal(2))].into_iter().collect();
    // Smaller sets sort first.
    assert_eq!(set.to_string(), "{{2}, 3}");
    assert_eq!(Set::ordinal(0).to_string(), "0");
}
