#![cfg(feature = "collections")]
//! Property-based tests for Set laws.
//!
//! These tests verify that Set satisfies the algebraic properties expected of
//! a finite set, and agrees with `std::collections::HashSet`.

use proptest::prelude::*;
use std::collections::HashSet;
use utilkit::collections::Set;

fn small_vec() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-40_i16..40, 0..40)
}

// =============================================================================
// Distinct Count Law
// Description: len equals the number of distinct input elements
// =============================================================================

proptest! {
    #[test]
    fn prop_len_is_distinct_count(elements in small_vec()) {
        let set = Set::from_slice(&elements);
        let distinct: HashSet<i16> = elements.iter().copied().collect();

        prop_assert_eq!(set.len(), distinct.len());
        prop_assert_eq!(Set::from_seq(elements.clone()), set);
    }
}

// =============================================================================
// Add-Contains / Remove-Contains Laws
// Description: add makes an element present, remove makes it absent
// =============================================================================

proptest! {
    #[test]
    fn prop_add_then_contains(elements in small_vec(), element: i16) {
        let mut set = Set::from_slice(&elements);
        set.add(element);

        prop_assert!(set.contains(&element));
    }

    #[test]
    fn prop_remove_then_not_contains(elements in small_vec(), element: i16) {
        let mut set = Set::from_slice(&elements);
        let before = set.len();
        set.remove(&element);

        prop_assert!(!set.contains(&element));
        prop_assert!(set.len() + 1 >= before);
    }
}

// =============================================================================
// Commutativity Laws
// Description: A ∪ B = B ∪ A and A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutative(elements_a in small_vec(), elements_b in small_vec()) {
        let set_a = Set::from_slice(&elements_a);
        let set_b = Set::from_slice(&elements_b);

        prop_assert_eq!(set_a.union(&set_b), set_b.union(&set_a));
    }

    #[test]
    fn prop_intersect_commutative(elements_a in small_vec(), elements_b in small_vec()) {
        let set_a = Set::from_slice(&elements_a);
        let set_b = Set::from_slice(&elements_b);

        prop_assert_eq!(set_a.intersect(&set_b), set_b.intersect(&set_a));
    }
}

// =============================================================================
// Size Bound Laws
// Description: |A ∩ B| ≤ min(|A|, |B|), max(|A|, |B|) ≤ |A ∪ B| ≤ |A| + |B|,
//              |A − B| ≤ |A|
// =============================================================================

proptest! {
    #[test]
    fn prop_size_bounds(elements_a in small_vec(), elements_b in small_vec()) {
        let set_a = Set::from_slice(&elements_a);
        let set_b = Set::from_slice(&elements_b);

        let intersection = set_a.intersect(&set_b);
        let union = set_a.union(&set_b);
        let difference = set_a.difference(&set_b);

        prop_assert!(intersection.len() <= set_a.len().min(set_b.len()));
        prop_assert!(union.len() >= set_a.len().max(set_b.len()));
        prop_assert!(union.len() <= set_a.len() + set_b.len());
        prop_assert!(difference.len() <= set_a.len());
        prop_assert_eq!(difference.len() + intersection.len(), set_a.len());
    }
}

// =============================================================================
// Membership Laws
// Description: each result holds exactly the elements its definition names
// =============================================================================

proptest! {
    #[test]
    fn prop_membership(
        elements_a in small_vec(),
        elements_b in small_vec(),
        probe in -40_i16..40
    ) {
        let set_a = Set::from_slice(&elements_a);
        let set_b = Set::from_slice(&elements_b);
        let in_a = set_a.contains(&probe);
        let in_b = set_b.contains(&probe);

        prop_assert_eq!(set_a.intersect(&set_b).contains(&probe), in_a && in_b);
        prop_assert_eq!(set_a.union(&set_b).contains(&probe), in_a || in_b);
        prop_assert_eq!(set_a.difference(&set_b).contains(&probe), in_a && !in_b);
        prop_assert_eq!(set_a.symmetric_difference(&set_b).contains(&probe), in_a != in_b);
    }
}

// =============================================================================
// Idempotence Laws
// Description: A ∪ A = A, A ∩ A = A, A − A = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_idempotence(elements in small_vec()) {
        let set = Set::from_slice(&elements);

        prop_assert_eq!(set.union(&set), set.clone());
        prop_assert_eq!(set.intersect(&set), set.clone());
        prop_assert!(set.difference(&set).is_empty());
    }
}

// =============================================================================
// Identity Laws
// Description: A ∪ ∅ = A, A ∩ ∅ = ∅, A − ∅ = A, ∅ − A = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_empty_boundaries(elements in small_vec()) {
        let set = Set::from_slice(&elements);
        let empty: Set<i16> = Set::new();

        prop_assert_eq!(set.union(&empty), set.clone());
        prop_assert_eq!(empty.union(&set), set.clone());
        prop_assert!(set.intersect(&empty).is_empty());
        prop_assert_eq!(set.difference(&empty), set.clone());
        prop_assert!(empty.difference(&set).is_empty());
    }
}

// =============================================================================
// Export Round-Trip Law
// Description: from_slice(to_vec(A)) = A and to_vec has no duplicates
// =============================================================================

proptest! {
    #[test]
    fn prop_to_vec_round_trip(elements in small_vec()) {
        let set = Set::from_slice(&elements);
        let exported = set.to_vec();

        prop_assert_eq!(exported.len(), set.len());
        prop_assert_eq!(Set::from_slice(&exported), set.clone());
        prop_assert_eq!(set.iter().count(), set.len());
    }
}

// =============================================================================
// Relation Laws
// Description: A ∩ B ⊆ A ⊆ A ∪ B, and A − B is disjoint from B
// =============================================================================

proptest! {
    #[test]
    fn prop_relations(elements_a in small_vec(), elements_b in small_vec()) {
        let set_a = Set::from_slice(&elements_a);
        let set_b = Set::from_slice(&elements_b);

        prop_assert!(set_a.intersect(&set_b).is_subset(&set_a));
        prop_assert!(set_a.union(&set_b).is_superset(&set_a));
        prop_assert!(set_a.difference(&set_b).is_disjoint(&set_b));
        prop_assert_eq!(
            set_a.is_disjoint(&set_b),
            set_a.intersect(&set_b).is_empty()
        );
    }
}
