//! Property-based tests using proptest.
//!
//! Sorting must produce an ordered permutation of its input, leave sorted
//! input alone, and (for stable_sort) keep equivalent elements in order.
//! The move view must hand out every element exactly once.

use proptest::prelude::*;
use tola_ranges::action;
use tola_ranges::algorithm::{equal_range, is_sorted};
use tola_ranges::concept::{Greater, Identity, Less};
use tola_ranges::view;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small integers, so duplicates are common.
fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..64)
}

/// Records with a sort key and their original position.
fn keyed() -> impl Strategy<Value = Vec<(u8, usize)>> {
    prop::collection::vec(0u8..6, 0..48)
        .prop_map(|keys| keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect())
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z]{0,6}").unwrap(), 0..24)
}

fn multiset(mut v: Vec<i32>) -> Vec<i32> {
    v.sort_unstable();
    v
}

// ============================================================================
// SORT PROPERTIES
// ============================================================================

proptest! {
    /// Property: the output is ordered and a permutation of the input.
    #[test]
    fn prop_sort_orders_and_permutes(input in values()) {
        let sorted = input.clone() | action::sort();
        prop_assert!(is_sorted(&sorted, &Less, &Identity));
        prop_assert_eq!(multiset(input), sorted);
    }

    /// Property: sorting twice is sorting once.
    #[test]
    fn prop_sort_is_idempotent(input in values()) {
        let once = input.clone() | action::sort_by(Greater);
        let twice = once.clone() | action::sort_by(Greater);
        prop_assert_eq!(once, twice);
    }

    /// Property: stable_sort keeps the original order of equal keys.
    #[test]
    fn prop_stable_sort_keeps_ties(records in keyed()) {
        let out = records.clone()
            | action::stable_sort_by_key(Less, |r: &(u8, usize)| r.0);

        let mut expected = records;
        expected.sort_by_key(|r| r.0);
        prop_assert_eq!(out, expected);
    }

    /// Property: chaining actions equals applying them one by one.
    #[test]
    fn prop_chaining_is_sequential(input in values()) {
        let chained = input.clone() | (action::sort() | action::unique() | action::reverse());

        let mut stepwise = input;
        let _ = &mut stepwise | action::sort();
        let _ = &mut stepwise | action::unique();
        let _ = &mut stepwise | action::reverse();
        prop_assert_eq!(chained, stepwise);
    }

    /// Property: equal_range on sorted input covers exactly the equal elements.
    #[test]
    fn prop_equal_range_counts_matches(input in values(), needle in -25i32..25) {
        let sorted = input | action::sort();
        let r = equal_range(&sorted, &needle, &Less, &Identity);
        prop_assert_eq!(r.len, sorted.iter().filter(|&&x| x == needle).count());
        prop_assert!(sorted[r.begin..r.end].iter().all(|&x| x == needle));
    }
}

// ============================================================================
// MOVE VIEW PROPERTIES
// ============================================================================

proptest! {
    /// Property: every element is moved out once, in order, leaving defaults.
    #[test]
    fn prop_move_view_empties_source(original in words()) {
        let mut source = original.clone();
        let moved: Vec<String> = (&mut source | view::moved()).into_iter().collect();

        prop_assert_eq!(moved, original);
        prop_assert!(source.iter().all(String::is_empty));
    }

    /// Property: moving a prefix leaves the rest untouched.
    #[test]
    fn prop_move_prefix(original in words(), n in 0usize..32) {
        let mut source = original.clone();
        let moved: Vec<String> = (&mut source | view::take(n) | view::moved()).into_iter().collect();

        let k = n.min(original.len());
        prop_assert_eq!(&moved[..], &original[..k]);
        prop_assert!(source[..k].iter().all(String::is_empty));
        prop_assert_eq!(&source[k..], &original[k..]);
    }
}
