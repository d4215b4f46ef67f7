//! Tests for action::sort and action::stable_sort
//!
//! Covers the pipe and direct forms, comparator/projection variants,
//! chaining, and sorting a forward-only sequence with no known size.

use std::cell::Cell;
use std::collections::VecDeque;

use tola_ranges::action::{self, Action};
use tola_ranges::capability::{tier_of, ForwardTier, TierKind};
use tola_ranges::concept::{Compare, Greater, Less};
use tola_ranges::primitives::{Absent, Present};
use tola_ranges::traversal::{Indirect, Sequence, Swappable, Writable};
use tola_ranges::view;
use tola_ranges::{concept_check, PipeExt};

// =============================================================================
// Forward-only sequence that counts swaps
// =============================================================================

struct Counting {
    items: Vec<i32>,
    swaps: Cell<usize>,
}

impl Counting {
    fn new(items: Vec<i32>) -> Self {
        Counting { items, swaps: Cell::new(0) }
    }
}

impl Sequence for Counting {
    type Value = i32;
    type Cursor = usize;
    type Sentinel = usize;
    type Tier = ForwardTier;
    type Mutable = Present;
    type SizeKnown = Absent;
    type Bounded = Present;

    fn begin(&self) -> usize {
        0
    }
    fn end(&self) -> usize {
        self.items.len()
    }
    fn inc(&self, cur: &mut usize) {
        *cur += 1;
    }
}

impl Indirect for Counting {
    fn get(&self, cur: &usize) -> &i32 {
        &self.items[*cur]
    }
}

impl Writable for Counting {
    fn get_mut(&mut self, cur: &usize) -> &mut i32 {
        &mut self.items[*cur]
    }
}

impl Swappable for Counting {
    fn swap_at(&mut self, a: &usize, b: &usize) {
        self.swaps.set(self.swaps.get() + 1);
        self.items.swap(*a, *b);
    }
}

// =============================================================================
// Forms
// =============================================================================

#[test]
fn test_owned_pipe_returns_sorted_container() {
    let v = vec![3, 1, 2] | action::sort();
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_exclusive_borrow_sorts_in_place() {
    let mut v = vec![9, 8, 7];
    let _ = &mut v | action::sort();
    assert_eq!(v, [7, 8, 9]);
}

#[test]
fn test_direct_and_pipe_agree() {
    let input = vec![5, -1, 3, 3, 0];
    let direct = action::sort().apply(input.clone());
    let piped = input.clone() | action::sort();
    let method = input.pipe(action::sort());
    assert_eq!(direct, piped);
    assert_eq!(piped, method);
}

#[test]
fn test_other_containers() {
    let mut d: VecDeque<char> = "dcba".chars().collect();
    let _ = &mut d | action::sort();
    assert!(d.iter().copied().eq("abcd".chars()));

    let a = [3u8, 1, 2] | action::sort_by(Greater);
    assert_eq!(a, [3, 2, 1]);

    let mut s = [4, 2, 6, 0];
    let _ = &mut s[1..] | action::sort();
    assert_eq!(s, [4, 0, 2, 6]);
}

// =============================================================================
// Comparators and projections
// =============================================================================

#[test]
fn test_sort_by_closure() {
    let v = vec![1, 4, 2] | action::sort_by(|a: &i32, b: &i32| a > b);
    assert_eq!(v, [4, 2, 1]);
}

#[test]
fn test_sort_by_ordering_comparator() {
    let v = vec!["b", "C", "a"]
        | action::sort_by(Compare(|a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase())));
    assert_eq!(v, ["a", "b", "C"]);
}

#[test]
fn test_sort_by_key_projection() {
    let words = vec!["pear", "fig", "banana"] | action::sort_by_key(Less, |s: &&str| s.len());
    assert_eq!(words, ["fig", "pear", "banana"]);
}

#[test]
fn test_stable_sort_keeps_tie_order() {
    let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]
        | action::stable_sort_by_key(Less, |p: &(i32, char)| p.0);
    assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

    let desc = vec![(0, 'x'), (1, 'y'), (0, 'z')]
        | action::stable_sort_by(|a: &(i32, char), b: &(i32, char)| a.0 > b.0);
    assert_eq!(desc, [(1, 'y'), (0, 'x'), (0, 'z')]);
}

#[test]
fn test_floats_sort_with_partial_order() {
    let v = vec![2.5f64, -0.5, 1.0] | action::sort();
    assert_eq!(v, [-0.5, 1.0, 2.5]);
}

// =============================================================================
// Chaining
// =============================================================================

#[test]
fn test_chain_of_actions() {
    let v = vec![3, 1, 3, 2, 1] | action::sort() | action::unique() | action::reverse();
    assert_eq!(v, [3, 2, 1]);
}

#[test]
fn test_composed_actions_apply_later() {
    let normalize = action::transform(|x: &mut i32| *x = x.abs()) | action::sort();
    let v = normalize.apply(vec![-3, 2, -1]);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_composed_action_is_an_action() {
    fn twice<R, A: Action<R> + Copy>(a: A, rng: R) -> R {
        a.adapt(a.adapt(rng))
    }
    assert_eq!(twice(action::sort() | action::reverse(), vec![1, 2, 3]), [3, 2, 1]);
}

#[test]
fn test_sort_prefix_through_take() {
    let mut v = vec![5, 4, 3, 2, 1];
    let _ = &mut v | view::take(3) | action::sort();
    assert_eq!(v, [3, 4, 5, 2, 1]);
}

// =============================================================================
// Forward-only, unsized
// =============================================================================

#[test]
fn test_forward_only_sequence_is_sortable() {
    assert_eq!(tier_of::<Counting>(), TierKind::Forward);
    assert!(concept_check!(Counting: Forward & Permutable & !Bidirectional & !Sized));

    let c = Counting::new(vec![4, 1, 3, 2, 5]).pipe(action::sort());
    assert_eq!(c.items, [1, 2, 3, 4, 5]);
    assert!(c.swaps.get() > 0);
}

#[test]
fn test_sorting_sorted_input_does_not_swap() {
    let c = Counting::new(vec![2, 9, 4, 4, 0, 7]).pipe(action::sort());
    let first = c.swaps.get();
    assert!(first > 0);

    let c = action::sort().apply(c);
    assert_eq!(c.swaps.get(), first);

    let c = c.pipe(action::stable_sort());
    assert_eq!(c.swaps.get(), first);
    assert_eq!(c.items, [0, 2, 4, 4, 7, 9]);
}

#[test]
fn test_stable_sort_on_forward_only() {
    let c = Counting::new(vec![3, 2, 1]).pipe(action::stable_sort_by(Greater));
    assert_eq!(c.items, [3, 2, 1]);
    assert_eq!(c.swaps.get(), 0);

    let c = c.pipe(action::stable_sort());
    assert_eq!(c.items, [1, 2, 3]);
}

#[test]
fn test_empty_and_single() {
    assert_eq!(Vec::<i32>::new() | action::sort(), Vec::<i32>::new());
    assert_eq!(vec![1] | action::stable_sort(), [1]);
}
