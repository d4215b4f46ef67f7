//! Tests for view pipelines
//!
//! Views are lazy: constructing a pipeline reads nothing, and each stage's
//! descriptor is derived from the stage before it.

use std::cell::Cell;

use tola_ranges::capability::{tier_of, IsBounded, IsSized, TierKind};
use tola_ranges::concept::{models, Greater};
use tola_ranges::traversal::{iter, RandomAccessSequence, Readable, Sequence, SizedSequence};
use tola_ranges::view::{self, AllView, Iota, TakeView, TransformView};
use tola_ranges::{action, concept_check, PipeExt};

// =============================================================================
// Iota
// =============================================================================

#[test]
fn test_unbounded_iota_through_take() {
    let firsts: Vec<u32> = (view::iota(1u32) | view::take(4)).into_iter().collect();
    assert_eq!(firsts, [1, 2, 3, 4]);
}

#[test]
fn test_bounded_iota() {
    let r = view::iota_to(3i64, 7);
    assert_eq!(r.size(), 4);
    assert_eq!(r.into_iter().sum::<i64>(), 3 + 4 + 5 + 6);
    assert_eq!(view::iota_to(7, 3).into_iter().count(), 0);
}

#[test]
fn test_iota_descriptors() {
    assert!(!models::<IsSized, Iota<i32>>());
    assert!(!models::<IsBounded, Iota<i32>>());
    assert!(models::<IsSized, Iota<i32, i32>>());
    assert!(concept_check!(Iota<u8, u8>: RandomAccess & !Mutable & !Permutable));
}

// =============================================================================
// Laziness
// =============================================================================

#[test]
fn test_transform_is_lazy() {
    let calls = Cell::new(0);
    let v = vec![1, 2, 3, 4, 5];
    let doubled = &v | view::transform(|x: &i32| {
        calls.set(calls.get() + 1);
        x * 2
    });
    assert_eq!(calls.get(), 0);

    assert_eq!(doubled.read(&3), 8);
    assert_eq!(calls.get(), 1);

    let taken: Vec<i32> = (doubled | view::take(2)).into_iter().collect();
    assert_eq!(taken, [2, 4]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_infinite_source_is_only_read_on_demand() {
    let squares = view::iota(0u64) | view::transform(|n: u64| n * n);
    let mut it = squares.into_iter();
    assert_eq!(it.nth(9), Some(81));
}

// =============================================================================
// Descriptor propagation
// =============================================================================

#[test]
fn test_take_caps_tier_at_forward() {
    let v = vec![1, 2, 3];
    fn kind<R: Sequence>(_: &R) -> TierKind {
        tier_of::<R>()
    }
    assert_eq!(kind(&(&v | view::all())), TierKind::RandomAccess);
    assert_eq!(kind(&(&v | view::take(2))), TierKind::Forward);
    assert_eq!(kind(&(&v | view::take(2) | view::transform(|x: &i32| *x))), TierKind::Forward);
}

#[test]
fn test_transform_keeps_random_access() {
    let v = [10, 20, 30, 40];
    let tens = &v | view::transform(|x: &i32| x / 10);
    let mut cur = tens.begin();
    tens.advance_by(&mut cur, 2);
    assert_eq!(tens.read(&cur), 3);
    assert_eq!(tens.distance(&tens.begin(), &cur), 2);
    assert_eq!(tens.size(), 4);
}

#[test]
fn test_views_are_read_only() {
    type T<'a> = TransformView<&'a Vec<i32>, fn(&i32) -> i32>;
    assert!(concept_check!(AllView<&'static Vec<i32>>: RandomAccess & !Mutable));
    assert!(concept_check!(T<'static>: !Mutable & Sized & Bounded));
    assert!(concept_check!(TakeView<&'static mut Vec<i32>>: Mutable & Permutable & !Bounded));
}

#[test]
fn test_read_only_views_reborrow_mut_sources() {
    let mut v = vec![3, 1, 2];
    let m = &mut v;
    let _ = &mut *m | action::sort();
    let shifted: Vec<i32> = (&*m | view::transform(|x: &i32| x + 10)).into_iter().collect();
    assert_eq!(shifted, [11, 12, 13]);
    assert!(!concept_check!(&'static mut Vec<i32>: Readable));
    assert!(concept_check!(&'static Vec<i32>: Readable));
}

#[test]
fn test_all_reads_through() {
    let v = vec!['x', 'y'];
    let s: String = (&v | view::all()).into_iter().collect();
    assert_eq!(s, "xy");
    let back = (&v | view::all()).into_base();
    assert_eq!(back.len(), 2);
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_composed_views_apply_left_to_right() {
    let first_squares = view::take(3) | view::transform(|x: &i32| x * x);
    let v = vec![1, 2, 3, 4];
    let got: Vec<i32> = (&v | first_squares).into_iter().collect();
    assert_eq!(got, [1, 4, 9]);
}

#[test]
fn test_pipe_and_method_forms_agree() {
    let v = vec![4, 5, 6];
    let a: Vec<i32> = (&v | view::take(2)).into_iter().copied().collect();
    let b: Vec<i32> = (&v).pipe(view::take(2)).into_iter().copied().collect();
    let c: Vec<i32> = view::take(2).apply(&v).into_iter().copied().collect();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_iter_bridge_on_views() {
    let total: i32 = iter(view::iota_to(1, 5) | view::transform(|n: i32| n * 10)).sum();
    assert_eq!(total, 100);
}

#[test]
fn test_view_then_action() {
    let mut v = vec![9, 3, 7, 1, 5];
    let _ = &mut v | view::take(4) | action::sort_by(Greater);
    assert_eq!(v, [9, 7, 3, 1, 5]);

    let _ = &mut v | view::take(3) | action::sort();
    assert_eq!(v, [3, 7, 9, 1, 5]);
}
