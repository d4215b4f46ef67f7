//! Sorting over forward cursors.

use crate::concept::{Permutable, Projection, Relation};
use crate::traversal::{Indirect, Sentinel, Sequence, Swappable};

use super::{count_from, precedes};

/// No adjacent pair out of order under `pred` applied to `proj`.
pub fn is_sorted<R, C, P>(rng: &R, pred: &C, proj: &P) -> bool
where
    R: Indirect + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    let end = rng.end();
    let mut prev = rng.begin();
    if end.is_end(&prev) {
        return true;
    }
    let mut cur = prev.clone();
    rng.inc(&mut cur);
    while !end.is_end(&cur) {
        if precedes(pred, proj, rng.get(&cur), rng.get(&prev)) {
            return false;
        }
        prev = cur.clone();
        rng.inc(&mut cur);
    }
    true
}

/// Unstable in-place sort.
///
/// Quicksort with a middle pivot and a three-way partition, recursing into
/// the shorter side. Runs of keys equal to the pivot are set aside after one
/// pass. A sequence that is already sorted is left untouched.
pub fn sort<R, C, P>(rng: &mut R, pred: &C, proj: &P)
where
    R: Permutable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    if is_sorted(&*rng, pred, proj) {
        return;
    }
    let first = rng.begin();
    let len = count_from(&*rng, &first);
    quicksort(rng, first, len, pred, proj);
}

fn quicksort<R, C, P>(rng: &mut R, mut first: R::Cursor, mut len: usize, pred: &C, proj: &P)
where
    R: Swappable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    while len > 1 {
        let mid = nth(&*rng, &first, len / 2);
        rng.swap_at(&first, &mid);

        // (first, last_less] < pivot <= (last_less, i]
        let mut last_less = first.clone();
        let mut less = 0;
        let mut i = first.clone();
        for _ in 1..len {
            rng.inc(&mut i);
            if precedes(pred, proj, rng.get(&i), rng.get(&first)) {
                rng.inc(&mut last_less);
                less += 1;
                rng.swap_at(&last_less, &i);
            }
        }
        rng.swap_at(&first, &last_less);
        let pivot = last_less;

        // (pivot, last_equal] == pivot < (last_equal, i]
        let mut last_equal = pivot.clone();
        let mut equal = 0;
        let mut i = pivot.clone();
        for _ in 0..len - less - 1 {
            rng.inc(&mut i);
            if !precedes(pred, proj, rng.get(&pivot), rng.get(&i)) {
                rng.inc(&mut last_equal);
                equal += 1;
                rng.swap_at(&last_equal, &i);
            }
        }

        let mut greater_first = last_equal;
        rng.inc(&mut greater_first);
        let greater = len - less - 1 - equal;

        if less < greater {
            quicksort(rng, first, less, pred, proj);
            first = greater_first;
            len = greater;
        } else {
            quicksort(rng, greater_first, greater, pred, proj);
            len = less;
        }
    }
}

/// Stable in-place sort.
///
/// Merge sort without a buffer: sorted halves are merged by splitting at a
/// binary-searched cut and rotating the middle blocks. Equivalent elements
/// keep their relative order. A sequence that is already sorted is left
/// untouched.
pub fn stable_sort<R, C, P>(rng: &mut R, pred: &C, proj: &P)
where
    R: Permutable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    if is_sorted(&*rng, pred, proj) {
        return;
    }
    let first = rng.begin();
    let len = count_from(&*rng, &first);
    merge_sort(rng, first, len, pred, proj);
}

fn merge_sort<R, C, P>(rng: &mut R, first: R::Cursor, len: usize, pred: &C, proj: &P)
where
    R: Swappable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    if len < 2 {
        return;
    }
    let half = len / 2;
    let middle = nth(&*rng, &first, half);
    merge_sort(rng, first.clone(), half, pred, proj);
    merge_sort(rng, middle.clone(), len - half, pred, proj);
    merge(rng, first, middle, half, len - half, pred, proj);
}

/// Merge the sorted runs `[first, middle)` of `len1` and `[middle, ..)` of `len2`.
fn merge<R, C, P>(
    rng: &mut R,
    first: R::Cursor,
    middle: R::Cursor,
    len1: usize,
    len2: usize,
    pred: &C,
    proj: &P,
) where
    R: Swappable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 + len2 == 2 {
        if precedes(pred, proj, rng.get(&middle), rng.get(&first)) {
            rng.swap_at(&first, &middle);
        }
        return;
    }

    let (cut1, len11, cut2, len22) = {
        let r: &R = &*rng;
        if len1 >= len2 {
            let len11 = len1 / 2;
            let cut1 = nth(r, &first, len11);
            let len22 = prefix_len(r, &middle, len2, |x| precedes(pred, proj, x, r.get(&cut1)));
            (cut1, len11, nth(r, &middle, len22), len22)
        } else {
            let len22 = len2 / 2;
            let cut2 = nth(r, &middle, len22);
            let len11 = prefix_len(r, &first, len1, |x| !precedes(pred, proj, r.get(&cut2), x));
            (nth(r, &first, len11), len11, cut2, len22)
        }
    };

    // A1 A2 B1 B2 -> A1 B1 A2 B2
    rotate(rng, cut1.clone(), len1 - len11, len22);
    let new_middle = nth(&*rng, &cut1, len22);
    merge(rng, first, cut1, len11, len22, pred, proj);
    merge(rng, new_middle, cut2, len1 - len11, len2 - len22, pred, proj);
}

/// Exchange the adjacent blocks of `left` and `right` elements starting at `first`.
fn rotate<R>(rng: &mut R, mut first: R::Cursor, mut left: usize, mut right: usize)
where
    R: Swappable + ?Sized,
{
    let mut mid = nth(&*rng, &first, left);
    while left > 0 && right > 0 {
        let mut a = first.clone();
        let mut b = mid.clone();
        for _ in 0..left.min(right) {
            rng.swap_at(&a, &b);
            rng.inc(&mut a);
            rng.inc(&mut b);
        }
        first = a;
        if left <= right {
            right -= left;
            mid = b;
        } else {
            left -= right;
        }
    }
}

/// Length of the prefix of the `len` elements at `first` that satisfy `holds`.
///
/// `holds` must be true on a prefix and false after it.
fn prefix_len<R, F>(rng: &R, first: &R::Cursor, mut len: usize, mut holds: F) -> usize
where
    R: Indirect + ?Sized,
    F: FnMut(&R::Value) -> bool,
{
    let mut first = first.clone();
    let mut count = 0;
    while len > 0 {
        let half = len / 2;
        let mid = nth(rng, &first, half);
        if holds(rng.get(&mid)) {
            first = mid;
            rng.inc(&mut first);
            count += half + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    count
}

/// The cursor `n` steps after `cur`.
fn nth<R: Sequence + ?Sized>(rng: &R, cur: &R::Cursor, n: usize) -> R::Cursor {
    let mut cur = cur.clone();
    for _ in 0..n {
        rng.inc(&mut cur);
    }
    cur
}
