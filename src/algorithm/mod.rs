//! Eager algorithms over cursors.
//!
//! These are the bodies behind [`crate::action`]; they take the sequence by
//! `&mut` (or `&`) and the callables by reference, and carry no dispatch of
//! their own beyond their bounds.

mod rearrange;
mod search;
mod sort;

pub use rearrange::{for_each_mut, reverse, unique};
pub use search::{equal_range, lower_bound, upper_bound};
pub use sort::{is_sorted, sort, stable_sort};

use crate::concept::{Projection, Relation};
use crate::dispatch::{Advance, Measure};
use crate::traversal::{Sentinel, Sequence};

/// Number of elements: constant time when sized, a walk otherwise.
#[inline]
pub fn distance<R: Measure + ?Sized>(rng: &R) -> usize {
    rng.measure()
}

/// Move `cur` forward `n` positions: one jump on random access, `n` steps otherwise.
#[inline]
pub fn advance<R: Advance + ?Sized>(rng: &R, cur: &mut R::Cursor, n: usize) {
    rng.advance(cur, n)
}

/// `pred(proj(a), proj(b))`.
#[inline(always)]
pub(crate) fn precedes<V, C, P>(pred: &C, proj: &P, a: &V, b: &V) -> bool
where
    V: ?Sized,
    P: Projection<V>,
    C: Relation<P::Output>,
{
    proj.with(a, |ka| proj.with(b, |kb| pred.test(ka, kb)))
}

/// Positions from `cur` to the end.
pub(crate) fn count_from<R: Sequence + ?Sized>(rng: &R, cur: &R::Cursor) -> usize {
    let end = rng.end();
    let mut cur = cur.clone();
    let mut n = 0;
    while !end.is_end(&cur) {
        rng.inc(&mut cur);
        n += 1;
    }
    n
}
