//! Reordering, deduplication and in-place mapping.

use crate::concept::{Permutable, Projection, Relation};
use crate::traversal::{BidirectionalSequence, Erasable, Sentinel, Writable};

/// Reverse in place.
pub fn reverse<R>(rng: &mut R)
where
    R: BidirectionalSequence + Permutable + ?Sized,
{
    let end = rng.end();
    let mut lo = rng.begin();
    let mut hi = lo.clone();
    let mut len = 0;
    while !end.is_end(&hi) {
        rng.inc(&mut hi);
        len += 1;
    }
    for _ in 0..len / 2 {
        rng.dec(&mut hi);
        rng.swap_at(&lo, &hi);
        rng.inc(&mut lo);
    }
}

/// Drop every element equivalent under `rel` to the one before it.
///
/// Survivors are swapped to the front in order, then the tail is erased.
/// Returns the number of elements kept.
pub fn unique<R, C, P>(rng: &mut R, rel: &C, proj: &P) -> usize
where
    R: Permutable + Erasable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    let end = rng.end();
    let mut kept = rng.begin();
    if end.is_end(&kept) {
        return 0;
    }
    let mut count = 1;
    let mut i = kept.clone();
    rng.inc(&mut i);
    while !end.is_end(&i) {
        let same = proj.with(rng.get(&kept), |a| proj.with(rng.get(&i), |b| rel.test(a, b)));
        if !same {
            rng.inc(&mut kept);
            rng.swap_at(&kept, &i);
            count += 1;
        }
        rng.inc(&mut i);
    }
    rng.inc(&mut kept);
    rng.erase_from(&kept);
    count
}

/// Apply `f` to every element in place.
pub fn for_each_mut<R, F>(rng: &mut R, mut f: F)
where
    R: Writable + ?Sized,
    F: FnMut(&mut R::Value),
{
    let end = rng.end();
    let mut cur = rng.begin();
    while !end.is_end(&cur) {
        f(rng.get_mut(&cur));
        rng.inc(&mut cur);
    }
}
