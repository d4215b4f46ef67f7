//! Binary search over sorted sequences.
//!
//! Works on any forward sequence with any sentinel. The midpoint is found
//! through [`Advance`], which jumps in constant time on random-access
//! sequences and steps otherwise.

use crate::concept::{Projection, Relation};
use crate::dispatch::{Advance, Measure};
use crate::traversal::{Indirect, Subrange};

/// First position in `[begin, end)` for which `before` is false, and its index.
fn partition_point<R, F>(rng: &R, mut before: F) -> (R::Cursor, usize)
where
    R: Indirect + Measure + Advance + ?Sized,
    F: FnMut(&R::Value) -> bool,
{
    let mut first = rng.begin();
    let mut index = 0;
    let mut len = rng.measure();
    while len > 0 {
        let half = len / 2;
        let mut mid = first.clone();
        rng.advance(&mut mid, half);
        if before(rng.get(&mid)) {
            first = mid;
            rng.inc(&mut first);
            index += half + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    (first, index)
}

/// First position whose projection is not ordered before `value`.
pub fn lower_bound<R, V, C, P>(rng: &R, value: &V, pred: &C, proj: &P) -> R::Cursor
where
    R: Indirect + Measure + Advance + ?Sized,
    V: ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output, V>,
{
    partition_point(rng, |x| proj.with(x, |k| pred.test(k, value))).0
}

/// First position whose projection is ordered after `value`.
pub fn upper_bound<R, V, C, P>(rng: &R, value: &V, pred: &C, proj: &P) -> R::Cursor
where
    R: Indirect + Measure + Advance + ?Sized,
    V: ?Sized,
    P: Projection<R::Value>,
    C: Relation<V, P::Output>,
{
    partition_point(rng, |x| proj.with(x, |k| !pred.test(value, k))).0
}

/// The positions equivalent to `value`, as `[lower_bound, upper_bound)`.
pub fn equal_range<R, V, C, P>(rng: &R, value: &V, pred: &C, proj: &P) -> Subrange<R::Cursor>
where
    R: Indirect + Measure + Advance + ?Sized,
    V: ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output, V> + Relation<V, P::Output>,
{
    let (begin, lo) = partition_point(rng, |x| {
        proj.with(x, |k| Relation::<P::Output, V>::test(pred, k, value))
    });
    let (end, hi) = partition_point(rng, |x| {
        proj.with(x, |k| !Relation::<V, P::Output>::test(pred, value, k))
    });
    Subrange { begin, end, len: hi - lo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::{Identity, Less};

    #[test]
    fn test_bounds_on_vec() {
        let v = vec![1, 2, 2, 2, 5, 8];
        assert_eq!(lower_bound(&v, &2, &Less, &Identity), 1);
        assert_eq!(upper_bound(&v, &2, &Less, &Identity), 4);
        assert_eq!(lower_bound(&v, &9, &Less, &Identity), 6);
        assert_eq!(upper_bound(&v, &0, &Less, &Identity), 0);
    }

    #[test]
    fn test_equal_range_absent_value() {
        let v = [1, 3, 5];
        let r = equal_range(&v, &4, &Less, &Identity);
        assert!(r.is_empty());
        assert_eq!((r.begin, r.end), (2, 2));
    }

    #[test]
    fn test_equal_range_with_projection() {
        let v = vec![(1, 'a'), (2, 'b'), (2, 'c'), (3, 'd')];
        let r = equal_range(&v, &2, &Less, &|p: &(i32, char)| p.0);
        assert_eq!(r, Subrange { begin: 1, end: 3, len: 2 });
    }
}
