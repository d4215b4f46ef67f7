//! Generated integer sequences.
//!
//! `Iota<I>` counts up from a start without end; `Iota<I, I>` stops before
//! a bound. Both are random access and read-only: there is nothing to
//! assign to, so neither is permutable.

use crate::capability::RandomAccessTier;
use crate::pipe::impl_pipe_operator;
use crate::primitives::{Absent, Present};
use crate::traversal::{
    BidirectionalSequence, Iter, RandomAccessSequence, Readable, Sentinel, Sequence,
    SizedSequence, Unreachable,
};

/// Integer types that can be stepped by an offset.
///
/// Stepping outside the type's range is a logic error, as with
/// `RangeFrom`: debug builds panic, release builds wrap. An unbounded
/// `iota(u8::MAX)` therefore has exactly one element before it overflows.
pub trait Step: Copy + Ord {
    /// `self + n`.
    fn offset(self, n: isize) -> Self;

    /// `to - from`, as a signed cursor distance.
    fn difference(from: Self, to: Self) -> isize;

    /// Number of values in `[from, to)`; `from <= to`.
    fn span(from: Self, to: Self) -> usize;
}

macro_rules! impl_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline(always)]
                fn offset(self, n: isize) -> Self {
                    let next = self as i128 + n as i128;
                    debug_assert!(
                        next >= <$t>::MIN as i128 && next <= <$t>::MAX as i128,
                        concat!("iota stepped outside the range of ", stringify!($t))
                    );
                    next as $t
                }
                #[inline(always)]
                fn difference(from: Self, to: Self) -> isize {
                    let d = to as i128 - from as i128;
                    debug_assert!(
                        d >= isize::MIN as i128 && d <= isize::MAX as i128,
                        "iota distance does not fit in isize"
                    );
                    d as isize
                }
                #[inline(always)]
                fn span(from: Self, to: Self) -> usize {
                    let d = to as i128 - from as i128;
                    debug_assert!(
                        d >= 0 && d <= usize::MAX as i128,
                        "iota span does not fit in usize"
                    );
                    d as usize
                }
            }
        )*
    };
}

impl_step!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iota<I, S = Unreachable> {
    start: I,
    bound: S,
}

impl<I: Step> Iota<I> {
    pub fn new(start: I) -> Self {
        Iota { start, bound: Unreachable }
    }
}

impl<I: Step> Iota<I, I> {
    /// `[start, bound)`; empty when `bound <= start`.
    pub fn bounded(start: I, bound: I) -> Self {
        Iota { start, bound: bound.max(start) }
    }
}

impl<I: Step> Sequence for Iota<I> {
    type Value = I;
    type Cursor = I;
    type Sentinel = Unreachable;
    type Tier = RandomAccessTier;
    type Mutable = Absent;
    type SizeKnown = Absent;
    type Bounded = Absent;

    #[inline(always)]
    fn begin(&self) -> I {
        self.start
    }
    #[inline(always)]
    fn end(&self) -> Unreachable {
        Unreachable
    }
    #[inline(always)]
    fn inc(&self, cur: &mut I) {
        *cur = cur.offset(1);
    }
}

impl<I> Sequence for Iota<I, I>
where
    I: Step + Sentinel<I>,
{
    type Value = I;
    type Cursor = I;
    type Sentinel = I;
    type Tier = RandomAccessTier;
    type Mutable = Absent;
    type SizeKnown = Present;
    type Bounded = Present;

    #[inline(always)]
    fn begin(&self) -> I {
        self.start
    }
    #[inline(always)]
    fn end(&self) -> I {
        self.bound
    }
    #[inline(always)]
    fn inc(&self, cur: &mut I) {
        *cur = cur.offset(1);
    }
}

impl<I, S> Readable for Iota<I, S>
where
    I: Step,
    Self: Sequence<Cursor = I>,
{
    type Reference = I;

    #[inline(always)]
    fn read(&self, cur: &I) -> I {
        *cur
    }
}

impl<I, S> BidirectionalSequence for Iota<I, S>
where
    I: Step,
    Self: Sequence<Cursor = I>,
{
    #[inline(always)]
    fn dec(&self, cur: &mut I) {
        *cur = cur.offset(-1);
    }
}

impl<I, S> RandomAccessSequence for Iota<I, S>
where
    I: Step,
    Self: Sequence<Cursor = I>,
{
    #[inline(always)]
    fn advance_by(&self, cur: &mut I, n: isize) {
        *cur = cur.offset(n);
    }
    #[inline(always)]
    fn distance(&self, from: &I, to: &I) -> isize {
        I::difference(*from, *to)
    }
}

impl<I> SizedSequence for Iota<I, I>
where
    I: Step + Sentinel<I>,
{
    #[inline(always)]
    fn size(&self) -> usize {
        I::span(self.start, self.bound)
    }
}

impl<I, S> IntoIterator for Iota<I, S>
where
    I: Step,
    Self: Sequence<Cursor = I>,
{
    type Item = I;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl_pipe_operator! {
    [I, S,] Iota<I, S>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{tier_of, TierKind};
    use crate::primitives::Bool;

    #[test]
    fn test_bounded_counts() {
        let got: Vec<i32> = Iota::bounded(-2, 3).into_iter().collect();
        assert_eq!(got, [-2, -1, 0, 1, 2]);
        assert_eq!(Iota::bounded(-2, 3).size(), 5);
    }

    #[test]
    fn test_inverted_bound_is_empty() {
        assert_eq!(Iota::bounded(5u8, 1).size(), 0);
        assert_eq!(Iota::bounded(5u8, 1).into_iter().count(), 0);
    }

    #[test]
    fn test_unbounded_descriptor() {
        type Inf = Iota<u64>;
        assert_eq!(tier_of::<Inf>(), TierKind::RandomAccess);
        assert!(!<<Inf as Sequence>::SizeKnown as Bool>::VALUE);
        assert!(!<<Inf as Sequence>::Mutable as Bool>::VALUE);
        assert_eq!(Iota::new(7u64).into_iter().nth(3), Some(10));
    }

    #[test]
    fn test_bounded_reaches_type_max() {
        let got: Vec<u8> = Iota::bounded(250u8, u8::MAX).into_iter().collect();
        assert_eq!(got, [250, 251, 252, 253, 254]);
        assert_eq!(Iota::bounded(i8::MIN, i8::MAX).size(), 255);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_size_of_wide_span() {
        assert_eq!(Iota::bounded(0u64, u64::MAX).size(), usize::MAX);
        assert_eq!(Iota::bounded(i64::MIN, i64::MAX).size(), usize::MAX);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "iota stepped outside the range of u8")]
    fn test_unbounded_overflow_panics() {
        let _ = Iota::new(u8::MAX).into_iter().take(2).count();
    }

    #[test]
    fn test_random_access() {
        let r = Iota::bounded(10usize, 20);
        let mut cur = r.begin();
        r.advance_by(&mut cur, 4);
        assert_eq!(r.read(&cur), 14);
        assert_eq!(r.distance(&cur, &r.end()), 6);
    }
}
