//! The first `n` elements of a sequence.
//!
//! Cursors carry their own index, so taking from an infinite sequence
//! terminates. The end is a count, not a position: the view is never
//! bounded, and its tier is capped at forward.

use crate::capability::{ForwardTier, TierMin};
use crate::pipe::{impl_pipe_operator, Adaptor};
use crate::primitives::Absent;
use crate::traversal::{
    Indirect, Iter, Readable, Sentinel, Sequence, SizedSequence, Swappable, Writable,
};

#[derive(Debug, Clone)]
pub struct TakeView<R> {
    base: R,
    count: usize,
}

impl<R> TakeView<R> {
    pub fn new(base: R, count: usize) -> Self {
        crate::trace_op!(target: "tola_ranges::view", view = "take", count, "constructed view");
        TakeView { base, count }
    }

    pub fn base(&self) -> &R {
        &self.base
    }
}

/// Source cursor plus the number of steps taken so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeCursor<C> {
    pub inner: C,
    pub index: usize,
}

/// Ends at the source's end or after `count` steps, whichever comes first.
#[derive(Debug, Clone)]
pub struct TakeSentinel<S> {
    inner: S,
    count: usize,
}

impl<C, S: Sentinel<C>> Sentinel<TakeCursor<C>> for TakeSentinel<S> {
    #[inline(always)]
    fn is_end(&self, cur: &TakeCursor<C>) -> bool {
        cur.index >= self.count || self.inner.is_end(&cur.inner)
    }
}

impl<R> Sequence for TakeView<R>
where
    R: Sequence,
    R::Tier: TierMin<ForwardTier>,
{
    type Value = R::Value;
    type Cursor = TakeCursor<R::Cursor>;
    type Sentinel = TakeSentinel<R::Sentinel>;
    type Tier = <R::Tier as TierMin<ForwardTier>>::Out;
    type Mutable = R::Mutable;
    type SizeKnown = R::SizeKnown;
    type Bounded = Absent;

    #[inline(always)]
    fn begin(&self) -> Self::Cursor {
        TakeCursor { inner: self.base.begin(), index: 0 }
    }
    #[inline(always)]
    fn end(&self) -> Self::Sentinel {
        TakeSentinel { inner: self.base.end(), count: self.count }
    }
    #[inline(always)]
    fn inc(&self, cur: &mut Self::Cursor) {
        self.base.inc(&mut cur.inner);
        cur.index += 1;
    }
}

impl<R> Readable for TakeView<R>
where
    R: Readable,
    R::Tier: TierMin<ForwardTier>,
{
    type Reference = R::Reference;

    #[inline(always)]
    fn read(&self, cur: &Self::Cursor) -> R::Reference {
        self.base.read(&cur.inner)
    }
}

impl<R> Indirect for TakeView<R>
where
    R: Indirect,
    R::Tier: TierMin<ForwardTier>,
{
    #[inline(always)]
    fn get(&self, cur: &Self::Cursor) -> &R::Value {
        self.base.get(&cur.inner)
    }
}

impl<R> Writable for TakeView<R>
where
    R: Writable,
    R::Tier: TierMin<ForwardTier>,
{
    #[inline(always)]
    fn get_mut(&mut self, cur: &Self::Cursor) -> &mut R::Value {
        self.base.get_mut(&cur.inner)
    }
}

impl<R> Swappable for TakeView<R>
where
    R: Swappable,
    R::Tier: TierMin<ForwardTier>,
{
    #[inline(always)]
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.base.swap_at(&a.inner, &b.inner)
    }
}

impl<R> SizedSequence for TakeView<R>
where
    R: SizedSequence,
    R::Tier: TierMin<ForwardTier>,
{
    #[inline(always)]
    fn size(&self) -> usize {
        self.base.size().min(self.count)
    }
}

impl<R> IntoIterator for TakeView<R>
where
    R: Readable,
    R::Tier: TierMin<ForwardTier>,
{
    type Item = R::Reference;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

/// Curried `view::take(n)`.
#[derive(Debug, Clone, Copy)]
pub struct TakeFn(pub(crate) usize);

impl<R> Adaptor<R> for TakeFn
where
    R: Sequence,
    R::Tier: TierMin<ForwardTier>,
{
    type Output = TakeView<R>;

    #[inline(always)]
    fn adapt(self, rng: R) -> TakeView<R> {
        TakeView::new(rng, self.0)
    }
}

impl_pipe_operator! {
    [R,] TakeView<R>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{tier_of, TierKind};
    use crate::primitives::Bool;

    #[test]
    fn test_take_shorter_than_source() {
        let v = vec![1, 2, 3, 4];
        let got: Vec<i32> = TakeView::new(&v, 2).into_iter().copied().collect();
        assert_eq!(got, [1, 2]);
        assert_eq!(TakeView::new(&v, 2).size(), 2);
    }

    #[test]
    fn test_take_longer_than_source() {
        let v = vec![1, 2];
        assert_eq!(TakeView::new(&v, 10).into_iter().count(), 2);
        assert_eq!(TakeView::new(&v, 10).size(), 2);
    }

    #[test]
    fn test_descriptor() {
        assert_eq!(tier_of::<TakeView<Vec<u8>>>(), TierKind::Forward);
        assert!(<<TakeView<&mut Vec<u8>> as Sequence>::Mutable as Bool>::VALUE);
        assert!(!<<TakeView<Vec<u8>> as Sequence>::Bounded as Bool>::VALUE);
    }

    #[test]
    fn test_writes_through() {
        let mut v = vec![1, 2, 3];
        let mut view = TakeView::new(&mut v, 2);
        let cur = view.begin();
        *view.get_mut(&cur) = 9;
        assert_eq!(v, [9, 2, 3]);
    }
}
