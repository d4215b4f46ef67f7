//! Lazy element-wise mapping.

use core::fmt;

use crate::pipe::{impl_pipe_operator, Adaptor};
use crate::primitives::Absent;
use crate::traversal::{
    BidirectionalSequence, Iter, RandomAccessSequence, Readable, Sequence, SizedSequence,
};

/// `f` applied to every element on read. Keeps the source's traversal tier.
pub struct TransformView<R, F> {
    base: R,
    f: F,
}

impl<R, F> TransformView<R, F> {
    pub fn new(base: R, f: F) -> Self {
        crate::trace_op!(target: "tola_ranges::view", view = "transform", "constructed view");
        TransformView { base, f }
    }

    pub fn base(&self) -> &R {
        &self.base
    }
}

impl<R: fmt::Debug, F> fmt::Debug for TransformView<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformView").field("base", &self.base).finish_non_exhaustive()
    }
}

impl<R, F, O> Sequence for TransformView<R, F>
where
    R: Readable,
    F: Fn(R::Reference) -> O,
{
    type Value = O;
    type Cursor = R::Cursor;
    type Sentinel = R::Sentinel;
    type Tier = R::Tier;
    type Mutable = Absent;
    type SizeKnown = R::SizeKnown;
    type Bounded = R::Bounded;

    #[inline(always)]
    fn begin(&self) -> R::Cursor {
        self.base.begin()
    }
    #[inline(always)]
    fn end(&self) -> R::Sentinel {
        self.base.end()
    }
    #[inline(always)]
    fn inc(&self, cur: &mut R::Cursor) {
        self.base.inc(cur)
    }
}

impl<R, F, O> Readable for TransformView<R, F>
where
    R: Readable,
    F: Fn(R::Reference) -> O,
{
    type Reference = O;

    #[inline(always)]
    fn read(&self, cur: &R::Cursor) -> O {
        (self.f)(self.base.read(cur))
    }
}

impl<R, F, O> BidirectionalSequence for TransformView<R, F>
where
    R: Readable + BidirectionalSequence,
    F: Fn(R::Reference) -> O,
{
    #[inline(always)]
    fn dec(&self, cur: &mut R::Cursor) {
        self.base.dec(cur)
    }
}

impl<R, F, O> RandomAccessSequence for TransformView<R, F>
where
    R: Readable + RandomAccessSequence,
    F: Fn(R::Reference) -> O,
{
    #[inline(always)]
    fn advance_by(&self, cur: &mut R::Cursor, n: isize) {
        self.base.advance_by(cur, n)
    }
    #[inline(always)]
    fn distance(&self, from: &R::Cursor, to: &R::Cursor) -> isize {
        self.base.distance(from, to)
    }
}

impl<R, F, O> SizedSequence for TransformView<R, F>
where
    R: Readable + SizedSequence,
    F: Fn(R::Reference) -> O,
{
    #[inline(always)]
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<R, F, O> IntoIterator for TransformView<R, F>
where
    R: Readable,
    F: Fn(R::Reference) -> O,
{
    type Item = O;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

/// Curried `view::transform(f)`.
#[derive(Debug, Clone, Copy)]
pub struct TransformFn<F>(pub(crate) F);

impl<R, F, O> Adaptor<R> for TransformFn<F>
where
    R: Readable,
    F: Fn(R::Reference) -> O,
{
    type Output = TransformView<R, F>;

    #[inline(always)]
    fn adapt(self, rng: R) -> TransformView<R, F> {
        TransformView::new(rng, self.0)
    }
}

impl_pipe_operator! {
    [R, F,] TransformView<R, F>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{tier_of, TierKind};
    use crate::primitives::Bool;

    #[test]
    fn test_maps_on_read() {
        let v = vec![1, 2, 3];
        let view = TransformView::new(&v, |x: &i32| x * 10);
        assert_eq!(view.read(&1), 20);
        assert_eq!(view.size(), 3);
        assert_eq!(view.into_iter().collect::<Vec<_>>(), [10, 20, 30]);
    }

    #[test]
    fn test_descriptor_keeps_tier_drops_mutability() {
        type V<'a> = TransformView<&'a Vec<i32>, fn(&i32) -> i32>;
        assert_eq!(tier_of::<V<'static>>(), TierKind::RandomAccess);
        assert!(!<<V<'static> as Sequence>::Mutable as Bool>::VALUE);
    }

    #[test]
    fn test_random_access_forwarded() {
        let v = [5u8, 6, 7, 8];
        let view = TransformView::new(&v, |x: &u8| u32::from(*x));
        let mut cur = view.begin();
        view.advance_by(&mut cur, 3);
        assert_eq!(view.read(&cur), 8);
        view.dec(&mut cur);
        assert_eq!(view.read(&cur), 7);
    }
}
