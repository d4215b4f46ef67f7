//! Read-only view of a whole sequence.

use crate::pipe::{impl_pipe_operator, Adaptor};
use crate::primitives::Absent;
use crate::traversal::{
    BidirectionalSequence, Indirect, Iter, RandomAccessSequence, Readable, Sequence,
    SizedSequence,
};

#[derive(Debug, Clone, Copy)]
pub struct AllView<R> {
    base: R,
}

impl<R: Readable> AllView<R> {
    pub fn new(base: R) -> Self {
        crate::trace_op!(target: "tola_ranges::view", view = "all", "constructed view");
        AllView { base }
    }
}

impl<R> AllView<R> {
    pub fn into_base(self) -> R {
        self.base
    }
}

impl<R: Readable> Sequence for AllView<R> {
    type Value = R::Value;
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

impl<R: Readable> Readable for AllView<R> {
    type Reference = R::Reference;

    #[inline(always)]
    fn read(&self, cur: &R::Cursor) -> R::Reference {
        self.base.read(cur)
    }
}

impl<R: Readable + Indirect> Indirect for AllView<R> {
    #[inline(always)]
    fn get(&self, cur: &R::Cursor) -> &R::Value {
        self.base.get(cur)
    }
}

impl<R: Readable + BidirectionalSequence> BidirectionalSequence for AllView<R> {
    #[inline(always)]
    fn dec(&self, cur: &mut R::Cursor) {
        self.base.dec(cur)
    }
}

impl<R: Readable + RandomAccessSequence> RandomAccessSequence for AllView<R> {
    #[inline(always)]
    fn advance_by(&self, cur: &mut R::Cursor, n: isize) {
        self.base.advance_by(cur, n)
    }
    #[inline(always)]
    fn distance(&self, from: &R::Cursor, to: &R::Cursor) -> isize {
        self.base.distance(from, to)
    }
}

impl<R: Readable + SizedSequence> SizedSequence for AllView<R> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<R: Readable> IntoIterator for AllView<R> {
    type Item = R::Reference;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

/// Curried `view::all()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllFn;

impl<R: Readable> Adaptor<R> for AllFn {
    type Output = AllView<R>;

    #[inline(always)]
    fn adapt(self, rng: R) -> AllView<R> {
        AllView::new(rng)
    }
}

impl_pipe_operator! {
    [R,] AllView<R>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{tier_of, TierKind};

    #[test]
    fn test_forwards_reads() {
        let v = vec!['a', 'b'];
        let view = AllView::new(&v);
        assert_eq!(tier_of::<AllView<&Vec<char>>>(), TierKind::RandomAccess);
        assert_eq!(view.size(), 2);
        assert_eq!(view.into_iter().collect::<String>(), "ab");
    }
}
