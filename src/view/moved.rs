//! The move view: elements are handed out by value, vacating the source.
//!
//! ```
//! use tola_ranges::view;
//!
//! let mut vs = vec![String::from("'allo"), String::from("'allo"), String::from("???")];
//! let copied: Vec<String> = (&mut vs | view::moved()).into_iter().collect();
//!
//! assert_eq!(copied, ["'allo", "'allo", "???"]);
//! assert_eq!(vs, ["", "", ""]);
//! ```
//!
//! Rust moves are destructive, so the moved-from state is whatever
//! [`MovedFrom::vacate`] leaves behind (`Default::default()`).
//!
//! Reading a position twice after moving from it would observe the vacated
//! value, so the view reports input-level traversal whatever the source
//! supports. Sizedness and boundedness are those of the source.

use core::fmt;
use core::ops::Deref;

use crate::capability::{InputTier, TierMin};
use crate::concept::{InputIterable, MovedFrom};
use crate::pipe::{impl_pipe_operator, Adaptor};
use crate::primitives::Absent;
use crate::traversal::{Indirect, Sentinel, Sequence, SizedSequence, Writable};

/// Lazy view moving each element out of a mutable source.
pub struct MoveView<R> {
    base: R,
}

impl<R> MoveView<R>
where
    R: InputIterable + Writable,
    R::Value: MovedFrom,
{
    pub fn new(base: R) -> Self {
        crate::trace_op!(
            target: "tola_ranges::view",
            view = "moved",
            source_tier = %crate::capability::tier_of::<R>(),
            "constructed view"
        );
        MoveView { base }
    }

    /// Exclusive read: a handle to the element under `cur`.
    ///
    /// The handle derefs to the element; [`Moved::take`] moves it out.
    pub fn read(&mut self, cur: &R::Cursor) -> Moved<'_, R::Value> {
        Moved { slot: self.base.get_mut(cur) }
    }
}

impl<R> MoveView<R> {
    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn into_base(self) -> R {
        self.base
    }
}

impl<R: fmt::Debug> fmt::Debug for MoveView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveView").field("base", &self.base).finish()
    }
}

impl<R> Sequence for MoveView<R>
where
    R: Writable,
    R::Tier: TierMin<InputTier>,
{
    type Value = R::Value;
    type Cursor = R::Cursor;
    type Sentinel = R::Sentinel;
    type Tier = <R::Tier as TierMin<InputTier>>::Out;
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

/// Peek without moving.
impl<R> Indirect for MoveView<R>
where
    R: Writable,
    R::Tier: TierMin<InputTier>,
{
    #[inline(always)]
    fn get(&self, cur: &R::Cursor) -> &R::Value {
        self.base.get(cur)
    }
}

impl<R> SizedSequence for MoveView<R>
where
    R: Writable + SizedSequence,
    R::Tier: TierMin<InputTier>,
{
    #[inline(always)]
    fn size(&self) -> usize {
        self.base.size()
    }
}

/// Handle to one element of a [`MoveView`], which can be moved out.
pub struct Moved<'a, T: MovedFrom> {
    slot: &'a mut T,
}

impl<T: MovedFrom> Moved<'_, T> {
    /// Move the element out, leaving its moved-from state behind.
    #[inline]
    pub fn take(self) -> T {
        self.slot.vacate()
    }
}

impl<T: MovedFrom> Deref for Moved<'_, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.slot
    }
}

impl<T: MovedFrom + fmt::Debug> fmt::Debug for Moved<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Moved").field(&*self.slot).finish()
    }
}

/// Owning iteration over a [`MoveView`].
pub struct MoveIter<R: Sequence> {
    base: R,
    cur: R::Cursor,
    end: R::Sentinel,
}

impl<R> Iterator for MoveIter<R>
where
    R: Writable,
    R::Value: MovedFrom,
{
    type Item = R::Value;

    #[inline]
    fn next(&mut self) -> Option<R::Value> {
        if self.end.is_end(&self.cur) {
            return None;
        }
        let value = self.base.get_mut(&self.cur).vacate();
        self.base.inc(&mut self.cur);
        Some(value)
    }
}

impl<R> IntoIterator for MoveView<R>
where
    R: Writable,
    R::Value: MovedFrom,
{
    type Item = R::Value;
    type IntoIter = MoveIter<R>;

    fn into_iter(self) -> MoveIter<R> {
        let cur = self.base.begin();
        let end = self.base.end();
        MoveIter { base: self.base, cur, end }
    }
}

/// Curried `view::moved`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveFn;

impl<R> Adaptor<R> for MoveFn
where
    R: InputIterable + Writable,
    R::Value: MovedFrom,
{
    type Output = MoveView<R>;

    #[inline(always)]
    fn adapt(self, rng: R) -> MoveView<R> {
        MoveView::new(rng)
    }
}

impl_pipe_operator! {
    [R,] MoveView<R>,
}

crate::define_probe! {
    /// Requirements of `view::moved`, in diagnostic order.
    pub probe MoveProbe(R) for "view::moved" {
        input_iterable(
            Traversal,
            "The object on which view::moved operates must be a model of the InputIterable concept."
        ) where R: InputIterable;
        writable(
            Mutability,
            "The range passed to view::moved must be mutable; pass it by `&mut` or by value."
        ) where R: Writable;
        moved_from(
            Mutability,
            "The values of the range passed to view::moved must have a moved-from state; implement `Default` for them."
        ) where R: Sequence, <R as Sequence>::Value: MovedFrom;
    }
}

/// Diagnose `view::moved` at a call site: `diagnose_move!(rng)`.
///
/// ```
/// use tola_ranges::capability::Category;
/// use tola_ranges::diagnose_move;
///
/// let v = vec![String::new()];
/// let shared = &v;
/// let d = diagnose_move!(shared);
/// assert_eq!(d.first_failure().map(|f| f.category), Some(Category::Mutability));
/// ```
#[macro_export]
macro_rules! diagnose_move {
    ($rng:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::view::moved::MoveProbeFallback as _;
        $crate::diagnose!(
            $crate::view::moved::MoveProbe::of(&$rng) =>
                input_iterable, writable, moved_from
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{tier_of, TierKind};
    use crate::dispatch::DispatchPath;

    #[test]
    fn test_tier_is_capped() {
        assert_eq!(tier_of::<MoveView<&mut Vec<String>>>(), TierKind::Input);
        assert_eq!(tier_of::<MoveView<Vec<i32>>>(), TierKind::Input);
    }

    #[test]
    fn test_read_peeks_then_takes() {
        let mut v = vec![String::from("a"), String::from("b")];
        let mut view = MoveView::new(&mut v);
        let first = view.read(&0);
        assert_eq!(first.as_str(), "a");
        assert_eq!(first.take(), "a");
        assert_eq!(view.read(&0).as_str(), "");
        assert_eq!(v, ["", "b"]);
    }

    #[test]
    fn test_size_forwarded() {
        let mut v = vec![1, 2, 3];
        let view = MoveView::new(&mut v);
        assert_eq!(view.size(), 3);
    }

    #[test]
    fn test_probe_on_owned_vec() {
        let v = vec![0u8];
        let d = diagnose_move!(v);
        assert_eq!(d.path(), DispatchPath::Valid);
        assert!(d.into_result().is_ok());
    }
}
