//! Named concepts over sequences.
//!
//! Each concept is a blanket-implemented trait whose bound is a requirement,
//! so misuse fails at the call site with a message naming the missing
//! category rather than an opaque "trait bound not satisfied".

use crate::capability::{IsBidirectional, IsBounded, IsForward, IsRandomAccess, IsSized};
use crate::concept::{Projection, Relation, Require};
use crate::traversal::{Sequence, Swappable};

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an iterable sequence",
    label = "must be a model of `InputIterable`",
    note = "implement `Sequence` (begin, end, inc) for the type or pass a reference to a container"
)]
pub trait InputIterable: Sequence {}

impl<R: Sequence + ?Sized> InputIterable for R {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` must be a model of `ForwardIterable`",
    label = "traversal tier is below forward",
    note = "single-pass sequences (such as `MoveView`) can be walked once and cannot be rearranged in place"
)]
pub trait ForwardIterable: InputIterable {}

impl<R> ForwardIterable for R where R: Sequence + Require<IsForward> + ?Sized {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` must be a model of `BidirectionalIterable`",
    label = "traversal tier is below bidirectional"
)]
pub trait BidirectionalIterable: ForwardIterable {}

impl<R> BidirectionalIterable for R where
    R: Sequence + Require<IsForward> + Require<IsBidirectional> + ?Sized
{
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` must be a model of `RandomAccessIterable`",
    label = "traversal tier is below random access"
)]
pub trait RandomAccessIterable: BidirectionalIterable {}

impl<R> RandomAccessIterable for R where
    R: Sequence
        + Require<IsForward>
        + Require<IsBidirectional>
        + Require<IsRandomAccess>
        + ?Sized
{
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` does not know its size",
    label = "must be a model of `SizedIterable`"
)]
pub trait SizedIterable: InputIterable {}

impl<R> SizedIterable for R where R: Sequence + Require<IsSized> + ?Sized {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not bounded",
    label = "must be a model of `BoundedIterable`",
    note = "its end is a sentinel, not a position"
)]
pub trait BoundedIterable: InputIterable {}

impl<R> BoundedIterable for R where R: Sequence + Require<IsBounded> + ?Sized {}

#[diagnostic::on_unimplemented(
    message = "the elements of `{Self}` cannot be permuted",
    label = "values must be movable and the cursor must be mutable",
    note = "permuting needs forward traversal and `Swappable` positions; read-only references and views are not permutable"
)]
pub trait Permutable: ForwardIterable + Swappable {}

impl<R> Permutable for R where R: ForwardIterable + Swappable + ?Sized {}

/// Permutable under relation `C` applied to projection `P` of the values.
///
/// Only a convenience bound: generic code still has to restate the
/// projection and relation bounds to use them.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be sorted with comparator `{C}` and projection `{P}`",
    label = "must be a model of `Sortable`"
)]
pub trait Sortable<C, P>: Permutable {}

impl<R, C, P> Sortable<C, P> for R
where
    R: Permutable + ?Sized,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
}

/// A value with a moved-from state.
///
/// Moving out of a slot leaves `Default::default()` behind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no moved-from state",
    label = "values moved out of a sequence must leave something behind",
    note = "implement `Default` for `{Self}`"
)]
pub trait MovedFrom: Sized {
    fn vacate(&mut self) -> Self;
}

impl<T: Default> MovedFrom for T {
    #[inline]
    fn vacate(&mut self) -> Self {
        core::mem::take(self)
    }
}
