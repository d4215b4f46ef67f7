//! Cursor / sentinel traversal.
//!
//! A [`Sequence`] hands out *cursors* (positions) and is asked to move and
//! read them, so a cursor never borrows the sequence it came from. The end
//! of the sequence is a [`Sentinel`], which may be a different type than the
//! cursor (an index bound, a count, or [`Unreachable`] for infinite ones).
//!
//! Operations are layered by what they need:
//!
//! | Trait | Adds |
//! |-------|------|
//! | [`Sequence`] | `begin`, `end`, `inc` + capability descriptor |
//! | [`Readable`] | read a cursor by value (`Reference` may be `&T`) |
//! | [`Indirect`] | borrow the element under a cursor |
//! | [`Writable`] | mutably borrow the element under a cursor |
//! | [`Swappable`] | exchange two elements |
//! | [`BidirectionalSequence`] | `dec` |
//! | [`RandomAccessSequence`] | `advance_by`, `distance` |
//! | [`SizedSequence`] | `size` in constant time |
//! | [`Erasable`] | drop everything from a cursor on |

mod iter;
mod std_impls;

pub use iter::{iter, Iter, Subrange};

use crate::capability::AnyTier;
use crate::primitives::{Bool, Present};

/// End-of-sequence marker for cursors of type `C`.
pub trait Sentinel<C> {
    fn is_end(&self, cur: &C) -> bool;
}

/// Sentinel of an infinite sequence: never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unreachable;

impl<C> Sentinel<C> for Unreachable {
    #[inline(always)]
    fn is_end(&self, _cur: &C) -> bool {
        false
    }
}

macro_rules! impl_integer_sentinel {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sentinel<$t> for $t {
                #[inline(always)]
                fn is_end(&self, cur: &$t) -> bool {
                    cur >= self
                }
            }
        )*
    };
}

impl_integer_sentinel!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A traversable sequence and its capability descriptor.
///
/// The descriptor types (`Tier`, `Mutable`, `SizeKnown`, `Bounded`) are what
/// capability queries read; the operation traits below are tied to them so a
/// sequence cannot offer an operation its descriptor denies.
pub trait Sequence {
    type Value;
    type Cursor: Clone;
    type Sentinel: Sentinel<Self::Cursor>;

    type Tier: AnyTier;
    type Mutable: Bool;
    type SizeKnown: Bool;
    type Bounded: Bool;

    fn begin(&self) -> Self::Cursor;
    fn end(&self) -> Self::Sentinel;
    fn inc(&self, cur: &mut Self::Cursor);
}

/// Read a cursor by value.
///
/// Implemented for `&S` but not for `&mut S`: a value read through
/// `&self` cannot borrow from the `&mut` referent past the call. Read-only
/// views therefore take shared sources.
pub trait Readable: Sequence {
    type Reference;

    fn read(&self, cur: &Self::Cursor) -> Self::Reference;
}

/// Borrow the element under a cursor.
pub trait Indirect: Sequence {
    fn get(&self, cur: &Self::Cursor) -> &Self::Value;
}

/// Assign through a cursor.
#[diagnostic::on_unimplemented(
    message = "the cursor of `{Self}` is not mutable",
    label = "elements cannot be assigned through this sequence",
    note = "shared references and lazy views are read-only; pass `&mut` to the container"
)]
pub trait Writable: Indirect + Sequence<Mutable = Present> {
    fn get_mut(&mut self, cur: &Self::Cursor) -> &mut Self::Value;
}

/// Exchange the elements under two cursors.
#[diagnostic::on_unimplemented(
    message = "the elements of `{Self}` cannot be exchanged in place",
    label = "values must be movable and the cursor must be mutable"
)]
pub trait Swappable: Writable {
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor);
}

pub trait BidirectionalSequence: Sequence {
    fn dec(&self, cur: &mut Self::Cursor);
}

pub trait RandomAccessSequence: BidirectionalSequence {
    fn advance_by(&self, cur: &mut Self::Cursor, n: isize);
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize;
}

/// Constant-time size.
pub trait SizedSequence: Sequence<SizeKnown = Present> {
    fn size(&self) -> usize;
}

/// Truncate at a cursor.
pub trait Erasable: Sequence {
    fn erase_from(&mut self, cur: &Self::Cursor);
}
