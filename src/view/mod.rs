//! Lazy views.
//!
//! A view wraps a sequence and adapts its elements on access. Nothing is
//! computed at construction; each view reports its own capability
//! descriptor, derived from the source's:
//!
//! | View | Tier | Mutable | Sized | Bounded |
//! |------|------|---------|-------|---------|
//! | [`AllView`] | source | no | source | source |
//! | [`MoveView`] | input | no | source | source |
//! | [`TransformView`] | source | no | source | source |
//! | [`TakeView`] | min(source, forward) | source | source | no |
//! | [`Iota`] | random access | no | with a bound | with a bound |
//!
//! Curried constructors here return [`Pipeable`] adaptors:
//!
//! ```
//! use tola_ranges::view;
//!
//! let v = vec![1, 2, 3, 4];
//! let firsts: Vec<i32> = (&v | view::take(3) | view::transform(|x: &i32| x * x))
//!     .into_iter()
//!     .collect();
//! assert_eq!(firsts, [1, 4, 9]);
//! ```

pub mod all;
pub mod iota;
pub mod moved;
pub mod take;
pub mod transform;

pub use all::{AllFn, AllView};
pub use iota::{Iota, Step};
pub use moved::{MoveFn, MoveIter, MoveView, Moved};
pub use take::{TakeCursor, TakeFn, TakeSentinel, TakeView};
pub use transform::{TransformFn, TransformView};

use crate::pipe::Pipeable;

/// Read-only view of a whole sequence.
///
/// Read-only views borrow their source with `&`. A `&mut` binding is
/// reborrowed with `&*`:
///
/// ```
/// use tola_ranges::view;
///
/// let mut v = vec![1, 2, 3];
/// let m = &mut v;
/// let doubled: Vec<i32> = (&*m | view::transform(|x: &i32| x * 2)).into_iter().collect();
/// assert_eq!(doubled, [2, 4, 6]);
/// assert_eq!((&*m | view::all()).into_iter().count(), 3);
/// ```
///
/// A `&mut` source is not readable by value:
///
/// ```compile_fail
/// use tola_ranges::view;
///
/// let mut v = vec![1, 2, 3];
/// let _ = &mut v | view::all();
/// ```
pub const fn all() -> Pipeable<AllFn> {
    Pipeable::new(AllFn)
}

/// Move elements out of a mutable sequence.
pub const fn moved() -> Pipeable<MoveFn> {
    Pipeable::new(MoveFn)
}

/// Map every element through `f`.
///
/// `f` receives the source's `Readable::Reference`, so the source is an
/// owned read-only sequence (such as `Iota`) or a `&` borrow; see [`all`].
///
/// ```compile_fail
/// use tola_ranges::view;
///
/// let mut v = vec![1, 2, 3];
/// let _ = &mut v | view::transform(|x: &i32| x + 1);
/// ```
pub const fn transform<F>(f: F) -> Pipeable<TransformFn<F>> {
    Pipeable::new(TransformFn(f))
}

/// At most `n` elements.
pub const fn take(n: usize) -> Pipeable<TakeFn> {
    Pipeable::new(TakeFn(n))
}

/// `start, start + 1, ...` without end.
pub fn iota<I: Step>(start: I) -> Iota<I> {
    Iota::new(start)
}

/// `start, start + 1, ..., end - 1`.
pub fn iota_to<I: Step>(start: I, end: I) -> Iota<I, I> {
    Iota::bounded(start, end)
}
