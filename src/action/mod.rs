//! Eager actions.
//!
//! An action consumes a sequence, mutates it in place and hands it back:
//! owned containers are moved in and out, `&mut` borrows are forwarded.
//! Nothing is copied.
//!
//! ```
//! use tola_ranges::action;
//!
//! let mut v = vec![5, 1, 4, 1, 3];
//! let _ = &mut v | (action::sort() | action::unique() | action::reverse());
//! assert_eq!(v, [5, 4, 3, 1]);
//! ```

pub mod rearrange;
pub mod sort;

pub use rearrange::{reverse, transform, unique, unique_by, Reverse, Transform, Unique};
pub use sort::{
    sort, sort_by, sort_by_key, stable_sort, stable_sort_by, stable_sort_by_key, Sort, SortProbe,
    StableSort,
};

use crate::pipe::Adaptor;

/// An adaptor whose output is its input.
pub trait Action<R>: Adaptor<R, Output = R> {}

impl<A, R> Action<R> for A where A: Adaptor<R, Output = R> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<R, A: Action<R>>(a: A, rng: R) -> R {
        a.adapt(rng)
    }

    #[test]
    fn test_actions_are_actions() {
        assert_eq!(run(sort(), vec![2, 1]), [1, 2]);
        assert_eq!(run(sort() | reverse(), vec![1, 3, 2]), [3, 2, 1]);
    }
}
