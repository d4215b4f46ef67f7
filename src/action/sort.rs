//! `action::sort` and `action::stable_sort`.
//!
//! ```
//! use tola_ranges::action;
//! use tola_ranges::concept::Greater;
//!
//! let v = vec![3, 1, 2] | action::sort();
//! assert_eq!(v, [1, 2, 3]);
//!
//! let mut w = vec!["bb", "a", "ccc"];
//! let _ = &mut w | action::sort_by_key(Greater, |s: &&str| s.len());
//! assert_eq!(w, ["ccc", "bb", "a"]);
//! ```
//!
//! Every requirement is checked before anything runs. A single-pass view
//! is rejected for its traversal tier:
//!
//! ```compile_fail
//! use tola_ranges::{action, view};
//!
//! let mut v = vec![String::from("b"), String::from("a")];
//! let _ = &mut v | view::moved() | action::sort();
//! ```
//!
//! a generated sequence for its mutability:
//!
//! ```compile_fail
//! use tola_ranges::{action, view};
//!
//! let _ = view::iota_to(0, 10) | action::sort();
//! ```
//!
//! a shared borrow likewise:
//!
//! ```compile_fail
//! use tola_ranges::action;
//!
//! let v = vec![3, 1, 2];
//! let _ = &v | action::sort();
//! ```
//!
//! and a comparator over the wrong type for its relation:
//!
//! ```compile_fail
//! use tola_ranges::action;
//!
//! let mut v = vec![3, 1, 2];
//! let _ = &mut v | action::sort_by(|a: &String, b: &String| a < b);
//! ```

use crate::algorithm;
use crate::concept::{
    ForwardIterable, Identity, Less, Permutable, Projection, Relation, Sortable,
};
use crate::pipe::{Adaptor, Pipeable};
use crate::traversal::Sequence;

macro_rules! sort_action {
    ($(#[$meta:meta])* $Name:ident, $name:literal, $algo:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $Name<C = Less, P = Identity> {
            pred: C,
            proj: P,
        }

        impl<C, P> $Name<C, P> {
            pub const fn new(pred: C, proj: P) -> Self {
                $Name { pred, proj }
            }
        }

        impl<R, C, P> Adaptor<R> for $Name<C, P>
        where
            R: Sortable<C, P>,
            P: Projection<R::Value>,
            C: Relation<P::Output>,
        {
            type Output = R;

            fn adapt(self, mut rng: R) -> R {
                crate::trace_op!(
                    target: "tola_ranges::action",
                    action = $name,
                    source_tier = %crate::capability::tier_of::<R>(),
                    "applying action"
                );
                $algo(&mut rng, &self.pred, &self.proj);
                rng
            }
        }
    };
}

sort_action! {
    /// Unstable sort. Equivalent elements may end up in any order.
    Sort, "sort", algorithm::sort
}

sort_action! {
    /// Stable sort. Equivalent elements keep their relative order.
    StableSort, "stable_sort", algorithm::stable_sort
}

/// Ascending by `Less`.
pub const fn sort() -> Pipeable<Sort> {
    Pipeable::new(Sort::new(Less, Identity))
}

/// By a relation over the values.
pub const fn sort_by<C>(pred: C) -> Pipeable<Sort<C>> {
    Pipeable::new(Sort::new(pred, Identity))
}

/// By a relation over projected keys.
pub const fn sort_by_key<C, P>(pred: C, proj: P) -> Pipeable<Sort<C, P>> {
    Pipeable::new(Sort::new(pred, proj))
}

pub const fn stable_sort() -> Pipeable<StableSort> {
    Pipeable::new(StableSort::new(Less, Identity))
}

pub const fn stable_sort_by<C>(pred: C) -> Pipeable<StableSort<C>> {
    Pipeable::new(StableSort::new(pred, Identity))
}

pub const fn stable_sort_by_key<C, P>(pred: C, proj: P) -> Pipeable<StableSort<C, P>> {
    Pipeable::new(StableSort::new(pred, proj))
}

crate::define_probe! {
    /// Requirements of `action::sort`, in diagnostic order.
    pub probe SortProbe(R, C, P) for "action::sort" {
        forward_iterable(
            Traversal,
            "The object on which action::sort operates must be a model of the ForwardIterable concept."
        ) where R: ForwardIterable;
        projection_invocable(
            Invocability,
            "The projection function must accept objects of the iterator's value type."
        ) where R: Sequence, P: Projection< <R as Sequence>::Value>;
        comparator_relation(
            Relation,
            "The comparator passed to action::sort must accept objects returned by the projection function, or of the value type if no projection is specified."
        ) where
            R: Sequence,
            P: Projection< <R as Sequence>::Value>,
            C: Relation< <P as Projection< <R as Sequence>::Value>>::Output>;
        permutable(
            Mutability,
            "The iterator type of the range passed to action::sort must allow its elements to be permuted; that is, the values must be movable and the iterator must be mutable."
        ) where R: Permutable;
    }
}

/// Diagnose `action::sort` at a call site.
///
/// `diagnose_sort!(rng)`, `diagnose_sort!(rng, pred)` or
/// `diagnose_sort!(rng, pred, proj)`; omitted callables default to `Less`
/// and `Identity`. Closures must annotate their argument types.
///
/// ```
/// use tola_ranges::capability::Category;
/// use tola_ranges::diagnose_sort;
/// use tola_ranges::dispatch::DispatchPath;
///
/// let mut v = vec![2, 1];
/// assert_eq!(diagnose_sort!(&mut v).path(), DispatchPath::Valid);
///
/// let by_name = |a: &String, b: &String| a < b;
/// let d = diagnose_sort!(&mut v, by_name);
/// let first = d.first_failure().unwrap();
/// assert_eq!(first.check, "comparator_relation");
/// assert_eq!(first.category, Category::Relation);
/// ```
#[macro_export]
macro_rules! diagnose_sort {
    ($rng:expr $(,)?) => {
        $crate::diagnose_sort!($rng, $crate::concept::Less, $crate::concept::Identity)
    };
    ($rng:expr, $pred:expr $(,)?) => {
        $crate::diagnose_sort!($rng, $pred, $crate::concept::Identity)
    };
    ($rng:expr, $pred:expr, $proj:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::action::sort::SortProbeFallback as _;
        $crate::diagnose!(
            $crate::action::sort::SortProbe::of(&$rng, &$pred, &$proj) =>
                forward_iterable, projection_invocable, comparator_relation, permutable
        )
    }};
}
