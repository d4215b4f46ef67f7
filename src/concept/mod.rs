//! Concept evaluator.
//!
//! A *requirement* is a type built from capability markers and the
//! combinators below. Evaluating it against a candidate yields `Present` or
//! `Absent`; nothing is instantiated that could fail to compile.
//!
//! ```
//! use tola_ranges::concept::{models, And, Not};
//! use tola_ranges::capability::{IsForward, IsRandomAccess, IsSized};
//!
//! assert!(models::<And<IsRandomAccess, IsSized>, Vec<u8>>());
//! assert!(!models::<Not<IsForward>, [u8; 3]>());
//! ```
//!
//! Requirements are only normalized when a bound asks for them, so a
//! requirement over a type that is not known yet (the output of an earlier
//! pipeline stage, say) is evaluated at the point of use.

mod callable;
mod iterable;

pub use callable::{Compare, EqualTo, Greater, Identity, Less, Projection, Relation};
pub use iterable::{
    BidirectionalIterable, BoundedIterable, ForwardIterable, InputIterable, MovedFrom,
    Permutable, RandomAccessIterable, SizedIterable, Sortable,
};

use core::marker::PhantomData;

use crate::capability::{Capability, Predicate};
use crate::primitives::{Bool, BoolAnd, BoolNot, BoolOr, HCons, HNil, Present, Absent};

// =============================================================================
// Query Types
// =============================================================================

/// Conjunction: L AND R
pub struct And<L, R>(PhantomData<(L, R)>);

/// Disjunction: L OR R
pub struct Or<L, R>(PhantomData<(L, R)>);

/// Negation: NOT Q
pub struct Not<Q>(PhantomData<Q>);

/// Every requirement in the list holds.
pub struct All<List>(PhantomData<List>);

/// At least one requirement in the list holds.
pub struct Any<List>(PhantomData<List>);

// =============================================================================
// Evaluate (Main Entry Point)
// =============================================================================

/// Evaluate a requirement against a candidate type.
///
/// Returns `Present` (true) or `Absent` (false).
#[diagnostic::on_unimplemented(
    message = "requirement `{Query}` cannot be evaluated for `{Self}`",
    label = "`{Self}` has no answer for '{Query}'",
    note = "sequence capabilities need `Sequence`; combinators need every operand to be evaluable"
)]
pub trait Evaluate<Query> {
    type Out: Bool;
    /// The boolean result of the evaluation as a constant.
    const RESULT: bool = <Self::Out as Bool>::VALUE;
}

/// A single capability marker.
impl<Ctx, Cap> Evaluate<Cap> for Ctx
where
    Ctx: ?Sized,
    Cap: Capability + Predicate<Ctx>,
{
    type Out = <Cap as Predicate<Ctx>>::Out;
}

impl<Ctx, L, R> Evaluate<And<L, R>> for Ctx
where
    Ctx: ?Sized + Evaluate<L> + Evaluate<R>,
    <Ctx as Evaluate<L>>::Out: BoolAnd<<Ctx as Evaluate<R>>::Out>,
{
    type Out = <<Ctx as Evaluate<L>>::Out as BoolAnd<<Ctx as Evaluate<R>>::Out>>::Out;
}

impl<Ctx, L, R> Evaluate<Or<L, R>> for Ctx
where
    Ctx: ?Sized + Evaluate<L> + Evaluate<R>,
    <Ctx as Evaluate<L>>::Out: BoolOr<<Ctx as Evaluate<R>>::Out>,
{
    type Out = <<Ctx as Evaluate<L>>::Out as BoolOr<<Ctx as Evaluate<R>>::Out>>::Out;
}

impl<Ctx, Q> Evaluate<Not<Q>> for Ctx
where
    Ctx: ?Sized + Evaluate<Q>,
{
    type Out = <<Ctx as Evaluate<Q>>::Out as BoolNot>::Out;
}

impl<Ctx: ?Sized> Evaluate<All<HNil>> for Ctx {
    type Out = Present;
}

impl<Ctx, H, T> Evaluate<All<HCons<H, T>>> for Ctx
where
    Ctx: ?Sized + Evaluate<H> + Evaluate<All<T>>,
    <Ctx as Evaluate<H>>::Out: BoolAnd<<Ctx as Evaluate<All<T>>>::Out>,
{
    type Out = <<Ctx as Evaluate<H>>::Out as BoolAnd<<Ctx as Evaluate<All<T>>>::Out>>::Out;
}

impl<Ctx: ?Sized> Evaluate<Any<HNil>> for Ctx {
    type Out = Absent;
}

impl<Ctx, H, T> Evaluate<Any<HCons<H, T>>> for Ctx
where
    Ctx: ?Sized + Evaluate<H> + Evaluate<Any<T>>,
    <Ctx as Evaluate<H>>::Out: BoolOr<<Ctx as Evaluate<Any<T>>>::Out>,
{
    type Out = <<Ctx as Evaluate<H>>::Out as BoolOr<<Ctx as Evaluate<Any<T>>>::Out>>::Out;
}

// =============================================================================
// IsTrue / Require helpers
// =============================================================================

/// Holds only for `Present`. The failure message names the query and candidate.
#[diagnostic::on_unimplemented(
    message = "`{Candidate}` does not satisfy requirement `{Query}`",
    label = "requirement '{Query}' evaluated to false",
    note = "inspect the failing part with `concept_check!` or `models::<Query, Candidate>()`"
)]
pub trait IsTrue<Candidate: ?Sized, Query: ?Sized> {}

impl<C: ?Sized, Q: ?Sized> IsTrue<C, Q> for Present {}

/// Bound form of a requirement: implemented only when `Evaluate<Q>::Out` is `Present`.
pub trait Require<Q> {}

impl<C, Q> Require<Q> for C
where
    C: ?Sized + Evaluate<Q>,
    <C as Evaluate<Q>>::Out: IsTrue<C, Q>,
{
}

/// Does `T` model requirement `Q`?
pub const fn models<Q, T>() -> bool
where
    T: ?Sized + Evaluate<Q>,
{
    <T as Evaluate<Q>>::RESULT
}

/// Declarative requirement list: `requirement![A, B, C]` is `All<list![A, B, C]>`.
#[macro_export]
macro_rules! requirement {
    ($($req:ty),* $(,)?) => {
        $crate::concept::All<$crate::list!($($req),*)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{
        IsBidirectional, IsBounded, IsForward, IsInput, IsMutable, IsPermutable,
        IsRandomAccess, IsSinglePass, IsSized,
    };

    #[test]
    fn test_single_capabilities() {
        assert!(models::<IsRandomAccess, Vec<i32>>());
        assert!(models::<IsMutable, Vec<i32>>());
        assert!(!models::<IsMutable, &Vec<i32>>());
        assert!(models::<IsSized, &[u8]>());
        assert!(models::<IsBounded, [u8; 2]>());
    }

    #[test]
    fn test_combinators() {
        assert!(models::<And<IsForward, IsPermutable>, Vec<i32>>());
        assert!(models::<Or<IsSinglePass, IsSized>, Vec<i32>>());
        assert!(!models::<Not<IsInput>, Vec<i32>>());
        assert!(!models::<And<IsBidirectional, IsMutable>, &[i32]>());
    }

    #[test]
    fn test_lists() {
        type Full = requirement![IsInput, IsForward, IsBidirectional, IsRandomAccess];
        assert!(models::<Full, Vec<u8>>());
        assert!(models::<All<HNil>, [u8]>());
        assert!(!models::<Any<HNil>, [u8]>());
        assert!(models::<Any<crate::list![IsSinglePass, IsMutable]>, Vec<u8>>());
        assert!(!models::<Any<crate::list![IsSinglePass, IsMutable]>, &Vec<u8>>());
    }

    #[test]
    fn test_result_const() {
        const FORWARD: bool = <Vec<u8> as Evaluate<IsForward>>::RESULT;
        assert!(FORWARD);
    }
}
