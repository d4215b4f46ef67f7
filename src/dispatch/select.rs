//! Type-level selection.
//!
//! Selects between two implementation types from a requirement's answer.
//! Both branches always exist, so exactly one is picked for every
//! candidate: the selection is exhaustive and exclusive by construction.
//!
//! ```ignore
//! struct BySize;
//! struct ByWalking;
//!
//! impl<R: SizedSequence> MethodImpl<R, usize> for BySize { ... }
//! impl<R: Sequence> MethodImpl<R, usize> for ByWalking { ... }
//!
//! type Selected = <Vec<u8> as SelectCap<IsSized, BySize, ByWalking>>::Out;
//! Selected::call(&v)  // no `if` branch
//! ```

use crate::concept::Evaluate;
use crate::primitives::Bool;

/// Selects `Then` or `Else` from `Self: Evaluate<Q>`.
pub trait SelectCap<Q, Then, Else> {
    type Out;
}

impl<S, Q, Then, Else> SelectCap<Q, Then, Else> for S
where
    S: ?Sized + Evaluate<Q>,
{
    type Out = <<S as Evaluate<Q>>::Out as Bool>::If<Then, Else>;
}

/// Calls `Then::call()` or `Else::call()` from `Self: Evaluate<Q>`.
///
/// Unlike going through `SelectCap::Out`, callers only need both branches to
/// implement `StaticMethodImpl`, not to prove anything about the selection.
pub trait SelectStaticCall<Q, Then, Else, Output> {
    fn call() -> Output;
}

impl<S, Q, Then, Else, Output> SelectStaticCall<Q, Then, Else, Output> for S
where
    S: ?Sized + Evaluate<Q>,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    #[inline(always)]
    fn call() -> Output {
        <S as Evaluate<Q>>::Out::static_dispatch::<Then, Else, Output>()
    }
}

/// Implementation selected by reference to a value.
pub trait MethodImpl<T: ?Sized, Output = ()> {
    fn call(value: &T) -> Output;
}

/// Implementation selected with no receiver.
pub trait StaticMethodImpl<Output = ()> {
    fn call() -> Output;
}
