//! Callable requirements: projections and relations.
//!
//! Both are satisfied by the named function objects here and by closures
//! of the matching shape.

use core::cmp::Ordering;

/// Maps a value to the key an algorithm looks at.
///
/// The key is handed to a continuation, so projections may return either a
/// borrow of the input (`Identity`) or an owned key (closures).
#[diagnostic::on_unimplemented(
    message = "the projection `{Self}` must accept objects of the sequence's value type `{V}`",
    label = "cannot be invoked with `&{V}`",
    note = "a projection closure has the shape `Fn(&{V}) -> Key`"
)]
pub trait Projection<V: ?Sized> {
    type Output: ?Sized;

    fn with<Ret>(&self, value: &V, f: impl FnOnce(&Self::Output) -> Ret) -> Ret;
}

/// The identity projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<V: ?Sized> Projection<V> for Identity {
    type Output = V;

    #[inline(always)]
    fn with<Ret>(&self, value: &V, f: impl FnOnce(&V) -> Ret) -> Ret {
        f(value)
    }
}

impl<V, F, K> Projection<V> for F
where
    V: ?Sized,
    F: Fn(&V) -> K,
{
    type Output = K;

    #[inline(always)]
    fn with<Ret>(&self, value: &V, f: impl FnOnce(&K) -> Ret) -> Ret {
        f(&self(value))
    }
}

/// A binary predicate usable as an ordering (or equivalence) relation.
#[diagnostic::on_unimplemented(
    message = "the comparator `{Self}` must accept objects returned by the projection, or of the value type if there is no projection",
    label = "not a relation over `{X}` and `{Y}`",
    note = "a comparator closure has the shape `Fn(&{X}, &{Y}) -> bool`; for `Ordering` results wrap it in `Compare`"
)]
pub trait Relation<X: ?Sized, Y: ?Sized = X> {
    fn test(&self, a: &X, b: &Y) -> bool;
}

/// `a < b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

/// `a > b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

/// `a == b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualTo;

impl<X: PartialOrd<Y> + ?Sized, Y: ?Sized> Relation<X, Y> for Less {
    #[inline(always)]
    fn test(&self, a: &X, b: &Y) -> bool {
        a < b
    }
}

impl<X: PartialOrd<Y> + ?Sized, Y: ?Sized> Relation<X, Y> for Greater {
    #[inline(always)]
    fn test(&self, a: &X, b: &Y) -> bool {
        a > b
    }
}

impl<X: PartialEq<Y> + ?Sized, Y: ?Sized> Relation<X, Y> for EqualTo {
    #[inline(always)]
    fn test(&self, a: &X, b: &Y) -> bool {
        a == b
    }
}

impl<X, Y, F> Relation<X, Y> for F
where
    X: ?Sized,
    Y: ?Sized,
    F: Fn(&X, &Y) -> bool,
{
    #[inline(always)]
    fn test(&self, a: &X, b: &Y) -> bool {
        self(a, b)
    }
}

/// Adapts a three-way comparator (`Ord::cmp` shape) into a less-than relation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compare<F>(pub F);

impl<X, F> Relation<X> for Compare<F>
where
    X: ?Sized,
    F: Fn(&X, &X) -> Ordering,
{
    #[inline(always)]
    fn test(&self, a: &X, b: &X) -> bool {
        (self.0)(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of<V: ?Sized, P: Projection<V>>(proj: &P, v: &V) -> P::Output
    where
        P::Output: Clone + Sized,
    {
        proj.with(v, |k| k.clone())
    }

    #[test]
    fn test_identity_and_closure_projection() {
        assert_eq!(key_of(&Identity, &5), 5);
        assert_eq!(key_of(&|s: &&str| s.len(), &"four"), 4);
    }

    #[test]
    fn test_named_relations() {
        assert!(Less.test(&1, &2));
        assert!(!Less.test(&2, &2));
        assert!(Greater.test(&3, &2));
        assert!(EqualTo.test("a", "a"));
    }

    #[test]
    fn test_closure_and_compare_relations() {
        let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
        assert!(by_abs.test(&-1, &2));
        let cmp = Compare(|a: &i32, b: &i32| b.cmp(a));
        assert!(cmp.test(&3, &1));
        assert!(!cmp.test(&1, &3));
    }
}
