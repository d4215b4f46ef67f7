//! `action::reverse`, `action::unique` and in-place `action::transform`.

use crate::algorithm;
use crate::concept::{EqualTo, Identity, Permutable, Projection, Relation};
use crate::pipe::{Adaptor, Pipeable};
use crate::traversal::{BidirectionalSequence, Erasable, Writable};

#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl<R> Adaptor<R> for Reverse
where
    R: BidirectionalSequence + Permutable,
{
    type Output = R;

    fn adapt(self, mut rng: R) -> R {
        crate::trace_op!(
            target: "tola_ranges::action",
            action = "reverse",
            source_tier = %crate::capability::tier_of::<R>(),
            "applying action"
        );
        algorithm::reverse(&mut rng);
        rng
    }
}

/// Reverse in place.
pub const fn reverse() -> Pipeable<Reverse> {
    Pipeable::new(Reverse)
}

/// Collapse runs of equivalent neighbours to their first element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unique<C = EqualTo, P = Identity> {
    rel: C,
    proj: P,
}

impl<R, C, P> Adaptor<R> for Unique<C, P>
where
    R: Permutable + Erasable,
    P: Projection<R::Value>,
    C: Relation<P::Output>,
{
    type Output = R;

    fn adapt(self, mut rng: R) -> R {
        let _kept = algorithm::unique(&mut rng, &self.rel, &self.proj);
        crate::trace_op!(target: "tola_ranges::action", action = "unique", kept = _kept, "applied action");
        rng
    }
}

pub const fn unique() -> Pipeable<Unique> {
    Pipeable::new(Unique { rel: EqualTo, proj: Identity })
}

/// Neighbours are duplicates when `rel` holds between them.
pub const fn unique_by<C>(rel: C) -> Pipeable<Unique<C>> {
    Pipeable::new(Unique { rel, proj: Identity })
}

/// `f` applied to every element in place.
#[derive(Debug, Clone, Copy)]
pub struct Transform<F>(F);

impl<R, F> Adaptor<R> for Transform<F>
where
    R: Writable,
    F: FnMut(&mut R::Value),
{
    type Output = R;

    fn adapt(self, mut rng: R) -> R {
        crate::trace_op!(target: "tola_ranges::action", action = "transform", "applying action");
        algorithm::for_each_mut(&mut rng, self.0);
        rng
    }
}

pub const fn transform<F>(f: F) -> Pipeable<Transform<F>> {
    Pipeable::new(Transform(f))
}
