//! Capability model.
//!
//! A capability is a named, side-effect-free predicate over a candidate
//! type. Capabilities over sequences are *total*: every [`Sequence`] carries
//! a descriptor (tier, mutability, sizedness, boundedness), so asking any of
//! the questions below never fails to compile, it just answers `Absent`.
//!
//! ```text
//! Capability (name, category)
//!     |
//!     +-- Predicate<Candidate>::Out : Bool
//!             |
//!             +-- IsInput / IsForward / IsBidirectional / IsRandomAccess
//!             +-- IsMutable / IsSized / IsBounded
//!             +-- IsPermutable / IsSinglePass
//! ```
//!
//! Requirements on *callables* (projections, relations) live in
//! [`crate::concept`]; they are bounds, not total predicates.

pub mod tier;

use core::fmt;
use core::marker::PhantomData;

use crate::primitives::{Bool, BoolAnd, BoolNot};
use crate::traversal::Sequence;

pub use tier::{
    AnyTier, BidirectionalTier, ForwardTier, InputTier, RandomAccessTier, Tier, TierAtLeast,
    TierKind, TierMin,
};

/// Coarse grouping of requirements, surfaced in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Traversal tier (input, forward, bidirectional, random access).
    Traversal,
    /// Assignable-through cursors, movable values.
    Mutability,
    /// A callable must accept a given argument type.
    Invocability,
    /// A callable's result must be usable as an ordering relation.
    Relation,
    /// Known size or a bounded end.
    Extent,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Traversal => "traversal tier",
            Category::Mutability => "mutability",
            Category::Invocability => "invocability",
            Category::Relation => "relation",
            Category::Extent => "extent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named capability.
pub trait Capability: 'static {
    const NAME: &'static str;
    const CATEGORY: Category;
}

/// Answer to "does `Candidate` have this capability?".
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be asked of `{Candidate}`",
    label = "no capability descriptor for `{Candidate}`",
    note = "sequence capabilities are defined for every type implementing `Sequence`"
)]
pub trait Predicate<Candidate: ?Sized>: Capability {
    type Out: Bool;
}

// =============================================================================
// Traversal tier
// =============================================================================

/// Traversal tier is at least `T`.
pub struct Traversal<T>(PhantomData<T>);

pub type IsInput = Traversal<InputTier>;
pub type IsForward = Traversal<ForwardTier>;
pub type IsBidirectional = Traversal<BidirectionalTier>;
pub type IsRandomAccess = Traversal<RandomAccessTier>;

impl<T: Tier> Capability for Traversal<T> {
    const NAME: &'static str = T::KIND.name();
    const CATEGORY: Category = Category::Traversal;
}

impl<R, T> Predicate<R> for Traversal<T>
where
    R: Sequence + ?Sized,
    T: Tier,
    R::Tier: TierAtLeast<T>,
{
    type Out = <R::Tier as TierAtLeast<T>>::Out;
}

// =============================================================================
// Descriptor flags
// =============================================================================

/// Elements can be assigned through cursors.
pub struct IsMutable;

impl Capability for IsMutable {
    const NAME: &'static str = "mutable";
    const CATEGORY: Category = Category::Mutability;
}

impl<R: Sequence + ?Sized> Predicate<R> for IsMutable {
    type Out = R::Mutable;
}

/// Size is known without walking.
pub struct IsSized;

impl Capability for IsSized {
    const NAME: &'static str = "sized";
    const CATEGORY: Category = Category::Extent;
}

impl<R: Sequence + ?Sized> Predicate<R> for IsSized {
    type Out = R::SizeKnown;
}

/// The end sentinel is itself a cursor.
pub struct IsBounded;

impl Capability for IsBounded {
    const NAME: &'static str = "bounded";
    const CATEGORY: Category = Category::Extent;
}

impl<R: Sequence + ?Sized> Predicate<R> for IsBounded {
    type Out = R::Bounded;
}

// =============================================================================
// Derived
// =============================================================================

/// Forward traversal over mutable positions: elements may be rearranged.
pub struct IsPermutable;

impl Capability for IsPermutable {
    const NAME: &'static str = "permutable";
    const CATEGORY: Category = Category::Mutability;
}

impl<R> Predicate<R> for IsPermutable
where
    R: Sequence + ?Sized,
    R::Tier: TierAtLeast<ForwardTier>,
    <R::Tier as TierAtLeast<ForwardTier>>::Out: BoolAnd<R::Mutable>,
{
    type Out = <<R::Tier as TierAtLeast<ForwardTier>>::Out as BoolAnd<R::Mutable>>::Out;
}

/// Input but not forward: one pass only.
pub struct IsSinglePass;

impl Capability for IsSinglePass {
    const NAME: &'static str = "single-pass";
    const CATEGORY: Category = Category::Traversal;
}

impl<R> Predicate<R> for IsSinglePass
where
    R: Sequence + ?Sized,
    R::Tier: TierAtLeast<ForwardTier>,
    <R::Tier as TierAtLeast<ForwardTier>>::Out: BoolNot,
{
    type Out = <<R::Tier as TierAtLeast<ForwardTier>>::Out as BoolNot>::Out;
}

/// Most refined tier of `R`.
pub const fn tier_of<R: Sequence + ?Sized>() -> TierKind {
    <R::Tier as Tier>::KIND
}
