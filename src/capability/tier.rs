//! Traversal tier lattice.
//!
//! ```text
//! InputTier < ForwardTier < BidirectionalTier < RandomAccessTier
//! ```
//!
//! A tier is a zero-sized marker. Comparisons between tiers are answered at
//! the type level (`TierAtLeast`) and tiers can be capped (`TierMin`) when an
//! adaptor cannot preserve the full traversal power of its source.

use core::fmt;

use crate::primitives::{Absent, Bool, Present};

/// Runtime mirror of a tier, mostly for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TierKind {
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl TierKind {
    pub const fn name(self) -> &'static str {
        match self {
            TierKind::Input => "input",
            TierKind::Forward => "forward",
            TierKind::Bidirectional => "bidirectional",
            TierKind::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A traversal tier marker.
pub trait Tier: 'static {
    const RANK: u8;
    const KIND: TierKind;
}

/// Single pass: every position may be read once, after which it is gone.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTier;

/// Multi pass: cursors can be copied and revisited.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardTier;

/// Multi pass in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalTier;

/// Constant-time jumps and distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccessTier;

impl Tier for InputTier {
    const RANK: u8 = 0;
    const KIND: TierKind = TierKind::Input;
}
impl Tier for ForwardTier {
    const RANK: u8 = 1;
    const KIND: TierKind = TierKind::Forward;
}
impl Tier for BidirectionalTier {
    const RANK: u8 = 2;
    const KIND: TierKind = TierKind::Bidirectional;
}
impl Tier for RandomAccessTier {
    const RANK: u8 = 3;
    const KIND: TierKind = TierKind::RandomAccess;
}

/// `Self >= Min` as a type-level answer. Implemented for every pair.
pub trait TierAtLeast<Min: Tier>: Tier {
    type Out: Bool;
}

/// The weaker of `Self` and `Other`. Implemented for every pair.
pub trait TierMin<Other: Tier>: Tier {
    type Out: AnyTier;
}

// Generic const expressions are unstable, so the 4x4 grid is spelled out.
macro_rules! tier_grid {
    ($($lhs:ident >= $rhs:ident => $ge:ident, min $min:ident;)*) => {
        $(
            impl TierAtLeast<$rhs> for $lhs {
                type Out = $ge;
            }
            impl TierMin<$rhs> for $lhs {
                type Out = $min;
            }
        )*
    };
}

tier_grid! {
    InputTier >= InputTier => Present, min InputTier;
    InputTier >= ForwardTier => Absent, min InputTier;
    InputTier >= BidirectionalTier => Absent, min InputTier;
    InputTier >= RandomAccessTier => Absent, min InputTier;

    ForwardTier >= InputTier => Present, min InputTier;
    ForwardTier >= ForwardTier => Present, min ForwardTier;
    ForwardTier >= BidirectionalTier => Absent, min ForwardTier;
    ForwardTier >= RandomAccessTier => Absent, min ForwardTier;

    BidirectionalTier >= InputTier => Present, min InputTier;
    BidirectionalTier >= ForwardTier => Present, min ForwardTier;
    BidirectionalTier >= BidirectionalTier => Present, min BidirectionalTier;
    BidirectionalTier >= RandomAccessTier => Absent, min BidirectionalTier;

    RandomAccessTier >= InputTier => Present, min InputTier;
    RandomAccessTier >= ForwardTier => Present, min ForwardTier;
    RandomAccessTier >= BidirectionalTier => Present, min BidirectionalTier;
    RandomAccessTier >= RandomAccessTier => Present, min RandomAccessTier;
}

/// Any tier that satisfies every `TierAtLeast` / `TierMin` query.
///
/// Blanket-implemented; sequences use it as the bound on their `Tier`.
pub trait AnyTier:
    Tier
    + TierAtLeast<InputTier>
    + TierAtLeast<ForwardTier>
    + TierAtLeast<BidirectionalTier>
    + TierAtLeast<RandomAccessTier>
    + TierMin<InputTier>
    + TierMin<ForwardTier>
    + TierMin<BidirectionalTier>
    + TierMin<RandomAccessTier>
{
}

impl<T> AnyTier for T where
    T: Tier
        + TierAtLeast<InputTier>
        + TierAtLeast<ForwardTier>
        + TierAtLeast<BidirectionalTier>
        + TierAtLeast<RandomAccessTier>
        + TierMin<InputTier>
        + TierMin<ForwardTier>
        + TierMin<BidirectionalTier>
        + TierMin<RandomAccessTier>
{
}
