//! Capability-selected strategies for measuring and stepping.
//!
//! | Question | Capability | Then | Else |
//! |----------|------------|------|------|
//! | how many elements? | `IsSized` | [`BySize`] (O(1)) | [`ByWalking`] (O(n)) |
//! | move a cursor n steps | `IsRandomAccess` | [`Jump`] (O(1)) | [`Step`] (O(n)) |

use crate::capability::{IsRandomAccess, IsSized};
use crate::traversal::{RandomAccessSequence, Sentinel, Sequence, SizedSequence};

use super::select::{MethodImpl, SelectCap};

/// Size from `SizedSequence::size`.
pub struct BySize;

/// Size by walking from `begin` to the sentinel.
pub struct ByWalking;

impl<R: SizedSequence + ?Sized> MethodImpl<R, usize> for BySize {
    #[inline(always)]
    fn call(rng: &R) -> usize {
        rng.size()
    }
}

impl<R: Sequence + ?Sized> MethodImpl<R, usize> for ByWalking {
    fn call(rng: &R) -> usize {
        let end = rng.end();
        let mut cur = rng.begin();
        let mut n = 0;
        while !end.is_end(&cur) {
            rng.inc(&mut cur);
            n += 1;
        }
        n
    }
}

/// Number of elements, in constant time when the size is known.
///
/// Walking an infinite sequence does not terminate.
pub trait Measure: Sequence {
    fn measure(&self) -> usize;
}

impl<R> Measure for R
where
    R: Sequence + SelectCap<IsSized, BySize, ByWalking> + ?Sized,
    <R as SelectCap<IsSized, BySize, ByWalking>>::Out: MethodImpl<R, usize>,
{
    #[inline(always)]
    fn measure(&self) -> usize {
        <<R as SelectCap<IsSized, BySize, ByWalking>>::Out as MethodImpl<R, usize>>::call(self)
    }
}

/// Move a cursor forward by n positions.
pub trait StepImpl<R: Sequence + ?Sized> {
    fn advance(rng: &R, cur: &mut R::Cursor, n: usize);
}

/// One jump through `RandomAccessSequence::advance_by`.
pub struct Jump;

/// n calls to `inc`.
pub struct Step;

impl<R: RandomAccessSequence + ?Sized> StepImpl<R> for Jump {
    #[inline(always)]
    fn advance(rng: &R, cur: &mut R::Cursor, n: usize) {
        rng.advance_by(cur, n as isize);
    }
}

impl<R: Sequence + ?Sized> StepImpl<R> for Step {
    #[inline]
    fn advance(rng: &R, cur: &mut R::Cursor, n: usize) {
        for _ in 0..n {
            rng.inc(cur);
        }
    }
}

/// Advance a cursor, in constant time on random-access sequences.
pub trait Advance: Sequence {
    fn advance(&self, cur: &mut Self::Cursor, n: usize);
}

impl<R> Advance for R
where
    R: Sequence + SelectCap<IsRandomAccess, Jump, Step> + ?Sized,
    <R as SelectCap<IsRandomAccess, Jump, Step>>::Out: StepImpl<R>,
{
    #[inline(always)]
    fn advance(&self, cur: &mut Self::Cursor, n: usize) {
        <<R as SelectCap<IsRandomAccess, Jump, Step>>::Out as StepImpl<R>>::advance(self, cur, n)
    }
}
