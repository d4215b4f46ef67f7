//! `Sequence` for std containers and references.

use crate::capability::RandomAccessTier;
use crate::primitives::{Absent, Present};

use super::{
    BidirectionalSequence, Erasable, Indirect, RandomAccessSequence, Readable, Sequence,
    SizedSequence, Swappable, Writable,
};

// =============================================================================
// Contiguous storage: [T], [T; N], Vec<T>
// =============================================================================

macro_rules! impl_contiguous {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Sequence for $ty {
                type Value = T;
                type Cursor = usize;
                type Sentinel = usize;
                type Tier = RandomAccessTier;
                type Mutable = Present;
                type SizeKnown = Present;
                type Bounded = Present;

                #[inline(always)]
                fn begin(&self) -> usize {
                    0
                }
                #[inline(always)]
                fn end(&self) -> usize {
                    self.len()
                }
                #[inline(always)]
                fn inc(&self, cur: &mut usize) {
                    *cur += 1;
                }
            }

            impl<$($gen)*> Indirect for $ty {
                #[inline(always)]
                fn get(&self, cur: &usize) -> &T {
                    &self[*cur]
                }
            }

            impl<$($gen)*> Writable for $ty {
                #[inline(always)]
                fn get_mut(&mut self, cur: &usize) -> &mut T {
                    &mut self[*cur]
                }
            }

            impl<$($gen)*> Swappable for $ty {
                #[inline(always)]
                fn swap_at(&mut self, a: &usize, b: &usize) {
                    self.swap(*a, *b);
                }
            }

            impl<$($gen)*> BidirectionalSequence for $ty {
                #[inline(always)]
                fn dec(&self, cur: &mut usize) {
                    *cur -= 1;
                }
            }

            impl<$($gen)*> RandomAccessSequence for $ty {
                #[inline(always)]
                fn advance_by(&self, cur: &mut usize, n: isize) {
                    *cur = cur.wrapping_add_signed(n);
                }
                #[inline(always)]
                fn distance(&self, from: &usize, to: &usize) -> isize {
                    *to as isize - *from as isize
                }
            }

            impl<$($gen)*> SizedSequence for $ty {
                #[inline(always)]
                fn size(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_contiguous! {
    [T] [T],
    [T, const N: usize] [T; N],
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::collections::VecDeque;
    use alloc::vec::Vec;

    use super::*;

    impl_contiguous! {
        [T] Vec<T>,
        [T] VecDeque<T>,
    }

    impl<T> Erasable for Vec<T> {
        fn erase_from(&mut self, cur: &usize) {
            self.truncate(*cur);
        }
    }

    impl<T> Erasable for VecDeque<T> {
        fn erase_from(&mut self, cur: &usize) {
            self.truncate(*cur);
        }
    }
}

// =============================================================================
// Shared references: read-only view of the referent
// =============================================================================

impl<S: Sequence + ?Sized> Sequence for &S {
    type Value = S::Value;
    type Cursor = S::Cursor;
    type Sentinel = S::Sentinel;
    type Tier = S::Tier;
    type Mutable = Absent;
    type SizeKnown = S::SizeKnown;
    type Bounded = S::Bounded;

    #[inline(always)]
    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }
    #[inline(always)]
    fn end(&self) -> Self::Sentinel {
        (**self).end()
    }
    #[inline(always)]
    fn inc(&self, cur: &mut Self::Cursor) {
        (**self).inc(cur)
    }
}

impl<S: Indirect + ?Sized> Indirect for &S {
    #[inline(always)]
    fn get(&self, cur: &Self::Cursor) -> &Self::Value {
        (**self).get(cur)
    }
}

impl<'a, S: Indirect + ?Sized> Readable for &'a S {
    type Reference = &'a S::Value;

    #[inline(always)]
    fn read(&self, cur: &Self::Cursor) -> &'a S::Value {
        S::get(*self, cur)
    }
}

impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for &S {
    #[inline(always)]
    fn dec(&self, cur: &mut Self::Cursor) {
        (**self).dec(cur)
    }
}

impl<S: RandomAccessSequence + ?Sized> RandomAccessSequence for &S {
    #[inline(always)]
    fn advance_by(&self, cur: &mut Self::Cursor, n: isize) {
        (**self).advance_by(cur, n)
    }
    #[inline(always)]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        (**self).distance(from, to)
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for &S {
    #[inline(always)]
    fn size(&self) -> usize {
        (**self).size()
    }
}

// =============================================================================
// Exclusive references: everything forwards
// =============================================================================

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Value = S::Value;
    type Cursor = S::Cursor;
    type Sentinel = S::Sentinel;
    type Tier = S::Tier;
    type Mutable = S::Mutable;
    type SizeKnown = S::SizeKnown;
    type Bounded = S::Bounded;

    #[inline(always)]
    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }
    #[inline(always)]
    fn end(&self) -> Self::Sentinel {
        (**self).end()
    }
    #[inline(always)]
    fn inc(&self, cur: &mut Self::Cursor) {
        (**self).inc(cur)
    }
}

impl<S: Indirect + ?Sized> Indirect for &mut S {
    #[inline(always)]
    fn get(&self, cur: &Self::Cursor) -> &Self::Value {
        (**self).get(cur)
    }
}

impl<S: Writable + ?Sized> Writable for &mut S {
    #[inline(always)]
    fn get_mut(&mut self, cur: &Self::Cursor) -> &mut Self::Value {
        (**self).get_mut(cur)
    }
}

impl<S: Swappable + ?Sized> Swappable for &mut S {
    #[inline(always)]
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        (**self).swap_at(a, b)
    }
}

impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for &mut S {
    #[inline(always)]
    fn dec(&self, cur: &mut Self::Cursor) {
        (**self).dec(cur)
    }
}

impl<S: RandomAccessSequence + ?Sized> RandomAccessSequence for &mut S {
    #[inline(always)]
    fn advance_by(&self, cur: &mut Self::Cursor, n: isize) {
        (**self).advance_by(cur, n)
    }
    #[inline(always)]
    fn distance(&self, from: &Self::Cursor, to: &Self::Cursor) -> isize {
        (**self).distance(from, to)
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for &mut S {
    #[inline(always)]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S: Erasable + ?Sized> Erasable for &mut S {
    fn erase_from(&mut self, cur: &Self::Cursor) {
        (**self).erase_from(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{tier_of, TierKind};
    use crate::primitives::Bool;

    fn mutable<S: Sequence + ?Sized>() -> bool {
        <S::Mutable as Bool>::VALUE
    }

    #[test]
    fn test_contiguous_descriptor() {
        assert_eq!(tier_of::<Vec<i32>>(), TierKind::RandomAccess);
        assert_eq!(tier_of::<[u8]>(), TierKind::RandomAccess);
        assert!(mutable::<[u8; 4]>());
        assert!(mutable::<&mut Vec<i32>>());
        assert!(!mutable::<&Vec<i32>>());
    }

    #[test]
    fn test_vec_cursor_walk() {
        let v = vec![3, 1, 2];
        let mut cur = v.begin();
        let end = v.end();
        let mut seen = Vec::new();
        while cur < end {
            seen.push(*Indirect::get(&v, &cur));
            v.inc(&mut cur);
        }
        assert_eq!(seen, [3, 1, 2]);
        assert_eq!(v.distance(&0, &3), 3);
    }

    #[test]
    fn test_swap_through_exclusive_ref() {
        let mut v = vec![1, 2, 3];
        let r = &mut v;
        r.swap_at(&0, &2);
        r.erase_from(&2);
        assert_eq!(v, [3, 2]);
    }
}
