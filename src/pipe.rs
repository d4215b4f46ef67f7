//! Pipe syntax.
//!
//! An [`Adaptor`] is one application step: it consumes a sequence (owned,
//! `&`, or `&mut`) and yields a view or the sequence itself. Curried
//! constructors such as `view::moved()` and `action::sort()` return a
//! [`Pipeable`] so that
//!
//! ```text
//! rng | adaptor          ==  adaptor.apply(rng)
//! rng | a | b            ==  b.apply(a.apply(rng))
//! rng | (a | b)          ==  (a | b).apply(rng)     // Composed<A, B>
//! ```
//!
//! `|` is implemented for std containers, references to them, and every
//! view in this crate. Any other sequence can use [`PipeExt::pipe`].

use core::ops::BitOr;

/// One application step over a sequence of type `R`.
pub trait Adaptor<R> {
    type Output;

    fn adapt(self, rng: R) -> Self::Output;
}

/// A curried adaptor, waiting for its sequence.
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "a pipeable adaptor does nothing until applied to a sequence"]
pub struct Pipeable<A>(A);

impl<A> Pipeable<A> {
    pub const fn new(adaptor: A) -> Self {
        Pipeable(adaptor)
    }

    pub fn into_inner(self) -> A {
        self.0
    }

    /// Direct form: `adaptor.apply(rng)` is `rng | adaptor`.
    #[inline(always)]
    pub fn apply<R>(self, rng: R) -> A::Output
    where
        A: Adaptor<R>,
    {
        self.0.adapt(rng)
    }
}

impl<R, A: Adaptor<R>> Adaptor<R> for Pipeable<A> {
    type Output = A::Output;

    #[inline(always)]
    fn adapt(self, rng: R) -> A::Output {
        self.0.adapt(rng)
    }
}

/// `first` then `second`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

impl<A, B> Composed<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Composed { first, second }
    }
}

impl<R, A, B> Adaptor<R> for Composed<A, B>
where
    A: Adaptor<R>,
    B: Adaptor<A::Output>,
{
    type Output = B::Output;

    #[inline(always)]
    fn adapt(self, rng: R) -> B::Output {
        self.second.adapt(self.first.adapt(rng))
    }
}

impl<A, B> BitOr<Pipeable<B>> for Pipeable<A> {
    type Output = Pipeable<Composed<A, B>>;

    #[inline(always)]
    fn bitor(self, rhs: Pipeable<B>) -> Self::Output {
        Pipeable(Composed::new(self.0, rhs.0))
    }
}

/// Method form of `|` for any sequence.
pub trait PipeExt: Sized {
    #[inline(always)]
    fn pipe<A: Adaptor<Self>>(self, adaptor: Pipeable<A>) -> A::Output {
        adaptor.apply(self)
    }
}

impl<T> PipeExt for T {}

/// `impl BitOr<Pipeable<_>>` for the listed sequence types.
macro_rules! impl_pipe_operator {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)* __A> ::core::ops::BitOr<$crate::pipe::Pipeable<__A>> for $ty
            where
                __A: $crate::pipe::Adaptor<$ty>,
            {
                type Output = <__A as $crate::pipe::Adaptor<$ty>>::Output;

                #[inline(always)]
                fn bitor(self, rhs: $crate::pipe::Pipeable<__A>) -> Self::Output {
                    rhs.apply(self)
                }
            }
        )*
    };
}

pub(crate) use impl_pipe_operator;

impl_pipe_operator! {
    ['a, T,] &'a [T],
    ['a, T,] &'a mut [T],
    [T, const N: usize,] [T; N],
    ['a, T, const N: usize,] &'a [T; N],
    ['a, T, const N: usize,] &'a mut [T; N],
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::collections::VecDeque;
    use alloc::vec::Vec;

    impl_pipe_operator! {
        [T,] Vec<T>,
        ['a, T,] &'a Vec<T>,
        ['a, T,] &'a mut Vec<T>,
        [T,] VecDeque<T>,
        ['a, T,] &'a VecDeque<T>,
        ['a, T,] &'a mut VecDeque<T>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Push(i32);

    impl Adaptor<Vec<i32>> for Push {
        type Output = Vec<i32>;
        fn adapt(self, mut rng: Vec<i32>) -> Vec<i32> {
            rng.push(self.0);
            rng
        }
    }

    impl<'a> Adaptor<&'a mut Vec<i32>> for Push {
        type Output = &'a mut Vec<i32>;
        fn adapt(self, rng: &'a mut Vec<i32>) -> &'a mut Vec<i32> {
            rng.push(self.0);
            rng
        }
    }

    fn push(x: i32) -> Pipeable<Push> {
        Pipeable::new(Push(x))
    }

    #[test]
    fn test_pipe_and_direct_agree() {
        let piped = vec![1] | push(2);
        let direct = push(2).apply(vec![1]);
        assert_eq!(piped, direct);
    }

    #[test]
    fn test_composition_is_left_to_right() {
        let v = Vec::<i32>::new() | (push(1) | push(2)) | push(3);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_forwarding_exclusive_ref() {
        let mut v = vec![0];
        let r: &mut Vec<i32> = &mut v | push(1);
        r.push(2);
        assert_eq!(v, [0, 1, 2]);
    }

    #[test]
    fn test_pipe_ext() {
        assert_eq!(vec![7].pipe(push(8)), [7, 8]);
    }
}
