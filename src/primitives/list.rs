//! Type-level lists for `All` / `Any` requirement lists.

use core::marker::PhantomData;

/// Empty list.
pub struct HNil;

/// List cons cell.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Build a type-level list: `list![A, B, C]` is `HCons<A, HCons<B, HCons<C, HNil>>>`.
#[macro_export]
macro_rules! list {
    () => { $crate::primitives::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::primitives::HCons<$head, $crate::list!($($tail),*)>
    };
}
