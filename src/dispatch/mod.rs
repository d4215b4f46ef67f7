//! Constrained dispatch.
//!
//! Every operation has exactly two candidates:
//!
//! ```text
//!                   requirement holds?
//!                  /                  \
//!              Present               Absent
//!                 |                     |
//!           Valid path           Diagnostic path
//!     (run the operation)   (report each sub-check in order)
//! ```
//!
//! Two mechanisms implement the split:
//!
//! - **Type-level selection** ([`SelectCap`], [`path_of`], [`strategy`]):
//!   for total sequence capabilities, `Bool::If<Then, Else>` picks a branch.
//! - **Call-site probes** ([`define_probe!`](crate::define_probe)): for
//!   requirements involving callables, an inherent method bounded on the
//!   requirement shadows a fallback trait method.
//!
//! The real operations are bounded on the same concept traits, so a call
//! that resolves to the diagnostic path never compiles as a call to the
//! operation; the diagnosis is what a caller can inspect instead.

mod diagnosis;
mod probe;
mod select;
pub mod strategy;

pub use diagnosis::{Diagnosis, DispatchPath, Unsatisfied, Verdict};
pub use select::{MethodImpl, SelectCap, SelectStaticCall, StaticMethodImpl};
pub use strategy::{Advance, Measure};

/// Marker for the valid candidate.
pub struct ValidPath;

/// Marker for the diagnostic candidate.
pub struct DiagnosticPath;

impl StaticMethodImpl<DispatchPath> for ValidPath {
    #[inline(always)]
    fn call() -> DispatchPath {
        DispatchPath::Valid
    }
}

impl StaticMethodImpl<DispatchPath> for DiagnosticPath {
    #[inline(always)]
    fn call() -> DispatchPath {
        DispatchPath::Diagnostic
    }
}

/// The path requirement `Q` selects for candidate `T`.
///
/// ```
/// use tola_ranges::capability::{IsForward, IsMutable};
/// use tola_ranges::concept::And;
/// use tola_ranges::dispatch::{path_of, DispatchPath};
///
/// assert_eq!(path_of::<And<IsForward, IsMutable>, Vec<u8>>(), DispatchPath::Valid);
/// assert_eq!(path_of::<And<IsForward, IsMutable>, &[u8]>(), DispatchPath::Diagnostic);
/// ```
#[inline(always)]
pub fn path_of<Q, T>() -> DispatchPath
where
    T: ?Sized + SelectStaticCall<Q, ValidPath, DiagnosticPath, DispatchPath>,
{
    <T as SelectStaticCall<Q, ValidPath, DiagnosticPath, DispatchPath>>::call()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{IsForward, IsMutable, IsSized};
    use crate::concept::{And, Not};
    use crate::view::Iota;

    type SortReady = And<IsForward, IsMutable>;

    fn sort_path<T>() -> DispatchPath
    where
        T: ?Sized + SelectStaticCall<SortReady, ValidPath, DiagnosticPath, DispatchPath>,
    {
        path_of::<SortReady, T>()
    }

    #[test]
    fn test_path_of_nested_requirement() {
        assert_eq!(sort_path::<Vec<u8>>(), DispatchPath::Valid);
        assert_eq!(sort_path::<Iota<u8>>(), DispatchPath::Diagnostic);
        assert_eq!(
            path_of::<And<IsSized, Not<IsMutable>>, Iota<u8, u8>>(),
            DispatchPath::Valid
        );
    }
}
