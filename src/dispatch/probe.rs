//! Operation descriptors and their call-site probes.
//!
//! `define_probe!` declares, for one operation, an ordered list of
//! sub-requirements. It expands to a probe type with:
//!
//! - one inherent method per check, bounded on exactly that check;
//! - a fallback trait providing the same methods, all answering "unmet";
//! - an inherent `path()` bounded on *every* check, falling back to
//!   [`DispatchPath::Diagnostic`](crate::dispatch::DispatchPath).
//!
//! Method resolution prefers an inherent method whose bounds hold over the
//! trait method, so at a call site with concrete types each check answers
//! truthfully and `path()` picks exactly one of the two candidates. Inside
//! generic code the bounds are unknown and every answer is the fallback, so
//! probes are driven from macros that expand at the call site (see
//! `diagnose_sort!`).

/// Declare an operation descriptor. See the module docs.
///
/// ```
/// use tola_ranges::concept::{ForwardIterable, Permutable};
/// use tola_ranges::define_probe;
///
/// define_probe! {
///     /// Requirements of an in-place shuffle.
///     pub probe ShuffleProbe(R) for "shuffle" {
///         forward(Traversal, "must be forward-iterable") where R: ForwardIterable;
///         permutable(Mutability, "elements must be permutable") where R: Permutable;
///     }
/// }
///
/// use ShuffleProbeFallback as _;
/// let v = vec![1, 2, 3];
/// let probe = ShuffleProbe::of(&v);
/// assert!(probe.forward().holds && probe.permutable().holds);
///
/// let r = &v;
/// let probe = ShuffleProbe::of(&r);
/// assert!(probe.forward().holds && !probe.permutable().holds);
/// ```
#[macro_export]
macro_rules! define_probe {
    (@struct $(#[$meta:meta])* $vis:vis $Probe:ident ($($P:ident),+) $op:literal) => {
        $(#[$meta])*
        $vis struct $Probe<$($P),+>(::core::marker::PhantomData<fn() -> ($($P,)+)>);

        impl<$($P),+> $Probe<$($P),+> {
            pub const OPERATION: &'static str = $op;

            #[inline(always)]
            pub const fn new() -> Self {
                $Probe(::core::marker::PhantomData)
            }

            /// Infer the probed types from the call-site arguments.
            #[inline(always)]
            pub const fn of($(_: &$P),+) -> Self {
                Self::new()
            }

            #[inline(always)]
            pub const fn operation(&self) -> &'static str {
                $op
            }
        }

        impl<$($P),+> ::core::default::Default for $Probe<$($P),+> {
            fn default() -> Self {
                Self::new()
            }
        }
    };

    (@fallback $Probe:ident ($($P:ident),+) $Fallback:ident) => {
        impl<$($P),+> $Fallback for $Probe<$($P),+> {}
    };

    (@check $Probe:ident ($($P:ident),+) $check:ident($category:ident, $message:literal) [$($bound:tt)*]) => {
        impl<$($P),+> $Probe<$($P),+> where $($bound)* {
            #[inline(always)]
            pub fn $check(&self) -> $crate::dispatch::Verdict {
                $crate::dispatch::Verdict::met(
                    stringify!($check),
                    $crate::capability::Category::$category,
                    $message,
                )
            }
        }
    };

    (@path $Probe:ident ($($P:ident),+) [$($bound:tt)*]) => {
        impl<$($P),+> $Probe<$($P),+> where $($bound)* {
            #[inline(always)]
            pub fn path(&self) -> $crate::dispatch::DispatchPath {
                $crate::dispatch::DispatchPath::Valid
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis probe $Probe:ident $params:tt for $op:literal {
            $(
                $check:ident($category:ident, $message:literal)
                    where $($bound:ty : $trait:path),+ ;
            )+
        }
    ) => {
        $crate::define_probe!(@struct $(#[$meta])* $vis $Probe $params $op);

        $crate::paste::paste! {
            #[doc = concat!("Unmet answers for [`", stringify!($Probe), "`]; bring into scope with `use ... as _`.")]
            $vis trait [<$Probe Fallback>] {
                $(
                    #[inline(always)]
                    fn $check(&self) -> $crate::dispatch::Verdict {
                        $crate::dispatch::Verdict::unmet(
                            stringify!($check),
                            $crate::capability::Category::$category,
                            $message,
                        )
                    }
                )+

                #[inline(always)]
                fn path(&self) -> $crate::dispatch::DispatchPath {
                    $crate::dispatch::DispatchPath::Diagnostic
                }
            }

            $crate::define_probe!(@fallback $Probe $params [<$Probe Fallback>]);
        }

        $(
            $crate::define_probe!(@check $Probe $params $check($category, $message) [$($bound : $trait),+]);
        )+

        $crate::define_probe!(@path $Probe $params [$($($bound : $trait),+),+]);
    };
}

/// Evaluate every check of a probe at the call site.
///
/// `diagnose!(probe => check_a, check_b, ...)` yields a
/// [`Diagnosis`](crate::dispatch::Diagnosis). The probe's fallback trait
/// must be in scope.
#[macro_export]
macro_rules! diagnose {
    ($probe:expr => $($check:ident),+ $(,)?) => {{
        let __probe = $probe;
        $crate::dispatch::Diagnosis::new(
            __probe.operation(),
            __probe.path(),
            [$(__probe.$check()),+],
        )
    }};
}
