//! Optional `tracing` instrumentation.
//!
//! With the `trace` feature, `trace_op!` forwards to `tracing::trace!`;
//! without it the arguments are discarded unevaluated.

#[cfg(feature = "trace")]
macro_rules! trace_op {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_op {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use trace_op;
