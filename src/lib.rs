#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: Vec / VecDeque sequences in no_std
// - trace: tracing events for views, actions and diagnoses

//! # tola-ranges
//!
//! Capability-checked lazy views and eager actions over cursor/sentinel
//! sequences.
//!
//! ## Architecture
//!
//! Every sequence carries a *capability descriptor* at the type level:
//! traversal tier, mutability, known size, boundedness. Operations state
//! their requirements over those descriptors (and over the callables they
//! take), and a call either satisfies them or is rejected at compile time
//! with a message naming the unmet part.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, Bool, HNil / HCons                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability model                                        |
//! |  - Tier lattice, Sequence descriptor, Is* capability markers      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Concept evaluator and dispatch                          |
//! |  - Evaluate, And / Or / Not / All / Any, concept traits           |
//! |  - SelectCap strategies, define_probe!, Diagnosis                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - view::{all, moved, transform, take, iota}                      |
//! |  - action::{sort, stable_sort, reverse, unique, transform}        |
//! |  - rng | adaptor, requires!, concept_check!                       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_ranges::prelude::*;
//!
//! // Eager: sort in place, hand the container back.
//! let mut v = vec![3, 1, 2];
//! let _ = &mut v | action::sort();
//! assert_eq!(v, [1, 2, 3]);
//!
//! // Lazy: move the elements out, leaving empty strings behind.
//! let mut words = vec![String::from("a"), String::from("b")];
//! let moved: Vec<String> = (&mut words | view::moved()).into_iter().collect();
//! assert_eq!(moved, ["a", "b"]);
//! assert_eq!(words, ["", ""]);
//!
//! // Capabilities are answered for any sequence, never a compile error.
//! assert!(concept_check!(Vec<i32>: Forward & Mutable));
//! assert!(!concept_check!(&Vec<i32>: Mutable));
//! ```

// Allow `::tola_ranges` to work inside the crate itself
extern crate self as tola_ranges;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for define_probe!
pub use paste;

mod trace;
pub(crate) use trace::trace_op;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability model
// =============================================================================
pub mod capability;
pub mod traversal;

// =============================================================================
// Layer 2: Concept evaluator and dispatch
// =============================================================================
pub mod concept;
pub mod dispatch;

// =============================================================================
// Layer 3: Views, actions, algorithms
// =============================================================================
pub mod algorithm;
pub mod pipe;

pub mod action;
pub mod view;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, BoolAnd, BoolNot, BoolOr, Present};
pub use concept::{models, Evaluate};
pub use pipe::{Adaptor, PipeExt, Pipeable};

// Re-export proc-macros
pub use macros::{concept_check, requires};

/// Common items for views, actions and requirements.
pub mod prelude {
    pub use crate::action::{self, Action};
    pub use crate::capability::{
        IsBidirectional, IsBounded, IsForward, IsInput, IsMutable, IsPermutable,
        IsRandomAccess, IsSinglePass, IsSized,
    };
    pub use crate::concept::{
        models, BidirectionalIterable, EqualTo, Evaluate, ForwardIterable, Greater, Identity,
        InputIterable, Less, Permutable, RandomAccessIterable, Sortable,
    };
    pub use crate::pipe::{Adaptor, PipeExt, Pipeable};
    pub use crate::traversal::{iter, Sequence};
    pub use crate::view;
    pub use macros::{concept_check, requires};
    // Note: define_probe!, diagnose!, diagnose_sort!, diagnose_move!, requirement!, list!
    // are #[macro_export] so they're at crate root
}
