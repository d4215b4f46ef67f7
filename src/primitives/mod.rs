//! Layer 0: primitives with no dependencies on the rest of the crate.

pub mod bool;
pub mod list;

pub use bool::{Absent, Bool, BoolAnd, BoolNot, BoolOr, If, Present, SelectBool};
pub use list::{HCons, HNil};
