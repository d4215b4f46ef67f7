// Common utilities shared by the macros
//
// This module contains:
// - bool_expr: requirement expression parsing and lowering
// - parse_utils: `Type: Expr` check lists

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
