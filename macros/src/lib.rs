//! Procedural macros for tola-ranges requirement expressions
//!
//! | Macro | Output | Purpose |
//! |-------|--------|---------|
//! | `requires!(Expr)` | type | Build a requirement type from a boolean expression |
//! | `concept_check!(Type: Expr, ...)` | `bool` | Evaluate requirements for concrete (or bounded) types |
//!
//! ## Expression syntax
//!
//! ```text
//! Expr    := Or
//! Or      := And ('|' And)*
//! And     := Unary ('&' Unary)*
//! Unary   := '!' Unary | Primary
//! Primary := '(' Expr ')' | Type
//! ```
//!
//! `Input`, `Forward`, `Bidirectional`, `RandomAccess`, `Mutable`, `Sized`,
//! `Bounded`, `Permutable` and `SinglePass` name the capability markers in
//! `tola_ranges::capability`, as does any bare `Is*` name.
//!
//! ## Example
//!
//! ```ignore
//! type SortReady = requires!(Forward & Mutable);
//! assert!(models::<SortReady, Vec<i32>>());
//!
//! assert!(concept_check!(Vec<i32>: Forward & Mutable, &[i32]: !Mutable));
//! assert!(concept_check!(String: Ord & !Copy));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;

/// Build a requirement type from a boolean expression.
///
/// `requires!(Forward & (Sized | !Bounded))` expands to
/// `And<IsForward, Or<IsSized, Not<IsBounded>>>` from `tola_ranges::concept`
/// and `tola_ranges::capability`. Names that are not capability keywords
/// are used as-is and must be requirement types themselves.
#[proc_macro]
pub fn requires(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as common::BoolExpr);
    common::bool_expr_to_type(&expr).into()
}

/// Evaluate requirements to a `bool`.
///
/// # Syntax: `concept_check!(Type: Expr, ...)`
///
/// All checks must hold for the result to be `true`. Capability keywords are
/// answered through `models`, so they also work on generic types bounded on
/// `Sequence`. Any other name is a trait, answered by an inherent-const probe
/// at the call site; on generic types that probe only ever answers `false`.
#[proc_macro]
pub fn concept_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::CheckList);
    expand_concept_check(input).into()
}

fn expand_concept_check(input: common::CheckList) -> proc_macro2::TokenStream {
    let check_exprs: Vec<_> = input
        .checks
        .iter()
        .map(|c| common::generate_check(&c.expr, &c.ty))
        .collect();

    if check_exprs.len() == 1 {
        let only = &check_exprs[0];
        quote::quote! { #only }
    } else {
        quote::quote! { (#(#check_exprs)&&*) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_checks_are_conjoined() {
        let input: common::CheckList = syn::parse_str("Vec<u8>: Forward, [u8; 2]: Sized").unwrap();
        let out = expand_concept_check(input).to_string();
        assert_eq!(out.matches("models").count(), 2);
        assert!(out.contains("&&"));
    }

    #[test]
    fn test_trait_names_use_probe() {
        let input: common::CheckList = syn::parse_str("String: Ord & !Copy").unwrap();
        let out = expand_concept_check(input).to_string();
        assert!(out.contains("__ProbeFallback"));
        assert!(!out.contains("models"));
    }

    #[test]
    fn test_requires_lowering_of_negated_group() {
        let expr: common::BoolExpr = syn::parse_str("!(Mutable | Sized)").unwrap();
        let ty = common::bool_expr_to_type(&expr).to_string().replace(' ', "");
        assert!(ty.starts_with("::tola_ranges::concept::Not<::tola_ranges::concept::Or<"));
    }
}
