//! Common parsing utilities

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type checks: `Type: Expr`
// =============================================================================

/// Single type check: `Type: Expr`
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more type checks, comma separated, trailing comma allowed.
pub struct CheckList {
    pub checks: Vec<TypeCheck>,
}

impl Parse for CheckList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let checks = parse_comma_separated::<TypeCheck>(input)?;
        if checks.is_empty() {
            return Err(input.error("expected at least one `Type: Requirement` check"));
        }
        Ok(CheckList { checks })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}
