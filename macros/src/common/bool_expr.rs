// Boolean expression parsing and lowering for requirement expressions

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Req(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Req(ty))
    }
}

// =============================================================================
// Capability keywords
// =============================================================================

/// Short names accepted for the capability markers in `tola_ranges::capability`.
const CAPABILITY_KEYWORDS: &[(&str, &str)] = &[
    ("Input", "IsInput"),
    ("Forward", "IsForward"),
    ("Bidirectional", "IsBidirectional"),
    ("RandomAccess", "IsRandomAccess"),
    ("Mutable", "IsMutable"),
    ("Sized", "IsSized"),
    ("Bounded", "IsBounded"),
    ("Permutable", "IsPermutable"),
    ("SinglePass", "IsSinglePass"),
];

/// The capability marker a requirement names, if it names one.
///
/// Keywords map to their marker; a bare `Is*` name is taken as a marker of
/// the same name; anything else is a trait.
pub fn capability_marker(ty: &Type) -> Option<TokenStream> {
    let name = quote!(#ty).to_string().replace(' ', "");
    if let Some((_, marker)) = CAPABILITY_KEYWORDS.iter().find(|(kw, _)| *kw == name) {
        let marker = quote::format_ident!("{}", marker);
        return Some(quote! { ::tola_ranges::capability::#marker });
    }
    let is_marker = name.len() > 2
        && name.starts_with("Is")
        && name[2..].starts_with(|c: char| c.is_ascii_uppercase())
        && !name.contains(['<', ':']);
    if is_marker {
        let marker = quote::format_ident!("{}", name);
        return Some(quote! { ::tola_ranges::capability::#marker });
    }
    None
}

// =============================================================================
// Lowering
// =============================================================================

/// Convert BoolExpr to a requirement type built from the concept combinators.
///
/// Keywords become capability markers; other names are used as given and
/// must themselves be requirement types.
pub fn bool_expr_to_type(expr: &BoolExpr) -> TokenStream {
    match expr {
        BoolExpr::Req(ty) => capability_marker(ty).unwrap_or_else(|| quote! { #ty }),
        BoolExpr::And(lhs, rhs) => {
            let l = bool_expr_to_type(lhs);
            let r = bool_expr_to_type(rhs);
            quote! { ::tola_ranges::concept::And<#l, #r> }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = bool_expr_to_type(lhs);
            let r = bool_expr_to_type(rhs);
            quote! { ::tola_ranges::concept::Or<#l, #r> }
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_type(operand);
            quote! { ::tola_ranges::concept::Not<#o> }
        }
    }
}

// =============================================================================
// concept_check! lowering
// =============================================================================

/// Generate a `bool` expression answering `expr` for `ty`.
///
/// Capability markers go through `models`, which is total over sequences
/// and also works for generic `ty` bounded on `Sequence`. Any other trait
/// is answered by an inherent-const probe, which only sees the truth for
/// concrete types.
///
/// NOT is applied to the answer of its operand, so `!Trait` on a generic
/// type is `true` (the probe answers "unknown" as `false`).
pub fn generate_check(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Req(req) => match capability_marker(req) {
            Some(marker) => quote! { ::tola_ranges::concept::models::<#marker, #ty>() },
            None => generate_single_probe(req, ty),
        },
        BoolExpr::And(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_check(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single probe check for one trait
fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #trait_ty> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
