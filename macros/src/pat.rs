use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    token, Expr, Ident, Lifetime, Pat, Token, Type,
};

enum ArmKind {
    /// `pat: Type`, peeling the alternative `Type` off the variant.
    Typed { pat: Pat, ty: Type },
    /// `_`, taking whatever is left.
    Wildcard(Pat),
}

pub struct VariantArm {
    kind: ArmKind,
    guard: Option<Expr>,
    body: Expr,
}

impl Parse for VariantArm {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let pat = Pat::parse_single(input)?;
        let kind = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            ArmKind::Typed {
                pat,
                ty: input.parse()?,
            }
        } else if let Pat::Wild(_) = pat {
            ArmKind::Wildcard(pat)
        } else {
            return Err(syn::Error::new_spanned(
                pat,
                "cannot infer the alternative; annotate the pattern with its type, as in `value: Type`",
            ));
        };

        let guard = if input.peek(Token![if]) {
            let if_token = input.parse::<Token![if]>()?;
            if let ArmKind::Wildcard(_) = kind {
                return Err(syn::Error::new(
                    if_token.span,
                    "the catch-all arm cannot have a guard",
                ));
            }
            Some(input.parse()?)
        } else {
            None
        };
        input.parse::<Token![=>]>()?;

        let body = if input.peek(token::Brace) {
            Expr::Block(input.parse()?)
        } else {
            input.parse()?
        };
        if !input.is_empty() {
            match body {
                Expr::Block(_) => {
                    input.parse::<Option<Token![,]>>()?;
                }
                _ => {
                    input.parse::<Token![,]>()?;
                }
            }
        }

        Ok(VariantArm { kind, guard, body })
    }
}

pub struct VariantMatch {
    expr: Expr,
    arms: Vec<VariantArm>,
}

impl Parse for VariantMatch {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let expr = Expr::parse_without_eager_brace(input)?;

        let content;
        syn::braced!(content in input);

        let mut arms = Vec::new();
        while !content.is_empty() {
            arms.push(content.parse()?);
        }

        Ok(VariantMatch { expr, arms })
    }
}

/// Rejects arms that can never run: a type already taken by an unguarded arm,
/// or anything after a wildcard.
fn check_arms(arms: &[VariantArm]) -> Option<syn::Error> {
    let mut seen: Vec<&Type> = Vec::new();
    let mut wildcard = false;
    for arm in arms {
        if wildcard {
            let err = match &arm.kind {
                ArmKind::Typed { pat, .. } | ArmKind::Wildcard(pat) => {
                    syn::Error::new_spanned(pat, "unreachable arm after a wildcard arm")
                }
            };
            return Some(err);
        }
        match &arm.kind {
            ArmKind::Typed { ty, .. } if seen.contains(&ty) => {
                return Some(syn::Error::new_spanned(
                    ty,
                    "this alternative is already matched by an earlier arm",
                ));
            }
            ArmKind::Typed { ty, .. } if arm.guard.is_none() => seen.push(ty),
            ArmKind::Typed { .. } => {}
            ArmKind::Wildcard(_) => wildcard = true,
        }
    }
    None
}

pub fn expand_match(data: VariantMatch) -> TokenStream {
    let VariantMatch { expr, arms } = data;
    if let Some(err) = check_arms(&arms) {
        return err.to_compile_error();
    }

    let base = Ident::new("__variant_match_base", Span::mixed_site());
    let rest = Ident::new("__variant_match_rest", Span::mixed_site());
    let value = Ident::new("__variant_match_value", Span::mixed_site());
    let restore = Ident::new("__variant_match_restore", Span::mixed_site());
    let label = Lifetime::new("'__variant_match_body", Span::mixed_site());

    let branches = arms.iter().filter_map(|arm| {
        let ArmKind::Typed { pat, ty } = &arm.kind else {
            return None;
        };
        let body = &arm.body;
        // A guarded arm may decline the value, so it cannot narrow the
        // variant: the value is put back and later arms see the same type.
        Some(match &arm.guard {
            Some(guard) => quote! {
                let #base = match #base.peel::<#ty, _>() {
                    #[allow(unreachable_code)]
                    ::core::result::Result::Ok((#pat, _)) if #guard => break #label { #body },
                    ::core::result::Result::Ok((#value, #restore)) => #restore(#value),
                    ::core::result::Result::Err(#rest) => #rest,
                };
            },
            None => quote! {
                let #base = match #base.try_unwrap::<#ty, _>() {
                    #[allow(unreachable_code)]
                    ::core::result::Result::Ok(#pat) => break #label { #body },
                    ::core::result::Result::Err(#rest) => #rest,
                };
            },
        })
    });

    let tail = match arms.last() {
        Some(VariantArm {
            kind: ArmKind::Wildcard(_),
            body,
            ..
        }) => quote! {
            ::core::mem::drop(#base);
            #body
        },
        _ => quote!(#base.exhausted()),
    };

    let typed = arms
        .iter()
        .any(|arm| matches!(arm.kind, ArmKind::Typed { .. }));
    let body = if typed {
        quote! {
            #label: {
                #(#branches)*
                #tail
            }
        }
    } else {
        quote!({ #tail })
    };

    quote! {{
        let #base = #expr;
        #body
    }}
}
