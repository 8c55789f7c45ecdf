//! Enum-specific `Redact` derivation.
//!
//! This module generates one match arm per variant. Each arm destructures the
//! borrowed variant, redacts its fields and rebuilds the same variant.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    crate_path,
    strategy::parse_field_strategy,
    transform::{field_binding, generate_field_transform, DeriveContext},
    DeriveOutput,
};

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let redact_path = crate_path("Redact");
    let mut arms = Vec::new();
    let mut walked_params = Vec::new();
    let mut cloned_params = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        redact_path: &redact_path,
        walked_params: &mut walked_params,
        cloned_params: &mut cloned_params,
    };

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let arm = match variant.fields {
            Fields::Unit => quote! { #name::#variant_ident => #name::#variant_ident },
            Fields::Named(fields) => derive_named_variant(&mut ctx, name, variant_ident, fields)?,
            Fields::Unnamed(fields) => {
                derive_unnamed_variant(&mut ctx, name, variant_ident, fields)?
            }
        };
        arms.push(arm);
    }

    // An uninhabited enum has no value to redact.
    let redaction_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms),*
            }
        }
    };

    Ok(DeriveOutput {
        redaction_body,
        walked_params,
        cloned_params,
    })
}

fn derive_named_variant(
    ctx: &mut DeriveContext<'_>,
    name: &Ident,
    variant_ident: &Ident,
    fields: syn::FieldsNamed,
) -> Result<TokenStream> {
    let mut names = Vec::new();
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();

    for (index, field) in fields.named.into_iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let Some(field_name) = field.ident else {
            return Err(syn::Error::new(span, "named field without an identifier"));
        };
        let binding = field_binding(index);
        transforms.push(generate_field_transform(
            ctx, &field.ty, &binding, span, strategy,
        ));
        names.push(field_name);
        bindings.push(binding);
    }

    Ok(quote! {
        #name::#variant_ident { #(#names: #bindings),* } => {
            #(#transforms)*
            #name::#variant_ident { #(#names: #bindings),* }
        }
    })
}

fn derive_unnamed_variant(
    ctx: &mut DeriveContext<'_>,
    name: &Ident,
    variant_ident: &Ident,
    fields: syn::FieldsUnnamed,
) -> Result<TokenStream> {
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let ident = field_binding(index);
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        transforms.push(generate_field_transform(
            ctx, &field.ty, &ident, span, strategy,
        ));
        bindings.push(ident);
    }

    Ok(quote! {
        #name::#variant_ident ( #(#bindings),* ) => {
            #(#transforms)*
            #name::#variant_ident ( #(#bindings),* )
        }
    })
}
