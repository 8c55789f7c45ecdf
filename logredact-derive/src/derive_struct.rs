//! Struct-specific `Redact` derivation.
//!
//! This module generates the field-by-field rebuild of a struct and collects
//! the type parameters that require where-clause bounds.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    crate_path,
    strategy::parse_field_strategy,
    transform::{field_binding, generate_field_transform, DeriveContext},
    DeriveOutput,
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let redact_path = crate_path("Redact");
    let mut walked_params = Vec::new();
    let mut cloned_params = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        redact_path: &redact_path,
        walked_params: &mut walked_params,
        cloned_params: &mut cloned_params,
    };

    let redaction_body = match data.fields {
        Fields::Named(fields) => derive_named_struct(&mut ctx, fields)?,
        Fields::Unnamed(fields) => derive_unnamed_struct(&mut ctx, fields)?,
        Fields::Unit => quote! { Self },
    };

    Ok(DeriveOutput {
        redaction_body,
        walked_params,
        cloned_params,
    })
}

fn derive_named_struct(
    ctx: &mut DeriveContext<'_>,
    fields: syn::FieldsNamed,
) -> Result<TokenStream> {
    let mut names = Vec::new();
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();

    for (index, field) in fields.named.into_iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let Some(name) = field.ident else {
            return Err(syn::Error::new(span, "named field without an identifier"));
        };
        let binding = field_binding(index);
        transforms.push(generate_field_transform(
            ctx, &field.ty, &binding, span, strategy,
        ));
        names.push(name);
        bindings.push(binding);
    }

    Ok(quote! {
        let Self { #(#names: #bindings),* } = self;
        #(#transforms)*
        Self { #(#names: #bindings),* }
    })
}

fn derive_unnamed_struct(
    ctx: &mut DeriveContext<'_>,
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
        let Self ( #(#bindings),* ) = self;
        #(#transforms)*
        Self ( #(#bindings),* )
    })
}
