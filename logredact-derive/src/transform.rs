//! Shared field transformation logic for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote_spanned};

use crate::{generics::collect_type_params, strategy::Strategy};

/// Accumulated state during field processing.
///
/// Collects the type parameters that need where-clause bounds while the
/// struct fields or enum variants are walked.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) redact_path: &'a TokenStream,
    pub(crate) walked_params: &'a mut Vec<Ident>,
    pub(crate) cloned_params: &'a mut Vec<Ident>,
}

/// Local name for the field at `index`.
///
/// Fields are never bound under their own names, so a field called `mapper`
/// cannot shadow the mapper argument.
pub(crate) fn field_binding(index: usize) -> Ident {
    format_ident!("field_{index}")
}

/// Generates the transform token stream for a single field.
///
/// `binding` refers to the field by reference (the traversal destructures
/// `&self`), and is rebound to the owned, redacted value.
///
/// | Strategy | Generated code |
/// |----------|----------------|
/// | `Walk` | `let f = Redact::redact_with(f, mapper);` |
/// | `Skip` | `let f = Clone::clone(f);` |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: Strategy,
) -> TokenStream {
    let redact_path = ctx.redact_path;

    match strategy {
        Strategy::Walk => {
            collect_type_params(ty, ctx.generics, ctx.walked_params);
            quote_spanned! { span =>
                let #binding = #redact_path::redact_with(#binding, mapper);
            }
        }
        Strategy::Skip => {
            collect_type_params(ty, ctx.generics, ctx.cloned_params);
            quote_spanned! { span =>
                let #binding = ::core::clone::Clone::clone(#binding);
            }
        }
    }
}
