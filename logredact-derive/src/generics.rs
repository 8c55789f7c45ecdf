//! Generic type parameter handling and trait bound management.
//!
//! Bounds go on the type parameters a field type mentions (`T: Redact`,
//! `T: Clone`), never on the field types themselves. A bound such as
//! `Vec<Node<T>>: Redact` on a recursive type would ask the compiler to prove
//! the impl it is defining and overflow.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when looking for generic parameters:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T should NOT require Redact
//! }
//! ```
//!
//! `PhantomData<T>` implements `Redact` for every `T`, so the field needs no
//! bound and `TypedId<SystemTime>` keeps working.

use syn::{parse_quote, Ident};

use crate::crate_path;

/// Pushes every type parameter of `generics` that `ty` mentions onto `found`,
/// once each.
pub(crate) fn collect_type_params(
    ty: &syn::Type,
    generics: &syn::Generics,
    found: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(qself) = &path.qself {
                collect_type_params(&qself.ty, generics, found);
            }
            if path.path.leading_colon.is_none() {
                if let Some(first) = path.path.segments.first() {
                    if let Some(param) = generics.type_params().find(|p| first.ident == p.ident) {
                        if !found.contains(&param.ident) {
                            found.push(param.ident.clone());
                        }
                    }
                }
            }
            for segment in &path.path.segments {
                if segment.ident == "PhantomData" {
                    return;
                }
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner) = arg {
                            collect_type_params(inner, generics, found);
                        }
                    }
                }
            }
        }
        syn::Type::Array(array) => collect_type_params(&array.elem, generics, found),
        syn::Type::Slice(slice) => collect_type_params(&slice.elem, generics, found),
        syn::Type::Reference(reference) => collect_type_params(&reference.elem, generics, found),
        syn::Type::Paren(paren) => collect_type_params(&paren.elem, generics, found),
        syn::Type::Group(group) => collect_type_params(&group.elem, generics, found),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_type_params(elem, generics, found);
            }
        }
        _ => {}
    }
}

/// Adds `T: Redact` for parameters reached by walked fields and `T: Clone`
/// for parameters reached by skipped fields.
pub(crate) fn add_param_bounds(
    mut generics: syn::Generics,
    walked_params: &[Ident],
    cloned_params: &[Ident],
) -> syn::Generics {
    if walked_params.is_empty() && cloned_params.is_empty() {
        return generics;
    }
    let redact_path = crate_path("Redact");
    let where_clause = generics.make_where_clause();
    for param in walked_params {
        where_clause.predicates.push(parse_quote!(#param: #redact_path));
    }
    for param in cloned_params {
        where_clause
            .predicates
            .push(parse_quote!(#param: ::core::clone::Clone));
    }
    generics
}
