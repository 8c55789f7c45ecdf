//! Derive macros for `logredact`.
//!
//! This crate generates the traversal code behind `#[derive(Redact)]`. It:
//! - reads `#[redact(...)]` container and field attributes
//! - emits a `Redact` implementation that rebuilds the value field by field,
//!   calling into a `RedactionMapper` for every string leaf
//!
//! It does **not** compile patterns or apply them. That lives in the main
//! `logredact` crate and happens at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_param_bounds;

/// Derives `logredact::Redact` for structs and enums.
///
/// The generated `redact_with` borrows `self` and returns a freshly built value
/// of the same type. Every field is redacted in declaration order: strings go
/// through the mapper, containers recurse, scalars are copied.
///
/// # Container Attributes
///
/// - `#[redact(opaque)]` - Treat the whole type as opaque. The value is cloned
///   verbatim and never traversed. Requires `Clone`.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked through its `Redact` impl. A field
///   type without one is a compile error, never a silent skip.
/// - `#[redact(skip)]`: the field is cloned verbatim. Use this for external
///   types that carry no string content (or whose content must stay intact).
///   The field type must implement `Clone`.
///
/// Unions are rejected at compile time.
///
/// # Generics
///
/// Bounds are placed on the type parameters a field mentions: a walked field
/// of type `Vec<T>` adds `T: Redact`, a skipped field of type `U` adds
/// `U: Clone`. `PhantomData<T>` fields add no bound, so recursive generic
/// types such as `Node<T> { children: Vec<Node<T>> }` derive cleanly.
#[proc_macro_derive(Redact, attributes(redact))]
pub fn derive_redact(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the logredact crate root.
///
/// Handles crate renaming (e.g., `redact = { package = "logredact", ... }`).
/// Inside logredact itself the crate re-exports itself as `logredact`, so the
/// absolute path works for the library, its unit tests and its integration
/// tests alike.
fn crate_root() -> TokenStream {
    match crate_name("logredact") {
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::logredact },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { opaque } = parse_container_options(&attrs)?;

    let redact_path = crate_path("Redact");
    let mapper_path = crate_path("RedactionMapper");

    if opaque {
        let mut generics = generics;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: ::core::clone::Clone));
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        return Ok(quote! {
            impl #impl_generics #redact_path for #ident #ty_generics #where_clause {
                fn redact_with<M: #mapper_path + ?Sized>(&self, _mapper: &M) -> Self {
                    ::core::clone::Clone::clone(self)
                }
            }
        });
    }

    let output = match data {
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(&ident, data, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Redact` cannot be derived for unions; use `#[redact(opaque)]` to clone them verbatim",
            ));
        }
    };

    let generics = add_param_bounds(generics, &output.walked_params, &output.cloned_params);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let body = &output.redaction_body;

    Ok(quote! {
        impl #impl_generics #redact_path for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn redact_with<M: #mapper_path + ?Sized>(&self, mapper: &M) -> Self {
                #body
            }
        }
    })
}

/// Output shared by the struct and enum derivations.
pub(crate) struct DeriveOutput {
    pub(crate) redaction_body: TokenStream,
    /// Type parameters reached by walked fields.
    pub(crate) walked_params: Vec<syn::Ident>,
    /// Type parameters reached by skipped fields.
    pub(crate) cloned_params: Vec<syn::Ident>,
}
