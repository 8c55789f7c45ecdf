//! Parsing of `#[redact(...)]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field transformation strategy based on `#[redact(...)]` attributes.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Walk` | Field is redacted through its `Redact` impl |
/// | `#[redact(skip)]` | `Skip` | Field is cloned verbatim |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Default: redact the field through `Redact::redact_with`.
    Walk,
    /// `#[redact(skip)]`: clone the field without inspecting it.
    Skip,
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[redact] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "bare #[redact] has no effect on a field; fields are redacted by default \
                    (use #[redact(skip)] to copy a field verbatim)",
                ));
            }
            Meta::List(list) => {
                let mut parsed = None;
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        parsed = Some(Strategy::Skip);
                        Ok(())
                    } else {
                        Err(meta.error("unknown field option; expected `skip`"))
                    }
                })?;
                if let Some(next) = parsed {
                    set_strategy(&mut strategy, next, attr.span())?;
                }
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[redact]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Walk))
}
