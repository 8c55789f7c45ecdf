//! `#[redact(...)]` on the struct or enum itself.

use syn::{meta::ParseNestedMeta, Attribute, Meta, Result};

/// What the type-level attributes asked for.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Clone the value instead of traversing it.
    pub(crate) opaque: bool,
}

impl ContainerOptions {
    fn apply(&mut self, meta: &ParseNestedMeta<'_>) -> Result<()> {
        let name = meta
            .path
            .get_ident()
            .map_or_else(|| String::from("?"), ToString::to_string);
        match name.as_str() {
            "opaque" if self.opaque => Err(meta.error("`opaque` given twice")),
            "opaque" => {
                self.opaque = true;
                Ok(())
            }
            _ => Err(meta.error(format_args!(
                "unknown container option `{name}`; expected `opaque`"
            ))),
        }
    }
}

/// Folds every `#[redact(...)]` on the container into one set of options.
///
/// A bare `#[redact]` asks for the default traversal and is accepted.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("redact")) {
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(_) => attr.parse_nested_meta(|meta| options.apply(&meta))?,
            Meta::NameValue(name_value) => {
                return Err(syn::Error::new_spanned(
                    &name_value.value,
                    "write `#[redact(opaque)]`; `#[redact = ...]` is not accepted on a type",
                ));
            }
        }
    }
    Ok(options)
}
