//! Structure-preserving redaction for log messages and structured fields.
//!
//! A [`PatternSet`] is an ordered list of compiled patterns plus one
//! replacement token. A [`Redactor`] applies it to every string it can reach
//! inside a value and returns a deep copy with the same shape.
//!
//! Two ways to describe a value:
//! - **Dynamic**: [`Value`], a closed enum of strings, optionals, records,
//!   sequences, mappings and opaque leaves. Logging hooks capture fields
//!   into it and call [`Redactor::redact_field`].
//! - **Typed**: any type implementing [`Redact`]. Std containers are covered;
//!   structs and enums use `#[derive(Redact)]`. Call [`Redactor::redact`].
//!
//! Key rules:
//! - Only string contents change. Mapping keys, set elements, record names and
//!   field names are copied verbatim.
//! - Replacements are literal; `$1` in the token is not expanded.
//! - Patterns compile eagerly, so a bad pattern fails construction.
//!
//! ```
//! use logredact::{Redact, Redactor};
//!
//! #[derive(Clone, Debug, PartialEq, Redact)]
//! struct Login {
//!     user: String,
//!     note: Option<String>,
//!     attempts: u32,
//! }
//!
//! let redactor = Redactor::new(["hunter2"], "***").unwrap();
//! let login = Login {
//!     user: "alice".into(),
//!     note: Some("password hunter2".into()),
//!     attempts: 3,
//! };
//! let redacted = redactor.redact(&login);
//! assert_eq!(redacted.note.as_deref(), Some("password ***"));
//! assert_eq!(redacted.attempts, 3);
//! ```
//!
//! The `slog` feature adds [`slog::RedactDrain`], a drain that redacts every
//! record before forwarding it.

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
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use logredact_derive::Redact;

#[allow(unused_extern_crates)]
extern crate self as logredact;

// Module declarations
mod config;
mod error;
mod pattern;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
mod value;

// Re-exports
pub use config::{RedactorConfig, DEFAULT_REPLACEMENT};
pub use error::{Error, InvalidPatternError, Result};
pub use pattern::PatternSet;
pub use redaction::{Event, Redact, RedactionMapper, Redactor};
pub use value::{Fields, Key, Opaque, Record, Shape, Value};
