//! Traversal and entrypoints.
//!
//! - **`traverse`**: the [`Redact`] trait and its implementations for std
//!   types and [`crate::Value`]
//! - **`redactor`**: [`Redactor`], the entrypoint a logging hook holds
//! - **`event`**: [`Event`], a framework-neutral message plus field bag
//!
//! Pattern compilation lives in `crate::pattern`.

mod event;
mod redactor;
mod traverse;

pub use event::Event;
pub use redactor::Redactor;
pub use traverse::Redact;

/// Maps string leaves to their redacted form.
///
/// This is the seam between traversal and pattern application: traversal
/// decides *where* strings are, the mapper decides what they become.
pub trait RedactionMapper {
    /// Returns the redacted form of `value`.
    fn map_str(&self, value: &str) -> String;
}
