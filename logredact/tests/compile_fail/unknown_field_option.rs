//! Test: Using an option the derive does not know.
//!
//! Field options are `skip` only; patterns are configured at runtime.

use logredact::Redact;

#[derive(Clone, Redact)]
struct Login {
    // ERROR: `mask` is not a field option
    #[redact(mask)]
    password: String,
}

fn main() {}
