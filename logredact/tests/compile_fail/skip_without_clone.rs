//! Test: Skipping a field whose type does not implement `Clone`.
//!
//! Skipped fields are copied verbatim, which requires `Clone`.

use logredact::Redact;

struct Handle;

#[derive(Redact)]
struct Connection {
    name: String,
    // ERROR: Handle doesn't implement Clone
    #[redact(skip)]
    handle: Handle,
}

fn main() {}
