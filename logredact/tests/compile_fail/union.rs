//! Test: Deriving `Redact` for a union.
//!
//! Union fields cannot be inspected safely, so the derive refuses them.
//! Use `#[redact(opaque)]` on a `Clone` union to copy it verbatim.

use logredact::Redact;

#[derive(Redact)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
