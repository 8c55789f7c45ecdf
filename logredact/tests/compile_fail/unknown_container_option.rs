//! Test: Using an unknown container option.

use logredact::Redact;

#[derive(Clone, Redact)]
#[redact(transparent)]
struct Token(String);

fn main() {}
