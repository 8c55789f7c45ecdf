//! Test: Walking a field whose type does not implement `Redact`.
//!
//! Interior mutability types have no `Redact` impl. Mark the field
//! `#[redact(skip)]` to clone it, or wrap the data in a type that derives
//! `Redact`.

use std::cell::RefCell;

use logredact::Redact;

#[derive(Clone, Redact)]
struct Session {
    id: String,
    // ERROR: RefCell<String> doesn't implement Redact
    cache: RefCell<String>,
}

fn main() {}
