//! The contact directory aggregate.
//!
//! This module owns the collection of contacts and enforces its invariants:
//! required fields on insertion and at most one contact per email.

pub mod contact_directory;
pub mod field;

pub use contact_directory::{ContactDirectory, EditPolicy};
pub use field::ContactField;
