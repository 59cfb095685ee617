//! FFI boundary crate for UI shells consuming the family-tree core.

pub mod api;
