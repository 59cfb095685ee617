//! Domain model for family-tree records.
//!
//! # Responsibility
//! - Define the canonical person record shared by store, layout and snapshot.
//! - Keep wire naming stable for the external JSON channel.
//!
//! # Invariants
//! - `Person.id` is treated as stable once created; uniqueness is assumed,
//!   not enforced (duplicate ids shadow earlier entries in lookups).
//! - Parent references may dangle; dangling is data, not an error.

pub mod person;
