//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kintree_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use kintree_core::{FamilyTreeService, Gender, Person};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the UI shell and FFI runtime setup.
    println!("kintree_core ping={}", kintree_core::ping());
    println!("kintree_core version={}", kintree_core::core_version());

    let mut service = FamilyTreeService::new();
    service.add_person(Person::with_id("1", "Alice", 1950, Gender::Female));
    service.add_person(Person::with_id("2", "Bob", 1980, Gender::Male).mother("1"));
    println!(
        "sample scene nodes={} edges={}",
        service.scene().nodes.len(),
        service.scene().edges.len()
    );
}
