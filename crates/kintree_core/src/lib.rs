//! Core domain logic for the Kintree family-tree builder.
//! This crate is the single source of truth for hierarchy, layout and
//! interaction semantics; UI shells consume it in-process.

pub mod interact;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod store;

pub use interact::DragController;
pub use layout::hierarchy::{Edge, EdgeKind, Hierarchy, HierarchyNode};
pub use layout::scene::{CubicCurve, NodeMetrics, Scene, SceneEdge, SceneNode};
pub use layout::{build_scene, LayoutConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Gender, Person, PersonId, Position};
pub use service::tree_service::FamilyTreeService;
pub use snapshot::{SnapshotError, SnapshotResult};
pub use store::{PersonStore, StoreChange};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
