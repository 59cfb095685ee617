//! Family-tree pipeline facade.
//!
//! # Responsibility
//! - Own the person store, layout config, current scene and drag state.
//! - Turn store change notifications into explicit pipeline reruns
//!   (hierarchy rebuild + layout) instead of ambient reactivity.
//!
//! # Invariants
//! - Single-threaded and event-driven: every mutation completes, its
//!   notification is drained, and the rebuild runs to completion before
//!   control returns to the caller.
//! - Clearing requires explicit confirmation; an unconfirmed clear leaves
//!   all data intact.
//! - A committed drag position is reproduced exactly by the rebuild it
//!   triggers.

use crate::interact::DragController;
use crate::layout::scene::Scene;
use crate::layout::{build_scene, LayoutConfig};
use crate::model::person::{Person, Position};
use crate::snapshot::{self, SnapshotResult};
use crate::store::{PersonStore, StoreChange};
use log::info;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Facade tying the whole core pipeline together for the UI shell.
pub struct FamilyTreeService {
    store: PersonStore,
    changes: Receiver<StoreChange>,
    config: LayoutConfig,
    scene: Scene,
    drag: DragController,
}

impl FamilyTreeService {
    /// Creates an empty service with the default node footprint.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Creates an empty service with a caller-provided layout config.
    pub fn with_config(config: LayoutConfig) -> Self {
        let mut store = PersonStore::new();
        let changes = store.subscribe();
        Self {
            store,
            changes,
            config,
            scene: Scene::default(),
            drag: DragController::new(),
        }
    }

    /// Read access to the durable store (form eligibility lists, exports).
    pub fn store(&self) -> &PersonStore {
        &self.store
    }

    /// The current positioned scene for the renderer.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Layout config in effect.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Adds one person and reruns the pipeline.
    pub fn add_person(&mut self, person: Person) {
        self.store.add(person);
        self.pump();
    }

    /// Clears every person, gated on explicit confirmation.
    ///
    /// Returns whether the store was actually cleared. An unconfirmed clear
    /// is a complete no-op.
    pub fn clear_people(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            info!("event=store_clear module=service status=declined");
            return false;
        }
        self.store.clear();
        self.pump();
        true
    }

    /// Serializes the store to the JSON snapshot format.
    pub fn export_json(&self) -> SnapshotResult<String> {
        snapshot::export_people(self.store.people())
    }

    /// Replaces the store from a JSON snapshot payload.
    ///
    /// The payload is parsed in full before anything is applied; on error
    /// the store and scene are left untouched. Returns the loaded count.
    pub fn import_json(&mut self, payload: &str) -> SnapshotResult<usize> {
        let people = snapshot::parse_people(payload)?;
        let count = people.len();
        self.store.replace_all(people);
        self.pump();
        Ok(count)
    }

    /// Writes the store to a flat file.
    pub fn save_to_path(&self, path: &Path) -> SnapshotResult<()> {
        snapshot::save_to_path(path, self.store.people())
    }

    /// Replaces the store from a flat file.
    pub fn load_from_path(&mut self, path: &Path) -> SnapshotResult<usize> {
        let people = snapshot::load_from_path(path)?;
        let count = people.len();
        self.store.replace_all(people);
        self.pump();
        Ok(count)
    }

    /// Starts a drag gesture on one rendered node.
    pub fn begin_drag(&mut self, id: &str, pointer_x: f64, pointer_y: f64) -> bool {
        self.drag.begin(&mut self.scene, id, pointer_x, pointer_y)
    }

    /// Applies one pointer-move sample; returns the new node center.
    pub fn drag_to(&mut self, pointer_x: f64, pointer_y: f64) -> Option<(f64, f64)> {
        self.drag.drag_to(&mut self.scene, pointer_x, pointer_y)
    }

    /// Ends the active gesture and commits the position into the store.
    ///
    /// The commit triggers the store notification and therefore a full
    /// rebuild; the stored override makes the rebuild reproduce the
    /// committed coordinate. Returns the committed position, or `None` when
    /// no gesture was active.
    pub fn end_drag(&mut self) -> Option<Position> {
        let (id, position) = self.drag.end(&self.scene)?;
        self.store.set_position(&id, position);
        self.pump();
        Some(position)
    }

    /// Drains pending change notifications and reruns the pipeline once.
    fn pump(&mut self) {
        if self.changes.try_iter().count() == 0 {
            return;
        }
        self.scene = build_scene(self.store.people(), &self.config);
    }
}

impl Default for FamilyTreeService {
    fn default() -> Self {
        Self::new()
    }
}
