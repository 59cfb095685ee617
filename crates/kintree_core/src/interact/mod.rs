//! Drag-gesture controller for repositioning rendered nodes.
//!
//! # Responsibility
//! - Translate pointer gestures into live scene updates and one committed
//!   position per gesture.
//!
//! # Invariants
//! - State machine is Idle → Dragging → Idle; at most one gesture is active.
//! - Gesture start captures the pointer-to-center offset and raises the node
//!   in draw order.
//! - Every move reuses the same connector geometry as the initial render, so
//!   links track the node continuously.
//! - Moves without an active gesture are no-ops.
//! - A gesture that never receives its end event leaks nothing beyond the
//!   captured offset.

use crate::layout::scene::Scene;
use crate::model::person::{PersonId, Position};
use log::debug;

#[derive(Debug)]
struct ActiveDrag {
    id: PersonId,
    offset_x: f64,
    offset_y: f64,
}

/// Gesture state machine for node dragging.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a gesture on one node.
    ///
    /// Captures the offset between the pointer and the node's current center
    /// and raises the node to the top of the draw order. Returns `false`
    /// when the node is unknown or another gesture is already active.
    pub fn begin(&mut self, scene: &mut Scene, id: &str, pointer_x: f64, pointer_y: f64) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(node) = scene.node(id) else {
            return false;
        };
        let offset_x = pointer_x - node.x;
        let offset_y = pointer_y - node.y;
        scene.raise(id);
        debug!("event=drag_begin module=interact status=ok id={id}");
        self.active = Some(ActiveDrag {
            id: id.to_string(),
            offset_x,
            offset_y,
        });
        true
    }

    /// Applies one pointer-move sample to the active gesture.
    ///
    /// The new node center is the pointer position minus the captured
    /// offset; the scene updates the node and every touching connector in
    /// one step. Only the latest sample matters, so dropped intermediate
    /// frames are harmless. Returns the new center, or `None` when idle.
    pub fn drag_to(
        &mut self,
        scene: &mut Scene,
        pointer_x: f64,
        pointer_y: f64,
    ) -> Option<(f64, f64)> {
        let drag = self.active.as_ref()?;
        let x = pointer_x - drag.offset_x;
        let y = pointer_y - drag.offset_y;
        if scene.set_node_center(&drag.id, x, y) {
            Some((x, y))
        } else {
            None
        }
    }

    /// Ends the active gesture.
    ///
    /// Clears the captured offset and returns the node's last live center as
    /// the position to commit into the person store. Returns `None` when no
    /// gesture was active.
    pub fn end(&mut self, scene: &Scene) -> Option<(PersonId, Position)> {
        let drag = self.active.take()?;
        let node = scene.node(&drag.id)?;
        debug!(
            "event=drag_end module=interact status=ok id={} x={} y={}",
            drag.id, node.x, node.y
        );
        Some((drag.id, Position {
            x: node.x,
            y: node.y,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::DragController;
    use crate::layout::scene::{Scene, SceneNode};
    use crate::model::person::Gender;

    fn scene_with(ids: &[(&str, f64, f64)]) -> Scene {
        let mut scene = Scene::default();
        for &(id, x, y) in ids {
            scene.nodes.push(SceneNode {
                id: id.to_string(),
                x,
                y,
                name: id.to_string(),
                birth_year: 1970,
                gender: Gender::Other,
            });
        }
        scene
    }

    #[test]
    fn begin_captures_offset_and_raises_node() {
        let mut scene = scene_with(&[("a", 100.0, 200.0), ("b", 300.0, 200.0)]);
        let mut drag = DragController::new();

        assert!(drag.begin(&mut scene, "a", 110.0, 190.0));
        assert!(drag.is_dragging());
        assert_eq!(scene.nodes.last().unwrap().id, "a");

        // Offset (10, -10): pointer at (210, 90) puts the center at (200, 100).
        let center = drag.drag_to(&mut scene, 210.0, 90.0).unwrap();
        assert_eq!(center, (200.0, 100.0));
    }

    #[test]
    fn move_without_begin_is_a_noop() {
        let mut scene = scene_with(&[("a", 100.0, 200.0)]);
        let mut drag = DragController::new();
        assert_eq!(drag.drag_to(&mut scene, 50.0, 50.0), None);
        assert_eq!(scene.node("a").unwrap().x, 100.0);
    }

    #[test]
    fn end_returns_last_live_center_and_resets_state() {
        let mut scene = scene_with(&[("a", 100.0, 200.0)]);
        let mut drag = DragController::new();
        drag.begin(&mut scene, "a", 100.0, 200.0);
        drag.drag_to(&mut scene, 400.0, 500.0);

        let (id, position) = drag.end(&scene).unwrap();
        assert_eq!(id, "a");
        assert_eq!((position.x, position.y), (400.0, 500.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(&scene), None);
    }

    #[test]
    fn second_begin_while_active_is_rejected() {
        let mut scene = scene_with(&[("a", 0.0, 0.0), ("b", 50.0, 0.0)]);
        let mut drag = DragController::new();
        assert!(drag.begin(&mut scene, "a", 0.0, 0.0));
        assert!(!drag.begin(&mut scene, "b", 50.0, 0.0));
    }

    #[test]
    fn begin_on_unknown_node_is_rejected() {
        let mut scene = scene_with(&[("a", 0.0, 0.0)]);
        let mut drag = DragController::new();
        assert!(!drag.begin(&mut scene, "missing", 0.0, 0.0));
        assert!(!drag.is_dragging());
    }
}
