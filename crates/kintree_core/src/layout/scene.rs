//! Positioned output handed to the rendering collaborator.
//!
//! # Responsibility
//! - Describe the diagram as positioned nodes plus connector endpoints,
//!   enough for the renderer to draw cards and cubic curves without any
//!   knowledge of the layout algorithm.
//!
//! # Invariants
//! - Node order is draw order; the interaction controller raises a dragged
//!   node by moving it to the back of the list.
//! - Edge endpoints always mirror the centers of their source/target nodes;
//!   `set_node_center` keeps them in lockstep during a drag.

use crate::layout::hierarchy::EdgeKind;
use crate::model::person::{Gender, PersonId};
use serde::Serialize;

/// One visible person card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: PersonId,
    /// Center x in layout space.
    pub x: f64,
    /// Center y in layout space.
    pub y: f64,
    pub name: String,
    pub birth_year: i32,
    pub gender: Gender,
}

/// One parent→child connector between two positioned nodes.
///
/// Coordinates are the node centers; [`SceneEdge::curve`] derives the
/// drawable cubic from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEdge {
    pub source_id: PersonId,
    pub target_id: PersonId,
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub kind: EdgeKind,
}

/// Fixed node footprint and spacing, shared by layout and curve geometry.
#[derive(Debug, Clone, Copy)]
pub struct NodeMetrics {
    /// Card width.
    pub width: f64,
    /// Card height.
    pub height: f64,
    /// Horizontal gap between adjacent sibling cards.
    pub horizontal_gap: f64,
    /// Vertical gap between a parent's bottom edge and a child's top edge.
    pub vertical_spacing: f64,
    /// Minimum distance from the origin after normalization.
    pub margin: f64,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        // Footprint and spacing of the original diagram.
        Self {
            width: 180.0,
            height: 220.0,
            horizontal_gap: 50.0,
            vertical_spacing: 150.0,
            margin: 50.0,
        }
    }
}

/// A cubic Bezier from parent bottom-center to child top-center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CubicCurve {
    pub x0: f64,
    pub y0: f64,
    pub cx0: f64,
    pub cy0: f64,
    pub cx1: f64,
    pub cy1: f64,
    pub x1: f64,
    pub y1: f64,
}

impl SceneEdge {
    /// Derives the drawable cubic for this connector.
    ///
    /// Anchors at the parent card's bottom-center and the child card's
    /// top-center, with vertical control points half the level spacing away.
    pub fn curve(&self, metrics: &NodeMetrics) -> CubicCurve {
        let half_height = metrics.height / 2.0;
        let pull = metrics.vertical_spacing / 2.0;
        CubicCurve {
            x0: self.source_x,
            y0: self.source_y + half_height,
            cx0: self.source_x,
            cy0: self.source_y + half_height + pull,
            cx1: self.target_x,
            cy1: self.target_y - half_height - pull,
            x1: self.target_x,
            y1: self.target_y - half_height,
        }
    }
}

/// Full positioned diagram: what the renderer draws, nothing more.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    /// Looks up one node by person id.
    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Moves a node to the back of the draw order so it renders on top.
    ///
    /// Returns `false` when the id is not part of the scene.
    pub fn raise(&mut self, id: &str) -> bool {
        let Some(index) = self.nodes.iter().position(|node| node.id == id) else {
            return false;
        };
        let node = self.nodes.remove(index);
        self.nodes.push(node);
        true
    }

    /// Moves one node's center and every connector endpoint touching it.
    ///
    /// Only the named node moves; this is the live-update path of a drag
    /// gesture. Returns `false` when the id is not part of the scene.
    pub fn set_node_center(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|node| node.id == id) else {
            return false;
        };
        node.x = x;
        node.y = y;
        for edge in &mut self.edges {
            if edge.source_id == id {
                edge.source_x = x;
                edge.source_y = y;
            }
            if edge.target_id == id {
                edge.target_x = x;
                edge.target_y = y;
            }
        }
        true
    }

    /// Connectors touching one node, in edge order.
    pub fn edges_touching(&self, id: &str) -> Vec<&SceneEdge> {
        self.edges
            .iter()
            .filter(|edge| edge.source_id == id || edge.target_id == id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeMetrics, Scene, SceneEdge, SceneNode};
    use crate::layout::hierarchy::EdgeKind;
    use crate::model::person::Gender;

    fn node(id: &str, x: f64, y: f64) -> SceneNode {
        SceneNode {
            id: id.to_string(),
            x,
            y,
            name: id.to_string(),
            birth_year: 1960,
            gender: Gender::Other,
        }
    }

    fn edge(source: &str, target: &str, scene: &Scene) -> SceneEdge {
        let s = scene.node(source).unwrap();
        let t = scene.node(target).unwrap();
        SceneEdge {
            source_id: source.to_string(),
            target_id: target.to_string(),
            source_x: s.x,
            source_y: s.y,
            target_x: t.x,
            target_y: t.y,
            kind: EdgeKind::Father,
        }
    }

    #[test]
    fn curve_anchors_at_bottom_and_top_centers() {
        let mut scene = Scene::default();
        scene.nodes.push(node("p", 100.0, 50.0));
        scene.nodes.push(node("c", 100.0, 420.0));
        let e = edge("p", "c", &scene);

        let metrics = NodeMetrics::default();
        let curve = e.curve(&metrics);
        assert_eq!(curve.y0, 50.0 + 110.0);
        assert_eq!(curve.y1, 420.0 - 110.0);
        assert_eq!(curve.cy0, curve.y0 + 75.0);
        assert_eq!(curve.cy1, curve.y1 - 75.0);
        assert_eq!(curve.x0, 100.0);
        assert_eq!(curve.x1, 100.0);
    }

    #[test]
    fn set_node_center_tracks_touching_edges_only() {
        let mut scene = Scene::default();
        scene.nodes.push(node("p", 0.0, 0.0));
        scene.nodes.push(node("c", 0.0, 370.0));
        scene.nodes.push(node("other", 500.0, 0.0));
        let e = edge("p", "c", &scene);
        scene.edges.push(e);

        assert!(scene.set_node_center("c", 42.0, 400.0));
        assert_eq!(scene.edges[0].target_x, 42.0);
        assert_eq!(scene.edges[0].target_y, 400.0);
        assert_eq!(scene.edges[0].source_x, 0.0);
        assert_eq!(scene.node("other").unwrap().x, 500.0);
    }

    #[test]
    fn raise_moves_node_to_back_of_draw_order() {
        let mut scene = Scene::default();
        scene.nodes.push(node("a", 0.0, 0.0));
        scene.nodes.push(node("b", 10.0, 0.0));
        assert!(scene.raise("a"));
        let order: Vec<&str> = scene.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert!(!scene.raise("missing"));
    }
}
