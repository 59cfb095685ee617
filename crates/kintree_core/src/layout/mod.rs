//! Layout engine: person records in, positioned scene out.
//!
//! # Responsibility
//! - Orchestrate hierarchy building, tidy-tree solving, manual-position
//!   overlay and normalization into one pure `build_scene` pass.
//!
//! # Invariants
//! - Pure function of its input: no shared node objects are mutated, every
//!   call returns a fresh scene. Same store contents, same scene.
//! - Manual placement always wins over the computed coordinate.
//! - After normalization no node sits on the negative side of either axis,
//!   and computed (non-manual) coordinates sit at least `margin` from the
//!   origin.
//! - Every returned edge connects two positioned nodes; edges whose
//!   endpoints were dropped (duplicate-shadowed or cycle members) are
//!   filtered out.

pub mod hierarchy;
pub mod scene;
pub mod tidy;

use crate::model::person::Person;
use hierarchy::Hierarchy;
use log::debug;
use scene::{NodeMetrics, Scene, SceneEdge, SceneNode};
use std::collections::HashMap;
use tidy::TidyConfig;

/// Layout configuration; spacing derives from the node footprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutConfig {
    pub metrics: NodeMetrics,
}

impl LayoutConfig {
    fn tidy(&self) -> TidyConfig {
        let slot = self.metrics.width + self.metrics.horizontal_gap;
        TidyConfig {
            sibling_gap: slot,
            // Nodes from different subtrees keep double spacing, matching
            // the usual tidy-tree separation convention.
            subtree_gap: slot * 2.0,
            level_step: self.metrics.height + self.metrics.vertical_spacing,
        }
    }
}

/// Runs the full pipeline: hierarchy, tidy solve, overrides, normalization,
/// edge re-resolution.
pub fn build_scene(people: &[Person], config: &LayoutConfig) -> Scene {
    let forest = hierarchy::build(people);
    let mut positions = tidy::solve(&forest, &config.tidy());
    if positions.is_empty() {
        return Scene::default();
    }

    let margin = config.metrics.margin;

    // Anchor the computed layout at the margin before manual overrides, so a
    // committed drag position is reproduced exactly by the next rebuild.
    shift_to_margin(&mut positions, margin);

    for (&index, coordinate) in positions.iter_mut() {
        if let Some(manual) = forest.nodes[index].person.position {
            *coordinate = (manual.x, manual.y);
        }
    }

    // Negative-side guard: a manual position dragged past the origin pulls
    // the whole diagram back on-canvas.
    let (min_x, min_y) = minimums(&positions);
    if min_x < 0.0 || min_y < 0.0 {
        let dx = if min_x < 0.0 { margin - min_x } else { 0.0 };
        let dy = if min_y < 0.0 { margin - min_y } else { 0.0 };
        for coordinate in positions.values_mut() {
            coordinate.0 += dx;
            coordinate.1 += dy;
        }
    }

    let scene = assemble(&forest, &positions);
    debug!(
        "event=layout_rebuild module=layout status=ok people={} nodes={} edges={}",
        people.len(),
        scene.nodes.len(),
        scene.edges.len()
    );
    scene
}

fn shift_to_margin(positions: &mut HashMap<usize, (f64, f64)>, margin: f64) {
    let (min_x, min_y) = minimums(positions);
    let dx = margin - min_x;
    let dy = margin - min_y;
    for coordinate in positions.values_mut() {
        coordinate.0 += dx;
        coordinate.1 += dy;
    }
}

fn minimums(positions: &HashMap<usize, (f64, f64)>) -> (f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for &(x, y) in positions.values() {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
    }
    (min_x, min_y)
}

/// Emits nodes in pre-order over the forest (deterministic draw order) and
/// re-resolves edges against the final positioned-node mapping.
fn assemble(forest: &Hierarchy, positions: &HashMap<usize, (f64, f64)>) -> Scene {
    let mut nodes = Vec::with_capacity(positions.len());
    for &root in &forest.roots {
        collect_nodes(forest, root, positions, &mut nodes);
    }

    let positioned: HashMap<&str, (f64, f64)> = nodes
        .iter()
        .map(|node| (node.id.as_str(), (node.x, node.y)))
        .collect();

    let edges = forest
        .edges
        .iter()
        .filter_map(|edge| {
            let &(source_x, source_y) = positioned.get(edge.source.as_str())?;
            let &(target_x, target_y) = positioned.get(edge.target.as_str())?;
            Some(SceneEdge {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
                source_x,
                source_y,
                target_x,
                target_y,
                kind: edge.kind,
            })
        })
        .collect();

    Scene { nodes, edges }
}

fn collect_nodes(
    forest: &Hierarchy,
    index: usize,
    positions: &HashMap<usize, (f64, f64)>,
    out: &mut Vec<SceneNode>,
) {
    if let Some(&(x, y)) = positions.get(&index) {
        let person = &forest.nodes[index].person;
        out.push(SceneNode {
            id: person.id.clone(),
            x,
            y,
            name: person.name.clone(),
            birth_year: person.birth_year,
            gender: person.gender,
        });
    }
    for &child in &forest.nodes[index].children {
        collect_nodes(forest, child, positions, out);
    }
}
