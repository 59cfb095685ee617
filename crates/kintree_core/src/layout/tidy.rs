//! Tidy-tree coordinate solver.
//!
//! # Responsibility
//! - Assign every forest node reachable from a root a deterministic (x, y)
//!   based only on tree topology and fixed spacing constants.
//!
//! # Invariants
//! - Same forest in, same coordinates out.
//! - Adjacent sibling roots sit at least `sibling_gap` apart; nodes from
//!   different subtrees at least `subtree_gap` apart on every shared level,
//!   so sibling subtrees never overlap horizontally.
//! - A parent is centered over its first and last child.
//! - y is depth-proportional: roots at 0, each level `level_step` lower.
//!
//! The forest is wrapped under one synthetic super-root so the solver always
//! has a non-empty single-tree input; the super-root is not part of the
//! output. Nodes unreachable from any root (cycle members) receive no
//! coordinate and are dropped downstream.

use crate::layout::hierarchy::Hierarchy;
use std::collections::HashMap;

/// Spacing constants for the solver, in layout-space units.
#[derive(Debug, Clone, Copy)]
pub struct TidyConfig {
    /// Minimum center distance between adjacent siblings.
    pub sibling_gap: f64,
    /// Minimum center distance between nodes of different subtrees.
    pub subtree_gap: f64,
    /// Vertical distance between consecutive levels.
    pub level_step: f64,
}

/// Horizontal extent of a subtree per level, relative to its root at x = 0.
struct Contour {
    left: Vec<f64>,
    right: Vec<f64>,
}

impl Contour {
    fn leaf() -> Self {
        Self {
            left: vec![0.0],
            right: vec![0.0],
        }
    }
}

/// Solves coordinates for every node reachable from a root.
///
/// Returns a fresh id-free mapping from node index to (x, y); callers key it
/// back to persons. x values are centered around the forest midpoint and may
/// be negative; normalization is the layout engine's concern.
pub fn solve(hierarchy: &Hierarchy, config: &TidyConfig) -> HashMap<usize, (f64, f64)> {
    // Offset of each node relative to its parent's x (super-root for roots).
    let mut relative: HashMap<usize, f64> = HashMap::new();
    pack_children(hierarchy, &hierarchy.roots, config, &mut relative);

    let mut positions = HashMap::new();
    for &root in &hierarchy.roots {
        let x = relative.get(&root).copied().unwrap_or(0.0);
        assign(hierarchy, root, x, 0, config, &relative, &mut positions);
    }
    positions
}

/// First walk: measures each child subtree bottom-up and packs siblings
/// left-to-right so their contours clear each other, recording every child's
/// offset relative to the parent center.
fn pack_children(
    hierarchy: &Hierarchy,
    children: &[usize],
    config: &TidyConfig,
    relative: &mut HashMap<usize, f64>,
) -> Contour {
    if children.is_empty() {
        return Contour::leaf();
    }

    let mut group: Option<Contour> = None;
    let mut offsets: Vec<f64> = Vec::with_capacity(children.len());

    for &child in children {
        let contour = pack_children(hierarchy, &hierarchy.nodes[child].children, config, relative);
        match group {
            None => {
                offsets.push(0.0);
                group = Some(contour);
            }
            Some(ref mut merged) => {
                let shared = merged.right.len().min(contour.left.len());
                let mut shift = f64::NEG_INFINITY;
                for level in 0..shared {
                    let gap = if level == 0 {
                        config.sibling_gap
                    } else {
                        config.subtree_gap
                    };
                    shift = shift.max(merged.right[level] + gap - contour.left[level]);
                }
                offsets.push(shift);

                for level in 0..contour.left.len() {
                    let left = contour.left[level] + shift;
                    let right = contour.right[level] + shift;
                    if level < merged.left.len() {
                        merged.left[level] = merged.left[level].min(left);
                        merged.right[level] = merged.right[level].max(right);
                    } else {
                        merged.left.push(left);
                        merged.right.push(right);
                    }
                }
            }
        }
    }

    // Parent centered over first and last child.
    let mid = (offsets[0] + offsets[offsets.len() - 1]) / 2.0;
    for (&child, offset) in children.iter().zip(&offsets) {
        relative.insert(child, offset - mid);
    }

    let mut merged = match group {
        Some(contour) => contour,
        None => Contour::leaf(),
    };
    for value in &mut merged.left {
        *value -= mid;
    }
    for value in &mut merged.right {
        *value -= mid;
    }
    merged.left.insert(0, 0.0);
    merged.right.insert(0, 0.0);
    Contour {
        left: merged.left,
        right: merged.right,
    }
}

/// Second walk: converts parent-relative offsets to absolute coordinates.
fn assign(
    hierarchy: &Hierarchy,
    index: usize,
    x: f64,
    depth: usize,
    config: &TidyConfig,
    relative: &HashMap<usize, f64>,
    positions: &mut HashMap<usize, (f64, f64)>,
) {
    positions.insert(index, (x, depth as f64 * config.level_step));
    for &child in &hierarchy.nodes[index].children {
        let offset = relative.get(&child).copied().unwrap_or(0.0);
        assign(
            hierarchy,
            child,
            x + offset,
            depth + 1,
            config,
            relative,
            positions,
        );
    }
}
