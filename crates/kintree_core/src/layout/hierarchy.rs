//! Hierarchy builder: flat person records into a forest plus edge list.
//!
//! # Responsibility
//! - Pure transform from the ordered person collection to root nodes,
//!   parent→child children lists, and a flat father/mother edge list.
//!
//! # Invariants
//! - A person is attached as a structural child of at most one parent; the
//!   tie-break is father before mother, preserved for behavioral parity.
//! - Mother relationships are always recorded as edges, even when the father
//!   took the structural slot.
//! - Dangling parent references degrade to root classification; building
//!   never fails.
//! - Duplicate ids are last-write-wins: the earlier entry is silently
//!   dropped from the forest. Known-lenient behavior, preserved deliberately.

use crate::model::person::{Person, PersonId};
use serde::Serialize;
use std::collections::HashMap;

/// Which parent relationship an edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Father,
    Mother,
}

/// One directed parent→child connector for the renderer.
///
/// Carried independently of structural placement so a child with two
/// recorded parents still yields one curve per relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: PersonId,
    pub target: PersonId,
    pub kind: EdgeKind,
}

/// One forest node: a person plus its ordered structural children.
///
/// Rebuilt from scratch on every store change; never persisted. Children are
/// indices into [`Hierarchy::nodes`].
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    pub person: Person,
    pub children: Vec<usize>,
}

/// Forest derived from the person store.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    /// One node per surviving person, in input order.
    pub nodes: Vec<HierarchyNode>,
    /// Indices of nodes with no resolvable parent.
    pub roots: Vec<usize>,
    /// Every recorded parent relationship, in input order.
    pub edges: Vec<Edge>,
}

/// Builds the forest and edge list from the full ordered person sequence.
///
/// Total over its input: malformed references classify as roots, duplicate
/// ids shadow, nothing is rejected. The layout engine supplies the synthetic
/// super-root that keeps the layout input non-empty, so an all-cycle forest
/// (empty `roots` with non-empty `nodes`) is a legal result here.
pub fn build(people: &[Person]) -> Hierarchy {
    let mut nodes: Vec<HierarchyNode> = people
        .iter()
        .map(|person| HierarchyNode {
            person: person.clone(),
            children: Vec::new(),
        })
        .collect();

    // Last write wins: later duplicates replace earlier map entries.
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, person) in people.iter().enumerate() {
        index.insert(person.id.as_str(), i);
    }

    let mut roots = Vec::new();
    let mut edges = Vec::new();

    for (i, person) in people.iter().enumerate() {
        if index.get(person.id.as_str()) != Some(&i) {
            // Shadowed duplicate: silently dropped from the forest.
            continue;
        }

        let father = person
            .father_id
            .as_deref()
            .and_then(|id| index.get(id).copied());
        let mother = person
            .mother_id
            .as_deref()
            .and_then(|id| index.get(id).copied());

        let mut attached = false;
        if let Some(father_index) = father {
            nodes[father_index].children.push(i);
            edges.push(Edge {
                source: nodes[father_index].person.id.clone(),
                target: person.id.clone(),
                kind: EdgeKind::Father,
            });
            attached = true;
        }
        if let Some(mother_index) = mother {
            if !attached {
                nodes[mother_index].children.push(i);
                attached = true;
            }
            // Mother edges are always recorded for rendering, even when the
            // father already took the structural slot.
            edges.push(Edge {
                source: nodes[mother_index].person.id.clone(),
                target: person.id.clone(),
                kind: EdgeKind::Mother,
            });
        }
        if !attached {
            roots.push(i);
        }
    }

    Hierarchy {
        nodes,
        roots,
        edges,
    }
}
