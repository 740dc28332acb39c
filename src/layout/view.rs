// src/layout/view.rs

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// A course placed in the layered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    /// Normalized course code.
    pub id: String,
    /// Course code as written in the source tree.
    pub label: String,
    /// Shallowest depth at which the course was reached.
    pub depth: usize,
    /// The course has prerequisites that the depth bound cut off.
    pub is_expandable: bool,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Directed from prerequisite (`source`) to dependent (`target`). This is
/// the reverse of the walk, which goes from a course down to its
/// prerequisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Visual cluster of alternative courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrGroup {
    pub id: String,
    pub member_node_ids: Vec<String>,
    pub fill: String,
    pub border: String,
}

/// Output of [`extract_layers`](crate::layout::extract_layers).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredView {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
    pub or_groups: Vec<OrGroup>,
}

impl LayeredView {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&ViewNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// Node ids per depth, left to right.
    pub fn layers(&self) -> Vec<Vec<&str>> {
        let mut by_depth: BTreeMap<usize, Vec<&ViewNode>> = BTreeMap::new();
        for node in &self.nodes {
            by_depth.entry(node.depth).or_default().push(node);
        }
        by_depth
            .into_values()
            .map(|mut layer| {
                layer.sort_by(|a, b| a.x.total_cmp(&b.x));
                layer.into_iter().map(|n| n.id.as_str()).collect()
            })
            .collect()
    }

    /// Pairwise crossings between edges that join adjacent layers.
    pub fn count_crossings(&self) -> usize {
        let position: HashMap<&str, (usize, usize)> = {
            let mut map = HashMap::new();
            for node in &self.nodes {
                map.insert(node.id.as_str(), (node.depth, 0));
            }
            for layer in self.layers() {
                for (i, id) in layer.into_iter().enumerate() {
                    if let Some(slot) = map.get_mut(id) {
                        slot.1 = i;
                    }
                }
            }
            map
        };

        // (upper depth, upper index, lower index) for every adjacent-layer edge.
        let mut spans: Vec<(usize, usize, usize)> = Vec::new();
        for edge in &self.edges {
            let (Some(&a), Some(&b)) = (
                position.get(edge.source.as_str()),
                position.get(edge.target.as_str()),
            ) else {
                continue;
            };
            let (upper, lower) = if a.0 < b.0 { (a, b) } else { (b, a) };
            if lower.0 == upper.0 + 1 {
                spans.push((upper.0, upper.1, lower.1));
            }
        }

        let mut total = 0;
        for i in 0..spans.len() {
            for j in (i + 1)..spans.len() {
                let (di, ui, li) = spans[i];
                let (dj, uj, lj) = spans[j];
                if di == dj && ((ui < uj && li > lj) || (ui > uj && li < lj)) {
                    total += 1;
                }
            }
        }
        total
    }
}
