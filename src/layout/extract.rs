// src/layout/extract.rs

//! Depth-bounded extraction of a layered view from a materialized tree.
//!
//! Node identity is the normalized course code: a course reached through
//! several branches is one node, kept at the shallowest depth it was found.
//! OR markers are not nodes and consume no depth; their direct course
//! children become an [`OrGroup`].

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::layout::barycenter::{initial_layers, reduce_crossings, undirected_adjacency};
use crate::layout::coords::assign_coordinates;
use crate::layout::grouping::{make_groups_contiguous, primary_groups};
use crate::layout::options::LayoutOptions;
use crate::layout::palette::ColorCycle;
use crate::layout::view::{LayeredView, OrGroup, ViewEdge, ViewNode};
use crate::model::{normalize_code, AstNode};

/// Extract a view showing `max_depth` course levels, with default spacing.
///
/// `None` yields an empty view.
pub fn extract_layers(root: Option<&AstNode>, max_depth: usize) -> LayeredView {
    extract_layers_with(root, &LayoutOptions::with_max_depth(max_depth))
}

pub fn extract_layers_with(root: Option<&AstNode>, options: &LayoutOptions) -> LayeredView {
    let Some(root) = root else {
        return LayeredView::default();
    };

    let mut walker = Walker::new(options.max_depth.max(1));
    walker.walk(root, None, 0);

    let node_count = walker.nodes.len();
    if node_count == 0 {
        return LayeredView::default();
    }

    let depths: Vec<usize> = walker.nodes.iter().map(|n| n.depth).collect();
    let mut layers = initial_layers(&depths);

    let adjacency = undirected_adjacency(node_count, &walker.edges);
    reduce_crossings(&mut layers, &adjacency, options.sweeps);

    let group_members: Vec<Vec<usize>> = walker.groups.iter().map(|g| g.members.clone()).collect();
    let primary = primary_groups(node_count, &group_members);
    make_groups_contiguous(&mut layers, &group_members, &primary);

    let positions = assign_coordinates(&layers, node_count, options);

    let view = walker.into_view(&positions, options.node_size);
    debug!(
        root = %root.code,
        nodes = view.nodes.len(),
        edges = view.edges.len(),
        groups = view.or_groups.len(),
        layers = layers.len(),
        "extracted layered view"
    );
    view
}

struct PendingNode {
    id: String,
    label: String,
    depth: usize,
    /// Some occurrence had children cut off by the depth bound.
    truncated: bool,
    /// Some occurrence had its children walked.
    expanded: bool,
}

impl PendingNode {
    fn is_expandable(&self) -> bool {
        self.truncated && !self.expanded
    }
}

struct PendingGroup {
    id: String,
    members: Vec<usize>,
    fill: &'static str,
    border: &'static str,
}

/// State for one extraction. The color cycle lives here so nothing leaks
/// between calls.
struct Walker {
    max_depth: usize,
    nodes: Vec<PendingNode>,
    index: HashMap<String, usize>,
    /// `(prerequisite, dependent)` node indices.
    edges: Vec<(usize, usize)>,
    edge_set: HashSet<(usize, usize)>,
    groups: Vec<PendingGroup>,
    colors: ColorCycle,
}

impl Walker {
    fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
            groups: Vec::new(),
            colors: ColorCycle::new(),
        }
    }

    /// Whether a node at `depth` sits on the last visible level.
    fn at_bound(&self, depth: usize) -> bool {
        depth + 1 >= self.max_depth
    }

    fn walk(&mut self, node: &AstNode, parent: Option<usize>, depth: usize) {
        if node.is_or() {
            self.walk_or(node, parent, depth);
            return;
        }

        let id = normalize_code(&node.code);
        if id.is_empty() {
            warn!(depth, "skipping AST node with blank course code");
            return;
        }

        let at_bound = self.at_bound(depth);
        let has_children = node.has_children();

        let current = match self.index.get(&id) {
            Some(&existing) => {
                let pending = &mut self.nodes[existing];
                pending.depth = pending.depth.min(depth);
                existing
            }
            None => {
                let idx = self.nodes.len();
                self.nodes.push(PendingNode {
                    id: id.clone(),
                    label: node.code.trim().to_string(),
                    depth,
                    truncated: false,
                    expanded: false,
                });
                self.index.insert(id, idx);
                idx
            }
        };

        // Only an occurrence that walks its children reveals them; a
        // childless occurrence leaves the flag alone.
        if has_children {
            let pending = &mut self.nodes[current];
            if at_bound {
                pending.truncated = true;
            } else {
                pending.expanded = true;
            }
        }

        if let Some(parent) = parent {
            if self.edge_set.insert((current, parent)) {
                self.edges.push((current, parent));
            }
        }

        if !at_bound {
            for child in &node.children {
                self.walk(child, Some(current), depth + 1);
            }
        }
    }

    fn walk_or(&mut self, node: &AstNode, parent: Option<usize>, depth: usize) {
        let color = self.colors.next_color();

        for child in &node.children {
            self.walk(child, parent, depth);
        }

        let mut members: Vec<usize> = Vec::new();
        for child in node.children.iter().filter(|c| !c.is_or()) {
            if let Some(&idx) = self.index.get(&normalize_code(&child.code)) {
                if !members.contains(&idx) {
                    members.push(idx);
                }
            }
        }

        if members.is_empty() {
            return;
        }

        let parent_id = parent.map_or("root", |p| self.nodes[p].id.as_str());
        let id = format!("or_{parent_id}_{}", self.groups.len());
        self.groups.push(PendingGroup {
            id,
            members,
            fill: color.fill,
            border: color.border,
        });
    }

    fn into_view(self, positions: &[(f64, f64)], size: f64) -> LayeredView {
        let nodes: Vec<ViewNode> = self
            .nodes
            .iter()
            .zip(positions)
            .map(|(n, &(x, y))| ViewNode {
                id: n.id.clone(),
                label: n.label.clone(),
                depth: n.depth,
                is_expandable: n.is_expandable(),
                x,
                y,
                size,
            })
            .collect();

        let edges = self
            .edges
            .iter()
            .map(|&(source, target)| {
                let source = &self.nodes[source].id;
                let target = &self.nodes[target].id;
                ViewEdge {
                    id: format!("{source}->{target}"),
                    source: source.clone(),
                    target: target.clone(),
                }
            })
            .collect();

        let or_groups = self
            .groups
            .iter()
            .map(|g| OrGroup {
                id: g.id.clone(),
                member_node_ids: g.members.iter().map(|&m| self.nodes[m].id.clone()).collect(),
                fill: g.fill.to_string(),
                border: g.border.to_string(),
            })
            .collect();

        LayeredView {
            nodes,
            edges,
            or_groups,
        }
    }
}
