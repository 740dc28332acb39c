// src/compile/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use serde::Serialize;

use crate::errors::{PrereqGraphError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Course,
    /// "Satisfies one of" cluster; members are listed in `member_ids`.
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_ids: Option<Vec<String>>,
}

/// Directed edge from a prerequisite course to the course requiring it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Flat dependency graph produced by [`compile`](crate::compile::compile).
///
/// Nodes keep insertion order so output is reproducible. Edges are unique
/// per `(source, target)` pair.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip)]
    edge_set: HashSet<(String, String)>,
}

impl DependencyGraph {
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edge_set
            .contains(&(source.to_string(), target.to_string()))
    }

    /// Ids of course nodes, in insertion order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Course)
            .map(|n| n.id.as_str())
    }

    pub fn groups(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Group)
    }

    /// Direct prerequisites of a course (sources of edges into it).
    pub fn prerequisites_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.target == id)
            .map(|e| e.source.as_str())
            .collect()
    }

    /// Courses that directly require `id`.
    pub fn dependents_of(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.target.as_str())
            .collect()
    }

    /// First group that lists `member` among its alternatives.
    pub fn group_of(&self, member: &str) -> Option<&GraphNode> {
        self.groups().find(|g| {
            g.member_ids
                .as_ref()
                .is_some_and(|m| m.iter().any(|id| id == member))
        })
    }

    /// Project course nodes and edges into a petgraph map.
    ///
    /// Edge direction matches [`Edge`]: prerequisite -> dependent.
    pub fn to_digraph(&self) -> DiGraphMap<&str, ()> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
        for id in self.course_ids() {
            graph.add_node(id);
        }
        for edge in &self.edges {
            graph.add_edge(edge.source.as_str(), edge.target.as_str(), ());
        }
        graph
    }

    /// Courses ordered so every prerequisite precedes its dependents.
    ///
    /// Fails with [`PrereqGraphError::DependencyCycle`] when the catalog
    /// data loops back on itself.
    pub fn topological_order(&self) -> Result<Vec<String>> {
        let graph = self.to_digraph();
        match toposort(&graph, None) {
            Ok(order) => Ok(order.into_iter().map(str::to_string).collect()),
            Err(cycle) => Err(PrereqGraphError::DependencyCycle(format!(
                "cycle detected involving course '{}'",
                cycle.node_id()
            ))),
        }
    }

    /// Insert a course node. Returns `false` if the id already exists.
    pub(crate) fn add_course(&mut self, id: &str) -> bool {
        if self.index.contains_key(id) {
            return false;
        }
        self.push_node(GraphNode {
            id: id.to_string(),
            kind: NodeKind::Course,
            member_ids: None,
        });
        true
    }

    pub(crate) fn add_group(&mut self, id: String, members: Vec<String>) {
        if self.index.contains_key(&id) {
            return;
        }
        self.push_node(GraphNode {
            id,
            kind: NodeKind::Group,
            member_ids: Some(members),
        });
    }

    /// Insert an edge unless the same `(source, target)` pair exists.
    pub(crate) fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let key = (source.to_string(), target.to_string());
        if !self.edge_set.insert(key) {
            return false;
        }
        self.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
        });
        true
    }

    fn push_node(&mut self, node: GraphNode) {
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }
}
