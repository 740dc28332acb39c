// src/compile/compiler.rs

//! Prerequisite-expression compiler.
//!
//! Walks a root course's expression and every course reachable from it,
//! producing one node per course plus "satisfies one of" group nodes.
//!
//! - `AND` is flattened: each item gets a direct edge into the same target.
//! - `OR` becomes a group whose members are its direct `COURSE` items. Nested
//!   `AND`/`OR` items inside an `OR` are flattened against the same target and
//!   do not open a second group boundary.
//! - A course that already has a node is never traversed again, which also
//!   stops cyclic catalog data.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::compile::graph::DependencyGraph;
use crate::compile::{course_ref, index_records};
use crate::model::{normalize_code, CourseRecord, PrereqExpr};

/// Compile the dependency graph rooted at `root_code`.
///
/// Codes are normalized (trimmed, uppercased) on both sides. References to
/// courses with no record still produce a node; they are simply leaves.
/// A blank root code yields an empty graph.
pub fn compile(root_code: &str, records: &[CourseRecord]) -> DependencyGraph {
    let root = normalize_code(root_code);
    if root.is_empty() {
        debug!("compile called with blank root code; returning empty graph");
        return DependencyGraph::default();
    }

    let mut compiler = Compiler::new(records);
    compiler.traverse(&root);

    debug!(
        root = %root,
        nodes = compiler.graph.len(),
        edges = compiler.graph.edges().len(),
        "compiled prerequisite graph"
    );

    compiler.graph
}

/// Per-call compilation state. Group ids come from `next_group`, so two
/// compilations of the same input produce identical graphs.
struct Compiler<'a> {
    records: HashMap<String, &'a CourseRecord>,
    graph: DependencyGraph,
    next_group: usize,
}

impl<'a> Compiler<'a> {
    fn new(records: &'a [CourseRecord]) -> Self {
        Self {
            records: index_records(records),
            graph: DependencyGraph::default(),
            next_group: 0,
        }
    }

    /// Ensure a node exists for `id` (already normalized) and expand its
    /// prerequisites the first time it is seen.
    fn traverse(&mut self, id: &str) {
        if !self.graph.add_course(id) {
            return;
        }

        let record = self.records.get(id).copied();
        match record.and_then(|r| r.prereq.as_ref()) {
            Some(prereq) => self.parse(prereq, id),
            None => debug!(course = %id, "no prerequisites on record; leaf node"),
        }
    }

    /// Resolve a `COURSE` reference to its node id, traversing it if new.
    fn resolve(&mut self, course_id: &str, target: &str) -> Option<String> {
        match course_ref(course_id) {
            Some(id) => {
                self.traverse(&id);
                Some(id)
            }
            None => {
                warn!(course = %target, "blank course reference in prerequisites; skipping");
                None
            }
        }
    }

    fn parse(&mut self, expr: &'a PrereqExpr, target: &str) {
        match expr {
            PrereqExpr::Course { course_id } => {
                if let Some(source) = self.resolve(course_id, target) {
                    self.graph.add_edge(&source, target);
                }
            }
            PrereqExpr::And { items } => {
                for item in items {
                    self.parse(item, target);
                }
            }
            PrereqExpr::Or { items } => self.parse_or(items, target),
            PrereqExpr::Unknown => {
                warn!(course = %target, "unrecognized prerequisite tag; treating as none");
            }
        }
    }

    fn parse_or(&mut self, items: &'a [PrereqExpr], target: &str) {
        let group_id = format!("OR_{target}_{}", self.next_group);
        self.next_group += 1;

        let mut members: Vec<String> = Vec::new();
        for item in items {
            match item {
                PrereqExpr::Course { course_id } => {
                    if let Some(source) = self.resolve(course_id, target) {
                        self.graph.add_edge(&source, target);
                        if !members.contains(&source) {
                            members.push(source);
                        }
                    }
                }
                nested => self.parse(nested, target),
            }
        }

        if members.is_empty() {
            debug!(group = %group_id, "OR group resolved no direct members; not emitted");
        } else {
            self.graph.add_group(group_id, members);
        }
    }
}
