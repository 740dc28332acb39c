// src/compile/materialize.rs

//! Build the materialized [`AstNode`] form from catalog records.
//!
//! - `COURSE` becomes a `CHILD` node carrying that course's own
//!   prerequisites as children.
//! - `AND` items are spliced inline as siblings.
//! - `OR` becomes an OR marker whose children are the alternatives. An `AND`
//!   nested in an `OR` is spliced into the alternatives; a nested `OR` stays
//!   a nested marker.
//!
//! A course already on the current path is emitted as a childless leaf, so
//! cyclic data produces a finite tree.

use std::collections::HashMap;

use tracing::debug;

use crate::compile::{course_ref, index_records};
use crate::model::{normalize_code, AstNode, CourseRecord, PrereqExpr};

/// Materialize the `ROOT` tree for one course. `None` if it has no record.
pub fn materialize(root_code: &str, records: &[CourseRecord]) -> Option<AstNode> {
    let index = index_records(records);
    materialize_with(&normalize_code(root_code), &index)
}

/// Materialize one `ROOT` per record, in record order.
pub fn materialize_all(records: &[CourseRecord]) -> Vec<AstNode> {
    let index = index_records(records);
    records
        .iter()
        .filter_map(|r| materialize_with(&r.normalized_code(), &index))
        .collect()
}

fn materialize_with(root: &str, index: &HashMap<String, &CourseRecord>) -> Option<AstNode> {
    let record = index.get(root)?;
    let mut builder = Materializer {
        index,
        path: vec![root.to_string()],
    };
    let children = match &record.prereq {
        Some(expr) => builder.expand(expr),
        None => Vec::new(),
    };
    debug!(root = %root, children = children.len(), "materialized prerequisite tree");
    Some(AstNode::root(record.code.trim(), children))
}

struct Materializer<'a, 'r> {
    index: &'a HashMap<String, &'r CourseRecord>,
    /// Normalized codes from the root down to the node being expanded.
    path: Vec<String>,
}

impl Materializer<'_, '_> {
    fn expand(&mut self, expr: &PrereqExpr) -> Vec<AstNode> {
        match expr {
            PrereqExpr::Course { course_id } => self.course_node(course_id).into_iter().collect(),
            PrereqExpr::And { items } => items.iter().flat_map(|i| self.expand(i)).collect(),
            PrereqExpr::Or { items } => {
                let alternatives: Vec<AstNode> =
                    items.iter().flat_map(|i| self.expand(i)).collect();
                if alternatives.is_empty() {
                    Vec::new()
                } else {
                    vec![AstNode::or(alternatives)]
                }
            }
            PrereqExpr::Unknown => Vec::new(),
        }
    }

    fn course_node(&mut self, course_id: &str) -> Option<AstNode> {
        let id = course_ref(course_id)?;
        let label = course_id.trim();

        if self.path.contains(&id) {
            return Some(AstNode::child(label, Vec::new()));
        }

        let index = self.index;
        let prereq = index.get(&id).and_then(|r| r.prereq.as_ref());
        let children = match prereq {
            Some(expr) => {
                self.path.push(id);
                let children = self.expand(expr);
                self.path.pop();
                children
            }
            None => Vec::new(),
        };
        Some(AstNode::child(label, children))
    }
}
