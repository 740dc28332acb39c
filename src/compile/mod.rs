// src/compile/mod.rs

//! Expression compilation.
//!
//! - [`compiler`] turns a course's `PrereqExpr` (and everything reachable
//!   from it) into a flat [`DependencyGraph`].
//! - [`graph`] holds the graph type and its queries.
//! - [`materialize`] builds the `AstNode` tree form consumed by the layout
//!   engine.

pub mod compiler;
pub mod graph;
pub mod materialize;

use std::collections::HashMap;

use crate::model::{normalize_code, CourseRecord};

pub use compiler::compile;
pub use graph::{DependencyGraph, Edge, GraphNode, NodeKind};
pub use materialize::{materialize, materialize_all};

/// Index records by normalized code. When a code appears twice the first
/// record wins.
pub(crate) fn index_records(records: &[CourseRecord]) -> HashMap<String, &CourseRecord> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let code = record.normalized_code();
        if code.is_empty() {
            continue;
        }
        index.entry(code).or_insert(record);
    }
    index
}

/// Normalize a referenced course code, rejecting blank references.
pub(crate) fn course_ref(code: &str) -> Option<String> {
    let id = normalize_code(code);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
