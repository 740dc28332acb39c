// src/model/mod.rs

//! Input data model.
//!
//! - [`expr`] holds the boolean prerequisite expression tree.
//! - [`course`] holds catalog records and course-code normalization.
//! - [`ast`] holds the materialized per-course tree consumed by the layout
//!   engine, plus root lookup helpers.

pub mod ast;
pub mod course;
pub mod expr;

pub use ast::{find_root_node, list_root_courses, AstNode, AstNodeType, OR_MARKER};
pub use course::{compact_code, normalize_code, CatalogEntry, CourseRecord};
pub use expr::PrereqExpr;
