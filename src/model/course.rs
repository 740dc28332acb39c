// src/model/course.rs

use serde::{Deserialize, Serialize};

use crate::model::expr::PrereqExpr;

/// Canonical course identity: trimmed and uppercased.
///
/// `" math 20a "` and `"MATH 20A"` name the same course.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Course code with all whitespace removed (`"CSE 11"` -> `"CSE11"`).
pub fn compact_code(code: &str) -> String {
    code.split_whitespace().collect()
}

/// One course from the catalog. Immutable source of truth for compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,

    #[serde(default)]
    pub title: String,

    /// Free-text prerequisite description as printed in the catalog.
    #[serde(default, rename = "raw_prereq", alias = "rawPrereqText")]
    pub raw_prereq_text: String,

    #[serde(default)]
    pub prereq: Option<PrereqExpr>,
}

impl CourseRecord {
    pub fn new(code: impl Into<String>, prereq: Option<PrereqExpr>) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            raw_prereq_text: String::new(),
            prereq,
        }
    }

    pub fn normalized_code(&self) -> String {
        normalize_code(&self.code)
    }
}

/// Wire wrapper used by the combined catalog file: `{ "course": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub course: CourseRecord,
}
