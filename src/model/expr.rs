// src/model/expr.rs

use serde::{Deserialize, Serialize};

/// Boolean prerequisite expression attached to a course.
///
/// Mirrors the catalog JSON shape:
///
/// ```json
/// { "type": "AND", "items": [
///     { "type": "COURSE", "course_id": "MATH 20A" },
///     { "type": "OR", "items": [ ... ] }
/// ] }
/// ```
///
/// Any other `type` tag deserializes to [`PrereqExpr::Unknown`], which the
/// compiler treats as "no prerequisites".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PrereqExpr {
    /// All items are required.
    And {
        #[serde(default)]
        items: Vec<PrereqExpr>,
    },
    /// At least one item is required.
    Or {
        #[serde(default)]
        items: Vec<PrereqExpr>,
    },
    /// Leaf reference to another course by code.
    Course {
        #[serde(alias = "courseId")]
        course_id: String,
    },
    #[serde(other)]
    Unknown,
}

impl PrereqExpr {
    pub fn course(code: impl Into<String>) -> Self {
        PrereqExpr::Course {
            course_id: code.into(),
        }
    }

    pub fn and(items: Vec<PrereqExpr>) -> Self {
        PrereqExpr::And { items }
    }

    pub fn or(items: Vec<PrereqExpr>) -> Self {
        PrereqExpr::Or { items }
    }

    /// Every course code referenced anywhere in this expression, in
    /// depth-first order (duplicates included).
    pub fn referenced_courses(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_courses(&mut out);
        out
    }

    fn collect_courses<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            PrereqExpr::And { items } | PrereqExpr::Or { items } => {
                for item in items {
                    item.collect_courses(out);
                }
            }
            PrereqExpr::Course { course_id } => out.push(course_id.as_str()),
            PrereqExpr::Unknown => {}
        }
    }
}
