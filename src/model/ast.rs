// src/model/ast.rs

//! Materialized prerequisite trees.
//!
//! Each department file is a JSON array of `ROOT` entries:
//!
//! ```json
//! [ { "code": "MATH 20B", "type": "ROOT", "children": [
//!       { "code": "OR", "type": "CHILD", "children": [
//!           { "code": "MATH 20A", "type": "CHILD", "children": [] },
//!           { "code": "MATH 10B", "type": "CHILD", "children": [] } ] } ] } ]
//! ```
//!
//! A node whose code is `"OR"` is a structural marker; its children are the
//! alternatives. Every other set of siblings is implicitly AND-ed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::model::course::normalize_code;

/// Code carried by OR marker nodes.
pub const OR_MARKER: &str = "OR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AstNodeType {
    Root,
    #[default]
    Child,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    pub code: String,

    #[serde(rename = "type", default)]
    pub node_type: AstNodeType,

    #[serde(default)]
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn root(code: impl Into<String>, children: Vec<AstNode>) -> Self {
        Self {
            code: code.into(),
            node_type: AstNodeType::Root,
            children,
        }
    }

    pub fn child(code: impl Into<String>, children: Vec<AstNode>) -> Self {
        Self {
            code: code.into(),
            node_type: AstNodeType::Child,
            children,
        }
    }

    /// OR marker grouping the given alternatives.
    pub fn or(alternatives: Vec<AstNode>) -> Self {
        Self {
            code: OR_MARKER.to_string(),
            node_type: AstNodeType::Child,
            children: alternatives,
        }
    }

    /// Whether this node is an OR marker rather than a course.
    pub fn is_or(&self) -> bool {
        self.code == OR_MARKER
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Lenient conversion from untyped JSON.
    ///
    /// Returns `None` when the node itself is unusable (not an object, or no
    /// non-empty string `code`). Malformed children are skipped individually
    /// so one bad entry never discards the rest of the tree.
    pub fn from_value(value: &Value) -> Option<AstNode> {
        let obj = value.as_object()?;
        let code = obj.get("code")?.as_str()?.trim();
        if code.is_empty() {
            return None;
        }

        let node_type = match obj.get("type").and_then(Value::as_str) {
            Some("ROOT") => AstNodeType::Root,
            Some("OR") => AstNodeType::Or,
            _ => AstNodeType::Child,
        };

        let children = match obj.get("children") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| {
                    let parsed = AstNode::from_value(item);
                    if parsed.is_none() {
                        warn!(parent = %code, "skipping malformed AST child");
                    }
                    parsed
                })
                .collect(),
            Some(_) => {
                warn!(course = %code, "`children` is not an array; treating as leaf");
                Vec::new()
            }
        };

        Some(AstNode {
            code: code.to_string(),
            node_type,
            children,
        })
    }
}

/// Parse a whole department file leniently. Anything other than a JSON
/// array yields no entries.
pub fn parse_department(value: &Value) -> Vec<AstNode> {
    match value.as_array() {
        Some(entries) => entries
            .iter()
            .filter_map(|entry| {
                let parsed = AstNode::from_value(entry);
                if parsed.is_none() {
                    warn!("skipping malformed department entry");
                }
                parsed
            })
            .collect(),
        None => {
            warn!("department data is not a JSON array; ignoring");
            Vec::new()
        }
    }
}

/// Find the `ROOT` entry for a course, matching case- and
/// surrounding-whitespace-insensitively.
pub fn find_root_node<'a>(code: &str, nodes: &'a [AstNode]) -> Option<&'a AstNode> {
    let wanted = normalize_code(code);
    if wanted.is_empty() {
        return None;
    }
    nodes
        .iter()
        .find(|n| n.node_type == AstNodeType::Root && normalize_code(&n.code) == wanted)
}

/// Sorted codes of every `ROOT` entry.
pub fn list_root_courses(nodes: &[AstNode]) -> Vec<String> {
    let mut codes: Vec<String> = nodes
        .iter()
        .filter(|n| n.node_type == AstNodeType::Root)
        .map(|n| n.code.clone())
        .collect();
    codes.sort();
    codes
}
