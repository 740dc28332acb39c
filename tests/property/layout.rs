use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use prereq_graph::layout::extract_layers;
use prereq_graph::model::{normalize_code, AstNode};

// Small code alphabet so courses repeat across branches; mixed case
// exercises normalization.
fn code_strategy() -> impl Strategy<Value = String> {
    "[cC][0-7]"
}

fn tree_strategy() -> impl Strategy<Value = AstNode> {
    let leaf = code_strategy().prop_map(|code| AstNode::child(code, Vec::new()));
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (code_strategy(), proptest::collection::vec(inner.clone(), 0..4))
                .prop_map(|(code, children)| AstNode::child(code, children)),
            proptest::collection::vec(inner, 0..4).prop_map(AstNode::or),
        ]
    })
}

fn root_strategy() -> impl Strategy<Value = AstNode> {
    (code_strategy(), proptest::collection::vec(tree_strategy(), 0..4))
        .prop_map(|(code, children)| AstNode::root(code, children))
}

#[derive(Default)]
struct ExpectedCourse {
    depth: usize,
    /// An occurrence on the last level had children.
    cut_off: bool,
    /// An occurrence above the last level had its children walked.
    walked: bool,
}

/// Per course facts from a plain recursive walk, plus the
/// `(prerequisite, dependent)` edge set.
#[derive(Default)]
struct Expected {
    courses: HashMap<String, ExpectedCourse>,
    edges: HashSet<(String, String)>,
}

fn expected_walk(node: &AstNode, parent: Option<&str>, depth: usize, k: usize, out: &mut Expected) {
    if node.is_or() {
        for child in &node.children {
            expected_walk(child, parent, depth, k, out);
        }
        return;
    }

    let id = normalize_code(&node.code);
    let on_last_level = depth + 1 >= k;
    let entry = out.courses.entry(id.clone()).or_insert(ExpectedCourse {
        depth,
        ..Default::default()
    });
    entry.depth = entry.depth.min(depth);
    if node.has_children() {
        if on_last_level {
            entry.cut_off = true;
        } else {
            entry.walked = true;
        }
    }

    if let Some(parent) = parent {
        out.edges.insert((id.clone(), parent.to_string()));
    }

    if !on_last_level {
        for child in &node.children {
            expected_walk(child, Some(&id), depth + 1, k, out);
        }
    }
}

proptest! {
    #[test]
    fn test_nodes_match_reference_walk(root in root_strategy(), max_depth in 0usize..5) {
        let k = max_depth.max(1);
        let view = extract_layers(Some(&root), max_depth);

        let mut expected = Expected::default();
        expected_walk(&root, None, 0, k, &mut expected);

        prop_assert_eq!(view.nodes.len(), expected.courses.len());
        for node in &view.nodes {
            let expected_course = expected.courses.get(&node.id).unwrap();
            prop_assert_eq!(node.depth, expected_course.depth);
            prop_assert!(node.depth < k);
            prop_assert_eq!(
                node.is_expandable,
                expected_course.cut_off && !expected_course.walked
            );
            prop_assert!(node.id != "OR");
        }

        let edges: HashSet<(String, String)> = view
            .edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect();
        prop_assert_eq!(edges.len(), view.edges.len());
        prop_assert_eq!(edges, expected.edges);
    }

    #[test]
    fn test_ids_are_unique_and_groups_resolve(root in root_strategy(), max_depth in 1usize..5) {
        let view = extract_layers(Some(&root), max_depth);

        let node_ids: HashSet<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(node_ids.len(), view.nodes.len());

        let edge_ids: HashSet<&str> = view.edges.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(edge_ids.len(), view.edges.len());

        let group_ids: HashSet<&str> = view.or_groups.iter().map(|g| g.id.as_str()).collect();
        prop_assert_eq!(group_ids.len(), view.or_groups.len());

        for group in &view.or_groups {
            prop_assert!(!group.member_node_ids.is_empty());
            for member in &group.member_node_ids {
                prop_assert!(node_ids.contains(member.as_str()));
            }
        }
        for edge in &view.edges {
            prop_assert!(node_ids.contains(edge.source.as_str()));
            prop_assert!(node_ids.contains(edge.target.as_str()));
        }
    }

    #[test]
    fn test_primary_group_members_are_adjacent(root in root_strategy(), max_depth in 1usize..5) {
        let view = extract_layers(Some(&root), max_depth);

        let mut primary: HashMap<&str, usize> = HashMap::new();
        for (g, group) in view.or_groups.iter().enumerate() {
            for member in &group.member_node_ids {
                primary.entry(member.as_str()).or_insert(g);
            }
        }

        for layer in view.layers() {
            for g in 0..view.or_groups.len() {
                let positions: Vec<usize> = layer
                    .iter()
                    .enumerate()
                    .filter(|(_, id)| primary.get(*id) == Some(&g))
                    .map(|(i, _)| i)
                    .collect();
                if let (Some(first), Some(last)) = (positions.first(), positions.last()) {
                    prop_assert_eq!(last - first + 1, positions.len());
                }
            }
        }
    }

    #[test]
    fn test_extraction_is_deterministic(root in root_strategy(), max_depth in 1usize..5) {
        let first = extract_layers(Some(&root), max_depth);
        let second = extract_layers(Some(&root), max_depth);
        prop_assert_eq!(&first, &second);

        for node in &first.nodes {
            prop_assert!(node.x.is_finite());
            prop_assert!(node.y.is_finite());
        }
    }
}
