use std::collections::{HashSet, VecDeque};

use petgraph::algo::is_cyclic_directed;
use proptest::prelude::*;
use prereq_graph::compile::compile;
use prereq_graph::model::{normalize_code, CourseRecord, PrereqExpr};

const CODES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn code_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(CODES.to_vec()).prop_map(str::to_string)
}

fn expr_strategy() -> impl Strategy<Value = PrereqExpr> {
    let leaf = code_strategy().prop_map(PrereqExpr::course);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(PrereqExpr::and),
            proptest::collection::vec(inner, 0..4).prop_map(PrereqExpr::or),
        ]
    })
}

// Each code gets at most one record; some courses have no prerequisites,
// some have no record at all.
fn records_strategy() -> impl Strategy<Value = Vec<CourseRecord>> {
    proptest::collection::vec(
        prop::option::of(prop::option::of(expr_strategy())),
        CODES.len(),
    )
    .prop_map(|slots| {
        CODES
            .iter()
            .zip(slots)
            .filter_map(|(code, slot)| slot.map(|prereq| CourseRecord::new(*code, prereq)))
            .collect()
    })
}

fn reachable(root: &str, records: &[CourseRecord]) -> HashSet<String> {
    let mut seen = HashSet::from([root.to_string()]);
    let mut queue = VecDeque::from([root.to_string()]);
    while let Some(code) = queue.pop_front() {
        let Some(expr) = records
            .iter()
            .find(|r| r.normalized_code() == code)
            .and_then(|r| r.prereq.as_ref())
        else {
            continue;
        };
        for referenced in expr.referenced_courses() {
            let id = normalize_code(referenced);
            if seen.insert(id.clone()) {
                queue.push_back(id);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn test_course_nodes_are_the_reachable_set(records in records_strategy(), root in code_strategy()) {
        let graph = compile(&root, &records);

        let courses: HashSet<String> = graph.course_ids().map(str::to_string).collect();
        prop_assert_eq!(courses, reachable(&root, &records));
    }

    #[test]
    fn test_edges_and_groups_reference_known_courses(records in records_strategy(), root in code_strategy()) {
        let graph = compile(&root, &records);
        let courses: HashSet<&str> = graph.course_ids().collect();

        for edge in graph.edges() {
            prop_assert!(courses.contains(edge.source.as_str()));
            prop_assert!(courses.contains(edge.target.as_str()));
        }

        for group in graph.groups() {
            let target = group
                .id
                .strip_prefix("OR_")
                .and_then(|rest| rest.rsplit_once('_'))
                .map(|(target, _)| target)
                .unwrap();
            let members = group.member_ids.as_ref().unwrap();
            prop_assert!(!members.is_empty());
            for member in members {
                prop_assert!(graph.has_edge(member, target));
            }
        }
    }

    #[test]
    fn test_compile_is_deterministic(records in records_strategy(), root in code_strategy()) {
        let first = serde_json::to_string(&compile(&root, &records)).unwrap();
        let second = serde_json::to_string(&compile(&root, &records)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_topological_order_respects_edges(records in records_strategy(), root in code_strategy()) {
        let graph = compile(&root, &records);

        match graph.topological_order() {
            Ok(order) => {
                prop_assert_eq!(order.len(), graph.course_ids().count());
                let position = |id: &str| order.iter().position(|c| c == id).unwrap();
                for edge in graph.edges() {
                    prop_assert!(position(&edge.source) < position(&edge.target));
                }
            }
            Err(_) => prop_assert!(is_cyclic_directed(&graph.to_digraph())),
        }
    }
}
