use prereq_graph::compile::{compile, materialize, materialize_all};
use prereq_graph::layout::extract_layers;
use prereq_graph_test_utils::builders::{all_of, child, course, leaf, one_of, or, root, RecordsBuilder};

#[test]
fn test_expression_becomes_tree() {
    let records = RecordsBuilder::new()
        .course(
            "A",
            all_of(vec![
                course("B"),
                one_of(vec![course("C"), all_of(vec![course("D"), course("E")])]),
            ]),
        )
        .course("B", course("C"))
        .leaf("C")
        .leaf("D")
        .leaf("E")
        .build();

    let tree = materialize("a", &records).unwrap();

    assert_eq!(
        tree,
        root(
            "A",
            vec![
                child("B", vec![leaf("C")]),
                or(vec![leaf("C"), leaf("D"), leaf("E")]),
            ]
        )
    );
}

#[test]
fn test_nested_or_stays_nested() {
    let records = RecordsBuilder::new()
        .course("X", one_of(vec![course("P"), one_of(vec![course("Q"), course("R")])]))
        .build();

    let tree = materialize("X", &records).unwrap();

    assert_eq!(
        tree,
        root("X", vec![or(vec![leaf("P"), or(vec![leaf("Q"), leaf("R")])])])
    );
}

#[test]
fn test_cycle_ends_in_leaf() {
    let records = RecordsBuilder::new()
        .course("E", course("F"))
        .course("F", course("E"))
        .build();

    let tree = materialize("E", &records).unwrap();

    assert_eq!(tree, root("E", vec![child("F", vec![leaf("E")])]));
}

#[test]
fn test_empty_or_is_dropped() {
    let records = RecordsBuilder::new()
        .course("X", all_of(vec![one_of(vec![]), course("  ")]))
        .build();

    let tree = materialize("X", &records).unwrap();
    assert!(tree.children.is_empty());
}

#[test]
fn test_unknown_root_has_no_tree() {
    let records = RecordsBuilder::new().leaf("A").build();
    assert!(materialize("B", &records).is_none());
    assert!(materialize("", &records).is_none());
}

#[test]
fn test_materialize_all_keeps_record_order() {
    let records = RecordsBuilder::new()
        .course(" cse 12 ", course("CSE 11"))
        .leaf("CSE 11")
        .build();

    let roots = materialize_all(&records);

    let codes: Vec<&str> = roots.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["cse 12", "CSE 11"]);
    assert_eq!(roots[0].children, vec![leaf("CSE 11")]);
}

#[test]
fn test_tree_and_graph_agree_on_groups() {
    let records = RecordsBuilder::new()
        .course("X", one_of(vec![course("P"), course("Q")]))
        .leaf("P")
        .leaf("Q")
        .build();

    let tree = materialize("X", &records).unwrap();
    let view = extract_layers(Some(&tree), 3);
    let graph = compile("X", &records);

    assert_eq!(view.or_groups.len(), 1);
    assert_eq!(view.or_groups[0].member_node_ids, vec!["P", "Q"]);

    let groups: Vec<_> = graph.groups().collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].member_ids.as_deref(),
        Some(&["P".to_string(), "Q".to_string()][..])
    );
    assert!(view.has_edge("P", "X"));
    assert!(graph.has_edge("P", "X"));
}
