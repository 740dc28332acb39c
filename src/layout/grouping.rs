// src/layout/grouping.rs

//! OR-group contiguity repair.
//!
//! Crossing reduction can scatter the members of one OR-group across a
//! layer. Each layer is rebuilt by scanning it in order; the first time a
//! member of a group shows up, every member of that group in the layer is
//! emitted as one block (in group member order). Everything else keeps its
//! relative position.

use std::collections::HashSet;

/// Map each node to the first group that claims it.
pub fn primary_groups(node_count: usize, groups: &[Vec<usize>]) -> Vec<Option<usize>> {
    let mut primary = vec![None; node_count];
    for (group, members) in groups.iter().enumerate() {
        for &member in members {
            if primary[member].is_none() {
                primary[member] = Some(group);
            }
        }
    }
    primary
}

pub fn make_groups_contiguous(
    layers: &mut [Vec<usize>],
    groups: &[Vec<usize>],
    primary: &[Option<usize>],
) {
    for layer in layers.iter_mut() {
        let in_layer: HashSet<usize> = layer.iter().copied().collect();
        let mut emitted_groups: HashSet<usize> = HashSet::new();
        let mut placed: HashSet<usize> = HashSet::new();
        let mut ordered = Vec::with_capacity(layer.len());

        for &node in layer.iter() {
            if placed.contains(&node) {
                continue;
            }
            if let Some(group) = primary[node] {
                if emitted_groups.insert(group) {
                    for &member in &groups[group] {
                        if in_layer.contains(&member)
                            && primary[member] == Some(group)
                            && placed.insert(member)
                        {
                            ordered.push(member);
                        }
                    }
                    continue;
                }
            }
            if placed.insert(node) {
                ordered.push(node);
            }
        }

        *layer = ordered;
    }
}
