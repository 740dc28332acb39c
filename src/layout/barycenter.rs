// src/layout/barycenter.rs

//! Barycenter crossing reduction over depth layers.
//!
//! Layers hold node indices. Each sweep is a downward pass (layer `d` keyed
//! by neighbors in `d - 1`) followed by an upward pass (layer `d` keyed by
//! neighbors in `d + 1`). Nodes with no neighbor in the reference layer get
//! an infinite key, and sorting is stable, so the result is deterministic.

use std::collections::HashMap;

/// Group node indices by depth, keeping their current relative order.
pub fn initial_layers(depths: &[usize]) -> Vec<Vec<usize>> {
    let layer_count = depths.iter().max().map_or(0, |d| d + 1);
    let mut layers = vec![Vec::new(); layer_count];
    for (node, &depth) in depths.iter().enumerate() {
        layers[depth].push(node);
    }
    layers
}

/// Undirected adjacency lists for `node_count` nodes.
pub fn undirected_adjacency(node_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); node_count];
    for &(a, b) in edges {
        adjacency[a].push(b);
        if a != b {
            adjacency[b].push(a);
        }
    }
    adjacency
}

pub fn reduce_crossings(layers: &mut [Vec<usize>], adjacency: &[Vec<usize>], sweeps: usize) {
    if layers.len() < 2 {
        return;
    }

    for _ in 0..sweeps {
        for layer in 1..layers.len() {
            reorder_layer(layers, layer, layer - 1, adjacency);
        }
        for layer in (0..layers.len() - 1).rev() {
            reorder_layer(layers, layer, layer + 1, adjacency);
        }
    }
}

fn reorder_layer(
    layers: &mut [Vec<usize>],
    layer: usize,
    reference: usize,
    adjacency: &[Vec<usize>],
) {
    let positions: HashMap<usize, usize> = layers[reference]
        .iter()
        .enumerate()
        .map(|(i, &node)| (node, i))
        .collect();

    let keys: HashMap<usize, f64> = layers[layer]
        .iter()
        .map(|&node| (node, barycenter(&adjacency[node], &positions)))
        .collect();

    layers[layer].sort_by(|a, b| keys[a].total_cmp(&keys[b]));
}

/// Mean position of `neighbors` present in the reference layer.
fn barycenter(neighbors: &[usize], positions: &HashMap<usize, usize>) -> f64 {
    let placed: Vec<f64> = neighbors
        .iter()
        .filter_map(|n| positions.get(n).map(|&p| p as f64))
        .collect();
    if placed.is_empty() {
        f64::INFINITY
    } else {
        placed.iter().sum::<f64>() / placed.len() as f64
    }
}
