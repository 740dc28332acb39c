// src/layout/coords.rs

use crate::layout::options::LayoutOptions;

/// Position every node: layers are rows `depth * layer_gap_y` apart, and
/// each row is spaced `node_gap_x` apart and centered on x = 0.
///
/// Returns `(x, y)` indexed by node.
pub fn assign_coordinates(
    layers: &[Vec<usize>],
    node_count: usize,
    options: &LayoutOptions,
) -> Vec<(f64, f64)> {
    let mut positions = vec![(0.0, 0.0); node_count];
    for (depth, layer) in layers.iter().enumerate() {
        let total_width = layer.len().saturating_sub(1) as f64 * options.node_gap_x;
        let y = depth as f64 * options.layer_gap_y;
        for (i, &node) in layer.iter().enumerate() {
            positions[node] = (-total_width / 2.0 + i as f64 * options.node_gap_x, y);
        }
    }
    positions
}
