// src/layout/options.rs

/// Number of course levels shown before truncation.
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// Down+up barycenter sweeps per extraction.
pub const DEFAULT_SWEEPS: usize = 4;
pub const DEFAULT_NODE_GAP_X: f64 = 160.0;
pub const DEFAULT_LAYER_GAP_Y: f64 = 180.0;
pub const DEFAULT_NODE_SIZE: f64 = 18.0;

/// Tunables for [`extract_layers_with`](crate::layout::extract_layers_with).
///
/// Usually built from the `[layout]` config section; `Default` matches the
/// explorer's stock view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Course levels to show, root included. Values below 1 act as 1.
    pub max_depth: usize,
    pub sweeps: usize,
    pub node_gap_x: f64,
    pub layer_gap_y: f64,
    pub node_size: f64,
}

impl LayoutOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            sweeps: DEFAULT_SWEEPS,
            node_gap_x: DEFAULT_NODE_GAP_X,
            layer_gap_y: DEFAULT_LAYER_GAP_Y,
            node_size: DEFAULT_NODE_SIZE,
        }
    }
}
