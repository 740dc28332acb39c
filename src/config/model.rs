// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::layout::options::{
    LayoutOptions, DEFAULT_LAYER_GAP_Y, DEFAULT_MAX_DEPTH, DEFAULT_NODE_GAP_X, DEFAULT_NODE_SIZE,
    DEFAULT_SWEEPS,
};

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [layout]
/// max_depth = 3
/// sweeps = 4
/// node_gap_x = 160.0
/// layer_gap_y = 180.0
/// node_size = 18.0
///
/// [data]
/// ast_dir = "data/ast"
/// catalog = "data/combined.json"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub layout: LayoutSection,

    #[serde(default)]
    pub data: DataSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)` or
/// [`load_and_validate`](crate::config::load_and_validate).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub layout: LayoutSection,
    pub data: DataSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(layout: LayoutSection, data: DataSection) -> Self {
        Self { layout, data }
    }

    /// Layout tunables for [`extract_layers_with`](crate::layout::extract_layers_with).
    pub fn layout_options(&self) -> LayoutOptions {
        self.layout.to_options()
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(LayoutSection::default(), DataSection::default())
    }
}

/// `[layout]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    /// Course levels shown before a node becomes expandable. Must be >= 1.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Barycenter sweeps (each one down pass plus one up pass).
    #[serde(default = "default_sweeps")]
    pub sweeps: usize,

    #[serde(default = "default_node_gap_x")]
    pub node_gap_x: f64,

    #[serde(default = "default_layer_gap_y")]
    pub layer_gap_y: f64,

    #[serde(default = "default_node_size")]
    pub node_size: f64,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_sweeps() -> usize {
    DEFAULT_SWEEPS
}

fn default_node_gap_x() -> f64 {
    DEFAULT_NODE_GAP_X
}

fn default_layer_gap_y() -> f64 {
    DEFAULT_LAYER_GAP_Y
}

fn default_node_size() -> f64 {
    DEFAULT_NODE_SIZE
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            sweeps: default_sweeps(),
            node_gap_x: default_node_gap_x(),
            layer_gap_y: default_layer_gap_y(),
            node_size: default_node_size(),
        }
    }
}

impl LayoutSection {
    pub fn to_options(&self) -> LayoutOptions {
        LayoutOptions {
            max_depth: self.max_depth,
            sweeps: self.sweeps,
            node_gap_x: self.node_gap_x,
            layer_gap_y: self.layer_gap_y,
            node_size: self.node_size,
        }
    }
}

/// `[data]` section. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    /// Directory holding `<dept>_ast.json` files.
    #[serde(default = "default_ast_dir")]
    pub ast_dir: PathBuf,

    /// Combined course metadata file.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
}

fn default_ast_dir() -> PathBuf {
    PathBuf::from("data/ast")
}

fn default_catalog() -> PathBuf {
    PathBuf::from("data/combined.json")
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            ast_dir: default_ast_dir(),
            catalog: default_catalog(),
        }
    }
}
