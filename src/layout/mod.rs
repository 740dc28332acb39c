// src/layout/mod.rs

//! Layered view extraction for the prerequisite explorer.
//!
//! - [`extract`] walks a materialized tree up to a depth bound and merges
//!   repeated courses into one node.
//! - [`barycenter`] reorders each layer to reduce edge crossings.
//! - [`grouping`] makes every OR-group contiguous within its layer.
//! - [`coords`] turns per-layer order into x/y positions.
//! - [`palette`] supplies OR-group colors.
//! - [`view`] holds the output types.

pub mod barycenter;
pub mod coords;
pub mod extract;
pub mod grouping;
pub mod options;
pub mod palette;
pub mod view;

pub use extract::{extract_layers, extract_layers_with};
pub use options::LayoutOptions;
pub use palette::{ColorCycle, OrColor};
pub use view::{LayeredView, OrGroup, ViewEdge, ViewNode};
