// src/layout/palette.rs

//! OR-group colors: translucent fills with matching borders.

pub const OR_FILL_COLORS: [&str; 8] = [
    "rgba(99, 102, 241, 0.15)",  // indigo
    "rgba(236, 72, 153, 0.15)",  // pink
    "rgba(16, 185, 129, 0.15)",  // emerald
    "rgba(245, 158, 11, 0.15)",  // amber
    "rgba(139, 92, 246, 0.15)",  // violet
    "rgba(6, 182, 212, 0.15)",   // cyan
    "rgba(239, 68, 68, 0.15)",   // red
    "rgba(34, 197, 94, 0.15)",   // green
];

pub const OR_BORDER_COLORS: [&str; 8] = [
    "rgba(99, 102, 241, 0.7)",
    "rgba(236, 72, 153, 0.7)",
    "rgba(16, 185, 129, 0.7)",
    "rgba(245, 158, 11, 0.7)",
    "rgba(139, 92, 246, 0.7)",
    "rgba(6, 182, 212, 0.7)",
    "rgba(239, 68, 68, 0.7)",
    "rgba(34, 197, 94, 0.7)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrColor {
    pub fill: &'static str,
    pub border: &'static str,
}

/// Cyclic palette cursor.
///
/// Owned by a single extraction, so every call starts from the first color.
#[derive(Debug, Clone, Default)]
pub struct ColorCycle {
    index: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors handed out so far.
    pub fn issued(&self) -> usize {
        self.index
    }

    pub fn next_color(&mut self) -> OrColor {
        let slot = self.index % OR_FILL_COLORS.len();
        self.index += 1;
        OrColor {
            fill: OR_FILL_COLORS[slot],
            border: OR_BORDER_COLORS[slot],
        }
    }
}
