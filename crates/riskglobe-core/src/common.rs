// crates/riskglobe-core/src/common.rs
use serde::{Deserialize, Serialize};

/// A point in SVG user space (pixels, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Simple aggregate statistics for a built scene.
///
/// `scored` counts shapes with a displayable score (entitled and present);
/// `visible` counts shapes with non-empty path data in the current view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneStats {
    pub shapes: usize,
    pub scored: usize,
    pub visible: usize,
}
