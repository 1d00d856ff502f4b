// crates/riskglobe-core/src/gesture.rs

//! Pointer, touch and wheel bookkeeping that turns raw browser input into the
//! payloads [`GlobeEvent`](crate::view::GlobeEvent) expects.

/// Wheel `deltaMode` values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Tracks the cumulative zoom factor `k` across wheel events.
///
/// Each wheel tick multiplies `k` by `2^(-deltaY · m)`; `m` depends on the
/// delta mode and is ten times larger with ctrl held, which is how browsers
/// report trackpad pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomGesture {
    k: f64,
}

impl Default for ZoomGesture {
    fn default() -> Self {
        Self { k: 1.0 }
    }
}

impl ZoomGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factor(&self) -> f64 {
        self.k
    }

    /// Applies one wheel event and returns the requested factor.
    pub fn wheel(&mut self, delta_y: f64, delta_mode: u32, ctrl_key: bool) -> f64 {
        self.k *= wheel_delta(delta_y, delta_mode, ctrl_key).exp2();
        self.k
    }

    /// Multiplies the factor by a pinch ratio (current over previous finger
    /// distance). Degenerate ratios leave it untouched.
    pub fn scale_by(&mut self, ratio: f64) -> f64 {
        if ratio.is_finite() && ratio > 0.0 {
            self.k *= ratio;
        }
        self.k
    }

    /// Overwrites the factor, e.g. after the view clamped it to the floor.
    pub fn reset_to(&mut self, k: f64) {
        self.k = k;
    }
}

fn wheel_delta(delta_y: f64, delta_mode: u32, ctrl_key: bool) -> f64 {
    let per_unit = match delta_mode {
        DOM_DELTA_PIXEL => 0.002,
        DOM_DELTA_LINE => 0.05,
        _ => 1.0,
    };
    let pinch = if ctrl_key { 10.0 } else { 1.0 };
    -delta_y * per_unit * pinch
}

/// Tracks the last pointer position during a drag and yields movement deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    last: Option<(f64, f64)>,
}

impl DragGesture {
    pub fn start(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Movement since the previous event, or `None` when no drag is active.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (lx, ly) = self.last?;
        self.last = Some((x, y));
        Some((x - lx, y - ly))
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

/// Two-finger pinch: remembers the previous distance between the touches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchGesture {
    last: Option<f64>,
}

impl PinchGesture {
    /// Begins a pinch with both touch points.
    pub fn start(&mut self, a: (f64, f64), b: (f64, f64)) {
        self.last = Some(distance(a, b)).filter(|d| *d > 0.0);
    }

    /// Ratio of the new finger distance to the previous one, or `None` when
    /// no pinch is active or the fingers coincide.
    pub fn move_to(&mut self, a: (f64, f64), b: (f64, f64)) -> Option<f64> {
        let previous = self.last?;
        let current = distance(a, b);
        if current <= 0.0 {
            return None;
        }
        self.last = Some(current);
        Some(current / previous)
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
