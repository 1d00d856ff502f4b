// crates/riskglobe-core/src/projection/controller.rs
use super::orthographic::Orthographic;
use super::path::geo_path;
use crate::common::ScreenPoint;
use crate::config::GlobeConfig;
use crate::model::Geometry;
use crate::traits::Projection;

/// What a zoom request did to the projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    /// The requested factor was applied as-is.
    Applied(f64),
    /// The request was at or below the floor; scale was pinned to the floor
    /// and the caller's zoom factor must be overwritten with this value.
    Clamped(f64),
    /// Non-finite factor; nothing changed.
    Ignored,
}

impl ZoomOutcome {
    /// The zoom factor now in effect, if the request changed anything.
    pub fn factor(self) -> Option<f64> {
        match self {
            ZoomOutcome::Applied(k) | ZoomOutcome::Clamped(k) => Some(k),
            ZoomOutcome::Ignored => None,
        }
    }
}

/// Owns the projection state and is the only thing that mutates it.
///
/// Drag and zoom handlers become plain method calls on this value, so the
/// state transitions are sequential and explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionController {
    projection: Orthographic,
    initial_scale: f64,
    sensitivity: f64,
    min_zoom: f64,
    zoom: f64,
}

impl ProjectionController {
    /// Centres the globe in a `width × height` viewport.
    pub fn new(width: f64, height: f64, config: &GlobeConfig) -> Self {
        Self {
            projection: Orthographic::new(
                config.initial_scale,
                config.initial_rotation,
                (width / 2.0, height / 2.0),
            ),
            initial_scale: config.initial_scale,
            sensitivity: config.drag_sensitivity,
            min_zoom: config.min_zoom,
            zoom: 1.0,
        }
    }

    pub fn projection(&self) -> &Orthographic {
        &self.projection
    }

    pub fn scale(&self) -> f64 {
        self.projection.scale
    }

    pub fn initial_scale(&self) -> f64 {
        self.initial_scale
    }

    pub fn rotation(&self) -> (f64, f64) {
        self.projection.rotation
    }

    pub fn translation(&self) -> (f64, f64) {
        self.projection.translation
    }

    /// Current zoom factor relative to the initial scale.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Smallest scale the globe may take.
    pub fn scale_floor(&self) -> f64 {
        self.initial_scale * self.min_zoom
    }

    /// Rotates by a pointer movement in pixels. The step shrinks as the
    /// globe grows, so the surface tracks the pointer at any zoom.
    pub fn rotate_by(&mut self, dx: f64, dy: f64) {
        let k = self.sensitivity / self.projection.scale;
        let (lambda, phi) = self.projection.rotation;
        self.projection.rotation = (lambda + dx * k, phi - dy * k);
    }

    /// Sets the zoom factor (relative to the initial scale).
    pub fn zoom_to(&mut self, factor: f64) -> ZoomOutcome {
        if !factor.is_finite() {
            return ZoomOutcome::Ignored;
        }
        if factor > self.min_zoom {
            self.zoom = factor;
            self.projection.scale = self.initial_scale * factor;
            ZoomOutcome::Applied(factor)
        } else {
            tracing::debug!(requested = factor, floor = self.min_zoom, "zoom clamped");
            self.zoom = self.min_zoom;
            self.projection.scale = self.scale_floor();
            ZoomOutcome::Clamped(self.min_zoom)
        }
    }

    /// SVG path for `geometry` under the current projection.
    pub fn path(&self, geometry: &Geometry) -> String {
        geo_path(&self.projection, geometry)
    }
}

impl Projection for ProjectionController {
    fn project(&self, lon: f64, lat: f64) -> Option<ScreenPoint> {
        self.projection.project(lon, lat)
    }
}
