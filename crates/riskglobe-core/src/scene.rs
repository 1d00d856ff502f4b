// crates/riskglobe-core/src/scene.rs

//! # Scene
//!
//! The SVG scene graph of a globe: one ocean circle and one filled path per
//! country. Fill colors are decided once at build time; path geometry is
//! re-derived from the projection on every redraw.

use crate::color::score_color_or;
use crate::common::SceneStats;
use crate::config::GlobeConfig;
use crate::model::{Boundaries, BoundaryFeature};
use crate::projection::ProjectionController;
use crate::traits::ScoreLookup;
use serde::Serialize;
use std::fmt::Write;

pub const OCEAN_STROKE: &str = "#000";
pub const OCEAN_STROKE_WIDTH: f64 = 0.2;
pub const COUNTRY_STROKE: &str = "black";

/// The background disc. Its radius always equals the projection scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OceanCircle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

/// One drawn country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryShape {
    /// Code as found in the boundary document (used for the CSS class).
    pub raw_code: String,
    /// Join code after sentinel patching.
    pub code: String,
    pub name: String,
    pub fill: String,
    /// The displayable score, if any (entitled and present).
    pub score: Option<f64>,
    /// Current SVG path data; empty while the country is behind the globe.
    pub d: String,
}

impl CountryShape {
    pub fn class_name(&self) -> String {
        format!("country_{}", self.raw_code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub ocean: OceanCircle,
    pub shapes: Vec<CountryShape>,
    pub stroke_width: f64,
    boundaries: Boundaries,
}

impl Scene {
    /// A scene with the ocean only, used when boundaries are unavailable.
    pub fn empty(viewport: (f64, f64), controller: &ProjectionController, config: &GlobeConfig) -> Self {
        let (cx, cy) = controller.translation();
        Self {
            width: viewport.0 - config.viewport_margin,
            height: viewport.1 - config.viewport_margin,
            ocean: OceanCircle {
                cx,
                cy,
                r: controller.scale(),
                fill: config.ocean_fill.clone(),
            },
            shapes: Vec::new(),
            stroke_width: config.country_stroke_width,
            boundaries: Boundaries::default(),
        }
    }

    /// Builds the full scene: colors every feature from `scores` and draws
    /// it with the current projection.
    pub fn build<L: ScoreLookup + ?Sized>(
        viewport: (f64, f64),
        boundaries: Boundaries,
        scores: &L,
        controller: &ProjectionController,
        config: &GlobeConfig,
    ) -> Self {
        let mut scene = Self::empty(viewport, controller, config);

        scene.shapes = boundaries
            .features
            .iter()
            .map(|feature| shape_for(feature, scores, controller, config))
            .collect();
        scene.boundaries = boundaries;

        let stats = scene.stats();
        tracing::debug!(
            shapes = stats.shapes,
            scored = stats.scored,
            "scene built"
        );
        scene
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    pub fn shape(&self, index: usize) -> Option<&CountryShape> {
        self.shapes.get(index)
    }

    pub fn shape_by_code(&self, code: &str) -> Option<&CountryShape> {
        self.shapes.iter().find(|s| s.code.eq_ignore_ascii_case(code))
    }

    /// Recomputes every path. Full redraw is intentional: interaction is
    /// human-paced and there are only a few hundred shapes.
    pub fn redraw_paths(&mut self, controller: &ProjectionController) {
        for (shape, feature) in self.shapes.iter_mut().zip(&self.boundaries.features) {
            shape.d = feature
                .geometry
                .as_ref()
                .map(|g| controller.path(g))
                .unwrap_or_default();
        }
    }

    pub fn resize_ocean(&mut self, controller: &ProjectionController) {
        self.ocean.r = controller.scale();
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            shapes: self.shapes.len(),
            scored: self.shapes.iter().filter(|s| s.score.is_some()).count(),
            visible: self.shapes.iter().filter(|s| !s.d.is_empty()).count(),
        }
    }

    /// Serializes the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );
        let _ = writeln!(
            out,
            r#"  <circle fill="{}" stroke="{OCEAN_STROKE}" stroke-width="{OCEAN_STROKE_WIDTH}" cx="{}" cy="{}" r="{}"/>"#,
            escape_attr(&self.ocean.fill),
            self.ocean.cx,
            self.ocean.cy,
            self.ocean.r
        );
        let _ = writeln!(out, r#"  <g><g class="countries">"#);
        for shape in &self.shapes {
            let _ = writeln!(
                out,
                r#"    <path class="{}" d="{}" fill="{}" style="stroke: {COUNTRY_STROKE}; stroke-width: {};"><title>{}</title></path>"#,
                escape_attr(&shape.class_name()),
                shape.d,
                escape_attr(&shape.fill),
                self.stroke_width,
                escape_attr(&shape.name)
            );
        }
        let _ = writeln!(out, "  </g></g>");
        out.push_str("</svg>\n");
        out
    }
}

fn shape_for<L: ScoreLookup + ?Sized>(
    feature: &BoundaryFeature,
    scores: &L,
    controller: &ProjectionController,
    config: &GlobeConfig,
) -> CountryShape {
    let code = feature.code();
    let score = scores.visible_score(code);
    let fill = score_color_or(score, &config.default_fill);
    let d = feature
        .geometry
        .as_ref()
        .map(|g| controller.path(g))
        .unwrap_or_default();

    CountryShape {
        raw_code: feature.iso_a2.clone(),
        code: code.to_string(),
        name: feature.name.clone(),
        fill: fill.to_string(),
        score,
        d,
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DEFAULT_COLOR, ORANGE, RED};
    use crate::model::{GeoPoint, Geometry, ScoreRecord, ScoreTable};

    fn square(lon: f64, lat: f64) -> Geometry {
        Geometry::Polygon(vec![vec![
            GeoPoint::new(lon, lat),
            GeoPoint::new(lon + 4.0, lat),
            GeoPoint::new(lon + 4.0, lat + 4.0),
            GeoPoint::new(lon, lat + 4.0),
        ]])
    }

    fn fixture() -> (Boundaries, ScoreTable) {
        let boundaries = Boundaries::new(vec![
            BoundaryFeature::new("US", "United States", square(-100.0, 38.0)),
            BoundaryFeature::new("-99", "France", square(2.0, 45.0)),
            BoundaryFeature::new("CA", "Canada", square(-100.0, 55.0)),
        ]);
        let scores = [
            ScoreRecord::new("US", Some(3.0), true),
            ScoreRecord::new("FR", Some(1.5), true),
            ScoreRecord::new("CA", Some(9.0), false),
        ]
        .into_iter()
        .collect();
        (boundaries, scores)
    }

    fn build() -> (Scene, ProjectionController) {
        let config = GlobeConfig::default();
        let controller = ProjectionController::new(1000.0, 800.0, &config);
        let (boundaries, scores) = fixture();
        (
            Scene::build((1000.0, 800.0), boundaries, &scores, &controller, &config),
            controller,
        )
    }

    #[test]
    fn fills_respect_entitlement_and_patching() {
        let (scene, _) = build();
        assert_eq!(scene.shape_by_code("US").unwrap().fill, ORANGE);
        assert_eq!(scene.shape_by_code("FR").unwrap().fill, RED);
        assert_eq!(scene.shape_by_code("CA").unwrap().fill, DEFAULT_COLOR);
        assert_eq!(scene.shape_by_code("FR").unwrap().class_name(), "country_-99");
    }

    #[test]
    fn ocean_and_size_follow_the_viewport() {
        let (scene, _) = build();
        assert_eq!((scene.width, scene.height), (980.0, 780.0));
        assert_eq!(scene.ocean.cx, 500.0);
        assert_eq!(scene.ocean.cy, 400.0);
        assert_eq!(scene.ocean.r, 400.0);
    }

    #[test]
    fn redraw_follows_the_projection() {
        let (mut scene, mut controller) = build();
        let before = scene.shape_by_code("FR").unwrap().d.clone();
        assert!(!before.is_empty());

        // Spin France to the far side.
        controller.rotate_by(180.0 * 400.0 / 75.0, 0.0);
        scene.redraw_paths(&controller);
        assert_eq!(scene.shape_by_code("FR").unwrap().d, "");

        controller.zoom_to(2.0);
        scene.resize_ocean(&controller);
        assert_eq!(scene.ocean.r, 800.0);
    }

    #[test]
    fn stats_and_svg() {
        let (scene, _) = build();
        let stats = scene.stats();
        assert_eq!(stats.shapes, 3);
        assert_eq!(stats.visible, 3);
        assert_eq!(stats.scored, 2);

        let svg = scene.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#ADD8E6""##));
        assert!(svg.contains(r#"class="country_US""#));
        assert_eq!(svg.matches("<path").count(), 3);
    }
}
