// crates/riskglobe-core/src/view.rs

//! # Globe View
//!
//! The interaction state machine behind a globe:
//!
//! ```text
//! Uninitialized --scores--> AwaitingBoundaries --boundaries--> Rendered --destroy--> Destroyed
//! ```
//!
//! Events are only processed in `Rendered`; anything delivered earlier or
//! after teardown is dropped. Each event is handled to completion before the
//! next one, so the "interacting" phase never outlives a single call.

use crate::config::GlobeConfig;
use crate::detail::country_details;
use crate::error::GlobeError;
use crate::model::{Boundaries, ScoreTable};
use crate::projection::{ProjectionController, ZoomOutcome};
use crate::scene::Scene;
use crate::traits::ScoreLookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Uninitialized,
    AwaitingBoundaries,
    Rendered,
    Destroyed,
}

/// An input event with its payload passed explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobeEvent {
    /// Pointer moved by `(dx, dy)` pixels while dragging.
    Drag { dx: f64, dy: f64 },
    /// Requested zoom factor relative to the initial scale.
    Zoom { factor: f64 },
    /// Pointer entered the shape at `index` in [`Scene::shapes`].
    HoverEnter { index: usize },
    HoverLeave,
}

/// What the renderer must refresh after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewUpdate {
    None,
    /// All path geometry changed.
    Paths,
    /// Paths and the ocean radius changed. `factor` is the zoom factor now in
    /// effect; the input layer must adopt it (it differs from the request
    /// when the floor kicked in).
    Zoomed { factor: f64 },
    /// The detail string changed.
    Details,
}

#[derive(Debug)]
pub struct GlobeView<L: ScoreLookup = ScoreTable> {
    config: GlobeConfig,
    viewport: (f64, f64),
    state: ViewState,
    controller: ProjectionController,
    scores: Option<L>,
    scene: Option<Scene>,
    details: Option<String>,
}

impl<L: ScoreLookup> GlobeView<L> {
    /// Initialize: sets up the projection for a `width × height` viewport.
    pub fn new(width: f64, height: f64, config: GlobeConfig) -> Self {
        let controller = ProjectionController::new(width, height, &config);
        Self {
            config,
            viewport: (width, height),
            state: ViewState::Uninitialized,
            controller,
            scores: None,
            scene: None,
            details: None,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn controller(&self) -> &ProjectionController {
        &self.controller
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scores(&self) -> Option<&L> {
        self.scores.as_ref()
    }

    /// The current detail panel line, if a scored country is hovered.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Accepts the score table. Returns `false` if the view can no longer
    /// take it (already loaded, or torn down).
    pub fn receive_scores(&mut self, scores: L) -> bool {
        if self.state != ViewState::Uninitialized {
            tracing::debug!(state = ?self.state, "score table ignored");
            return false;
        }
        self.scores = Some(scores);
        self.state = ViewState::AwaitingBoundaries;
        true
    }

    /// Builds the scene once the boundary document has been fetched.
    ///
    /// A failed fetch is logged and yields an ocean-only scene rather than
    /// leaving the view half-initialized. Returns `None` when the view is not
    /// waiting for boundaries.
    pub fn receive_boundaries(
        &mut self,
        boundaries: Result<Boundaries, GlobeError>,
    ) -> Option<&Scene> {
        if self.state != ViewState::AwaitingBoundaries {
            tracing::debug!(state = ?self.state, "boundaries ignored");
            return None;
        }
        let scores = self.scores.as_ref()?;

        let scene = match boundaries {
            Ok(b) => Scene::build(self.viewport, b, scores, &self.controller, &self.config),
            Err(e) => {
                tracing::error!(error = %e, "boundary geometry unavailable, rendering empty globe");
                Scene::empty(self.viewport, &self.controller, &self.config)
            }
        };
        self.scene = Some(scene);
        self.state = ViewState::Rendered;
        self.scene.as_ref()
    }

    /// Handles one input event to completion.
    pub fn handle(&mut self, event: GlobeEvent) -> ViewUpdate {
        if self.state != ViewState::Rendered {
            return ViewUpdate::None;
        }
        let Some(scene) = self.scene.as_mut() else {
            return ViewUpdate::None;
        };

        match event {
            GlobeEvent::Drag { dx, dy } => {
                self.controller.rotate_by(dx, dy);
                scene.redraw_paths(&self.controller);
                ViewUpdate::Paths
            }
            GlobeEvent::Zoom { factor } => match self.controller.zoom_to(factor) {
                ZoomOutcome::Ignored => ViewUpdate::None,
                outcome => {
                    scene.redraw_paths(&self.controller);
                    scene.resize_ocean(&self.controller);
                    ViewUpdate::Zoomed {
                        factor: outcome.factor().unwrap_or(self.controller.zoom()),
                    }
                }
            },
            GlobeEvent::HoverEnter { index } => {
                let next = match (scene.shape(index), self.scores.as_ref()) {
                    (Some(shape), Some(scores)) => {
                        country_details(scores, &shape.raw_code, &shape.name)
                    }
                    _ => None,
                };
                self.set_details(next)
            }
            GlobeEvent::HoverLeave => self.set_details(None),
        }
    }

    /// Tears the view down; later data and events are ignored.
    pub fn destroy(&mut self) {
        self.state = ViewState::Destroyed;
        self.details = None;
    }

    fn set_details(&mut self, next: Option<String>) -> ViewUpdate {
        if self.details == next {
            return ViewUpdate::None;
        }
        self.details = next;
        ViewUpdate::Details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundaryFeature, GeoPoint, Geometry, ScoreRecord};

    fn boundaries() -> Boundaries {
        let square = |lon: f64, lat: f64| {
            Geometry::Polygon(vec![vec![
                GeoPoint::new(lon, lat),
                GeoPoint::new(lon + 5.0, lat),
                GeoPoint::new(lon + 5.0, lat + 5.0),
                GeoPoint::new(lon, lat + 5.0),
            ]])
        };
        Boundaries::new(vec![
            BoundaryFeature::new("US", "United States", square(-100.0, 38.0)),
            BoundaryFeature::new("CA", "Canada", square(-100.0, 55.0)),
        ])
    }

    fn scores() -> ScoreTable {
        [
            ScoreRecord::new("US", Some(3.0), true),
            ScoreRecord::new("CA", Some(9.0), false),
        ]
        .into_iter()
        .collect()
    }

    fn rendered() -> GlobeView {
        let mut view = GlobeView::new(800.0, 600.0, GlobeConfig::default());
        assert!(view.receive_scores(scores()));
        assert!(view.receive_boundaries(Ok(boundaries())).is_some());
        view
    }

    #[test]
    fn events_before_render_are_dropped() {
        let mut view: GlobeView = GlobeView::new(800.0, 600.0, GlobeConfig::default());
        assert_eq!(view.handle(GlobeEvent::Drag { dx: 10.0, dy: 0.0 }), ViewUpdate::None);
        assert_eq!(view.controller().rotation(), (0.0, -30.0));

        // Boundaries before scores are not accepted either.
        assert!(view.receive_boundaries(Ok(boundaries())).is_none());
        assert_eq!(view.state(), ViewState::Uninitialized);
    }

    #[test]
    fn hover_sets_and_clears_details() {
        let mut view = rendered();
        assert_eq!(view.handle(GlobeEvent::HoverEnter { index: 0 }), ViewUpdate::Details);
        assert_eq!(view.details(), Some("United States: 3.00"));

        assert_eq!(view.handle(GlobeEvent::HoverEnter { index: 1 }), ViewUpdate::Details);
        assert_eq!(view.details(), None);

        view.handle(GlobeEvent::HoverEnter { index: 0 });
        assert_eq!(view.handle(GlobeEvent::HoverLeave), ViewUpdate::Details);
        assert_eq!(view.details(), None);
        assert_eq!(view.handle(GlobeEvent::HoverLeave), ViewUpdate::None);
    }

    #[test]
    fn hover_on_unknown_index_clears() {
        let mut view = rendered();
        view.handle(GlobeEvent::HoverEnter { index: 0 });
        view.handle(GlobeEvent::HoverEnter { index: 42 });
        assert_eq!(view.details(), None);
    }

    #[test]
    fn drag_rotates_and_redraws() {
        let mut view = rendered();
        let before = view.scene().unwrap().shapes[0].d.clone();
        assert_eq!(view.handle(GlobeEvent::Drag { dx: 20.0, dy: 0.0 }), ViewUpdate::Paths);
        assert_eq!(view.controller().rotation(), (3.75, -30.0));
        assert_ne!(view.scene().unwrap().shapes[0].d, before);
    }

    #[test]
    fn zoom_below_floor_reports_the_floor() {
        let mut view = rendered();
        assert_eq!(
            view.handle(GlobeEvent::Zoom { factor: 0.1 }),
            ViewUpdate::Zoomed { factor: 0.3 }
        );
        assert_eq!(view.controller().scale(), 0.3 * 400.0);
        assert_eq!(view.scene().unwrap().ocean.r, view.controller().scale());

        assert_eq!(
            view.handle(GlobeEvent::Zoom { factor: f64::NAN }),
            ViewUpdate::None
        );
    }

    #[test]
    fn failed_boundaries_render_an_empty_globe() {
        let mut view: GlobeView = GlobeView::new(800.0, 600.0, GlobeConfig::default());
        view.receive_scores(scores());
        let scene = view
            .receive_boundaries(Err(GlobeError::NotFound("boundaries".into())))
            .unwrap();
        assert!(scene.shapes.is_empty());
        assert_eq!(scene.ocean.r, 400.0);
        assert_eq!(view.state(), ViewState::Rendered);
        assert_eq!(view.handle(GlobeEvent::HoverEnter { index: 0 }), ViewUpdate::None);
    }

    #[test]
    fn destroyed_views_ignore_everything() {
        let mut view: GlobeView = GlobeView::new(800.0, 600.0, GlobeConfig::default());
        view.destroy();
        assert!(!view.receive_scores(scores()));
        assert!(view.scores().is_none());

        let mut view = rendered();
        view.handle(GlobeEvent::HoverEnter { index: 0 });
        view.destroy();
        assert_eq!(view.details(), None);
        assert_eq!(view.handle(GlobeEvent::Zoom { factor: 2.0 }), ViewUpdate::None);
    }
}
