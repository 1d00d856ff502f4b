// crates/riskglobe-core/src/lib.rs

//! riskglobe-core
//! ==============
//!
//! Everything behind the risk globe that does not need a browser: the score
//! and boundary models, score colors, country-code patching, the orthographic
//! projection with horizon-clipped SVG paths, the scene graph, and the
//! interaction state machine.
//!
//! ```rust
//! use riskglobe_core::prelude::*;
//!
//! let scores: ScoreTable = [ScoreRecord::new("US", Some(3.0), true)].into_iter().collect();
//! let boundaries = Boundaries::new(vec![BoundaryFeature::new(
//!     "US",
//!     "United States",
//!     Geometry::Polygon(vec![vec![
//!         GeoPoint::new(-100.0, 38.0),
//!         GeoPoint::new(-95.0, 38.0),
//!         GeoPoint::new(-95.0, 42.0),
//!     ]]),
//! )]);
//!
//! let mut view: GlobeView = GlobeView::new(800.0, 600.0, GlobeConfig::default());
//! view.receive_scores(scores);
//! view.receive_boundaries(Ok(boundaries));
//!
//! view.handle(GlobeEvent::HoverEnter { index: 0 });
//! assert_eq!(view.details(), Some("United States: 3.00"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod color;
pub mod common;
pub mod config;
pub mod detail;
pub mod error;
pub mod gesture;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod projection;
pub mod scene;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::common::{SceneStats, ScreenPoint};
pub use crate::config::GlobeConfig;
pub use crate::error::{GlobeError, Result};
pub use crate::model::{
    Boundaries, BoundaryFeature, GeoPoint, Geometry, Ring, ScoreRecord, ScoreTable,
};
pub use crate::scene::{CountryShape, OceanCircle, Scene};
pub use crate::view::{GlobeEvent, GlobeView, ViewState, ViewUpdate};

pub mod prelude {
    pub use crate::color::{score_color, score_color_or};
    pub use crate::detail::country_details;
    pub use crate::gesture::{DragGesture, PinchGesture, ZoomGesture};
    pub use crate::normalize::normalize_code;
    pub use crate::projection::{Orthographic, ProjectionController, ZoomOutcome};
    pub use crate::traits::{NameMatch, Projection, ScoreLookup};
    pub use crate::{
        Boundaries, BoundaryFeature, CountryShape, GeoPoint, Geometry, GlobeConfig, GlobeError,
        GlobeEvent, GlobeView, Result, Scene, SceneStats, ScoreRecord, ScoreTable, ViewState,
        ViewUpdate,
    };
}
