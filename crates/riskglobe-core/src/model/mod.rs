// crates/riskglobe-core/src/model/mod.rs
pub mod boundary;
pub mod convert;
#[doc(hidden)]
pub mod raw;
pub mod score;

pub use boundary::{Boundaries, BoundaryFeature, GeoPoint, Geometry, Ring};
pub use score::{ScoreRecord, ScoreTable};
