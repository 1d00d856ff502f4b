// crates/riskglobe-core/src/projection/mod.rs

//! # Projection
//!
//! Orthographic projection, horizon-clipped SVG path generation, and the
//! controller that owns the mutable projection state.

pub mod controller;
pub mod orthographic;
pub mod path;

pub use controller::{ProjectionController, ZoomOutcome};
pub use orthographic::Orthographic;
pub use path::geo_path;
