// crates/riskglobe-core/src/config.rs
use crate::color::DEFAULT_COLOR;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCORES_URL: &str = "./assets/data.json";
pub const DEFAULT_BOUNDARIES_URL: &str = "assets/ne_110m_admin_0_countries.json";
pub const DEFAULT_MOUNT_SELECTOR: &str = "#globe";

/// Tunables for a globe view.
///
/// Every field has a default, so a partial JSON object (or JS object in the
/// browser) only needs to name what it overrides:
///
/// ```rust
/// # #[cfg(feature = "json")] {
/// use riskglobe_core::config::GlobeConfig;
///
/// let cfg: GlobeConfig = serde_json::from_str(r#"{"initial_scale": 250}"#).unwrap();
/// assert_eq!(cfg.initial_scale, 250.0);
/// assert_eq!(cfg.drag_sensitivity, 75.0);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Globe radius in pixels at zoom factor 1.
    pub initial_scale: f64,
    /// Initial `(lambda, phi)` rotation in degrees.
    pub initial_rotation: (f64, f64),
    /// Degrees of rotation per pixel of drag at scale 1.
    pub drag_sensitivity: f64,
    /// Smallest zoom factor, relative to `initial_scale`.
    pub min_zoom: f64,
    /// Pixels subtracted from the viewport for the SVG size.
    pub viewport_margin: f64,
    pub default_fill: String,
    pub ocean_fill: String,
    pub country_stroke_width: f64,
    pub scores_url: String,
    pub boundaries_url: String,
    pub mount_selector: String,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            initial_scale: 400.0,
            initial_rotation: (0.0, -30.0),
            drag_sensitivity: 75.0,
            min_zoom: 0.3,
            viewport_margin: 20.0,
            default_fill: DEFAULT_COLOR.to_string(),
            ocean_fill: "#ADD8E6".to_string(),
            country_stroke_width: 0.3,
            scores_url: DEFAULT_SCORES_URL.to_string(),
            boundaries_url: DEFAULT_BOUNDARIES_URL.to_string(),
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
        }
    }
}

#[cfg(feature = "json")]
impl GlobeConfig {
    /// Loads a (partial) config from a JSON file.
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let reader = crate::loader::open_stream(path.as_ref())?;
        Ok(serde_json::from_reader(reader)?)
    }
}
