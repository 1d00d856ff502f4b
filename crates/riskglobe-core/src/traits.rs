// crates/riskglobe-core/src/traits.rs
use crate::common::ScreenPoint;
use crate::model::ScoreRecord;
use crate::text::{equals_folded, fold_key};

/// Read access to country score records, keyed by (normalized) ISO code.
///
/// The scene builder and the hover handler only ever go through this trait,
/// so a view can be driven from a `ScoreTable`, a plain `HashMap`, or a test
/// double.
pub trait ScoreLookup {
    fn record(&self, code: &str) -> Option<&ScoreRecord>;

    /// The score a country may *display*: `None` unless the record exists,
    /// is entitled, and carries a finite score.
    fn visible_score(&self, code: &str) -> Option<f64> {
        self.record(code)
            .filter(|r| r.entitled)
            .and_then(|r| r.score)
            .filter(|s| s.is_finite())
    }
}

impl ScoreLookup for std::collections::HashMap<String, ScoreRecord> {
    fn record(&self, code: &str) -> Option<&ScoreRecord> {
        self.get(code)
    }
}

/// Maps geographic coordinates (degrees) to screen coordinates.
///
/// Implementations return `None` for points that are not visible, e.g. the
/// far hemisphere of an orthographic globe.
pub trait Projection {
    fn project(&self, lon: f64, lat: f64) -> Option<ScreenPoint>;
}

/// Name-based matching for types that expose a display name.
///
/// # Examples
/// ```rust
/// use riskglobe_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Curaçao").is_named("curacao"));
/// assert!(Place("United States").name_contains("states"));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
