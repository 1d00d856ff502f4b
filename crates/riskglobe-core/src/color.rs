// crates/riskglobe-core/src/color.rs

//! # Score Colors
//!
//! Maps a risk score onto one of four fill colors. Scores are expected in
//! `0.0..=10.0`; anything outside (or absent, or NaN) gets the default fill.

/// Fill used for countries without a usable score.
pub const DEFAULT_COLOR: &str = "LightGray";

/// `score <= 2.5`
pub const RED: &str = "#ce181f";
/// `2.5 < score <= 5`
pub const ORANGE: &str = "#f47721";
/// `5 < score <= 7.5`
pub const YELLOW: &str = "#ffc709";
/// `7.5 < score <= 10`
pub const YELLOW_GREEN: &str = "#d6e040";

/// Upper bound (inclusive) of each bucket, lowest first.
const BUCKETS: [(f64, &str); 4] = [(2.5, RED), (5.0, ORANGE), (7.5, YELLOW), (10.0, YELLOW_GREEN)];

/// Returns the fill color for `score`, using [`DEFAULT_COLOR`] as fallback.
///
/// ```rust
/// use riskglobe_core::color::{score_color, DEFAULT_COLOR, ORANGE};
///
/// assert_eq!(score_color(Some(5.0)), ORANGE);
/// assert_eq!(score_color(None), DEFAULT_COLOR);
/// assert_eq!(score_color(Some(f64::NAN)), DEFAULT_COLOR);
/// ```
#[inline]
pub fn score_color(score: Option<f64>) -> &'static str {
    score_color_or(score, DEFAULT_COLOR)
}

/// Same as [`score_color`] with a caller-provided fallback.
pub fn score_color_or<'a>(score: Option<f64>, default: &'a str) -> &'a str {
    let Some(score) = score else {
        return default;
    };
    if score.is_nan() {
        return default;
    }
    BUCKETS
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map(|(_, color)| *color)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_inclusive_on_the_lower_bucket() {
        assert_eq!(score_color(Some(2.5)), RED);
        assert_eq!(score_color(Some(5.0)), ORANGE);
        assert_eq!(score_color(Some(7.5)), YELLOW);
        assert_eq!(score_color(Some(10.0)), YELLOW_GREEN);
        assert_eq!(score_color(Some(10.0001)), DEFAULT_COLOR);
    }

    #[test]
    fn interior_values() {
        assert_eq!(score_color(Some(0.0)), RED);
        assert_eq!(score_color(Some(2.51)), ORANGE);
        assert_eq!(score_color(Some(6.0)), YELLOW);
        assert_eq!(score_color(Some(9.99)), YELLOW_GREEN);
    }

    #[test]
    fn negative_scores_fall_in_the_lowest_bucket() {
        assert_eq!(score_color(Some(-3.0)), RED);
    }

    #[test]
    fn unusable_scores_use_the_fallback() {
        assert_eq!(score_color(None), DEFAULT_COLOR);
        assert_eq!(score_color(Some(f64::NAN)), DEFAULT_COLOR);
        assert_eq!(score_color(Some(f64::INFINITY)), DEFAULT_COLOR);
        assert_eq!(score_color_or(None, "white"), "white");
        assert_eq!(score_color_or(Some(11.0), "white"), "white");
    }
}
