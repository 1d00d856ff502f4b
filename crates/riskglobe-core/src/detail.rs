// crates/riskglobe-core/src/detail.rs
use crate::normalize::normalize_code;
use crate::traits::ScoreLookup;

/// Title shown above the hover detail line.
pub const DETAILS_TITLE: &str = "Client's Risk Portfolio";

/// The hover text for a country: `"<name>: <score with 2 decimals>"`.
///
/// Returns `None` (cleared) when the country has no record, is not entitled,
/// or has no score.
///
/// ```rust
/// use riskglobe_core::detail::country_details;
/// use riskglobe_core::{ScoreRecord, ScoreTable};
///
/// let table: ScoreTable = [ScoreRecord::new("BR", Some(6.789), true)].into_iter().collect();
/// assert_eq!(country_details(&table, "BR", "Brazil").as_deref(), Some("Brazil: 6.79"));
/// assert_eq!(country_details(&table, "AR", "Argentina"), None);
/// ```
pub fn country_details<L: ScoreLookup + ?Sized>(
    scores: &L,
    raw_code: &str,
    name: &str,
) -> Option<String> {
    let code = normalize_code(raw_code, name);
    scores
        .visible_score(code)
        .map(|score| format!("{name}: {score:.2}"))
}
