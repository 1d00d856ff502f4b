// crates/riskglobe-core/src/loader/fetch.rs

// ---------------------------------------------------------------------------
// FILE GUARD: blocking HTTP is CLI-only; the browser goes through fetch().
// ---------------------------------------------------------------------------
#![cfg(feature = "fetch")]

use crate::error::Result;
use crate::model::{Boundaries, ScoreTable};

/// Downloads a document as text. One request, no retries.
pub fn fetch_text(url: &str) -> Result<String> {
    tracing::info!(%url, "fetching");
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    Ok(body)
}

pub fn fetch_scores(url: &str) -> Result<ScoreTable> {
    ScoreTable::from_json_str(&fetch_text(url)?)
}

pub fn fetch_boundaries(url: &str) -> Result<Boundaries> {
    Boundaries::from_json_str(&fetch_text(url)?)
}
