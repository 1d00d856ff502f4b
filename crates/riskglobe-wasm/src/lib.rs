//! riskglobe-wasm — WebAssembly front-end for riskglobe-core
//!
//! This crate mounts the interactive risk globe into a web page. The
//! projection, coloring and interaction state live in `riskglobe-core`;
//! this crate fetches the two documents, mirrors the scene into SVG
//! elements and forwards DOM events.
//!
//! What it provides
//! ----------------
//! - Panic hook installation on module load (via `#[wasm_bindgen(start)]`)
//! - `GlobeApp`: `new GlobeApp(config?)` mounts into `#globe`,
//!   `globe.destroy()` cancels pending data and detaches every listener
//! - `Listener`: an event listener that detaches itself on drop
//! - Small pure helpers: `score_color(score)`, `normalize_code(code, name)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { GlobeApp } from 'riskglobe-wasm';
//!
//! async function main() {
//!   await init();
//!   const globe = new GlobeApp({
//!     scores_url: './assets/data.json',
//!     boundaries_url: 'assets/ne_110m_admin_0_countries.json',
//!   });
//!   window.addEventListener('beforeunload', () => globe.destroy());
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Config keys match `GlobeConfig` field names; omitted keys take their
//!   defaults.
//! - Fetch failures are logged to the console and leave a gray (or
//!   ocean-only) globe on the page.
use wasm_bindgen::prelude::*;

mod app;
mod dom;
mod listener;
mod log;
mod service;

pub use app::GlobeApp;
pub use dom::DETAILS_CLASS;
pub use listener::Listener;
pub use service::{DataService, Subscription};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log::info("riskglobe: module initialized");
}

/* --------------------------------------------------------------------------
   Helpers
-------------------------------------------------------------------------- */

/// Fill color for a score; `undefined`/`null` gives the default gray.
#[wasm_bindgen]
pub fn score_color(score: Option<f64>) -> String {
    riskglobe_core::color::score_color(score).to_string()
}

/// Join code for a boundary feature, patching the `-99` sentinel.
#[wasm_bindgen]
pub fn normalize_code(code: &str, name: &str) -> String {
    riskglobe_core::normalize::normalize_code(code, name).to_string()
}

/// The detail line for one record, mirroring what hover shows.
#[wasm_bindgen]
pub fn details_line(name: &str, score: Option<f64>, entitled: bool) -> Option<String> {
    let record = riskglobe_core::ScoreRecord::new("", score, entitled);
    let table: riskglobe_core::ScoreTable = std::iter::once(record).collect();
    riskglobe_core::detail::country_details(&table, "", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_delegate_to_core() {
        assert_eq!(score_color(Some(3.0)), "#f47721");
        assert_eq!(score_color(None), "LightGray");
        assert_eq!(normalize_code("-99", "Norway"), "NO");
        assert_eq!(details_line("Brazil", Some(6.789), true).as_deref(), Some("Brazil: 6.79"));
        assert_eq!(details_line("Canada", Some(9.0), false), None);
    }
}
