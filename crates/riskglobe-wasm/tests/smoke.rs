use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use riskglobe_wasm::{details_line, normalize_code, score_color};

#[wasm_bindgen_test]
fn colors_by_bucket() {
    assert_eq!(score_color(Some(1.25)), "#ce181f");
    assert_eq!(score_color(Some(3.0)), "#f47721");
    assert_eq!(score_color(Some(6.79)), "#ffc709");
    assert_eq!(score_color(Some(8.4)), "#d6e040");
    assert_eq!(score_color(Some(11.0)), "LightGray");
    assert_eq!(score_color(None), "LightGray");
}

#[wasm_bindgen_test]
fn patches_sentinel_codes() {
    assert_eq!(normalize_code("-99", "France"), "FR");
    assert_eq!(normalize_code("-99", "Somaliland"), "-99");
    assert_eq!(normalize_code("DE", "Germany"), "DE");
}

#[wasm_bindgen_test]
fn detail_line_respects_entitlement() {
    assert_eq!(details_line("United States", Some(3.0), true).as_deref(), Some("United States: 3.00"));
    assert_eq!(details_line("Canada", Some(9.0), false), None);
    assert_eq!(details_line("South Africa", None, true), None);
    assert_eq!(details_line("Nowhere", Some(f64::NAN), true), None);
}
