use riskglobe_core::color::{DEFAULT_COLOR, ORANGE, RED, YELLOW, YELLOW_GREEN};
use riskglobe_core::loader::SampleData;
use riskglobe_core::prelude::*;

fn build_scene() -> Scene {
    let data = SampleData::load().expect("bundled sample data");
    let config = GlobeConfig::default();
    let controller = ProjectionController::new(1200.0, 900.0, &config);
    Scene::build((1200.0, 900.0), data.boundaries, &data.scores, &controller, &config)
}

#[test]
fn sample_data_loads() {
    let data = SampleData::load().unwrap();
    assert_eq!(data.scores.len(), 10);
    assert_eq!(data.boundaries.len(), 11);
    assert!(data.boundaries.features.iter().all(|f| f.geometry.is_some()));
}

#[test]
fn sample_covers_every_bucket() {
    let scene = build_scene();
    let fill = |code: &str| scene.shape_by_code(code).unwrap().fill.clone();

    assert_eq!(fill("FR"), RED);
    assert_eq!(fill("US"), ORANGE);
    assert_eq!(fill("BR"), YELLOW);
    assert_eq!(fill("AU"), YELLOW);
    assert_eq!(fill("NO"), YELLOW_GREEN);
    // Not entitled, null score, out of range.
    assert_eq!(fill("IN"), DEFAULT_COLOR);
    assert_eq!(fill("CA"), DEFAULT_COLOR);
    assert_eq!(fill("ZA"), DEFAULT_COLOR);
    assert_eq!(fill("CN"), DEFAULT_COLOR);
    // Unpatched sentinel never joins.
    assert_eq!(fill("-99"), DEFAULT_COLOR);
}

#[test]
fn sentinel_countries_keep_their_raw_class() {
    let scene = build_scene();
    let norway = scene.shape_by_code("NO").unwrap();
    assert_eq!(norway.raw_code, "-99");
    assert_eq!(norway.class_name(), "country_-99");
}

#[test]
fn brazil_details_round_to_two_decimals() {
    let data = SampleData::load().unwrap();
    assert_eq!(
        country_details(&data.scores, "BR", "Brazil").as_deref(),
        Some("Brazil: 6.79")
    );
}

#[test]
fn scene_renders_to_svg() {
    let scene = build_scene();
    let svg = scene.to_svg();
    assert_eq!(svg.matches("<path").count(), 11);
    assert!(svg.contains("United States"));
    assert!(scene.stats().visible > 0);
}
