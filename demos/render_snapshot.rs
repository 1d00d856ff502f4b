//! Snapshot example for riskglobe-rs
//!
//! This example demonstrates how to:
//! - Load the bundled score and boundary documents
//! - Build a scene and inspect its statistics
//! - Write the globe as a standalone SVG file

use riskglobe_core::loader::SampleData;
use riskglobe_core::prelude::*;

fn main() -> Result<()> {
    println!("=== riskglobe-rs Snapshot Example ===\n");

    println!("Loading sample data...");
    let data = SampleData::load()?;
    println!(
        "✓ {} score records, {} boundary features\n",
        data.scores.len(),
        data.boundaries.len()
    );

    let config = GlobeConfig::default();
    let (width, height) = (1024.0, 900.0);
    let controller = ProjectionController::new(width, height, &config);
    let scene = Scene::build((width, height), data.boundaries, &data.scores, &controller, &config);

    println!("--- Colors ---");
    for shape in &scene.shapes {
        let score = shape
            .score
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:<16} {:>5}  {}", shape.name, score, shape.fill);
    }
    println!();

    let stats = scene.stats();
    println!("--- Stats ---");
    println!("  Shapes: {}", stats.shapes);
    println!("  Scored: {}", stats.scored);
    println!("  Visible: {}\n", stats.visible);

    let out = std::env::temp_dir().join("riskglobe_snapshot.svg");
    std::fs::write(&out, scene.to_svg())?;
    println!("✓ Wrote {}", out.display());

    Ok(())
}
