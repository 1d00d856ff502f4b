//! Interaction example for riskglobe-rs
//!
//! Replays a short session against the globe state machine: hover a few
//! countries, drag, scroll out past the minimum zoom, then tear down.

use riskglobe_core::loader::SampleData;
use riskglobe_core::prelude::*;

fn main() -> Result<()> {
    println!("=== riskglobe-rs Interaction Example ===\n");

    let data = SampleData::load()?;
    let mut view: GlobeView = GlobeView::new(1024.0, 768.0, GlobeConfig::default());
    view.receive_scores(data.scores.clone());
    view.receive_boundaries(Ok(data.boundaries.clone()));
    println!("State: {:?}\n", view.state());

    // Example 1: Hover
    println!("--- Example 1: Hover ---");
    let Some(scene) = view.scene() else {
        return Err(GlobeError::InvalidData("scene missing".into()));
    };
    let names: Vec<String> = scene.shapes.iter().map(|s| s.name.clone()).collect();
    for (index, name) in names.iter().enumerate() {
        view.handle(GlobeEvent::HoverEnter { index });
        match view.details() {
            Some(line) => println!("  {line}"),
            None => println!("  {name}: (no details)"),
        }
    }
    view.handle(GlobeEvent::HoverLeave);
    println!();

    // Example 2: Drag
    println!("--- Example 2: Drag ---");
    let mut drag = DragGesture::default();
    drag.start(500.0, 400.0);
    for (x, y) in [(540.0, 400.0), (600.0, 380.0), (640.0, 360.0)] {
        if let Some((dx, dy)) = drag.move_to(x, y) {
            view.handle(GlobeEvent::Drag { dx, dy });
            println!("  rotation = {:?}", view.controller().rotation());
        }
    }
    drag.end();
    println!();

    // Example 3: Wheel zoom, including the floor
    println!("--- Example 3: Zoom ---");
    let mut zoom = ZoomGesture::new();
    for delta_y in [-200.0, 400.0, 1500.0, -100.0] {
        let requested = zoom.wheel(delta_y, 0, false);
        if let ViewUpdate::Zoomed { factor } = view.handle(GlobeEvent::Zoom { factor: requested }) {
            zoom.reset_to(factor);
            println!(
                "  deltaY {delta_y:>7}: requested {requested:.3}, applied {factor:.3}, scale {:.1}",
                view.controller().scale()
            );
        }
    }
    println!();

    // Example 4: Teardown
    println!("--- Example 4: Teardown ---");
    view.destroy();
    let ignored = view.handle(GlobeEvent::Drag { dx: 10.0, dy: 0.0 });
    println!("  State: {:?}, drag after destroy -> {ignored:?}", view.state());

    Ok(())
}
