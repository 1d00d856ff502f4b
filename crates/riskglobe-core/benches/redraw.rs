use criterion::{criterion_group, criterion_main, Criterion};
use riskglobe_core::loader::SampleData;
use riskglobe_core::prelude::*;
use std::hint::black_box;

fn redraw_benchmarks(c: &mut Criterion) {
    let data = SampleData::load().expect("bundled sample data");
    let config = GlobeConfig::default();

    c.bench_function("build_scene", |b| {
        let controller = ProjectionController::new(1280.0, 800.0, &config);
        b.iter(|| {
            Scene::build(
                (1280.0, 800.0),
                black_box(data.boundaries.clone()),
                &data.scores,
                &controller,
                &config,
            )
        })
    });

    c.bench_function("drag_redraw", |b| {
        let mut view: GlobeView = GlobeView::new(1280.0, 800.0, config.clone());
        view.receive_scores(data.scores.clone());
        view.receive_boundaries(Ok(data.boundaries.clone()));
        b.iter(|| view.handle(black_box(GlobeEvent::Drag { dx: 3.0, dy: 1.0 })))
    });
}

criterion_group!(benches, redraw_benchmarks);
criterion_main!(benches);
