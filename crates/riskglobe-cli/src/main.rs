//! riskglobe-cli — Command-line interface for riskglobe-core
//!
//! This binary inspects score and boundary documents from your terminal and
//! renders the globe to a static SVG, using the same projection, colors and
//! detail strings as the browser front-end.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ riskglobe stats
//!
//! - List countries and their fill colors
//!   $ riskglobe countries
//!   $ riskglobe countries --scored
//!
//! - Show the hover line for a country (code or name, accents ignored)
//!   $ riskglobe country br
//!   $ riskglobe country "cote d'ivoire"
//!
//! - Render a snapshot, rotated and zoomed
//!   $ riskglobe render --drag=-120,40 --zoom 1.5 -o globe.svg
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample documents bundled with
//! `riskglobe-core`. Use `--scores` and `--boundaries` to point at other
//! files (`.gz` is decompressed transparently); with the `fetch` feature
//! both also accept http(s) URLs. Set `RUST_LOG=debug` for loader and
//! projection logs on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use riskglobe_core::loader::{default_boundaries_filename, default_data_dir, default_scores_filename};
use riskglobe_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => GlobeConfig::load_from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => GlobeConfig::default(),
    };

    let scores = load_scores(args.scores.as_deref())?;
    let boundaries = load_boundaries(args.boundaries.as_deref())?;
    tracing::debug!(scores = scores.len(), features = boundaries.len(), "documents loaded");

    match args.command {
        Commands::Stats => {
            let controller = ProjectionController::new(args.width, args.height, &config);
            let scene = Scene::build(
                (args.width, args.height),
                boundaries,
                &scores,
                &controller,
                &config,
            );
            let stats = scene.stats();
            println!("Data statistics:");
            println!("  Score records: {}", scores.len());
            println!("  Visible scores: {}", scores.visible_count());
            println!("  Countries: {}", stats.shapes);
            println!("  Colored: {}", stats.scored);
            println!("  On the visible hemisphere: {}", stats.visible);
        }

        Commands::Countries { scored } => {
            for feature in &boundaries.features {
                let score = scores.visible_score(feature.code());
                if scored && score.is_none() {
                    continue;
                }
                println!(
                    "{} ({}) {}",
                    feature.name,
                    feature.code(),
                    score_color_or(score, &config.default_fill)
                );
            }
        }

        Commands::Country { query } => {
            let found = boundaries
                .find_by_code(&query)
                .or_else(|| boundaries.find_by_name(&query));
            match found {
                Some(feature) => {
                    let code = feature.code();
                    let score = scores.visible_score(code);
                    println!("Country: {}", feature.name);
                    println!("Code: {} (raw {})", code, feature.iso_a2);
                    let record = scores.record(code);
                    if let Some(label) = record.and_then(|r| r.name.as_deref()) {
                        println!("Record name: {label}");
                    }
                    println!("Entitled: {}", record.is_some_and(|r| r.entitled));
                    println!("Color: {}", score_color_or(score, &config.default_fill));
                    match country_details(&scores, &feature.iso_a2, &feature.name) {
                        Some(line) => println!("Details: {line}"),
                        None => println!("Details: (none)"),
                    }
                }
                None => {
                    eprintln!("No country found for: {query}");
                }
            }
        }

        Commands::Render { output, drag, zoom } => {
            let mut view: GlobeView = GlobeView::new(args.width, args.height, config);
            view.receive_scores(scores);
            view.receive_boundaries(Ok(boundaries));
            if let Some((dx, dy)) = drag {
                view.handle(GlobeEvent::Drag { dx, dy });
            }
            if let Some(factor) = zoom {
                if let ViewUpdate::Zoomed { factor: applied } = view.handle(GlobeEvent::Zoom { factor }) {
                    if applied != factor {
                        tracing::warn!(requested = factor, applied, "zoom clamped to the minimum");
                    }
                }
            }
            let Some(scene) = view.scene() else {
                bail!("scene was not built");
            };
            let svg = scene.to_svg();
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{svg}"),
            }
        }
    }

    Ok(())
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn load_scores(source: Option<&str>) -> anyhow::Result<ScoreTable> {
    let Some(source) = source else {
        let path = default_data_dir().join(default_scores_filename());
        return Ok(ScoreTable::load_from_path(path)?);
    };
    if is_url(source) {
        #[cfg(feature = "fetch")]
        return Ok(riskglobe_core::loader::fetch_scores(source)?);
        #[cfg(not(feature = "fetch"))]
        bail!("{source} is a URL; rebuild with the `fetch` feature to download it");
    }
    ScoreTable::load_from_path(source).with_context(|| format!("loading scores from {source}"))
}

fn load_boundaries(source: Option<&str>) -> anyhow::Result<Boundaries> {
    let Some(source) = source else {
        let path = default_data_dir().join(default_boundaries_filename());
        return Ok(Boundaries::load_from_path(path)?);
    };
    if is_url(source) {
        #[cfg(feature = "fetch")]
        return Ok(riskglobe_core::loader::fetch_boundaries(source)?);
        #[cfg(not(feature = "fetch"))]
        bail!("{source} is a URL; rebuild with the `fetch` feature to download it");
    }
    Boundaries::load_from_path(source)
        .with_context(|| format!("loading boundaries from {source}"))
}
