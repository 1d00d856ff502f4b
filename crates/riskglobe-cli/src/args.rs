use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for riskglobe-cli
#[derive(Debug, Parser)]
#[command(
    name = "riskglobe",
    version,
    about = "CLI for inspecting risk scores and rendering globe snapshots"
)]
pub struct CliArgs {
    /// Score document (default: the bundled data.json). URLs need the `fetch` feature.
    #[arg(short = 's', long = "scores", global = true)]
    pub scores: Option<String>,

    /// GeoJSON boundary document (default: the bundled sample). URLs need the `fetch` feature.
    #[arg(short = 'b', long = "boundaries", global = true)]
    pub boundaries: Option<String>,

    /// JSON file with globe settings; missing keys keep their defaults
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, global = true, default_value_t = 1024.0)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, global = true, default_value_t = 768.0)]
    pub height: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded documents
    Stats,

    /// List all countries of the boundary document with their color
    Countries {
        /// Only countries with a visible score
        #[arg(long)]
        scored: bool,
    },

    /// Show what hovering a country would display
    Country {
        /// ISO2 code or (part of) the country name, accents ignored
        query: String,
    },

    /// Render the globe as a standalone SVG
    Render {
        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Drag by DX,DY pixels before rendering (e.g. --drag=-120,40)
        #[arg(long, value_name = "DX,DY", value_parser = parse_pair, allow_hyphen_values = true)]
        drag: Option<(f64, f64)>,

        /// Zoom factor relative to the initial scale
        #[arg(long)]
        zoom: Option<f64>,
    },
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("{v:?}: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_drag_pairs() {
        assert_eq!(parse_pair("-120, 40"), Ok((-120.0, 40.0)));
        assert!(parse_pair("12").is_err());
        assert!(parse_pair("a,b").is_err());
    }

    #[test]
    fn parses_render_flags() {
        let args = CliArgs::try_parse_from([
            "riskglobe", "--width", "800", "render", "--drag=-10,5", "--zoom", "2",
        ])
        .unwrap();
        assert_eq!(args.width, 800.0);
        match args.command {
            Commands::Render { drag, zoom, output } => {
                assert_eq!(drag, Some((-10.0, 5.0)));
                assert_eq!(zoom, Some(2.0));
                assert!(output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
