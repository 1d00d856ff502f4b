// crates/riskglobe-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, optional HTTP) and
//! delegates payload parsing to the model.

use crate::error::{GlobeError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "json")]
mod documents;
#[cfg(feature = "fetch")]
mod fetch;

#[cfg(feature = "json")]
pub use documents::SampleData;
#[cfg(feature = "fetch")]
pub use fetch::{fetch_boundaries, fetch_scores, fetch_text};

/// Directory holding the bundled sample documents.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_scores_filename() -> &'static str {
    "data.json"
}

pub fn default_boundaries_filename() -> &'static str {
    "sample_countries.geojson"
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GlobeError::NotFound(format!("Document not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(GlobeError::InvalidData(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
