// crates/riskglobe-core/src/loader/documents.rs
use super::{default_boundaries_filename, default_data_dir, default_scores_filename, open_stream};
use crate::error::Result;
use crate::model::{Boundaries, ScoreTable};
use once_cell::sync::OnceCell;
use std::path::Path;

// Single in-process cache so the bundled sample is parsed once per process.
static SAMPLE_CACHE: OnceCell<SampleData> = OnceCell::new();

impl ScoreTable {
    /// Loads a score document from disk (`.json` or `.json.gz`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref())?;
        Self::from_reader(reader)
    }
}

impl Boundaries {
    /// Loads a GeoJSON boundary document from disk (`.geojson`, `.json`, or
    /// either gzipped).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let boundaries = Self::from_reader(reader)?;
        tracing::debug!(path = %path.display(), features = boundaries.len(), "boundaries loaded");
        Ok(boundaries)
    }
}

/// The small dataset shipped in `data/`: a handful of countries with scores,
/// enough to exercise every color bucket and the code patches.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub scores: ScoreTable,
    pub boundaries: Boundaries,
}

impl SampleData {
    pub fn load() -> Result<Self> {
        SAMPLE_CACHE
            .get_or_try_init(|| {
                let dir = default_data_dir();
                Ok(Self {
                    scores: ScoreTable::load_from_path(dir.join(default_scores_filename()))?,
                    boundaries: Boundaries::load_from_path(
                        dir.join(default_boundaries_filename()),
                    )?,
                })
            })
            .cloned()
    }
}
