use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::FIXTURES;
use crate::data::parser::{read_light_curve, to_delimited_text};
use crate::data::samples::{SampleKind, generate_sample};
use crate::models::LightCurve;

/// Anything that can hand the classifier a light curve.
pub trait LightCurveSource: Send + Sync {
    /// Human-readable origin, used as the report's `source` label.
    fn signature(&self) -> String;

    fn load(&self) -> Result<LightCurve>;
}

/// A delimited text file on disk.
pub struct FileSource {
    pub path: PathBuf,
}

impl LightCurveSource for FileSource {
    fn signature(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<LightCurve> {
        read_light_curve(&self.path)
            .with_context(|| format!("Failed to load light curve: {}", self.path.display()))
    }
}

/// A seeded synthetic curve.
pub struct SyntheticSource {
    pub kind: SampleKind,
    pub seed: u64,
}

impl LightCurveSource for SyntheticSource {
    fn signature(&self) -> String {
        format!("{} (seed {})", self.kind, self.seed)
    }

    fn load(&self) -> Result<LightCurve> {
        Ok(generate_sample(self.kind, self.seed))
    }
}

/// Loads every source, keeping the signature alongside the series.
/// Stops at the first source that fails.
pub fn load_all(sources: &[Box<dyn LightCurveSource>]) -> Result<Vec<(String, LightCurve)>> {
    sources
        .iter()
        .map(|source| -> Result<(String, LightCurve)> { Ok((source.signature(), source.load()?)) })
        .collect()
}

fn create_file_with_parents(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))
}

/// Writes `series` as a `time,flux` file, creating parent directories as needed.
pub fn write_light_curve(path: &Path, series: &LightCurve) -> Result<()> {
    let mut file = create_file_with_parents(path)?;
    file.write_all(to_delimited_text(series, FIXTURES.header).as_bytes())
        .with_context(|| format!("Failed to write light curve: {}", path.display()))
}
