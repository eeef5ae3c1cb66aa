#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use analysis::{LightCurveClassifier, classify};
pub use config::{CLASSIFIER, ClassifierConfig, SAMPLES};
pub use data::SampleKind;
pub use domain::{Classification, Sample};
pub use models::{AnalysisReport, ClassificationResult, LightCurve};

use crate::analysis::diagnostics::DEFAULT_HISTOGRAM_BINS;
use crate::data::{FileSource, LightCurveSource, SyntheticSource, load_all};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Light curve files (time,flux per line). Several files are analyzed in parallel.
    pub files: Vec<PathBuf>,

    /// Analyze a built-in synthetic curve (used when no files are given)
    #[arg(long, value_enum)]
    pub sample: Option<SampleKind>,

    /// Seed for --sample
    #[arg(long, default_value_t = SAMPLES.default_seed)]
    pub seed: u64,

    /// JSON file overriding classifier thresholds; missing keys keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print full reports as JSON instead of a summary table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Number of flux histogram bins
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,
}

impl Cli {
    /// Files first; otherwise the requested sample, defaulting to a confirmed planet.
    pub fn sources(&self) -> Vec<Box<dyn LightCurveSource>> {
        if self.files.is_empty() {
            let kind = self.sample.unwrap_or(SampleKind::ConfirmedPlanet);
            return vec![Box::new(SyntheticSource {
                kind,
                seed: self.seed,
            })];
        }

        let mut sources: Vec<Box<dyn LightCurveSource>> = self
            .files
            .iter()
            .map(|path| Box::new(FileSource { path: path.clone() }) as Box<dyn LightCurveSource>)
            .collect();
        if let Some(kind) = self.sample {
            sources.push(Box::new(SyntheticSource {
                kind,
                seed: self.seed,
            }));
        }
        sources
    }

    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let Some(path) = &self.config else {
            return Ok(CLASSIFIER);
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        ClassifierConfig::from_json(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Loads every requested series and analyzes them.
/// This is the public API for the binary to call.
pub fn run(args: &Cli) -> Result<Vec<AnalysisReport>> {
    let classifier = LightCurveClassifier::new(args.classifier_config()?);
    let inputs = load_all(&args.sources())?;
    Ok(classifier.analyze_batch(&inputs, args.bins))
}
