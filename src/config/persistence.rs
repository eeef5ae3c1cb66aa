//! Fixture file configuration
use crate::data::SampleKind;

/// Configuration for synthetic sample files written by `make_samples`
pub struct FixtureConfig {
    /// Default output directory
    pub directory: &'static str,
    /// Header line written at the top of every file
    pub header: &'static str,
    pub extension: &'static str,
}

pub const FIXTURES: FixtureConfig = FixtureConfig {
    directory: "samples",
    header: "time,flux",
    extension: "csv",
};

/// Example: "eclipsing-binary_s42.csv"
pub fn sample_filename(kind: SampleKind, seed: u64) -> String {
    format!("{}_s{}.{}", kind, seed, FIXTURES.extension)
}
