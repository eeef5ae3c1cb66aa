//! Configuration module for the light curve classifier.

// Can all be private now because we have a public re-export.
mod analysis;
mod debug;
mod demo;
mod persistence;
mod types;

// Re-export commonly used items
pub use analysis::{
    CLASSIFIER,
    ClassifierConfig,
    PeriodicitySettings,
    RuleSettings,
    SegmentationSettings,
    ShapeSettings,
};
pub use debug::DEBUG_FLAGS;
pub use demo::{FlareShape, PeriodicDip, SAMPLES, SampleConfig, SingleDip};
pub use persistence::{FIXTURES, sample_filename};
pub use types::{Confidence, DepthPct, PeriodDays};
