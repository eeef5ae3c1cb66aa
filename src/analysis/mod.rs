// Light curve analysis: segmentation, periodicity, classification and derived data
pub mod classifier;
pub mod diagnostics;
pub mod event_segmenter;
pub mod normalizer;
pub mod periodicity;
pub mod phase_folder;
pub mod rules;

pub use classifier::{LightCurveClassifier, classify};
