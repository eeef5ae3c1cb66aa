mod classification_result;
mod event;
mod light_curve;
mod report;

pub use {
    classification_result::ClassificationResult,
    event::Event,
    light_curve::LightCurve,
    report::{AnalysisReport, HistogramBin},
};
