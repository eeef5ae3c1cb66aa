use serde::{Deserialize, Serialize};

use crate::models::{ClassificationResult, LightCurve};

/// One bar of the flux distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge of the bin
    pub flux: f64,
    pub count: usize,
}

/// Classification plus the derived data drawn next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// File path or sample name the series came from
    pub source: String,
    pub result: ClassificationResult,
    pub histogram: Vec<HistogramBin>,
    /// 0..=100, scaled flux standard deviation
    pub stellar_activity_index: u32,
    /// Folded samples around the deepest point, re-centred on it
    pub transit_profile: LightCurve,
}
