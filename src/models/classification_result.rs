use serde::{Deserialize, Serialize};

use crate::config::{Confidence, DepthPct, PeriodDays};
use crate::domain::Classification;
use crate::models::LightCurve;

/// The classifier's output contract with the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub exoplanet_detected: bool,
    pub confidence: Confidence,
    pub transit_depth_pct: DepthPct,
    pub period_days: PeriodDays,
    pub classification: Classification,
    pub message: String,

    /// Normalized input, with `transit` set on in-transit samples
    pub annotated_series: LightCurve,
    /// Phase-folded curve. Empty unless an exoplanet was detected with a positive period.
    pub folded_series: LightCurve,
}

impl ClassificationResult {
    /// Result for series too short to classify.
    pub(crate) fn insufficient_data(series: &LightCurve, min_len: usize) -> Self {
        Self {
            exoplanet_detected: false,
            confidence: Confidence::ZERO,
            transit_depth_pct: DepthPct::ZERO,
            period_days: PeriodDays::NONE,
            classification: Classification::NoiseOther,
            message: format!(
                "Not enough data to analyze: {} samples supplied, at least {} required.",
                series.len(),
                min_len
            ),
            annotated_series: series.clone(),
            folded_series: LightCurve::default(),
        }
    }

    pub fn has_folded_data(&self) -> bool {
        !self.folded_series.is_empty()
    }

    /// One-line banner text: "Exoplanet Candidate (99.0%)"
    pub fn banner(&self) -> String {
        format!("{} ({})", self.classification, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_shape() {
        let lc = LightCurve::from_pairs([(0.0, 1.0), (1.0, 0.9)]);
        let result = ClassificationResult::insufficient_data(&lc, 10);
        assert_eq!(result.classification, Classification::NoiseOther);
        assert_eq!(result.confidence.value(), 0.0);
        assert!(!result.exoplanet_detected);
        assert!(!result.has_folded_data());
        assert_eq!(result.annotated_series, lc);
        assert!(result.message.contains("2 samples"));
    }

    #[test]
    fn test_camel_case_json() {
        let lc = LightCurve::default();
        let result = ClassificationResult::insufficient_data(&lc, 10);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["exoplanetDetected"], false);
        assert_eq!(json["classification"], "NoiseOther");
        assert!(json.get("transitDepthPct").is_some());
        assert!(json.get("foldedSeries").is_some());
    }
}
