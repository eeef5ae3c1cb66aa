use rayon::prelude::*;

use crate::analysis::diagnostics::{average_transit_profile, flux_histogram, stellar_activity_index};
use crate::analysis::event_segmenter::segment;
use crate::analysis::normalizer::normalize;
use crate::analysis::phase_folder::phase_fold;
use crate::analysis::rules::{ClassificationRule, RuleContext, Verdict, default_rules};
use crate::config::{CLASSIFIER, ClassifierConfig, DEBUG_FLAGS};
use crate::models::{AnalysisReport, ClassificationResult, LightCurve};

/// Heuristic light curve classifier.
///
/// Pipeline: normalize -> segment -> rule chain (first match wins) -> annotate -> fold.
/// Every call is a pure function of the input series; nothing is kept between calls.
pub struct LightCurveClassifier {
    config: ClassifierConfig,
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl Default for LightCurveClassifier {
    fn default() -> Self {
        Self::new(CLASSIFIER)
    }
}

impl LightCurveClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Replaces the standard chain. The last rule should always answer;
    /// if none does the series is reported as NoiseOther with zero confidence.
    pub fn with_rules(config: ClassifierConfig, rules: Vec<Box<dyn ClassificationRule>>) -> Self {
        Self { config, rules }
    }

    pub fn classify(&self, series: &LightCurve) -> ClassificationResult {
        if series.len() < self.config.min_series_len {
            log::warn!(
                "Series has {} samples (< {}); not classifying",
                series.len(),
                self.config.min_series_len
            );
            return ClassificationResult::insufficient_data(series, self.config.min_series_len);
        }

        let normalized = normalize(series);
        let segmentation = segment(&normalized, &self.config.segmentation);
        log::debug!(
            "Segmented {} samples into {} dips and {} flares",
            normalized.len(),
            segmentation.dip_events.len(),
            segmentation.flare_events.len()
        );

        let ctx = RuleContext::new(&self.config, &segmentation);
        let Some((rule_name, verdict)) = self
            .rules
            .iter()
            .find_map(|rule| rule.evaluate(&ctx).map(|v| (rule.name(), v)))
        else {
            log::warn!("No classification rule matched; reporting as noise");
            let mut result =
                ClassificationResult::insufficient_data(&normalized, self.config.min_series_len);
            result.message = "No classification rule matched this light curve.".to_string();
            return result;
        };

        if DEBUG_FLAGS.log_rule_chain {
            log::info!(
                "Rule '{}' -> {} ({})",
                rule_name,
                verdict.classification,
                verdict.confidence
            );
        }

        Self::build_result(normalized, verdict)
    }

    fn build_result(normalized: LightCurve, verdict: Verdict) -> ClassificationResult {
        let annotated: LightCurve = if verdict.transit_windows.is_empty() {
            normalized
        } else {
            normalized
                .iter()
                .map(|s| {
                    let in_transit = verdict
                        .transit_windows
                        .iter()
                        .any(|&(start, end)| s.time >= start && s.time <= end);
                    s.with_transit(in_transit)
                })
                .collect()
        };

        let folded = match verdict.fold {
            Some(fold) if verdict.exoplanet_detected && fold.period > 0.0 => {
                phase_fold(&annotated, fold.epoch, fold.period)
            }
            _ => LightCurve::default(),
        };

        ClassificationResult {
            exoplanet_detected: verdict.exoplanet_detected,
            confidence: verdict.confidence,
            transit_depth_pct: verdict.depth,
            period_days: verdict.period,
            classification: verdict.classification,
            message: verdict.message,
            annotated_series: annotated,
            folded_series: folded,
        }
    }

    /// Classification plus histogram, activity index and transit profile.
    pub fn analyze(&self, source: &str, series: &LightCurve, bins: usize) -> AnalysisReport {
        let result = crate::trace_time!("Classify light curve", 1_000, { self.classify(series) });
        if result.has_folded_data() {
            log::debug!("{}: folded {} samples", source, result.folded_series.len());
        }
        let histogram = flux_histogram(&result.annotated_series, bins);
        let stellar_activity_index = stellar_activity_index(&result.annotated_series);
        let transit_profile =
            average_transit_profile(&result.folded_series, result.period_days.value());

        AnalysisReport {
            source: source.to_string(),
            result,
            histogram,
            stellar_activity_index,
            transit_profile,
        }
    }

    /// Analyzes independent series in parallel. Output order matches input order.
    pub fn analyze_batch(&self, inputs: &[(String, LightCurve)], bins: usize) -> Vec<AnalysisReport> {
        inputs
            .par_iter()
            .map(|(source, series)| self.analyze(source, series, bins))
            .collect()
    }
}

/// Classifies with the default configuration.
pub fn classify(series: &LightCurve) -> ClassificationResult {
    LightCurveClassifier::default().classify(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Classification;

    /// 1.0 baseline with box dips of `depth` lasting `width` samples every `every` samples.
    fn dip_train(len: usize, every: usize, width: usize, depth: f64) -> LightCurve {
        LightCurve::from_pairs((0..len).map(|i| {
            let flux = if i % every < width { 1.0 - depth } else { 1.0 };
            (i as f64 * 0.1, flux)
        }))
    }

    #[test]
    fn test_short_series_is_noise_with_zero_confidence() {
        for len in 0..10 {
            let lc = dip_train(len, 3, 1, 0.05);
            let result = classify(&lc);
            assert_eq!(result.classification, Classification::NoiseOther);
            assert_eq!(result.confidence.value(), 0.0);
            assert!(result.folded_series.is_empty());
        }
    }

    #[test]
    fn test_flat_series_is_noise() {
        let lc = LightCurve::from_pairs((0..100).map(|i| (i as f64, 1.0)));
        let result = classify(&lc);
        assert_eq!(result.classification, Classification::NoiseOther);
        assert_eq!(result.confidence.value(), 0.1);
        assert_eq!(result.annotated_series.len(), 100);
    }

    #[test]
    fn test_periodic_train_is_annotated_and_folded() {
        // Dips of 5 samples every 40 samples -> 10 dips, period 4.0
        let lc = dip_train(400, 40, 5, 0.01);
        let result = classify(&lc);

        assert_eq!(result.classification, Classification::ExoplanetCandidate);
        assert!(result.exoplanet_detected);
        assert!((result.period_days.value() - 4.0).abs() < 1e-9);
        assert_eq!(result.annotated_series.transit_count(), 50);
        assert_eq!(result.folded_series.len(), 400);
        let half = result.period_days.value() / 2.0;
        assert!(result.folded_series.iter().all(|s| s.time >= -half && s.time < half));
    }

    #[test]
    fn test_normalizes_before_thresholding() {
        // Same shape as above but at a baseline of 5000 counts
        let lc: LightCurve = dip_train(400, 40, 5, 0.01)
            .iter()
            .map(|s| s.with_flux(s.flux * 5000.0))
            .collect();
        let result = classify(&lc);
        assert_eq!(result.classification, Classification::ExoplanetCandidate);
        assert!((result.annotated_series.samples[10].flux - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_injected_config_changes_outcome() {
        let lc = dip_train(400, 40, 5, 0.01);
        let mut config = CLASSIFIER;
        // Five-point dips no longer count as events
        config.segmentation.min_event_points = 6;
        let result = LightCurveClassifier::new(config).classify(&lc);
        assert_eq!(result.classification, Classification::NoiseOther);
        assert_eq!(result.confidence.value(), 0.1);
    }

    #[test]
    fn test_empty_rule_chain_degrades_to_noise() {
        let lc = dip_train(100, 40, 5, 0.01);
        let classifier = LightCurveClassifier::with_rules(CLASSIFIER, Vec::new());
        let result = classifier.classify(&lc);
        assert_eq!(result.classification, Classification::NoiseOther);
        assert_eq!(result.confidence.value(), 0.0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec![
            ("flat".to_string(), LightCurve::from_pairs((0..50).map(|i| (i as f64, 1.0)))),
            ("train".to_string(), dip_train(400, 40, 5, 0.01)),
            ("short".to_string(), dip_train(3, 3, 1, 0.01)),
        ];
        let reports = LightCurveClassifier::default().analyze_batch(&inputs, 20);
        let sources: Vec<&str> = reports.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["flat", "train", "short"]);
        assert_eq!(reports[1].result.classification, Classification::ExoplanetCandidate);
        assert!(!reports[1].transit_profile.is_empty());
        assert_eq!(reports[1].histogram.len(), 20);
    }
}
