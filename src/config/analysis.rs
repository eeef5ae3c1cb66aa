//! Classifier thresholds and scoring weights

use serde::{Deserialize, Serialize};

/// Settings for splitting a normalized light curve into events.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationSettings {
    /// Samples below this normalized flux open (or extend) a dip run.
    pub dip_threshold: f64,
    /// Samples above this normalized flux open (or extend) a flare run.
    pub flare_threshold: f64,
    /// Runs shorter than this are discarded as noise.
    pub min_event_points: usize,
    /// Dips longer than this are too long to be a transit or eclipse.
    pub max_event_points: usize,
}

/// Settings for telling V-shaped (eclipse) dips from flat-bottomed (transit) ones.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// avg(edge flux) - min flux above this marks a dip as V-shaped.
    pub v_shape_threshold: f64,
}

/// Settings for inter-event spacing checks.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicitySettings {
    /// Relative deviation from the mean gap under which a gap counts as consistent.
    pub tolerance: f64,
}

/// Confidence values and gates used by the classification rules.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    // Flare rule
    pub flare_peak_threshold: f64,
    pub min_flare_points: usize,
    pub flare_confidence: f64,

    // No dips left after filtering
    pub empty_confidence: f64,

    // Single dip rule
    pub single_dip_depth_threshold: f64,
    pub flyby_confidence: f64,

    // V-shape periodic rule
    pub eclipsing_binary_confidence: f64,

    // Exoplanet periodic rule
    pub too_few_dips_confidence: f64,
    pub periodicity_weight: f64,
    pub transit_count_weight: f64,
    /// Number of transits at which the count score saturates at 1.0
    pub full_transit_count: usize,
    pub max_confidence: f64,
    pub detection_threshold: f64,
    pub noise_confidence_floor: f64,
}

/// The Master Classifier Configuration
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Series shorter than this are degenerate input (NoiseOther, confidence 0.0)
    pub min_series_len: usize,

    // Sub-groups
    pub segmentation: SegmentationSettings,
    pub shape: ShapeSettings,
    pub periodicity: PeriodicitySettings,
    pub rules: RuleSettings,
}

pub const CLASSIFIER: ClassifierConfig = ClassifierConfig {
    min_series_len: 10,

    segmentation: SegmentationSettings {
        dip_threshold: 0.998,
        flare_threshold: 1.005,
        min_event_points: 3,
        max_event_points: 50,
    },

    shape: ShapeSettings {
        v_shape_threshold: 0.005,
    },

    periodicity: PeriodicitySettings { tolerance: 0.05 },

    rules: RuleSettings {
        flare_peak_threshold: 0.005,
        min_flare_points: 2,
        flare_confidence: 0.9,

        empty_confidence: 0.1,

        single_dip_depth_threshold: 0.005,
        flyby_confidence: 0.95,

        eclipsing_binary_confidence: 0.9,

        too_few_dips_confidence: 0.2,
        periodicity_weight: 0.7,
        transit_count_weight: 0.3,
        full_transit_count: 5,
        max_confidence: 0.99,
        detection_threshold: 0.65,
        noise_confidence_floor: 0.1,
    },
};

impl Default for ClassifierConfig {
    fn default() -> Self {
        CLASSIFIER
    }
}

impl Default for SegmentationSettings {
    fn default() -> Self {
        CLASSIFIER.segmentation
    }
}

impl Default for ShapeSettings {
    fn default() -> Self {
        CLASSIFIER.shape
    }
}

impl Default for PeriodicitySettings {
    fn default() -> Self {
        CLASSIFIER.periodicity
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        CLASSIFIER.rules
    }
}

impl ClassifierConfig {
    /// Loads a config from JSON. Fields missing from the file keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
