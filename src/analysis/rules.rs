//! Ordered classification rules. The classifier walks the list and the first rule
//! that returns a verdict wins; no rule is revisited.
//!
//! Default order: flare -> no dips -> single dip -> periodic V-shape -> periodic transit.

use crate::analysis::event_segmenter::Segmentation;
use crate::analysis::periodicity::PeriodicityEstimate;
use crate::config::{ClassifierConfig, Confidence, DepthPct, PeriodDays};
use crate::domain::Classification;
use crate::models::Event;

/// Everything a rule may look at. Built once per classification call.
pub struct RuleContext<'a> {
    pub config: &'a ClassifierConfig,
    pub segmentation: &'a Segmentation,
    /// Dip events that survived the length filter, in chronological order
    pub valid_dips: Vec<&'a Event>,
}

impl<'a> RuleContext<'a> {
    pub fn new(config: &'a ClassifierConfig, segmentation: &'a Segmentation) -> Self {
        let max_points = config.segmentation.max_event_points;
        let valid_dips = segmentation
            .dip_events
            .iter()
            .filter(|e| e.point_count <= max_points)
            .collect();
        Self {
            config,
            segmentation,
            valid_dips,
        }
    }
}

/// Epoch and period for the phase folder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldParams {
    pub epoch: f64,
    pub period: f64,
}

/// What a matching rule decided.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub classification: Classification,
    pub confidence: Confidence,
    pub depth: DepthPct,
    pub period: PeriodDays,
    pub message: String,
    pub exoplanet_detected: bool,
    /// [start, end] windows whose samples get flagged as in-transit
    pub transit_windows: Vec<(f64, f64)>,
    pub fold: Option<FoldParams>,
}

impl Verdict {
    /// A verdict with no transit annotation and no folding.
    fn plain(
        classification: Classification,
        confidence: f64,
        depth: DepthPct,
        period: PeriodDays,
        message: &str,
    ) -> Self {
        Self {
            classification,
            confidence: Confidence::new(confidence),
            depth,
            period,
            message: message.to_string(),
            exoplanet_detected: false,
            transit_windows: Vec::new(),
            fold: None,
        }
    }
}

pub trait ClassificationRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Some(verdict) ends the chain.
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict>;
}

/// Sudden brightenings win over any dip content.
pub struct FlareRule;

impl ClassificationRule for FlareRule {
    fn name(&self) -> &'static str {
        "flare"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let rules = &ctx.config.rules;
        let has_flare = ctx.segmentation.flare_events.iter().any(|e| {
            e.extreme_deviation > rules.flare_peak_threshold
                && e.point_count >= rules.min_flare_points
        });

        has_flare.then(|| {
            Verdict::plain(
                Classification::StellarFlare,
                rules.flare_confidence,
                DepthPct::ZERO,
                PeriodDays::NONE,
                "Sudden brightening detected. This is characteristic of a stellar flare, \
                 not a planetary transit.",
            )
        })
    }
}

pub struct EmptyDipRule;

impl ClassificationRule for EmptyDipRule {
    fn name(&self) -> &'static str {
        "no-dips"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        ctx.valid_dips.is_empty().then(|| {
            Verdict::plain(
                Classification::NoiseOther,
                ctx.config.rules.empty_confidence,
                DepthPct::ZERO,
                PeriodDays::NONE,
                "No significant dips found in the light curve.",
            )
        })
    }
}

/// One deep, non-repeating dip.
pub struct SingleDipRule;

impl ClassificationRule for SingleDipRule {
    fn name(&self) -> &'static str {
        "single-dip"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let rules = &ctx.config.rules;
        match ctx.valid_dips.as_slice() {
            [dip] if dip.depth() > rules.single_dip_depth_threshold => Some(Verdict::plain(
                Classification::AsteroidFlyby,
                rules.flyby_confidence,
                DepthPct::from_fraction(dip.depth()),
                PeriodDays::NONE,
                "A single, non-repeating dip was detected. This may be an asteroid or \
                 another transient object passing in front of the star.",
            )),
            _ => None,
        }
    }
}

/// Two or more sharp V-shaped dips at a steady spacing.
pub struct VShapePeriodicRule;

impl ClassificationRule for VShapePeriodicRule {
    fn name(&self) -> &'static str {
        "v-shape-periodic"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let threshold = ctx.config.shape.v_shape_threshold;
        let v_dips: Vec<&Event> = ctx
            .valid_dips
            .iter()
            .copied()
            .filter(|e| e.is_v_shaped(threshold))
            .collect();

        let estimate =
            PeriodicityEstimate::from_events(&v_dips, ctx.config.periodicity.tolerance)?;
        if !estimate.is_strictly_periodic() {
            return None;
        }

        Some(Verdict::plain(
            Classification::EclipsingBinary,
            ctx.config.rules.eclipsing_binary_confidence,
            DepthPct::from_fraction(v_dips[0].depth()),
            PeriodDays::new(estimate.avg_period),
            "Periodic V-shaped dips detected. This is characteristic of an eclipsing \
             binary star system rather than a planet.",
        ))
    }
}

/// Terminal rule: periodic flat-bottomed transits, otherwise noise.
pub struct ExoplanetPeriodicRule;

impl ClassificationRule for ExoplanetPeriodicRule {
    fn name(&self) -> &'static str {
        "exoplanet-periodic"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let rules = &ctx.config.rules;
        let dips = &ctx.valid_dips;

        let Some(estimate) =
            PeriodicityEstimate::from_events(dips, ctx.config.periodicity.tolerance)
        else {
            return Some(Verdict::plain(
                Classification::NoiseOther,
                rules.too_few_dips_confidence,
                DepthPct::ZERO,
                PeriodDays::NONE,
                "Only one shallow dip was found, too few events to test for periodicity.",
            ));
        };

        let transit_count_score =
            (dips.len() as f64 / rules.full_transit_count as f64).min(1.0);
        let confidence = (estimate.score * rules.periodicity_weight
            + transit_count_score * rules.transit_count_weight)
            .min(rules.max_confidence);

        // The score above wants every gap consistent; the gate lets one outlier through.
        let detected = confidence > rules.detection_threshold && estimate.tolerates(1);

        if !detected {
            return Some(Verdict::plain(
                Classification::NoiseOther,
                confidence.max(rules.noise_confidence_floor),
                DepthPct::ZERO,
                PeriodDays::NONE,
                "Dips were found but they do not repeat regularly enough to indicate a \
                 planetary transit.",
            ));
        }

        let avg_depth = dips.iter().map(|e| e.depth()).sum::<f64>() / dips.len() as f64;

        Some(Verdict {
            classification: Classification::ExoplanetCandidate,
            confidence: Confidence::new(confidence),
            depth: DepthPct::from_fraction(avg_depth),
            period: PeriodDays::new(estimate.avg_period),
            message: format!(
                "{} periodic, flat-bottomed transits detected, consistent with an orbiting \
                 exoplanet.",
                dips.len()
            ),
            exoplanet_detected: true,
            transit_windows: dips.iter().map(|e| (e.start_time, e.end_time)).collect(),
            fold: Some(FoldParams {
                epoch: dips[0].start_time,
                period: estimate.avg_period,
            }),
        })
    }
}

/// The standard chain, evaluated first-match-wins.
pub fn default_rules() -> Vec<Box<dyn ClassificationRule>> {
    vec![
        Box::new(FlareRule),
        Box::new(EmptyDipRule),
        Box::new(SingleDipRule),
        Box::new(VShapePeriodicRule),
        Box::new(ExoplanetPeriodicRule),
    ]
}
