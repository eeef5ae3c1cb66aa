//! Synthetic light curves for demos and golden tests.
//!
//! Each generator lays `SAMPLES.points` evenly spaced samples over `SAMPLES.duration`
//! days, adds uniform noise around 1.0 from a seeded ChaCha8 stream, and injects
//! the signal for its category. The same seed always yields the same curve.

use clap::ValueEnum;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{FlareShape, PeriodicDip, SAMPLES, SingleDip};
use crate::models::LightCurve;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SampleKind {
    ConfirmedPlanet,
    Noise,
    EclipsingBinary,
    WeakSignal,
    Asteroid,
    StellarFlare,
    MultiPlanet,
}

/// Generates the sample curve for `kind`.
pub fn generate_sample(kind: SampleKind, seed: u64) -> LightCurve {
    let shapes = &SAMPLES.shapes;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    LightCurve::from_pairs((0..SAMPLES.points).map(|i| {
        let time = (i as f64 / SAMPLES.points as f64) * SAMPLES.duration;
        let noise = (rng.r#gen::<f64>() - 0.5) * SAMPLES.noise;

        let signal = match kind {
            SampleKind::ConfirmedPlanet => box_transit(time, &shapes.confirmed_planet),
            SampleKind::Noise => 0.0,
            SampleKind::EclipsingBinary => v_eclipse(time, &shapes.eclipsing_binary),
            SampleKind::WeakSignal => box_transit(time, &shapes.weak_signal),
            SampleKind::Asteroid => single_dip(time, &shapes.asteroid),
            SampleKind::StellarFlare => flare(time, &shapes.stellar_flare),
            SampleKind::MultiPlanet => shapes
                .multi_planet
                .iter()
                .map(|planet| box_transit(time, planet))
                .sum(),
        };

        (time, 1.0 + noise + signal)
    }))
}

/// Flat-bottomed dip whenever `time mod period` is within `half_width` of a period boundary.
fn box_transit(time: f64, dip: &PeriodicDip) -> f64 {
    let time_in_period = time % dip.period;
    if time_in_period < dip.half_width || time_in_period > dip.period - dip.half_width {
        -dip.depth
    } else {
        0.0
    }
}

/// Triangular dip centred at `period / 2 + k * period`.
fn v_eclipse(time: f64, dip: &PeriodicDip) -> f64 {
    let offset = (time - dip.period / 2.0).rem_euclid(dip.period);
    let distance = offset.min(dip.period - offset);
    if distance < dip.half_width {
        -dip.depth * (1.0 - distance / dip.half_width)
    } else {
        0.0
    }
}

fn single_dip(time: f64, dip: &SingleDip) -> f64 {
    if (time - dip.center).abs() <= dip.width / 2.0 {
        -dip.depth
    } else {
        0.0
    }
}

/// Instant rise at each peak time, exponential decay afterwards.
fn flare(time: f64, shape: &FlareShape) -> f64 {
    shape
        .peak_times
        .iter()
        .filter(|&&peak| time >= peak)
        .map(|&peak| shape.amplitude * (-(time - peak) / shape.decay_time).exp())
        .sum()
}
