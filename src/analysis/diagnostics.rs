//! Derived data for the results panel: flux distribution, activity index, transit profile.

use statrs::statistics::Statistics;

use crate::domain::Sample;
use crate::models::{HistogramBin, LightCurve};
use crate::utils::{get_max, get_min};

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Fraction of the period kept around the deepest folded sample.
const TRANSIT_WINDOW_FRACTION: f64 = 0.2;

/// Std dev -> 0..=100 scale (0.001 std dev saturates at 100).
const ACTIVITY_SCALE: f64 = 10_000.0;

/// Equal-width flux histogram. The maximum value is counted in the last bin.
/// A flat series (zero-width range) puts every sample in the first bin.
pub fn flux_histogram(series: &LightCurve, bins: usize) -> Vec<HistogramBin> {
    let fluxes: Vec<f64> = series.iter().map(|s| s.flux).filter(|f| f.is_finite()).collect();
    let (Some(min_flux), Some(max_flux)) = (get_min(&fluxes), get_max(&fluxes)) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let bin_width = (max_flux - min_flux) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            flux: min_flux + i as f64 * bin_width,
            count: 0,
        })
        .collect();

    for &flux in &fluxes {
        let idx = if bin_width > 0.0 {
            (((flux - min_flux) / bin_width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        histogram[idx].count += 1;
    }

    histogram
}

/// Scaled population standard deviation of flux, capped at 100.
pub fn stellar_activity_index(series: &LightCurve) -> u32 {
    if series.is_empty() {
        return 0;
    }
    let std_dev = series.iter().map(|s| s.flux).population_std_dev();
    if !std_dev.is_finite() {
        return 0;
    }
    (std_dev * ACTIVITY_SCALE).round().min(100.0) as u32
}

/// Folded samples within +/- 10% of the period around the deepest point,
/// with time re-centred so the deepest point sits at 0.
pub fn average_transit_profile(folded: &LightCurve, period: f64) -> LightCurve {
    if period.is_nan() || period <= 0.0 {
        return LightCurve::default();
    }
    let Some(deepest) = folded
        .iter()
        .min_by(|a, b| a.flux.total_cmp(&b.flux))
    else {
        return LightCurve::default();
    };

    let centre = deepest.time;
    let half_window = TRANSIT_WINDOW_FRACTION * period / 2.0;

    folded
        .iter()
        .filter(|s| s.time >= centre - half_window && s.time <= centre + half_window)
        .map(|s| Sample {
            time: s.time - centre,
            ..*s
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(fluxes: &[f64]) -> LightCurve {
        LightCurve::from_pairs(fluxes.iter().enumerate().map(|(i, &f)| (i as f64, f)))
    }

    #[test]
    fn test_histogram_counts_every_sample() {
        let lc = curve(&[0.98, 0.99, 1.0, 1.0, 1.0, 1.01, 1.02]);
        let hist = flux_histogram(&lc, 4);
        assert_eq!(hist.len(), 4);
        assert_eq!(hist.iter().map(|b| b.count).sum::<usize>(), 7);
        assert_eq!(hist[0].flux, 0.98);
        // Max lands in the last bin rather than overflowing
        assert!(hist[3].count >= 1);
    }

    #[test]
    fn test_histogram_flat_and_empty() {
        let flat = flux_histogram(&curve(&[1.0, 1.0, 1.0]), 5);
        assert_eq!(flat[0].count, 3);
        assert!(flat[1..].iter().all(|b| b.count == 0));
        assert!(flux_histogram(&LightCurve::default(), 20).is_empty());
    }

    #[test]
    fn test_activity_index() {
        assert_eq!(stellar_activity_index(&curve(&[1.0, 1.0, 1.0])), 0);
        // std dev 0.0005 -> 5
        assert_eq!(stellar_activity_index(&curve(&[0.9995, 1.0005])), 5);
        // Large scatter saturates
        assert_eq!(stellar_activity_index(&curve(&[0.5, 1.5])), 100);
        assert_eq!(stellar_activity_index(&LightCurve::default()), 0);
    }

    #[test]
    fn test_transit_profile_is_centred_on_deepest_point() {
        let folded = LightCurve::from_pairs([
            (-1.5, 1.0),
            (-0.3, 0.999),
            (-0.1, 0.985),
            (0.0, 0.984),
            (0.1, 0.985),
            (0.3, 0.999),
            (1.5, 1.0),
        ]);
        // Period 3.2 -> window of +/- 0.32
        let profile = average_transit_profile(&folded, 3.2);
        assert_eq!(profile.len(), 5);
        assert_eq!(profile.samples[2].time, 0.0);
        assert_eq!(profile.samples[2].flux, 0.984);
        assert!(average_transit_profile(&folded, 0.0).is_empty());
        assert!(average_transit_profile(&LightCurve::default(), 3.2).is_empty());
    }
}
