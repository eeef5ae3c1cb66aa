use crate::domain::Sample;
use crate::models::LightCurve;

/// Folds a light curve on `period`, centred on the transit epoch `t0`.
///
/// Each sample's time becomes `phase * period` with phase in [-0.5, 0.5); flux and the
/// transit flag are kept. The output is sorted by folded time. A non-positive period
/// yields an empty curve.
pub fn phase_fold(series: &LightCurve, t0: f64, period: f64) -> LightCurve {
    if period.is_nan() || period <= 0.0 {
        return LightCurve::default();
    }

    let mut folded: Vec<Sample> = series
        .iter()
        .map(|s| Sample {
            time: folded_offset(s.time, t0, period),
            ..*s
        })
        .collect();

    // Stable sort keeps input order among equal phases
    folded.sort_by(|a, b| a.time.total_cmp(&b.time));

    LightCurve::new(folded)
}

/// `phase * period` for the phase of `time` relative to `t0`, wrapped into [-P/2, P/2).
/// Worked in time units directly so rounding cannot push a sample onto +P/2.
fn folded_offset(time: f64, t0: f64, period: f64) -> f64 {
    let offset = (time - t0).rem_euclid(period);
    if offset >= period / 2.0 { offset - period } else { offset }
}
