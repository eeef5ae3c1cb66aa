use crate::models::LightCurve;
use crate::utils::median_upper;

/// Divides every flux by the series median so the baseline sits near 1.0.
/// Not idempotent in general: a positive median lands on exactly 1.0, so a second
/// pass changes nothing, but a negative median flips the order and re-centres again.
/// A zero or non-finite median leaves the series untouched.
pub fn normalize(series: &LightCurve) -> LightCurve {
    let median = match median_upper(&series.fluxes()) {
        Some(m) if m.is_finite() && m != 0.0 => m,
        Some(m) => {
            log::warn!("Median flux is {}; skipping normalization", m);
            return series.clone();
        }
        None => return series.clone(),
    };

    series
        .iter()
        .map(|s| s.with_flux(s.flux / median))
        .collect()
}
