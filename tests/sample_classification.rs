//! End-to-end behaviour on the seeded synthetic curves.

use exovision::data::generate_sample;
use exovision::{Classification, LightCurve, SampleKind, classify};

const SEEDS: [u64; 3] = [1, 42, 2024];

#[test]
fn test_confirmed_planet_is_detected() {
    for seed in SEEDS {
        let result = classify(&generate_sample(SampleKind::ConfirmedPlanet, seed));

        assert_eq!(result.classification, Classification::ExoplanetCandidate, "seed {seed}");
        assert!(result.exoplanet_detected);
        assert!(result.confidence.value() >= 0.65);
        assert!(
            (result.period_days.value() - 3.2).abs() <= 3.2 * 0.05,
            "period {}",
            result.period_days
        );
        assert!((1.3..1.7).contains(&result.transit_depth_pct.value()));
        assert!(result.annotated_series.transit_count() > 0);
    }
}

#[test]
fn test_confirmed_planet_fold_is_bounded_and_sorted() {
    let result = classify(&generate_sample(SampleKind::ConfirmedPlanet, 42));
    let folded = &result.folded_series;
    let half = result.period_days.value() / 2.0;

    assert_eq!(folded.len(), result.annotated_series.len());
    assert!(folded.iter().all(|s| s.time >= -half && s.time < half));
    assert!(folded.samples.windows(2).all(|w| w[0].time <= w[1].time));
    // Folding relabels time only; fluxes and flags carry over
    assert_eq!(folded.transit_count(), result.annotated_series.transit_count());
}

#[test]
fn test_eclipsing_binary() {
    for seed in SEEDS {
        let result = classify(&generate_sample(SampleKind::EclipsingBinary, seed));

        assert_eq!(result.classification, Classification::EclipsingBinary, "seed {seed}");
        assert!(!result.exoplanet_detected);
        assert_eq!(result.confidence.value(), 0.9);
        assert!((result.period_days.value() - 4.5).abs() <= 4.5 * 0.05);
        assert!(result.folded_series.is_empty());
        assert_eq!(result.annotated_series.transit_count(), 0);
    }
}

#[test]
fn test_stellar_flare() {
    for seed in SEEDS {
        let result = classify(&generate_sample(SampleKind::StellarFlare, seed));
        assert_eq!(result.classification, Classification::StellarFlare, "seed {seed}");
        assert_eq!(result.confidence.value(), 0.9);
        assert!(!result.period_days.is_found());
    }
}

#[test]
fn test_flare_wins_over_transits() {
    let flare = generate_sample(SampleKind::StellarFlare, 42);
    let planet = generate_sample(SampleKind::ConfirmedPlanet, 42);
    // Flare curve with the planet's transits added on top
    let combined: LightCurve = flare
        .iter()
        .zip(planet.iter())
        .map(|(f, p)| f.with_flux(f.flux + p.flux - 1.0))
        .collect();

    let result = classify(&combined);
    assert_eq!(result.classification, Classification::StellarFlare);
    assert!(!result.exoplanet_detected);
}

#[test]
fn test_asteroid_flyby() {
    for seed in SEEDS {
        let result = classify(&generate_sample(SampleKind::Asteroid, seed));
        assert_eq!(result.classification, Classification::AsteroidFlyby, "seed {seed}");
        assert_eq!(result.confidence.value(), 0.95);
        assert_eq!(result.period_days.value(), 0.0);
        assert!((result.transit_depth_pct.value() - 1.0).abs() < 0.2);
    }
}

#[test]
fn test_pure_noise() {
    for seed in SEEDS {
        let result = classify(&generate_sample(SampleKind::Noise, seed));
        assert_eq!(result.classification, Classification::NoiseOther, "seed {seed}");
        assert!(!result.exoplanet_detected);
        assert!(result.folded_series.is_empty());
    }
}

#[test]
fn test_remaining_samples_are_total() {
    for kind in [SampleKind::WeakSignal, SampleKind::MultiPlanet] {
        let result = classify(&generate_sample(kind, 42));
        assert!((0.0..=1.0).contains(&result.confidence.value()));
        assert_ne!(result.classification, Classification::StellarFlare);
        assert_eq!(result.annotated_series.len(), 2000);
        if !result.exoplanet_detected {
            assert!(result.folded_series.is_empty());
        }
    }
}

#[test]
fn test_classification_is_deterministic() {
    let series = generate_sample(SampleKind::ConfirmedPlanet, 7);
    assert_eq!(classify(&series), classify(&series));
}

#[test]
fn test_result_serializes_with_camel_case_keys() {
    let result = classify(&generate_sample(SampleKind::Asteroid, 42));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["classification"], "AsteroidFlyby");
    assert!(json["transitDepthPct"].is_number());
    assert!(json["annotatedSeries"].is_array());
    assert_eq!(json["periodDays"], 0.0);
}
