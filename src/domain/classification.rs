use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Terminal categories of the light curve classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Classification {
    #[strum(to_string = "Exoplanet Candidate")]
    ExoplanetCandidate,
    #[strum(to_string = "Eclipsing Binary")]
    EclipsingBinary,
    #[strum(to_string = "Stellar Flare")]
    StellarFlare,
    #[strum(to_string = "Asteroid Fly-by")]
    AsteroidFlyby,
    #[strum(to_string = "Noise / Other")]
    NoiseOther,
}

/// Direction of an event relative to the 1.0 baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum EventKind {
    Dip,
    Flare,
}
