use serde::{Deserialize, Serialize};

// One brightness measurement of a light curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    /// Brightness ratio, nominally centred on 1.0 once normalized
    pub flux: f64,

    /// Set by the classifier when the sample falls inside a detected transit window
    #[serde(default)]
    pub transit: bool,
}

impl Sample {
    // A constructor for convenience
    pub fn new(time: f64, flux: f64) -> Self {
        Sample {
            time,
            flux,
            transit: false,
        }
    }

    pub fn with_flux(self, flux: f64) -> Self {
        Sample { flux, ..self }
    }

    pub fn with_transit(self, transit: bool) -> Self {
        Sample { transit, ..self }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, flux): (f64, f64)) -> Self {
        Sample::new(time, flux)
    }
}
