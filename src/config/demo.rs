//! Synthetic light curve parameters (demo data and test fixtures)

/// A periodic dip train. `half_width` is measured either side of each transit centre.
#[derive(Clone, Copy, Debug)]
pub struct PeriodicDip {
    pub period: f64,
    pub half_width: f64,
    pub depth: f64,
}

/// A single brightening with a sharp rise and exponential decay.
#[derive(Clone, Copy, Debug)]
pub struct FlareShape {
    pub peak_times: &'static [f64],
    pub amplitude: f64,
    pub decay_time: f64,
}

/// A single non-repeating box dip.
#[derive(Clone, Copy, Debug)]
pub struct SingleDip {
    pub center: f64,
    pub width: f64,
    pub depth: f64,
}

pub struct SampleShapes {
    pub confirmed_planet: PeriodicDip,
    pub eclipsing_binary: PeriodicDip,
    pub weak_signal: PeriodicDip,
    pub asteroid: SingleDip,
    pub stellar_flare: FlareShape,
    pub multi_planet: &'static [PeriodicDip],
}

pub struct SampleConfig {
    /// Samples per generated series
    pub points: usize,
    /// Time span in days
    pub duration: f64,
    /// Total width of the uniform noise band around 1.0
    pub noise: f64,
    pub default_seed: u64,
    pub shapes: SampleShapes,
}

pub const SAMPLES: SampleConfig = SampleConfig {
    points: 2000,
    duration: 30.0,
    noise: 0.002, // +/- 0.001, well inside the 0.998 / 1.005 segmentation band
    default_seed: 42,
    shapes: SampleShapes {
        confirmed_planet: PeriodicDip {
            period: 3.2,
            half_width: 0.1,
            depth: 0.015,
        },
        eclipsing_binary: PeriodicDip {
            period: 4.5,
            half_width: 0.2,
            depth: 0.05,
        },
        weak_signal: PeriodicDip {
            period: 3.2,
            half_width: 0.1,
            depth: 0.0025,
        },
        asteroid: SingleDip {
            center: 15.0,
            width: 0.1,
            depth: 0.01,
        },
        stellar_flare: FlareShape {
            peak_times: &[5.0, 22.0],
            amplitude: 0.015,
            decay_time: 0.2,
        },
        multi_planet: &[
            PeriodicDip {
                period: 3.8,
                half_width: 0.1,
                depth: 0.01,
            },
            PeriodicDip {
                period: 7.1,
                half_width: 0.1,
                depth: 0.02,
            },
        ],
    },
};
