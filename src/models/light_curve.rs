use serde::{Deserialize, Serialize};

use crate::domain::Sample;

// ============================================================================
// LightCurve: ordered brightness samples of one target
// ============================================================================

/// Insertion order is chronological order. Times are assumed (not checked) to be increasing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct LightCurve {
    pub samples: Vec<Sample>,
}

impl LightCurve {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Builds a curve from raw (time, flux) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs.into_iter().map(Sample::from).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn fluxes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.flux).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Number of samples flagged as in-transit.
    pub fn transit_count(&self) -> usize {
        self.samples.iter().filter(|s| s.transit).count()
    }

    /// (first, last) sample time, if any
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.time, self.samples.last()?.time))
    }
}

impl FromIterator<Sample> for LightCurve {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LightCurve {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
