//! Value types shared by the classifier and its consumers

use serde::{Deserialize, Serialize};

/// Classification confidence, clamped to 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Transit depth expressed in percent of baseline flux (1.5 = 1.5%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DepthPct(f64);

impl DepthPct {
    pub const ZERO: Self = Self(0.0);

    /// From a fractional depth (0.015 -> 1.5%)
    pub fn from_fraction(depth: f64) -> Self {
        Self(depth * 100.0)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DepthPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}%", self.0)
    }
}

/// Orbital period in days. Zero means "no period found".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PeriodDays(f64);

impl PeriodDays {
    pub const NONE: Self = Self(0.0);

    pub const fn new(days: f64) -> Self {
        Self(days)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_found(self) -> bool {
        self.0 > 0.0
    }
}

impl std::fmt::Display for PeriodDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} days", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamps() {
        assert_eq!(Confidence::new(1.4).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(0.65).value(), 0.65);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Confidence::new(0.9).to_string(), "90.0%");
        assert_eq!(DepthPct::from_fraction(0.015).to_string(), "1.5000%");
        assert_eq!(PeriodDays::new(3.2).to_string(), "3.20 days");
        assert!(!PeriodDays::NONE.is_found());
    }
}
