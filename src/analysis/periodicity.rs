use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::models::Event;
use crate::utils::mean;

/// Spacing statistics for an ordered list of events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicityEstimate {
    /// start[i] - start[i-1]
    pub gaps: Vec<f64>,
    pub avg_period: f64,
    /// Gaps within tolerance of the mean gap
    pub consistent_count: usize,
    /// consistent_count / gap count
    pub score: f64,
}

impl PeriodicityEstimate {
    /// Needs at least two events. A non-positive mean gap counts no gap as consistent.
    pub fn from_events(events: &[&Event], tolerance: f64) -> Option<Self> {
        if events.len() < 2 {
            return None;
        }

        let gaps: Vec<f64> = events
            .iter()
            .tuple_windows()
            .map(|(prev, next)| next.start_time - prev.start_time)
            .collect();
        let avg_period = mean(&gaps)?;

        let consistent_count = if avg_period > 0.0 {
            gaps.iter()
                .filter(|&&gap| (gap - avg_period).abs() / avg_period < tolerance)
                .count()
        } else {
            0
        };

        let score = consistent_count as f64 / gaps.len() as f64;

        Some(Self {
            gaps,
            avg_period,
            consistent_count,
            score,
        })
    }

    /// Number of events the estimate was built from.
    pub fn event_count(&self) -> usize {
        self.gaps.len() + 1
    }

    /// Every gap agrees with the mean.
    pub fn is_strictly_periodic(&self) -> bool {
        self.consistent_count + 1 >= self.event_count()
    }

    /// At most `outliers` gaps disagree with the mean.
    pub fn tolerates(&self, outliers: usize) -> bool {
        self.consistent_count + 1 + outliers >= self.event_count()
    }
}
