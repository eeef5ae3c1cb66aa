use serde::{Deserialize, Serialize};

use crate::domain::{EventKind, Sample};
use crate::utils::{get_max, get_min};

/// A contiguous run of samples away from the baseline.
/// Built once per classification call and dropped with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub start_time: f64,
    pub end_time: f64,
    pub point_count: usize,

    /// Largest deviation from 1.0, signed: negative for dips, positive for flares
    pub extreme_deviation: f64,

    pub flux_samples: Vec<f64>,

    /// avg(start flux, end flux) - min flux. Dips only; higher means a sharper V.
    pub v_shape_metric: Option<f64>,
}

impl Event {
    /// Labels a closed run. Dip wins when dip depth and flare peak tie.
    /// Returns None for an empty run.
    pub(crate) fn from_run(run: &[Sample]) -> Option<Self> {
        let first = run.first()?;
        let last = run.last()?;
        let flux_samples: Vec<f64> = run.iter().map(|s| s.flux).collect();

        let min_flux = get_min(&flux_samples)?;
        let max_flux = get_max(&flux_samples)?;
        let dip_depth = 1.0 - min_flux;
        let flare_peak = max_flux - 1.0;

        let (kind, extreme_deviation, v_shape_metric) = if dip_depth >= flare_peak {
            let edge_avg = (first.flux + last.flux) / 2.0;
            (EventKind::Dip, -dip_depth, Some(edge_avg - min_flux))
        } else {
            (EventKind::Flare, flare_peak, None)
        };

        Some(Event {
            kind,
            start_time: first.time,
            end_time: last.time,
            point_count: run.len(),
            extreme_deviation,
            flux_samples,
            v_shape_metric,
        })
    }

    /// Unsigned size of the event (dip depth or flare peak).
    pub fn depth(&self) -> f64 {
        self.extreme_deviation.abs()
    }

    pub fn is_dip(&self) -> bool {
        self.kind == EventKind::Dip
    }

    pub fn is_v_shaped(&self, threshold: f64) -> bool {
        self.v_shape_metric.is_some_and(|v| v > threshold)
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}
