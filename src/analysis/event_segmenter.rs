use std::ops::Range;

use crate::config::{DEBUG_FLAGS, SegmentationSettings};
use crate::domain::Sample;
use crate::models::{Event, LightCurve};

/// Events found in one pass over a normalized series, each list in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    pub dip_events: Vec<Event>,
    pub flare_events: Vec<Event>,
}

/// Splits a normalized series into dip and flare events.
/// Any sample below the dip threshold or above the flare threshold extends the open run;
/// any other sample closes it. Runs shorter than `min_event_points` are dropped as noise,
/// so a signal that oscillates through the baseline band yields several short discarded
/// runs rather than one long event.
pub fn segment(series: &LightCurve, settings: &SegmentationSettings) -> Segmentation {
    let samples = &series.samples;
    let outside_band =
        |s: &Sample| s.flux < settings.dip_threshold || s.flux > settings.flare_threshold;

    // Fold to (closed runs, start of the open run)
    let (mut runs, open) = samples.iter().enumerate().fold(
        (Vec::<Range<usize>>::new(), None::<usize>),
        |(mut runs, open), (i, sample)| match (outside_band(sample), open) {
            (true, None) => (runs, Some(i)),
            (true, Some(start)) => (runs, Some(start)),
            (false, Some(start)) => {
                runs.push(start..i);
                (runs, None)
            }
            (false, None) => (runs, None),
        },
    );

    // Flush the run still open at the end of the series
    if let Some(start) = open {
        runs.push(start..samples.len());
    }

    let (dip_events, flare_events): (Vec<Event>, Vec<Event>) = runs
        .into_iter()
        .filter(|run| run.len() >= settings.min_event_points)
        .filter_map(|run| Event::from_run(&samples[run]))
        .partition(Event::is_dip);

    if DEBUG_FLAGS.log_segmentation {
        for e in dip_events.iter().chain(flare_events.iter()) {
            log::debug!(
                "{} event at {:.4} lasting {:.4} ({} pts, deviation {:+.5})",
                e.kind,
                e.start_time,
                e.duration(),
                e.point_count,
                e.extreme_deviation
            );
        }
    }

    Segmentation {
        dip_events,
        flare_events,
    }
}
