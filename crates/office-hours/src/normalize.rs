//! The per-day normalization pipeline: validate, trim, sort.

use tracing::debug;

use crate::display::apply_trim;
use crate::interval::{NormalizedInterval, RawInterval};
use crate::sorter::sort_intervals;
use crate::validator::{validate, DropReason, Outcome};

/// A configured row that did not make it into the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntry {
    /// Position of the row in the day's configured entries.
    pub index: usize,
    pub raw: RawInterval,
    pub reason: DropReason,
}

/// Accepted intervals of one day together with the rows that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDay {
    /// Sorted strictly ascending by start minute.
    pub intervals: Vec<NormalizedInterval>,
    pub dropped: Vec<DroppedEntry>,
}

/// Normalize one day's rows and keep the reason for every dropped row.
pub fn normalize_entries_detailed(entries: &[RawInterval], trim_time: bool) -> NormalizedDay {
    let mut accepted: Vec<NormalizedInterval> = Vec::with_capacity(entries.len());
    let mut dropped = Vec::new();

    for (index, raw) in entries.iter().enumerate() {
        match validate(raw, &accepted) {
            Outcome::Accepted(interval) => accepted.push(interval),
            Outcome::Dropped { raw, reason } => {
                debug!(index, start = %raw.start, end = %raw.end, %reason, "dropping opening-hours entry");
                dropped.push(DroppedEntry { index, raw, reason });
            }
        }
    }

    // Overlap checks use minute values; trimming only changes what is shown.
    if trim_time {
        accepted.iter_mut().for_each(apply_trim);
    }

    sort_intervals(&mut accepted);

    NormalizedDay {
        intervals: accepted,
        dropped,
    }
}

/// Normalize one day's rows into the sorted list of accepted intervals.
pub fn normalize_entries(entries: &[RawInterval], trim_time: bool) -> Vec<NormalizedInterval> {
    normalize_entries_detailed(entries, trim_time).intervals
}
