//! Ordering of accepted intervals.

use crate::interval::NormalizedInterval;

/// Stable ascending sort by start minute.
///
/// Intervals with equal starts keep their relative order. Accepted intervals of
/// one day never share a start minute, so the result is strictly ascending.
pub fn sort_intervals(intervals: &mut [NormalizedInterval]) {
    intervals.sort_by_key(|i| i.start_minutes);
}
