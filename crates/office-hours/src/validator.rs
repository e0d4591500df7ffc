//! Per-row validation: accept, correct direction, or drop.
//!
//! Rows are checked in configuration order against the rows already accepted for
//! the same day. The first accepted row wins a conflict; later conflicting rows
//! are dropped, never merged.

use crate::interval::{NormalizedInterval, RawInterval};
use crate::time::parse_minutes;

/// Why a row was left out of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Start and end resolve to the same minute.
    Degenerate,
    /// The row intersects an interval accepted earlier for the same day.
    Overlapping { with: NormalizedInterval },
    /// One of the endpoints is not a valid time of day.
    Malformed(String),
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::Degenerate => write!(f, "start equals end"),
            DropReason::Overlapping { with } => write!(
                f,
                "overlaps {}-{}",
                with.start_display, with.end_display
            ),
            DropReason::Malformed(message) => write!(f, "{}", message),
        }
    }
}

/// Result of validating one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(NormalizedInterval),
    Dropped { raw: RawInterval, reason: DropReason },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Validate one raw row against the intervals already accepted for its day.
///
/// Steps, in order: parse both endpoints, drop degenerate rows, swap reversed
/// rows (`18:00-09:00` becomes `09:00-18:00`), drop rows overlapping an accepted
/// interval, accept the rest. The returned interval carries the untrimmed
/// display strings.
pub fn validate(raw: &RawInterval, accepted: &[NormalizedInterval]) -> Outcome {
    let parsed =
        parse_minutes(&raw.start).and_then(|start| parse_minutes(&raw.end).map(|end| (start, end)));
    let (start_minutes, end_minutes) = match parsed {
        Ok(pair) => pair,
        Err(e) => {
            return Outcome::Dropped {
                raw: raw.clone(),
                reason: DropReason::Malformed(e.to_string()),
            }
        }
    };

    if start_minutes == end_minutes {
        return Outcome::Dropped {
            raw: raw.clone(),
            reason: DropReason::Degenerate,
        };
    }

    let candidate = if start_minutes > end_minutes {
        NormalizedInterval {
            start_minutes: end_minutes,
            end_minutes: start_minutes,
            start_display: raw.end.trim().to_string(),
            end_display: raw.start.trim().to_string(),
        }
    } else {
        NormalizedInterval {
            start_minutes,
            end_minutes,
            start_display: raw.start.trim().to_string(),
            end_display: raw.end.trim().to_string(),
        }
    };

    if let Some(existing) = accepted.iter().find(|a| candidate.overlaps(a)) {
        return Outcome::Dropped {
            raw: raw.clone(),
            reason: DropReason::Overlapping {
                with: existing.clone(),
            },
        };
    }

    Outcome::Accepted(candidate)
}
