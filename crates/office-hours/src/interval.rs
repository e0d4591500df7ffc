//! Interval types shared by the normalization pipeline.

use serde::{Deserialize, Serialize};

/// One opening-hour row as entered in the configuration.
///
/// Both fields default to an empty string so that a half-filled row fails time
/// parsing (and is dropped on its own) instead of failing the whole day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawInterval {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl RawInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// An accepted, direction-corrected interval.
///
/// `start_display` / `end_display` keep the text the editor typed (possibly
/// trimmed for display); the minute values are what ordering and overlap
/// checks run on. Templates see the display strings as `start` / `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedInterval {
    #[serde(rename = "startMinutes")]
    pub start_minutes: u32,
    #[serde(rename = "endMinutes")]
    pub end_minutes: u32,
    #[serde(rename = "start")]
    pub start_display: String,
    #[serde(rename = "end")]
    pub end_display: String,
}

impl NormalizedInterval {
    /// Inclusive-boundary overlap test of a candidate against an accepted interval.
    ///
    /// With `self` as the candidate `[S,E]` and `other` as the accepted `[s,e]`,
    /// the candidate overlaps when it covers either endpoint of `other`:
    /// `(S <= s && E >= s) || (S <= e && E >= e)`. Touching endpoints count.
    /// The test is not symmetric: a candidate lying strictly inside `other`
    /// covers neither endpoint and does not overlap.
    pub fn overlaps(&self, other: &NormalizedInterval) -> bool {
        let (start, end) = (self.start_minutes, self.end_minutes);
        (start <= other.start_minutes && end >= other.start_minutes)
            || (start <= other.end_minutes && end >= other.end_minutes)
    }
}
