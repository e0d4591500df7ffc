//! Time-of-day parsing — "HH:MM" strings to zero-based minute of day.
//!
//! Configuration rows are typed by hand, so the accepted shape is deliberately
//! narrow: one `:` separating two digit runs, optionally surrounded by
//! whitespace. `24:00` is accepted as an end-of-day closing time.

use crate::error::{OfficeHoursError, Result};

/// Last minute value a time of day can take (`24:00`).
pub const END_OF_DAY: u32 = 24 * 60;

/// Parse an "H:MM" or "HH:MM" string into minutes since midnight.
///
/// # Errors
/// Returns `OfficeHoursError::Format` when the separator is missing or repeated,
/// when either part is empty or non-numeric, or when the value is outside
/// `00:00..=24:00`.
pub fn parse_minutes(time: &str) -> Result<u32> {
    let malformed = || OfficeHoursError::Format(time.to_string());

    let (hour, minute) = time.trim().split_once(':').ok_or_else(malformed)?;
    let hour = parse_digits(hour).ok_or_else(malformed)?;
    let minute = parse_digits(minute).ok_or_else(malformed)?;

    if minute > 59 {
        return Err(malformed());
    }

    let total = hour * 60 + minute;
    if total > END_OF_DAY {
        return Err(malformed());
    }

    Ok(total)
}

/// Format minutes since midnight as "HH:MM".
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// `str::parse::<u32>` would also take a leading '+', so check the digits first.
fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
