//! Display trimming: "HH:00" is shown as "HH" when `trimTime` is enabled.

use crate::interval::NormalizedInterval;

/// Shorten a display time ending in `"00"` to its first two characters.
///
/// `"09:00"` becomes `"09"`, `"09:30"` is unchanged. Single-digit hours keep
/// the separator: `"9:00"` becomes `"9:"`.
pub fn trim_display(display: &str) -> String {
    if !display.ends_with("00") {
        return display.to_string();
    }
    display.get(..2).unwrap_or(display).to_string()
}

/// Trim both endpoints of an interval in place. Minute values are untouched.
pub fn apply_trim(interval: &mut NormalizedInterval) {
    interval.start_display = trim_display(&interval.start_display);
    interval.end_display = trim_display(&interval.end_display);
}
