//! Tests for the per-day normalization pipeline.

use office_hours::{normalize_entries, normalize_entries_detailed, DropReason, RawInterval};

/// Helper: build raw rows from (start, end) pairs.
fn rows(pairs: &[(&str, &str)]) -> Vec<RawInterval> {
    pairs
        .iter()
        .map(|(start, end)| RawInterval::new(*start, *end))
        .collect()
}

/// Helper: the (start, end) display strings of a normalized day.
fn shown(entries: &[RawInterval], trim_time: bool) -> Vec<(String, String)> {
    normalize_entries(entries, trim_time)
        .into_iter()
        .map(|i| (i.start_display, i.end_display))
        .collect()
}

fn pair(start: &str, end: &str) -> (String, String) {
    (start.to_string(), end.to_string())
}

#[test]
fn reversed_row_is_corrected() {
    assert_eq!(
        shown(&rows(&[("18:00", "09:00")]), false),
        vec![pair("09:00", "18:00")]
    );
}

#[test]
fn overlapping_row_is_rejected_first_seen_wins() {
    assert_eq!(
        shown(&rows(&[("09:00", "12:00"), ("11:00", "13:00")]), false),
        vec![pair("09:00", "12:00")]
    );
}

#[test]
fn touching_rows_count_as_overlap() {
    // 12:00 is the end of the first row and the start of the second.
    assert_eq!(
        shown(&rows(&[("09:00", "12:00"), ("12:00", "14:00")]), false),
        vec![pair("09:00", "12:00")]
    );
}

#[test]
fn row_inside_an_accepted_row_is_kept() {
    // The later row covers neither endpoint of the earlier one.
    assert_eq!(
        shown(&rows(&[("09:00", "18:00"), ("10:00", "11:00")]), false),
        vec![pair("09:00", "18:00"), pair("10:00", "11:00")]
    );
}

#[test]
fn row_enclosing_an_accepted_row_is_rejected() {
    assert_eq!(
        shown(&rows(&[("10:00", "11:00"), ("09:00", "18:00")]), false),
        vec![pair("10:00", "11:00")]
    );
}

#[test]
fn degenerate_row_is_dropped() {
    assert!(shown(&rows(&[("09:00", "09:00")]), false).is_empty());
}

#[test]
fn trim_time_shortens_full_hours_only() {
    let entries = rows(&[("09:00", "17:30")]);
    assert_eq!(shown(&entries, true), vec![pair("09", "17:30")]);
    assert_eq!(shown(&entries, false), vec![pair("09:00", "17:30")]);
}

#[test]
fn malformed_row_drops_only_itself() {
    let entries = rows(&[("9-12", "13:00"), ("14:00", "18:00")]);
    let day = normalize_entries_detailed(&entries, false);
    assert_eq!(day.intervals.len(), 1);
    assert_eq!(day.intervals[0].start_minutes, 14 * 60);
    assert_eq!(day.dropped.len(), 1);
    assert!(matches!(day.dropped[0].reason, DropReason::Malformed(_)));
}

#[test]
fn count_invariant_holds_for_mixed_day() {
    let entries = rows(&[
        ("13:00", "17:00"),
        ("08:00", "08:00"),
        ("16:00", "19:00"),
        ("12:00", "08:00"),
        ("07:00", "07:30"),
    ]);
    let day = normalize_entries_detailed(&entries, false);

    let degenerate = day
        .dropped
        .iter()
        .filter(|d| d.reason == DropReason::Degenerate)
        .count();
    let overlapping = day
        .dropped
        .iter()
        .filter(|d| matches!(d.reason, DropReason::Overlapping { .. }))
        .count();

    assert_eq!(degenerate, 1);
    assert_eq!(overlapping, 1);
    assert_eq!(day.intervals.len(), entries.len() - degenerate - overlapping);
}

#[test]
fn output_is_sorted_by_start() {
    let entries = rows(&[("15:00", "18:00"), ("07:00", "08:00"), ("09:00", "12:00")]);
    let starts: Vec<u32> = normalize_entries(&entries, false)
        .iter()
        .map(|i| i.start_minutes)
        .collect();
    assert_eq!(starts, vec![420, 540, 900]);
}

#[test]
fn normalizing_twice_is_identical() {
    let entries = rows(&[("18:00", "13:00"), ("09:00", "12:00"), ("11:00", "12:30")]);
    assert_eq!(
        normalize_entries(&entries, true),
        normalize_entries(&entries, true)
    );
}

#[test]
fn trim_keeps_first_two_characters_of_single_digit_hour() {
    assert_eq!(
        shown(&rows(&[("9:00", "17:30")]), true),
        vec![pair("9:", "17:30")]
    );
}

#[test]
fn end_of_day_closing_time_is_accepted() {
    assert_eq!(
        shown(&rows(&[("20:00", "24:00")]), true),
        vec![pair("20", "24")]
    );
}
