use chrono::{Datelike, NaiveDateTime};

/// Shown instead of a preview when a note has a single line.
pub const NO_PREVIEW_TEXT: &str = "No additional text";

/// The second-line preview of a note: the first non-blank line after the title line.
pub fn preview_line(content: &str) -> &str {
    content
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(NO_PREVIEW_TEXT)
}

/// Formats a last-modified timestamp relative to `now`.
///
/// - same day: `3:07 PM`
/// - the day before: `Yesterday`
/// - up to a week back: the weekday name
/// - anything else, including dates after `now`: `4/9/24`
pub fn date_label(modified: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = now.date().num_days_from_ce() - modified.date().num_days_from_ce();
    match days {
        0 => modified.format("%-I:%M %p").to_string(),
        1 => String::from("Yesterday"),
        2..=7 => modified.format("%A").to_string(),
        _ => modified.format("%-m/%-d/%y").to_string(),
    }
}
