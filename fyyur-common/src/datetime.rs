//! Show time display and parsing
//!
//! Show start times are naive local timestamps. Pages render them in one of
//! two fixed English layouts.

use chrono::NaiveDateTime;

/// Display layout for a show start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `Saturday May, 21, 2035 at 9:30PM`
    Full,
    /// `Sat 05, 21, 2035 9:30PM`
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Accepted input layouts, tried in order
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Format a start time for display
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fyyur_common::datetime::{format_datetime, DateFormat};
///
/// let t = NaiveDate::from_ymd_opt(2035, 5, 21).unwrap().and_hms_opt(21, 30, 0).unwrap();
/// assert_eq!(format_datetime(&t, DateFormat::Medium), "Mon 05, 21, 2035 9:30PM");
/// assert_eq!(format_datetime(&t, DateFormat::Full), "Monday May, 21, 2035 at 9:30PM");
/// ```
pub fn format_datetime(value: &NaiveDateTime, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

/// Parse a start time from form or seed input
///
/// Returns `None` when the text matches none of the accepted layouts.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}
