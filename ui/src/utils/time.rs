use jiff::{Timestamp, tz};

/// Calendar date in the reader's timezone, e.g. "Jun 1, 2025".
pub fn format_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%b %-d, %Y")
        .to_string()
}

/// Date and start time in the reader's timezone, e.g. "Sat, Jun 7 at 6:30 PM".
pub fn format_starts_at(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(tz::TimeZone::system())
        .strftime("%a, %b %-d at %-I:%M %p")
        .to_string()
}
