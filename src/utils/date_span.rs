use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Reduces a stored trip date to a calendar date.
///
/// Plain dates are taken as-is. Date-times keep the calendar date in the
/// offset they were written with; nothing is converted between zones.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    // Date-times with offsets rfc3339 rejects (e.g. "+0000") still lead with a date.
    trimmed
        .get(..10)
        .filter(|_| trimmed.as_bytes().get(10).is_some_and(|b| *b == b'T' || *b == b' '))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

pub fn parse_optional_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(parse_calendar_date)
}

/// Inclusive number of calendar days between `start` and `end`. Zero when
/// either bound is missing or the range is inverted.
pub fn inclusive_day_span(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) if end >= start => {
            let days = end.signed_duration_since(start).num_days() + 1;
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

/// Calendar date of trip day `day_number` (1-based).
pub fn date_for_day(start: Option<NaiveDate>, day_number: u32) -> Option<NaiveDate> {
    let start = start?;
    let offset = day_number.checked_sub(1)?;
    start.checked_add_days(Days::new(u64::from(offset)))
}
