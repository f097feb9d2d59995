use chrono::{NaiveTime, Timelike};

/// Upper bound for a single item's duration. Longer values from notes are
/// clamped to one full day.
pub const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// Half-open `[start, end)` range in minutes since midnight of the item's day.
/// `end` may run past 1440; midnight crossing is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, duration_minutes: i64) -> Self {
        Self {
            start,
            end: start.saturating_add(duration_minutes),
        }
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Assumes `self.start <= other.start`. Equal starts always clash, even
    /// for zero-length ranges.
    pub fn overlaps_later(&self, other: &Interval) -> bool {
        self.start == other.start || self.end > other.start
    }
}

/// Accepts `HH:MM`, `H:MM` and `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .ok()
}

pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    (time.hour() as i64) * 60 + (time.minute() as i64)
}

pub fn effective_duration(duration: Option<i64>, default_minutes: i64) -> i64 {
    duration
        .filter(|minutes| *minutes > 0)
        .map(|minutes| minutes.min(MAX_DURATION_MINUTES))
        .unwrap_or(default_minutes)
}

/// `None` when the item is unscheduled (no time or an unparsable one).
pub fn interval_for(time: Option<&str>, duration: Option<i64>, default_minutes: i64) -> Option<Interval> {
    let time = parse_time_of_day(time?)?;
    Some(Interval::new(
        minutes_from_midnight(time),
        effective_duration(duration, default_minutes),
    ))
}

pub fn format_minutes(total_minutes: i64) -> String {
    let total = total_minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", total / 60, total % 60)
}
