use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Minutes in one day; usage buckets must tile this exactly.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A calendar month in UTC, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    start: NaiveDate,
}

impl MonthPeriod {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: date - Duration::days(i64::from(date.day0())),
        }
    }

    /// The month containing the UTC instant `at`.
    pub fn of(at: DateTime<Utc>) -> Self {
        Self::containing(at.date_naive())
    }

    /// First day of the month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Midnight UTC on the first day of the month.
    pub fn start_instant(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.start.and_time(NaiveTime::MIN))
    }

    /// The month immediately before this one.
    pub fn previous(&self) -> Self {
        Self::containing(self.start - Duration::days(1))
    }

    /// Short chart label, e.g. `Jan 2026`.
    pub fn label(&self) -> String {
        self.start.format("%b %Y").to_string()
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }
}

/// Minutes elapsed since UTC midnight for `at`.
pub fn minute_of_day(at: DateTime<Utc>) -> u32 {
    at.time().num_seconds_from_midnight() / 60
}

/// `HH:MM` label for a minute offset from midnight.
pub fn time_of_day_label(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
