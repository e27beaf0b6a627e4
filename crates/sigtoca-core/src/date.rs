//! Date helpers for captured events.
//!
//! This module provides [`CalendarDate`], an immutable wall-clock datetime, plus
//! the parsers for the two date shapes found on the scraped pages
//! (`YYYYMMDD` and `D-M-Y`) and the compact UTC format used by the calendar
//! services' deep links (`YYYYMMDDTHHMMSSZ`).
//!
//! # Example
//!
//! ```
//! use sigtoca_core::date::{parse_compact_date, day_difference};
//!
//! let start = parse_compact_date("20210305").unwrap();
//! let class = start.set_hours_minutes("08:00 - 10:00", 0).unwrap();
//! assert_eq!(class.to_calendar_service_format(), "20210305T080000Z");
//! assert_eq!(day_difference(&start, &start.add_days(5).unwrap()), 5);
//! ```

use std::fmt;

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

const MS_PER_DAY: i64 = 86_400_000;

/// Layout of the calendar services' date parameter.
const SERVICE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Separator between the two halves of an `HH:MM - HH:MM` range.
const RANGE_SEPARATOR: &str = " - ";

/// A point in time with second resolution.
///
/// The value is a wall-clock datetime without a zone. It is read as UTC
/// whenever it is rendered in the calendar-service format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDateTime);

impl CalendarDate {
    /// Wraps a naive datetime.
    pub fn new(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// Creates a date from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.naive_utc())
    }

    /// Creates a date from a datetime in any timezone, converted to UTC.
    pub fn from_local<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(dt.naive_utc())
    }

    /// Creates a date at midnight of the given day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    /// Creates a date from its components, or `None` if they are not a valid datetime.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, 0)
            .map(Self)
    }

    /// Returns the underlying naive datetime.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the datetime read as UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.and_utc()
    }

    /// Returns the calendar day.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns a new date `days` calendar days later (earlier if negative).
    ///
    /// The time of day is preserved; month and year boundaries roll over.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self).ok_or(DateError::OutOfRange)
    }

    /// Returns a new date on the same day with hour and minute taken from one
    /// side of an `"HH:MM - HH:MM"` range.
    ///
    /// `index` 0 picks the start of the range, 1 the end. Seconds are kept.
    pub fn set_hours_minutes(&self, range: &str, index: usize) -> Result<Self, DateError> {
        let (hour, minute) =
            parse_range_side(range, index).ok_or_else(|| DateError::time_range(range, index))?;
        self.0
            .with_hour(hour)
            .and_then(|dt| dt.with_minute(minute))
            .map(Self)
            .ok_or_else(|| DateError::time_range(range, index))
    }

    /// Renders the date as `YYYYMMDDTHHMMSSZ`.
    pub fn to_calendar_service_format(&self) -> String {
        self.0.format(SERVICE_FORMAT).to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SERVICE_FORMAT))
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

/// Returns `date` advanced by `days` calendar days.
///
/// See [`CalendarDate::add_days`].
pub fn add_days(date: &CalendarDate, days: i64) -> Result<CalendarDate, DateError> {
    date.add_days(days)
}

/// Returns `date` with hour and minute replaced from an `"HH:MM - HH:MM"` range.
///
/// See [`CalendarDate::set_hours_minutes`].
pub fn set_hours_minutes(
    date: &CalendarDate,
    range: &str,
    index: usize,
) -> Result<CalendarDate, DateError> {
    date.set_hours_minutes(range, index)
}

/// Renders `date` as `YYYYMMDDTHHMMSSZ`.
pub fn to_calendar_service_format(date: &CalendarDate) -> String {
    date.to_calendar_service_format()
}

/// Parses an 8-digit `YYYYMMDD` string into a date at midnight.
///
/// The month in the input is 1-based. chrono months are 1-based as well, so the
/// value is used as-is; no `- 1` shift is applied.
pub fn parse_compact_date(text: &str) -> Result<CalendarDate, DateError> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::compact(text));
    }

    let year: i32 = text[0..4].parse().map_err(|_| DateError::compact(text))?;
    let month: u32 = text[4..6].parse().map_err(|_| DateError::compact(text))?;
    let day: u32 = text[6..8].parse().map_err(|_| DateError::compact(text))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(CalendarDate::from_date)
        .ok_or_else(|| DateError::compact(text))
}

/// Parses a `"D-M-Y"` string into a date at midnight.
///
/// The components are reordered to `Y-M-D` before parsing, so `"5-3-2021"` and
/// `"05-03-2021"` are the same day.
pub fn parse_dmy_date(text: &str) -> Result<CalendarDate, DateError> {
    let mut parts: Vec<&str> = text.trim().split('-').collect();
    parts.reverse();

    let [year, month, day] = parts[..] else {
        return Err(DateError::dmy(text));
    };

    let year: i32 = year.trim().parse().map_err(|_| DateError::dmy(text))?;
    let month: u32 = month.trim().parse().map_err(|_| DateError::dmy(text))?;
    let day: u32 = day.trim().parse().map_err(|_| DateError::dmy(text))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(CalendarDate::from_date)
        .ok_or_else(|| DateError::dmy(text))
}

/// Returns the number of days from `first` to `second`, rounded to the nearest
/// whole day.
///
/// Halves round up (toward positive infinity), so a span of exactly -0.5 days
/// is 0, not -1. Rounding rather than truncating absorbs the one-hour noise of
/// daylight-saving transitions.
pub fn day_difference(first: &CalendarDate, second: &CalendarDate) -> i64 {
    let ms = (second.0 - first.0).num_milliseconds();
    (ms + MS_PER_DAY / 2).div_euclid(MS_PER_DAY)
}

/// Extracts `(hour, minute)` from one side of `"HH:MM - HH:MM"`.
fn parse_range_side(range: &str, index: usize) -> Option<(u32, u32)> {
    let (start, end) = range.split_once(RANGE_SEPARATOR)?;
    if end.contains(RANGE_SEPARATOR) {
        return None;
    }

    let side = match index {
        0 => start,
        1 => end,
        _ => return None,
    };

    let (hour, minute) = side.trim().split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;

    (hour < 24 && minute < 60).then_some((hour, minute))
}
