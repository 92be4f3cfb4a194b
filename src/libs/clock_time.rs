//! Partial hours:minutes values used while a shift is being entered.
//!
//! A [`ClockTime`] holds an hour and a minute of a day, either of which may
//! be unset. Unset components are how a form represents a field the user has
//! not filled in yet, so an empty `ClockTime` is distinct from `00:00`.
//!
//! ## Validation
//!
//! Every constructor validates its input and returns [`InvalidTime`] on
//! failure:
//!
//! - Hours must be within `0..=23`
//! - Minutes must be within `0..=59`
//! - Text components must parse as integers (empty text means "unset")
//! - `HH:MM` strings must contain exactly one colon
//!
//! Values are never clamped into range. The only normalising constructor is
//! [`ClockTime::from_minutes`], which wraps any number of minutes into a
//! single day.
//!
//! ## Arithmetic
//!
//! All arithmetic goes through [`ClockTime::to_minutes`] and
//! [`ClockTime::from_minutes`], treating unset components as zero:
//!
//! ```rust
//! use shiftly::libs::clock_time::ClockTime;
//!
//! let late = ClockTime::from_hm(23, 30)?;
//! let hour = ClockTime::from_hm(1, 0)?;
//! assert_eq!(late + hour, ClockTime::from_hm(0, 30)?);
//! assert_eq!(ClockTime::from_hm(0, 30)? - hour, late);
//! # Ok::<(), shiftly::libs::clock_time::InvalidTime>(())
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of minutes in a day, the modulus of all clock arithmetic.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// The invalid-time error raised by every fallible `ClockTime` constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTime {
    #[error("invalid time: hours contains an invalid value '{0}'")]
    HoursNotANumber(String),
    #[error("invalid time: hours must be between 0 and 23, got {0}")]
    HoursOutOfRange(i64),
    #[error("invalid time: minutes contains an invalid value '{0}'")]
    MinutesNotANumber(String),
    #[error("invalid time: minutes must be between 0 and 59, got {0}")]
    MinutesOutOfRange(i64),
    #[error("invalid time: '{0}' is not formatted as HH:MM")]
    NotFormatted(String),
}

/// Source of the current moment.
///
/// Deriving a `ClockTime` from "now" goes through this trait so callers can
/// substitute a fixed instant in tests.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// An hours:minutes pair whose components may each be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawClockTime")]
pub struct ClockTime {
    hours: Option<u8>,
    minutes: Option<u8>,
}

impl ClockTime {
    /// Builds a time from optional integer components.
    ///
    /// `None` means "unset", not zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTime::HoursOutOfRange`] or
    /// [`InvalidTime::MinutesOutOfRange`] when a present component is
    /// outside its range.
    pub fn new(hours: Option<i64>, minutes: Option<i64>) -> Result<Self, InvalidTime> {
        let hours = match hours {
            Some(h) if !(0..24).contains(&h) => return Err(InvalidTime::HoursOutOfRange(h)),
            h => h.map(|h| h as u8),
        };
        let minutes = match minutes {
            Some(m) if !(0..60).contains(&m) => return Err(InvalidTime::MinutesOutOfRange(m)),
            m => m.map(|m| m as u8),
        };
        Ok(Self { hours, minutes })
    }

    /// Builds a time with both components set.
    pub fn from_hm(hours: i64, minutes: i64) -> Result<Self, InvalidTime> {
        Self::new(Some(hours), Some(minutes))
    }

    /// A time with neither component set.
    pub const fn empty() -> Self {
        Self { hours: None, minutes: None }
    }

    /// Builds a time from the text of two form fields.
    ///
    /// Each field is trimmed; an empty field leaves its component unset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiftly::libs::clock_time::ClockTime;
    ///
    /// let partial = ClockTime::parse_fields("9", "")?;
    /// assert_eq!(partial.hours(), Some(9));
    /// assert_eq!(partial.minutes(), None);
    /// assert!(ClockTime::parse_fields("nine", "00").is_err());
    /// # Ok::<(), shiftly::libs::clock_time::InvalidTime>(())
    /// ```
    pub fn parse_fields(hours: &str, minutes: &str) -> Result<Self, InvalidTime> {
        let hours = parse_component(hours).map_err(InvalidTime::HoursNotANumber)?;
        let minutes = parse_component(minutes).map_err(InvalidTime::MinutesNotANumber)?;
        Self::new(hours, minutes)
    }

    /// Builds a time from a plain `{hours, minutes}` pair of strings.
    pub fn from_fields(fields: &TimeFields) -> Result<Self, InvalidTime> {
        Self::parse_fields(&fields.hours, &fields.minutes)
    }

    /// Parses an `HH:MM` string. Both parts are required.
    pub fn parse(value: &str) -> Result<Self, InvalidTime> {
        let parts: Vec<&str> = value.split(':').collect();
        let [hours, minutes] = parts.as_slice() else {
            return Err(InvalidTime::NotFormatted(value.to_string()));
        };
        if hours.trim().is_empty() || minutes.trim().is_empty() {
            return Err(InvalidTime::NotFormatted(value.to_string()));
        }
        Self::parse_fields(hours, minutes)
    }

    /// Takes the hour and minute of an absolute point in time.
    pub fn from_datetime<T: Timelike>(value: &T) -> Self {
        Self {
            hours: Some(value.hour() as u8),
            minutes: Some(value.minute() as u8),
        }
    }

    /// Takes the hour and minute of the clock's current moment.
    pub fn now(clock: &impl Clock) -> Self {
        Self::from_datetime(&clock.now())
    }

    /// Wraps any number of minutes into a time of day.
    ///
    /// `from_minutes(1500)` is `01:00` because 1500 minutes is one day and
    /// one hour.
    pub fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: Some(((total_minutes / 60) % 24) as u8),
            minutes: Some((total_minutes % 60) as u8),
        }
    }

    pub fn hours(&self) -> Option<u8> {
        self.hours
    }

    pub fn minutes(&self) -> Option<u8> {
        self.minutes
    }

    pub fn to_pair(&self) -> (Option<u8>, Option<u8>) {
        (self.hours, self.minutes)
    }

    /// True when neither component is set.
    pub fn is_empty(&self) -> bool {
        self.hours.is_none() && self.minutes.is_none()
    }

    /// Minutes since midnight, unset components counting as zero.
    pub fn to_minutes(&self) -> u32 {
        u32::from(self.hours.unwrap_or(0)) * 60 + u32::from(self.minutes.unwrap_or(0))
    }

    pub fn to_hours(&self) -> f64 {
        f64::from(self.to_minutes()) / 60.0
    }

    /// Sum of both times, wrapping past midnight.
    pub fn add(&self, other: &ClockTime) -> ClockTime {
        Self::from_minutes(self.to_minutes() + other.to_minutes())
    }

    /// Difference of both times as same-day clock times.
    ///
    /// A negative difference wraps to the following day, so `00:30 - 01:00`
    /// is `23:30`. Callers needing a signed difference compare
    /// [`to_minutes`](Self::to_minutes) themselves.
    pub fn subtract(&self, other: &ClockTime) -> ClockTime {
        let diff = i64::from(self.to_minutes()) - i64::from(other.to_minutes());
        Self::from_minutes(diff.rem_euclid(i64::from(MINUTES_PER_DAY)) as u32)
    }

    /// Places this time on the given date, unset components counting as zero.
    pub fn on_date(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(chrono::NaiveTime::MIN)
            + TimeDelta::hours(i64::from(self.hours.unwrap_or(0)))
            + TimeDelta::minutes(i64::from(self.minutes.unwrap_or(0)))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours.unwrap_or(0), self.minutes.unwrap_or(0))
    }
}

impl FromStr for ClockTime {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::ops::Add for ClockTime {
    type Output = ClockTime;

    fn add(self, rhs: ClockTime) -> ClockTime {
        ClockTime::add(&self, &rhs)
    }
}

impl std::ops::Sub for ClockTime {
    type Output = ClockTime;

    fn sub(self, rhs: ClockTime) -> ClockTime {
        ClockTime::subtract(&self, &rhs)
    }
}

/// The text of an hours field and a minutes field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    pub hours: String,
    pub minutes: String,
}

/// Trims and parses one component; empty text is unset.
fn parse_component(value: &str) -> Result<Option<i64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<i64>().map(Some).map_err(|_| value.to_string())
}

/// A component as it arrives from a form or a stored document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawComponent {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
struct RawClockTime {
    #[serde(default)]
    hours: Option<RawComponent>,
    #[serde(default)]
    minutes: Option<RawComponent>,
}

impl TryFrom<RawClockTime> for ClockTime {
    type Error = InvalidTime;

    fn try_from(raw: RawClockTime) -> Result<Self, Self::Error> {
        let hours = match raw.hours {
            None => None,
            Some(RawComponent::Number(h)) => Some(h),
            Some(RawComponent::Text(text)) => parse_component(&text).map_err(InvalidTime::HoursNotANumber)?,
        };
        let minutes = match raw.minutes {
            None => None,
            Some(RawComponent::Number(m)) => Some(m),
            Some(RawComponent::Text(text)) => parse_component(&text).map_err(InvalidTime::MinutesNotANumber)?,
        };
        ClockTime::new(hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minutes_matches_components() {
        for h in 0..24 {
            for m in [0, 1, 29, 59] {
                let time = ClockTime::from_hm(h, m).unwrap();
                assert_eq!(time.to_minutes(), (h * 60 + m) as u32);
                assert_eq!(ClockTime::from_minutes((h * 60 + m) as u32), time);
            }
        }
    }

    #[test]
    fn test_from_minutes_wraps_into_day() {
        assert_eq!(ClockTime::from_minutes(1500), ClockTime::from_hm(1, 0).unwrap());
        assert_eq!(ClockTime::from_minutes(MINUTES_PER_DAY), ClockTime::from_hm(0, 0).unwrap());
        let big = ClockTime::from_minutes(u32::MAX);
        assert!(big.hours().unwrap() < 24);
        assert!(big.minutes().unwrap() < 60);
    }

    #[test]
    fn test_out_of_range_components_fail() {
        assert_eq!(ClockTime::from_hm(24, 0), Err(InvalidTime::HoursOutOfRange(24)));
        assert_eq!(ClockTime::from_hm(-1, 0), Err(InvalidTime::HoursOutOfRange(-1)));
        assert_eq!(ClockTime::from_hm(0, 60), Err(InvalidTime::MinutesOutOfRange(60)));
        assert_eq!(ClockTime::new(None, Some(-5)), Err(InvalidTime::MinutesOutOfRange(-5)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(ClockTime::parse("9-30"), Err(InvalidTime::NotFormatted(_))));
        assert!(matches!(ClockTime::parse("09:30:00"), Err(InvalidTime::NotFormatted(_))));
        assert!(matches!(ClockTime::parse("09:"), Err(InvalidTime::NotFormatted(_))));
        assert!(matches!(ClockTime::parse("ab:30"), Err(InvalidTime::HoursNotANumber(_))));
        assert_eq!("09:30".parse::<ClockTime>().unwrap(), ClockTime::from_hm(9, 30).unwrap());
    }

    #[test]
    fn test_empty_is_distinct_from_midnight() {
        let empty = ClockTime::parse_fields("", " ").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, ClockTime::empty());
        assert_ne!(empty, ClockTime::from_hm(0, 0).unwrap());
        assert_eq!(empty.to_string(), "00:00");
        assert_eq!(empty.to_minutes(), 0);
    }

    #[test]
    fn test_partial_time_counts_unset_as_zero() {
        let time = ClockTime::new(Some(7), None).unwrap();
        assert!(!time.is_empty());
        assert_eq!(time.to_minutes(), 420);
        assert_eq!(time.to_string(), "07:00");
        assert_eq!(ClockTime::new(None, Some(5)).unwrap().to_string(), "00:05");
    }

    #[test]
    fn test_add_and_subtract_wrap() {
        let late = ClockTime::from_hm(23, 30).unwrap();
        let hour = ClockTime::from_hm(1, 0).unwrap();
        assert_eq!(late.add(&hour), ClockTime::from_hm(0, 30).unwrap());
        assert_eq!(ClockTime::from_hm(0, 30).unwrap().subtract(&hour), late);
        assert_eq!(late - hour, ClockTime::from_hm(22, 30).unwrap());
    }

    #[test]
    fn test_to_hours_is_fractional() {
        assert_eq!(ClockTime::from_hm(7, 30).unwrap().to_hours(), 7.5);
        assert_eq!(ClockTime::from_hm(0, 15).unwrap().to_hours(), 0.25);
    }

    #[test]
    fn test_on_date_and_now() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let time = ClockTime::new(Some(9), None).unwrap();
        assert_eq!(time.on_date(date), date.and_hms_opt(9, 0, 0).unwrap());

        let clock = FixedClock(date.and_hms_opt(16, 45, 12).unwrap());
        assert_eq!(ClockTime::now(&clock), ClockTime::from_hm(16, 45).unwrap());
    }

    #[test]
    fn test_deserialize_validates() {
        let time: ClockTime = serde_json::from_str(r#"{"hours":"9","minutes":30}"#).unwrap();
        assert_eq!(time, ClockTime::from_hm(9, 30).unwrap());

        let empty: ClockTime = serde_json::from_str(r#"{"hours":"","minutes":null}"#).unwrap();
        assert!(empty.is_empty());

        assert!(serde_json::from_str::<ClockTime>(r#"{"hours":25,"minutes":0}"#).is_err());
        assert!(serde_json::from_str::<ClockTime>(r#"{"hours":"x","minutes":0}"#).is_err());

        let json = serde_json::to_string(&ClockTime::new(Some(8), None).unwrap()).unwrap();
        assert_eq!(json, r#"{"hours":8,"minutes":null}"#);
    }
}
