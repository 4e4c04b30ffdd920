//! Time module for the instants positions are sampled at
//!
//! Instants are Julian dates on a single uniform axis. Only ordering and
//! subtraction into a day count are needed by the analytics; the calendar
//! constructors exist for callers assembling the instants they query.

pub mod calendar;

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DAYS_PER_JULIAN_CENTURY, DAY_S, J2000, UNIX_EPOCH_JD};

/// Error type for time operations
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Invalid sampling cadence: {0}")]
    InvalidCadence(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// A Julian date: a continuous day count used as the time axis
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDate(f64);

impl JulianDate {
    /// The J2000.0 epoch, 2000-01-01T12:00 TT
    pub const J2000: JulianDate = JulianDate(J2000);

    /// Wraps a raw Julian date
    pub const fn new(jd: f64) -> Self {
        JulianDate(jd)
    }

    /// Creates a Julian date from a proleptic Gregorian calendar date
    ///
    /// `day` may carry a fraction of a day; `1.0` is midnight at the start of
    /// the month. Years use astronomical numbering, so 5561 BCE is `-5560`.
    ///
    /// ```rust
    /// use zodiacal::time::JulianDate;
    ///
    /// let jd = JulianDate::from_calendar(2000, 1, 1.5).unwrap();
    /// assert_eq!(jd, JulianDate::J2000);
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "month {} of year {} is not in 1..=12",
                month, year
            )));
        }
        let last_day = calendar::days_in_month(year, month) as f64;
        if !day.is_finite() || day < 1.0 || day >= last_day + 1.0 {
            return Err(TimeError::InvalidDate(format!(
                "day {} is not within {}-{:02}",
                day, year, month
            )));
        }
        Ok(JulianDate(calendar::compute_julian_date(year, month, day)))
    }

    /// Builds `count` evenly spaced instants starting at `start`
    ///
    /// The step must be positive so the series is strictly increasing.
    pub fn series(start: JulianDate, step_days: f64, count: usize) -> Result<Vec<JulianDate>> {
        if !step_days.is_finite() || step_days <= 0.0 {
            return Err(TimeError::InvalidCadence(format!(
                "step of {} days must be positive",
                step_days
            )));
        }
        Ok((0..count)
            .map(|i| JulianDate(start.0 + i as f64 * step_days))
            .collect())
    }

    /// Returns the raw Julian date
    pub fn jd(&self) -> f64 {
        self.0
    }

    /// Days elapsed since `earlier` (negative if `earlier` is later)
    pub fn days_since(&self, earlier: JulianDate) -> f64 {
        self.0 - earlier.0
    }

    /// Julian centuries elapsed since `epoch`
    pub fn julian_centuries_since(&self, epoch: JulianDate) -> f64 {
        self.days_since(epoch) / DAYS_PER_JULIAN_CENTURY
    }

    /// Calendar date of the civil day containing this instant
    ///
    /// Fails for non-finite instants and for years outside the `i32` range.
    pub fn calendar_date(&self) -> Result<(i32, u32, u32)> {
        let day = (self.0 + 0.5).floor();
        let out_of_range = || TimeError::InvalidDate(format!("{} has no calendar date", self));
        // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive
        if !day.is_finite() || day.abs() >= i64::MAX as f64 {
            return Err(out_of_range());
        }
        calendar::compute_calendar_date(day as i64).ok_or_else(out_of_range)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.5}", self.0)
    }
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    fn add(self, days: f64) -> Self::Output {
        JulianDate(self.0 + days)
    }
}

impl Sub<f64> for JulianDate {
    type Output = JulianDate;

    fn sub(self, days: f64) -> Self::Output {
        JulianDate(self.0 - days)
    }
}

impl Sub<JulianDate> for JulianDate {
    type Output = f64;

    fn sub(self, other: JulianDate) -> Self::Output {
        // Return the difference in days
        self.days_since(other)
    }
}

// Allow conversion from DateTime<Utc> to JulianDate
impl From<DateTime<Utc>> for JulianDate {
    fn from(dt: DateTime<Utc>) -> Self {
        let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1_000_000_000.0;
        JulianDate(UNIX_EPOCH_JD + seconds / DAY_S)
    }
}
