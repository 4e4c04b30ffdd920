//! Calendar date and Julian day conversion functions
//!
//! Dates use the proleptic Gregorian calendar with astronomical year
//! numbering: 1 BCE is year 0, so 5561 BCE is year -5560. Floor division is
//! used throughout so the formulas hold for years before -4712 as well.

/// Convert (year, month, day) to Julian day integer
///
/// The Julian day number labels the day beginning at noon on the given date.
pub fn compute_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let janfeb = if month < 3 { 1 } else { 0 };

    (1461 * (year + 4800 - janfeb)).div_euclid(4)
        + (367 * (month - 2 + 12 * janfeb)).div_euclid(12)
        - (3 * (year + 4900 - janfeb).div_euclid(100)).div_euclid(4)
        - 32075
        + day
}

/// Convert (year, month, fractional day) to a Julian date
///
/// Day `1.0` is midnight at the start of the first of the month.
pub fn compute_julian_date(year: i32, month: u32, day: f64) -> f64 {
    let whole = day.floor();
    compute_julian_day(year, month, whole as u32) as f64 - 0.5 + (day - whole)
}

/// Convert Julian day integer to calendar date (year, month, day)
///
/// Returns `None` when the year does not fit in an `i32`.
/// See the Explanatory Supplement to the Astronomical Almanac 15.11.
pub fn compute_calendar_date(jd_integer: i64) -> Option<(i32, u32, u32)> {
    let century = jd_integer.checked_mul(4)?.checked_add(274277)?.div_euclid(146097);
    let f = jd_integer.checked_add(1401 + (century * 3).div_euclid(4) - 38)?;
    let e = f.checked_mul(4)?.checked_add(3)?;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);

    Some((i32::try_from(year).ok()?, month as u32, day as u32))
}

/// Number of days in a month of the proleptic Gregorian calendar
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Gregorian leap year rule, extended to year zero and negative years
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}
