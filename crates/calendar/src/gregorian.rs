//! Proleptic Gregorian dates and their Julian Day Number formulas.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::jdn::JulianDayNumber;

/// Smallest Gregorian year accepted by [`g2d`].
pub const MIN_GREGORIAN_YEAR: i32 = -100_000;

/// Largest Gregorian year accepted by [`g2d`].
pub const MAX_GREGORIAN_YEAR: i32 = 100_000;

/// Day number of January 1 of [`MIN_GREGORIAN_YEAR`].
const MIN_JDN: i64 = g2d_raw(MIN_GREGORIAN_YEAR, 1, 1);

/// Day number of December 31 of [`MAX_GREGORIAN_YEAR`].
const MAX_JDN: i64 = g2d_raw(MAX_GREGORIAN_YEAR, 12, 31);

/// Month lengths in a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A validated date in the proleptic Gregorian calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "GregorianParts")]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Unvalidated wire shape of a [`GregorianDate`].
#[derive(Deserialize)]
struct GregorianParts {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<GregorianParts> for GregorianDate {
    type Error = CalendarError;

    fn try_from(parts: GregorianParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl GregorianDate {
    /// Creates a new `GregorianDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside
    /// [`MIN_GREGORIAN_YEAR`]..=[`MAX_GREGORIAN_YEAR`], the month is outside
    /// 1..=12, or the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(self) -> JulianDayNumber {
        JulianDayNumber::new(g2d_raw(self.year, self.month, self.day))
    }

    /// Returns the equivalent `chrono` date, or `None` if `chrono` cannot
    /// represent the year.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        // chrono guarantees month <= 12 and day <= 31
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

/// Returns `true` for Gregorian leap years: divisible by 4, and not by 100
/// unless also by 400.
pub fn is_leap_gregorian_year(gy: i32) -> bool {
    (gy % 4 == 0 && gy % 100 != 0) || gy % 400 == 0
}

/// Returns the number of days in the given Gregorian month, or 0 when the
/// month is outside 1..=12.
pub fn gregorian_month_length(gy: i32, gm: u8) -> u8 {
    match gm {
        2 if is_leap_gregorian_year(gy) => 29,
        1..=12 => DAYS_PER_MONTH[gm as usize],
        _ => 0,
    }
}

/// Returns `true` if the triple is a valid date within the supported
/// Gregorian range.
pub fn is_valid_gregorian_date(gy: i32, gm: u8, gd: u8) -> bool {
    validate(gy, gm, gd).is_ok()
}

/// Converts a Gregorian date to its Julian Day Number.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date is not a valid Gregorian date in
/// the supported range.
pub fn g2d(gy: i32, gm: u8, gd: u8) -> Result<JulianDayNumber, CalendarError> {
    validate(gy, gm, gd)?;
    Ok(JulianDayNumber::new(g2d_raw(gy, gm, gd)))
}

/// Converts a Julian Day Number to a Gregorian date.
///
/// # Errors
///
/// Returns [`CalendarError::JdnOutOfRange`] if the day falls outside the
/// supported Gregorian years.
pub fn d2g(jdn: JulianDayNumber) -> Result<GregorianDate, CalendarError> {
    let d = jdn.get();
    if !(MIN_JDN..=MAX_JDN).contains(&d) {
        return Err(CalendarError::JdnOutOfRange { jdn: d });
    }
    let mut j = 4 * d + 139_361_631;
    j += (4 * d + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;
    let day = (i % 153) / 5 + 1;
    let month = (i / 153) % 12 + 1;
    let year = j / 1461 - 100_100 + (8 - month) / 6;
    // bounded by MIN_JDN..=MAX_JDN above
    Ok(GregorianDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    })
}

/// Day-number formula without validation.
///
/// Months are shifted so the computational year starts in March; the
/// `100_100` year offset keeps every truncating division non-negative for
/// years down to [`MIN_GREGORIAN_YEAR`].
pub(crate) const fn g2d_raw(gy: i32, gm: u8, gd: u8) -> i64 {
    let (gy, gm, gd) = (gy as i64, gm as i64, gd as i64);
    let shift = (gm - 8) / 6;
    let d = (gy + shift + 100_100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd - 34_840_408;
    d - (gy + 100_100 + shift) / 100 * 3 / 4 + 752
}

fn validate(gy: i32, gm: u8, gd: u8) -> Result<(), CalendarError> {
    if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&gy) {
        return Err(CalendarError::YearOutOfRange {
            year: gy,
            min: MIN_GREGORIAN_YEAR,
            max: MAX_GREGORIAN_YEAR,
        });
    }
    if !(1..=12).contains(&gm) {
        return Err(CalendarError::InvalidMonth { month: gm });
    }
    let max_day = gregorian_month_length(gy, gm);
    if !(1..=max_day).contains(&gd) {
        return Err(CalendarError::InvalidDay {
            day: gd,
            month: gm,
            max_day,
        });
    }
    Ok(())
}
