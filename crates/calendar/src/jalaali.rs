//! Jalaali dates, their Julian Day Number formulas and calendar queries.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cycle::{self, MAX_JALAALI_YEAR, MIN_JALAALI_YEAR};
use crate::error::CalendarError;
use crate::gregorian::{self, g2d_raw};
use crate::jdn::JulianDayNumber;

/// Days covered by the six 31-day months at the start of every year.
const FIRST_HALF_DAYS: i64 = 186;

/// Weekdays indexed by `jdn % 7` (day 0 of the count was a Monday).
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A validated date in the Jalaali (Persian solar Hijri) calendar.
///
/// Dates order chronologically. Years are limited to
/// [`MIN_JALAALI_YEAR`]..=[`MAX_JALAALI_YEAR`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "JalaaliParts")]
pub struct JalaaliDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Unvalidated wire shape of a [`JalaaliDate`].
#[derive(Deserialize)]
struct JalaaliParts {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<JalaaliParts> for JalaaliDate {
    type Error = CalendarError;

    fn try_from(parts: JalaaliParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl JalaaliDate {
    /// Creates a new `JalaaliDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside the supported range,
    /// the month is outside 1..=12, or the day exceeds the month length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the date for a Julian Day Number. Same as [`d2j`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if the day falls outside the
    /// supported Jalaali years.
    pub fn from_jdn(jdn: JulianDayNumber) -> Result<Self, CalendarError> {
        d2j(jdn)
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
        JulianDayNumber::new(year_start(self.year) + offset_in_year(self.month, self.day))
    }

    /// Returns the day-of-year (1..=366).
    pub fn day_of_year(self) -> u16 {
        offset_in_year(self.month, self.day) as u16 + 1
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        WEEKDAYS[self.to_jdn().get().rem_euclid(7) as usize]
    }

    /// Returns the next date, or `None` after the last supported day.
    pub fn next(self) -> Option<Self> {
        if self.day < jalaali_month_length(self.year, self.month) {
            Some(Self {
                day: self.day + 1,
                ..self
            })
        } else if self.month < 12 {
            Some(Self {
                month: self.month + 1,
                day: 1,
                ..self
            })
        } else if self.year < MAX_JALAALI_YEAR {
            Some(Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            })
        } else {
            None
        }
    }
}

/// Returns `true` if the triple is a valid Jalaali date within the
/// supported range. Never panics.
pub fn is_valid_jalaali_date(jy: i32, jm: u8, jd: u8) -> bool {
    validate(jy, jm, jd).is_ok()
}

/// Returns `true` if month 12 of Jalaali year `jy` has 30 days.
///
/// Years outside [`MIN_JALAALI_YEAR`]..=[`MAX_JALAALI_YEAR`] report `false`.
pub fn is_leap_jalaali_year(jy: i32) -> bool {
    cycle::check_year(jy).is_ok() && cycle::walk(jy).is_leap()
}

/// Returns the number of days in a Jalaali month.
///
/// Months 1..=6 have 31 days, months 7..=11 have 30, and month 12 has 30 in
/// leap years and 29 otherwise. Returns 0 when `jm` is outside 1..=12.
pub fn jalaali_month_length(jy: i32, jm: u8) -> u8 {
    match jm {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_jalaali_year(jy) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Returns the number of days in Jalaali year `jy` (365 or 366).
pub fn jalaali_year_length(jy: i32) -> u16 {
    if is_leap_jalaali_year(jy) { 366 } else { 365 }
}

/// Converts a Jalaali date to its Julian Day Number.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date is invalid.
pub fn j2d(jy: i32, jm: u8, jd: u8) -> Result<JulianDayNumber, CalendarError> {
    Ok(JalaaliDate::new(jy, jm, jd)?.to_jdn())
}

/// Converts a Julian Day Number to a Jalaali date.
///
/// # Errors
///
/// Returns [`CalendarError::JdnOutOfRange`] if the day falls outside the
/// supported Jalaali years.
pub fn d2j(jdn: JulianDayNumber) -> Result<JalaaliDate, CalendarError> {
    let out_of_range = || CalendarError::JdnOutOfRange { jdn: jdn.get() };

    let gy = gregorian::d2g(jdn)?.year();
    let mut jy = (gy - 621).min(MAX_JALAALI_YEAR);
    if jy < MIN_JALAALI_YEAR {
        return Err(out_of_range());
    }
    let mut start = year_start(jy);
    if jdn.get() < start {
        // Before Farvardin 1: the day belongs to the previous year.
        trace!(jdn = jdn.get(), jy, "stepping back one jalaali year");
        jy -= 1;
        if jy < MIN_JALAALI_YEAR {
            return Err(out_of_range());
        }
        start = year_start(jy);
    }

    let k = jdn.get() - start;
    if k >= i64::from(jalaali_year_length(jy)) {
        return Err(out_of_range());
    }
    let (month, day) = if k < FIRST_HALF_DAYS {
        (1 + k / 31, k % 31 + 1)
    } else {
        let k = k - FIRST_HALF_DAYS;
        (7 + k / 30, k % 30 + 1)
    };
    Ok(JalaaliDate {
        year: jy,
        month: month as u8,
        day: day as u8,
    })
}

/// Day number of Farvardin 1 for a year already known to be in range.
fn year_start(jy: i32) -> i64 {
    let info = cycle::walk(jy);
    g2d_raw(info.gregorian_year(), 3, info.march_day())
}

/// Zero-based offset of `(jm, jd)` from Farvardin 1.
fn offset_in_year(jm: u8, jd: u8) -> i64 {
    let (jm, jd) = (i64::from(jm), i64::from(jd));
    (jm - 1) * 31 - (jm / 7) * (jm - 7) + jd - 1
}

fn validate(jy: i32, jm: u8, jd: u8) -> Result<(), CalendarError> {
    cycle::check_year(jy)?;
    if !(1..=12).contains(&jm) {
        return Err(CalendarError::InvalidMonth { month: jm });
    }
    let max_day = jalaali_month_length(jy, jm);
    if !(1..=max_day).contains(&jd) {
        return Err(CalendarError::InvalidDay {
            day: jd,
            month: jm,
            max_day,
        });
    }
    Ok(())
}
