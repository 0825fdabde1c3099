//! Conversions between the Jalaali and Gregorian calendars.
//!
//! Every conversion goes through a [`JulianDayNumber`]: the source date is
//! validated and mapped to its day number, which is then mapped into the
//! target calendar.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::gregorian::{self, GregorianDate};
use crate::jalaali::{self, JalaaliDate};
use crate::jdn::JulianDayNumber;

/// Converts a Gregorian `(year, month, day)` triple to a Jalaali date.
///
/// # Errors
///
/// Returns [`CalendarError`] if the Gregorian date is invalid, or
/// [`CalendarError::JdnOutOfRange`] if it falls outside the supported
/// Jalaali years.
///
/// # Examples
///
/// ```ignore
/// let date = to_jalaali(2024, 3, 20).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (1403, 1, 1));
/// ```
pub fn to_jalaali(gy: i32, gm: u8, gd: u8) -> Result<JalaaliDate, CalendarError> {
    jalaali::d2j(gregorian::g2d(gy, gm, gd)?)
}

/// Converts a `chrono` calendar day to a Jalaali date.
///
/// # Errors
///
/// Same as [`to_jalaali`].
pub fn to_jalaali_from_naive(date: NaiveDate) -> Result<JalaaliDate, CalendarError> {
    GregorianDate::try_from(date)?.to_jalaali()
}

/// Converts a Jalaali `(year, month, day)` triple to a Gregorian date.
///
/// # Errors
///
/// Returns [`CalendarError`] if the Jalaali date is invalid.
pub fn to_gregorian(jy: i32, jm: u8, jd: u8) -> Result<GregorianDate, CalendarError> {
    gregorian::d2g(jalaali::j2d(jy, jm, jd)?)
}

impl GregorianDate {
    /// Returns the equivalent Jalaali date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::JdnOutOfRange`] if the date falls outside the
    /// supported Jalaali years.
    pub fn to_jalaali(self) -> Result<JalaaliDate, CalendarError> {
        jalaali::d2j(self.to_jdn())
    }
}

impl JalaaliDate {
    /// Returns the equivalent Gregorian date.
    pub fn to_gregorian(self) -> GregorianDate {
        // Safety: supported Jalaali years (560..=3799 CE) lie far inside
        // the Gregorian range accepted by d2g.
        gregorian::d2g(self.to_jdn()).expect("jalaali range is inside the gregorian range")
    }
}

impl TryFrom<GregorianDate> for JalaaliDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_jalaali()
    }
}

impl From<JalaaliDate> for GregorianDate {
    fn from(date: JalaaliDate) -> Self {
        date.to_gregorian()
    }
}

impl From<JalaaliDate> for JulianDayNumber {
    fn from(date: JalaaliDate) -> Self {
        date.to_jdn()
    }
}

impl From<GregorianDate> for JulianDayNumber {
    fn from(date: GregorianDate) -> Self {
        date.to_jdn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nowruz_1403() {
        let j = to_jalaali(2024, 3, 20).unwrap();
        assert_eq!((j.year(), j.month(), j.day()), (1403, 1, 1));
        let g = to_gregorian(1403, 1, 1).unwrap();
        assert_eq!((g.year(), g.month(), g.day()), (2024, 3, 20));
    }

    #[test]
    fn day_before_nowruz() {
        let j = to_jalaali(2024, 3, 19).unwrap();
        assert_eq!((j.year(), j.month(), j.day()), (1402, 12, 29));
    }

    #[test]
    fn reference_pairs() {
        let cases = [
            ((1981, 8, 17), (1360, 5, 26)),
            ((2013, 1, 10), (1391, 10, 21)),
            ((2014, 8, 4), (1393, 5, 13)),
            ((1970, 1, 1), (1348, 10, 11)),
            ((2025, 3, 20), (1403, 12, 30)),
            ((2025, 3, 21), (1404, 1, 1)),
        ];
        for ((gy, gm, gd), (jy, jm, jd)) in cases {
            let j = to_jalaali(gy, gm, gd).unwrap();
            assert_eq!(
                (j.year(), j.month(), j.day()),
                (jy, jm, jd),
                "to_jalaali({gy}, {gm}, {gd})"
            );
            let g = to_gregorian(jy, jm, jd).unwrap();
            assert_eq!(
                (g.year(), g.month(), g.day()),
                (gy, gm, gd),
                "to_gregorian({jy}, {jm}, {jd})"
            );
        }
    }

    #[test]
    fn to_jalaali_rejects_invalid_gregorian() {
        assert_eq!(
            to_jalaali(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
        assert_eq!(
            to_jalaali(2024, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn to_jalaali_outside_jalaali_range() {
        assert!(matches!(
            to_jalaali(500, 1, 1).unwrap_err(),
            CalendarError::JdnOutOfRange { .. }
        ));
    }

    #[test]
    fn to_gregorian_rejects_invalid_jalaali() {
        assert_eq!(
            to_gregorian(1404, 12, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 12,
                max_day: 29,
            }
        );
    }

    #[test]
    fn from_naive() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(
            to_jalaali_from_naive(naive).unwrap(),
            JalaaliDate::new(1403, 1, 1).unwrap()
        );
    }

    #[test]
    fn trait_conversions() {
        let j = JalaaliDate::new(1403, 1, 1).unwrap();
        let g = GregorianDate::from(j);
        assert_eq!(g, GregorianDate::new(2024, 3, 20).unwrap());
        assert_eq!(JalaaliDate::try_from(g).unwrap(), j);
        assert_eq!(JulianDayNumber::from(j), JulianDayNumber::from(g));
    }
}
