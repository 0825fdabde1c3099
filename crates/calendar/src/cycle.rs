//! Leap-cycle walk over the Jalaali break-point table.
//!
//! The Jalaali calendar repeats leap years in 33-year sub-cycles whose
//! phase shifts at a handful of break years within the 2820-year grand
//! cycle. [`jal_cal`] walks those break years to find where a given year
//! starts relative to March of the Gregorian calendar and how far it lies
//! from the previous leap year.

use crate::error::CalendarError;

/// Jalaali years at which the 33-year leap pattern changes phase.
///
/// The first entry is the smallest supported year; the last entry is one
/// past the largest supported year.
#[rustfmt::skip]
pub(crate) const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// Smallest Jalaali year covered by the break-point table.
pub const MIN_JALAALI_YEAR: i32 = BREAKS[0];

/// Largest Jalaali year covered by the break-point table.
pub const MAX_JALAALI_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Placement of a Jalaali year on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearInfo {
    leap: u8,
    gy: i32,
    march: u8,
}

impl YearInfo {
    /// Number of years since the last leap year (0..=4); 0 means this year
    /// is itself a leap year.
    pub fn leap(self) -> u8 {
        self.leap
    }

    /// Returns `true` if the year has 366 days.
    pub fn is_leap(self) -> bool {
        self.leap == 0
    }

    /// Gregorian year in which the Jalaali year begins.
    pub fn gregorian_year(self) -> i32 {
        self.gy
    }

    /// Day of Gregorian March on which Farvardin 1 falls.
    pub fn march_day(self) -> u8 {
        self.march
    }
}

/// Computes the leap status and Gregorian start of Jalaali year `jy`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `jy` is outside
/// [`MIN_JALAALI_YEAR`]..=[`MAX_JALAALI_YEAR`].
///
/// # Examples
///
/// ```ignore
/// let info = jal_cal(1403).unwrap();
/// assert!(info.is_leap());
/// assert_eq!(info.gregorian_year(), 2024);
/// assert_eq!(info.march_day(), 20);
/// ```
pub fn jal_cal(jy: i32) -> Result<YearInfo, CalendarError> {
    check_year(jy)?;
    Ok(walk(jy))
}

pub(crate) fn check_year(jy: i32) -> Result<(), CalendarError> {
    if !(MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&jy) {
        return Err(CalendarError::YearOutOfRange {
            year: jy,
            min: MIN_JALAALI_YEAR,
            max: MAX_JALAALI_YEAR,
        });
    }
    Ok(())
}

/// Break-point walk for a year already known to be in range.
pub(crate) fn walk(jy: i32) -> YearInfo {
    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    // Accumulate leap days of every full segment before the one holding jy.
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    // The last years of a segment continue the next segment's phase.
    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    YearInfo {
        leap: leap as u8,
        gy,
        march: march as u8,
    }
}
