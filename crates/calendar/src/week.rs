//! Persian week (Saturday to Friday) lookup.

use chrono::Weekday;
use serde::Serialize;

use crate::error::CalendarError;
use crate::jalaali::{self, JalaaliDate};

/// First and last day of a Persian week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JalaaliWeek {
    /// The Saturday that opens the week.
    pub saturday: JalaaliDate,
    /// The Friday that closes the week.
    pub friday: JalaaliDate,
}

/// Returns the position of `weekday` in a Persian week (Saturday = 0).
pub fn days_from_saturday(weekday: Weekday) -> u8 {
    ((weekday.num_days_from_sunday() + 1) % 7) as u8
}

/// Returns the Saturday-to-Friday week containing the given Jalaali date.
///
/// # Errors
///
/// Returns [`CalendarError`] if the date is invalid, or
/// [`CalendarError::JdnOutOfRange`] if the week spills past the supported
/// range.
pub fn jalaali_week(jy: i32, jm: u8, jd: u8) -> Result<JalaaliWeek, CalendarError> {
    let date = JalaaliDate::new(jy, jm, jd)?;
    let jdn = date.to_jdn();
    let offset = i64::from(days_from_saturday(date.weekday()));
    Ok(JalaaliWeek {
        saturday: jalaali::d2j(jdn.add_days(-offset))?,
        friday: jalaali::d2j(jdn.add_days(6 - offset))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_week_positions() {
        assert_eq!(days_from_saturday(Weekday::Sat), 0);
        assert_eq!(days_from_saturday(Weekday::Sun), 1);
        assert_eq!(days_from_saturday(Weekday::Wed), 4);
        assert_eq!(days_from_saturday(Weekday::Fri), 6);
    }

    #[test]
    fn week_across_year_boundary() {
        let week = jalaali_week(1403, 1, 1).unwrap();
        assert_eq!(week.saturday, JalaaliDate::new(1402, 12, 26).unwrap());
        assert_eq!(week.friday, JalaaliDate::new(1403, 1, 3).unwrap());
    }

    #[test]
    fn week_of_saturday_starts_on_itself() {
        let week = jalaali_week(1402, 12, 26).unwrap();
        assert_eq!(week.saturday, JalaaliDate::new(1402, 12, 26).unwrap());
        assert_eq!(week.saturday.weekday(), Weekday::Sat);
        assert_eq!(week.friday.weekday(), Weekday::Fri);
    }

    #[test]
    fn week_rejects_invalid_date() {
        assert!(jalaali_week(1404, 12, 30).is_err());
    }
}
