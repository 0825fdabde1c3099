//! Julian Day Number newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Julian Day Number: a continuous count of days shared by both calendars.
///
/// It carries no calendar meaning of its own and only serves as a total
/// order over days. `2451545` is 2000-01-01 in the proleptic Gregorian
/// calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// Wraps a raw day count.
    pub const fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the raw day count.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the day number shifted by `days` (saturating at the `i64` bounds).
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// Returns the following day.
    pub const fn next(self) -> Self {
        self.add_days(1)
    }

    /// Returns the preceding day.
    pub const fn prev(self) -> Self {
        self.add_days(-1)
    }

    /// Returns the signed number of days from `self` to `other`.
    pub const fn days_until(self, other: Self) -> i64 {
        other.0.saturating_sub(self.0)
    }
}

impl From<i64> for JulianDayNumber {
    fn from(jdn: i64) -> Self {
        Self(jdn)
    }
}

impl fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let jdn = JulianDayNumber::new(2_451_545);
        assert_eq!(jdn.next().get(), 2_451_546);
        assert_eq!(jdn.prev().get(), 2_451_544);
        assert_eq!(jdn.add_days(-10).get(), 2_451_535);
    }

    #[test]
    fn days_until_is_signed() {
        let a = JulianDayNumber::new(10);
        let b = JulianDayNumber::new(25);
        assert_eq!(a.days_until(b), 15);
        assert_eq!(b.days_until(a), -15);
    }

    #[test]
    fn add_days_saturates() {
        let jdn = JulianDayNumber::new(i64::MAX - 1);
        assert_eq!(jdn.add_days(5).get(), i64::MAX);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(JulianDayNumber::new(2_440_588).to_string(), "2440588");
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&JulianDayNumber::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
