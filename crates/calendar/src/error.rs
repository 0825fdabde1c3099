//! Error types for the jalaali-calendar crate.

/// Error type for all fallible operations in the jalaali-calendar crate.
///
/// Conversions and JDN computations reject calendar dates that fail
/// validation for their calendar, as well as years and day numbers outside
/// the range the conversion arithmetic covers. Predicates such as
/// [`is_valid_jalaali_date`](crate::is_valid_jalaali_date) never return it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is zero or exceeds the length of the month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year lies outside the supported range of its calendar.
    #[error("year {year} out of supported range {min}..={max}")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when a Julian Day Number maps outside the supported range.
    #[error("julian day number {jdn} out of supported range")]
    JdnOutOfRange {
        /// The day number that was provided.
        jdn: i64,
    },
}
