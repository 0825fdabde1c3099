//! # jalaali-calendar
//!
//! Pure date arithmetic between the Jalaali (Persian solar Hijri) and the
//! proleptic Gregorian calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|"g2d()"| J["JulianDayNumber"]
//!     J -->|"d2g()"| A
//!     B["JalaaliDate"] -->|"j2d()"| J
//!     J -->|"d2j()"| B
//!     C["jal_cal()"] -->|"year start + leap"| B
//!     B -->|".next()"| B
//!     B -->|"jalaali_sequence()"| D["Vec of JalaaliDate"]
//!     B -->|"jalaali_week()"| E["JalaaliWeek"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use jalaali_calendar::{
//!     is_leap_jalaali_year, is_valid_jalaali_date, jalaali_month_length, to_gregorian,
//!     to_jalaali,
//! };
//!
//! let nowruz = to_jalaali(2024, 3, 20).unwrap(); // 1403-01-01
//! let back = to_gregorian(1403, 1, 1).unwrap(); // 2024-03-20
//!
//! assert!(is_leap_jalaali_year(1403));
//! assert_eq!(jalaali_month_length(1404, 12), 29);
//! assert!(!is_valid_jalaali_date(1404, 12, 30));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `cycle` | Break-point table and the per-year leap walk (`jal_cal`) |
//! | `gregorian` | Gregorian dates and day-number formulas |
//! | `jalaali` | Jalaali dates, day-number formulas and calendar queries |
//! | `convert` | Calendar-to-calendar conversions |
//! | `jdn` | Julian Day Number newtype |
//! | `week` | Saturday-to-Friday week lookup |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod convert;
mod cycle;
mod error;
mod gregorian;
mod jalaali;
mod jdn;
mod sequence;
mod week;

pub use convert::{to_gregorian, to_jalaali, to_jalaali_from_naive};
pub use cycle::{MAX_JALAALI_YEAR, MIN_JALAALI_YEAR, YearInfo, jal_cal};
pub use error::CalendarError;
pub use gregorian::{
    GregorianDate, MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR, d2g, g2d, gregorian_month_length,
    is_leap_gregorian_year, is_valid_gregorian_date,
};
pub use jalaali::{
    JalaaliDate, d2j, is_leap_jalaali_year, is_valid_jalaali_date, j2d, jalaali_month_length,
    jalaali_year_length,
};
pub use jdn::JulianDayNumber;
pub use sequence::jalaali_sequence;
pub use week::{JalaaliWeek, days_from_saturday, jalaali_week};
