//! Consecutive Jalaali date sequences.

use crate::jalaali::JalaaliDate;

/// Generates up to `n_days` consecutive Jalaali dates starting at `start`.
///
/// Month and year boundaries follow the leap rule of each year (Esfand 30
/// only appears in leap years). The sequence stops early if it would run
/// past the last supported day.
///
/// # Example
///
/// ```ignore
/// let start = JalaaliDate::new(1403, 12, 29).unwrap();
/// let dates = jalaali_sequence(start, 3);
/// // Esfand 29, Esfand 30 (1403 is leap), Farvardin 1 (1404)
/// ```
pub fn jalaali_sequence(start: JalaaliDate, n_days: usize) -> Vec<JalaaliDate> {
    let mut dates = Vec::new();
    let mut current = Some(start);
    while dates.len() < n_days {
        let Some(date) = current else {
            break;
        };
        dates.push(date);
        current = date.next();
    }
    dates
}
