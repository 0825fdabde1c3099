use jalaali_calendar::{
    MAX_JALAALI_YEAR, MIN_JALAALI_YEAR, is_leap_jalaali_year, is_valid_jalaali_date, jal_cal,
    jalaali_month_length, jalaali_year_length, to_gregorian,
};

#[test]
fn known_leap_years() {
    let leap = [1375, 1379, 1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412, 1416, 1420];
    for jy in leap {
        assert!(is_leap_jalaali_year(jy), "{jy} should be leap");
        assert_eq!(jalaali_month_length(jy, 12), 30, "Esfand of {jy}");
    }
    for jy in [1400, 1401, 1402, 1404, 1405, 1406, 1407] {
        assert!(!is_leap_jalaali_year(jy), "{jy} should not be leap");
        assert_eq!(jalaali_month_length(jy, 12), 29, "Esfand of {jy}");
    }
}

#[test]
fn leap_boundary_dates() {
    assert!(is_valid_jalaali_date(1403, 12, 30));
    assert!(!is_valid_jalaali_date(1404, 12, 30));
    assert!(!is_valid_jalaali_date(1403, 13, 1));
}

#[test]
fn leap_agrees_with_year_starts() {
    // A year is leap exactly when the next year starts 366 days later.
    for jy in MIN_JALAALI_YEAR..MAX_JALAALI_YEAR {
        let start = to_gregorian(jy, 1, 1).unwrap().to_jdn();
        let next = to_gregorian(jy + 1, 1, 1).unwrap().to_jdn();
        assert_eq!(
            start.days_until(next),
            i64::from(jalaali_year_length(jy)),
            "length mismatch for {jy}"
        );
        assert_eq!(jal_cal(jy).unwrap().is_leap(), is_leap_jalaali_year(jy));
    }
}

#[test]
fn predicates_never_fail_on_any_year() {
    for jy in [i32::MIN, -1_000_000, -62, 3178, 1_000_000, i32::MAX] {
        assert!(!is_leap_jalaali_year(jy));
        assert!(!is_valid_jalaali_date(jy, 1, 1));
        assert_eq!(jalaali_month_length(jy, 1), 31);
        assert_eq!(jalaali_month_length(jy, 12), 29);
    }
}

#[test]
fn leap_year_count_in_range() {
    let count = (MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR)
        .filter(|&jy| is_leap_jalaali_year(jy))
        .count();
    assert_eq!(count, 785);
}
