//! Calendar queries: `leap`, `month-length` and `validate`.

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use jalaali_calendar::{
    GregorianDate, JalaaliDate, jal_cal, jalaali_month_length, jalaali_year_length,
};

use crate::cli::{DateArgs, MonthArgs, YearArgs};
use crate::convert::parse_date_arg;
use crate::output::{self, LeapReport, MonthLengthReport, OutputOptions, ValidationReport};

/// Report the leap status and Gregorian start of a Jalaali year.
pub fn leap_cmd(args: YearArgs, opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("leap", year = args.year).entered();
    let info = jal_cal(args.year).with_context(|| format!("cannot look up year {}", args.year))?;
    debug!(
        leap = info.leap(),
        gy = info.gregorian_year(),
        march = info.march_day(),
        "leap cycle position"
    );

    let starts_on = GregorianDate::new(info.gregorian_year(), 3, info.march_day())
        .context("year start is not a valid gregorian date")?;
    let report = LeapReport {
        year: args.year,
        leap: info.is_leap(),
        days: jalaali_year_length(args.year),
        starts_on,
    };
    println!("{}", output::render(&report, opts)?);
    Ok(())
}

/// Print the length of a Jalaali month.
pub fn month_length_cmd(args: MonthArgs, opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("month_length", year = args.year, month = args.month).entered();
    let days = jalaali_month_length(args.year, args.month);
    if days == 0 {
        bail!("invalid month: {} (must be 1..=12)", args.month);
    }
    let report = MonthLengthReport {
        year: args.year,
        month: args.month,
        days,
    };
    println!("{}", output::render(&report, opts)?);
    Ok(())
}

/// Validate a Jalaali date argument. Returns whether the date is valid.
pub fn validate_cmd(args: DateArgs, opts: &OutputOptions) -> Result<bool> {
    let _cmd = info_span!("validate").entered();
    let (jy, jm, jd) = parse_date_arg(&args.date)?;

    let reason = JalaaliDate::new(jy, jm, jd).err().map(|e| e.to_string());
    debug!(valid = reason.is_none(), "validated");
    let report = ValidationReport {
        input: args.date,
        valid: reason.is_none(),
        reason,
    };
    println!("{}", output::render(&report, opts)?);
    Ok(report.valid)
}
