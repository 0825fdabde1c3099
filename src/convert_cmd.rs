//! Conversion commands: `to-jalaali`, `to-gregorian` and `today`.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use jalaali_calendar::{JalaaliDate, to_jalaali, to_jalaali_from_naive};

use crate::cli::DateArgs;
use crate::convert::parse_date_arg;
use crate::output::{self, DayReport, OutputOptions, Side};

/// Convert a Gregorian date argument to Jalaali.
pub fn to_jalaali_cmd(args: DateArgs, opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("to_jalaali").entered();
    let (gy, gm, gd) = parse_date_arg(&args.date)?;
    debug!(gy, gm, gd, "parsed gregorian date");

    let jalaali = to_jalaali(gy, gm, gd)
        .with_context(|| format!("cannot convert gregorian date {}", args.date))?;
    println!("{}", output::render(&DayReport::new(jalaali, Side::Jalaali), opts)?);
    Ok(())
}

/// Convert a Jalaali date argument to Gregorian.
pub fn to_gregorian_cmd(args: DateArgs, opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("to_gregorian").entered();
    let (jy, jm, jd) = parse_date_arg(&args.date)?;
    debug!(jy, jm, jd, "parsed jalaali date");

    let jalaali = JalaaliDate::new(jy, jm, jd)
        .with_context(|| format!("invalid jalaali date {}", args.date))?;
    println!("{}", output::render(&DayReport::new(jalaali, Side::Gregorian), opts)?);
    Ok(())
}

/// Show today's local date in both calendars.
pub fn today_cmd(opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let today = chrono::Local::now().date_naive();
    debug!(%today, "local date");

    let jalaali = to_jalaali_from_naive(today)
        .with_context(|| format!("cannot convert local date {today}"))?;
    println!("{}", output::render(&DayReport::new(jalaali, Side::Both), opts)?);
    Ok(())
}
