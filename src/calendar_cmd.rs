//! Calendar listings: `week` and `range`.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use jalaali_calendar::{JalaaliDate, jalaali_sequence, jalaali_week};

use crate::cli::{DateArgs, RangeArgs};
use crate::convert::parse_date_arg;
use crate::output::{self, DayReport, OutputOptions, RangeReport, Side, WeekReport};

/// Show the Saturday-to-Friday week containing a Jalaali date.
pub fn week_cmd(args: DateArgs, opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("week").entered();
    let (jy, jm, jd) = parse_date_arg(&args.date)?;
    let week =
        jalaali_week(jy, jm, jd).with_context(|| format!("cannot compute week of {}", args.date))?;
    println!("{}", output::render(&WeekReport(week), opts)?);
    Ok(())
}

/// List consecutive Jalaali dates with their Gregorian equivalents.
pub fn range_cmd(args: RangeArgs, opts: &OutputOptions) -> Result<()> {
    let _cmd = info_span!("range", days = args.days).entered();
    let (jy, jm, jd) = parse_date_arg(&args.start)?;
    let start = JalaaliDate::new(jy, jm, jd)
        .with_context(|| format!("invalid jalaali date {}", args.start))?;

    let dates = jalaali_sequence(start, args.days);
    if dates.len() < args.days {
        warn!(
            requested = args.days,
            produced = dates.len(),
            "range truncated at end of supported calendar"
        );
    }
    info!(n = dates.len(), "generated range");

    let report = RangeReport {
        days: dates
            .into_iter()
            .map(|d| DayReport::new(d, Side::Both))
            .collect(),
    };
    println!("{}", output::render(&report, opts)?);
    Ok(())
}
