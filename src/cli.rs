use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jalaali / Gregorian calendar conversion.
#[derive(Parser)]
#[command(
    name = "jalaali",
    version,
    about = "Convert dates between the Jalaali and Gregorian calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./jalaali.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (`text` or `json`), overriding the config file.
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the Jalaali calendar.
    ToJalaali(DateArgs),
    /// Convert a Jalaali date to the Gregorian calendar.
    ToGregorian(DateArgs),
    /// Show today's local date in both calendars.
    Today,
    /// Report whether a Jalaali year is a leap year.
    Leap(YearArgs),
    /// Print the number of days in a Jalaali month.
    MonthLength(MonthArgs),
    /// Check a Jalaali date; exits non-zero when invalid.
    Validate(DateArgs),
    /// Show the Saturday-to-Friday week containing a Jalaali date.
    Week(DateArgs),
    /// List consecutive Jalaali dates with their Gregorian equivalents.
    Range(RangeArgs),
}

/// A single date argument.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as YEAR-MONTH-DAY; `-`, `/` and `.` are accepted as separators.
    #[arg(allow_hyphen_values = true)]
    pub date: String,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Jalaali year.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,
}

/// Arguments for the `month-length` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Jalaali year.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Month number (1..=12).
    pub month: u8,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First Jalaali date as YEAR-MONTH-DAY.
    #[arg(allow_hyphen_values = true)]
    pub start: String,

    /// Number of days to list.
    pub days: usize,
}
