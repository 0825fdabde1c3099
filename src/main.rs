mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod output;
mod query_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Runs the selected command. `Ok(false)` means the command completed but
/// reported a negative result (an invalid date for `validate`).
fn run(cli: Cli) -> Result<bool> {
    let config = config::load(cli.config.as_deref())?;
    let opts = convert::build_output_options(&config.output, cli.format.as_deref())?;

    match cli.command {
        Command::ToJalaali(args) => convert_cmd::to_jalaali_cmd(args, &opts)?,
        Command::ToGregorian(args) => convert_cmd::to_gregorian_cmd(args, &opts)?,
        Command::Today => convert_cmd::today_cmd(&opts)?,
        Command::Leap(args) => query_cmd::leap_cmd(args, &opts)?,
        Command::MonthLength(args) => query_cmd::month_length_cmd(args, &opts)?,
        Command::Validate(args) => return query_cmd::validate_cmd(args, &opts),
        Command::Week(args) => calendar_cmd::week_cmd(args, &opts)?,
        Command::Range(args) => calendar_cmd::range_cmd(args, &opts)?,
    }
    Ok(true)
}
