//! Pure conversion functions: TOML config structs and CLI strings -> runtime types.

use anyhow::{Context, Result, bail};

use crate::config::OutputToml;
use crate::output::{OutputFormat, OutputOptions};

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a date separator, which must be exactly one character.
pub fn parse_separator(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("separator must be a single character, got {s:?}"),
    }
}

/// Builds [`OutputOptions`] from the TOML output configuration.
///
/// A `--format` flag given on the command line overrides the file.
pub fn build_output_options(output: &OutputToml, cli_format: Option<&str>) -> Result<OutputOptions> {
    let format = parse_format(cli_format.unwrap_or(&output.format))?;
    let separator = parse_separator(&output.separator)?;
    Ok(OutputOptions {
        format,
        separator,
        zero_pad: output.zero_pad,
        pretty: output.pretty,
    })
}

/// Splits a `YEAR-MONTH-DAY` argument into its numeric parts.
///
/// `-`, `/` and `.` are accepted as separators; a leading `-` marks a
/// negative year.
pub fn parse_date_arg(s: &str) -> Result<(i32, u8, u8)> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let parts: Vec<&str> = body.split(['-', '/', '.']).collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected YEAR-MONTH-DAY, got {s:?}");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    Ok((if negative { -year } else { year }, month, day))
}
