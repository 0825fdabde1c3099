//! Command output in text or JSON form.

use anyhow::{Context, Result};
use serde::Serialize;

use jalaali_calendar::{GregorianDate, JalaaliDate, JalaaliWeek, JulianDayNumber};

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime output settings built from config and CLI flags.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub separator: char,
    pub zero_pad: bool,
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            separator: '-',
            zero_pad: true,
            pretty: true,
        }
    }
}

impl OutputOptions {
    fn ymd(&self, year: i32, month: u8, day: u8) -> String {
        let sep = self.separator;
        if self.zero_pad {
            format!("{year:04}{sep}{month:02}{sep}{day:02}")
        } else {
            format!("{year}{sep}{month}{sep}{day}")
        }
    }

    /// Formats a Jalaali date for text output.
    pub fn jalaali(&self, date: JalaaliDate) -> String {
        self.ymd(date.year(), date.month(), date.day())
    }

    /// Formats a Gregorian date for text output.
    pub fn gregorian(&self, date: GregorianDate) -> String {
        self.ymd(date.year(), date.month(), date.day())
    }
}

/// A command result that renders as text or serializes to JSON.
pub trait Report: Serialize {
    /// Plain-text rendering.
    fn text(&self, opts: &OutputOptions) -> String;
}

/// Renders a report in the configured format.
pub fn render<R: Report>(report: &R, opts: &OutputOptions) -> Result<String> {
    match opts.format {
        OutputFormat::Text => Ok(report.text(opts)),
        OutputFormat::Json if opts.pretty => {
            serde_json::to_string_pretty(report).context("failed to serialize output")
        }
        OutputFormat::Json => serde_json::to_string(report).context("failed to serialize output"),
    }
}

/// Which side of a conversion the text form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Jalaali,
    Gregorian,
    Both,
}

/// One day expressed in both calendars.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub jalaali: JalaaliDate,
    pub gregorian: GregorianDate,
    pub jdn: JulianDayNumber,
    pub weekday: String,
    #[serde(skip)]
    pub side: Side,
}

impl DayReport {
    pub fn new(jalaali: JalaaliDate, side: Side) -> Self {
        Self {
            jalaali,
            gregorian: jalaali.to_gregorian(),
            jdn: jalaali.to_jdn(),
            weekday: jalaali.weekday().to_string(),
            side,
        }
    }
}

impl Report for DayReport {
    fn text(&self, opts: &OutputOptions) -> String {
        match self.side {
            Side::Jalaali => opts.jalaali(self.jalaali),
            Side::Gregorian => opts.gregorian(self.gregorian),
            Side::Both => format!(
                "{}\t{}\t{}",
                opts.jalaali(self.jalaali),
                opts.gregorian(self.gregorian),
                self.weekday
            ),
        }
    }
}

/// Consecutive days.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RangeReport {
    pub days: Vec<DayReport>,
}

impl Report for RangeReport {
    fn text(&self, opts: &OutputOptions) -> String {
        self.days
            .iter()
            .map(|d| d.text(opts))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Leap status of a Jalaali year.
#[derive(Debug, Serialize)]
pub struct LeapReport {
    pub year: i32,
    pub leap: bool,
    pub days: u16,
    pub starts_on: GregorianDate,
}

impl Report for LeapReport {
    fn text(&self, opts: &OutputOptions) -> String {
        let kind = if self.leap { "a leap year" } else { "not a leap year" };
        format!(
            "{} is {kind} ({} days, starts {})",
            self.year,
            self.days,
            opts.gregorian(self.starts_on)
        )
    }
}

/// Length of a Jalaali month.
#[derive(Debug, Serialize)]
pub struct MonthLengthReport {
    pub year: i32,
    pub month: u8,
    pub days: u8,
}

impl Report for MonthLengthReport {
    fn text(&self, _opts: &OutputOptions) -> String {
        self.days.to_string()
    }
}

/// Outcome of validating a Jalaali date argument.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Report for ValidationReport {
    fn text(&self, _opts: &OutputOptions) -> String {
        match &self.reason {
            Some(reason) => format!("invalid: {reason}"),
            None => "valid".to_string(),
        }
    }
}

/// Saturday-to-Friday week.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct WeekReport(pub JalaaliWeek);

impl Report for WeekReport {
    fn text(&self, opts: &OutputOptions) -> String {
        format!(
            "{} .. {}",
            opts.jalaali(self.0.saturday),
            opts.jalaali(self.0.friday)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nowruz() -> JalaaliDate {
        JalaaliDate::new(1403, 1, 1).unwrap()
    }

    #[test]
    fn date_padding() {
        let opts = OutputOptions::default();
        assert_eq!(opts.jalaali(nowruz()), "1403-01-01");
        let opts = OutputOptions {
            separator: '/',
            zero_pad: false,
            ..OutputOptions::default()
        };
        assert_eq!(opts.jalaali(nowruz()), "1403/1/1");
    }

    #[test]
    fn day_report_text_sides() {
        let opts = OutputOptions::default();
        assert_eq!(DayReport::new(nowruz(), Side::Jalaali).text(&opts), "1403-01-01");
        assert_eq!(DayReport::new(nowruz(), Side::Gregorian).text(&opts), "2024-03-20");
        assert_eq!(
            DayReport::new(nowruz(), Side::Both).text(&opts),
            "1403-01-01\t2024-03-20\tWed"
        );
    }

    #[test]
    fn day_report_json() {
        let opts = OutputOptions {
            format: OutputFormat::Json,
            pretty: false,
            ..OutputOptions::default()
        };
        let json = render(&DayReport::new(nowruz(), Side::Jalaali), &opts).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["jalaali"]["year"], 1403);
        assert_eq!(parsed["gregorian"]["month"], 3);
        assert_eq!(parsed["jdn"], 2_460_390);
        assert_eq!(parsed["weekday"], "Wed");
        assert!(parsed.get("side").is_none());
    }

    #[test]
    fn leap_report_text() {
        let report = LeapReport {
            year: 1404,
            leap: false,
            days: 365,
            starts_on: GregorianDate::new(2025, 3, 21).unwrap(),
        };
        assert_eq!(
            report.text(&OutputOptions::default()),
            "1404 is not a leap year (365 days, starts 2025-03-21)"
        );
    }

    #[test]
    fn validation_report_omits_reason_when_valid() {
        let report = ValidationReport {
            input: "1403-12-30".to_string(),
            valid: true,
            reason: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"input":"1403-12-30","valid":true}"#);
        assert_eq!(report.text(&OutputOptions::default()), "valid");
    }

    #[test]
    fn range_report_is_json_array() {
        let days = vec![DayReport::new(nowruz(), Side::Both)];
        let json = serde_json::to_string(&RangeReport { days }).unwrap();
        assert!(json.starts_with('['));
    }
}
