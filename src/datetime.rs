//! Date/time formatting and parsing against a small catalogue of named formats.
//!
//! All values are naive (no time zone). The "now" helpers read the local
//! clock; [`compact_timestamp_at`] converts an epoch instant to local time.

use crate::error::{CraftboxError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Named formats supported by the helpers in this module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    Iso,
    /// `dd/MM/yyyy`
    Italian,
    /// `yyyy/MM/dd`
    Uk,
    /// `yyyy-MM-dd HH:mm:ss`
    Timestamp,
    /// `dd/MM/yyyy HH:mm:ss`
    ItalianDateTime,
    /// `yyyyMMdd_HHmmss`, safe for file names
    Compact,
    /// `HH:mm:ss`
    Time,
}

impl DateFormat {
    pub const ALL: [DateFormat; 7] = [
        DateFormat::Iso,
        DateFormat::Italian,
        DateFormat::Uk,
        DateFormat::Timestamp,
        DateFormat::ItalianDateTime,
        DateFormat::Compact,
        DateFormat::Time,
    ];

    /// chrono strftime pattern for this format
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::Italian => "%d/%m/%Y",
            DateFormat::Uk => "%Y/%m/%d",
            DateFormat::Timestamp => "%Y-%m-%d %H:%M:%S",
            DateFormat::ItalianDateTime => "%d/%m/%Y %H:%M:%S",
            DateFormat::Compact => "%Y%m%d_%H%M%S",
            DateFormat::Time => "%H:%M:%S",
        }
    }

    pub fn has_date(self) -> bool {
        !matches!(self, DateFormat::Time)
    }

    pub fn has_time(self) -> bool {
        matches!(
            self,
            DateFormat::Timestamp
                | DateFormat::ItalianDateTime
                | DateFormat::Compact
                | DateFormat::Time
        )
    }

    fn parse_error(self, input: &str, source: chrono::ParseError) -> CraftboxError {
        CraftboxError::DateParse {
            input: input.to_string(),
            pattern: self.pattern(),
            source,
        }
    }

    /// chrono accepts unpadded fields, leading spaces and signs; only the
    /// exact rendering of the parsed value is a match.
    fn ensure_exact<T>(self, input: &str, value: T, rendered: String) -> Result<T> {
        if rendered == input {
            Ok(value)
        } else {
            Err(CraftboxError::DateMismatch {
                input: input.to_string(),
                pattern: self.pattern(),
            })
        }
    }
}

/// Formats a calendar date. Formats that need a time of day are rejected.
pub fn format_date(date: NaiveDate, format: DateFormat) -> Result<String> {
    if format.has_time() {
        return Err(CraftboxError::InvalidArgument(format!(
            "{:?} requires a time of day; use format_date_time",
            format
        )));
    }
    Ok(date.format(format.pattern()).to_string())
}

/// Formats a time of day. Only [`DateFormat::Time`] is accepted.
pub fn format_time(time: NaiveTime, format: DateFormat) -> Result<String> {
    if format.has_date() {
        return Err(CraftboxError::InvalidArgument(format!(
            "{:?} requires a date; use format_date_time",
            format
        )));
    }
    Ok(time.format(format.pattern()).to_string())
}

/// Formats a date-time under any catalogue format; date-only and time-only
/// formats drop the other half.
pub fn format_date_time(date_time: NaiveDateTime, format: DateFormat) -> String {
    date_time.format(format.pattern()).to_string()
}

/// `yyyy-MM-dd HH:mm:ss` from separate date and time values.
pub fn format_date_and_time(date: NaiveDate, time: NaiveTime) -> String {
    format_date_time(date.and_time(time), DateFormat::Timestamp)
}

/// Parses a date. Date-time formats must match in full; their time is discarded.
pub fn parse_date(input: &str, format: DateFormat) -> Result<NaiveDate> {
    if !format.has_date() {
        return Err(CraftboxError::InvalidArgument(format!(
            "{:?} carries no date",
            format
        )));
    }
    if format.has_time() {
        return Ok(parse_date_time(input, format)?.date());
    }
    let date = NaiveDate::parse_from_str(input, format.pattern())
        .map_err(|e| format.parse_error(input, e))?;
    format.ensure_exact(input, date, date.format(format.pattern()).to_string())
}

/// Parses a date-time. Date-only formats yield midnight.
pub fn parse_date_time(input: &str, format: DateFormat) -> Result<NaiveDateTime> {
    if !format.has_date() {
        return Err(CraftboxError::InvalidArgument(format!(
            "{:?} carries no date",
            format
        )));
    }
    if !format.has_time() {
        return Ok(parse_date(input, format)?.and_time(NaiveTime::default()));
    }
    let date_time = NaiveDateTime::parse_from_str(input, format.pattern())
        .map_err(|e| format.parse_error(input, e))?;
    format.ensure_exact(input, date_time, format_date_time(date_time, format))
}

/// Parses `HH:mm:ss`.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let format = DateFormat::Time;
    let time = NaiveTime::parse_from_str(input, format.pattern())
        .map_err(|e| format.parse_error(input, e))?;
    format.ensure_exact(input, time, time.format(format.pattern()).to_string())
}

/// Converts `yyyy-MM-dd` (or `yyyy-MM-dd HH:mm:ss`, time ignored) to `dd/MM/yyyy`.
///
/// Blank input yields an empty string.
pub fn to_italian_date(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let date_part = input.split(' ').next().unwrap_or(input);
    let date = parse_date(date_part, DateFormat::Iso)?;
    format_date(date, DateFormat::Italian)
}

/// Converts `yyyy-MM-dd HH:mm:ss` to `dd/MM/yyyy HH:mm:ss`.
///
/// Blank input yields an empty string.
pub fn to_italian_date_time(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let date_time = parse_date_time(input, DateFormat::Timestamp)?;
    Ok(format_date_time(date_time, DateFormat::ItalianDateTime))
}

/// Current local date-time under `format`.
pub fn format_now(format: DateFormat) -> String {
    format_date_time(Local::now().naive_local(), format)
}

/// Current local date and time formatted separately and joined by a space.
pub fn format_now_parts(date_format: DateFormat, time_format: DateFormat) -> Result<String> {
    let now = Local::now().naive_local();
    let date = format_date(now.date(), date_format)?;
    let time = format_time(now.time(), time_format)?;
    Ok(format!("{} {}", date, time))
}

/// Current local time as `yyyy-MM-dd HH:mm:ss`.
pub fn now_timestamp() -> String {
    format_now(DateFormat::Timestamp)
}

/// Current local time as `yyyyMMdd_HHmmss`.
pub fn compact_timestamp() -> String {
    format_now(DateFormat::Compact)
}

/// Milliseconds since the Unix epoch, in the local time zone, as `yyyyMMdd_HHmmss`.
pub fn compact_timestamp_at(epoch_millis: i64) -> Result<String> {
    let local = Local
        .timestamp_millis_opt(epoch_millis)
        .single()
        .ok_or_else(|| {
            CraftboxError::InvalidArgument(format!(
                "epoch millis out of range: {}",
                epoch_millis
            ))
        })?;
    Ok(format_date_time(local.naive_local(), DateFormat::Compact))
}
