//! Locale-style timestamp formatting
//!
//! The feed carries ISO-8601 strings. They are shown in a configured UTC
//! offset with configurable chrono patterns, one for plain dates and one for
//! date-times. Anything unparseable renders as `Invalid Date`.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

use crate::error::ConfigError;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const INVALID_DATE: &str = "Invalid Date";

/// Display settings for timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    offset: FixedOffset,
    date_format: String,
    datetime_format: String,
}

impl Locale {
    /// Build a locale, rejecting format strings chrono cannot render
    pub fn new(
        offset: FixedOffset,
        date_format: &str,
        datetime_format: &str,
    ) -> Result<Self, ConfigError> {
        validate_format("FEED_DATE_FORMAT", date_format)?;
        validate_format("FEED_DATETIME_FORMAT", datetime_format)?;

        Ok(Self {
            offset,
            date_format: date_format.to_string(),
            datetime_format: datetime_format.to_string(),
        })
    }

    /// Default patterns in UTC
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }

    /// Default patterns in the host's current offset
    pub fn local() -> Self {
        Self {
            offset: Local::now().offset().fix(),
            ..Self::utc()
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Format a timestamp as a date (used for `first_seen_at`)
    pub fn format_date(&self, raw: &str) -> String {
        self.format_with(raw, &self.date_format)
    }

    /// Format a timestamp as a date and time (used for `generated_at`)
    pub fn format_datetime(&self, raw: &str) -> String {
        self.format_with(raw, &self.datetime_format)
    }

    fn format_with(&self, raw: &str, pattern: &str) -> String {
        match parse_timestamp(raw) {
            Some(ts) => ts.with_timezone(&self.offset).format(pattern).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

/// Parse the timestamp shapes the feed server emits.
///
/// Offset-less values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse `Z`, `UTC`, `+HH:MM` or `-HH:MM`
pub fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidOffset(raw.to_string());
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

fn validate_format(var: &'static str, pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidFormat {
            var,
            value: pattern.to_string(),
        });
    }
    Ok(())
}
