//! Stock point printers and parsers.
//!
//! - [`DisplayPrinter`] — any `Display` type
//! - [`IntegerParser`] — optional sign plus ASCII digits, any `FromStr` integer
//! - [`ChronoFormat`] — `DateTime<Utc>` through a chrono format string, shown
//!   in a configurable IANA timezone
//! - [`NaiveDateFormat`] — `NaiveDate` through a chrono format string

use std::fmt::{self, Write as _};
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{IntervalError, Result};
use crate::format::{PointParseError, PointParser, PointPrinter};

// ── DisplayPrinter ──────────────────────────────────────────────────────────

/// Prints points with their `Display` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayPrinter;

impl<T: fmt::Display> PointPrinter<T> for DisplayPrinter {
    fn print(&self, point: &T, out: &mut String) -> Result<()> {
        write!(out, "{point}").map_err(|e| IntervalError::Format(e.to_string()))
    }
}

// ── IntegerParser ───────────────────────────────────────────────────────────

/// Parses the longest prefix of the form `[+-]?[0-9]+` as a `T`.
#[derive(Debug, Clone, Copy)]
pub struct IntegerParser<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> IntegerParser<T> {
    pub fn new() -> Self {
        IntegerParser {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IntegerParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PointParser<T> for IntegerParser<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn parse(&self, text: &str) -> std::result::Result<(T, usize), PointParseError> {
        let bytes = text.as_bytes();
        let digits_from = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let end = digits_from
            + bytes[digits_from..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();

        if end == digits_from {
            return Err(PointParseError::new(digits_from, "expected digits"));
        }

        text[..end]
            .parse::<T>()
            .map(|value| (value, end))
            .map_err(|e| PointParseError::new(0, format!("'{}': {e}", &text[..end])))
    }
}

// ── ChronoFormat ────────────────────────────────────────────────────────────

/// Prints and parses `DateTime<Utc>` points as wall-clock text in a timezone.
///
/// The format string uses chrono's `strftime` syntax and must describe a full
/// date and time without an offset; the offset comes from the timezone.
/// Wall-clock times repeated by a DST fall-back parse as their earlier
/// occurrence; times skipped by a spring-forward are rejected.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use interval_algebra::points::ChronoFormat;
/// use interval_algebra::IntervalFactory;
///
/// let format = ChronoFormat::new("%Y-%m-%d %H:%M")
///     .with_timezone(chrono_tz::America::New_York)
///     .with_interval_pattern("{0} to {1}");
///
/// let start = Utc.with_ymd_and_hms(2026, 3, 15, 14, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 3, 15, 15, 30, 0).unwrap();
/// let meeting = IntervalFactory::utc().between(start, end).unwrap();
///
/// assert_eq!(meeting.print(&format).unwrap(), "2026-03-15 10:00 to 2026-03-15 11:30");
/// ```
#[derive(Debug, Clone)]
pub struct ChronoFormat {
    format: String,
    timezone: Tz,
    interval_pattern: Option<String>,
}

impl Default for ChronoFormat {
    fn default() -> Self {
        ChronoFormat {
            format: "%Y-%m-%dT%H:%M:%S%.f".to_string(),
            timezone: Tz::UTC,
            interval_pattern: None,
        }
    }
}

impl ChronoFormat {
    pub fn new(format: impl Into<String>) -> Self {
        ChronoFormat {
            format: format.into(),
            ..Default::default()
        }
    }

    /// Show and read wall-clock time in `timezone` (default UTC).
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_interval_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.interval_pattern = Some(pattern.into());
        self
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl PointPrinter<DateTime<Utc>> for ChronoFormat {
    fn print(&self, point: &DateTime<Utc>, out: &mut String) -> Result<()> {
        let local = point.with_timezone(&self.timezone);
        write!(out, "{}", local.format(&self.format)).map_err(|_| {
            IntervalError::Format(format!("cannot format {point} with '{}'", self.format))
        })
    }

    fn interval_pattern(&self) -> Option<&str> {
        self.interval_pattern.as_deref()
    }
}

impl PointParser<DateTime<Utc>> for ChronoFormat {
    fn parse(&self, text: &str) -> std::result::Result<(DateTime<Utc>, usize), PointParseError> {
        let (naive, rest) = NaiveDateTime::parse_and_remainder(text, &self.format)
            .map_err(|e| PointParseError::new(0, format!("'{}': {e}", self.format)))?;

        let local = self
            .timezone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                PointParseError::new(
                    0,
                    format!("nonexistent local time in {}", self.timezone.name()),
                )
            })?;

        Ok((local.with_timezone(&Utc), text.len() - rest.len()))
    }

    fn interval_pattern(&self) -> Option<&str> {
        self.interval_pattern.as_deref()
    }
}

// ── NaiveDateFormat ─────────────────────────────────────────────────────────

/// Prints and parses calendar dates through a chrono format string.
#[derive(Debug, Clone)]
pub struct NaiveDateFormat {
    format: String,
    interval_pattern: Option<String>,
}

impl Default for NaiveDateFormat {
    fn default() -> Self {
        NaiveDateFormat {
            format: "%Y-%m-%d".to_string(),
            interval_pattern: None,
        }
    }
}

impl NaiveDateFormat {
    pub fn new(format: impl Into<String>) -> Self {
        NaiveDateFormat {
            format: format.into(),
            interval_pattern: None,
        }
    }

    pub fn with_interval_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.interval_pattern = Some(pattern.into());
        self
    }
}

impl PointPrinter<NaiveDate> for NaiveDateFormat {
    fn print(&self, point: &NaiveDate, out: &mut String) -> Result<()> {
        write!(out, "{}", point.format(&self.format)).map_err(|_| {
            IntervalError::Format(format!("cannot format {point} with '{}'", self.format))
        })
    }

    fn interval_pattern(&self) -> Option<&str> {
        self.interval_pattern.as_deref()
    }
}

impl PointParser<NaiveDate> for NaiveDateFormat {
    fn parse(&self, text: &str) -> std::result::Result<(NaiveDate, usize), PointParseError> {
        let (date, rest) = NaiveDate::parse_and_remainder(text, &self.format)
            .map_err(|e| PointParseError::new(0, format!("'{}': {e}", self.format)))?;
        Ok((date, text.len() - rest.len()))
    }

    fn interval_pattern(&self) -> Option<&str> {
        self.interval_pattern.as_deref()
    }
}
