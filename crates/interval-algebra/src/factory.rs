//! Interval factories bound to one timeline.
//!
//! A factory is created once per timeline and reused: it holds the shared
//! timeline handle so callers never pass it around. [`IntervalFactory::utc`]
//! is a process-wide factory for UTC instants, initialised on first use.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::boundary::Boundary;
use crate::error::Result;
use crate::format::{self, PointParser, DEFAULT_PATTERN};
use crate::interval::SimpleInterval;
use crate::timeline::{Timeline, UtcTimeline};

static UTC_FACTORY: Lazy<IntervalFactory<DateTime<Utc>>> = Lazy::new(|| {
    log::debug!("initialising process-wide UTC interval factory");
    IntervalFactory::on_timeline(UtcTimeline)
});

/// Creates and parses [`SimpleInterval`]s on a fixed timeline.
///
/// # Examples
///
/// ```
/// use interval_algebra::{ChronoInterval, IntegerTimeline, IntervalFactory};
/// use interval_algebra::points::IntegerParser;
///
/// let ints = IntervalFactory::on_timeline(IntegerTimeline);
///
/// let since = ints.since(10);
/// let until = ints.until(10);
/// assert!(since.abuts(&until));
/// assert!(!since.intersects(&until));
///
/// let parsed = ints.parse("1/5", &IntegerParser::new()).unwrap();
/// assert_eq!(parsed, ints.between(1, 5).unwrap());
/// ```
pub struct IntervalFactory<T> {
    timeline: Arc<dyn Timeline<T>>,
}

impl<T> Clone for IntervalFactory<T> {
    fn clone(&self) -> Self {
        IntervalFactory {
            timeline: Arc::clone(&self.timeline),
        }
    }
}

impl<T> fmt::Debug for IntervalFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalFactory").finish_non_exhaustive()
    }
}

impl IntervalFactory<DateTime<Utc>> {
    /// The process-wide factory for UTC instants.
    pub fn utc() -> &'static IntervalFactory<DateTime<Utc>> {
        &UTC_FACTORY
    }
}

impl<T> IntervalFactory<T> {
    /// A factory over a new shared handle to `timeline`.
    pub fn on_timeline<L>(timeline: L) -> Self
    where
        L: Timeline<T> + 'static,
    {
        IntervalFactory {
            timeline: Arc::new(timeline),
        }
    }

    /// A factory over an existing shared timeline.
    pub fn from_shared(timeline: Arc<dyn Timeline<T>>) -> Self {
        IntervalFactory { timeline }
    }

    pub fn timeline(&self) -> &Arc<dyn Timeline<T>> {
        &self.timeline
    }
}

impl<T: Clone + fmt::Debug> IntervalFactory<T> {
    /// `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidRange`](crate::IntervalError::InvalidRange) if `start` is after `end`.
    /// Equal values give an empty interval.
    pub fn between(&self, start: T, end: T) -> Result<SimpleInterval<T>> {
        SimpleInterval::from_points(Some(start), Some(end), Arc::clone(&self.timeline))
    }

    /// `[start, +∞)`.
    pub fn since(&self, start: T) -> SimpleInterval<T> {
        SimpleInterval::from_boundaries(
            Boundary::Closed(start),
            Boundary::InfiniteFuture,
            Arc::clone(&self.timeline),
        )
    }

    /// `(-∞, end)`.
    pub fn until(&self, end: T) -> SimpleInterval<T> {
        SimpleInterval::from_boundaries(
            Boundary::InfinitePast,
            Boundary::Open(end),
            Arc::clone(&self.timeline),
        )
    }

    /// Parse `text` with the parser's own interval pattern, or `"{0}/{1}"`.
    ///
    /// # Errors
    ///
    /// See [`parse_with`](Self::parse_with).
    pub fn parse<P>(&self, text: &str, parser: &P) -> Result<SimpleInterval<T>>
    where
        P: PointParser<T> + ?Sized,
    {
        let pattern = parser.interval_pattern().unwrap_or(DEFAULT_PATTERN);
        self.parse_with(text, parser, pattern)
    }

    /// Parse `text` with an explicit interval pattern.
    ///
    /// `-∞` in the start position and `+∞` in the end position denote
    /// infinite boundaries.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::EmptyInput`](crate::IntervalError::EmptyInput) if `text` is empty
    /// - [`IntervalError::InvalidPattern`](crate::IntervalError::InvalidPattern) if the pattern lacks `{0}` or `{1}`
    /// - [`IntervalError::Parse`](crate::IntervalError::Parse) with the byte offset of the first mismatch
    /// - [`IntervalError::InvalidRange`](crate::IntervalError::InvalidRange) if the parsed start is after the end
    pub fn parse_with<P>(&self, text: &str, parser: &P, pattern: &str) -> Result<SimpleInterval<T>>
    where
        P: PointParser<T> + ?Sized,
    {
        format::parse(text, parser, pattern, |start, end| {
            let interval =
                SimpleInterval::from_points(start.into_value(), end.into_value(), Arc::clone(&self.timeline))?;
            log::trace!("parsed interval {interval:?} from '{text}'");
            Ok(interval)
        })
    }
}

/// `[start, end)` on the process-wide UTC timeline.
///
/// # Errors
///
/// Returns [`IntervalError::InvalidRange`](crate::IntervalError::InvalidRange) if `start` is after `end`.
pub fn utc_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<SimpleInterval<DateTime<Utc>>> {
    IntervalFactory::utc().between(start, end)
}

/// `[start, +∞)` on the process-wide UTC timeline.
pub fn utc_since(start: DateTime<Utc>) -> SimpleInterval<DateTime<Utc>> {
    IntervalFactory::utc().since(start)
}

/// `(-∞, end)` on the process-wide UTC timeline.
pub fn utc_until(end: DateTime<Utc>) -> SimpleInterval<DateTime<Utc>> {
    IntervalFactory::utc().until(end)
}
