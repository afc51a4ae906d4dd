//! Discrete, totally ordered timelines.
//!
//! A [`Timeline`] is the only component that knows how points relate to each
//! other: it orders them and steps to the immediate neighbour of a point.
//! Every conversion between open and closed boundaries in the interval algebra
//! is routed through [`Timeline::step_forward`] and [`Timeline::step_backwards`].
//!
//! # Stock timelines
//!
//! - [`IntegerTimeline`] — every primitive integer type, unit step
//! - [`UtcTimeline`] — `chrono::DateTime<Utc>`, one-nanosecond step
//! - [`DateTimeline`] — `chrono::NaiveDate`, one-day step

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

/// A strict total order over `T` with discrete successor/predecessor stepping.
///
/// Implementations must be pure: the same arguments always give the same
/// answer, and no internal state is mutated. This is what allows a single
/// timeline to be shared by every interval and every thread.
///
/// # Contract
///
/// - `compare` is a strict total order.
/// - If `step_forward(x) == Some(y)` then `compare(x, y) == Less` and no value
///   lies strictly between them. `step_backwards` is the mirror image.
/// - `step_forward` and `step_backwards` are mutual inverses wherever both are
///   defined.
/// - `None` signals that the domain is exhausted in that direction. It is not
///   an error.
pub trait Timeline<T>: Send + Sync {
    /// Order two points.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The least point strictly after `point`, or `None` at the domain maximum.
    fn step_forward(&self, point: &T) -> Option<T>;

    /// The greatest point strictly before `point`, or `None` at the domain minimum.
    fn step_backwards(&self, point: &T) -> Option<T>;
}

// ── IntegerTimeline ─────────────────────────────────────────────────────────

/// Unit-step timeline over the primitive integer types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerTimeline;

macro_rules! integer_timeline {
    ($($t:ty),* $(,)?) => {
        $(
            impl Timeline<$t> for IntegerTimeline {
                #[inline]
                fn compare(&self, a: &$t, b: &$t) -> Ordering {
                    a.cmp(b)
                }

                #[inline]
                fn step_forward(&self, point: &$t) -> Option<$t> {
                    point.checked_add(1)
                }

                #[inline]
                fn step_backwards(&self, point: &$t) -> Option<$t> {
                    point.checked_sub(1)
                }
            }
        )*
    };
}

integer_timeline!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ── UtcTimeline ─────────────────────────────────────────────────────────────

/// Timeline over UTC instants at nanosecond resolution.
///
/// The domain ends at chrono's representable extremes
/// ([`DateTime::<Utc>::MIN_UTC`], [`DateTime::<Utc>::MAX_UTC`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcTimeline;

impl Timeline<DateTime<Utc>> for UtcTimeline {
    fn compare(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> Ordering {
        a.cmp(b)
    }

    fn step_forward(&self, point: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        point.checked_add_signed(chrono::Duration::nanoseconds(1))
    }

    fn step_backwards(&self, point: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        point.checked_sub_signed(chrono::Duration::nanoseconds(1))
    }
}

// ── DateTimeline ────────────────────────────────────────────────────────────

/// Timeline over calendar dates, one day per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeline;

impl Timeline<NaiveDate> for DateTimeline {
    fn compare(&self, a: &NaiveDate, b: &NaiveDate) -> Ordering {
        a.cmp(b)
    }

    fn step_forward(&self, point: &NaiveDate) -> Option<NaiveDate> {
        point.succ_opt()
    }

    fn step_backwards(&self, point: &NaiveDate) -> Option<NaiveDate> {
        point.pred_opt()
    }
}
