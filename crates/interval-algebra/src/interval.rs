//! Half-open intervals on a timeline and the relations between them.
//!
//! The relational algebra (containment, ordering, adjacency, overlap) is
//! written once as default methods of [`ChronoInterval`], so every interval
//! variant that can expose its two boundaries and its timeline gets it for
//! free. [`SimpleInterval`] is the concrete, normalized variant: a finite
//! start is always [`Boundary::Closed`] and a finite end is always
//! [`Boundary::Open`].
//!
//! Open/closed conversions go through the timeline's stepping functions. When
//! a step runs off the end of the domain the relation is answered from that
//! fact (e.g. an interval starting after the last representable point cannot
//! be contained); it is never reported as an error.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::boundary::Boundary;
use crate::error::{IntervalError, Result};
use crate::format::{self, PointPrinter, DEFAULT_PATTERN};
use crate::timeline::Timeline;

/// The shared relational contract of all interval variants.
///
/// Implementors only provide [`start`](ChronoInterval::start),
/// [`end`](ChronoInterval::end) and [`timeline`](ChronoInterval::timeline).
/// Boundaries of either kind are accepted on both sides; open starts and
/// closed ends are converted to their inclusive-start / exclusive-end
/// equivalents by stepping forward.
pub trait ChronoInterval<T: Clone> {
    fn start(&self) -> &Boundary<T>;

    fn end(&self) -> &Boundary<T>;

    /// The timeline giving the boundaries their order.
    fn timeline(&self) -> &dyn Timeline<T>;

    /// `true` iff neither boundary is infinite.
    fn is_finite(&self) -> bool {
        !(self.start().is_infinite() || self.end().is_infinite())
    }

    /// `true` iff the interval is finite and holds no points.
    ///
    /// For a normalized interval this means its start equals its end.
    fn is_empty(&self) -> bool {
        if !self.is_finite() {
            return false;
        }

        let timeline = self.timeline();
        match (lower(timeline, self.start()), upper(timeline, self.end())) {
            (Lower::At(start), Upper::At(end)) => timeline.compare(&start, &end) != Ordering::Less,
            (Lower::PastDomain, _) => true,
            _ => false,
        }
    }

    fn contains(&self, point: &T) -> bool {
        let timeline = self.timeline();

        match lower(timeline, self.start()) {
            Lower::At(start) if timeline.compare(point, &start) == Ordering::Less => return false,
            Lower::PastDomain => return false,
            _ => {}
        }

        match upper(timeline, self.end()) {
            Upper::At(end) => timeline.compare(&end, point) == Ordering::Greater,
            Upper::PastDomain | Upper::Unbounded => true,
        }
    }

    /// `true` iff every point of `other` lies inside this interval.
    ///
    /// Infinite intervals are never contained.
    fn contains_interval(&self, other: &dyn ChronoInterval<T>) -> bool {
        if !other.is_finite() {
            return false;
        }

        let timeline = self.timeline();

        let Lower::At(other_start) = lower(timeline, other.start()) else {
            return false;
        };

        match lower(timeline, self.start()) {
            Lower::At(start) if timeline.compare(&start, &other_start) == Ordering::Greater => {
                return false
            }
            Lower::PastDomain => return false,
            _ => {}
        }

        let other_end = upper(timeline, other.end());

        // An empty `other` is a single position; it must lie before our end.
        if let Upper::At(other_end) = &other_end {
            if timeline.compare(&other_start, other_end) != Ordering::Less {
                return match upper(timeline, self.end()) {
                    Upper::At(end) => timeline.compare(&other_start, &end) == Ordering::Less,
                    Upper::PastDomain | Upper::Unbounded => true,
                };
            }
        }

        match (upper(timeline, self.end()), other_end) {
            (Upper::Unbounded, _) | (Upper::PastDomain, _) => true,
            (Upper::At(end), Upper::At(other_end)) => {
                timeline.compare(&end, &other_end) != Ordering::Less
            }
            (Upper::At(_), _) => false,
        }
    }

    /// `true` iff every point of the interval is strictly after `point`.
    fn is_after(&self, point: &T) -> bool {
        let timeline = self.timeline();
        match lower(timeline, self.start()) {
            Lower::At(start) => timeline.compare(&start, point) == Ordering::Greater,
            Lower::PastDomain => true,
            Lower::Unbounded => false,
        }
    }

    /// `true` iff the end is finite and not after `point`.
    fn is_before(&self, point: &T) -> bool {
        let timeline = self.timeline();
        match upper(timeline, self.end()) {
            Upper::At(end) => timeline.compare(&end, point) != Ordering::Greater,
            Upper::PastDomain | Upper::Unbounded => false,
        }
    }

    /// `true` iff this interval ends no later than `other` starts.
    fn is_before_interval(&self, other: &dyn ChronoInterval<T>) -> bool {
        precedes(self.timeline(), self.end(), other.start())
    }

    /// Equivalent to `other.is_before_interval(self)`.
    fn is_after_interval(&self, other: &dyn ChronoInterval<T>) -> bool {
        precedes(self.timeline(), other.end(), self.start())
    }

    /// `true` iff both intervals are non-empty and touch at exactly one
    /// boundary, with neither gap nor overlap.
    ///
    /// Intervals that are infinite on the same side never abut: there is no
    /// finite point for them to meet at.
    fn abuts(&self, other: &dyn ChronoInterval<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let timeline = self.timeline();

        let meets = |end: Upper<T>, start: Lower<T>| match (end, start) {
            (Upper::At(end), Lower::At(start)) => timeline.compare(&end, &start) == Ordering::Equal,
            _ => false,
        };

        meets(upper(timeline, self.end()), lower(timeline, other.start()))
            ^ meets(upper(timeline, other.end()), lower(timeline, self.start()))
    }

    /// `true` iff both intervals are non-empty and share at least one point.
    fn intersects(&self, other: &dyn ChronoInterval<T>) -> bool {
        let timeline = self.timeline();
        if self.is_empty()
            || other.is_empty()
            || starts_past_domain(timeline, self.start())
            || starts_past_domain(timeline, other.start())
        {
            return false;
        }

        !(self.is_before_interval(other) || self.is_after_interval(other))
    }
}

/// A start boundary in inclusive form.
enum Lower<T> {
    Unbounded,
    At(T),
    /// An open start on the last point of the domain: nothing follows it.
    PastDomain,
}

/// An end boundary in exclusive form.
enum Upper<T> {
    At(T),
    /// A closed end on the last point of the domain.
    PastDomain,
    Unbounded,
}

fn lower<T: Clone>(timeline: &dyn Timeline<T>, start: &Boundary<T>) -> Lower<T> {
    match start {
        Boundary::Closed(value) => Lower::At(value.clone()),
        Boundary::Open(value) => timeline
            .step_forward(value)
            .map_or(Lower::PastDomain, Lower::At),
        Boundary::InfinitePast | Boundary::InfiniteFuture => Lower::Unbounded,
    }
}

fn upper<T: Clone>(timeline: &dyn Timeline<T>, end: &Boundary<T>) -> Upper<T> {
    match end {
        Boundary::Open(value) => Upper::At(value.clone()),
        Boundary::Closed(value) => timeline
            .step_forward(value)
            .map_or(Upper::PastDomain, Upper::At),
        Boundary::InfinitePast | Boundary::InfiniteFuture => Upper::Unbounded,
    }
}

fn starts_past_domain<T: Clone>(timeline: &dyn Timeline<T>, start: &Boundary<T>) -> bool {
    matches!(lower(timeline, start), Lower::PastDomain)
}

/// Whether an interval ending at `end` lies entirely before one starting at `start`.
fn precedes<T: Clone>(timeline: &dyn Timeline<T>, end: &Boundary<T>, start: &Boundary<T>) -> bool {
    // A closed end on the last point leaves no room for anything after it.
    let Upper::At(end) = upper(timeline, end) else {
        return false;
    };

    match lower(timeline, start) {
        Lower::At(start) => timeline.compare(&end, &start) != Ordering::Greater,
        Lower::PastDomain => true,
        Lower::Unbounded => false,
    }
}

// ── SimpleInterval ──────────────────────────────────────────────────────────

/// A half-open interval `[start, end)` over an arbitrary timeline, with
/// optionally infinite boundaries.
///
/// Instances are created by an [`IntervalFactory`](crate::factory::IntervalFactory)
/// and are immutable. The timeline is shared, never copied, so cloning an
/// interval is as cheap as cloning its two boundary values.
///
/// # Examples
///
/// ```
/// use interval_algebra::{ChronoInterval, IntegerTimeline, IntervalFactory};
///
/// let ints = IntervalFactory::on_timeline(IntegerTimeline);
/// let a = ints.between(1, 10).unwrap();
/// let b = ints.between(5, 20).unwrap();
///
/// assert!(a.contains(&3));
/// assert!(!a.contains(&10));
/// assert_eq!(a.find_intersection(&b), Some(ints.between(5, 10).unwrap()));
/// ```
#[derive(Clone)]
pub struct SimpleInterval<T> {
    start: Boundary<T>,
    end: Boundary<T>,
    timeline: Arc<dyn Timeline<T>>,
}

impl<T: Clone + fmt::Debug> SimpleInterval<T> {
    /// Build from optional endpoint values. Absent values become infinite.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidRange`] if both values are present and
    /// the start is after the end. Equal values give an empty interval.
    pub(crate) fn from_points(
        start: Option<T>,
        end: Option<T>,
        timeline: Arc<dyn Timeline<T>>,
    ) -> Result<Self> {
        if let (Some(s), Some(e)) = (&start, &end) {
            if timeline.compare(s, e) == Ordering::Greater {
                return Err(IntervalError::InvalidRange(format!("{s:?}/{e:?}")));
            }
        }

        Ok(SimpleInterval {
            start: start.map_or(Boundary::InfinitePast, Boundary::Closed),
            end: end.map_or(Boundary::InfiniteFuture, Boundary::Open),
            timeline,
        })
    }
}

impl<T: Clone> SimpleInterval<T> {
    /// Build from boundaries without validation.
    ///
    /// Callers must pass a `Closed` or `InfinitePast` start and an `Open` or
    /// `InfiniteFuture` end, with the start not after the end.
    pub(crate) fn from_boundaries(
        start: Boundary<T>,
        end: Boundary<T>,
        timeline: Arc<dyn Timeline<T>>,
    ) -> Self {
        debug_assert!(
            matches!(start, Boundary::Closed(_) | Boundary::InfinitePast),
            "start boundary must be closed or infinite past"
        );
        debug_assert!(
            matches!(end, Boundary::Open(_) | Boundary::InfiniteFuture),
            "end boundary must be open or infinite future"
        );
        SimpleInterval {
            start,
            end,
            timeline,
        }
    }

    /// The shared handle to this interval's timeline.
    pub fn shared_timeline(&self) -> &Arc<dyn Timeline<T>> {
        &self.timeline
    }

    /// The overlap of this interval and `other`, if non-empty.
    ///
    /// The result lives on this interval's timeline. Open starts and closed
    /// ends of `other` are normalized before comparison.
    pub fn find_intersection(&self, other: &dyn ChronoInterval<T>) -> Option<SimpleInterval<T>> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let timeline = &*self.timeline;

        let start = match lower(timeline, other.start()) {
            Lower::Unbounded => self.start.clone(),
            Lower::PastDomain => return None,
            Lower::At(theirs) => match self.start.value() {
                Some(ours) if timeline.compare(ours, &theirs) != Ordering::Less => {
                    Boundary::Closed(ours.clone())
                }
                _ => Boundary::Closed(theirs),
            },
        };

        let end = match (self.end.value(), upper(timeline, other.end())) {
            (_, Upper::Unbounded) => self.end.clone(),
            (Some(ours), Upper::At(theirs)) => {
                if timeline.compare(ours, &theirs) == Ordering::Less {
                    Boundary::Open(ours.clone())
                } else {
                    Boundary::Open(theirs)
                }
            }
            (Some(ours), Upper::PastDomain) => Boundary::Open(ours.clone()),
            (None, Upper::At(theirs)) => Boundary::Open(theirs),
            (None, Upper::PastDomain) => Boundary::InfiniteFuture,
        };

        if let (Some(s), Some(e)) = (start.value(), end.value()) {
            if timeline.compare(s, e) == Ordering::Greater {
                return None;
            }
        }

        let intersection = SimpleInterval::from_boundaries(start, end, Arc::clone(&self.timeline));
        if intersection.is_empty() {
            None
        } else {
            Some(intersection)
        }
    }

    /// Render with the printer's own interval pattern, or `"{0}/{1}"`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidPattern`] if the pattern lacks `{0}` or
    /// `{1}`, and [`IntervalError::Format`] if the printer fails.
    pub fn print<P>(&self, printer: &P) -> Result<String>
    where
        P: PointPrinter<T> + ?Sized,
    {
        let pattern = printer.interval_pattern().unwrap_or(DEFAULT_PATTERN);
        format::render(&self.start, &self.end, printer, pattern)
    }

    /// Render with an explicit interval pattern containing `{0}` and `{1}`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidPattern`] if the pattern lacks `{0}` or
    /// `{1}`, and [`IntervalError::Format`] if the printer fails.
    pub fn print_with<P>(&self, printer: &P, pattern: &str) -> Result<String>
    where
        P: PointPrinter<T> + ?Sized,
    {
        format::render(&self.start, &self.end, printer, pattern)
    }
}

impl<T: Clone> ChronoInterval<T> for SimpleInterval<T> {
    fn start(&self) -> &Boundary<T> {
        &self.start
    }

    fn end(&self) -> &Boundary<T> {
        &self.end
    }

    fn timeline(&self) -> &dyn Timeline<T> {
        &*self.timeline
    }
}

impl<T: PartialEq> PartialEq for SimpleInterval<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && Arc::ptr_eq(&self.timeline, &other.timeline)
    }
}

impl<T: Eq> Eq for SimpleInterval<T> {}

impl<T: Hash> Hash for SimpleInterval<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<T: Serialize> Serialize for SimpleInterval<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SimpleInterval", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

/// Technical notation: `[start/end)`, with `(-∞` and `+∞)` for infinite sides.
fn write_technical<T>(
    f: &mut fmt::Formatter<'_>,
    start: &Boundary<T>,
    end: &Boundary<T>,
    point: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    match start.value() {
        Some(value) => {
            f.write_str("[")?;
            point(value, f)?;
        }
        None => f.write_str("(-\u{221E}")?,
    }
    f.write_str("/")?;
    match end.value() {
        Some(value) => {
            point(value, f)?;
            f.write_str(")")
        }
        None => f.write_str("+\u{221E})"),
    }
}

impl<T: fmt::Display> fmt::Display for SimpleInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_technical(f, &self.start, &self.end, |v, f| write!(f, "{v}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleInterval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_technical(f, &self.start, &self.end, |v, f| write!(f, "{v:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::IntervalFactory;
    use crate::timeline::IntegerTimeline;
    use test_log::test;

    fn ints() -> IntervalFactory<i32> {
        IntervalFactory::on_timeline(IntegerTimeline)
    }

    fn bytes() -> IntervalFactory<u8> {
        IntervalFactory::on_timeline(IntegerTimeline)
    }

    /// An interval with arbitrary, unnormalized boundaries.
    struct RawInterval<T> {
        start: Boundary<T>,
        end: Boundary<T>,
    }

    impl<T: Clone> ChronoInterval<T> for RawInterval<T>
    where
        IntegerTimeline: Timeline<T>,
    {
        fn start(&self) -> &Boundary<T> {
            &self.start
        }

        fn end(&self) -> &Boundary<T> {
            &self.end
        }

        fn timeline(&self) -> &dyn Timeline<T> {
            &IntegerTimeline
        }
    }

    fn raw<T>(start: Boundary<T>, end: Boundary<T>) -> RawInterval<T> {
        RawInterval { start, end }
    }

    fn unbounded(factory: &IntervalFactory<i32>) -> SimpleInterval<i32> {
        SimpleInterval::from_points(None, None, Arc::clone(factory.timeline())).unwrap()
    }

    // ── construction tests ──────────────────────────────────────────────

    #[test]
    fn test_between_normalizes_boundaries() {
        let iv = ints().between(1, 5).unwrap();
        assert_eq!(iv.start(), &Boundary::Closed(1));
        assert_eq!(iv.end(), &Boundary::Open(5));
        assert!(iv.is_finite());
    }

    #[test]
    fn test_since_and_until_are_infinite() {
        let f = ints();
        let since = f.since(10);
        assert_eq!(since.start(), &Boundary::Closed(10));
        assert_eq!(since.end(), &Boundary::InfiniteFuture);
        assert!(!since.is_finite());

        let until = f.until(10);
        assert_eq!(until.start(), &Boundary::InfinitePast);
        assert_eq!(until.end(), &Boundary::Open(10));
        assert!(!until.is_finite());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = ints().between(5, 1).unwrap_err();
        assert_eq!(err, IntervalError::InvalidRange("5/1".to_string()));
    }

    // ── point relation tests ────────────────────────────────────────────

    #[test]
    fn test_contains_point_half_open() {
        let iv = ints().between(1, 5).unwrap();
        assert!(iv.contains(&1));
        assert!(iv.contains(&3));
        assert!(!iv.contains(&5));
        assert!(!iv.contains(&0));
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let iv = ints().between(3, 3).unwrap();
        assert!(iv.is_empty());
        assert!(!iv.contains(&3));
    }

    #[test]
    fn test_infinite_boundaries_never_exclude() {
        let f = ints();
        assert!(f.since(10).contains(&i32::MAX));
        assert!(!f.since(10).contains(&9));
        assert!(f.until(10).contains(&i32::MIN));
        assert!(unbounded(&f).contains(&0));
        assert!(!unbounded(&f).is_empty());
    }

    #[test]
    fn test_is_before_and_after_point() {
        let f = ints();
        let iv = f.between(3, 5).unwrap();
        assert!(iv.is_before(&5));
        assert!(iv.is_before(&6));
        assert!(!iv.is_before(&4));
        assert!(iv.is_after(&2));
        assert!(!iv.is_after(&3));
        assert!(!f.since(1).is_before(&100));
        assert!(!f.until(5).is_after(&0));
    }

    // ── containment tests ───────────────────────────────────────────────

    #[test]
    fn test_contains_interval_finite() {
        let f = ints();
        let outer = f.between(1, 10).unwrap();
        assert!(outer.contains_interval(&f.between(2, 5).unwrap()));
        assert!(outer.contains_interval(&outer));
        assert!(!outer.contains_interval(&f.between(0, 5).unwrap()));
        assert!(!outer.contains_interval(&f.between(5, 11).unwrap()));
    }

    #[test]
    fn test_contains_interval_infinite() {
        let f = ints();
        assert!(!f.between(1, 10).unwrap().contains_interval(&f.since(3)));
        assert!(f.since(1).contains_interval(&f.between(5, 100).unwrap()));
        assert!(f.until(10).contains_interval(&f.between(5, 10).unwrap()));
        assert!(!f.until(10).contains_interval(&f.between(5, 11).unwrap()));
        assert!(!f.since(1).contains_interval(&f.since(2)));
    }

    #[test]
    fn test_contains_empty_interval() {
        let f = ints();
        let outer = f.between(1, 10).unwrap();
        assert!(outer.contains_interval(&f.between(5, 5).unwrap()));
        assert!(outer.contains_interval(&f.between(1, 1).unwrap()));
        assert!(!outer.contains_interval(&f.between(10, 10).unwrap()));
    }

    #[test]
    fn test_contains_interval_with_open_and_closed_boundaries() {
        let outer = bytes().between(5, 7).unwrap();
        // (4, 6] is [5, 7)
        assert!(outer.contains_interval(&raw(Boundary::Open(4u8), Boundary::Closed(6))));
        // (4, 7] is [5, 8)
        assert!(!outer.contains_interval(&raw(Boundary::Open(4u8), Boundary::Closed(7))));
    }

    #[test]
    fn test_contains_interval_at_domain_extremes() {
        let f = bytes();
        // An open start on the last point has no inclusive equivalent.
        let beyond = raw(Boundary::Open(u8::MAX), Boundary::Open(u8::MAX));
        assert!(!f.since(0).contains_interval(&beyond));

        // A closed end on the last point has no exclusive equivalent.
        let to_max = raw(Boundary::Closed(250u8), Boundary::Closed(u8::MAX));
        assert!(!f.between(0, u8::MAX).unwrap().contains_interval(&to_max));
        assert!(f.since(0).contains_interval(&to_max));
    }

    // ── ordering tests ──────────────────────────────────────────────────

    #[test]
    fn test_is_before_interval() {
        let f = ints();
        let a = f.between(1, 5).unwrap();
        assert!(a.is_before_interval(&f.between(5, 9).unwrap()));
        assert!(!f.between(1, 6).unwrap().is_before_interval(&f.between(5, 9).unwrap()));
        assert!(a.is_before_interval(&f.since(5)));
        assert!(f.until(5).is_before_interval(&f.since(5)));
        assert!(!a.is_before_interval(&f.until(9)));
        assert!(!f.since(1).is_before_interval(&f.since(100)));
    }

    #[test]
    fn test_is_before_interval_starting_beyond_domain() {
        let a = bytes().between(0, 10).unwrap();
        let beyond = raw(Boundary::Open(u8::MAX), Boundary::Open(u8::MAX));
        assert!(a.is_before_interval(&beyond));
    }

    #[test]
    fn test_is_after_interval_is_complement_of_before() {
        let f = ints();
        let a = f.between(1, 5).unwrap();
        let b = f.between(5, 9).unwrap();
        assert!(b.is_after_interval(&a));
        assert!(!a.is_after_interval(&b));
        assert!(f.since(5).is_after_interval(&f.until(5)));
        assert!(!f.since(5).is_after_interval(&f.until(6)));
    }

    // ── abuts tests ─────────────────────────────────────────────────────

    #[test]
    fn test_abuts_at_shared_boundary() {
        let f = ints();
        let a = f.between(1, 5).unwrap();
        let b = f.between(5, 9).unwrap();
        assert!(a.abuts(&b));
        assert!(b.abuts(&a));
        assert!(!a.abuts(&f.between(6, 9).unwrap()));
        assert!(!a.abuts(&f.between(4, 9).unwrap()));
        assert!(!a.abuts(&a));
    }

    #[test]
    fn test_since_abuts_until() {
        let f = ints();
        assert!(f.since(10).abuts(&f.until(10)));
        assert!(f.until(10).abuts(&f.since(10)));
        assert!(!f.since(10).intersects(&f.until(10)));
    }

    #[test]
    fn test_same_side_infinite_never_abuts() {
        let f = ints();
        assert!(!f.since(10).abuts(&f.since(20)));
        assert!(!f.until(10).abuts(&f.until(20)));
        assert!(!unbounded(&f).abuts(&f.since(3)));
        assert!(!unbounded(&f).abuts(&f.between(1, 2).unwrap()));
    }

    #[test]
    fn test_empty_never_abuts() {
        let f = ints();
        let empty = f.between(5, 5).unwrap();
        assert!(!empty.abuts(&f.between(1, 5).unwrap()));
        assert!(!f.between(1, 5).unwrap().abuts(&empty));
    }

    #[test]
    fn test_abuts_with_open_start_and_closed_end() {
        let a = bytes().between(1, 5).unwrap();
        // (4, 8] is [5, 9)
        assert!(a.abuts(&raw(Boundary::Open(4u8), Boundary::Closed(8))));
        // (-inf, 0] is (-inf, 1)
        let before = raw(Boundary::InfinitePast, Boundary::Closed(0u8));
        assert!(bytes().between(1, 3).unwrap().abuts(&before));
    }

    // ── intersection tests ──────────────────────────────────────────────

    #[test]
    fn test_intersects() {
        let f = ints();
        let a = f.between(1, 5).unwrap();
        assert!(a.intersects(&f.between(4, 9).unwrap()));
        assert!(!a.intersects(&f.between(5, 9).unwrap()));
        assert!(!a.intersects(&f.between(3, 3).unwrap()));
        assert!(unbounded(&f).intersects(&a));
        assert!(f.since(3).intersects(&f.until(4)));
    }

    #[test]
    fn test_find_intersection_overlapping() {
        let f = ints();
        let a = f.between(1, 10).unwrap();
        let b = f.between(5, 20).unwrap();
        assert_eq!(a.find_intersection(&b), Some(f.between(5, 10).unwrap()));
        assert_eq!(b.find_intersection(&a), Some(f.between(5, 10).unwrap()));
    }

    #[test]
    fn test_find_intersection_touching_is_none() {
        let f = ints();
        let a = f.between(1, 5).unwrap();
        assert_eq!(a.find_intersection(&f.between(5, 9).unwrap()), None);
        assert_eq!(a.find_intersection(&f.between(20, 30).unwrap()), None);
    }

    #[test]
    fn test_find_intersection_with_infinite() {
        let f = ints();
        assert_eq!(
            f.since(5).find_intersection(&f.until(10)),
            Some(f.between(5, 10).unwrap())
        );
        assert_eq!(f.since(5).find_intersection(&f.since(8)), Some(f.since(8)));
        assert_eq!(f.until(5).find_intersection(&f.until(8)), Some(f.until(5)));
        let a = f.between(2, 4).unwrap();
        assert_eq!(unbounded(&f).find_intersection(&a), Some(a.clone()));
        assert_eq!(unbounded(&f).find_intersection(&unbounded(&f)), Some(unbounded(&f)));
    }

    #[test]
    fn test_find_intersection_is_idempotent() {
        let a = ints().between(3, 7).unwrap();
        assert_eq!(a.find_intersection(&a), Some(a.clone()));
    }

    #[test]
    fn test_find_intersection_with_empty_is_none() {
        let f = ints();
        let empty = f.between(5, 5).unwrap();
        assert_eq!(f.between(1, 10).unwrap().find_intersection(&empty), None);
        assert_eq!(empty.find_intersection(&f.between(1, 10).unwrap()), None);
    }

    #[test]
    fn test_find_intersection_normalizes_other_boundaries() {
        let f = bytes();
        let a = f.between(0, 10).unwrap();
        // (3, 6] is [4, 7)
        let other = raw(Boundary::Open(3u8), Boundary::Closed(6));
        assert_eq!(a.find_intersection(&other), Some(f.between(4, 7).unwrap()));

        // A closed end on the last point keeps our own end.
        let a = f.between(250, u8::MAX).unwrap();
        let other = raw(Boundary::Closed(252u8), Boundary::Closed(u8::MAX));
        assert_eq!(a.find_intersection(&other), Some(f.between(252, u8::MAX).unwrap()));

        // An open start on the last point leaves nothing to intersect.
        let beyond = raw(Boundary::Open(u8::MAX), Boundary::InfiniteFuture);
        assert_eq!(f.since(0).find_intersection(&beyond), None);
    }

    #[test]
    fn test_closed_end_agrees_with_find_intersection() {
        let f = bytes();
        let a = f.between(5, 10).unwrap();
        // [0, 5] is [0, 6)
        let other = raw(Boundary::Closed(0u8), Boundary::Closed(5));

        assert!(other.contains(&5));
        assert!(!a.is_after_interval(&other));
        assert!(!other.is_before_interval(&a));
        assert!(a.intersects(&other));
        assert!(other.intersects(&a));
        assert_eq!(a.find_intersection(&other), Some(f.between(5, 6).unwrap()));
        assert!(!a.abuts(&other));

        for end in 0..12u8 {
            let other = raw(Boundary::Closed(0u8), Boundary::Closed(end));
            assert_eq!(
                a.intersects(&other),
                a.find_intersection(&other).is_some(),
                "closed end {end}"
            );
        }
    }

    #[test]
    fn test_intersects_nothing_past_the_domain() {
        let beyond = raw(Boundary::Open(u8::MAX), Boundary::InfiniteFuture);
        assert!(!bytes().since(0).intersects(&beyond));
        assert!(!beyond.intersects(&bytes().since(0)));
        assert_eq!(bytes().since(0).find_intersection(&beyond), None);
    }

    // ── unnormalized receiver tests ─────────────────────────────────────

    #[test]
    fn test_closed_end_contains_its_endpoint() {
        let iv = raw(Boundary::Closed(1u8), Boundary::Closed(5));
        assert!(iv.contains(&5));
        assert!(!iv.contains(&6));
        assert!(!iv.is_before(&5));
        assert!(iv.is_before(&6));
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_open_start_excludes_its_endpoint() {
        let iv = raw(Boundary::Open(1u8), Boundary::Open(5));
        assert!(!iv.contains(&1));
        assert!(iv.contains(&2));
        assert!(iv.is_after(&1));
        assert!(!iv.is_after(&2));
        // (1, 5) is [2, 5), which contains [2, 5)
        assert!(iv.contains_interval(&bytes().between(2, 5).unwrap()));
        assert!(!iv.contains_interval(&bytes().between(1, 5).unwrap()));
    }

    #[test]
    fn test_unnormalized_emptiness() {
        // (2, 2] is [3, 3)
        assert!(raw(Boundary::Open(2u8), Boundary::Closed(2)).is_empty());
        assert!(!raw(Boundary::Closed(2u8), Boundary::Closed(2)).is_empty());
        assert!(raw(Boundary::Open(u8::MAX), Boundary::Closed(u8::MAX)).is_empty());
    }

    #[test]
    fn test_closed_end_on_last_point() {
        let to_max = raw(Boundary::Closed(250u8), Boundary::Closed(u8::MAX));
        assert!(to_max.contains(&u8::MAX));
        assert!(!to_max.is_before(&u8::MAX));
        assert!(to_max.contains_interval(&bytes().between(251, u8::MAX).unwrap()));
        assert!(!to_max.is_before_interval(&bytes().since(0)));
        assert!(to_max.intersects(&bytes().since(u8::MAX)));
    }

    #[test]
    fn test_abuts_from_unnormalized_receiver() {
        // [1, 4] is [1, 5)
        let iv = raw(Boundary::Closed(1u8), Boundary::Closed(4));
        assert!(iv.abuts(&bytes().between(5, 9).unwrap()));
        assert!(!iv.abuts(&bytes().between(4, 9).unwrap()));
        // (0, 4] is [1, 5)
        let iv = raw(Boundary::Open(0u8), Boundary::Closed(4));
        assert!(iv.abuts(&bytes().until(1)));
    }

    // ── identity and display tests ──────────────────────────────────────

    #[test]
    fn test_equality_requires_same_timeline() {
        let a = ints().between(1, 5).unwrap();
        let b = ints().between(1, 5).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_technical_display() {
        let f = ints();
        assert_eq!(f.between(1, 5).unwrap().to_string(), "[1/5)");
        assert_eq!(f.since(1).to_string(), "[1/+\u{221E})");
        assert_eq!(f.until(5).to_string(), "(-\u{221E}/5)");
        assert_eq!(unbounded(&f).to_string(), "(-\u{221E}/+\u{221E})");
        assert_eq!(format!("{:?}", f.between(-1, 2).unwrap()), "[-1/2)");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&ints().since(3)).unwrap();
        assert_eq!(json, r#"{"start":{"closed":3},"end":"infinite_future"}"#);
    }
}
