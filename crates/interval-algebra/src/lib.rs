//! # interval-algebra
//!
//! Half-open intervals over any discrete, totally ordered timeline.
//!
//! An interval is a pair of boundaries (inclusive start, exclusive end, either
//! of which may be infinite) sharing a [`Timeline`] that orders its points and
//! steps between neighbours. On top of that the crate answers containment,
//! ordering, adjacency and overlap questions, computes intersections, and
//! renders/parses intervals through a two-placeholder text pattern.
//!
//! ## Modules
//!
//! - [`timeline`] — the `Timeline` capability plus integer, UTC and date timelines
//! - [`boundary`] — one edge of an interval: closed, open or infinite
//! - [`interval`] — the `ChronoInterval` relational algebra and `SimpleInterval`
//! - [`factory`] — `IntervalFactory` bound to one timeline, and the process-wide UTC factory
//! - [`format`] — pattern renderer/parser and the point printer/parser contracts
//! - [`points`] — stock point printers and parsers (integers, chrono types)
//! - [`error`] — Error types

pub mod boundary;
pub mod error;
pub mod factory;
pub mod format;
pub mod interval;
pub mod points;
pub mod timeline;

pub use boundary::Boundary;
pub use error::IntervalError;
pub use factory::{utc_between, utc_since, utc_until, IntervalFactory};
pub use format::{PointParseError, PointParser, PointPrinter, DEFAULT_PATTERN};
pub use interval::{ChronoInterval, SimpleInterval};
pub use timeline::{DateTimeline, IntegerTimeline, Timeline, UtcTimeline};
