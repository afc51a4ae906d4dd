//! One edge of an interval.

use serde::Serialize;

/// A boundary of an interval: inclusive, exclusive or infinite.
///
/// Finite variants always carry a value, infinite ones never do. Boundaries
/// know nothing about ordering; comparisons are made by the interval layer
/// through its [`Timeline`](crate::timeline::Timeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary<T> {
    /// No lower bound.
    InfinitePast,
    /// Inclusive edge.
    Closed(T),
    /// Exclusive edge.
    Open(T),
    /// No upper bound.
    InfiniteFuture,
}

impl<T> Boundary<T> {
    /// An inclusive boundary at `value`.
    pub fn closed(value: T) -> Self {
        Boundary::Closed(value)
    }

    /// An exclusive boundary at `value`.
    pub fn open(value: T) -> Self {
        Boundary::Open(value)
    }

    pub const fn infinite_past() -> Self {
        Boundary::InfinitePast
    }

    pub const fn infinite_future() -> Self {
        Boundary::InfiniteFuture
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Boundary::InfinitePast | Boundary::InfiniteFuture)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Boundary::Open(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Boundary::Closed(_))
    }

    /// The boundary value, or `None` for an infinite boundary.
    pub fn value(&self) -> Option<&T> {
        match self {
            Boundary::Closed(value) | Boundary::Open(value) => Some(value),
            Boundary::InfinitePast | Boundary::InfiniteFuture => None,
        }
    }

    /// Consume the boundary, yielding its value if finite.
    pub fn into_value(self) -> Option<T> {
        match self {
            Boundary::Closed(value) | Boundary::Open(value) => Some(value),
            Boundary::InfinitePast | Boundary::InfiniteFuture => None,
        }
    }
}
