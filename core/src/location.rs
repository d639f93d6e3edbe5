//! Component location representations.

use crate::Point;
use std::fmt;

/// Where a component sits in the document.
///
/// Only point-based locations accept point mutation. Curve-based and
/// other representations reject it explicitly instead of being narrowed
/// unchecked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// A single insertion point.
    Point(Point),
    /// A curve between two endpoints.
    Curve { start: Point, end: Point },
    /// A representation this interface does not model.
    Other,
}

impl Location {
    /// The discriminant of this location.
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Point(_) => LocationKind::Point,
            Location::Curve { .. } => LocationKind::Curve,
            Location::Other => LocationKind::Other,
        }
    }

    /// The insertion point, if this location is point-based.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Location::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// Discriminant of `Location`, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Point,
    Curve,
    Other,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Point => write!(f, "point-based"),
            LocationKind::Curve => write!(f, "curve-based"),
            LocationKind::Other => write!(f, "unmodeled"),
        }
    }
}
