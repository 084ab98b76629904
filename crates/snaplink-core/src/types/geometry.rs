//! Points, sizes, and axis-aligned rectangles in document coordinates.
//!
//! A value whose components are not all finite is "not real". The reshaping
//! tools use NaN components as a "use the ambient default" sentinel, so
//! [`Point::UNSET`] and [`Size::UNSET`] are ordinary values rather than
//! `Option`s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Sentinel meaning "no point set".
    pub const UNSET: Point = Point {
        x: f64::NAN,
        y: f64::NAN,
    };

    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_real(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns a copy with the x coordinate replaced.
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Returns a copy with the y coordinate replaced.
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Rounds this point to the nearest grid intersection.
    ///
    /// An axis whose cell length is zero or not finite is left untouched.
    /// Ties round up, so `0.5` cells snaps to the next line.
    pub fn snap_to_grid(self, origin_x: f64, origin_y: f64, cell_w: f64, cell_h: f64) -> Self {
        Self {
            x: snap_axis(self.x, origin_x, cell_w),
            y: snap_axis(self.y, origin_y, cell_h),
        }
    }
}

fn snap_axis(value: f64, origin: f64, cell: f64) -> f64 {
    if cell == 0.0 || !cell.is_finite() {
        return value;
    }
    origin + ((value - origin) / cell + 0.5).floor() * cell
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Sentinel meaning "no size set".
    pub const UNSET: Size = Size {
        width: f64::NAN,
        height: f64::NAN,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if both dimensions are finite numbers.
    pub fn is_real(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Returns true if either dimension is exactly zero.
    pub fn has_zero_dimension(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle stored as its min and max corners.
///
/// A rectangle built from a single point has zero width and height and still
/// takes part in intersection tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_points(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Creates a degenerate rectangle covering exactly one point.
    pub fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Smallest rectangle covering both points, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        let mut r = Self::from_point(a);
        r.union_point(b);
        r
    }

    /// Grows the rectangle so it covers `p`.
    pub fn union_point(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns a copy moved by the given offset.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    /// Inclusive point containment: points on the edge are inside.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// True if `other` lies entirely within this rectangle (edges included).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Inclusive overlap test: touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]-[{}, {}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
