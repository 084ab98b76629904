//! Diagram grid and grid snapping.
//!
//! Tools carry their own grid settings, which may be left unset (non-real
//! values). Unset settings fall back to the diagram's ambient [`Grid`].

use serde::{Deserialize, Serialize};
use snaplink_core::constants::{DEFAULT_GRID_CELL, DEFAULT_GRID_ORIGIN};
use snaplink_core::{GeometryError, Point, Size};

/// The diagram-level grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub cell_size: Size,
    pub origin: Point,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cell_size: Size::new(DEFAULT_GRID_CELL, DEFAULT_GRID_CELL),
            origin: Point::new(DEFAULT_GRID_ORIGIN.0, DEFAULT_GRID_ORIGIN.1),
        }
    }
}

impl Grid {
    pub fn new(cell_size: Size, origin: Point) -> Self {
        Self { cell_size, origin }
    }

    /// Picks the cell size and origin to snap with.
    ///
    /// The cell size falls back to this grid when it is not real or has a
    /// zero dimension; the origin falls back when it is not real. The two
    /// choices are independent.
    pub fn resolve(&self, origin: Point, cell_size: Size) -> (Point, Size) {
        let cell = if !cell_size.is_real() || cell_size.has_zero_dimension() {
            self.cell_size
        } else {
            cell_size
        };
        let orig = if origin.is_real() { origin } else { self.origin };
        (orig, cell)
    }

    /// Checks that this grid can be snapped to: finite values and no
    /// negative cell dimension. A zero dimension is allowed.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let checks = [
            ("grid cell width", self.cell_size.width),
            ("grid cell height", self.cell_size.height),
            ("grid origin x", self.origin.x),
            ("grid origin y", self.origin.y),
        ];
        if let Some((what, value)) = checks.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::NonFinite {
                what: what.to_string(),
                value,
            });
        }
        if self.cell_size.width < 0.0 || self.cell_size.height < 0.0 {
            return Err(GeometryError::NegativeCellSize {
                width: self.cell_size.width,
                height: self.cell_size.height,
            });
        }
        Ok(())
    }

    /// Snaps `point` to this grid.
    pub fn snap(&self, point: Point) -> Point {
        point.snap_to_grid(
            self.origin.x,
            self.origin.y,
            self.cell_size.width,
            self.cell_size.height,
        )
    }
}

/// Rounds `point` to the nearest intersection of the grid described by
/// `origin` and `cell_size`, using `ambient` for whichever of the two is unset.
///
/// An axis whose resolved cell length is zero is passed through unsnapped.
pub fn snap(point: Point, origin: Point, cell_size: Size, ambient: &Grid) -> Point {
    let (orig, cell) = ambient.resolve(origin, cell_size);
    point.snap_to_grid(orig.x, orig.y, cell.width, cell.height)
}
