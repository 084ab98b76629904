//! Shared constants.

/// Default cell size of a diagram grid, in document units.
pub const DEFAULT_GRID_CELL: f64 = 10.0;

/// Default origin of a diagram grid.
pub const DEFAULT_GRID_ORIGIN: (f64, f64) = (0.0, 0.0);

/// Two segment endpoints whose y-coordinates differ by less than this are
/// treated as a horizontal segment.
///
/// Tied to the default document scale (one unit per pixel at 100% zoom).
pub const SEGMENT_ORIENTATION_TOLERANCE: f64 = 0.5;
