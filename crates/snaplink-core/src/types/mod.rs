//! Value geometry shared by every SnapLink crate.

pub mod geometry;

pub use geometry::{Point, Rect, Size};
