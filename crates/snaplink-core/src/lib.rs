//! # SnapLink Core
//!
//! Core geometry types, shared constants, and error types for SnapLink.
//! Everything in here is plain value data; the diagram model and the
//! reshaping tools live in `snaplink-designer`.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, GeometryError, Result};
pub use types::{Point, Rect, Size};
