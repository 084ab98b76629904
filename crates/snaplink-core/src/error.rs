//! Error handling for SnapLink
//!
//! Only configuration and I/O boundaries produce errors. The per-event
//! reshaping path is infallible and fails safe instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry validation error
///
/// Raised when a configured coordinate or size cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate or dimension is infinite
    #[error("{what} must be finite or unset, got {value}")]
    NonFinite {
        /// Name of the offending value.
        what: String,
        /// The rejected value.
        value: f64,
    },

    /// A grid cell dimension is negative
    #[error("Grid cell size must not be negative, got {width}x{height}")]
    NegativeCellSize {
        /// The configured width.
        width: f64,
        /// The configured height.
        height: f64,
    },
}

/// Main error type for SnapLink
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry validation error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
