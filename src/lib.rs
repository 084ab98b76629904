//! # SnapLink
//!
//! Interactive reshaping of orthogonal diagram links:
//! - Grid snapping with per-tool or diagram-wide grid settings
//! - Node avoidance: dragged segments never cross avoidable nodes
//! - Scenario replay for driving a reshape gesture from a file
//!
//! ## Architecture
//!
//! SnapLink is organized as a workspace with multiple crates:
//!
//! 1. **snaplink-core** - Geometry value types, constants, errors
//! 2. **snaplink-designer** - Diagram model, spatial index, grid snapping, reshaping
//! 3. **snaplink-settings** - Configuration files
//! 4. **snaplink** - Scenario replay binary that integrates all crates

pub mod scenario;

pub use snaplink_core::{Error, GeometryError, Point, Rect, Result, Size};
pub use snaplink_designer as designer;
pub use snaplink_designer::{
    Diagram, DiagramFile, Grid, LinkReshapeDriver, ReshapeConfig, SnapLinkReshaper,
};
pub use snaplink_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging with the given output format
///
/// Logs go to stderr so replay output on stdout stays machine readable.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_thread_names(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
