//! Settings for [`SnapLinkReshaper`](super::SnapLinkReshaper).

use snaplink_core::{GeometryError, Point, Size};

/// Validated reshaping settings.
///
/// The grid cell size and origin may be left unset (NaN components), in
/// which case the diagram's grid is used. Infinite values and negative cell
/// sizes are rejected here so the per-event path never sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReshapeConfig {
    grid_cell_size: Size,
    grid_origin: Point,
    grid_snap_enabled: bool,
    avoids_nodes: bool,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        Self {
            grid_cell_size: Size::UNSET,
            grid_origin: Point::UNSET,
            grid_snap_enabled: true,
            avoids_nodes: true,
        }
    }
}

impl ReshapeConfig {
    pub fn new(
        grid_cell_size: Size,
        grid_origin: Point,
        grid_snap_enabled: bool,
        avoids_nodes: bool,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            grid_cell_size: validate_cell_size(grid_cell_size)?,
            grid_origin: validate_origin(grid_origin)?,
            grid_snap_enabled,
            avoids_nodes,
        })
    }

    pub fn with_grid_cell_size(mut self, size: Size) -> Result<Self, GeometryError> {
        self.grid_cell_size = validate_cell_size(size)?;
        Ok(self)
    }

    pub fn with_grid_origin(mut self, origin: Point) -> Result<Self, GeometryError> {
        self.grid_origin = validate_origin(origin)?;
        Ok(self)
    }

    pub fn with_grid_snap_enabled(mut self, enabled: bool) -> Self {
        self.grid_snap_enabled = enabled;
        self
    }

    pub fn with_avoids_nodes(mut self, avoids: bool) -> Self {
        self.avoids_nodes = avoids;
        self
    }

    /// Cell size to snap to; not real means "use the diagram grid".
    pub fn grid_cell_size(&self) -> Size {
        self.grid_cell_size
    }

    /// Grid origin to snap to; not real means "use the diagram grid".
    pub fn grid_origin(&self) -> Point {
        self.grid_origin
    }

    pub fn grid_snap_enabled(&self) -> bool {
        self.grid_snap_enabled
    }

    pub fn avoids_nodes(&self) -> bool {
        self.avoids_nodes
    }
}

fn reject_infinite(what: &str, value: f64) -> Result<(), GeometryError> {
    if value.is_infinite() {
        return Err(GeometryError::NonFinite {
            what: what.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_cell_size(size: Size) -> Result<Size, GeometryError> {
    reject_infinite("grid cell width", size.width)?;
    reject_infinite("grid cell height", size.height)?;
    if size.width < 0.0 || size.height < 0.0 {
        return Err(GeometryError::NegativeCellSize {
            width: size.width,
            height: size.height,
        });
    }
    Ok(size)
}

fn validate_origin(origin: Point) -> Result<Point, GeometryError> {
    reject_infinite("grid origin x", origin.x)?;
    reject_infinite("grid origin y", origin.y)?;
    Ok(origin)
}
