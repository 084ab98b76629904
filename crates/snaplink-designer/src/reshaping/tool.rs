//! Grid-snapping, node-avoiding point correction for link reshaping.

use snaplink_core::Point;

use super::config::ReshapeConfig;
use super::session::AvoidanceSession;
use super::{ConnectorView, PartQuery, PointCorrector, ReshapeContext, ReshapeHandle};
use crate::grid::{self, Grid};

/// Snaps dragged reshape handles to a grid and, for orthogonal links, keeps
/// the segments next to the handle from crossing avoidable nodes.
///
/// Holds at most one [`AvoidanceSession`], created by
/// [`on_gesture_start`](Self::on_gesture_start) and dropped by
/// [`on_gesture_end`](Self::on_gesture_end).
#[derive(Debug, Clone, Default)]
pub struct SnapLinkReshaper {
    config: ReshapeConfig,
    session: Option<AvoidanceSession>,
}

impl SnapLinkReshaper {
    pub fn new(config: ReshapeConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &ReshapeConfig {
        &self.config
    }

    /// Replaces the settings. A running gesture keeps its session; turning
    /// avoidance off makes it pass points through.
    pub fn set_config(&mut self, config: ReshapeConfig) {
        self.config = config;
    }

    pub fn session(&self) -> Option<&AvoidanceSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begins a gesture. Avoidance only arms when it is enabled, the link is
    /// orthogonal, and a handle is being dragged.
    pub fn on_gesture_start(
        &mut self,
        link: &dyn ConnectorView,
        handle: Option<ReshapeHandle>,
        pointer: Point,
    ) {
        self.session = None;
        if !self.config.avoids_nodes() {
            return;
        }
        if let Some(handle) = handle {
            self.session = AvoidanceSession::start(link, handle, pointer);
        }
    }

    /// Snaps `point` using this tool's grid, falling back to `ambient`.
    pub fn snap(&self, point: Point, ambient: &Grid) -> Point {
        if !self.config.grid_snap_enabled() {
            return point;
        }
        grid::snap(
            point,
            self.config.grid_origin(),
            self.config.grid_cell_size(),
            ambient,
        )
    }

    /// Runs the obstacle check on `candidate`.
    ///
    /// Passes `candidate` through when avoidance is off or no gesture armed
    /// it.
    pub fn evaluate(
        &mut self,
        candidate: Point,
        link: &dyn ConnectorView,
        parts: Option<&dyn PartQuery>,
    ) -> Point {
        if !self.config.avoids_nodes() {
            return candidate;
        }
        match self.session.as_mut() {
            Some(session) => session.evaluate(candidate, link, parts),
            None => candidate,
        }
    }

    /// Snaps then checks `raw`, giving the point the reshape should use.
    pub fn compute_reshape(&mut self, raw: Point, ctx: &ReshapeContext<'_>) -> Point {
        let snapped = self.snap(raw, ctx.grid);
        self.evaluate(snapped, ctx.link, ctx.parts)
    }

    pub fn on_gesture_end(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Reshape avoidance session ended");
        }
    }
}

impl PointCorrector for SnapLinkReshaper {
    fn begin(&mut self, ctx: &ReshapeContext<'_>, pointer: Point) {
        self.on_gesture_start(ctx.link, ctx.handle, pointer);
    }

    fn correct(&mut self, ctx: &ReshapeContext<'_>, raw: Point) -> Point {
        self.compute_reshape(raw, ctx)
    }

    fn finish(&mut self) {
        self.on_gesture_end();
    }
}
