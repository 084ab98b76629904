//! Interactive reshaping of orthogonal links.
//!
//! A reshape gesture drags one vertex of a link's route. Each pointer move is
//! turned into a corrected point by a [`PointCorrector`]:
//!
//! ```text
//! raw pointer ─► grid snap ─► obstacle check ─► route update (host)
//! ```
//!
//! [`SnapLinkReshaper`] is the corrector that snaps to the grid and refuses
//! points that would drag the adjacent segments across avoidable nodes.
//! [`LinkReshapeDriver`] plays the host's part: it owns the gesture, asks the
//! corrector for points, and writes the resulting route back into the
//! [`Diagram`](crate::Diagram).
//!
//! The corrector only sees the host through the narrow traits in this module,
//! so it can be driven by any diagram implementation.

pub mod config;
pub mod driver;
pub mod route;
pub mod session;
pub mod tool;

pub use config::ReshapeConfig;
pub use driver::LinkReshapeDriver;
pub use route::{reshape_orthogonal, segment_orientations};
pub use session::AvoidanceSession;
pub use tool::SnapLinkReshaper;

use crate::diagram::PartList;
use crate::grid::Grid;
use snaplink_core::{Point, Rect};

/// Read access to a connector's route.
pub trait ConnectorView {
    fn points_count(&self) -> usize;

    /// The `index`-th route point, or `None` when out of range.
    fn point(&self, index: usize) -> Option<Point>;

    fn is_orthogonal(&self) -> bool;
}

/// Options for an area query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSearch {
    /// Count parts that merely overlap the area, not just those inside it.
    pub intersects_boundary: bool,
    /// Also return temporary parts such as adornments.
    pub include_temporary: bool,
}

impl PartSearch {
    /// Everything overlapping the area, excluding temporary parts.
    pub const OVERLAPPING: PartSearch = PartSearch {
        intersects_boundary: true,
        include_temporary: false,
    };
}

/// Area queries over the diagram's parts.
pub trait PartQuery {
    fn find_parts_in(&self, rect: &Rect, search: PartSearch) -> PartList;
}

/// The reshape handle being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReshapeHandle {
    /// Index of the route point this handle moves.
    pub segment_index: usize,
}

impl ReshapeHandle {
    pub fn new(segment_index: usize) -> Self {
        Self { segment_index }
    }
}

/// What a corrector may look at while a gesture is running.
#[derive(Clone, Copy)]
pub struct ReshapeContext<'a> {
    pub link: &'a dyn ConnectorView,
    /// `None` when the host has no spatial index available.
    pub parts: Option<&'a dyn PartQuery>,
    /// The diagram's ambient grid.
    pub grid: &'a Grid,
    pub handle: Option<ReshapeHandle>,
}

/// Turns raw pointer positions into the points a reshape should use.
///
/// The host calls `begin` once when a gesture starts, `correct` for each
/// pointer move, and `finish` once when the gesture ends or is cancelled.
pub trait PointCorrector {
    fn begin(&mut self, ctx: &ReshapeContext<'_>, pointer: Point);

    fn correct(&mut self, ctx: &ReshapeContext<'_>, raw: Point) -> Point;

    fn finish(&mut self);
}
