//! Host side of a reshape gesture.
//!
//! [`LinkReshapeDriver`] owns the gesture lifecycle for a [`Diagram`]: it asks
//! a [`PointCorrector`] for each corrected point, applies the point to the
//! link's route, and restores the original route if the gesture is
//! cancelled. The corrector never touches the diagram itself.

use snaplink_core::{Point, Rect};

use super::route::{reshape_free, reshape_orthogonal, segment_orientations};
use super::{PointCorrector, ReshapeContext, ReshapeHandle};
use crate::diagram::Diagram;
use crate::model::PartId;

/// Half the side of the square handle adornment.
const HANDLE_HALF_SIZE: f64 = 3.0;

#[derive(Debug, Clone)]
struct ActiveReshape {
    link: PartId,
    handle: ReshapeHandle,
    original: Vec<Point>,
    prev_horizontal: bool,
    next_horizontal: bool,
}

/// Drives one reshape gesture at a time over a [`Diagram`].
#[derive(Debug, Clone, Default)]
pub struct LinkReshapeDriver<C: PointCorrector> {
    corrector: C,
    active: Option<ActiveReshape>,
}

impl<C: PointCorrector> LinkReshapeDriver<C> {
    pub fn new(corrector: C) -> Self {
        Self {
            corrector,
            active: None,
        }
    }

    pub fn corrector(&self) -> &C {
        &self.corrector
    }

    pub fn corrector_mut(&mut self) -> &mut C {
        &mut self.corrector
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The link being reshaped, if a gesture is running.
    pub fn active_link(&self) -> Option<PartId> {
        self.active.as_ref().map(|a| a.link)
    }

    /// Starts dragging route point `segment_index` of `link`.
    ///
    /// Returns false, and starts nothing, if a gesture is already running,
    /// the link does not exist, or the index is outside its route.
    pub fn activate(
        &mut self,
        diagram: &mut Diagram,
        link: PartId,
        segment_index: usize,
        pointer: Point,
    ) -> bool {
        if self.active.is_some() {
            tracing::warn!("Reshape already in progress, ignoring activation on link {}", link);
            return false;
        }
        let Some(current) = diagram.link(link) else {
            return false;
        };
        if segment_index >= current.points.len() {
            return false;
        }

        let handle = ReshapeHandle::new(segment_index);
        let at = current.points[segment_index];
        let original = current.points.clone();
        let (prev_horizontal, next_horizontal) = segment_orientations(current, segment_index);
        let ctx = ReshapeContext {
            link: current,
            parts: Some(&*diagram),
            grid: diagram.grid(),
            handle: Some(handle),
        };
        self.corrector.begin(&ctx, pointer);

        self.active = Some(ActiveReshape {
            link,
            handle,
            original,
            prev_horizontal,
            next_horizontal,
        });
        place_handle(diagram, link, at);
        tracing::debug!("Started reshaping link {} at index {}", link, segment_index);
        true
    }

    /// Feeds a pointer move into the gesture and updates the route.
    ///
    /// Returns the corrected point, or `None` when no gesture is running.
    pub fn pointer_moved(&mut self, diagram: &mut Diagram, pointer: Point) -> Option<Point> {
        let active = self.active.as_ref()?;
        let link = diagram.link(active.link)?;

        let ctx = ReshapeContext {
            link,
            parts: Some(&*diagram),
            grid: diagram.grid(),
            handle: Some(active.handle),
        };
        let point = self.corrector.correct(&ctx, pointer);

        let index = active.handle.segment_index;
        let route = if link.is_orthogonal() {
            reshape_orthogonal(
                &link.points,
                index,
                point,
                active.prev_horizontal,
                active.next_horizontal,
            )
        } else {
            reshape_free(&link.points, index, point)
        };

        let id = active.link;
        diagram.set_link_points(id, route);
        place_handle(diagram, id, point);
        Some(point)
    }

    /// Ends the gesture. Without `commit` the link gets its original route
    /// back.
    pub fn deactivate(&mut self, diagram: &mut Diagram, commit: bool) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        self.corrector.finish();
        diagram.clear_adornments(active.link);
        if !commit {
            diagram.set_link_points(active.link, active.original);
        }
        tracing::debug!(
            "Finished reshaping link {} ({})",
            active.link,
            if commit { "committed" } else { "cancelled" }
        );
        true
    }
}

fn place_handle(diagram: &mut Diagram, link: PartId, at: Point) {
    diagram.clear_adornments(link);
    let mut bounds = Rect::from_point(at);
    bounds.union_point(Point::new(at.x - HANDLE_HALF_SIZE, at.y - HANDLE_HALF_SIZE));
    bounds.union_point(Point::new(at.x + HANDLE_HALF_SIZE, at.y + HANDLE_HALF_SIZE));
    diagram.add_adornment(link, bounds);
}
