//! Per-gesture obstacle avoidance state.
//!
//! An [`AvoidanceSession`] lives for exactly one drag. It records the
//! orientation of the two segments around the dragged vertex when the drag
//! starts and the last point known not to push a segment onto an avoidable
//! node. Candidates that would are replaced by that safe point.
//!
//! The check is a bounding-box approximation. For each side of the dragged
//! vertex it sweeps the adjacent segment to where it would be if the vertex
//! moved to the candidate, then the segment one hop further out, which also
//! shifts when the route stays rectilinear. Each swept segment is a
//! degenerate rectangle, tested against the diagram's parts.

use snaplink_core::{Point, Rect};

use super::route::{segment_orientations, slide};
use super::{ConnectorView, PartQuery, PartSearch, ReshapeHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct AvoidanceSession {
    handle: ReshapeHandle,
    safe_point: Point,
    prev_seg_horiz: bool,
    next_seg_horiz: bool,
}

impl AvoidanceSession {
    /// Starts a session for dragging `handle` on `link`, with the pointer at
    /// `pointer`.
    ///
    /// Returns `None` for non-orthogonal links and for handles that do not
    /// point at a route point. The route is assumed to avoid all nodes when
    /// the drag starts.
    pub fn start(link: &dyn ConnectorView, handle: ReshapeHandle, pointer: Point) -> Option<Self> {
        if !link.is_orthogonal() {
            return None;
        }
        if handle.segment_index >= link.points_count() {
            tracing::warn!(
                "Reshape handle index {} out of range for {} route points, avoidance disabled",
                handle.segment_index,
                link.points_count()
            );
            return None;
        }
        let (prev_seg_horiz, next_seg_horiz) = segment_orientations(link, handle.segment_index);
        tracing::debug!(
            index = handle.segment_index,
            prev_seg_horiz,
            next_seg_horiz,
            "Starting reshape avoidance at {}",
            pointer
        );
        Some(Self {
            handle,
            safe_point: pointer,
            prev_seg_horiz,
            next_seg_horiz,
        })
    }

    pub fn handle(&self) -> ReshapeHandle {
        self.handle
    }

    /// The last point that passed the overlap check, or the gesture start.
    pub fn safe_point(&self) -> Point {
        self.safe_point
    }

    pub fn prev_segment_horizontal(&self) -> bool {
        self.prev_seg_horiz
    }

    pub fn next_segment_horizontal(&self) -> bool {
        self.next_seg_horiz
    }

    /// Returns `candidate` if it is clear of avoidable nodes, advancing the
    /// safe point, and the unchanged safe point otherwise.
    ///
    /// If the link stopped being orthogonal or the handle no longer fits the
    /// route, the candidate is returned untouched and the safe point is left
    /// alone.
    pub fn evaluate(
        &mut self,
        candidate: Point,
        link: &dyn ConnectorView,
        parts: Option<&dyn PartQuery>,
    ) -> Point {
        if !link.is_orthogonal() {
            return candidate;
        }
        if self.handle.segment_index >= link.points_count() {
            tracing::warn!(
                "Reshape handle index {} no longer fits a {}-point route",
                self.handle.segment_index,
                link.points_count()
            );
            return candidate;
        }

        if self.is_clear(candidate, link, parts) {
            tracing::trace!("Accepted reshape point {}", candidate);
            self.safe_point = candidate;
            candidate
        } else {
            tracing::trace!(
                "Rejected reshape point {}, keeping {}",
                candidate,
                self.safe_point
            );
            self.safe_point
        }
    }

    /// True if moving the dragged vertex to `candidate` keeps the nearby
    /// segments off every avoidable node.
    ///
    /// Without a spatial index this reports clear.
    pub fn is_clear(
        &self,
        candidate: Point,
        link: &dyn ConnectorView,
        parts: Option<&dyn PartQuery>,
    ) -> bool {
        let Some(parts) = parts else {
            tracing::trace!("No spatial index, skipping overlap check");
            return true;
        };
        let index = self.handle.segment_index;

        if index >= 1 {
            let near = link.point(index - 1);
            let far = index.checked_sub(2).and_then(|i| link.point(i));
            if !side_clear(parts, candidate, near, far, self.prev_seg_horiz) {
                return false;
            }
        }

        if index + 1 < link.points_count() {
            let near = link.point(index + 1);
            let far = link.point(index + 2);
            if !side_clear(parts, candidate, near, far, self.next_seg_horiz) {
                return false;
            }
        }

        true
    }
}

fn side_clear(
    parts: &dyn PartQuery,
    candidate: Point,
    near: Option<Point>,
    far: Option<Point>,
    horizontal: bool,
) -> bool {
    let Some(near) = near else {
        return true;
    };
    let moved_near = slide(near, candidate, horizontal);
    if hits_avoidable(parts, Rect::from_points(candidate, moved_near)) {
        return false;
    }

    let Some(far) = far else {
        return true;
    };
    // The next segment out runs the other way, so it keeps the moved
    // neighbour's coordinate along the near segment's axis.
    let far_end = if horizontal {
        Point::new(moved_near.x, far.y)
    } else {
        Point::new(far.x, moved_near.y)
    };
    !hits_avoidable(parts, Rect::from_points(moved_near, far_end))
}

fn hits_avoidable(parts: &dyn PartQuery, rect: Rect) -> bool {
    parts
        .find_parts_in(&rect, PartSearch::OVERLAPPING)
        .iter()
        .any(|part| part.is_avoidable_node())
}
