//! Route geometry shared by the avoidance check and the default reshape.

use snaplink_core::constants::SEGMENT_ORIENTATION_TOLERANCE;
use snaplink_core::Point;

use super::ConnectorView;

/// True if the segment between `a` and `b` runs horizontally.
pub fn is_horizontal(a: Point, b: Point) -> bool {
    (a.y - b.y).abs() < SEGMENT_ORIENTATION_TOLERANCE
}

/// Orientation of the segments before and after route point `index`.
///
/// A missing neighbour reports `false`.
pub fn segment_orientations(link: &dyn ConnectorView, index: usize) -> (bool, bool) {
    let Some(current) = link.point(index) else {
        return (false, false);
    };
    let prev = index
        .checked_sub(1)
        .and_then(|i| link.point(i))
        .is_some_and(|p| is_horizontal(p, current));
    let next = link
        .point(index + 1)
        .is_some_and(|p| is_horizontal(p, current));
    (prev, next)
}

/// Where neighbour `p` ends up when the vertex it shares a segment with moves
/// to `moved`, keeping that segment's orientation.
pub fn slide(p: Point, moved: Point, horizontal: bool) -> Point {
    if horizontal {
        p.with_y(moved.y)
    } else {
        p.with_x(moved.x)
    }
}

/// Moves route point `index` to `point` and slides its neighbours so the two
/// adjacent segments stay horizontal or vertical.
pub fn reshape_orthogonal(
    points: &[Point],
    index: usize,
    point: Point,
    prev_horizontal: bool,
    next_horizontal: bool,
) -> Vec<Point> {
    let mut out = points.to_vec();
    if index >= out.len() {
        return out;
    }
    out[index] = point;
    if index >= 1 {
        out[index - 1] = slide(out[index - 1], point, prev_horizontal);
    }
    if index + 1 < out.len() {
        out[index + 1] = slide(out[index + 1], point, next_horizontal);
    }
    out
}

/// Moves route point `index` to `point`, leaving the rest alone.
pub fn reshape_free(points: &[Point], index: usize, point: Point) -> Vec<Point> {
    let mut out = points.to_vec();
    if let Some(p) = out.get_mut(index) {
        *p = point;
    }
    out
}
