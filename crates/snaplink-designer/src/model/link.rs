use serde::{Deserialize, Serialize};

use super::{PartId, Point, Rect};
use crate::reshaping::ConnectorView;

/// How a link's route is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Routing {
    /// Straight segments at any angle.
    #[default]
    Normal,
    /// Horizontal and vertical segments only.
    Orthogonal,
    /// Orthogonal, initially routed around avoidable nodes.
    AvoidsNodes,
}

/// A connector, stored as its route.
///
/// Segment `i` runs from `points[i - 1]` to `points[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: PartId,
    pub points: Vec<Point>,
    #[serde(default)]
    pub routing: Routing,
}

impl Link {
    pub fn new(id: PartId, points: Vec<Point>) -> Self {
        Self {
            id,
            points,
            routing: Routing::Normal,
        }
    }

    pub fn orthogonal(id: PartId, points: Vec<Point>) -> Self {
        Self::new(id, points).with_routing(Routing::Orthogonal)
    }

    pub fn with_routing(mut self, routing: Routing) -> Self {
        self.routing = routing;
        self
    }

    pub fn is_orthogonal(&self) -> bool {
        matches!(self.routing, Routing::Orthogonal | Routing::AvoidsNodes)
    }

    /// Bounds of the whole route, or `None` for an empty route.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        let mut r = Rect::from_point(*first);
        for p in rest {
            r.union_point(*p);
        }
        Some(r)
    }
}

impl ConnectorView for Link {
    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    fn is_orthogonal(&self) -> bool {
        Link::is_orthogonal(self)
    }
}
