use serde::{Deserialize, Serialize};

use super::{PartId, Point, Rect};

/// A box-shaped element that links connect to and may have to avoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: PartId,
    #[serde(default)]
    pub name: String,
    pub bounds: Rect,
    /// Whether orthogonal link segments should be kept off this node.
    #[serde(default = "default_avoidable")]
    pub avoidable: bool,
}

fn default_avoidable() -> bool {
    true
}

impl Node {
    pub fn new(id: PartId, bounds: Rect) -> Self {
        Self {
            id,
            name: format!("Node {}", id),
            bounds,
            avoidable: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_avoidable(mut self, avoidable: bool) -> Self {
        self.avoidable = avoidable;
        self
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}
