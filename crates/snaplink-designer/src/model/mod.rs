//! Diagram parts: nodes, links, and temporary adornments.

pub mod adornment;
pub mod link;
pub mod node;

pub use adornment::Adornment;
pub use link::{Link, Routing};
pub use node::Node;

pub use snaplink_core::{Point, Rect, Size};

/// Identifier shared by every part in one diagram.
pub type PartId = u64;

/// Types of parts that can live in a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Node,
    Link,
    Adornment,
}

/// Lightweight result of a spatial query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartRef {
    pub id: PartId,
    pub kind: PartKind,
    /// Only meaningful for nodes; always false otherwise.
    pub avoidable: bool,
}

impl PartRef {
    /// True for nodes that connector segments should not cross.
    pub fn is_avoidable_node(&self) -> bool {
        self.kind == PartKind::Node && self.avoidable
    }
}
