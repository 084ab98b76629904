use serde::{Deserialize, Serialize};

use super::{PartId, Rect};

/// Temporary chrome drawn over the diagram, such as reshape handles.
///
/// Adornments are indexed like other parts but are skipped by queries that
/// exclude temporary parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adornment {
    pub id: PartId,
    /// The part this adornment decorates.
    pub adorned: PartId,
    pub bounds: Rect,
}

impl Adornment {
    pub fn new(id: PartId, adorned: PartId, bounds: Rect) -> Self {
        Self {
            id,
            adorned,
            bounds,
        }
    }
}
