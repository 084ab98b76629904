//! The diagram surface: parts, their spatial index, and the ambient grid.

use smallvec::SmallVec;
use std::collections::HashMap;

use crate::grid::Grid;
use crate::model::{Adornment, Link, Node, PartId, PartKind, PartRef, Point, Rect, Routing};
use crate::reshaping::{PartQuery, PartSearch};
use crate::spatial_index::{Bounds, SpatialIndex};

/// Results of a part query. Most reshaping queries hit a handful of parts.
pub type PartList = SmallVec<[PartRef; 8]>;

/// Owns every part of a diagram and answers area queries over them.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: HashMap<PartId, Node>,
    links: HashMap<PartId, Link>,
    adornments: HashMap<PartId, Adornment>,
    /// Bounds each part was indexed with, needed to remove it again.
    indexed: HashMap<PartId, Bounds>,
    index: SpatialIndex,
    grid: Grid,
    next_id: PartId,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Returns an id no part currently uses.
    pub fn generate_id(&mut self) -> PartId {
        loop {
            self.next_id += 1;
            if !self.indexed.contains_key(&self.next_id) && !self.contains(self.next_id) {
                return self.next_id;
            }
        }
    }

    pub fn contains(&self, id: PartId) -> bool {
        self.nodes.contains_key(&id)
            || self.links.contains_key(&id)
            || self.adornments.contains_key(&id)
    }

    pub fn part_count(&self) -> usize {
        self.nodes.len() + self.links.len() + self.adornments.len()
    }

    /// Adds an avoidable node covering `bounds`.
    pub fn add_node(&mut self, bounds: Rect) -> PartId {
        let id = self.generate_id();
        self.insert_node(Node::new(id, bounds))
    }

    /// Inserts `node`, replacing any part with the same id.
    pub fn insert_node(&mut self, node: Node) -> PartId {
        let id = node.id;
        self.remove_part(id);
        self.reindex(id, Some(node.bounds));
        self.nodes.insert(id, node);
        id
    }

    pub fn add_link(&mut self, points: Vec<Point>, routing: Routing) -> PartId {
        let id = self.generate_id();
        self.insert_link(Link::new(id, points).with_routing(routing))
    }

    /// Inserts `link`, replacing any part with the same id.
    pub fn insert_link(&mut self, link: Link) -> PartId {
        let id = link.id;
        self.remove_part(id);
        self.reindex(id, link.bounds());
        self.links.insert(id, link);
        id
    }

    pub fn add_adornment(&mut self, adorned: PartId, bounds: Rect) -> PartId {
        let id = self.generate_id();
        self.reindex(id, Some(bounds));
        self.adornments.insert(id, Adornment::new(id, adorned, bounds));
        id
    }

    pub fn remove_part(&mut self, id: PartId) -> bool {
        let removed = self.nodes.remove(&id).is_some()
            || self.links.remove(&id).is_some()
            || self.adornments.remove(&id).is_some();
        self.reindex(id, None);
        if removed {
            tracing::debug!("Removed part {}", id);
        }
        removed
    }

    /// Removes every adornment decorating `adorned`.
    pub fn clear_adornments(&mut self, adorned: PartId) {
        let ids: Vec<PartId> = self
            .adornments
            .values()
            .filter(|a| a.adorned == adorned)
            .map(|a| a.id)
            .collect();
        for id in ids {
            self.remove_part(id);
        }
    }

    pub fn node(&self, id: PartId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn link(&self, id: PartId) -> Option<&Link> {
        self.links.get(&id)
    }

    pub fn adornment(&self, id: PartId) -> Option<&Adornment> {
        self.adornments.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    pub fn move_node(&mut self, id: PartId, dx: f64, dy: f64) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        node.bounds = node.bounds.translated(dx, dy);
        let bounds = node.bounds;
        self.reindex(id, Some(bounds));
        true
    }

    /// Replaces the route of a link.
    pub fn set_link_points(&mut self, id: PartId, points: Vec<Point>) -> bool {
        let Some(link) = self.links.get_mut(&id) else {
            return false;
        };
        link.points = points;
        let bounds = link.bounds();
        self.reindex(id, bounds);
        true
    }

    /// Parts overlapping `rect`.
    ///
    /// With `search.intersects_boundary` a part counts if it touches the
    /// rectangle at all; otherwise it must lie entirely inside it. Adornments
    /// are only returned when `search.include_temporary` is set.
    pub fn find_parts_in(&self, rect: &Rect, search: PartSearch) -> PartList {
        let mut found: PartList = self
            .index
            .query(&Bounds::from(*rect))
            .into_iter()
            .filter_map(|id| self.part_ref(id))
            .filter(|part| search.include_temporary || part.kind != PartKind::Adornment)
            .filter(|part| {
                search.intersects_boundary
                    || self
                        .indexed
                        .get(&part.id)
                        .is_some_and(|b| rect.contains_rect(&Rect::from(*b)))
            })
            .collect();
        found.sort_by_key(|part| part.id);
        found
    }

    fn part_ref(&self, id: PartId) -> Option<PartRef> {
        if let Some(node) = self.nodes.get(&id) {
            return Some(PartRef {
                id,
                kind: PartKind::Node,
                avoidable: node.avoidable,
            });
        }
        let kind = if self.links.contains_key(&id) {
            PartKind::Link
        } else if self.adornments.contains_key(&id) {
            PartKind::Adornment
        } else {
            return None;
        };
        Some(PartRef {
            id,
            kind,
            avoidable: false,
        })
    }

    fn reindex(&mut self, id: PartId, bounds: Option<Rect>) {
        if let Some(old) = self.indexed.remove(&id) {
            self.index.remove(id, &old);
        }
        if let Some(rect) = bounds {
            let b = Bounds::from(rect);
            self.index.insert(id, &b);
            self.indexed.insert(id, b);
        }
    }
}

impl PartQuery for Diagram {
    fn find_parts_in(&self, rect: &Rect, search: PartSearch) -> PartList {
        Diagram::find_parts_in(self, rect, search)
    }
}
