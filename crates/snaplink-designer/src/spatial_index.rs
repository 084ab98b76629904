//! Quadtree spatial index over part bounds.
//!
//! Parts are stored by id together with their bounds. An item is kept in the
//! deepest node whose quadrant fully contains it; items straddling a split
//! line stay in the parent. Items that fall outside the root bounds go to an
//! overflow list so a query never misses them.

use snaplink_core::{Point, Rect};

/// Axis-aligned bounds used by the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Inclusive: touching edges intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    fn quadrants(&self) -> [Bounds; 4] {
        let (cx, cy) = self.center();
        [
            Bounds::new(self.min_x, self.min_y, cx, cy),
            Bounds::new(cx, self.min_y, self.max_x, cy),
            Bounds::new(self.min_x, cy, cx, self.max_y),
            Bounds::new(cx, cy, self.max_x, self.max_y),
        ]
    }
}

impl From<Rect> for Bounds {
    fn from(r: Rect) -> Self {
        Bounds::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

impl From<Bounds> for Rect {
    fn from(b: Bounds) -> Self {
        Rect::from_points(Point::new(b.min_x, b.min_y), Point::new(b.max_x, b.max_y))
    }
}

#[derive(Debug, Clone)]
struct QuadtreeNode {
    bounds: Bounds,
    depth: usize,
    items: Vec<(u64, Bounds)>,
    children: Option<Box<[QuadtreeNode; 4]>>,
}

impl QuadtreeNode {
    fn new(bounds: Bounds, depth: usize) -> Self {
        Self {
            bounds,
            depth,
            items: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, id: u64, bounds: Bounds, max_depth: usize, max_items: usize) {
        if let Some(children) = self.children.as_mut() {
            if let Some(child) = children.iter_mut().find(|c| c.bounds.contains(&bounds)) {
                child.insert(id, bounds, max_depth, max_items);
                return;
            }
            self.items.push((id, bounds));
            return;
        }

        self.items.push((id, bounds));
        if self.items.len() > max_items && self.depth < max_depth {
            self.split(max_depth, max_items);
        }
    }

    fn split(&mut self, max_depth: usize, max_items: usize) {
        let [a, b, c, d] = self.bounds.quadrants();
        let depth = self.depth + 1;
        self.children = Some(Box::new([
            QuadtreeNode::new(a, depth),
            QuadtreeNode::new(b, depth),
            QuadtreeNode::new(c, depth),
            QuadtreeNode::new(d, depth),
        ]));

        for (id, bounds) in std::mem::take(&mut self.items) {
            self.insert(id, bounds, max_depth, max_items);
        }
    }

    fn remove(&mut self, id: u64, bounds: &Bounds) -> bool {
        if let Some(pos) = self.items.iter().position(|(item, _)| *item == id) {
            self.items.swap_remove(pos);
            return true;
        }
        match self.children.as_mut() {
            Some(children) => children
                .iter_mut()
                .filter(|c| c.bounds.intersects(bounds))
                .any(|c| c.remove(id, bounds)),
            None => false,
        }
    }

    fn query(&self, area: &Bounds, out: &mut Vec<u64>) {
        if !self.bounds.intersects(area) {
            return;
        }
        out.extend(
            self.items
                .iter()
                .filter(|(_, b)| b.intersects(area))
                .map(|(id, _)| *id),
        );
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query(area, out);
            }
        }
    }

    fn collect_stats(&self, stats: &mut SpatialIndexStats) {
        stats.total_nodes += 1;
        stats.total_items += self.items.len();
        stats.max_depth = stats.max_depth.max(self.depth);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_stats(stats);
            }
        }
    }
}

/// Statistics about the shape of the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpatialIndexStats {
    pub total_nodes: usize,
    pub total_items: usize,
    pub max_depth: usize,
}

/// Quadtree keyed by part id.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    root: QuadtreeNode,
    overflow: Vec<(u64, Bounds)>,
    max_depth: usize,
    max_items: usize,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(Bounds::new(-100_000.0, -100_000.0, 100_000.0, 100_000.0), 8, 16)
    }
}

impl SpatialIndex {
    pub fn new(bounds: Bounds, max_depth: usize, max_items: usize) -> Self {
        Self {
            root: QuadtreeNode::new(bounds, 0),
            overflow: Vec::new(),
            max_depth,
            max_items: max_items.max(1),
        }
    }

    pub fn insert(&mut self, id: u64, bounds: &Bounds) {
        if self.root.bounds.contains(bounds) {
            self.root.insert(id, *bounds, self.max_depth, self.max_items);
        } else {
            self.overflow.push((id, *bounds));
        }
    }

    /// Removes `id`, which must have been inserted with `bounds`.
    pub fn remove(&mut self, id: u64, bounds: &Bounds) -> bool {
        if let Some(pos) = self.overflow.iter().position(|(item, _)| *item == id) {
            self.overflow.swap_remove(pos);
            return true;
        }
        self.root.remove(id, bounds)
    }

    /// Ids of every item whose bounds intersect `area`.
    pub fn query(&self, area: &Bounds) -> Vec<u64> {
        let mut out = Vec::new();
        self.root.query(area, &mut out);
        out.extend(
            self.overflow
                .iter()
                .filter(|(_, b)| b.intersects(area))
                .map(|(id, _)| *id),
        );
        out
    }

    pub fn stats(&self) -> SpatialIndexStats {
        let mut stats = SpatialIndexStats::default();
        self.root.collect_stats(&mut stats);
        stats.total_items += self.overflow.len();
        stats
    }
}
