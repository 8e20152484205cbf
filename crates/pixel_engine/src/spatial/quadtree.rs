//! Quadtree spatial partitioning structure
//!
//! Divides 2D space into hierarchical quadrants for broad-phase collision
//! queries. A node buffers inserted boxes until it overflows, then splits
//! into four equal quadrants and pushes down every box that fits entirely
//! inside one of them; boxes straddling a midline stay buffered at the
//! node that split. The tree holds no cross-frame state: its owner clears
//! and repopulates it every frame.

use log::trace;

use crate::ecs::Entity;
use crate::foundation::math::{Aabb, Vec2};

/// Configuration for quadtree behavior
#[derive(Debug, Clone, Copy)]
pub struct QuadtreeConfig {
    /// Maximum boxes buffered per node before subdivision
    pub max_objects: usize,

    /// Maximum subdivision depth
    pub max_levels: u32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_objects: 10,
            max_levels: 5,
        }
    }
}

/// Single node in the quadtree hierarchy
#[derive(Debug, Clone)]
pub struct QuadtreeNode {
    /// World-space bounds of this node
    bounds: Aabb,

    /// Depth in the tree (0 = root)
    level: u32,

    /// Boxes buffered at this node
    objects: Vec<(Entity, Aabb)>,

    /// Child quadrants, `None` while this is a leaf
    children: Option<Box<[QuadtreeNode; 4]>>,
}

/// Quadrant layout:
/// 0: top-right, 1: top-left, 2: bottom-left, 3: bottom-right
/// (+y is down, so "top" is the smaller-y half)
const TOP_RIGHT: usize = 0;
const TOP_LEFT: usize = 1;
const BOTTOM_LEFT: usize = 2;
const BOTTOM_RIGHT: usize = 3;

impl QuadtreeNode {
    fn new(bounds: Aabb, level: u32) -> Self {
        Self {
            bounds,
            level,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Check if this node is a leaf (has no children)
    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Quadrant that fully contains `aabb`, or `None` when the box
    /// straddles a midline and must stay at this node
    fn quadrant_index(&self, aabb: &Aabb) -> Option<usize> {
        let mid = self.bounds.center();

        let in_top = aabb.max.y < mid.y;
        let in_bottom = aabb.min.y > mid.y;
        let in_left = aabb.max.x < mid.x;
        let in_right = aabb.min.x > mid.x;

        match (in_left, in_right, in_top, in_bottom) {
            (true, _, true, _) => Some(TOP_LEFT),
            (true, _, _, true) => Some(BOTTOM_LEFT),
            (_, true, true, _) => Some(TOP_RIGHT),
            (_, true, _, true) => Some(BOTTOM_RIGHT),
            _ => None,
        }
    }

    /// Subdivide this node into four equal quadrants
    fn split(&mut self) {
        if self.children.is_some() {
            return;
        }

        let mid = self.bounds.center();
        let min = self.bounds.min;
        let max = self.bounds.max;
        let next = self.level + 1;

        self.children = Some(Box::new([
            QuadtreeNode::new(
                Aabb::new(Vec2::new(mid.x, min.y), Vec2::new(max.x, mid.y)),
                next,
            ),
            QuadtreeNode::new(Aabb::new(min, mid), next),
            QuadtreeNode::new(
                Aabb::new(Vec2::new(min.x, mid.y), Vec2::new(mid.x, max.y)),
                next,
            ),
            QuadtreeNode::new(Aabb::new(mid, max), next),
        ]));
    }

    /// Insert a box into this node or the single quadrant containing it
    fn insert(&mut self, entity: Entity, aabb: Aabb, config: &QuadtreeConfig) {
        if !self.is_leaf() {
            if let Some(index) = self.quadrant_index(&aabb) {
                if let Some(children) = &mut self.children {
                    children[index].insert(entity, aabb, config);
                }
                return;
            }
        }

        self.objects.push((entity, aabb));

        // Overflowing a node under the depth cap splits it and pushes
        // down everything that fits a single quadrant
        if self.objects.len() > config.max_objects && self.level < config.max_levels {
            if self.is_leaf() {
                self.split();
            }

            let mut i = 0;
            while i < self.objects.len() {
                match self.quadrant_index(&self.objects[i].1) {
                    Some(index) => {
                        let (moved_entity, moved_aabb) = self.objects.swap_remove(i);
                        if let Some(children) = &mut self.children {
                            children[index].insert(moved_entity, moved_aabb, config);
                        }
                    }
                    None => i += 1,
                }
            }
        }
    }

    /// Collect every entity that might intersect `area`
    fn query(&self, area: &Aabb, results: &mut Vec<Entity>) {
        for (entity, _) in &self.objects {
            results.push(*entity);
        }

        if let Some(children) = &self.children {
            match self.quadrant_index(area) {
                // Fully inside one quadrant: only that subtree can match
                Some(index) => children[index].query(area, results),
                // Straddling: descend into every touched quadrant
                None => {
                    for child in children.iter() {
                        if child.bounds.intersects(area) {
                            child.query(area, results);
                        }
                    }
                }
            }
        }
    }

    /// Count boxes in this node and all children
    fn count(&self) -> usize {
        let mut total = self.objects.len();
        if let Some(children) = &self.children {
            for child in children.iter() {
                total += child.count();
            }
        }
        total
    }
}

/// Quadtree spatial index over axis-aligned boxes
///
/// Broad-phase guarantee: [`Quadtree::query`] returns a superset of the
/// entities whose boxes truly intersect the queried area. It may
/// over-approximate (callers narrow-phase the candidates) but never
/// under-approximates.
#[derive(Debug, Clone)]
pub struct Quadtree {
    root: QuadtreeNode,
    config: QuadtreeConfig,
}

impl Quadtree {
    /// Create a quadtree covering the given world bounds
    pub fn new(bounds: Aabb, config: QuadtreeConfig) -> Self {
        Self {
            root: QuadtreeNode::new(bounds, 0),
            config,
        }
    }

    /// Drop all boxes and children, keeping the world bounds
    pub fn clear(&mut self) {
        self.root = QuadtreeNode::new(self.root.bounds, 0);
    }

    /// Replace the world bounds, clearing the tree
    pub fn set_bounds(&mut self, bounds: Aabb) {
        self.root = QuadtreeNode::new(bounds, 0);
    }

    /// Insert an entity's box
    ///
    /// Boxes outside the world bounds buffer at whatever node they reach
    /// (usually the root), so they still show up in queries; the
    /// conservative-superset guarantee holds for out-of-bounds movers.
    pub fn insert(&mut self, entity: Entity, aabb: Aabb) {
        if !self.root.bounds.intersects(&aabb) {
            trace!("quadtree: entity {} is outside the world bounds", entity.id());
        }
        self.root.insert(entity, aabb, &self.config);
    }

    /// Collect every entity whose box might intersect `area`
    pub fn query(&self, area: &Aabb) -> Vec<Entity> {
        let mut results = Vec::new();
        self.root.query(area, &mut results);
        results
    }

    /// Total number of stored boxes
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// True when no boxes are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// World bounds covered by the tree
    pub fn bounds(&self) -> Aabb {
        self.root.bounds
    }

    /// Whether the root has split (for diagnostics)
    pub fn is_split(&self) -> bool {
        !self.root.is_leaf()
    }
}
