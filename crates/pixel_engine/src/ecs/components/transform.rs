//! Transform component for entities placed in the 2D world

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::Aabb;

/// Position and extent of an entity in world space
///
/// Screen coordinates: +x is right, +y is down. `x`/`y` name the top-left
/// corner; `width`/`height` span toward bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformComponent {
    /// World-space x of the top-left corner
    pub x: f32,

    /// World-space y of the top-left corner
    pub y: f32,

    /// Extent along +x
    pub width: f32,

    /// Extent along +y
    pub height: f32,

    /// Rotation in degrees (rendering only; collision is axis-aligned)
    pub rotation: f32,

    /// Draw ordering; higher draws on top
    pub z_index: i32,
}

impl TransformComponent {
    /// Create a transform at a position with a size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the draw ordering
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// World-space bounding box of this transform
    pub fn aabb(&self) -> Aabb {
        Aabb::from_position_size(self.x, self.y, self.width, self.height)
    }
}

impl Component for TransformComponent {}
