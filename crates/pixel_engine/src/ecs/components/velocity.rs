//! Velocity component for entities that move

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Linear velocity in units per second
///
/// +y is down, so a positive `vy` is falling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityComponent {
    /// Horizontal velocity
    pub vx: f32,

    /// Vertical velocity (positive is downward)
    pub vy: f32,
}

impl VelocityComponent {
    /// Create a velocity
    pub fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    /// Zero all movement
    pub fn stop(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }
}

impl Component for VelocityComponent {}
