//! Rigidbody component controlling how physics integrates an entity

use serde::{Deserialize, Serialize};

use crate::ecs::Component;

/// Physical properties consumed by the integration and collision passes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidbodyComponent {
    /// Mass in arbitrary units (reserved for impulse response)
    pub mass: f32,

    /// Whether gravity accelerates this body
    pub use_gravity: bool,

    /// Static bodies never move and are skipped as collision movers
    pub is_static: bool,

    /// Per-body multiplier on the global gravity constant
    pub gravity_scale: f32,

    /// Horizontal damping factor (0 = none)
    pub drag: f32,

    /// Kinematic bodies are driven externally; integration skips them
    pub is_kinematic: bool,
}

impl Default for RigidbodyComponent {
    fn default() -> Self {
        Self {
            mass: 1.0,
            use_gravity: true,
            is_static: false,
            gravity_scale: 1.0,
            drag: 0.0,
            is_kinematic: false,
        }
    }
}

impl RigidbodyComponent {
    /// Create a dynamic gravity-affected body
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an immovable body (level geometry, platforms)
    pub fn static_body() -> Self {
        Self {
            use_gravity: false,
            is_static: true,
            ..Default::default()
        }
    }

    /// Create an externally-driven body that ignores integration
    pub fn kinematic() -> Self {
        Self {
            use_gravity: false,
            is_kinematic: true,
            ..Default::default()
        }
    }

    /// Set the mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Set the per-body gravity multiplier
    pub fn with_gravity_scale(mut self, gravity_scale: f32) -> Self {
        self.gravity_scale = gravity_scale;
        self
    }

    /// Set the horizontal damping factor
    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    /// Disable gravity while staying dynamic
    pub fn without_gravity(mut self) -> Self {
        self.use_gravity = false;
        self
    }
}

impl Component for RigidbodyComponent {}
