//! Euler position integration

use std::collections::BTreeSet;

use log::debug;

use crate::ecs::components::{TransformComponent, VelocityComponent};
use crate::ecs::{ComponentManager, Entity};

/// Applies velocities to transforms with explicit Euler integration
///
/// Membership signature: Transform + Velocity. Runs after gravity
/// integration and before collision reconciliation, which may rewrite the
/// vertical result.
#[derive(Default)]
pub struct MovementSystem;

impl MovementSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Advance positions by one frame
    pub fn update(
        &mut self,
        components: &mut ComponentManager,
        entities: &BTreeSet<Entity>,
        delta_time: f32,
    ) {
        for &entity in entities {
            let Some(velocity) = components.try_get::<VelocityComponent>(entity).copied() else {
                debug!("movement: entity {} has no velocity, skipping", entity.id());
                continue;
            };
            let Some(transform) = components.try_get_mut::<TransformComponent>(entity) else {
                debug!("movement: entity {} has no transform, skipping", entity.id());
                continue;
            };

            transform.x += velocity.vx * delta_time;
            transform.y += velocity.vy * delta_time;
        }
    }
}
