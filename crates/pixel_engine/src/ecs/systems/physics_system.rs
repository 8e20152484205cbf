//! Gravity and drag integration

use std::collections::BTreeSet;

use log::debug;

use crate::config::PhysicsConfig;
use crate::ecs::components::{RigidbodyComponent, VelocityComponent};
use crate::ecs::{ComponentManager, Entity};

/// Integrates gravity and drag into entity velocities
///
/// Membership signature: Velocity + Rigidbody. Runs first in the frame,
/// before the position update and collision reconciliation.
pub struct PhysicsSystem {
    gravity: f32,
}

impl PhysicsSystem {
    /// Create with an explicit gravity constant (+y is down)
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Create from the physics configuration
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self::new(config.gravity)
    }

    /// The gravity constant in use
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Advance velocities by one frame
    pub fn update(
        &mut self,
        components: &mut ComponentManager,
        entities: &BTreeSet<Entity>,
        delta_time: f32,
    ) {
        for &entity in entities {
            let Some(body) = components.try_get::<RigidbodyComponent>(entity).copied() else {
                debug!("physics: entity {} has no rigidbody, skipping", entity.id());
                continue;
            };
            if body.is_static || body.is_kinematic {
                continue;
            }

            let Some(velocity) = components.try_get_mut::<VelocityComponent>(entity) else {
                debug!("physics: entity {} has no velocity, skipping", entity.id());
                continue;
            };

            if body.use_gravity {
                velocity.vy += self.gravity * body.gravity_scale * delta_time;
            }
            if body.drag > 0.0 {
                velocity.vx *= (1.0 - body.drag * delta_time).max(0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn setup() -> (ComponentManager, BTreeSet<Entity>, Entity) {
        let mut components = ComponentManager::new();
        components.register_component::<VelocityComponent>();
        components.register_component::<RigidbodyComponent>();
        let entity = Entity::new(0);
        let members = BTreeSet::from([entity]);
        (components, members, entity)
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let (mut components, members, e) = setup();
        components.insert(e, VelocityComponent::default());
        components.insert(e, RigidbodyComponent::new());

        let mut system = PhysicsSystem::new(980.0);
        system.update(&mut components, &members, 0.5);

        assert_relative_eq!(components.get::<VelocityComponent>(e).vy, 490.0);
    }

    #[test]
    fn test_gravity_scale_multiplies() {
        let (mut components, members, e) = setup();
        components.insert(e, VelocityComponent::default());
        components.insert(e, RigidbodyComponent::new().with_gravity_scale(0.5));

        let mut system = PhysicsSystem::new(1000.0);
        system.update(&mut components, &members, 1.0);

        assert_relative_eq!(components.get::<VelocityComponent>(e).vy, 500.0);
    }

    #[test]
    fn test_static_and_kinematic_bodies_are_skipped() {
        let (mut components, members, e) = setup();
        components.insert(e, VelocityComponent::new(3.0, 0.0));
        components.insert(e, RigidbodyComponent::static_body());

        let mut system = PhysicsSystem::new(980.0);
        system.update(&mut components, &members, 1.0);

        let v = components.get::<VelocityComponent>(e);
        assert_eq!(v.vy, 0.0);
        assert_eq!(v.vx, 3.0);
    }

    #[test]
    fn test_drag_damps_horizontal_velocity() {
        let (mut components, members, e) = setup();
        components.insert(e, VelocityComponent::new(10.0, 0.0));
        components.insert(
            e,
            RigidbodyComponent::new().without_gravity().with_drag(0.5),
        );

        let mut system = PhysicsSystem::new(980.0);
        system.update(&mut components, &members, 0.1);

        let v = components.get::<VelocityComponent>(e);
        assert_relative_eq!(v.vx, 9.5);
        assert_eq!(v.vy, 0.0);

        // Extreme drag clamps to a dead stop, never reverses
        components.get_mut::<VelocityComponent>(e).vx = 10.0;
        components.get_mut::<RigidbodyComponent>(e).drag = 100.0;
        system.update(&mut components, &members, 1.0);
        assert_eq!(components.get::<VelocityComponent>(e).vx, 0.0);
    }
}
