//! # Pixel Engine
//!
//! A 2D game engine core built around a signature-based
//! Entity-Component-System and a swept AABB collision pipeline.
//!
//! ## Features
//!
//! - **ECS Runtime**: recycled integer entity handles, dense per-type
//!   component storage with O(1) insert/remove, signature-driven system
//!   membership
//! - **Broad Phase**: quadtree spatial index rebuilt every frame
//! - **Narrow Phase**: swept vertical collision for fast movers (no
//!   tunneling through thin platforms) plus discrete resting contacts
//! - **Configuration**: TOML/RON world and physics tunables
//!
//! ## Quick Start
//!
//! ```rust
//! use pixel_engine::prelude::*;
//!
//! let mut world = World::new();
//! world.register_component::<TransformComponent>();
//! world.register_component::<VelocityComponent>();
//! world.register_component::<RigidbodyComponent>();
//! world.register_component::<ColliderComponent>();
//!
//! world.register_system(PhysicsSystem::new(980.0));
//! world.set_system_signature::<PhysicsSystem>(Signature::from_types(&[
//!     world.component_type::<VelocityComponent>(),
//!     world.component_type::<RigidbodyComponent>(),
//! ]));
//! world.register_system(MovementSystem::new());
//! world.set_system_signature::<MovementSystem>(Signature::from_types(&[
//!     world.component_type::<TransformComponent>(),
//!     world.component_type::<VelocityComponent>(),
//! ]));
//! world.register_system(CollisionSystem::new(Aabb::from_position_size(
//!     0.0, 0.0, 2000.0, 1500.0,
//! )));
//! world.set_system_signature::<CollisionSystem>(Signature::from_types(&[
//!     world.component_type::<TransformComponent>(),
//!     world.component_type::<ColliderComponent>(),
//! ]));
//!
//! let player = world.create_entity().unwrap();
//! world.add_component(player, TransformComponent::new(100.0, 0.0, 32.0, 32.0));
//! world.add_component(player, VelocityComponent::default());
//! world.add_component(player, RigidbodyComponent::new());
//! world.add_component(player, ColliderComponent::new(32.0, 32.0).with_tag("player"));
//!
//! // One frame: integration first, collision reconciliation last
//! let dt = 1.0 / 60.0;
//! world.run_system::<PhysicsSystem, _>(|s, c, e| s.update(c, e, dt));
//! world.run_system::<MovementSystem, _>(|s, c, e| s.update(c, e, dt));
//! world.run_system::<CollisionSystem, _>(|s, c, e| s.update(c, e, dt));
//! ```

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod physics;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{Config, ConfigError, EngineConfig, PhysicsConfig, WorldConfig};
    pub use crate::ecs::components::{
        ColliderComponent, Contact, RigidbodyComponent, TransformComponent, VelocityComponent,
    };
    pub use crate::ecs::systems::{CollisionSystem, MovementSystem, PhysicsSystem};
    pub use crate::ecs::{
        Component, ComponentManager, ComponentType, EcsError, Entity, Signature, World,
    };
    pub use crate::foundation::math::{Aabb, Vec2};
    pub use crate::foundation::time::{FixedTimestep, Timer};
    pub use crate::physics::CollisionLayers;
    pub use crate::spatial::{Quadtree, QuadtreeConfig};
}
