//! Entity-Component-System implementation
//!
//! Entities are recycled integer handles, components are plain data in
//! dense per-type arrays, and systems receive the ordered set of entities
//! whose component signature covers their requirement.

pub mod component;
pub mod components;
pub mod entity;
pub mod system;
pub mod systems;
pub mod world;

pub use component::{Component, ComponentArray, ComponentManager, ComponentType};
pub use entity::{EcsError, Entity, EntityManager, Signature, DEFAULT_MAX_ENTITIES, MAX_COMPONENT_TYPES};
pub use system::SystemManager;
pub use world::World;
