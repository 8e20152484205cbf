//! Collision filtering and narrow-phase geometry

pub mod collision_layers;
pub mod sweep;

pub use collision_layers::CollisionLayers;
