//! Built-in component types

pub mod collider;
pub mod rigidbody;
pub mod transform;
pub mod velocity;

pub use collider::{ColliderComponent, Contact};
pub use rigidbody::RigidbodyComponent;
pub use transform::TransformComponent;
pub use velocity::VelocityComponent;
