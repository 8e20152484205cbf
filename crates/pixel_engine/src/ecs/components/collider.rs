//! Collider component and per-frame contact records

use serde::{Deserialize, Serialize};

use crate::ecs::{Component, Entity};
use crate::foundation::math::{Aabb, Vec2};
use crate::physics::CollisionLayers;

use super::transform::TransformComponent;

/// A collision recorded against another entity during the current frame
///
/// Transient: the collision pass clears every collider's contact list at
/// the start of its update, so a contact is only meaningful until the
/// next frame begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The entity collided with
    pub other: Entity,

    /// Surface normal on this entity, pointing away from the other
    /// (`(0, -1)` means the other entity is below)
    pub normal: Vec2,
}

/// Axis-aligned collision volume attached to an entity
///
/// The box is positioned relative to the entity's transform by
/// `offset_x`/`offset_y` and has its own extent, so a collider can be
/// smaller or larger than the sprite it guards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderComponent {
    /// Box offset from the transform's top-left corner
    pub offset_x: f32,

    /// Box offset from the transform's top-left corner
    pub offset_y: f32,

    /// Box extent along +x
    pub width: f32,

    /// Box extent along +y
    pub height: f32,

    /// Free-form gameplay tag ("player", "lava", ...)
    pub tag: String,

    /// Collision layer bitmask (what layer is this entity on?)
    pub layer: u32,

    /// Collision mask (what layers can this entity collide with?)
    pub mask: u32,

    /// Trigger volumes generate no solid response and no contacts
    pub is_trigger: bool,

    /// Polygon outline for editors and scripting; unused by the
    /// axis-aligned narrow phase
    pub vertices: Vec<Vec2>,

    /// Contacts recorded this frame
    #[serde(skip)]
    pub contacts: Vec<Contact>,
}

impl Default for ColliderComponent {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            width: 0.0,
            height: 0.0,
            tag: String::new(),
            layer: CollisionLayers::ALL,
            mask: CollisionLayers::ALL,
            is_trigger: false,
            vertices: Vec::new(),
            contacts: Vec::new(),
        }
    }
}

impl ColliderComponent {
    /// Create a collider with the given extent
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Offset the box from the transform's top-left corner
    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Set the gameplay tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set layer and mask for collision filtering
    pub fn with_layers(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// World-space collision box given the owning entity's transform
    pub fn aabb(&self, transform: &TransformComponent) -> Aabb {
        Aabb::from_position_size(
            transform.x + self.offset_x,
            transform.y + self.offset_y,
            self.width,
            self.height,
        )
    }

    /// Find this frame's contact with a specific entity, if any
    pub fn contact_with(&self, other: Entity) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.other == other)
    }

    /// Whether any contact was recorded this frame
    pub fn is_touching(&self) -> bool {
        !self.contacts.is_empty()
    }

    pub(crate) fn clear_contacts(&mut self) {
        self.contacts.clear();
    }

    pub(crate) fn push_contact(&mut self, other: Entity, normal: Vec2) {
        self.contacts.push(Contact { other, normal });
    }
}

impl Component for ColliderComponent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_box_applies_offset() {
        let transform = TransformComponent::new(100.0, 50.0, 32.0, 32.0);
        let collider = ColliderComponent::new(16.0, 16.0).with_offset(8.0, 8.0);

        let aabb = collider.aabb(&transform);
        assert_eq!(aabb.min, Vec2::new(108.0, 58.0));
        assert_eq!(aabb.max, Vec2::new(124.0, 74.0));
    }

    #[test]
    fn test_defaults_collide_with_everything() {
        let collider = ColliderComponent::default();
        assert_eq!(collider.layer, CollisionLayers::ALL);
        assert_eq!(collider.mask, CollisionLayers::ALL);
        assert!(!collider.is_trigger);
    }

    #[test]
    fn test_deserialize_tolerates_partial_json() {
        let collider: ColliderComponent =
            serde_json::from_str(r#"{"width": 32.0, "height": 16.0, "tag": "platform"}"#).unwrap();
        assert_eq!(collider.width, 32.0);
        assert_eq!(collider.tag, "platform");
        assert_eq!(collider.mask, CollisionLayers::ALL);
        assert!(collider.contacts.is_empty());
        assert!(collider.vertices.is_empty());
    }

    #[test]
    fn test_contacts_are_not_persisted() {
        let mut collider = ColliderComponent::new(8.0, 8.0);
        collider.push_contact(crate::ecs::Entity::new(3), Vec2::new(0.0, -1.0));

        let json = serde_json::to_string(&collider).unwrap();
        assert!(!json.contains("contacts"));
    }
}
