//! Collision layer system for filtering collision detection
//!
//! Layers answer "what is this entity?", masks answer "what does it hit?".
//! A pair collides only when each side's layer is in the other's mask.

/// Collision layer definitions and filtering helpers
pub struct CollisionLayers;

impl CollisionLayers {
    /// No collision layer
    pub const NONE: u32 = 0;

    /// All collision layers
    pub const ALL: u32 = 0xFFFF_FFFF;

    /// Player character layer
    pub const PLAYER: u32 = 1 << 0;

    /// Enemy character layer
    pub const ENEMY: u32 = 1 << 1;

    /// Projectiles (bullets, thrown objects)
    pub const PROJECTILE: u32 = 1 << 2;

    /// Static level geometry
    pub const ENVIRONMENT: u32 = 1 << 3;

    /// Pickups and collectibles
    pub const PICKUP: u32 = 1 << 4;

    /// Check if two entities should collide based on their layers and masks
    ///
    /// Filtering is two-sided: A's layer must be in B's mask and B's
    /// layer in A's mask.
    pub fn should_collide(layer_a: u32, mask_a: u32, layer_b: u32, mask_b: u32) -> bool {
        (layer_a & mask_b) != 0 && (layer_b & mask_a) != 0
    }

    /// Helper to combine multiple layers into a mask
    pub fn mask(layers: &[u32]) -> u32 {
        layers.iter().fold(0, |acc, &layer| acc | layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Player wants to hit enemies, but the enemy only hits projectiles
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENEMY,
            CollisionLayers::PROJECTILE,
        ));
    }

    #[test]
    fn test_defaults_pass_everything() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::ALL,
            CollisionLayers::ALL,
            CollisionLayers::ALL,
            CollisionLayers::ALL,
        ));
    }

    #[test]
    fn test_mask_combines_layers() {
        let mask = CollisionLayers::mask(&[CollisionLayers::PLAYER, CollisionLayers::ENVIRONMENT]);
        assert_eq!(mask, CollisionLayers::PLAYER | CollisionLayers::ENVIRONMENT);
    }
}
