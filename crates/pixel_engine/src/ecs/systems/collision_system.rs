//! Collision detection and resolution
//!
//! Two-phase, rebuilt from scratch every frame: the quadtree narrows each
//! mover's candidate set, then a vertical narrow phase resolves the pair.
//! Movers with vertical velocity get a swept test over the span their
//! leading edge traveled this frame, so fast bodies cannot tunnel through
//! thin colliders; movers at vertical rest get a discrete overlap check
//! that refreshes ground contacts. Horizontal movement is not collision
//! checked.

use std::collections::BTreeSet;

use log::debug;

use crate::config::EngineConfig;
use crate::ecs::components::{
    ColliderComponent, RigidbodyComponent, TransformComponent, VelocityComponent,
};
use crate::ecs::{ComponentManager, Entity};
use crate::foundation::math::{Aabb, Vec2};
use crate::physics::sweep::{rests_on, vertical_segment_hits};
use crate::physics::CollisionLayers;
use crate::spatial::{Quadtree, QuadtreeConfig};

/// Default cap on downward velocity, bounding per-step displacement
pub const MAX_FALL_SPEED: f32 = 1200.0;

/// Gap left between snapped surfaces so a resolved mover does not start
/// the next frame re-penetrating
pub const SKIN: f32 = 0.001;

/// Top-edge inset for the discrete resting check
pub const REST_INSET: f32 = 0.5;

/// A mover's narrow-phase view, copied out before any candidate writes
struct Mover {
    aabb: Aabb,
    is_trigger: bool,
    layer: u32,
    mask: u32,
    offset_y: f32,
    height: f32,
}

/// A candidate's narrow-phase view
struct Candidate {
    aabb: Aabb,
    is_trigger: bool,
    layer: u32,
    mask: u32,
}

/// Reconciles overlaps after integration and records contacts
///
/// Membership signature: Transform + Collider. Owns the quadtree and
/// repopulates it every update; no spatial state survives a frame.
pub struct CollisionSystem {
    quadtree: Quadtree,
    inserted: usize,
    max_fall_speed: f32,
}

impl CollisionSystem {
    /// Create with explicit world bounds and default tuning
    pub fn new(world_bounds: Aabb) -> Self {
        Self {
            quadtree: Quadtree::new(world_bounds, QuadtreeConfig::default()),
            inserted: 0,
            max_fall_speed: MAX_FALL_SPEED,
        }
    }

    /// Create from the engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        let quadtree_config = QuadtreeConfig {
            max_objects: config.physics.quadtree_max_objects,
            max_levels: config.physics.quadtree_max_levels,
        };
        Self {
            quadtree: Quadtree::new(config.world.bounds(), quadtree_config),
            inserted: 0,
            max_fall_speed: config.physics.max_fall_speed,
        }
    }

    /// Replace the world bounds (takes effect at the next update)
    pub fn set_world_bounds(&mut self, bounds: Aabb) {
        self.quadtree.set_bounds(bounds);
    }

    /// The broad-phase index, for diagnostics and visualization
    pub fn quadtree(&self) -> &Quadtree {
        &self.quadtree
    }

    /// Entities inserted into the quadtree during the last update
    pub fn inserted_count(&self) -> usize {
        self.inserted
    }

    /// Run one collision pass over the member entities
    ///
    /// Expects integration to have already moved transforms this frame;
    /// resolved collisions rewrite `Transform::y` and `Velocity::vy` and
    /// append contacts on both sides of each hit.
    pub fn update(
        &mut self,
        components: &mut ComponentManager,
        entities: &BTreeSet<Entity>,
        delta_time: f32,
    ) {
        // Phase 1: rebuild the spatial index and reset per-frame contacts
        self.quadtree.clear();
        self.inserted = 0;
        for &entity in entities {
            let Some(transform) = components.try_get::<TransformComponent>(entity) else {
                debug!("collision: entity {} has no transform, skipping", entity.id());
                continue;
            };
            let aabb = transform.aabb();

            let Some(collider) = components.try_get_mut::<ColliderComponent>(entity) else {
                debug!("collision: entity {} has no collider, skipping", entity.id());
                continue;
            };
            collider.clear_contacts();

            self.quadtree.insert(entity, aabb);
            self.inserted += 1;
        }

        // Phase 2: resolve movers in entity order
        for &entity in entities {
            let Some(transform) = components.try_get::<TransformComponent>(entity).copied() else {
                continue;
            };
            let Some(mover) = components.try_get::<ColliderComponent>(entity).map(|c| Mover {
                aabb: c.aabb(&transform),
                is_trigger: c.is_trigger,
                layer: c.layer,
                mask: c.mask,
                offset_y: c.offset_y,
                height: c.height,
            }) else {
                continue;
            };

            // Static bodies never move; they are struck, not strikers
            if components
                .try_get::<RigidbodyComponent>(entity)
                .map_or(false, |body| body.is_static)
            {
                continue;
            }

            // Cap fall speed so one step cannot outrun the sweep span
            let mut vy = 0.0;
            if let Some(velocity) = components.try_get_mut::<VelocityComponent>(entity) {
                if velocity.vy > self.max_fall_speed {
                    velocity.vy = self.max_fall_speed;
                }
                vy = velocity.vy;
            }

            let candidates = self.quadtree.query(&transform.aabb());

            if vy != 0.0 {
                Self::resolve_swept(components, entity, &mover, vy, delta_time, &candidates);
            } else {
                Self::resolve_resting(components, entity, &mover, &candidates);
            }
        }
    }

    /// Swept vertical resolution for a moving entity
    ///
    /// Tests the span the leading edge (bottom when falling, top when
    /// rising) covered this frame at the mover's horizontal center. The
    /// first intersecting candidate in candidate order wins; there is no
    /// earliest-time-of-impact ranking.
    fn resolve_swept(
        components: &mut ComponentManager,
        entity: Entity,
        mover: &Mover,
        vy: f32,
        delta_time: f32,
        candidates: &[Entity],
    ) {
        let moving_down = vy > 0.0;
        let center_x = (mover.aabb.min.x + mover.aabb.max.x) * 0.5;
        let travel = vy * delta_time;
        let (y_start, y_end) = if moving_down {
            (mover.aabb.max.y - travel, mover.aabb.max.y)
        } else {
            (mover.aabb.min.y, mover.aabb.min.y - travel)
        };

        for &other in candidates {
            if other == entity {
                continue;
            }
            let Some(candidate) = Self::candidate_view(components, other) else {
                continue;
            };
            if Self::bypasses(mover, &candidate) {
                continue;
            }
            if !vertical_segment_hits(center_x, y_start, y_end, &candidate.aabb) {
                continue;
            }

            // Snap the leading edge flush against the struck surface
            let new_y = if moving_down {
                candidate.aabb.min.y - mover.height - SKIN - mover.offset_y
            } else {
                candidate.aabb.max.y + SKIN - mover.offset_y
            };
            components.get_mut::<TransformComponent>(entity).y = new_y;
            components.get_mut::<VelocityComponent>(entity).vy = 0.0;

            let normal = if moving_down {
                Vec2::new(0.0, -1.0)
            } else {
                Vec2::new(0.0, 1.0)
            };
            components
                .get_mut::<ColliderComponent>(entity)
                .push_contact(other, normal);
            components
                .get_mut::<ColliderComponent>(other)
                .push_contact(entity, -normal);
            return;
        }
    }

    /// Discrete resting check for an entity at vertical rest
    ///
    /// Records a ground-style contact pair on the first overlapping
    /// candidate without moving anything.
    fn resolve_resting(
        components: &mut ComponentManager,
        entity: Entity,
        mover: &Mover,
        candidates: &[Entity],
    ) {
        for &other in candidates {
            if other == entity {
                continue;
            }
            let Some(candidate) = Self::candidate_view(components, other) else {
                continue;
            };
            if Self::bypasses(mover, &candidate) {
                continue;
            }
            if !rests_on(&mover.aabb, REST_INSET, &candidate.aabb) {
                continue;
            }

            components
                .get_mut::<ColliderComponent>(entity)
                .push_contact(other, Vec2::new(0.0, -1.0));
            components
                .get_mut::<ColliderComponent>(other)
                .push_contact(entity, Vec2::new(0.0, 1.0));
            return;
        }
    }

    /// Copy a candidate's box and filter data, or skip it with a log line
    fn candidate_view(components: &ComponentManager, other: Entity) -> Option<Candidate> {
        let Some(transform) = components.try_get::<TransformComponent>(other) else {
            debug!("collision: candidate {} has no transform, skipping", other.id());
            return None;
        };
        let transform = *transform;
        let Some(collider) = components.try_get::<ColliderComponent>(other) else {
            debug!("collision: candidate {} has no collider, skipping", other.id());
            return None;
        };
        Some(Candidate {
            aabb: collider.aabb(&transform),
            is_trigger: collider.is_trigger,
            layer: collider.layer,
            mask: collider.mask,
        })
    }

    /// Trigger pairs bypass solid response entirely; layer filtering
    /// follows the same two-sided rule as the broad phase
    fn bypasses(mover: &Mover, candidate: &Candidate) -> bool {
        mover.is_trigger
            || candidate.is_trigger
            || !CollisionLayers::should_collide(
                mover.layer,
                mover.mask,
                candidate.layer,
                candidate.mask,
            )
    }
}
