//! Entity handles, signatures, and the entity allocator

use std::collections::{BTreeSet, VecDeque};

use thiserror::Error;

/// Maximum number of distinct component types a world can register
///
/// One signature bit per type; the signature is a `u32`.
pub const MAX_COMPONENT_TYPES: usize = 32;

/// Default entity capacity used by [`crate::ecs::World::new`]
pub const DEFAULT_MAX_ENTITIES: usize = 5000;

/// Entity identifier
///
/// An opaque handle with no identity beyond the integer. Ids are recycled
/// after destruction, so holding a handle across a destroy is a caller
/// contract, not something the handle can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create a new entity with the given ID
    pub(crate) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Bitset identifying which component types an entity currently has
///
/// Bit *i* is set when the entity holds the *i*-th registered component
/// type. Bits are handed out once per type at registration and never
/// reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signature(u32);

impl Signature {
    /// The empty signature (no components)
    pub const EMPTY: Self = Self(0);

    /// Build a signature from a set of component type bits
    pub fn from_types(types: &[crate::ecs::ComponentType]) -> Self {
        let mut signature = Self::EMPTY;
        for ty in types {
            signature.insert(*ty);
        }
        signature
    }

    /// Set the bit for a component type
    pub fn insert(&mut self, ty: crate::ecs::ComponentType) {
        self.0 |= 1 << ty.index();
    }

    /// Clear the bit for a component type
    pub fn remove(&mut self, ty: crate::ecs::ComponentType) {
        self.0 &= !(1 << ty.index());
    }

    /// Test the bit for a component type
    pub fn contains(&self, ty: crate::ecs::ComponentType) -> bool {
        self.0 & (1 << ty.index()) != 0
    }

    /// Test whether this signature has every bit of `required` set
    pub fn is_superset_of(&self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    /// True when no bits are set
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw bit representation
    pub fn bits(&self) -> u32 {
        self.0
    }
}

/// ECS runtime errors
#[derive(Error, Debug)]
pub enum EcsError {
    /// Every entity id is live; the fixed capacity is spent
    #[error("entity capacity exhausted ({capacity} live entities)")]
    CapacityExhausted {
        /// The fixed entity capacity of this world
        capacity: usize,
    },
}

/// Allocates and recycles entity handles and tracks per-entity signatures
///
/// Knows nothing about components; signature bits are opaque payload set
/// by the world when components are attached or removed.
pub struct EntityManager {
    free: VecDeque<u32>,
    signatures: Vec<Signature>,
    active: BTreeSet<Entity>,
    capacity: usize,
}

impl EntityManager {
    /// Create a manager with a fixed entity capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            free: (0..capacity as u32).collect(),
            signatures: vec![Signature::EMPTY; capacity],
            active: BTreeSet::new(),
            capacity,
        }
    }

    /// Allocate an entity handle
    ///
    /// Pops the oldest recycled id, resets its signature, and adds it to
    /// the active set. Fails with [`EcsError::CapacityExhausted`] when
    /// every id is live.
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        let id = self.free.pop_front().ok_or(EcsError::CapacityExhausted {
            capacity: self.capacity,
        })?;

        let entity = Entity::new(id);
        self.signatures[id as usize] = Signature::EMPTY;
        self.active.insert(entity);
        Ok(entity)
    }

    /// Release an entity handle back to the free list
    ///
    /// # Panics
    /// Panics if the entity is not alive. Destroying the same handle
    /// twice is a caller contract violation.
    pub fn destroy_entity(&mut self, entity: Entity) {
        assert!(
            self.active.remove(&entity),
            "destroy_entity: entity {} is not alive",
            entity.id()
        );
        self.signatures[entity.id() as usize] = Signature::EMPTY;
        self.free.push_back(entity.id());
    }

    /// Replace an entity's signature
    ///
    /// # Panics
    /// Panics if the entity is not alive.
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) {
        assert!(
            self.active.contains(&entity),
            "set_signature: entity {} is not alive",
            entity.id()
        );
        self.signatures[entity.id() as usize] = signature;
    }

    /// Read an entity's signature
    pub fn signature(&self, entity: Entity) -> Signature {
        self.signatures[entity.id() as usize]
    }

    /// Whether the entity is currently alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.active.contains(&entity)
    }

    /// The ordered set of live entities
    pub fn active_entities(&self) -> &BTreeSet<Entity> {
        &self.active
    }

    /// Number of live entities
    pub fn live_count(&self) -> usize {
        self.active.len()
    }

    /// Fixed entity capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
