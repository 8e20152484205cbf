//! ECS World implementation
//!
//! The facade collaborating subsystems consume: create/destroy entities,
//! attach/detach/query components, register systems, and run them against
//! their live membership sets. All signature bookkeeping and system
//! notification fan-out happens here, so the three managers never drift
//! apart.

use std::collections::BTreeSet;

use log::debug;

use super::component::{Component, ComponentManager, ComponentType};
use super::entity::{EcsError, Entity, EntityManager, Signature, DEFAULT_MAX_ENTITIES};
use super::system::SystemManager;

/// ECS World containing all entities, components, and systems
pub struct World {
    entities: EntityManager,
    components: ComponentManager,
    systems: SystemManager,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a world with the default entity capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTITIES)
    }

    /// Create a world with a fixed entity capacity
    pub fn with_capacity(max_entities: usize) -> Self {
        Self {
            entities: EntityManager::new(max_entities),
            components: ComponentManager::new(),
            systems: SystemManager::new(),
        }
    }

    /// Register a component type, assigning its signature bit
    ///
    /// Must happen once per type before any entity uses it.
    ///
    /// # Panics
    /// Panics on double registration or a spent type capacity.
    pub fn register_component<T: Component>(&mut self) -> ComponentType {
        self.components.register_component::<T>()
    }

    /// Signature bit for a registered component type
    ///
    /// # Panics
    /// Panics if the type was never registered.
    pub fn component_type<T: Component>(&self) -> ComponentType {
        self.components.component_type::<T>()
    }

    /// Create a new entity
    ///
    /// Fails with [`EcsError::CapacityExhausted`] once every id is live.
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        self.entities.create_entity()
    }

    /// Destroy an entity, cascading through systems and component arrays
    ///
    /// # Panics
    /// Panics if the entity is not alive.
    pub fn destroy_entity(&mut self, entity: Entity) {
        self.systems.entity_destroyed(entity);
        self.components.entity_destroyed(entity);
        self.entities.destroy_entity(entity);
        debug!("destroyed entity {}", entity.id());
    }

    /// Attach a component, updating the signature and system membership
    ///
    /// # Panics
    /// Panics on double-add or an unregistered type.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        self.components.insert(entity, component);

        let mut signature = self.entities.signature(entity);
        signature.insert(self.components.component_type::<T>());
        self.entities.set_signature(entity, signature);
        self.systems.entity_signature_changed(entity, signature);
    }

    /// Detach a component, updating the signature and system membership
    ///
    /// # Panics
    /// Panics if the entity lacks the component.
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> T {
        let component = self.components.remove::<T>(entity);

        let mut signature = self.entities.signature(entity);
        signature.remove(self.components.component_type::<T>());
        self.entities.set_signature(entity, signature);
        self.systems.entity_signature_changed(entity, signature);
        component
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.components.try_get::<T>(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.try_get_mut::<T>(entity)
    }

    /// Whether the entity holds a component of this type
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.components.has::<T>(entity)
    }

    /// Borrow the dense array for a component type, for packed iteration
    ///
    /// # Panics
    /// Panics if the type was never registered.
    pub fn component_array<T: Component>(&self) -> &super::component::ComponentArray<T> {
        self.components.array::<T>()
    }

    /// Read an entity's component signature
    pub fn signature(&self, entity: Entity) -> Signature {
        self.entities.signature(entity)
    }

    /// Whether the entity is currently alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// The ordered set of live entities
    pub fn active_entities(&self) -> &BTreeSet<Entity> {
        self.entities.active_entities()
    }

    /// Register a system instance
    ///
    /// # Panics
    /// Panics on double registration.
    pub fn register_system<S: 'static>(&mut self, system: S) {
        self.systems.register_system(system);
    }

    /// Bind a system's required signature and reconcile live entities
    ///
    /// Entities spawned before the binding are re-evaluated immediately,
    /// so registration order does not matter.
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn set_system_signature<S: 'static>(&mut self, signature: Signature) {
        self.systems.set_signature::<S>(signature);
        for &entity in self.entities.active_entities() {
            self.systems
                .entity_signature_changed(entity, self.entities.signature(entity));
        }
    }

    /// The ordered entity set currently matching a system's signature
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn system_entities<S: 'static>(&self) -> &BTreeSet<Entity> {
        self.systems.entities_of::<S>()
    }

    /// Borrow a registered system instance
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn system<S: 'static>(&self) -> &S {
        self.systems.system::<S>()
    }

    /// Mutably borrow a registered system instance
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn system_mut<S: 'static>(&mut self) -> &mut S {
        self.systems.system_mut::<S>()
    }

    /// Run a system against its live membership set
    ///
    /// Hands the closure the system instance, the component manager, and
    /// the system's ordered entity set. The membership set must not be
    /// mutated during the run (systems mutate component data, not entity
    /// lifecycles; spawn/despawn is the caller's job between frames).
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn run_system<S: 'static, R>(
        &mut self,
        f: impl FnOnce(&mut S, &mut ComponentManager, &BTreeSet<Entity>) -> R,
    ) -> R {
        let (system, members) = self.systems.run_context::<S>();
        f(system, &mut self.components, members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position {
        x: f32,
        y: f32,
    }
    impl Component for Position {}

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Speed {
        v: f32,
    }
    impl Component for Speed {}

    struct Mover;

    fn movement_world() -> World {
        let mut world = World::with_capacity(16);
        world.register_component::<Position>();
        world.register_component::<Speed>();
        world.register_system(Mover);
        let signature = Signature::from_types(&[
            world.component_type::<Position>(),
            world.component_type::<Speed>(),
        ]);
        world.set_system_signature::<Mover>(signature);
        world
    }

    #[test]
    fn test_add_component_joins_system() {
        let mut world = movement_world();
        let e = world.create_entity().unwrap();

        world.add_component(e, Position { x: 0.0, y: 0.0 });
        assert!(!world.system_entities::<Mover>().contains(&e));

        world.add_component(e, Speed { v: 2.0 });
        assert!(world.system_entities::<Mover>().contains(&e));
    }

    #[test]
    fn test_remove_component_leaves_system() {
        let mut world = movement_world();
        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 0.0, y: 0.0 });
        world.add_component(e, Speed { v: 2.0 });

        let removed = world.remove_component::<Speed>(e);
        assert_eq!(removed, Speed { v: 2.0 });
        assert!(!world.system_entities::<Mover>().contains(&e));
        assert!(world.has_component::<Position>(e));
    }

    #[test]
    fn test_signature_set_after_spawn_reconciles() {
        let mut world = World::with_capacity(16);
        world.register_component::<Position>();

        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 1.0, y: 1.0 });

        // System registered and bound after the entity already matches
        world.register_system(Mover);
        world.set_system_signature::<Mover>(Signature::from_types(&[
            world.component_type::<Position>(),
        ]));
        assert!(world.system_entities::<Mover>().contains(&e));
    }

    #[test]
    fn test_run_system_sees_members_and_components() {
        let mut world = movement_world();
        let e = world.create_entity().unwrap();
        world.add_component(e, Position { x: 0.0, y: 0.0 });
        world.add_component(e, Speed { v: 3.0 });

        world.run_system::<Mover, ()>(|_, components, members| {
            for &entity in members {
                let v = components.get::<Speed>(entity).v;
                components.get_mut::<Position>(entity).x += v;
            }
        });

        assert_eq!(world.get_component::<Position>(e).unwrap().x, 3.0);
    }
}
