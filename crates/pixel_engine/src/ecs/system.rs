//! System registration and signature-driven membership maintenance

use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeSet, HashMap};

use log::trace;

use super::entity::{Entity, Signature};

struct SystemEntry {
    signature: Signature,
    entities: BTreeSet<Entity>,
    system: Box<dyn Any>,
    name: &'static str,
}

/// Owns one system instance per registered type and keeps each system's
/// entity set consistent with the entities' component signatures
///
/// [`SystemManager::entity_signature_changed`] is the single
/// synchronization point: it must be invoked after every operation that
/// changes an entity's signature, and it alone decides membership. Entity
/// sets are ordered so systems iterate deterministically.
pub struct SystemManager {
    entries: HashMap<TypeId, SystemEntry>,
}

impl Default for SystemManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a system instance
    ///
    /// The system starts with an empty required signature, so it matches
    /// every entity until [`SystemManager::set_signature`] is called.
    ///
    /// # Panics
    /// Panics if a system of this type is already registered.
    pub fn register_system<S: 'static>(&mut self, system: S) {
        let type_id = TypeId::of::<S>();
        assert!(
            !self.entries.contains_key(&type_id),
            "register_system: {} is already registered",
            type_name::<S>()
        );

        self.entries.insert(
            type_id,
            SystemEntry {
                signature: Signature::EMPTY,
                entities: BTreeSet::new(),
                system: Box::new(system),
                name: type_name::<S>(),
            },
        );
        trace!("registered system {}", type_name::<S>());
    }

    /// Bind the required component signature for a system
    ///
    /// Membership for already-live entities is the caller's concern (the
    /// world re-runs the signature-changed notification after binding).
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn set_signature<S: 'static>(&mut self, signature: Signature) {
        self.entry_mut::<S>().signature = signature;
    }

    /// Reconcile every system's entity set against a new signature
    ///
    /// Superset of the required signature means membership; anything else
    /// means eviction. Idempotent.
    pub fn entity_signature_changed(&mut self, entity: Entity, signature: Signature) {
        for entry in self.entries.values_mut() {
            if signature.is_superset_of(entry.signature) {
                entry.entities.insert(entity);
            } else {
                entry.entities.remove(&entity);
            }
        }
    }

    /// Evict an entity from every system unconditionally
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for entry in self.entries.values_mut() {
            entry.entities.remove(&entity);
        }
    }

    /// The ordered entity set currently matching a system's signature
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn entities_of<S: 'static>(&self) -> &BTreeSet<Entity> {
        &self.entry::<S>().entities
    }

    /// The required signature bound to a system
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn signature_of<S: 'static>(&self) -> Signature {
        self.entry::<S>().signature
    }

    /// Borrow a registered system instance
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn system<S: 'static>(&self) -> &S {
        self.entry::<S>()
            .system
            .downcast_ref::<S>()
            .expect("system instance type mismatch")
    }

    /// Mutably borrow a registered system instance
    ///
    /// # Panics
    /// Panics if the system is not registered.
    pub fn system_mut<S: 'static>(&mut self) -> &mut S {
        self.entry_mut::<S>()
            .system
            .downcast_mut::<S>()
            .expect("system instance type mismatch")
    }

    /// Split-borrow a system instance together with its entity set
    pub(crate) fn run_context<S: 'static>(&mut self) -> (&mut S, &BTreeSet<Entity>) {
        let entry = self
            .entries
            .get_mut(&TypeId::of::<S>())
            .unwrap_or_else(|| panic!("run_context: {} is not registered", type_name::<S>()));
        let system = entry
            .system
            .downcast_mut::<S>()
            .expect("system instance type mismatch");
        (system, &entry.entities)
    }

    fn entry<S: 'static>(&self) -> &SystemEntry {
        self.entries
            .get(&TypeId::of::<S>())
            .unwrap_or_else(|| panic!("system {} is not registered", type_name::<S>()))
    }

    fn entry_mut<S: 'static>(&mut self) -> &mut SystemEntry {
        self.entries
            .get_mut(&TypeId::of::<S>())
            .unwrap_or_else(|| panic!("system {} is not registered", type_name::<S>()))
    }

    /// Names of all registered systems, for diagnostics
    pub fn system_names(&self) -> Vec<&'static str> {
        self.entries.values().map(|e| e.name).collect()
    }
}
