//! Entity lifecycle and system membership behaviour across the full world

use pixel_engine::prelude::*;

fn build_world() -> World {
    let mut world = World::with_capacity(64);
    world.register_component::<TransformComponent>();
    world.register_component::<VelocityComponent>();
    world.register_component::<RigidbodyComponent>();
    world.register_component::<ColliderComponent>();

    world.register_system(MovementSystem::new());
    world.set_system_signature::<MovementSystem>(Signature::from_types(&[
        world.component_type::<TransformComponent>(),
        world.component_type::<VelocityComponent>(),
    ]));

    world.register_system(CollisionSystem::new(Aabb::from_position_size(
        0.0, 0.0, 2000.0, 1500.0,
    )));
    world.set_system_signature::<CollisionSystem>(Signature::from_types(&[
        world.component_type::<TransformComponent>(),
        world.component_type::<ColliderComponent>(),
    ]));

    world
}

#[test]
fn create_then_destroy_leaves_no_trace() {
    let mut world = build_world();

    let e = world.create_entity().unwrap();
    world.add_component(e, TransformComponent::new(0.0, 0.0, 8.0, 8.0));
    world.add_component(e, VelocityComponent::new(1.0, 0.0));
    world.add_component(e, ColliderComponent::new(8.0, 8.0));

    assert!(world.system_entities::<MovementSystem>().contains(&e));
    assert!(world.system_entities::<CollisionSystem>().contains(&e));

    world.destroy_entity(e);

    assert!(!world.is_alive(e));
    assert!(!world.system_entities::<MovementSystem>().contains(&e));
    assert!(!world.system_entities::<CollisionSystem>().contains(&e));
    assert!(!world.has_component::<TransformComponent>(e));
    assert!(!world.has_component::<VelocityComponent>(e));
    assert!(!world.has_component::<ColliderComponent>(e));

    // The recycled id starts with a clean signature
    let reused = world.create_entity().unwrap();
    assert_eq!(reused.id(), e.id());
    assert!(world.signature(reused).is_empty());
}

#[test]
fn membership_tracks_every_signature_change() {
    let mut world = build_world();
    let e = world.create_entity().unwrap();

    // Build up toward the movement signature one component at a time
    world.add_component(e, TransformComponent::new(0.0, 0.0, 8.0, 8.0));
    assert!(!world.system_entities::<MovementSystem>().contains(&e));

    world.add_component(e, VelocityComponent::default());
    assert!(world.system_entities::<MovementSystem>().contains(&e));
    assert!(!world.system_entities::<CollisionSystem>().contains(&e));

    // A collider adds the second membership without disturbing the first
    world.add_component(e, ColliderComponent::new(8.0, 8.0));
    assert!(world.system_entities::<MovementSystem>().contains(&e));
    assert!(world.system_entities::<CollisionSystem>().contains(&e));

    // Dropping the transform evicts from both
    world.remove_component::<TransformComponent>(e);
    assert!(!world.system_entities::<MovementSystem>().contains(&e));
    assert!(!world.system_entities::<CollisionSystem>().contains(&e));

    // Membership always equals the superset test on the live signature
    world.add_component(e, TransformComponent::new(0.0, 0.0, 8.0, 8.0));
    let movement_members = world.system_entities::<MovementSystem>().contains(&e);
    let required = Signature::from_types(&[
        world.component_type::<TransformComponent>(),
        world.component_type::<VelocityComponent>(),
    ]);
    assert_eq!(movement_members, world.signature(e).is_superset_of(required));
}

#[test]
fn dense_array_stays_packed_under_churn() {
    let mut world = build_world();

    let entities: Vec<Entity> = (0..10)
        .map(|i| {
            let e = world.create_entity().unwrap();
            world.add_component(e, TransformComponent::new(i as f32, 0.0, 1.0, 1.0));
            e
        })
        .collect();

    // Remove a scattering: one explicit removal, two whole destroys
    world.remove_component::<TransformComponent>(entities[2]);
    world.destroy_entity(entities[5]);
    world.destroy_entity(entities[8]);

    let array = world.component_array::<TransformComponent>();
    assert_eq!(array.len(), 7);

    let holders: Vec<Entity> = array.iter().map(|(e, _)| e).collect();
    assert_eq!(holders.len(), 7);
    for (i, &e) in entities.iter().enumerate() {
        let expected = !matches!(i, 2 | 5 | 8);
        assert_eq!(holders.contains(&e), expected, "entity index {i}");
        assert_eq!(array.has(e), expected);
    }
}

#[test]
fn capacity_exhaustion_is_reported_and_recoverable() {
    let mut world = World::with_capacity(2);

    let a = world.create_entity().unwrap();
    let _b = world.create_entity().unwrap();
    assert!(matches!(
        world.create_entity(),
        Err(EcsError::CapacityExhausted { capacity: 2 })
    ));

    // Destruction frees an id for reuse
    world.destroy_entity(a);
    let c = world.create_entity().unwrap();
    assert_eq!(c.id(), a.id());
}

#[test]
fn active_entities_iterate_in_id_order() {
    let mut world = build_world();
    let ids: Vec<Entity> = (0..5).map(|_| world.create_entity().unwrap()).collect();

    world.destroy_entity(ids[1]);
    world.destroy_entity(ids[3]);

    let active: Vec<u32> = world.active_entities().iter().map(Entity::id).collect();
    let mut sorted = active.clone();
    sorted.sort_unstable();
    assert_eq!(active, sorted);
    assert_eq!(active.len(), 3);
}
