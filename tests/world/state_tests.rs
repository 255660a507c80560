//! Mutable world state: allocator, aliases, passwords, snapshots.

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_orders::Attitude;
use veilmarch_world::{Faction, Region, Registries, Unit, World};

fn world_fixture() -> World {
    let mut world = World::new(Registries::standard());
    world.add_region(Region::new(RegionId::new(1), "Cwenfeld"));
    world.add_faction(Faction::new(FactionId::new(2), "The Veiled Court"));
    world.add_unit(Unit::new(UnitId::new(5), FactionId::new(2), RegionId::new(1)));
    world
}

// =============================================================================
// Unit-Number Allocator
// =============================================================================

#[test]
fn allocator_never_reissues_an_existing_number() {
    let mut world = world_fixture();
    world.add_unit(Unit::new(UnitId::new(40), FactionId::new(2), RegionId::new(1)));
    let fresh = world.allocate_unit_id();
    assert!(fresh.value() > 40);
    let next = world.allocate_unit_id();
    assert!(next.value() > fresh.value());
}

// =============================================================================
// FORM Aliases
// =============================================================================

#[test]
fn aliases_are_scoped_per_faction() {
    let mut world = world_fixture();
    world.register_alias(FactionId::new(2), 1, UnitId::new(50));
    world.register_alias(FactionId::new(3), 1, UnitId::new(60));

    assert_eq!(world.unit_by_alias(FactionId::new(2), 1), Some(UnitId::new(50)));
    assert_eq!(world.unit_by_alias(FactionId::new(3), 1), Some(UnitId::new(60)));
    assert_eq!(world.unit_by_alias(FactionId::new(2), 9), None);
}

#[test]
fn a_later_alias_shadows_the_earlier_one() {
    let mut world = world_fixture();
    world.register_alias(FactionId::new(2), 1, UnitId::new(50));
    world.register_alias(FactionId::new(2), 1, UnitId::new(51));
    assert_eq!(world.unit_by_alias(FactionId::new(2), 1), Some(UnitId::new(51)));
}

#[test]
fn clearing_aliases_forgets_them_all() {
    let mut world = world_fixture();
    world.register_alias(FactionId::new(2), 1, UnitId::new(50));
    world.clear_aliases();
    assert_eq!(world.unit_by_alias(FactionId::new(2), 1), None);
}

// =============================================================================
// Passwords and Attitudes
// =============================================================================

#[test]
fn unset_password_accepts_any_candidate() {
    let faction = Faction::new(FactionId::new(2), "Open Gates");
    assert!(faction.password_matches(None));
    assert!(faction.password_matches(Some("anything")));
}

#[test]
fn set_password_requires_an_exact_match() {
    let mut faction = Faction::new(FactionId::new(2), "Locked Gates");
    faction.password = Some("sesame".into());
    assert!(faction.password_matches(Some("sesame")));
    assert!(!faction.password_matches(Some("SESAME")));
    assert!(!faction.password_matches(None));
}

#[test]
fn attitudes_fall_back_to_the_default() {
    let mut faction = Faction::new(FactionId::new(2), "The Veiled Court");
    faction.default_attitude = Attitude::Unfriendly;
    faction.declare(FactionId::new(7), Some(Attitude::Ally));

    assert_eq!(faction.attitude_toward(FactionId::new(7)), Attitude::Ally);
    assert_eq!(faction.attitude_toward(FactionId::new(8)), Attitude::Unfriendly);

    faction.declare(FactionId::new(7), None);
    assert_eq!(faction.attitude_toward(FactionId::new(7)), Attitude::Unfriendly);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn snapshots_are_independent_of_later_mutation() {
    let mut world = world_fixture();
    let snapshot = world.clone();
    assert_eq!(world, snapshot);

    world.units.get_mut(&UnitId::new(5)).unwrap().error("something happened");
    assert_ne!(world, snapshot);
    assert!(snapshot.units.get(&UnitId::new(5)).unwrap().errors.is_empty());
}

#[test]
fn npc_factions_are_recognized_by_role_or_flag() {
    let mut world = world_fixture();
    let mut guards = Faction::new(FactionId::new(9), "The Watch");
    guards.npc = true;
    world.add_faction(guards);
    world.guard_faction = Some(FactionId::new(10));

    assert!(world.is_npc_faction(FactionId::new(10)));
    assert!(!world.is_npc_faction(FactionId::new(2)));
    assert!(world.factions.get(&FactionId::new(9)).unwrap().npc);
}
