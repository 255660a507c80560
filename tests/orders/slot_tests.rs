//! Month-slot and instant-flag behavior, end to end.

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_orders::{
    ConsumeMode, MonthOrder, MoveOrder, RevealMode, SpoilsFilter, StealthOrder, TaxMode, UnitRef,
};
use veilmarch_parser::{ParsePhase, parse_document};
use veilmarch_world::{Faction, GameConfig, Region, Registries, Unit, World};

fn world_fixture() -> World {
    let mut world = World::new(Registries::standard());
    world.add_region(Region::new(RegionId::new(1), "Cwenfeld"));
    world.add_faction(Faction::new(FactionId::new(2), "The Veiled Court"));
    world.add_unit(Unit::new(UnitId::new(5), FactionId::new(2), RegionId::new(1)));
    world
}

fn submit_with(world: &mut World, source: &str, config: &GameConfig) -> Vec<String> {
    parse_document(world, source, config, ParsePhase::Submit)
}

fn submit(world: &mut World, source: &str) -> Vec<String> {
    submit_with(world, source, &GameConfig::default())
}

fn unit(world: &World, number: u32) -> &Unit {
    world.units.get(&UnitId::new(number)).expect("unit exists")
}

// =============================================================================
// Month-Slot Exclusivity
// =============================================================================

#[test]
fn month_slot_keeps_only_the_last_order() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nwork\nentertain\nmove n\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(
        u.errors,
        vec![
            "Overwriting previous monthlong order.",
            "Overwriting previous monthlong order.",
        ]
    );
    assert!(matches!(u.month, Some(MonthOrder::Move(MoveOrder { advancing: false, .. }))));
}

#[test]
fn tax_is_an_instant_stance_by_default() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\ntax\nwork\n#end\n");
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.tax_mode, TaxMode::Tax);
    assert_eq!(u.month, Some(MonthOrder::Work));
}

#[test]
fn tax_competes_for_the_month_slot_under_the_policy() {
    let mut world = world_fixture();
    let config = GameConfig { month_long_tax_pillage: true, ..GameConfig::default() };
    submit_with(&mut world, "#atlantis 2\nunit 5\ntax\nwork\n#end\n", &config);
    let u = unit(&world, 5);
    assert_eq!(u.errors, vec!["Overwriting previous monthlong order."]);
    assert_eq!(u.month, Some(MonthOrder::Work));
    assert_eq!(u.tax_mode, TaxMode::None);
}

#[test]
fn pillage_fills_the_month_slot_under_the_policy() {
    let mut world = world_fixture();
    let config = GameConfig { month_long_tax_pillage: true, ..GameConfig::default() };
    submit_with(&mut world, "#atlantis 2\nunit 5\npillage\n#end\n", &config);
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.month, Some(MonthOrder::Pillage));
}

#[test]
fn teach_extends_its_own_target_list_instead_of_overwriting() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nteach 10 11\nteach 12\n#end\n");
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    let Some(MonthOrder::Teach(teach)) = &u.month else {
        panic!("expected a teach order, got {:?}", u.month);
    };
    assert_eq!(
        teach.targets,
        vec![
            UnitRef::Existing(UnitId::new(10)),
            UnitRef::Existing(UnitId::new(11)),
            UnitRef::Existing(UnitId::new(12)),
        ]
    );
}

// =============================================================================
// Instant Flags
// =============================================================================

#[test]
fn instant_flags_apply_during_the_parse() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nguard 1\nbehind 1\navoid 1\n#end\n");
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert!(u.flags.avoid);
    assert!(!u.flags.guard);
    assert!(u.flags.behind);
}

#[test]
fn autotax_sets_the_automatic_stance() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nautotax 1\n#end\n");
    assert_eq!(unit(&world, 5).tax_mode, TaxMode::Auto);
}

#[test]
fn mode_flags_parse_their_vocabularies() {
    let mut world = world_fixture();
    submit(
        &mut world,
        "#atlantis 2\nunit 5\nconsume faction\nreveal unit\nspoils ride\n#end\n",
    );
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.flags.consume, ConsumeMode::Faction);
    assert_eq!(u.flags.reveal, RevealMode::Unit);
    assert_eq!(u.flags.spoils, SpoilsFilter::Ride);
}

// =============================================================================
// Single-Slot Orders
// =============================================================================

#[test]
fn stealth_slot_holds_the_last_attempt() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nsteal 10 silver\nassassinate 11\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(
        u.stealth,
        Some(StealthOrder::Assassinate { target: UnitRef::Existing(UnitId::new(11)) })
    );
}

#[test]
fn accumulating_lists_grow_one_entry_per_line() {
    let mut world = world_fixture();
    submit(
        &mut world,
        "#atlantis 2\nunit 5\nattack 10\nattack 11\nevict 12\nforget combat\nfind all\n#end\n",
    );
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.attacks.len(), 2);
    assert_eq!(u.evicts.len(), 1);
    assert_eq!(u.forgets.len(), 1);
    assert_eq!(u.finds.len(), 1);
}
