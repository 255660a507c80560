//! Faction-section framing across whole documents.

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_orders::MonthOrder;
use veilmarch_parser::{ParsePhase, parse_document};
use veilmarch_world::{Faction, GameConfig, Region, Registries, Unit, World};

fn two_faction_world() -> World {
    let mut world = World::new(Registries::standard());
    world.add_region(Region::new(RegionId::new(1), "Cwenfeld"));

    let mut court = Faction::new(FactionId::new(2), "The Veiled Court");
    court.password = Some("sesame".into());
    world.add_faction(court);
    world.add_faction(Faction::new(FactionId::new(3), "The Marsh League"));

    world.add_unit(Unit::new(UnitId::new(5), FactionId::new(2), RegionId::new(1)));
    world.add_unit(Unit::new(UnitId::new(6), FactionId::new(3), RegionId::new(1)));
    world
}

fn submit(world: &mut World, source: &str) -> Vec<String> {
    parse_document(world, source, &GameConfig::default(), ParsePhase::Submit)
}

fn unit(world: &World, number: u32) -> &Unit {
    world.units.get(&UnitId::new(number)).expect("unit exists")
}

// =============================================================================
// Section Routing
// =============================================================================

#[test]
fn one_document_carries_sections_for_several_factions() {
    let mut world = two_faction_world();
    let orphans = submit(
        &mut world,
        "#atlantis 2 sesame\nunit 5\nwork\n#end\n\
         #atlantis 3\nunit 6\nentertain\n#end\n",
    );
    assert!(orphans.is_empty());
    assert_eq!(unit(&world, 5).month, Some(MonthOrder::Work));
    assert_eq!(unit(&world, 6).month, Some(MonthOrder::Entertain));
}

#[test]
fn a_suppressed_section_does_not_leak_into_the_next() {
    let mut world = two_faction_world();
    submit(
        &mut world,
        "#atlantis 2 wrong\nunit 5\nwork\n#end\n\
         #atlantis 3\nunit 6\nwork\n#end\n",
    );
    assert_eq!(unit(&world, 5).month, None);
    assert_eq!(unit(&world, 6).month, Some(MonthOrder::Work));
    let court = world.factions.get(&FactionId::new(2)).unwrap();
    assert_eq!(court.errors, vec!["#atlantis: Incorrect password."]);
}

#[test]
fn a_faction_without_a_password_accepts_any_candidate() {
    let mut world = two_faction_world();
    submit(&mut world, "#atlantis 3 whatever\nunit 6\nwork\n#end\n");
    assert_eq!(unit(&world, 6).month, Some(MonthOrder::Work));
}

#[test]
fn lines_outside_any_section_are_orphaned() {
    let mut world = two_faction_world();
    let orphans = submit(&mut world, "work\nunit 5\n");
    assert_eq!(
        orphans,
        vec![
            "Order given without a faction selected.",
            "Order given without a faction selected.",
        ]
    );
    assert_eq!(unit(&world, 5).month, None);
}

#[test]
fn a_unit_cannot_be_driven_from_a_rival_section() {
    let mut world = two_faction_world();
    submit(&mut world, "#atlantis 3\nunit 5\nwork\n#end\n");
    assert_eq!(unit(&world, 5).month, None);
    let league = world.factions.get(&FactionId::new(3)).unwrap();
    assert_eq!(
        league.errors,
        vec!["UNIT: Not your unit.", "Order given without a unit selected."]
    );
}

// =============================================================================
// Comments and Blank Lines
// =============================================================================

#[test]
fn comments_and_blank_lines_carry_no_orders() {
    let mut world = two_faction_world();
    let orphans = submit(
        &mut world,
        "#atlantis 2 sesame\nunit 5\n; the garrison stays put\n\nwork\n#end\n",
    );
    assert!(orphans.is_empty());
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.month, Some(MonthOrder::Work));
}

#[test]
fn a_trailing_comment_does_not_extend_the_order() {
    let mut world = two_faction_world();
    submit(&mut world, "#atlantis 2 sesame\nunit 5\nwork ; hold the line\n#end\n");
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.month, Some(MonthOrder::Work));
}

// =============================================================================
// Missing Section Close
// =============================================================================

#[test]
fn end_of_document_closes_the_section_implicitly() {
    let mut world = two_faction_world();
    let orphans = submit(&mut world, "#atlantis 2 sesame\nunit 5\nwork\n");
    assert!(orphans.is_empty());
    assert_eq!(unit(&world, 5).month, Some(MonthOrder::Work));
    assert!(unit(&world, 5).errors.is_empty());
}
