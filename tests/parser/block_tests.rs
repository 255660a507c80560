//! FORM chains, TURN capture and replay, and repeat templates.

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_orders::{GivePayload, MonthOrder, UnitRef};
use veilmarch_parser::{ParsePhase, parse_document};
use veilmarch_world::{Faction, GameConfig, Region, Registries, Unit, World};

fn world_fixture() -> World {
    let mut world = World::new(Registries::standard());
    world.add_region(Region::new(RegionId::new(1), "Cwenfeld"));
    world.add_faction(Faction::new(FactionId::new(2), "The Veiled Court"));
    world.add_unit(Unit::new(UnitId::new(5), FactionId::new(2), RegionId::new(1)));
    world
}

fn submit(world: &mut World, source: &str) -> Vec<String> {
    parse_document(world, source, &GameConfig::default(), ParsePhase::Submit)
}

fn unit(world: &World, number: u32) -> &Unit {
    world.units.get(&UnitId::new(number)).expect("unit exists")
}

// =============================================================================
// FORM Chains
// =============================================================================

#[test]
fn formed_units_inherit_faction_and_region() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nform 1\nstudy comb\nend\n#end\n");
    let formed = unit(&world, 6);
    assert_eq!(formed.faction, FactionId::new(2));
    assert_eq!(formed.region, RegionId::new(1));
    assert_eq!(formed.alias, 1);
    assert_eq!(formed.former, Some(UnitId::new(5)));
    assert!(matches!(formed.month, Some(MonthOrder::Study(_))));
}

#[test]
fn end_returns_control_to_the_forming_unit() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nform 1\nentertain\nend\nwork\n#end\n");
    assert_eq!(unit(&world, 6).month, Some(MonthOrder::Entertain));
    assert_eq!(unit(&world, 5).month, Some(MonthOrder::Work));
}

#[test]
fn endform_closes_a_form_like_end() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nform 1\nwork\nendform\nentertain\n#end\n");
    assert_eq!(unit(&world, 6).month, Some(MonthOrder::Work));
    assert_eq!(unit(&world, 5).month, Some(MonthOrder::Entertain));
}

#[test]
fn sibling_orders_can_name_a_formed_unit_by_alias() {
    let mut world = world_fixture();
    submit(
        &mut world,
        "#atlantis 2\nunit 5\nform 1\nstudy comb\nend\ngive new 1 100 silver\n#end\n",
    );
    let u = unit(&world, 5);
    assert!(u.errors.is_empty(), "{:?}", u.errors);
    assert_eq!(u.gives.len(), 1);
    assert_eq!(u.gives[0].target, UnitRef::New { faction: None, alias: 1 });
    assert!(matches!(u.gives[0].payload, GivePayload::Amount { count: 100, .. }));
    assert_eq!(world.unit_by_alias(FactionId::new(2), 1), Some(UnitId::new(6)));
}

#[test]
fn a_new_unit_line_abandons_the_open_chain() {
    let mut world = world_fixture();
    world.add_unit(Unit::new(UnitId::new(9), FactionId::new(2), RegionId::new(1)));
    submit(&mut world, "#atlantis 2\nunit 5\nform 1\nwork\nunit 9\nentertain\n#end\n");
    assert_eq!(unit(&world, 6).errors, vec!["FORM: without END."]);
    assert_eq!(unit(&world, 6).month, Some(MonthOrder::Work));
    assert_eq!(unit(&world, 9).month, Some(MonthOrder::Entertain));
}

// =============================================================================
// TURN Blocks
// =============================================================================

#[test]
fn a_turn_block_defers_its_body() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nturn\nwork\nbuy all horses\nendturn\n#end\n");
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.month, None);
    assert!(u.buys.is_empty());
    assert_eq!(u.turn_blocks.len(), 1);
    assert_eq!(u.turn_blocks[0].lines, vec!["work", "buy all horses"]);
}

#[test]
fn a_captured_block_replays_in_a_later_feed() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nturn\nwork\nbuy all horses\nendturn\n#end\n");

    // The resolution engine wraps the stored batch back into a section
    // and re-feeds it in the replay phase.
    let block = unit(&world, 5).turn_blocks[0].clone();
    let replay = format!("#atlantis 2\nunit 5\nturn\n{}\nendturn\n#end\n", block.lines.join("\n"));
    parse_document(&mut world, &replay, &GameConfig::default(), ParsePhase::Replay);

    let u = unit(&world, 5);
    assert_eq!(u.month, Some(MonthOrder::Work));
    assert_eq!(u.buys.len(), 1);
}

#[test]
fn form_inside_a_turn_block_happens_only_on_replay() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nturn\nform 2\nwork\nend\nendturn\n#end\n");
    assert!(world.units.get(&UnitId::new(6)).is_none());

    let block = unit(&world, 5).turn_blocks[0].clone();
    let replay = format!("#atlantis 2\nunit 5\nturn\n{}\nendturn\n#end\n", block.lines.join("\n"));
    parse_document(&mut world, &replay, &GameConfig::default(), ParsePhase::Replay);

    let formed = unit(&world, 6);
    assert_eq!(formed.alias, 2);
    assert_eq!(formed.month, Some(MonthOrder::Work));
}

#[test]
fn an_unclosed_turn_block_is_reported_at_section_close() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nturn\nwork\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.errors, vec!["TURN: without ENDTURN."]);
    assert_eq!(u.turn_blocks.len(), 1);
    assert_eq!(u.turn_blocks[0].lines, vec!["work"]);
}

// =============================================================================
// Repeat Templates
// =============================================================================

#[test]
fn repeat_marked_lines_land_in_the_template() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\n@work\nbehind 1\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.template_lines, vec![" work"]);
    assert_eq!(u.month, Some(MonthOrder::Work));
    assert!(u.flags.behind);
}

#[test]
fn at_form_echoes_the_whole_block_into_the_parent() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\n@form 4\nstudy comb\nend\n#end\n");
    assert_eq!(unit(&world, 5).template_lines, vec![" form 4", "study comb", "end"]);
    assert!(unit(&world, 6).forming_template);
}

#[test]
fn at_turn_flags_the_batch_as_repeating() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\n@turn\nwork\nendturn\nturn\nentertain\nendturn\n#end\n");
    let blocks = &unit(&world, 5).turn_blocks;
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].repeating);
    assert!(!blocks[1].repeating);
}
