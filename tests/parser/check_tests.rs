//! Check mode: the echo report and its agreement with commit mode.

use proptest::prelude::*;

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_parser::{CheckReport, ParsePhase, check_document, parse_document};
use veilmarch_world::{Faction, GameConfig, Region, Registries, Unit, World};

fn check(source: &str) -> CheckReport {
    check_document(source, &Registries::standard(), &GameConfig::default())
}

fn world_fixture() -> World {
    let mut world = World::new(Registries::standard());
    world.add_region(Region::new(RegionId::new(1), "Cwenfeld"));
    world.add_faction(Faction::new(FactionId::new(2), "The Veiled Court"));
    world.add_unit(Unit::new(UnitId::new(5), FactionId::new(2), RegionId::new(1)));
    world
}

// =============================================================================
// Report Shape
// =============================================================================

#[test]
fn every_line_is_echoed_in_order() {
    let report = check("#atlantis 2\nunit 5\nwork\n; note\n#end\n");
    assert!(report.is_clean(), "{}", report.text);
    let echo: Vec<&str> = report.text.lines().take(5).collect();
    assert_eq!(echo, vec!["#atlantis 2", "unit 5", "work", "; note", "#end"]);
}

#[test]
fn nested_blocks_indent_the_echo() {
    let report = check("#atlantis 2\nunit 5\nform 1\nform 2\nwork\nend\nend\n#end\n");
    assert!(report.is_clean(), "{}", report.text);
    assert!(report.text.contains("\nform 1\n"));
    assert!(report.text.contains("\n  form 2\n"));
    assert!(report.text.contains("\n    work\n"));
    assert!(report.text.contains("\n  end\n"));
    assert!(report.text.contains("\nend\n"));
}

#[test]
fn error_banners_interleave_with_the_echo() {
    let report = check("#atlantis 2\nunit 5\nmove n up\n#end\n");
    assert_eq!(report.errors, 1);
    assert!(report.text.contains("move n up\n\n\n*** Error: MOVE: Non-existent direction. ***\n"));
    assert!(report.text.ends_with("1 error(s) found!\n"));
}

#[test]
fn the_summary_counts_every_error() {
    let report = check("#atlantis 2\nunit 5\nfly\nbuy\nwork\n#end\n");
    assert_eq!(report.errors, 2);
    assert!(report.text.contains("fly is not a valid order."));
    assert!(report.text.contains("BUY: No amount given."));
    assert!(report.text.ends_with("2 error(s) found!\n"));
}

#[test]
fn show_requests_are_capped() {
    let mut source = String::from("#atlantis 2\nunit 5\n");
    for _ in 0..150 {
        source.push_str("show item sword\n");
    }
    source.push_str("#end\n");
    let report = check(&source);
    assert_eq!(report.errors, 1);
    assert!(report.text.contains("Too many SHOW orders."));
}

// =============================================================================
// Mode Agreement
// =============================================================================

#[test]
fn check_mode_accepts_any_password() {
    let mut world = world_fixture();
    world.factions.get_mut(&FactionId::new(2)).unwrap().password = Some("sesame".into());

    let source = "#atlantis 2 guess\nunit 5\nwork\n#end\n";
    let report = check(source);
    assert!(report.is_clean(), "{}", report.text);

    parse_document(&mut world, source, &GameConfig::default(), ParsePhase::Submit);
    assert_eq!(world.units.get(&UnitId::new(5)).unwrap().month, None);
}

#[test]
fn a_clean_check_predicts_a_clean_commit() {
    let source = "#atlantis 2\nunit 5\n@work\nbehind 1\nform 1\nbuy all horses\nend\n\
                  turn\nmove n ne\nendturn\n#end\n";
    let report = check(source);
    assert!(report.is_clean(), "{}", report.text);

    let mut world = world_fixture();
    let orphans = parse_document(&mut world, source, &GameConfig::default(), ParsePhase::Submit);
    assert!(orphans.is_empty());
    for unit in world.units.values() {
        assert!(unit.errors.is_empty(), "{:?}", unit.errors);
    }
    for faction in world.factions.values() {
        assert!(faction.errors.is_empty(), "{:?}", faction.errors);
    }
}

#[test]
fn both_modes_reject_the_same_grammar_errors() {
    let source = "#atlantis 2\nunit 5\nfly\ngive\nmove\n#end\n";
    let report = check(source);
    assert_eq!(report.errors, 3);

    let mut world = world_fixture();
    parse_document(&mut world, source, &GameConfig::default(), ParsePhase::Submit);
    let unit = world.units.get(&UnitId::new(5)).unwrap();
    assert_eq!(
        unit.errors,
        vec![
            "fly is not a valid order.",
            "GIVE: No target given.",
            "MOVE: No directions given.",
        ]
    );
}

#[test]
fn turn_blocks_are_grammar_checked_but_not_applied() {
    // A delayed overwrite is only a warning for the deferred slot; the
    // outer month order survives the block.
    let report = check("#atlantis 2\nunit 5\nwork\nturn\nentertain\nwork\nendturn\nmove n\n#end\n");
    assert_eq!(report.errors, 2);
    assert!(report.text.contains("Overwriting previous DELAYED monthlong order."));
    assert!(report.text.contains("Overwriting previous monthlong order."));
}

// =============================================================================
// Robustness
// =============================================================================

proptest! {
    #[test]
    fn the_error_count_matches_the_banners(doc in "[ -~\n]{0,400}") {
        let report = check(&doc);
        let banners = report.text.matches("*** Error: ").count();
        prop_assert_eq!(report.errors as usize, banners);
    }

    #[test]
    fn both_modes_accept_arbitrary_input(doc in "[ -~\n]{0,400}") {
        let _ = check(&doc);
        let mut world = world_fixture();
        let _ = parse_document(&mut world, &doc, &GameConfig::default(), ParsePhase::Submit);
        let _ = parse_document(&mut world, &doc, &GameConfig::default(), ParsePhase::Replay);
    }
}
