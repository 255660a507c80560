//! Registry lookups across the standard rulebook.

use veilmarch_orders::ItemClass;
use veilmarch_world::Registries;
use veilmarch_world::registry::normalize;

// =============================================================================
// Name Folding
// =============================================================================

#[test]
fn normalize_folds_case_and_underscores() {
    assert_eq!(normalize("Chain_Armor"), "chain armor");
    assert_eq!(normalize("COMBAT"), "combat");
    assert_eq!(normalize("fish"), "fish");
}

#[test]
fn item_lookup_accepts_name_plural_and_abbreviation() {
    let regs = Registries::standard();
    let sword = regs.items.find("sword").unwrap();
    assert_eq!(regs.items.find("swords"), Some(sword));
    assert_eq!(regs.items.find("SWOR"), Some(sword));
    assert_eq!(regs.items.find("chain_armor"), regs.items.find("CHAIN ARMOR"));
}

#[test]
fn skill_lookup_accepts_abbreviations() {
    let regs = Registries::standard();
    let combat = regs.skills.find("combat").unwrap();
    assert_eq!(regs.skills.find("comb"), Some(combat));
    assert_eq!(regs.skills.find("COMBAT"), Some(combat));
}

#[test]
fn structure_lookup_finds_the_standard_kinds() {
    let regs = Registries::standard();
    assert!(regs.structures.find("tower").is_some());
    assert!(regs.structures.find("no such thing").is_none());
}

// =============================================================================
// Definition Properties
// =============================================================================

#[test]
fn disabled_items_are_invisible_to_lookup() {
    let regs = Registries::standard();
    assert_eq!(regs.items.find("mithril"), None);
}

#[test]
fn producible_items_name_their_skill() {
    let regs = Registries::standard();
    let iron = regs.items.find("iron").unwrap();
    let mining = regs.skills.find("mining").unwrap();
    assert_eq!(regs.items.get(iron).unwrap().produce_skill, Some(mining));

    let leader = regs.items.find("leader").unwrap();
    assert_eq!(regs.items.get(leader).unwrap().produce_skill, None);
}

#[test]
fn men_and_ships_are_not_transportable() {
    let regs = Registries::standard();
    let peasant = regs.items.find("peasant").unwrap();
    let longboat = regs.items.find("longboat").unwrap();
    let iron = regs.items.find("iron").unwrap();
    assert!(!regs.items.get(peasant).unwrap().class.transportable());
    assert!(!regs.items.get(longboat).unwrap().class.transportable());
    assert!(regs.items.get(iron).unwrap().class.transportable());
}

#[test]
fn ships_carry_their_classification() {
    let regs = Registries::standard();
    let balloon = regs.items.find("balloon").unwrap();
    let def = regs.items.get(balloon).unwrap();
    assert_eq!(def.class, ItemClass::Ship);
    assert!(def.can_fly);
    assert!(def.has_unfinished);
}
