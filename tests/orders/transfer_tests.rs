//! Transfer, trade, and shipment payloads, end to end.

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_orders::{
    GivePayload, ItemClass, ItemSpec, TradeAmount, TransferKind, UnitRef,
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
// GIVE / TAKE
// =============================================================================

#[test]
fn give_payload_forms() {
    let mut world = world_fixture();
    let silver = world.registries.items.find("silver").unwrap();
    submit(
        &mut world,
        "#atlantis 2\nunit 5\n\
         give 10 200 silver\n\
         give 0 5 swords\n\
         give 10 all weapons\n\
         give 10 all silver except 50\n\
         take from 12 10 silver\n\
         #end\n",
    );
    let u = unit(&world, 5);
    assert!(u.errors.is_empty(), "{:?}", u.errors);
    assert_eq!(u.gives.len(), 5);

    assert_eq!(u.gives[0].target, UnitRef::Existing(UnitId::new(10)));
    assert_eq!(u.gives[0].payload, GivePayload::Amount { count: 200, item: silver });

    assert_eq!(u.gives[1].target, UnitRef::None);

    assert_eq!(
        u.gives[2].payload,
        GivePayload::All { spec: ItemSpec::Class(ItemClass::Weapon), except: None }
    );

    assert_eq!(
        u.gives[3].payload,
        GivePayload::All { spec: ItemSpec::Item(silver), except: Some(50) }
    );

    assert_eq!(u.gives[4].kind, TransferKind::Take);
    assert_eq!(u.gives[4].target, UnitRef::Existing(UnitId::new(12)));
}

#[test]
fn give_unit_transfers_the_whole_unit() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\ngive 10 unit\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.gives[0].payload, GivePayload::WholeUnit);
}

#[test]
fn unfinished_qualifier_needs_an_unfinished_form() {
    let mut world = world_fixture();
    let longboat = world.registries.items.find("longboat").unwrap();
    submit(
        &mut world,
        "#atlantis 2\nunit 5\ngive 10 1 unfinished longboat\ngive 10 5 unfinished sword\n#end\n",
    );
    let u = unit(&world, 5);
    assert_eq!(u.errors, vec!["GIVE: Item has no unfinished form."]);
    assert_eq!(u.gives.len(), 1);
    assert!(u.gives[0].unfinished);
    assert_eq!(u.gives[0].payload, GivePayload::Amount { count: 1, item: longboat });
}

#[test]
fn malformed_transfers_report_and_attach_nothing() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\ngive 10\ntake 12 10 silver\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.errors, vec!["GIVE: No amount given.", "TAKE: Expected FROM."]);
    assert!(u.gives.is_empty());
}

// =============================================================================
// BUY / SELL / WITHDRAW
// =============================================================================

#[test]
fn buy_and_sell_amounts() {
    let mut world = world_fixture();
    let horse = world.registries.items.find("horse").unwrap();
    let fish = world.registries.items.find("fish").unwrap();
    submit(&mut world, "#atlantis 2\nunit 5\nbuy all horses\nsell 3 fish\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.buys.len(), 1);
    assert_eq!(u.buys[0].amount, TradeAmount::All);
    assert_eq!(u.buys[0].item, horse);
    assert_eq!(u.sells.len(), 1);
    assert_eq!(u.sells[0].amount, TradeAmount::Count(3));
    assert_eq!(u.sells[0].item, fish);
}

#[test]
fn withdraw_amount_defaults_to_one() {
    let mut world = world_fixture();
    submit(&mut world, "#atlantis 2\nunit 5\nwithdraw iron\nwithdraw 20 iron\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.withdraws.len(), 2);
    assert_eq!(u.withdraws[0].amount, 1);
    assert_eq!(u.withdraws[1].amount, 20);
}

#[test]
fn withdraw_respects_the_rule_switch() {
    let mut world = world_fixture();
    let config = GameConfig { allow_withdraw: false, ..GameConfig::default() };
    submit_with(&mut world, "#atlantis 2\nunit 5\nwithdraw 20 iron\n#end\n", &config);
    let u = unit(&world, 5);
    assert_eq!(u.errors, vec!["WITHDRAW: Withdraw is not allowed."]);
    assert!(u.withdraws.is_empty());
}

// =============================================================================
// TRANSPORT / DISTRIBUTE / EXCHANGE
// =============================================================================

#[test]
fn transport_and_distribute_payloads() {
    let mut world = world_fixture();
    let iron = world.registries.items.find("iron").unwrap();
    let grain = world.registries.items.find("grain").unwrap();
    submit(
        &mut world,
        "#atlantis 2\nunit 5\ntransport 9 all iron except 2\ndistribute 9 5 grain\n#end\n",
    );
    let u = unit(&world, 5);
    assert!(u.errors.is_empty(), "{:?}", u.errors);
    assert_eq!(u.transports.len(), 2);

    assert_eq!(u.transports[0].amount, TradeAmount::All);
    assert_eq!(u.transports[0].item, iron);
    assert_eq!(u.transports[0].except, Some(2));
    assert!(!u.transports[0].distribute);

    assert_eq!(u.transports[1].amount, TradeAmount::Count(5));
    assert_eq!(u.transports[1].item, grain);
    assert!(u.transports[1].distribute);
}

#[test]
fn transport_respects_the_rule_switch() {
    let mut world = world_fixture();
    let config = GameConfig { allow_transport: false, ..GameConfig::default() };
    submit_with(&mut world, "#atlantis 2\nunit 5\ntransport 9 5 iron\n#end\n", &config);
    let u = unit(&world, 5);
    assert_eq!(u.errors, vec!["TRANSPORT: Transport is not allowed."]);
    assert!(u.transports.is_empty());
}

#[test]
fn exchange_records_both_sides_of_the_swap() {
    let mut world = world_fixture();
    let silver = world.registries.items.find("silver").unwrap();
    let sword = world.registries.items.find("sword").unwrap();
    submit(&mut world, "#atlantis 2\nunit 5\nexchange 9 100 silver 1 sword\n#end\n");
    let u = unit(&world, 5);
    assert_eq!(u.exchanges.len(), 1);
    let ex = &u.exchanges[0];
    assert_eq!(ex.target, UnitRef::Existing(UnitId::new(9)));
    assert_eq!(ex.give_amount, 100);
    assert_eq!(ex.give_item, silver);
    assert_eq!(ex.expect_amount, 1);
    assert_eq!(ex.expect_item, sword);
}

#[test]
fn claim_draws_on_the_faction_pool() {
    let mut world = world_fixture();
    world.factions.get_mut(&FactionId::new(2)).unwrap().unclaimed = 500;
    submit(&mut world, "#atlantis 2\nunit 5\nclaim 200\n#end\n");
    let u = unit(&world, 5);
    assert!(u.errors.is_empty());
    assert_eq!(u.claimed, 200);
    assert_eq!(world.factions.get(&FactionId::new(2)).unwrap().unclaimed, 300);
}
