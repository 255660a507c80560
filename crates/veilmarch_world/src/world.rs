//! The world aggregate.
//!
//! Factions, units, and regions live in persistent `OrdMap` collections
//! keyed by their numeric ids; cloning a `World` is cheap structural
//! sharing, which is what lets tests snapshot the world around a
//! validation pass and compare for equality.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use im::OrdMap;

use veilmarch_foundation::{Error, FactionId, RegionId, Result, UnitId};

use crate::faction::Faction;
use crate::region::Region;
use crate::registry::Registries;
use crate::unit::Unit;

/// The mutable game world, as far as the order interpreter cares.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// Current turn number; zero before the first turn runs.
    pub turn: u32,
    /// All factions, by number.
    pub factions: OrdMap<FactionId, Faction>,
    /// All units, by number. Unit numbers are globally unique.
    pub units: OrdMap<UnitId, Unit>,
    /// All regions, by number.
    pub regions: OrdMap<RegionId, Region>,
    /// Static game data.
    pub registries: Registries,
    /// The built-in guard faction, if the scenario has one.
    pub guard_faction: Option<FactionId>,
    /// The built-in monster faction, if the scenario has one.
    pub monster_faction: Option<FactionId>,
    /// FORM aliases registered this parse, scoped per faction.
    aliases: OrdMap<(FactionId, u32), UnitId>,
    /// Next unit number to hand out.
    next_unit: u32,
}

impl World {
    /// Creates an empty world over the given registries.
    #[must_use]
    pub fn new(registries: Registries) -> Self {
        Self {
            turn: 0,
            factions: OrdMap::new(),
            units: OrdMap::new(),
            regions: OrdMap::new(),
            registries,
            guard_faction: None,
            monster_faction: None,
            aliases: OrdMap::new(),
            next_unit: 1,
        }
    }

    /// Looks up a faction.
    pub fn faction(&self, id: FactionId) -> Result<&Faction> {
        self.factions.get(&id).ok_or_else(|| Error::faction_not_found(id))
    }

    /// Looks up a faction mutably.
    pub fn faction_mut(&mut self, id: FactionId) -> Result<&mut Faction> {
        self.factions.get_mut(&id).ok_or_else(|| Error::faction_not_found(id))
    }

    /// Looks up a unit.
    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(&id).ok_or_else(|| Error::unit_not_found(id))
    }

    /// Looks up a unit mutably.
    pub fn unit_mut(&mut self, id: UnitId) -> Result<&mut Unit> {
        self.units.get_mut(&id).ok_or_else(|| Error::unit_not_found(id))
    }

    /// Looks up a region.
    pub fn region(&self, id: RegionId) -> Result<&Region> {
        self.regions.get(&id).ok_or_else(|| Error::region_not_found(id))
    }

    /// Looks up a region mutably.
    pub fn region_mut(&mut self, id: RegionId) -> Result<&mut Region> {
        self.regions.get_mut(&id).ok_or_else(|| Error::region_not_found(id))
    }

    /// Inserts a faction, replacing any previous one with the same id.
    pub fn add_faction(&mut self, faction: Faction) {
        self.factions.insert(faction.id, faction);
    }

    /// Inserts a unit, replacing any previous one with the same id, and
    /// keeps the allocator ahead of it.
    pub fn add_unit(&mut self, unit: Unit) {
        if unit.id.value() >= self.next_unit {
            self.next_unit = unit.id.value() + 1;
        }
        self.units.insert(unit.id, unit);
    }

    /// Inserts a region, replacing any previous one with the same id.
    pub fn add_region(&mut self, region: Region) {
        self.regions.insert(region.id, region);
    }

    /// Hands out a fresh unit number.
    pub fn allocate_unit_id(&mut self) -> UnitId {
        let id = UnitId::new(self.next_unit);
        self.next_unit += 1;
        id
    }

    /// Registers a FORM alias for a unit formed this parse. A later alias
    /// for the same (faction, alias) pair replaces the earlier one.
    pub fn register_alias(&mut self, faction: FactionId, alias: u32, unit: UnitId) {
        self.aliases.insert((faction, alias), unit);
    }

    /// Resolves a FORM alias within a faction.
    #[must_use]
    pub fn unit_by_alias(&self, faction: FactionId, alias: u32) -> Option<UnitId> {
        self.aliases.get(&(faction, alias)).copied()
    }

    /// Forgets all FORM aliases. Called between turns, once formed units
    /// have become ordinary numbered units.
    pub fn clear_aliases(&mut self) {
        self.aliases.clear();
    }

    /// Whether a faction id names one of the built-in NPC factions.
    #[must_use]
    pub fn is_npc_faction(&self, id: FactionId) -> bool {
        self.guard_faction == Some(id) || self.monster_faction == Some(id)
    }
}

impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn
            && self.factions == other.factions
            && self.units == other.units
            && self.regions == other.regions
            && self.aliases == other.aliases
            && self.next_unit == other.next_unit
    }
}

impl Eq for World {}
