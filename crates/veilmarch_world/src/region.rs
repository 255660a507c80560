//! Regions and the structures standing in them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use im::OrdMap;

use veilmarch_foundation::{ObjectNum, RegionId, StructureId, UnitId};

/// A structure instance in a region.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Structure {
    /// The structure's number within its region.
    pub num: ObjectNum,
    /// The structure kind.
    pub kind: StructureId,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The unit that owns the structure, if any.
    pub owner: Option<UnitId>,
    /// Work remaining before the structure is complete; zero when done.
    pub incomplete: u32,
}

impl Structure {
    /// Creates a complete, unowned structure.
    #[must_use]
    pub fn new(num: ObjectNum, kind: StructureId, name: impl Into<String>) -> Self {
        Self {
            num,
            kind,
            name: name.into(),
            description: None,
            owner: None,
            incomplete: 0,
        }
    }
}

/// One hex of the map, as far as the order interpreter cares.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// The region's number.
    pub id: RegionId,
    /// Display name.
    pub name: String,
    /// Whether ships can be built and launched here.
    pub coastal: bool,
    /// Structures in the region, by number.
    pub structures: OrdMap<ObjectNum, Structure>,
}

impl Region {
    /// Creates an empty inland region.
    #[must_use]
    pub fn new(id: RegionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            coastal: false,
            structures: OrdMap::new(),
        }
    }

    /// The lowest free player-structure number, scanning 1 through 99.
    #[must_use]
    pub fn free_structure_num(&self) -> Option<ObjectNum> {
        (1..=99)
            .map(ObjectNum::new)
            .find(|num| !self.structures.contains_key(num))
    }

    /// Adds a structure, replacing any previous one with the same number.
    pub fn add_structure(&mut self, structure: Structure) {
        self.structures.insert(structure.num, structure);
    }
}
