//! Stable numeric identifiers.
//!
//! Factions, units, regions, and static game-data definitions are owned by
//! id-indexed collections; cross-links between them are stored as these ids
//! rather than as direct references.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident, $display:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name(u32);

        impl $name {
            /// Creates an id from its raw number.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw number.
            #[must_use]
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($display, " ({})"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

numeric_id! {
    /// A faction number, as it appears on the `#atlantis` line.
    FactionId, "Faction"
}

numeric_id! {
    /// A unit number. Unit numbers are globally unique across factions.
    UnitId, "Unit"
}

numeric_id! {
    /// A region number.
    RegionId, "Region"
}

numeric_id! {
    /// A structure number within a region (1..=99 for player structures).
    ObjectNum, "Structure"
}

numeric_id! {
    /// Index of an item definition in the item registry.
    ItemId, "Item"
}

numeric_id! {
    /// Index of a skill definition in the skill registry.
    SkillId, "Skill"
}

numeric_id! {
    /// Index of a structure kind in the structure registry.
    StructureId, "StructureKind"
}
