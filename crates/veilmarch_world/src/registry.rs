//! The static-registry bundle and name normalization.
//!
//! Registries are fixed for the lifetime of a game: the parser only reads
//! them. Lookups are case-insensitive and treat `_` and space as the same
//! character; disabled definitions are invisible to lookup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::item::ItemRegistry;
use crate::skill::SkillRegistry;
use crate::structure::StructureRegistry;

/// Normalizes a name or keyword for lookup: lowercase, `_` becomes space.
#[must_use]
pub fn normalize(token: &str) -> String {
    token.to_ascii_lowercase().replace('_', " ")
}

/// All static game-data registries, bundled for convenient threading.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Registries {
    /// Item definitions.
    pub items: ItemRegistry,
    /// Skill definitions.
    pub skills: SkillRegistry,
    /// Structure-kind definitions.
    pub structures: StructureRegistry,
}

impl Registries {
    /// The standard rule-set registries.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            items: ItemRegistry::standard(),
            skills: SkillRegistry::standard(),
            structures: StructureRegistry::standard(),
        }
    }
}
