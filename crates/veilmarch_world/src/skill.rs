//! Skill definitions and registry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::SkillId;

use crate::registry::normalize;

/// One static skill definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillDef {
    /// Display name.
    pub name: &'static str,
    /// Four-letter-style abbreviation.
    pub abbr: &'static str,
    /// Disabled skills are invisible to lookup.
    pub disabled: bool,
    /// Whether this is a magic skill (CAST, COMBAT spell selection).
    pub magic: bool,
}

impl SkillDef {
    /// Whether `token` names this skill (name or abbreviation).
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        let token = normalize(token);
        token == self.name || token == self.abbr
    }
}

/// The skill registry. [`SkillId`] values index into it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillRegistry {
    defs: Vec<SkillDef>,
}

impl SkillRegistry {
    /// Creates a registry from a definition list.
    #[must_use]
    pub fn new(defs: Vec<SkillDef>) -> Self {
        Self { defs }
    }

    /// Looks up an enabled skill by name or abbreviation.
    #[must_use]
    pub fn find(&self, token: &str) -> Option<SkillId> {
        self.defs
            .iter()
            .position(|def| !def.disabled && def.matches(token))
            .map(|idx| SkillId::new(u32::try_from(idx).unwrap_or(u32::MAX)))
    }

    /// Returns the definition for an id.
    #[must_use]
    pub fn get(&self, id: SkillId) -> Option<&SkillDef> {
        self.defs.get(id.value() as usize)
    }

    /// The number of definitions, enabled or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// The standard rule-set skill table. Item production links in
    /// [`crate::item::ItemRegistry::standard`] refer to these positions.
    #[must_use]
    pub fn standard() -> Self {
        let def = |name, abbr| SkillDef { name, abbr, disabled: false, magic: false };
        let magic = |name, abbr| SkillDef { name, abbr, disabled: false, magic: true };

        Self::new(vec![
            def("combat", "comb"),
            def("mining", "mini"),
            def("lumberjack", "lumb"),
            def("quarrying", "quar"),
            def("horse training", "hors"),
            def("weaponsmith", "weap"),
            def("armorer", "armo"),
            def("farming", "farm"),
            def("fishing", "fish"),
            def("shipbuilding", "ship"),
            def("carpenter", "carp"),
            def("building", "buil"),
            def("entertainment", "ente"),
            def("tactics", "tact"),
            def("stealth", "stea"),
            def("observation", "obse"),
            def("sailing", "sail"),
            def("riding", "ridi"),
            magic("force", "forc"),
            magic("pattern", "patt"),
            magic("spirit", "spir"),
            magic("fire", "fire"),
            magic("earthquake", "eqke"),
            SkillDef { name: "necromancy", abbr: "necr", disabled: true, magic: true },
        ])
    }
}
