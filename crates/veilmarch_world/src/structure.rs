//! Structure-kind definitions and registry.
//!
//! Structure kinds are what BUILD starts from scratch (towers, forts).
//! Ships are items, not structure kinds; a launched ship becomes a
//! [`crate::region::Structure`] instance referencing its item.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::StructureId;

use crate::registry::normalize;

/// One static structure-kind definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureDef {
    /// Display name.
    pub name: &'static str,
    /// Disabled kinds are invisible to lookup.
    pub disabled: bool,
    /// Whether this kind can be started with BUILD (monuments and lairs
    /// cannot).
    pub buildable: bool,
}

impl StructureDef {
    /// Whether `token` names this structure kind.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        normalize(token) == self.name
    }
}

/// The structure-kind registry. [`StructureId`] values index into it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureRegistry {
    defs: Vec<StructureDef>,
}

impl StructureRegistry {
    /// Creates a registry from a definition list.
    #[must_use]
    pub fn new(defs: Vec<StructureDef>) -> Self {
        Self { defs }
    }

    /// Looks up an enabled structure kind by name.
    #[must_use]
    pub fn find(&self, token: &str) -> Option<StructureId> {
        self.defs
            .iter()
            .position(|def| !def.disabled && def.matches(token))
            .map(|idx| StructureId::new(u32::try_from(idx).unwrap_or(u32::MAX)))
    }

    /// Returns the definition for an id.
    #[must_use]
    pub fn get(&self, id: StructureId) -> Option<&StructureDef> {
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

    /// The standard rule-set structure table.
    #[must_use]
    pub fn standard() -> Self {
        let def = |name, buildable| StructureDef { name, disabled: false, buildable };

        Self::new(vec![
            def("tower", true),
            def("fort", true),
            def("castle", true),
            def("citadel", true),
            def("mine", true),
            def("farm", true),
            def("monument", false),
            def("ruin", false),
            StructureDef { name: "mystic portal", disabled: true, buildable: false },
        ])
    }
}
