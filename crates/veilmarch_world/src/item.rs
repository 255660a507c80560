//! Item definitions and registry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::{ItemId, SkillId};
use veilmarch_orders::ItemClass;

use crate::registry::normalize;

/// One static item definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemDef {
    /// Singular display name.
    pub name: &'static str,
    /// Plural display name.
    pub plural: &'static str,
    /// Four-letter-style abbreviation.
    pub abbr: &'static str,
    /// The item's class.
    pub class: ItemClass,
    /// Disabled items are invisible to lookup.
    pub disabled: bool,
    /// Whether the item flies (a flying ship skips the coastal check).
    pub can_fly: bool,
    /// Whether an unfinished form of this item exists (ships under
    /// construction).
    pub has_unfinished: bool,
    /// Whether WITHDRAW may produce this item.
    pub withdrawable: bool,
    /// The skill PRODUCE uses for this item, if it is producible.
    pub produce_skill: Option<SkillId>,
}

impl ItemDef {
    /// Whether `token` names this item (name, plural, or abbreviation).
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        let token = normalize(token);
        token == self.name || token == self.plural || token == self.abbr
    }
}

/// The item registry. [`ItemId`] values index into it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemRegistry {
    defs: Vec<ItemDef>,
}

impl ItemRegistry {
    /// Creates a registry from a definition list.
    #[must_use]
    pub fn new(defs: Vec<ItemDef>) -> Self {
        Self { defs }
    }

    /// Looks up an enabled item by name, plural, or abbreviation.
    #[must_use]
    pub fn find(&self, token: &str) -> Option<ItemId> {
        self.defs
            .iter()
            .position(|def| !def.disabled && def.matches(token))
            .map(|idx| ItemId::new(u32::try_from(idx).unwrap_or(u32::MAX)))
    }

    /// Returns the definition for an id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemDef> {
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

    /// The standard rule-set item table.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn standard() -> Self {
        // Skill ids refer to SkillRegistry::standard() positions.
        let mining = Some(SkillId::new(1));
        let lumberjack = Some(SkillId::new(2));
        let quarrying = Some(SkillId::new(3));
        let horse_training = Some(SkillId::new(4));
        let weaponsmith = Some(SkillId::new(5));
        let armorer = Some(SkillId::new(6));
        let farming = Some(SkillId::new(7));
        let fishing = Some(SkillId::new(8));
        let shipbuilding = Some(SkillId::new(9));
        let carpenter = Some(SkillId::new(10));

        let def = |name, plural, abbr, class| ItemDef {
            name,
            plural,
            abbr,
            class,
            disabled: false,
            can_fly: false,
            has_unfinished: false,
            withdrawable: false,
            produce_skill: None,
        };

        Self::new(vec![
            ItemDef { withdrawable: true, ..def("silver", "silver", "silv", ItemClass::Trade) },
            ItemDef {
                withdrawable: true,
                produce_skill: mining,
                ..def("iron", "iron", "iron", ItemClass::Normal)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: lumberjack,
                ..def("wood", "wood", "wood", ItemClass::Normal)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: quarrying,
                ..def("stone", "stone", "ston", ItemClass::Normal)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: horse_training,
                ..def("horse", "horses", "hors", ItemClass::Mount)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: weaponsmith,
                ..def("sword", "swords", "swor", ItemClass::Weapon)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: armorer,
                ..def("chain armor", "chain armor", "carm", ItemClass::Armor)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: farming,
                ..def("grain", "grain", "grai", ItemClass::Food)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: fishing,
                ..def("fish", "fish", "fish", ItemClass::Food)
            },
            ItemDef {
                withdrawable: true,
                produce_skill: carpenter,
                ..def("wagon", "wagons", "wagn", ItemClass::Tool)
            },
            def("leader", "leaders", "lead", ItemClass::Man),
            def("peasant", "peasants", "peas", ItemClass::Man),
            ItemDef {
                has_unfinished: true,
                produce_skill: shipbuilding,
                ..def("longboat", "longboats", "long", ItemClass::Ship)
            },
            ItemDef {
                has_unfinished: true,
                produce_skill: shipbuilding,
                ..def("clipper", "clippers", "clip", ItemClass::Ship)
            },
            ItemDef {
                has_unfinished: true,
                can_fly: true,
                produce_skill: shipbuilding,
                ..def("balloon", "balloons", "ball", ItemClass::Ship)
            },
            ItemDef { disabled: true, ..def("mithril", "mithril", "mith", ItemClass::Advanced) },
        ])
    }
}
