//! Target-unit references and item selectors.
//!
//! Orders that act on another unit store a [`UnitRef`]; orders that act on
//! a quantity of goods store an [`ItemSpec`]. Both are resolved against the
//! world only when the order executes, so a reference may legitimately name
//! a unit that does not exist yet (a FORM alias) or no longer exists.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::{FactionId, ItemId, UnitId};

use crate::vocab::ItemClass;

/// A reference to a unit, as written in an order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitRef {
    /// `0` - no unit. GIVE 0 discards; ATTACK 0 is rejected earlier.
    None,
    /// An ordinary unit number.
    Existing(UnitId),
    /// `NEW <alias>` or `FACTION <f> NEW <alias>` - a unit formed this
    /// turn, identified by its FORM alias. Without a faction prefix the
    /// alias is looked up in the issuing faction.
    New {
        /// The owning faction, when spelled with a `FACTION` prefix.
        faction: Option<FactionId>,
        /// The alias given on the FORM line.
        alias: u32,
    },
}

impl UnitRef {
    /// Whether this reference points at a unit formed this turn.
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New { .. })
    }
}

/// What a quantity selector in GIVE/TAKE names: a concrete item or a whole
/// class of items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemSpec {
    /// A single item definition.
    Item(ItemId),
    /// Every item of a class (`ALL WEAPONS`, `ALL ITEMS`).
    Class(ItemClass),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_refs_are_new() {
        assert!(UnitRef::New { faction: None, alias: 3 }.is_new());
        assert!(!UnitRef::Existing(UnitId::new(40)).is_new());
        assert!(!UnitRef::None.is_new());
    }

    #[test]
    fn refs_compare_structurally() {
        let a = UnitRef::New { faction: Some(FactionId::new(2)), alias: 1 };
        let b = UnitRef::New { faction: Some(FactionId::new(2)), alias: 1 };
        assert_eq!(a, b);
        assert_ne!(a, UnitRef::New { faction: None, alias: 1 });
    }
}
