//! Small closed vocabularies used across orders.
//!
//! Each type knows how to recognize its own spellings; token lookup is
//! case-insensitive (callers normalize before matching).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::ObjectNum;

/// A compass direction on the hex map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    Northeast,
    Southeast,
    South,
    Southwest,
    Northwest,
}

impl Direction {
    /// Recognizes a direction spelling. Accepts full names and the
    /// two-letter abbreviations.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "north" | "n" => Some(Self::North),
            "northeast" | "ne" => Some(Self::Northeast),
            "southeast" | "se" => Some(Self::Southeast),
            "south" | "s" => Some(Self::South),
            "southwest" | "sw" => Some(Self::Southwest),
            "northwest" | "nw" => Some(Self::Northwest),
            _ => None,
        }
    }

    /// The canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::Northwest => "northwest",
        }
    }
}

/// One step of a MOVE/ADVANCE/SAIL itinerary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStep {
    /// Cross the region border in a compass direction.
    Dir(Direction),
    /// Enter the structure with this number in the current region.
    Enter(ObjectNum),
    /// Leave the current structure.
    Out,
    /// Wait one movement phase.
    Pause,
}

/// Item classes, used as selectors in `GIVE <target> ALL <class>` and to
/// gate which items an order accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemClass {
    Normal,
    Advanced,
    Trade,
    Man,
    Monster,
    Magic,
    Weapon,
    Armor,
    Mount,
    Battle,
    Special,
    Tool,
    Food,
    Ship,
    /// Every class at once (`GIVE … ALL ITEMS`).
    Any,
}

impl ItemClass {
    /// Recognizes a class keyword, singular or plural.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "advanced" => Some(Self::Advanced),
            "trade" => Some(Self::Trade),
            "man" | "men" => Some(Self::Man),
            "monster" | "monsters" => Some(Self::Monster),
            "magic" => Some(Self::Magic),
            "weapon" | "weapons" => Some(Self::Weapon),
            "armor" => Some(Self::Armor),
            "mount" | "mounts" => Some(Self::Mount),
            "battle" => Some(Self::Battle),
            "special" => Some(Self::Special),
            "tool" | "tools" => Some(Self::Tool),
            "food" => Some(Self::Food),
            "ship" | "ships" => Some(Self::Ship),
            "item" | "items" => Some(Self::Any),
            _ => None,
        }
    }

    /// Whether items of this class may appear in TRANSPORT/DISTRIBUTE
    /// orders. People, monsters, and ships travel on their own.
    #[must_use]
    pub const fn transportable(self) -> bool {
        !matches!(self, Self::Man | Self::Monster | Self::Ship)
    }
}

/// Diplomatic stance toward another faction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attitude {
    Hostile,
    Unfriendly,
    Neutral,
    Friendly,
    Ally,
}

impl Attitude {
    /// Recognizes an attitude keyword.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "hostile" => Some(Self::Hostile),
            "unfriendly" => Some(Self::Unfriendly),
            "neutral" => Some(Self::Neutral),
            "friendly" => Some(Self::Friendly),
            "ally" => Some(Self::Ally),
            _ => None,
        }
    }

    /// The canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hostile => "hostile",
            Self::Unfriendly => "unfriendly",
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
            Self::Ally => "ally",
        }
    }
}

/// Whose goods a unit will consume for upkeep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConsumeMode {
    /// Consume nothing beyond the unit's own silver.
    #[default]
    None,
    /// Consume the unit's own food.
    Unit,
    /// Consume faction-wide food.
    Faction,
}

impl ConsumeMode {
    /// Recognizes a consume keyword. An absent token means [`Self::None`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "unit" => Some(Self::Unit),
            "faction" => Some(Self::Faction),
            _ => None,
        }
    }
}

/// How visible a unit makes itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RevealMode {
    /// Default stealth behavior.
    #[default]
    None,
    /// Reveal the unit itself.
    Unit,
    /// Reveal the unit and its faction.
    Faction,
}

impl RevealMode {
    /// Recognizes a reveal keyword. An absent token means [`Self::None`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "unit" => Some(Self::Unit),
            "faction" => Some(Self::Faction),
            _ => None,
        }
    }
}

/// Which battle spoils a unit will pick up, by how the spoils could be
/// carried.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpoilsFilter {
    None,
    Walk,
    Ride,
    Fly,
    Swim,
    Sail,
    #[default]
    All,
}

impl SpoilsFilter {
    /// Recognizes a spoils keyword. An absent token means [`Self::All`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "walk" => Some(Self::Walk),
            "ride" => Some(Self::Ride),
            "fly" => Some(Self::Fly),
            "swim" => Some(Self::Swim),
            "sail" => Some(Self::Sail),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// A unit's tax stance for the month.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaxMode {
    /// Not taxing.
    #[default]
    None,
    /// Taxing this month.
    Tax,
    /// Pillaging this month.
    Pillage,
    /// Tax whenever possible without explicit orders.
    Auto,
}

/// Order template style appended to a faction's turn report.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemplateFormat {
    Off,
    Short,
    #[default]
    Long,
    Map,
}

impl TemplateFormat {
    /// Recognizes a template-format keyword.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            "map" => Some(Self::Map),
            _ => None,
        }
    }
}
