//! The order variants and their payloads.
//!
//! Each struct here is the validated result of parsing one order line. The
//! interpreter attaches these to a unit's command slots; the resolution
//! engine consumes them during turn processing. Month-long orders are
//! mutually exclusive and live in one slot, wrapped in [`MonthOrder`];
//! accumulating orders each have their own list on the unit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::{FactionId, ItemId, ObjectNum, SkillId, StructureId};

use crate::refs::{ItemSpec, UnitRef};
use crate::vocab::MoveStep;

/// The month-long order occupying a unit's single month slot.
///
/// Issuing any of these replaces whatever was in the slot before; the
/// interpreter reports the overwrite as a warning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonthOrder {
    /// MOVE or ADVANCE across regions.
    Move(MoveOrder),
    /// SAIL a ship along an itinerary, or with the fleet's standing orders.
    Sail(SailOrder),
    /// BUILD or help build a structure or ship.
    Build(BuildOrder),
    /// PRODUCE goods from the region.
    Produce(ProduceOrder),
    /// STUDY a skill.
    Study(StudyOrder),
    /// TEACH other units.
    Teach(TeachOrder),
    /// WORK for wages.
    Work,
    /// ENTERTAIN for silver.
    Entertain,
    /// Explicitly do nothing this month.
    Idle,
    /// TAX the region (month-long under some rule sets).
    Tax,
    /// PILLAGE the region (month-long under some rule sets).
    Pillage,
}

/// A MOVE or ADVANCE itinerary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOrder {
    /// True for ADVANCE, which moves aggressively through guards.
    pub advancing: bool,
    /// The steps, in order of execution.
    pub steps: Vec<MoveStep>,
}

/// A SAIL itinerary. An empty step list means "sail wherever the ship's
/// owner directs".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SailOrder {
    /// The steps, in order of execution.
    pub steps: Vec<MoveStep>,
}

/// What a BUILD order asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuildTask {
    /// Bare BUILD: continue the structure the unit is inside.
    Continue,
    /// BUILD HELP: join another unit's construction work.
    Help(UnitRef),
    /// BUILD <structure kind>: start a new structure.
    Structure(StructureId),
    /// BUILD <ship item>: work on an unfinished ship item.
    Ship(ItemId),
}

/// A BUILD order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuildOrder {
    /// What to build.
    pub task: BuildTask,
}

/// A PRODUCE order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProduceOrder {
    /// The item to produce.
    pub item: ItemId,
    /// Optional production target; `None` means as much as possible.
    pub amount: Option<u32>,
    /// The skill to produce with, when the item admits more than one.
    pub skill: Option<SkillId>,
}

/// A STUDY order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StudyOrder {
    /// The skill to study.
    pub skill: SkillId,
    /// Optional level goal; studying stops once reached.
    pub level: Option<u32>,
}

/// A TEACH order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TeachOrder {
    /// The students. TEACH accumulates: repeated orders extend this list.
    pub targets: Vec<UnitRef>,
}

/// Whether a transfer pushes goods to the target or pulls them from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransferKind {
    /// GIVE: from the issuing unit to the target.
    Give,
    /// TAKE FROM: from the target to the issuing unit.
    Take,
}

/// What a GIVE/TAKE order transfers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GivePayload {
    /// `GIVE <target> UNIT` - the whole unit changes factions.
    WholeUnit,
    /// A fixed count of one item.
    Amount {
        /// How many to transfer.
        count: u32,
        /// The item.
        item: ItemId,
    },
    /// `ALL <item or class>`, optionally keeping some back.
    All {
        /// What to transfer all of.
        spec: ItemSpec,
        /// `EXCEPT <n>`: how many to keep.
        except: Option<u32>,
    },
}

/// A GIVE or TAKE FROM order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GiveOrder {
    /// Push or pull.
    pub kind: TransferKind,
    /// The other unit.
    pub target: UnitRef,
    /// What moves.
    pub payload: GivePayload,
    /// `UNFINISHED`: the item is an unfinished ship.
    pub unfinished: bool,
}

/// Quantity selector for BUY and SELL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TradeAmount {
    /// As many as the market and funds allow.
    All,
    /// A fixed count.
    Count(u32),
}

/// A BUY or SELL order against the region's market.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TradeOrder {
    /// How many.
    pub amount: TradeAmount,
    /// The item traded.
    pub item: ItemId,
}

/// A WITHDRAW order drawing on the faction's unclaimed silver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WithdrawOrder {
    /// How many items to withdraw.
    pub amount: u32,
    /// The item withdrawn.
    pub item: ItemId,
}

/// A TRANSPORT or DISTRIBUTE order moving goods over distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransportOrder {
    /// The receiving unit.
    pub target: UnitRef,
    /// How many.
    pub amount: TradeAmount,
    /// The item shipped.
    pub item: ItemId,
    /// `EXCEPT <n>` with ALL: how many to keep.
    pub except: Option<u32>,
    /// True for DISTRIBUTE, which fans out instead of shipping to one
    /// destination.
    pub distribute: bool,
}

/// An EXCHANGE order proposing a swap with another unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExchangeOrder {
    /// The counterparty.
    pub target: UnitRef,
    /// How many items this unit offers.
    pub give_amount: u32,
    /// The item offered.
    pub give_item: ItemId,
    /// How many items this unit expects back.
    pub expect_amount: u32,
    /// The item expected.
    pub expect_item: ItemId,
}

/// A STEAL or ASSASSINATE attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StealthOrder {
    /// Steal one item kind from the target.
    Steal {
        /// The victim.
        target: UnitRef,
        /// The item to take.
        item: ItemId,
    },
    /// Attempt to kill the target.
    Assassinate {
        /// The victim.
        target: UnitRef,
    },
}

/// Arguments to a CAST order, shaped by the spell being cast.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastArgs {
    /// No arguments.
    Plain,
    /// `REGION <x> <y> [z]` - a target location.
    Region {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
        /// Z coordinate; `None` means the caster's own level.
        z: Option<i32>,
    },
    /// `UNITS <u> ...` - target units.
    Units(Vec<UnitRef>),
    /// `LEVEL <n>` - cast at a chosen level.
    Level(u32),
}

/// A CAST order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastOrder {
    /// The spell skill.
    pub skill: SkillId,
    /// Spell arguments.
    pub args: CastArgs,
}

/// A JOIN order, boarding the structure another unit occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoinOrder {
    /// The unit whose structure to join.
    pub target: UnitRef,
    /// `NOOVERLOAD`: refuse if boarding would overload the ship.
    pub no_overload: bool,
    /// `MERGE`: merge this fleet into the target's fleet.
    pub merge: bool,
}

/// What a FIND order looks up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FindTarget {
    /// One faction's address.
    Faction(FactionId),
    /// Every known faction's address.
    All,
}

/// An instant structure entry or exit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnterAction {
    /// ENTER the numbered structure in the current region.
    Enter(ObjectNum),
    /// LEAVE the current structure.
    Leave,
}

/// What a SHOW order asks the report generator to append.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShowRequest {
    /// A skill description at a given level.
    Skill {
        /// The skill.
        skill: SkillId,
        /// The level to describe.
        level: u32,
    },
    /// An item description.
    Item(ItemId),
    /// A structure-kind description.
    Object(StructureId),
}
