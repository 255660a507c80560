//! Units, their instant flags, and their command slots.
//!
//! A unit's slots are the interpreter's output: the month-long slot holds
//! at most one order of the mutually-exclusive family, the accumulating
//! lists grow one entry per order line, instant flags are applied during
//! the parse itself, and deferred TURN batches wait for a later turn.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use veilmarch_foundation::{FactionId, ItemId, ObjectNum, RegionId, SkillId, UnitId};
use veilmarch_orders::{
    CastOrder, ConsumeMode, EnterAction, ExchangeOrder, FindTarget, GiveOrder, JoinOrder,
    MonthOrder, RevealMode, SpoilsFilter, StealthOrder, TaxMode, TradeOrder, TransportOrder,
    TurnBlock, UnitRef, WithdrawOrder,
};

/// The instant flags an order line toggles directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitFlags {
    /// GUARD: holds the region against hostile movement.
    pub guard: bool,
    /// AVOID: flees from combat. Mutually exclusive with guard.
    pub avoid: bool,
    /// BEHIND: fights from the back line.
    pub behind: bool,
    /// HOLD: does not join nearby battles.
    pub hold: bool,
    /// SHARE: shares goods with faction units in need.
    pub share: bool,
    /// NOAID: does not call for help in battle.
    pub noaid: bool,
    /// NOCROSS: refuses to cross water.
    pub nocross: bool,
    /// CONSUME mode for upkeep.
    pub consume: ConsumeMode,
    /// REVEAL mode for stealth.
    pub reveal: RevealMode,
    /// SPOILS filter for battle loot.
    pub spoils: SpoilsFilter,
}

/// One unit and its command slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    /// The unit's number.
    pub id: UnitId,
    /// Owning faction.
    pub faction: FactionId,
    /// Current region.
    pub region: RegionId,
    /// FORM alias for this turn; zero when none.
    pub alias: u32,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The structure the unit is inside, if any.
    pub object: Option<ObjectNum>,
    /// Instant flags.
    pub flags: UnitFlags,
    /// Tax stance for the month.
    pub tax_mode: TaxMode,

    /// The month-long slot.
    pub month: Option<MonthOrder>,
    /// Month slot saved while a TURN block's scratch is being checked.
    pub saved_month: Option<MonthOrder>,
    /// Tax mode saved alongside [`Self::saved_month`].
    pub saved_tax: TaxMode,
    /// Whether the unit is currently inside an open TURN block.
    pub in_turn_block: bool,

    /// Pending ENTER/LEAVE.
    pub enter: Option<EnterAction>,
    /// Pending DESTROY of the owned structure.
    pub destroy: bool,
    /// Pending PROMOTE target.
    pub promote: Option<UnitRef>,

    /// GIVE and TAKE orders.
    pub gives: Vec<GiveOrder>,
    /// BUY orders.
    pub buys: Vec<TradeOrder>,
    /// SELL orders.
    pub sells: Vec<TradeOrder>,
    /// WITHDRAW orders.
    pub withdraws: Vec<WithdrawOrder>,
    /// TRANSPORT and DISTRIBUTE orders.
    pub transports: Vec<TransportOrder>,
    /// EXCHANGE orders.
    pub exchanges: Vec<ExchangeOrder>,
    /// ATTACK targets.
    pub attacks: Vec<UnitRef>,
    /// EVICT targets.
    pub evicts: Vec<UnitRef>,
    /// FIND requests.
    pub finds: Vec<FindTarget>,
    /// FORGET requests.
    pub forgets: Vec<SkillId>,

    /// The stealth slot (STEAL or ASSASSINATE).
    pub stealth: Option<StealthOrder>,
    /// The cast slot.
    pub cast: Option<CastOrder>,
    /// The join slot.
    pub join: Option<JoinOrder>,

    /// COMBAT spell selection.
    pub combat_spell: Option<SkillId>,
    /// PREPARE battle-item selection.
    pub prepared: Option<ItemId>,
    /// ARMOR preference list, most preferred first.
    pub armor_prefs: Vec<ItemId>,
    /// WEAPON preference list, most preferred first.
    pub weapon_prefs: Vec<ItemId>,
    /// Silver claimed from the faction's unclaimed pool this turn.
    pub claimed: u32,

    /// Deferred TURN batches awaiting replay.
    pub turn_blocks: Vec<TurnBlock>,

    /// The unit that formed this one, when created by FORM this turn.
    pub former: Option<UnitId>,
    /// Whether the forming parent echoes this unit's lines into its
    /// template history.
    pub forming_template: bool,
    /// Repeat-marked lines recorded for the order template.
    pub template_lines: Vec<String>,

    /// Error log for the next report.
    pub errors: Vec<String>,
    /// Event log for the next report.
    pub events: Vec<String>,
}

impl Unit {
    /// Creates a unit with empty slots and default flags.
    #[must_use]
    pub fn new(id: UnitId, faction: FactionId, region: RegionId) -> Self {
        Self {
            id,
            faction,
            region,
            alias: 0,
            name: format!("Unit {}", id.value()),
            description: None,
            object: None,
            flags: UnitFlags::default(),
            tax_mode: TaxMode::default(),
            month: None,
            saved_month: None,
            saved_tax: TaxMode::default(),
            in_turn_block: false,
            enter: None,
            destroy: false,
            promote: None,
            gives: Vec::new(),
            buys: Vec::new(),
            sells: Vec::new(),
            withdraws: Vec::new(),
            transports: Vec::new(),
            exchanges: Vec::new(),
            attacks: Vec::new(),
            evicts: Vec::new(),
            finds: Vec::new(),
            forgets: Vec::new(),
            stealth: None,
            cast: None,
            join: None,
            combat_spell: None,
            prepared: None,
            armor_prefs: Vec::new(),
            weapon_prefs: Vec::new(),
            claimed: 0,
            turn_blocks: Vec::new(),
            former: None,
            forming_template: false,
            template_lines: Vec::new(),
            errors: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Records an error for the next report.
    pub fn error(&mut self, text: impl Into<String>) {
        self.errors.push(text.into());
    }

    /// Records an event for the next report.
    pub fn event(&mut self, text: impl Into<String>) {
        self.events.push(text.into());
    }

    /// Whether the month-long slot (or an exclusive tax stance under the
    /// month-long policy) is occupied.
    #[must_use]
    pub fn month_slot_occupied(&self, month_long_tax_pillage: bool) -> bool {
        self.month.is_some()
            || (month_long_tax_pillage
                && matches!(self.tax_mode, TaxMode::Tax | TaxMode::Pillage))
    }

    /// Saves and clears the month-long state when a TURN block opens in
    /// check mode, so the block's own orders can be grammar-checked
    /// without disturbing it.
    pub fn enter_turn_scratch(&mut self) {
        self.saved_month = self.month.take();
        self.saved_tax = std::mem::take(&mut self.tax_mode);
        self.in_turn_block = true;
    }

    /// Restores the month-long state saved by [`Self::enter_turn_scratch`].
    pub fn leave_turn_scratch(&mut self) {
        self.month = self.saved_month.take();
        self.tax_mode = std::mem::take(&mut self.saved_tax);
        self.in_turn_block = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Unit {
        Unit::new(UnitId::new(7), FactionId::new(3), RegionId::new(1))
    }

    #[test]
    fn month_slot_occupancy() {
        let mut unit = unit();
        assert!(!unit.month_slot_occupied(false));

        unit.month = Some(MonthOrder::Work);
        assert!(unit.month_slot_occupied(false));

        unit.month = None;
        unit.tax_mode = TaxMode::Tax;
        assert!(!unit.month_slot_occupied(false));
        assert!(unit.month_slot_occupied(true));
    }

    #[test]
    fn turn_scratch_round_trip() {
        let mut unit = unit();
        unit.month = Some(MonthOrder::Entertain);
        unit.tax_mode = TaxMode::Auto;

        unit.enter_turn_scratch();
        assert!(unit.month.is_none());
        assert_eq!(unit.tax_mode, TaxMode::None);
        assert!(unit.in_turn_block);

        unit.month = Some(MonthOrder::Work);
        unit.leave_turn_scratch();
        assert_eq!(unit.month, Some(MonthOrder::Entertain));
        assert_eq!(unit.tax_mode, TaxMode::Auto);
        assert!(!unit.in_turn_block);
    }
}
