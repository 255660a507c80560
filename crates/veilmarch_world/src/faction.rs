//! Factions and their reporting logs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use im::OrdMap;

use veilmarch_foundation::FactionId;
use veilmarch_orders::{Attitude, ShowRequest, TemplateFormat};

/// A pending QUIT or RESTART, confirmed at end of turn processing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuitIntent {
    /// Leave the game.
    Quit,
    /// Leave the game and restart with a fresh faction.
    Restart,
}

/// One player faction.
///
/// The `errors` and `events` vectors are the faction's reporting logs;
/// per-line order diagnostics land here in commit mode when no unit is
/// selected yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Faction {
    /// The faction's number.
    pub id: FactionId,
    /// Display name.
    pub name: String,
    /// Contact address shown to other factions via FIND.
    pub address: String,
    /// Order password. `None` means the "none" sentinel: any password is
    /// accepted on the faction-open line.
    pub password: Option<String>,
    /// Non-player faction (guards, monsters). Cannot submit orders.
    pub npc: bool,
    /// Declared attitudes toward specific factions.
    pub attitudes: OrdMap<FactionId, Attitude>,
    /// Attitude toward factions with no specific declaration.
    pub default_attitude: Attitude,
    /// Points allocated to war.
    pub war_points: u32,
    /// Points allocated to trade.
    pub trade_points: u32,
    /// Points allocated to magic.
    pub magic_points: u32,
    /// OPTION TIMES: whether the faction receives the newspaper.
    pub times: bool,
    /// OPTION SHOWATTITUDES: whether reports annotate units with attitudes.
    pub show_attitudes: bool,
    /// OPTION TEMPLATE: order-template style appended to the report.
    pub template: TemplateFormat,
    /// Silver not yet claimed by any unit.
    pub unclaimed: u32,
    /// SHOW requests to satisfy in the next report.
    pub shows: Vec<ShowRequest>,
    /// Pending QUIT/RESTART.
    pub quit: Option<QuitIntent>,
    /// Error log for the next report.
    pub errors: Vec<String>,
    /// Event log for the next report.
    pub events: Vec<String>,
}

impl Faction {
    /// Creates a faction with default options and no password.
    #[must_use]
    pub fn new(id: FactionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: String::new(),
            password: None,
            npc: false,
            attitudes: OrdMap::new(),
            default_attitude: Attitude::Neutral,
            war_points: 0,
            trade_points: 0,
            magic_points: 0,
            times: true,
            show_attitudes: false,
            template: TemplateFormat::default(),
            unclaimed: 0,
            shows: Vec::new(),
            quit: None,
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

    /// The attitude toward another faction, falling back to the default.
    #[must_use]
    pub fn attitude_toward(&self, other: FactionId) -> Attitude {
        self.attitudes
            .get(&other)
            .copied()
            .unwrap_or(self.default_attitude)
    }

    /// Declares an attitude toward a faction, or clears the declaration.
    pub fn declare(&mut self, other: FactionId, attitude: Option<Attitude>) {
        match attitude {
            Some(att) => {
                self.attitudes.insert(other, att);
            }
            None => {
                self.attitudes.remove(&other);
            }
        }
    }

    /// Whether `candidate` matches the faction's password. A `None`
    /// password accepts anything, including nothing.
    #[must_use]
    pub fn password_matches(&self, candidate: Option<&str>) -> bool {
        match &self.password {
            None => true,
            Some(stored) => candidate == Some(stored.as_str()),
        }
    }
}
