//! Immutable rule-set configuration.
//!
//! The parse entry points take a `&GameConfig` and thread it through every
//! builder. Nothing reads configuration from globals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule-set switches the order interpreter consults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// When set, TAX and PILLAGE occupy the month-long slot instead of
    /// acting as instant tax-mode switches.
    pub month_long_tax_pillage: bool,
    /// Total points a faction may spread across WAR/TRADE/MAGIC.
    pub faction_points: u32,
    /// Whether WITHDRAW is available at all.
    pub allow_withdraw: bool,
    /// Whether long-range TRANSPORT/DISTRIBUTE are available.
    pub allow_transport: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            month_long_tax_pillage: false,
            faction_points: 5,
            allow_withdraw: true,
            allow_transport: true,
        }
    }
}
