//! The per-line order context handed to builders.

use veilmarch_world::{Faction, GameConfig, Region, Registries, Unit};

use crate::checker::CheckLog;

/// Everything a builder may touch while processing one order line.
///
/// In commit mode `unit` and `faction` are the real world entries and
/// `check` is `None`; in check mode they are the checker's dummies and
/// every diagnostic is routed into the check log instead.
pub(crate) struct OrderCtx<'a> {
    /// The selected unit (or the check dummy).
    pub unit: &'a mut Unit,
    /// The selected faction (or the check dummy).
    pub faction: &'a mut Faction,
    /// The unit's region, when one exists. Check mode has none, so
    /// region-dependent semantic checks are skipped there.
    pub region: Option<&'a mut Region>,
    /// Static game data.
    pub registries: &'a Registries,
    /// Rule-set configuration.
    pub config: &'a GameConfig,
    /// The check log, in check mode.
    pub check: Option<&'a mut CheckLog>,
}

impl OrderCtx<'_> {
    /// Whether state mutations are for real.
    pub fn commit(&self) -> bool {
        self.check.is_none()
    }

    /// Routes a diagnostic: check log if checking, else the unit's log.
    pub fn error(&mut self, text: impl AsRef<str>) {
        match self.check.as_deref_mut() {
            Some(log) => log.error(text.as_ref()),
            None => self.unit.error(text.as_ref()),
        }
    }

    /// Records a unit event, in commit mode only.
    pub fn event(&mut self, text: impl Into<String>) {
        if self.commit() {
            self.unit.event(text);
        }
    }
}
