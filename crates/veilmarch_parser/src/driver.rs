//! The block-context driver.
//!
//! [`parse_document`] walks a whole order document in commit mode:
//! `#atlantis` faction sections, UNIT selection, FORM chains, and TURN
//! blocks, with every other line dispatched to its builder.
//! [`check_document`] runs the same grammar against throwaway dummies and
//! produces an echo report instead of mutating a world.

use veilmarch_foundation::{FactionId, RegionId, UnitId};
use veilmarch_orders::TurnBlock;
use veilmarch_world::{Faction, GameConfig, Registries, Unit, World};

use crate::builders::dispatch;
use crate::checker::{CheckLog, CheckReport};
use crate::context::OrderCtx;
use crate::keywords::{lookup, OrderKind};
use crate::tokenizer::{strip_at_marker, Cursor};
use crate::turnblock::{CaptureStep, TurnCapture};

/// Which kind of document feed this is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParsePhase {
    /// A player submission. TURN blocks are captured verbatim for a
    /// later turn.
    Submit,
    /// A stored batch re-fed by the resolution engine. A TURN wrapper is
    /// unwrapped and its body executes immediately.
    Replay,
}

/// Parses an order document in commit mode, mutating the world.
///
/// Every diagnostic lands on the selected unit's log, or the selected
/// faction's log when no unit is selected yet. Diagnostics raised before
/// any faction section opened are returned to the caller.
pub fn parse_document(
    world: &mut World,
    source: &str,
    config: &GameConfig,
    phase: ParsePhase,
) -> Vec<String> {
    let mut parser = CommitParser {
        world,
        config,
        phase,
        section: Section::None,
        current: None,
        form_stack: Vec::new(),
        capture: None,
        replay_turn: false,
        orphans: Vec::new(),
    };
    for line in source.lines() {
        parser.line(line);
    }
    parser.finish()
}

/// Checks an order document without touching any world state.
///
/// The same grammar and lookups run as in commit mode, but against a
/// private dummy faction and unit; the result is the echo report. The
/// faction-open line accepts any password here.
#[must_use]
pub fn check_document(source: &str, registries: &Registries, config: &GameConfig) -> CheckReport {
    let mut parser = CheckParser {
        registries,
        config,
        faction: Faction::new(FactionId::new(0), "Order Check"),
        unit: Unit::new(UnitId::new(0), FactionId::new(0), RegionId::new(0)),
        log: CheckLog::new(),
        depth: 0,
        form_depth: 0,
        turn_form_base: 0,
        have_faction: false,
        have_unit: false,
    };
    for line in source.lines() {
        parser.line(line);
    }
    parser.finish()
}

/// Result of pulling one positive number off the cursor.
enum NumToken {
    Missing,
    Invalid,
    Value(u32),
}

fn positive_number(cursor: &mut Cursor) -> NumToken {
    match cursor.next_token() {
        None => NumToken::Missing,
        Some(token) => match token.parse::<u32>() {
            Ok(n) if n > 0 => NumToken::Value(n),
            _ => NumToken::Invalid,
        },
    }
}

/// Where the commit parser currently is in the section framing.
enum Section {
    /// Before any `#atlantis`, or after `#end`.
    None,
    /// A section whose open line was rejected. Lines are skipped until
    /// the next `#atlantis` or `#end`.
    Suppressed,
    /// An open section for a real faction.
    Active(FactionId),
}

struct CommitParser<'a> {
    world: &'a mut World,
    config: &'a GameConfig,
    phase: ParsePhase,
    section: Section,
    current: Option<UnitId>,
    /// Parents of the open FORM chain, outermost first.
    form_stack: Vec<UnitId>,
    /// The TURN capture, while one is open in the submit phase.
    capture: Option<TurnCapture>,
    /// Whether a replay-phase TURN wrapper is open.
    replay_turn: bool,
    orphans: Vec<String>,
}

impl CommitParser<'_> {
    fn line(&mut self, raw: &str) {
        if self.capture.is_some() && !self.feed_capture(raw) {
            return;
        }
        self.process(raw);
    }

    /// Feeds one line to the open TURN capture. Returns whether the line
    /// interrupted the block and must be reprocessed as a normal line.
    fn feed_capture(&mut self, raw: &str) -> bool {
        let Some(mut capture) = self.capture.take() else {
            return true;
        };
        let (stripped, _) = strip_at_marker(raw);
        let kind = Cursor::new(&stripped).next_token().and_then(|t| lookup(&t));
        match capture.feed(raw, kind) {
            CaptureStep::Captured => {
                self.capture = Some(capture);
                false
            }
            CaptureStep::Nested => {
                self.capture = Some(capture);
                self.report("TURN: cannot be nested.");
                false
            }
            CaptureStep::Closed { block, open_forms } => {
                self.attach_block(block, open_forms, false);
                false
            }
            CaptureStep::Interrupted { block, open_forms } => {
                self.attach_block(block, open_forms, true);
                true
            }
        }
    }

    /// Attaches a finished or interrupted batch to the current unit,
    /// reporting every level the closure left unterminated.
    fn attach_block(&mut self, block: TurnBlock, open_forms: usize, interrupted: bool) {
        if interrupted {
            self.report("TURN: without ENDTURN.");
        }
        for _ in 0..open_forms {
            self.report("FORM: without END.");
        }
        if let Some(unit) = self.unit_mut() {
            unit.turn_blocks.push(block);
        }
    }

    fn process(&mut self, raw: &str) {
        let (stripped, marked) = strip_at_marker(raw);
        let mut cursor = Cursor::new(&stripped);
        let Some(first) = cursor.next_token() else {
            // A bare repeat marker still lands in the template history.
            self.record_template(raw, &stripped, marked);
            return;
        };
        let kind = lookup(&first);
        if matches!(self.section, Section::Suppressed)
            && !matches!(kind, Some(OrderKind::AtlantisOpen | OrderKind::AtlantisClose))
        {
            return;
        }
        match kind {
            Some(OrderKind::AtlantisOpen) => self.open_faction(&mut cursor),
            Some(OrderKind::AtlantisClose) => self.close_section(),
            Some(OrderKind::Unit) => self.select_unit(&mut cursor),
            Some(OrderKind::Form) => {
                self.record_template(raw, &stripped, marked);
                self.open_form(&mut cursor, marked);
            }
            Some(OrderKind::End) => {
                self.record_template(raw, &stripped, marked);
                self.close_form("END");
            }
            Some(OrderKind::EndForm) => {
                self.record_template(raw, &stripped, marked);
                self.close_form("ENDFORM");
            }
            Some(OrderKind::Turn) => self.open_turn(marked),
            Some(OrderKind::EndTurn) => self.close_turn(),
            Some(kind) => {
                self.record_template(raw, &stripped, marked);
                self.dispatch_order(kind, &mut cursor);
            }
            None => {
                self.record_template(raw, &stripped, marked);
                self.report(format!("{first} is not a valid order."));
            }
        }
    }

    /// Routes a diagnostic: unit log, else faction log, else the orphan
    /// list handed back to the caller.
    fn report(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(unit) = self.current.and_then(|id| self.world.units.get_mut(&id)) {
            unit.error(text);
            return;
        }
        if let Section::Active(id) = self.section {
            if let Some(faction) = self.world.factions.get_mut(&id) {
                faction.error(text);
                return;
            }
        }
        self.orphans.push(text);
    }

    fn unit_mut(&mut self) -> Option<&mut Unit> {
        let id = self.current?;
        self.world.units.get_mut(&id)
    }

    /// Records one line into the order-template history: lines of an
    /// `@FORM` block echo into the forming parent, and otherwise a line
    /// with its own repeat marker lands on the unit itself.
    fn record_template(&mut self, raw: &str, stripped: &str, marked: bool) {
        if !matches!(self.section, Section::Active(_)) {
            return;
        }
        let Some(id) = self.current else {
            return;
        };
        let former = match self.world.units.get(&id) {
            Some(unit) if unit.forming_template => unit.former,
            Some(_) => None,
            None => return,
        };
        if let Some(former) = former {
            if let Some(parent) = self.world.units.get_mut(&former) {
                parent.template_lines.push(raw.to_string());
            }
        } else if marked {
            if let Some(unit) = self.world.units.get_mut(&id) {
                unit.template_lines.push(stripped.to_string());
            }
        }
    }

    /// Reports and unwinds everything still open: a TURN capture, a
    /// replay TURN wrapper, and the FORM chain.
    fn force_close_chain(&mut self) {
        if let Some(capture) = self.capture.take() {
            let (block, open_forms) = capture.interrupt();
            self.attach_block(block, open_forms, true);
        }
        if self.replay_turn {
            self.replay_turn = false;
            self.report("TURN: without ENDTURN.");
        }
        while let Some(parent) = self.form_stack.pop() {
            self.report("FORM: without END.");
            self.current = Some(parent);
        }
    }

    fn open_faction(&mut self, cursor: &mut Cursor) {
        self.force_close_chain();
        let number = positive_number(cursor);
        self.current = None;
        let NumToken::Value(number) = number else {
            self.section = Section::None;
            self.report("#atlantis: Invalid faction number.");
            return;
        };
        let id = FactionId::new(number);
        if !self.world.factions.contains_key(&id) {
            self.section = Section::Suppressed;
            self.report("#atlantis: No such faction.");
            return;
        }
        let npc =
            self.world.is_npc_faction(id) || self.world.factions.get(&id).is_some_and(|f| f.npc);
        if npc {
            self.section = Section::Suppressed;
            self.report("#atlantis: Orders not accepted for that faction.");
            return;
        }
        let candidate = cursor.next_token();
        let accepted = self
            .world
            .factions
            .get(&id)
            .is_some_and(|f| f.password_matches(candidate.as_deref()));
        if accepted {
            self.section = Section::Active(id);
        } else {
            // The wrong password suppresses the whole section; the owner
            // still learns about the attempt from their report.
            if let Some(faction) = self.world.factions.get_mut(&id) {
                faction.error("#atlantis: Incorrect password.");
            }
            self.section = Section::Suppressed;
        }
    }

    fn close_section(&mut self) {
        self.force_close_chain();
        self.section = Section::None;
        self.current = None;
    }

    fn select_unit(&mut self, cursor: &mut Cursor) {
        let Section::Active(fid) = self.section else {
            self.report("Order given without a faction selected.");
            return;
        };
        self.force_close_chain();
        self.current = None;
        let number = match positive_number(cursor) {
            NumToken::Missing => {
                self.report("UNIT: No unit number given.");
                return;
            }
            NumToken::Invalid => {
                self.report("UNIT: Invalid unit number.");
                return;
            }
            NumToken::Value(number) => number,
        };
        let id = UnitId::new(number);
        match self.world.units.get(&id) {
            None => self.report("UNIT: No such unit."),
            Some(unit) if unit.faction != fid => self.report("UNIT: Not your unit."),
            Some(_) => self.current = Some(id),
        }
    }

    fn open_form(&mut self, cursor: &mut Cursor, marked: bool) {
        let Section::Active(fid) = self.section else {
            self.report("Order given without a faction selected.");
            return;
        };
        let Some(parent_id) = self.current else {
            self.report("Order given without a unit selected.");
            return;
        };
        let alias = match positive_number(cursor) {
            NumToken::Missing => {
                self.report("FORM: No alias given.");
                return;
            }
            NumToken::Invalid => {
                self.report("FORM: Invalid alias.");
                return;
            }
            NumToken::Value(alias) => alias,
        };
        let Some(region) = self.world.units.get(&parent_id).map(|u| u.region) else {
            return;
        };
        let id = self.world.allocate_unit_id();
        let mut unit = Unit::new(id, fid, region);
        unit.alias = alias;
        unit.former = Some(parent_id);
        unit.forming_template = marked;
        self.world.register_alias(fid, alias, id);
        self.world.add_unit(unit);
        self.form_stack.push(parent_id);
        self.current = Some(id);
    }

    fn close_form(&mut self, kw: &str) {
        if !matches!(self.section, Section::Active(_)) {
            self.report("Order given without a faction selected.");
            return;
        }
        match self.form_stack.pop() {
            Some(parent) => self.current = Some(parent),
            None => self.report(format!("{kw}: without FORM.")),
        }
    }

    fn open_turn(&mut self, marked: bool) {
        if !matches!(self.section, Section::Active(_)) {
            self.report("Order given without a faction selected.");
            return;
        }
        if self.current.is_none() {
            self.report("Order given without a unit selected.");
            return;
        }
        match self.phase {
            ParsePhase::Submit => self.capture = Some(TurnCapture::new(marked)),
            ParsePhase::Replay => {
                if self.replay_turn {
                    self.report("TURN: cannot be nested.");
                } else {
                    self.replay_turn = true;
                }
            }
        }
    }

    fn close_turn(&mut self) {
        // In the submit phase an open TURN never reaches this point; its
        // ENDTURN is consumed by the capture.
        if self.replay_turn {
            self.replay_turn = false;
        } else {
            self.report("ENDTURN: without TURN.");
        }
    }

    fn dispatch_order(&mut self, kind: OrderKind, cursor: &mut Cursor) {
        let Section::Active(fid) = self.section else {
            self.report("Order given without a faction selected.");
            return;
        };
        let Some(uid) = self.current else {
            self.report("Order given without a unit selected.");
            return;
        };
        let world = &mut *self.world;
        let Some(unit) = world.units.get_mut(&uid) else {
            return;
        };
        let Some(faction) = world.factions.get_mut(&fid) else {
            return;
        };
        let region_id = unit.region;
        let mut ctx = OrderCtx {
            unit,
            faction,
            region: world.regions.get_mut(&region_id),
            registries: &world.registries,
            config: self.config,
            check: None,
        };
        dispatch(kind, &mut ctx, cursor);
    }

    /// End of document: an implicit `#end`.
    fn finish(mut self) -> Vec<String> {
        self.force_close_chain();
        self.orphans
    }
}

struct CheckParser<'a> {
    registries: &'a Registries,
    config: &'a GameConfig,
    faction: Faction,
    unit: Unit,
    log: CheckLog,
    /// Echo indentation level.
    depth: usize,
    /// Open FORM levels, inside and outside the TURN scratch.
    form_depth: usize,
    /// The form depth when the TURN scratch opened.
    turn_form_base: usize,
    have_faction: bool,
    have_unit: bool,
}

impl CheckParser<'_> {
    fn line(&mut self, raw: &str) {
        let (stripped, _marked) = strip_at_marker(raw);
        let mut cursor = Cursor::new(&stripped);
        let Some(first) = cursor.next_token() else {
            self.log.echo(raw, self.depth);
            return;
        };
        match lookup(&first) {
            Some(OrderKind::AtlantisOpen) => self.open_faction(raw, &mut cursor),
            Some(OrderKind::AtlantisClose) => {
                self.force_close_chain();
                self.log.echo(raw, 0);
                self.have_faction = false;
                self.have_unit = false;
            }
            Some(OrderKind::Unit) => self.select_unit(raw, &mut cursor),
            Some(OrderKind::Form) => self.open_form(raw, &mut cursor),
            Some(kind @ (OrderKind::End | OrderKind::EndForm)) => self.close_form(raw, kind),
            Some(OrderKind::Turn) => self.open_turn(raw),
            Some(OrderKind::EndTurn) => self.close_turn(raw),
            Some(kind) => {
                self.log.echo(raw, self.depth);
                self.dispatch_order(kind, &mut cursor);
            }
            None => {
                self.log.echo(raw, self.depth);
                self.log.error(&format!("{first} is not a valid order."));
            }
        }
    }

    fn require_actor(&mut self) -> bool {
        if !self.have_faction {
            self.log.error("Order given without a faction selected.");
            false
        } else if !self.have_unit {
            self.log.error("Order given without a unit selected.");
            false
        } else {
            true
        }
    }

    /// FORM levels opened inside the current TURN scratch, or all open
    /// levels when no scratch is active.
    fn inner_forms(&self) -> usize {
        if self.unit.in_turn_block {
            self.form_depth - self.turn_form_base
        } else {
            self.form_depth
        }
    }

    fn force_close_chain(&mut self) {
        if self.unit.in_turn_block {
            self.log.error("TURN: without ENDTURN.");
            self.unit.leave_turn_scratch();
        }
        for _ in 0..self.form_depth {
            self.log.error("FORM: without END.");
        }
        self.form_depth = 0;
        self.turn_form_base = 0;
        self.depth = 0;
    }

    fn open_faction(&mut self, raw: &str, cursor: &mut Cursor) {
        self.force_close_chain();
        self.log.echo(raw, 0);
        let NumToken::Value(_) = positive_number(cursor) else {
            self.log.error("#atlantis: Invalid faction number.");
            self.have_faction = false;
            self.have_unit = false;
            return;
        };
        // Any password is accepted here; only the real parse verifies it.
        self.have_faction = true;
        self.have_unit = false;
        self.unit = Unit::new(UnitId::new(0), self.faction.id, RegionId::new(0));
    }

    fn select_unit(&mut self, raw: &str, cursor: &mut Cursor) {
        self.force_close_chain();
        self.log.echo(raw, 0);
        if !self.have_faction {
            self.log.error("Order given without a faction selected.");
            return;
        }
        match positive_number(cursor) {
            NumToken::Missing => self.log.error("UNIT: No unit number given."),
            NumToken::Invalid => self.log.error("UNIT: Invalid unit number."),
            NumToken::Value(number) => {
                self.unit = Unit::new(UnitId::new(number), self.faction.id, RegionId::new(0));
                self.have_unit = true;
            }
        }
    }

    fn open_form(&mut self, raw: &str, cursor: &mut Cursor) {
        self.log.echo(raw, self.depth);
        if !self.require_actor() {
            return;
        }
        match positive_number(cursor) {
            NumToken::Missing => self.log.error("FORM: No alias given."),
            NumToken::Invalid => self.log.error("FORM: Invalid alias."),
            NumToken::Value(_) => {
                self.form_depth += 1;
                self.depth += 1;
            }
        }
    }

    fn close_form(&mut self, raw: &str, kind: OrderKind) {
        if self.inner_forms() > 0 {
            self.depth = self.depth.saturating_sub(1);
            self.log.echo(raw, self.depth);
            self.form_depth -= 1;
        } else if self.unit.in_turn_block && kind == OrderKind::End {
            // A bare END inside a TURN block is an illegal closure of the
            // block; the END itself then closes an outer FORM if one is
            // open.
            self.depth = self.depth.saturating_sub(1);
            self.log.echo(raw, self.depth);
            self.log.error("TURN: without ENDTURN.");
            self.unit.leave_turn_scratch();
            self.turn_form_base = 0;
            if self.form_depth > 0 {
                self.form_depth -= 1;
                self.depth = self.depth.saturating_sub(1);
            } else {
                self.log.error("END: without FORM.");
            }
        } else if self.unit.in_turn_block {
            // ENDFORM past the block's own depth is captured silently in
            // commit mode; mirror that here.
            self.log.echo(raw, self.depth);
        } else {
            self.log.echo(raw, self.depth);
            let kw = if kind == OrderKind::End { "END" } else { "ENDFORM" };
            self.log.error(&format!("{kw}: without FORM."));
        }
    }

    fn open_turn(&mut self, raw: &str) {
        self.log.echo(raw, self.depth);
        if !self.require_actor() {
            return;
        }
        if self.unit.in_turn_block {
            self.log.error("TURN: cannot be nested.");
        } else {
            self.unit.enter_turn_scratch();
            self.turn_form_base = self.form_depth;
            self.depth += 1;
        }
    }

    fn close_turn(&mut self, raw: &str) {
        if self.unit.in_turn_block {
            let excess = self.inner_forms();
            self.depth = self.depth.saturating_sub(excess + 1);
            self.log.echo(raw, self.depth);
            for _ in 0..excess {
                self.log.error("FORM: without END.");
            }
            self.form_depth = self.turn_form_base;
            self.turn_form_base = 0;
            self.unit.leave_turn_scratch();
        } else {
            self.log.echo(raw, self.depth);
            self.log.error("ENDTURN: without TURN.");
        }
    }

    fn dispatch_order(&mut self, kind: OrderKind, cursor: &mut Cursor) {
        if !self.require_actor() {
            return;
        }
        let mut ctx = OrderCtx {
            unit: &mut self.unit,
            faction: &mut self.faction,
            region: None,
            registries: self.registries,
            config: self.config,
            check: Some(&mut self.log),
        };
        dispatch(kind, &mut ctx, cursor);
    }

    fn finish(mut self) -> CheckReport {
        self.force_close_chain();
        self.log.finish()
    }
}
