//! Instant unit-flag builders. These mutate the unit during the parse;
//! in check mode the mutations land on the checker's dummy.

use veilmarch_orders::{ConsumeMode, RevealMode, SpoilsFilter, TaxMode};

use crate::builders::args::parse_flag_value;
use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// GUARD: setting the guard stance drops avoidance.
pub(crate) fn order_guard(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(value) = parse_flag_value(ctx, cursor, "GUARD") else {
        return;
    };
    ctx.unit.flags.guard = value;
    if value {
        ctx.unit.flags.avoid = false;
    }
}

/// AVOID: setting avoidance drops the guard stance.
pub(crate) fn order_avoid(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(value) = parse_flag_value(ctx, cursor, "AVOID") else {
        return;
    };
    ctx.unit.flags.avoid = value;
    if value {
        ctx.unit.flags.guard = false;
    }
}

/// BEHIND: fight from the back line.
pub(crate) fn order_behind(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(value) = parse_flag_value(ctx, cursor, "BEHIND") {
        ctx.unit.flags.behind = value;
    }
}

/// HOLD: do not join nearby battles.
pub(crate) fn order_hold(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(value) = parse_flag_value(ctx, cursor, "HOLD") {
        ctx.unit.flags.hold = value;
    }
}

/// SHARE: share goods with faction units in need.
pub(crate) fn order_share(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(value) = parse_flag_value(ctx, cursor, "SHARE") {
        ctx.unit.flags.share = value;
    }
}

/// AUTOTAX: `1` switches the tax stance to automatic; `0` clears it only
/// when it is currently automatic.
pub(crate) fn order_autotax(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(value) = parse_flag_value(ctx, cursor, "AUTOTAX") else {
        return;
    };
    if value {
        ctx.unit.tax_mode = TaxMode::Auto;
    } else if ctx.unit.tax_mode == TaxMode::Auto {
        ctx.unit.tax_mode = TaxMode::None;
    }
}

/// NOAID: do not call for help in battle.
pub(crate) fn order_noaid(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(value) = parse_flag_value(ctx, cursor, "NOAID") {
        ctx.unit.flags.noaid = value;
    }
}

/// NOCROSS: refuse water crossings.
pub(crate) fn order_nocross(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(value) = parse_flag_value(ctx, cursor, "NOCROSS") {
        ctx.unit.flags.nocross = value;
    }
}

/// NOSPOILS: legacy boolean spelling of SPOILS. `1` refuses all spoils,
/// `0` restores the default pick-everything filter.
pub(crate) fn order_nospoils(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(value) = parse_flag_value(ctx, cursor, "NOSPOILS") {
        ctx.unit.flags.spoils = if value { SpoilsFilter::None } else { SpoilsFilter::All };
    }
}

/// CONSUME: upkeep source selection. No argument means none.
pub(crate) fn order_consume(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let mode = match cursor.next_token() {
        None => Some(ConsumeMode::None),
        Some(token) => ConsumeMode::from_token(&token),
    };
    match mode {
        Some(mode) => ctx.unit.flags.consume = mode,
        None => ctx.error("CONSUME: Invalid value."),
    }
}

/// REVEAL: visibility selection. No argument means none.
pub(crate) fn order_reveal(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let mode = match cursor.next_token() {
        None => Some(RevealMode::None),
        Some(token) => RevealMode::from_token(&token),
    };
    match mode {
        Some(mode) => ctx.unit.flags.reveal = mode,
        None => ctx.error("REVEAL: Invalid value."),
    }
}

/// SPOILS: battle-loot filter. No argument restores the default.
pub(crate) fn order_spoils(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let filter = match cursor.next_token() {
        None => Some(SpoilsFilter::All),
        Some(token) => SpoilsFilter::from_token(&token),
    };
    match filter {
        Some(filter) => ctx.unit.flags.spoils = filter,
        None => ctx.error("SPOILS: Invalid value."),
    }
}
