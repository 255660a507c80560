//! Magic and instruction builders.

use veilmarch_orders::{CastArgs, CastOrder, MonthOrder, StudyOrder, TeachOrder, UnitRef};

use crate::builders::args::{lookup_skill, next_number, parse_unit_ref_token};
use crate::builders::set_month_order;
use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// CAST: fills the cast slot. The argument form depends on the spell;
/// the grammar accepts any of the generic shapes and leaves spell
/// compatibility to the resolution engine.
pub(crate) fn order_cast(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.error("CAST: No skill given.");
        return;
    };
    let Some(skill) = lookup_skill(ctx, &token, "CAST") else {
        return;
    };
    if !ctx.registries.skills.get(skill).is_some_and(|def| def.magic) {
        ctx.error("CAST: That is not a spell.");
        return;
    }

    let args = match cursor.next_token().as_deref().map(str::to_ascii_lowercase) {
        None => CastArgs::Plain,
        Some(word) if word == "region" => {
            let mut coord = || cursor.next_token().and_then(|t| t.parse::<i32>().ok());
            let (Some(x), Some(y)) = (coord(), coord()) else {
                ctx.error("CAST: Invalid coordinates.");
                return;
            };
            let z = coord();
            CastArgs::Region { x, y, z }
        }
        Some(word) if word == "units" => {
            let mut targets = Vec::new();
            while let Some(token) = cursor.next_token() {
                let Some(target) = parse_unit_ref_token(ctx, cursor, "CAST", &token) else {
                    return;
                };
                if target == UnitRef::None {
                    ctx.error("CAST: Invalid target.");
                    return;
                }
                targets.push(target);
            }
            if targets.is_empty() {
                ctx.error("CAST: No target given.");
                return;
            }
            CastArgs::Units(targets)
        }
        Some(word) if word == "level" => {
            let Some(level) = next_number(cursor).filter(|&n| n > 0) else {
                ctx.error("CAST: Invalid level.");
                return;
            };
            CastArgs::Level(level)
        }
        Some(_) => {
            ctx.error("CAST: Invalid argument.");
            return;
        }
    };
    ctx.unit.cast = Some(CastOrder { skill, args });
}

/// STUDY: fills the month slot with study toward an optional level goal.
pub(crate) fn order_study(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.error("STUDY: No skill given.");
        return;
    };
    let Some(skill) = lookup_skill(ctx, &token, "STUDY") else {
        return;
    };
    let level = match cursor.next_token() {
        None => None,
        Some(token) => match token.parse::<u32>() {
            Ok(level) if level > 0 => Some(level),
            _ => {
                ctx.error("STUDY: Invalid level.");
                return;
            }
        },
    };
    set_month_order(ctx, MonthOrder::Study(StudyOrder { skill, level }));
}

/// TEACH: adds students. Repeated TEACH orders extend the existing month
/// order instead of overwriting it.
pub(crate) fn order_teach(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(first) = cursor.next_token() else {
        ctx.error("TEACH: No target given.");
        return;
    };
    let mut targets = Vec::new();
    let mut token = Some(first);
    while let Some(word) = token {
        if let Some(target) = parse_unit_ref_token(ctx, cursor, "TEACH", &word) {
            if target == UnitRef::None {
                ctx.error("TEACH: Invalid target.");
            } else {
                targets.push(target);
            }
        }
        token = cursor.next_token();
    }
    if targets.is_empty() {
        return;
    }
    if let Some(MonthOrder::Teach(teach)) = &mut ctx.unit.month {
        teach.targets.extend(targets);
    } else {
        set_month_order(ctx, MonthOrder::Teach(TeachOrder { targets }));
    }
}

/// FORGET: queue a skill to be unlearned.
pub(crate) fn order_forget(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.error("FORGET: No skill given.");
        return;
    };
    let Some(skill) = lookup_skill(ctx, &token, "FORGET") else {
        return;
    };
    ctx.unit.forgets.push(skill);
}
