//! Combat and stealth builders.

use veilmarch_orders::{ItemClass, StealthOrder, UnitRef};

use crate::builders::args::{lookup_item, lookup_skill, parse_unit_ref, parse_unit_ref_token};
use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// ATTACK: one or more targets appended to the attack list.
pub(crate) fn order_attack(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(first) = cursor.next_token() else {
        ctx.error("ATTACK: No target given.");
        return;
    };
    let mut token = Some(first);
    while let Some(word) = token {
        if let Some(target) = parse_unit_ref_token(ctx, cursor, "ATTACK", &word) {
            if target == UnitRef::None {
                ctx.error("ATTACK: Invalid target.");
            } else {
                ctx.unit.attacks.push(target);
            }
        }
        token = cursor.next_token();
    }
}

/// COMBAT: select a combat spell, or clear the selection with no
/// argument.
pub(crate) fn order_combat(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.unit.combat_spell = None;
        return;
    };
    let Some(skill) = lookup_skill(ctx, &token, "COMBAT") else {
        return;
    };
    if !ctx.registries.skills.get(skill).is_some_and(|def| def.magic) {
        ctx.error("COMBAT: That is not a combat spell.");
        return;
    }
    ctx.unit.combat_spell = Some(skill);
}

/// PREPARE: select a battle item, or clear the selection with no
/// argument.
pub(crate) fn order_prepare(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.unit.prepared = None;
        return;
    };
    let Some(item) = lookup_item(ctx, &token, "PREPARE") else {
        return;
    };
    if !ctx.registries.items.get(item).is_some_and(|def| def.class == ItemClass::Battle) {
        ctx.error("PREPARE: That item cannot be prepared.");
        return;
    }
    ctx.unit.prepared = Some(item);
}

/// ARMOR/WEAPON: replace the preference list, most preferred first. No
/// arguments clears the list.
pub(crate) fn order_ready(ctx: &mut OrderCtx, cursor: &mut Cursor, armor: bool) {
    let kw = if armor { "ARMOR" } else { "WEAPON" };
    let wanted = if armor { ItemClass::Armor } else { ItemClass::Weapon };
    let mut prefs = Vec::new();
    while let Some(token) = cursor.next_token() {
        let Some(item) = lookup_item(ctx, &token, kw) else {
            continue;
        };
        if ctx.registries.items.get(item).is_some_and(|def| def.class == wanted) {
            prefs.push(item);
        } else if armor {
            ctx.error("ARMOR: That is not armor.");
        } else {
            ctx.error("WEAPON: That is not a weapon.");
        }
    }
    if armor {
        ctx.unit.armor_prefs = prefs;
    } else {
        ctx.unit.weapon_prefs = prefs;
    }
}

/// STEAL: fills the shared stealth slot with a theft attempt.
pub(crate) fn order_steal(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(target) = parse_unit_ref(ctx, cursor, "STEAL") else {
        return;
    };
    if target == UnitRef::None {
        ctx.error("STEAL: Invalid target.");
        return;
    }
    let Some(token) = cursor.next_token() else {
        ctx.error("STEAL: No item given.");
        return;
    };
    let Some(item) = lookup_item(ctx, &token, "STEAL") else {
        return;
    };
    ctx.unit.stealth = Some(StealthOrder::Steal { target, item });
}

/// ASSASSINATE: fills the shared stealth slot with a kill attempt.
pub(crate) fn order_assassinate(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(target) = parse_unit_ref(ctx, cursor, "ASSASSINATE") else {
        return;
    };
    if target == UnitRef::None {
        ctx.error("ASSASSINATE: Invalid target.");
        return;
    }
    ctx.unit.stealth = Some(StealthOrder::Assassinate { target });
}
