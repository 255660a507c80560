//! Shared argument grammars.
//!
//! The target-reference, boolean, number, and lookup grammars are used by
//! many builders; each reports its diagnostics under the calling order's
//! keyword so the player sees which line failed.

use veilmarch_foundation::{FactionId, ItemId, SkillId, UnitId};
use veilmarch_orders::UnitRef;

use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// Pulls a non-negative number.
pub(crate) fn next_number(cursor: &mut Cursor) -> Option<u32> {
    cursor.next_token().and_then(|token| token.parse().ok())
}

/// The shared target-reference grammar: `0`, `<num>`, `NEW <alias>`, or
/// `FACTION <f> NEW <alias>`. Reports under `kw` and returns `None` on
/// any failure.
pub(crate) fn parse_unit_ref(ctx: &mut OrderCtx, cursor: &mut Cursor, kw: &str) -> Option<UnitRef> {
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No target given."));
        return None;
    };
    parse_unit_ref_token(ctx, cursor, kw, &token)
}

/// Like [`parse_unit_ref`], starting from an already-pulled token. Used
/// by grammars that peek ahead (ATTACK's target list).
pub(crate) fn parse_unit_ref_token(
    ctx: &mut OrderCtx,
    cursor: &mut Cursor,
    kw: &str,
    token: &str,
) -> Option<UnitRef> {
    match token.to_ascii_lowercase().as_str() {
        "0" => Some(UnitRef::None),
        "new" => {
            let Some(alias) = next_number(cursor).filter(|&a| a > 0) else {
                ctx.error(format!("{kw}: Invalid alias."));
                return None;
            };
            Some(UnitRef::New { faction: None, alias })
        }
        "faction" => {
            let Some(faction) = next_number(cursor).filter(|&f| f > 0) else {
                ctx.error(format!("{kw}: Invalid faction number."));
                return None;
            };
            match cursor.next_token().as_deref().map(str::to_ascii_lowercase) {
                Some(word) if word == "new" => {}
                _ => {
                    ctx.error(format!("{kw}: Invalid target."));
                    return None;
                }
            }
            let Some(alias) = next_number(cursor).filter(|&a| a > 0) else {
                ctx.error(format!("{kw}: Invalid alias."));
                return None;
            };
            Some(UnitRef::New { faction: Some(FactionId::new(faction)), alias })
        }
        _ => match token.parse::<u32>() {
            Ok(num) if num > 0 => Some(UnitRef::Existing(UnitId::new(num))),
            _ => {
                ctx.error(format!("{kw}: Invalid target."));
                None
            }
        },
    }
}

/// The shared boolean grammar. `None` means the token was present but
/// invalid; absence is handled by the caller.
pub(crate) fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "t" | "on" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "off" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Pulls a required boolean for a flag order, reporting absence and
/// invalidity separately.
pub(crate) fn parse_flag_value(ctx: &mut OrderCtx, cursor: &mut Cursor, kw: &str) -> Option<bool> {
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No value given."));
        return None;
    };
    let value = parse_bool(&token);
    if value.is_none() {
        ctx.error(format!("{kw}: Invalid value."));
    }
    value
}

/// Looks up an enabled item, reporting under `kw` when it is unknown.
pub(crate) fn lookup_item(ctx: &mut OrderCtx, token: &str, kw: &str) -> Option<ItemId> {
    let item = ctx.registries.items.find(token);
    if item.is_none() {
        ctx.error(format!("{kw}: No such item."));
    }
    item
}

/// Looks up an enabled skill, reporting under `kw` when it is unknown.
pub(crate) fn lookup_skill(ctx: &mut OrderCtx, token: &str, kw: &str) -> Option<SkillId> {
    let skill = ctx.registries.skills.find(token);
    if skill.is_none() {
        ctx.error(format!("{kw}: No such skill."));
    }
    skill
}

/// Legalizes a player-supplied name: quotes, braces, and tabs are
/// stripped, runs of whitespace collapse to one space. Returns `None`
/// when nothing printable remains.
pub(crate) fn legalize_name(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        match ch {
            '"' | '{' | '}' => {}
            c if c.is_whitespace() => {
                if !out.is_empty() {
                    pending_space = true;
                }
            }
            c => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }
    if out.is_empty() { None } else { Some(out) }
}
