//! Faction-level and naming builders.

use veilmarch_foundation::FactionId;
use veilmarch_orders::{Attitude, FindTarget, ShowRequest, TemplateFormat};
use veilmarch_world::QuitIntent;

use crate::builders::args::{legalize_name, lookup_item, lookup_skill, next_number};
use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// NAME: rename the unit, faction, owned structure, or settlement.
pub(crate) fn order_name(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(kind) = cursor.next_token() else {
        ctx.error("NAME: No argument.");
        return;
    };
    let Some(name) = cursor.next_token().and_then(|raw| legalize_name(&raw)) else {
        ctx.error("NAME: Invalid name.");
        return;
    };
    match kind.to_ascii_lowercase().as_str() {
        "unit" => ctx.unit.name = name,
        "faction" => ctx.faction.name = name,
        "object" | "building" | "ship" | "structure" => {
            if ctx.commit() {
                rename_structure(ctx, name);
            }
        }
        "city" => {
            if ctx.commit() {
                if let Some(region) = ctx.region.as_deref_mut() {
                    region.name = name;
                }
            }
        }
        _ => ctx.error("NAME: Can't name that."),
    }
}

/// Renames the structure the unit occupies and owns.
fn rename_structure(ctx: &mut OrderCtx, name: String) {
    let Some(num) = ctx.unit.object else {
        ctx.error("NAME: Not inside a structure.");
        return;
    };
    let owner = ctx
        .region
        .as_deref()
        .and_then(|region| region.structures.get(&num))
        .and_then(|structure| structure.owner);
    if owner != Some(ctx.unit.id) {
        ctx.error("NAME: Must own the structure.");
        return;
    }
    if let Some(region) = ctx.region.as_deref_mut() {
        if let Some(structure) = region.structures.get_mut(&num) {
            structure.name = name;
        }
    }
}

/// DESCRIBE: set or clear a description on the unit or its structure.
pub(crate) fn order_describe(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(kind) = cursor.next_token() else {
        ctx.error("DESCRIBE: No argument.");
        return;
    };
    let text = cursor.next_token().and_then(|raw| legalize_name(&raw));
    match kind.to_ascii_lowercase().as_str() {
        "unit" => ctx.unit.description = text,
        "object" | "building" | "ship" | "structure" => {
            if ctx.commit() {
                describe_structure(ctx, text);
            }
        }
        _ => ctx.error("DESCRIBE: Can't describe that."),
    }
}

/// Describes the structure the unit occupies and owns.
fn describe_structure(ctx: &mut OrderCtx, text: Option<String>) {
    let Some(num) = ctx.unit.object else {
        ctx.error("DESCRIBE: Not inside a structure.");
        return;
    };
    let owner = ctx
        .region
        .as_deref()
        .and_then(|region| region.structures.get(&num))
        .and_then(|structure| structure.owner);
    if owner != Some(ctx.unit.id) {
        ctx.error("DESCRIBE: Must own the structure.");
        return;
    }
    if let Some(region) = ctx.region.as_deref_mut() {
        if let Some(structure) = region.structures.get_mut(&num) {
            structure.description = text;
        }
    }
}

/// ADDRESS: set the faction's contact address.
pub(crate) fn order_address(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(address) = cursor.next_token() else {
        ctx.error("ADDRESS: No address given.");
        return;
    };
    ctx.faction.address = address;
}

/// PASSWORD: set the order password. No argument, or the word `none`,
/// clears it back to the accept-anything sentinel.
pub(crate) fn order_password(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let password = cursor.next_token().filter(|word| !word.eq_ignore_ascii_case("none"));
    ctx.faction.password = password;
    if ctx.commit() {
        ctx.faction.event("Password changed.");
    }
}

/// OPTION: toggle faction reporting options.
pub(crate) fn order_option(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(option) = cursor.next_token() else {
        ctx.error("OPTION: No option given.");
        return;
    };
    match option.to_ascii_lowercase().as_str() {
        "times" => ctx.faction.times = true,
        "notimes" => ctx.faction.times = false,
        "showattitudes" => ctx.faction.show_attitudes = true,
        "dontshowattitudes" => ctx.faction.show_attitudes = false,
        "template" => {
            let format = cursor.next_token().and_then(|t| TemplateFormat::from_token(&t));
            match format {
                Some(format) => ctx.faction.template = format,
                None => ctx.error("OPTION: Invalid template type."),
            }
        }
        _ => ctx.error("OPTION: Invalid option."),
    }
}

/// DECLARE: set, change, or clear an attitude. `DEFAULT` requires an
/// attitude; a specific faction without one clears the declaration.
pub(crate) fn order_declare(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(who) = cursor.next_token() else {
        ctx.error("DECLARE: No faction given.");
        return;
    };
    let attitude = match cursor.next_token() {
        None => None,
        Some(token) => match Attitude::from_token(&token) {
            Some(attitude) => Some(attitude),
            None => {
                ctx.error("DECLARE: Invalid attitude.");
                return;
            }
        },
    };
    if who.eq_ignore_ascii_case("default") {
        let Some(attitude) = attitude else {
            ctx.error("DECLARE: No attitude given.");
            return;
        };
        ctx.faction.default_attitude = attitude;
        return;
    }
    let target = match who.parse::<u32>() {
        Ok(num) if num > 0 => FactionId::new(num),
        _ => {
            ctx.error("DECLARE: Invalid faction number.");
            return;
        }
    };
    if ctx.commit() && target == ctx.faction.id {
        ctx.error("DECLARE: Can't declare towards your own faction.");
        return;
    }
    ctx.faction.declare(target, attitude);
}

/// FACTION: reallocate war/trade/magic points. Unnamed categories reset
/// to zero; the total is capped by the rule set.
pub(crate) fn order_faction(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let mut war = None;
    let mut trade = None;
    let mut magic = None;
    while let Some(token) = cursor.next_token() {
        let slot = match token.to_ascii_lowercase().as_str() {
            "war" => &mut war,
            "trade" => &mut trade,
            "magic" => &mut magic,
            _ => {
                ctx.error("FACTION: Invalid argument.");
                return;
            }
        };
        let Some(points) = next_number(cursor) else {
            ctx.error("FACTION: Invalid number of points.");
            return;
        };
        *slot = Some(points);
    }
    if war.is_none() && trade.is_none() && magic.is_none() {
        ctx.error("FACTION: No arguments given.");
        return;
    }
    let (war, trade, magic) = (war.unwrap_or(0), trade.unwrap_or(0), magic.unwrap_or(0));
    if war + trade + magic > ctx.config.faction_points {
        ctx.error("FACTION: Too many faction points.");
        return;
    }
    ctx.faction.war_points = war;
    ctx.faction.trade_points = trade;
    ctx.faction.magic_points = magic;
}

/// QUIT/RESTART: leave the game at end of turn. Commit mode demands the
/// faction's password on the line.
pub(crate) fn order_quit(ctx: &mut OrderCtx, cursor: &mut Cursor, restart: bool) {
    let kw = if restart { "RESTART" } else { "QUIT" };
    let candidate = cursor.next_token();
    if ctx.commit() && !ctx.faction.password_matches(candidate.as_deref()) {
        ctx.error(format!("{kw}: Must give the correct password."));
        return;
    }
    ctx.faction.quit = Some(if restart { QuitIntent::Restart } else { QuitIntent::Quit });
}

/// SHOW: request a rules description in the next report. Check mode
/// counts requests against the cap instead of recording them.
pub(crate) fn order_show(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if let Some(log) = ctx.check.as_deref_mut() {
        if !log.allow_show() {
            return;
        }
    }
    let Some(kind) = cursor.next_token() else {
        ctx.error("SHOW: No argument.");
        return;
    };
    let request = match kind.to_ascii_lowercase().as_str() {
        "skill" => {
            let Some(token) = cursor.next_token() else {
                ctx.error("SHOW: No skill given.");
                return;
            };
            let Some(skill) = lookup_skill(ctx, &token, "SHOW") else {
                return;
            };
            let Some(level) = next_number(cursor).filter(|&n| n > 0) else {
                ctx.error("SHOW: No level given.");
                return;
            };
            ShowRequest::Skill { skill, level }
        }
        "item" => {
            let Some(token) = cursor.next_token() else {
                ctx.error("SHOW: No item given.");
                return;
            };
            let Some(item) = lookup_item(ctx, &token, "SHOW") else {
                return;
            };
            ShowRequest::Item(item)
        }
        "object" => {
            let Some(token) = cursor.next_token() else {
                ctx.error("SHOW: No structure given.");
                return;
            };
            let Some(kind) = ctx.registries.structures.find(&token) else {
                ctx.error("SHOW: No such structure.");
                return;
            };
            ShowRequest::Object(kind)
        }
        _ => {
            ctx.error("SHOW: Invalid value.");
            return;
        }
    };
    if ctx.commit() {
        ctx.faction.shows.push(request);
    }
}

/// FIND: request another faction's contact address.
pub(crate) fn order_find(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.error("FIND: No faction given.");
        return;
    };
    let target = if token.eq_ignore_ascii_case("all") {
        FindTarget::All
    } else {
        match token.parse::<u32>() {
            Ok(num) if num > 0 => FindTarget::Faction(FactionId::new(num)),
            _ => {
                ctx.error("FIND: Invalid faction number.");
                return;
            }
        }
    };
    ctx.unit.finds.push(target);
}
