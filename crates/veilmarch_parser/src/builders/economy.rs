//! Economy builders: transfers, trade, production, construction, taxing.

use veilmarch_orders::{
    BuildOrder, BuildTask, ExchangeOrder, GiveOrder, GivePayload, ItemClass, ItemSpec, MonthOrder,
    ProduceOrder, TaxMode, TradeAmount, TradeOrder, TransferKind, TransportOrder, UnitRef,
    WithdrawOrder,
};
use veilmarch_world::{Region, Structure};

use crate::builders::args::{lookup_item, next_number, parse_unit_ref};
use crate::builders::set_month_order;
use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// GIVE/TAKE: move goods (or a whole unit) between units. `GIVE 0 …`
/// discards the goods.
pub(crate) fn order_give(ctx: &mut OrderCtx, cursor: &mut Cursor, kind: TransferKind) {
    let kw = match kind {
        TransferKind::Give => "GIVE",
        TransferKind::Take => "TAKE",
    };
    if kind == TransferKind::Take {
        match cursor.next_token().as_deref().map(str::to_ascii_lowercase) {
            Some(word) if word == "from" => {}
            _ => {
                ctx.error("TAKE: Expected FROM.");
                return;
            }
        }
    }
    let Some(target) = parse_unit_ref(ctx, cursor, kw) else {
        return;
    };
    let Some(amount) = cursor.next_token() else {
        ctx.error(format!("{kw}: No amount given."));
        return;
    };

    let order = match amount.to_ascii_lowercase().as_str() {
        "unit" => {
            if cursor.has_more() {
                ctx.error(format!("{kw}: UNIT takes no further arguments."));
                return;
            }
            Some(GiveOrder { kind, target, payload: GivePayload::WholeUnit, unfinished: false })
        }
        "all" => parse_give_all(ctx, cursor, kw, kind, target),
        _ => match amount.parse::<u32>() {
            Ok(count) if count > 0 => parse_give_amount(ctx, cursor, kw, kind, target, count),
            _ => {
                ctx.error(format!("{kw}: Invalid amount."));
                None
            }
        },
    };
    if let Some(order) = order {
        ctx.unit.gives.push(order);
    }
}

/// The `ALL <item or class> [UNFINISHED] [EXCEPT n]` tail of GIVE/TAKE.
fn parse_give_all(
    ctx: &mut OrderCtx,
    cursor: &mut Cursor,
    kw: &str,
    kind: TransferKind,
    target: UnitRef,
) -> Option<GiveOrder> {
    let (token, unfinished) = pull_unfinished(ctx, cursor, kw)?;
    let spec = if let Some(class) = ItemClass::from_token(&token) {
        ItemSpec::Class(class)
    } else {
        let item = lookup_item(ctx, &token, kw)?;
        ItemSpec::Item(item)
    };
    if unfinished && !check_unfinished(ctx, kw, &spec) {
        return None;
    }

    let mut except = None;
    if let Some(word) = cursor.next_token() {
        if !word.eq_ignore_ascii_case("except") {
            ctx.error(format!("{kw}: Invalid argument."));
            return None;
        }
        if matches!(spec, ItemSpec::Class(_)) {
            ctx.error(format!("{kw}: EXCEPT requires a specific item."));
            return None;
        }
        let Some(keep) = next_number(cursor).filter(|&n| n > 0) else {
            ctx.error(format!("{kw}: Invalid EXCEPT amount."));
            return None;
        };
        except = Some(keep);
    }
    Some(GiveOrder { kind, target, payload: GivePayload::All { spec, except }, unfinished })
}

/// The `<count> [UNFINISHED] <item>` tail of GIVE/TAKE.
fn parse_give_amount(
    ctx: &mut OrderCtx,
    cursor: &mut Cursor,
    kw: &str,
    kind: TransferKind,
    target: UnitRef,
    count: u32,
) -> Option<GiveOrder> {
    let (token, unfinished) = pull_unfinished(ctx, cursor, kw)?;
    let item = lookup_item(ctx, &token, kw)?;
    if unfinished && !check_unfinished(ctx, kw, &ItemSpec::Item(item)) {
        return None;
    }
    Some(GiveOrder { kind, target, payload: GivePayload::Amount { count, item }, unfinished })
}

/// Pulls the item token, noting a leading `UNFINISHED` qualifier.
fn pull_unfinished(ctx: &mut OrderCtx, cursor: &mut Cursor, kw: &str) -> Option<(String, bool)> {
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No item given."));
        return None;
    };
    if !token.eq_ignore_ascii_case("unfinished") {
        return Some((token, false));
    }
    let Some(item) = cursor.next_token() else {
        ctx.error(format!("{kw}: No item given."));
        return None;
    };
    Some((item, true))
}

/// `UNFINISHED` only applies to items that have an unfinished form.
fn check_unfinished(ctx: &mut OrderCtx, kw: &str, spec: &ItemSpec) -> bool {
    let ok = match spec {
        ItemSpec::Item(item) => {
            ctx.registries.items.get(*item).is_some_and(|def| def.has_unfinished)
        }
        ItemSpec::Class(_) => false,
    };
    if !ok {
        ctx.error(format!("{kw}: Item has no unfinished form."));
    }
    ok
}

/// BUY/SELL: trade against the region's market.
pub(crate) fn order_trade(ctx: &mut OrderCtx, cursor: &mut Cursor, buying: bool) {
    let kw = if buying { "BUY" } else { "SELL" };
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No amount given."));
        return;
    };
    let amount = if token.eq_ignore_ascii_case("all") {
        TradeAmount::All
    } else {
        match token.parse::<u32>() {
            Ok(count) if count > 0 => TradeAmount::Count(count),
            _ => {
                ctx.error(format!("{kw}: Invalid amount."));
                return;
            }
        }
    };
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No item given."));
        return;
    };
    let Some(item) = lookup_item(ctx, &token, kw) else {
        return;
    };
    let order = TradeOrder { amount, item };
    if buying {
        ctx.unit.buys.push(order);
    } else {
        ctx.unit.sells.push(order);
    }
}

/// WITHDRAW: draw goods against the faction's unclaimed silver. The
/// amount defaults to one.
pub(crate) fn order_withdraw(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    if !ctx.config.allow_withdraw {
        ctx.error("WITHDRAW: Withdraw is not allowed.");
        return;
    }
    let Some(first) = cursor.next_token() else {
        ctx.error("WITHDRAW: No item given.");
        return;
    };
    let (amount, token) = match first.parse::<u32>() {
        Ok(amount) if amount > 0 => {
            let Some(token) = cursor.next_token() else {
                ctx.error("WITHDRAW: No item given.");
                return;
            };
            (amount, token)
        }
        Ok(_) => {
            ctx.error("WITHDRAW: Invalid amount.");
            return;
        }
        Err(_) => (1, first),
    };
    let Some(item) = lookup_item(ctx, &token, "WITHDRAW") else {
        return;
    };
    if !ctx.registries.items.get(item).is_some_and(|def| def.withdrawable) {
        ctx.error("WITHDRAW: Can't withdraw that.");
        return;
    }
    ctx.unit.withdraws.push(WithdrawOrder { amount, item });
}

/// TRANSPORT/DISTRIBUTE: long-range shipment to another unit.
pub(crate) fn order_transport(ctx: &mut OrderCtx, cursor: &mut Cursor, distribute: bool) {
    let kw = if distribute { "DISTRIBUTE" } else { "TRANSPORT" };
    if !ctx.config.allow_transport {
        ctx.error(format!("{kw}: Transport is not allowed."));
        return;
    }
    let Some(target) = parse_unit_ref(ctx, cursor, kw) else {
        return;
    };
    if target == UnitRef::None {
        ctx.error(format!("{kw}: Invalid target."));
        return;
    }
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No amount given."));
        return;
    };
    let amount = if token.eq_ignore_ascii_case("all") {
        TradeAmount::All
    } else {
        match token.parse::<u32>() {
            Ok(count) if count > 0 => TradeAmount::Count(count),
            _ => {
                ctx.error(format!("{kw}: Invalid amount."));
                return;
            }
        }
    };
    let Some(token) = cursor.next_token() else {
        ctx.error(format!("{kw}: No item given."));
        return;
    };
    let Some(item) = lookup_item(ctx, &token, kw) else {
        return;
    };
    let transportable =
        ctx.registries.items.get(item).is_some_and(|def| def.class.transportable());
    if !transportable {
        ctx.error(format!("{kw}: Can't transport that."));
        return;
    }

    let mut except = None;
    if let Some(word) = cursor.next_token() {
        if !word.eq_ignore_ascii_case("except") {
            ctx.error(format!("{kw}: Invalid argument."));
            return;
        }
        if amount != TradeAmount::All {
            ctx.error(format!("{kw}: EXCEPT requires ALL."));
            return;
        }
        let Some(keep) = next_number(cursor).filter(|&n| n > 0) else {
            ctx.error(format!("{kw}: Invalid EXCEPT amount."));
            return;
        };
        except = Some(keep);
    }
    ctx.unit.transports.push(TransportOrder { target, amount, item, except, distribute });
}

/// EXCHANGE: propose an item swap with another unit. Ships stay put.
pub(crate) fn order_exchange(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(target) = parse_unit_ref(ctx, cursor, "EXCHANGE") else {
        return;
    };
    if target == UnitRef::None {
        ctx.error("EXCHANGE: Invalid target.");
        return;
    }
    let Some(give_amount) = next_number(cursor).filter(|&n| n > 0) else {
        ctx.error("EXCHANGE: Invalid amount.");
        return;
    };
    let Some(token) = cursor.next_token() else {
        ctx.error("EXCHANGE: No item given.");
        return;
    };
    let Some(give_item) = lookup_item(ctx, &token, "EXCHANGE") else {
        return;
    };
    let Some(expect_amount) = next_number(cursor).filter(|&n| n > 0) else {
        ctx.error("EXCHANGE: Invalid amount.");
        return;
    };
    let Some(token) = cursor.next_token() else {
        ctx.error("EXCHANGE: No item given.");
        return;
    };
    let Some(expect_item) = lookup_item(ctx, &token, "EXCHANGE") else {
        return;
    };
    let is_ship = |item| {
        ctx.registries.items.get(item).is_some_and(|def| def.class == ItemClass::Ship)
    };
    if is_ship(give_item) || is_ship(expect_item) {
        ctx.error("EXCHANGE: Can't exchange ships.");
        return;
    }
    ctx.unit.exchanges.push(ExchangeOrder {
        target,
        give_amount,
        give_item,
        expect_amount,
        expect_item,
    });
}

/// CLAIM: pull silver from the faction's unclaimed pool. The resource
/// check only applies in commit mode; the check dummy has no pool.
pub(crate) fn order_claim(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.error("CLAIM: No amount given.");
        return;
    };
    let Ok(amount) = token.parse::<u32>() else {
        ctx.error("CLAIM: Invalid amount.");
        return;
    };
    if amount == 0 {
        ctx.error("CLAIM: Invalid amount.");
        return;
    }
    if ctx.commit() {
        if amount > ctx.faction.unclaimed {
            ctx.error("CLAIM: Not enough unclaimed silver.");
            return;
        }
        ctx.faction.unclaimed -= amount;
        ctx.unit.claimed += amount;
        ctx.event(format!("Claims {amount} silver."));
    }
}

/// PRODUCE: extract or craft goods with the item's production skill.
pub(crate) fn order_produce(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(first) = cursor.next_token() else {
        ctx.error("PRODUCE: No item given.");
        return;
    };
    let (amount, token) = match first.parse::<u32>() {
        Ok(amount) if amount > 0 => {
            let Some(token) = cursor.next_token() else {
                ctx.error("PRODUCE: No item given.");
                return;
            };
            (Some(amount), token)
        }
        Ok(_) => {
            ctx.error("PRODUCE: Invalid amount.");
            return;
        }
        Err(_) => (None, first),
    };
    let Some(item) = lookup_item(ctx, &token, "PRODUCE") else {
        return;
    };
    let skill = ctx.registries.items.get(item).and_then(|def| def.produce_skill);
    if skill.is_none() {
        ctx.error("PRODUCE: Can't produce that.");
        return;
    }
    set_month_order(ctx, MonthOrder::Produce(ProduceOrder { item, amount, skill }));
}

/// BUILD: continue the current structure, help another builder, start a
/// new structure kind, or work on a ship.
pub(crate) fn order_build(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        if ctx.commit() && ctx.unit.object.is_none() {
            ctx.error("BUILD: Not inside a structure.");
            return;
        }
        set_month_order(ctx, MonthOrder::Build(BuildOrder { task: BuildTask::Continue }));
        return;
    };

    if token.eq_ignore_ascii_case("help") {
        let Some(target) = parse_unit_ref(ctx, cursor, "BUILD") else {
            return;
        };
        if target == UnitRef::None {
            ctx.error("BUILD: Invalid target.");
            return;
        }
        set_month_order(ctx, MonthOrder::Build(BuildOrder { task: BuildTask::Help(target) }));
        return;
    }

    if let Some(kind) = ctx.registries.structures.find(&token) {
        let def = ctx.registries.structures.get(kind);
        let buildable = def.is_some_and(|def| def.buildable);
        let kind_name = def.map_or("structure", |def| def.name);
        if !buildable {
            ctx.error("BUILD: Can't build that.");
            return;
        }
        if ctx.commit() {
            let Some(num) = ctx.region.as_deref().and_then(Region::free_structure_num) else {
                ctx.error("BUILD: No room for a new structure.");
                return;
            };
            if let Some(region) = ctx.region.as_deref_mut() {
                let mut shell = Structure::new(num, kind, kind_name);
                shell.owner = Some(ctx.unit.id);
                // Nonzero marks the shell unfinished; the resolution
                // engine prices the remaining work.
                shell.incomplete = 1;
                region.add_structure(shell);
            }
            ctx.unit.object = Some(num);
            ctx.event(format!("Starts building a {kind_name}."));
        }
        set_month_order(ctx, MonthOrder::Build(BuildOrder { task: BuildTask::Structure(kind) }));
        return;
    }

    if let Some(item) = ctx.registries.items.find(&token) {
        let def = ctx.registries.items.get(item);
        let is_ship = def.is_some_and(|def| def.class == ItemClass::Ship);
        let can_fly = def.is_some_and(|def| def.can_fly);
        if !is_ship {
            ctx.error("BUILD: Can't build that.");
            return;
        }
        if ctx.commit() && !can_fly {
            let coastal = ctx.region.as_deref().is_some_and(|region| region.coastal);
            if !coastal {
                ctx.error("BUILD: Ships must be built on the coast.");
                return;
            }
        }
        set_month_order(ctx, MonthOrder::Build(BuildOrder { task: BuildTask::Ship(item) }));
        return;
    }

    ctx.error("BUILD: Can't build that.");
}

/// TAX/PILLAGE: a month order under the month-long policy, otherwise an
/// instant tax stance.
pub(crate) fn order_tax(ctx: &mut OrderCtx, pillaging: bool) {
    if ctx.config.month_long_tax_pillage {
        set_month_order(ctx, if pillaging { MonthOrder::Pillage } else { MonthOrder::Tax });
    } else {
        ctx.unit.tax_mode = if pillaging { TaxMode::Pillage } else { TaxMode::Tax };
    }
}
