//! Per-keyword order builders.
//!
//! Each builder consumes exactly the tokens its grammar needs from the
//! line cursor, reports specific diagnostics through the context, and
//! either mutates the unit immediately (instant flags) or attaches a
//! typed order to the right slot. In check mode the context carries the
//! checker's dummies, so the same code runs without real side effects.

pub(crate) mod admin;
pub(crate) mod args;
pub(crate) mod combat;
pub(crate) mod economy;
pub(crate) mod flags;
pub(crate) mod magic;
pub(crate) mod movement;

use veilmarch_orders::{MonthOrder, TransferKind};

use crate::context::OrderCtx;
use crate::keywords::OrderKind;
use crate::tokenizer::Cursor;

/// Routes one classified order line to its builder. Framing keywords are
/// handled by the driver and never reach this point.
pub(crate) fn dispatch(kind: OrderKind, ctx: &mut OrderCtx, cursor: &mut Cursor) {
    match kind {
        OrderKind::Move => movement::order_move(ctx, cursor, false),
        OrderKind::Advance => movement::order_move(ctx, cursor, true),
        OrderKind::Sail => movement::order_sail(ctx, cursor),
        OrderKind::Enter => movement::order_enter(ctx, cursor),
        OrderKind::Leave => movement::order_leave(ctx),
        OrderKind::Destroy => movement::order_destroy(ctx),
        OrderKind::Join => movement::order_join(ctx, cursor),
        OrderKind::Promote => movement::order_promote(ctx, cursor),
        OrderKind::Evict => movement::order_evict(ctx, cursor),

        OrderKind::Give => economy::order_give(ctx, cursor, TransferKind::Give),
        OrderKind::Take => economy::order_give(ctx, cursor, TransferKind::Take),
        OrderKind::Buy => economy::order_trade(ctx, cursor, true),
        OrderKind::Sell => economy::order_trade(ctx, cursor, false),
        OrderKind::Withdraw => economy::order_withdraw(ctx, cursor),
        OrderKind::Transport => economy::order_transport(ctx, cursor, false),
        OrderKind::Distribute => economy::order_transport(ctx, cursor, true),
        OrderKind::Exchange => economy::order_exchange(ctx, cursor),
        OrderKind::Claim => economy::order_claim(ctx, cursor),
        OrderKind::Produce => economy::order_produce(ctx, cursor),
        OrderKind::Build => economy::order_build(ctx, cursor),
        OrderKind::Work => set_month_order(ctx, MonthOrder::Work),
        OrderKind::Entertain => set_month_order(ctx, MonthOrder::Entertain),
        OrderKind::Idle => set_month_order(ctx, MonthOrder::Idle),
        OrderKind::Tax => economy::order_tax(ctx, false),
        OrderKind::Pillage => economy::order_tax(ctx, true),

        OrderKind::Attack => combat::order_attack(ctx, cursor),
        OrderKind::Combat => combat::order_combat(ctx, cursor),
        OrderKind::Prepare => combat::order_prepare(ctx, cursor),
        OrderKind::Armor => combat::order_ready(ctx, cursor, true),
        OrderKind::Weapon => combat::order_ready(ctx, cursor, false),
        OrderKind::Steal => combat::order_steal(ctx, cursor),
        OrderKind::Assassinate => combat::order_assassinate(ctx, cursor),

        OrderKind::Cast => magic::order_cast(ctx, cursor),
        OrderKind::Study => magic::order_study(ctx, cursor),
        OrderKind::Teach => magic::order_teach(ctx, cursor),
        OrderKind::Forget => magic::order_forget(ctx, cursor),

        OrderKind::Guard => flags::order_guard(ctx, cursor),
        OrderKind::Avoid => flags::order_avoid(ctx, cursor),
        OrderKind::Behind => flags::order_behind(ctx, cursor),
        OrderKind::Hold => flags::order_hold(ctx, cursor),
        OrderKind::Share => flags::order_share(ctx, cursor),
        OrderKind::Autotax => flags::order_autotax(ctx, cursor),
        OrderKind::Noaid => flags::order_noaid(ctx, cursor),
        OrderKind::Nocross => flags::order_nocross(ctx, cursor),
        OrderKind::Nospoils => flags::order_nospoils(ctx, cursor),
        OrderKind::Consume => flags::order_consume(ctx, cursor),
        OrderKind::Reveal => flags::order_reveal(ctx, cursor),
        OrderKind::Spoils => flags::order_spoils(ctx, cursor),

        OrderKind::Name => admin::order_name(ctx, cursor),
        OrderKind::Describe => admin::order_describe(ctx, cursor),
        OrderKind::Address => admin::order_address(ctx, cursor),
        OrderKind::Password => admin::order_password(ctx, cursor),
        OrderKind::Option => admin::order_option(ctx, cursor),
        OrderKind::Declare => admin::order_declare(ctx, cursor),
        OrderKind::Faction => admin::order_faction(ctx, cursor),
        OrderKind::Quit => admin::order_quit(ctx, cursor, false),
        OrderKind::Restart => admin::order_quit(ctx, cursor, true),
        OrderKind::Show => admin::order_show(ctx, cursor),
        OrderKind::Find => admin::order_find(ctx, cursor),

        OrderKind::AtlantisOpen
        | OrderKind::AtlantisClose
        | OrderKind::Unit
        | OrderKind::Form
        | OrderKind::End
        | OrderKind::EndForm
        | OrderKind::Turn
        | OrderKind::EndTurn => {}
    }
}

/// Fills the month-long slot, warning when it replaces an earlier order.
/// Inside a TURN block's checked scratch the warning names the deferred
/// slot instead.
pub(crate) fn set_month_order(ctx: &mut OrderCtx, order: MonthOrder) {
    if ctx.unit.month_slot_occupied(ctx.config.month_long_tax_pillage) {
        if ctx.unit.in_turn_block {
            ctx.error("Overwriting previous DELAYED monthlong order.");
        } else {
            ctx.error("Overwriting previous monthlong order.");
        }
    }
    ctx.unit.month = Some(order);
}
