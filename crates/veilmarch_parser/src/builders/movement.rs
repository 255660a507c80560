//! Movement and structure-occupancy builders.

use veilmarch_foundation::ObjectNum;
use veilmarch_orders::{
    Direction, EnterAction, JoinOrder, MonthOrder, MoveOrder, MoveStep, SailOrder, UnitRef,
};

use crate::builders::args::{parse_unit_ref, parse_unit_ref_token};
use crate::builders::set_month_order;
use crate::context::OrderCtx;
use crate::tokenizer::Cursor;

/// MOVE/ADVANCE: a list of itinerary steps filling the month slot.
pub(crate) fn order_move(ctx: &mut OrderCtx, cursor: &mut Cursor, advancing: bool) {
    let kw = if advancing { "ADVANCE" } else { "MOVE" };
    let mut steps = Vec::new();
    while let Some(token) = cursor.next_token() {
        match parse_move_step(&token) {
            Some(step) => steps.push(step),
            None => ctx.error(format!("{kw}: Non-existent direction.")),
        }
    }
    if steps.is_empty() {
        ctx.error(format!("{kw}: No directions given."));
        return;
    }
    set_month_order(ctx, MonthOrder::Move(MoveOrder { advancing, steps }));
}

/// SAIL: an itinerary of compass steps, or nothing to follow the fleet
/// owner's standing orders.
pub(crate) fn order_sail(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let mut steps = Vec::new();
    while let Some(token) = cursor.next_token() {
        let step = match token.to_ascii_lowercase().as_str() {
            "pause" | "p" => Some(MoveStep::Pause),
            _ => Direction::from_token(&token).map(MoveStep::Dir),
        };
        match step {
            Some(step) => steps.push(step),
            None => ctx.error("SAIL: Non-existent direction."),
        }
    }
    set_month_order(ctx, MonthOrder::Sail(SailOrder { steps }));
}

/// One MOVE/ADVANCE step: a structure number, `out`, `pause`, or a
/// compass direction.
fn parse_move_step(token: &str) -> Option<MoveStep> {
    if let Ok(num) = token.parse::<u32>() {
        return (num > 0).then(|| MoveStep::Enter(ObjectNum::new(num)));
    }
    match token.to_ascii_lowercase().as_str() {
        "out" => Some(MoveStep::Out),
        "pause" | "p" => Some(MoveStep::Pause),
        _ => Direction::from_token(token).map(MoveStep::Dir),
    }
}

/// ENTER: board a numbered structure in the current region.
pub(crate) fn order_enter(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(token) = cursor.next_token() else {
        ctx.error("ENTER: No object specified.");
        return;
    };
    match token.parse::<u32>() {
        Ok(num) if num > 0 => ctx.unit.enter = Some(EnterAction::Enter(ObjectNum::new(num))),
        _ => ctx.error("ENTER: Invalid object number."),
    }
}

/// LEAVE: step out of the current structure.
pub(crate) fn order_leave(ctx: &mut OrderCtx) {
    if ctx.commit() && ctx.unit.object.is_none() {
        ctx.error("LEAVE: Not inside a structure.");
        return;
    }
    ctx.unit.enter = Some(EnterAction::Leave);
}

/// DESTROY: tear down the owned structure.
pub(crate) fn order_destroy(ctx: &mut OrderCtx) {
    if ctx.commit() && ctx.unit.object.is_none() {
        ctx.error("DESTROY: Not inside a structure.");
        return;
    }
    ctx.unit.destroy = true;
}

/// JOIN: board the structure another unit occupies.
pub(crate) fn order_join(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(target) = parse_unit_ref(ctx, cursor, "JOIN") else {
        return;
    };
    if target == UnitRef::None {
        ctx.error("JOIN: Invalid target.");
        return;
    }
    let mut no_overload = false;
    let mut merge = false;
    while let Some(token) = cursor.next_token() {
        match token.to_ascii_lowercase().as_str() {
            "nooverload" => no_overload = true,
            "merge" => merge = true,
            _ => {
                ctx.error("JOIN: Invalid argument.");
                return;
            }
        }
    }
    ctx.unit.join = Some(JoinOrder { target, no_overload, merge });
}

/// PROMOTE: hand structure ownership to another occupant.
pub(crate) fn order_promote(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(target) = parse_unit_ref(ctx, cursor, "PROMOTE") else {
        return;
    };
    if target == UnitRef::None {
        ctx.error("PROMOTE: Invalid target.");
        return;
    }
    ctx.unit.promote = Some(target);
}

/// EVICT: expel one or more units from the owned structure.
pub(crate) fn order_evict(ctx: &mut OrderCtx, cursor: &mut Cursor) {
    let Some(first) = cursor.next_token() else {
        ctx.error("EVICT: No target given.");
        return;
    };
    let mut token = Some(first);
    while let Some(word) = token {
        if let Some(target) = parse_unit_ref_token(ctx, cursor, "EVICT", &word) {
            if target == UnitRef::None {
                ctx.error("EVICT: Invalid target.");
            } else {
                ctx.unit.evicts.push(target);
            }
        }
        token = cursor.next_token();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::testing::Fixture;
    use veilmarch_foundation::UnitId;

    #[test]
    fn move_collects_steps() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_move(&mut ctx, &mut Cursor::new("n ne 3 out pause"), false);
        assert_eq!(
            fx.unit.month,
            Some(MonthOrder::Move(MoveOrder {
                advancing: false,
                steps: vec![
                    MoveStep::Dir(Direction::North),
                    MoveStep::Dir(Direction::Northeast),
                    MoveStep::Enter(ObjectNum::new(3)),
                    MoveStep::Out,
                    MoveStep::Pause,
                ],
            }))
        );
    }

    #[test]
    fn bad_direction_is_reported_and_skipped() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_move(&mut ctx, &mut Cursor::new("n up se"), true);
        assert_eq!(fx.unit.errors, vec!["ADVANCE: Non-existent direction."]);
        assert!(matches!(
            fx.unit.month,
            Some(MonthOrder::Move(MoveOrder { advancing: true, ref steps })) if steps.len() == 2
        ));
    }

    #[test]
    fn empty_move_is_an_error() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_move(&mut ctx, &mut Cursor::new(""), false);
        assert_eq!(fx.unit.errors, vec!["MOVE: No directions given."]);
        assert!(fx.unit.month.is_none());
    }

    #[test]
    fn bare_sail_follows_the_fleet() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_sail(&mut ctx, &mut Cursor::new(""));
        assert_eq!(fx.unit.month, Some(MonthOrder::Sail(SailOrder { steps: vec![] })));
    }

    #[test]
    fn join_flags() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_join(&mut ctx, &mut Cursor::new("17 nooverload merge"));
        assert_eq!(
            fx.unit.join,
            Some(JoinOrder {
                target: UnitRef::Existing(UnitId::new(17)),
                no_overload: true,
                merge: true,
            })
        );
    }

    #[test]
    fn evict_accumulates_targets() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_evict(&mut ctx, &mut Cursor::new("8 new 2"));
        order_evict(&mut ctx, &mut Cursor::new("9"));
        assert_eq!(
            fx.unit.evicts,
            vec![
                UnitRef::Existing(UnitId::new(8)),
                UnitRef::New { faction: None, alias: 2 },
                UnitRef::Existing(UnitId::new(9)),
            ]
        );
    }

    #[test]
    fn leave_outside_a_structure_fails() {
        let mut fx = Fixture::new();
        let mut ctx = fx.ctx();
        order_leave(&mut ctx);
        assert_eq!(fx.unit.errors, vec!["LEAVE: Not inside a structure."]);
        assert!(fx.unit.enter.is_none());
    }
}
