//! Behavior evaluators.
//!
//! Scores are raw integers on a shared scale: the distance-driven behaviors
//! all start from `2 × world radius − distance`, so whichever concern is
//! physically closest tends to win, and the per-behavior multipliers bias the
//! contest. [`INAPPLICABLE`] marks a behavior whose preconditions fail.

use game_core::geometry::distance;
use game_core::{GameObject, ObjectKind};

use super::INAPPLICABLE;
use crate::context::TickContext;

/// Constant floor one above the sentinel: idle never wins a contested tick
/// but guarantees the selector always has a winner.
pub(super) fn idle(_ctx: &TickContext) -> i32 {
    INAPPLICABLE + 1
}

/// Resolves the feeding target: the current one while it is still present
/// and food-typed, otherwise the nearest food that is not sitting next to a
/// hazard or the world edge.
pub(super) fn feed_target<'a>(ctx: &TickContext<'a>) -> Option<&'a GameObject> {
    match ctx.current_target().filter(|t| t.is_food()) {
        Some(target) => Some(target),
        None => ctx.find_closest(|obj| {
            obj.is_food() && ctx.priority_penalty(obj) <= ctx.tuning.feed_penalty_limit
        }),
    }
}

pub(super) fn feed(ctx: &TickContext) -> i32 {
    if ctx.state.objects().is_empty() {
        return INAPPLICABLE;
    }

    match feed_target(ctx) {
        Some(target) => {
            let dist = distance(ctx.bot.position, target.position);
            (ctx.tuning.feed_mult
                * (2.0 * ctx.world.radius as f64 - dist - ctx.bot.size as f64)) as i32
        }
        None => INAPPLICABLE,
    }
}

pub(super) fn flee(ctx: &TickContext) -> i32 {
    if ctx.state.players().is_empty() {
        return INAPPLICABLE;
    }

    let threats = ctx.find_players_within(ctx.bot, ctx.tuning.flee_search_radius, |p| {
        ctx.is_enemy_player(p) && ctx.bot.size <= p.size
    });

    match threats.first() {
        Some(threat) => {
            let dist = distance(ctx.bot.position, threat.position);
            (ctx.tuning.flee_mult * (2.0 * ctx.world.radius as f64 - dist)) as i32
        }
        None => INAPPLICABLE,
    }
}

pub(super) fn chase(ctx: &TickContext) -> i32 {
    if ctx.state.players().is_empty() {
        return INAPPLICABLE;
    }

    let prey = ctx.find_players_within(ctx.bot, ctx.tuning.chase_search_radius, |p| {
        ctx.is_enemy_player(p) && ctx.bot.size > p.size
    });

    match prey.first() {
        Some(target) => {
            let dist = distance(ctx.bot.position, target.position);
            (ctx.tuning.chase_mult * (2.0 * ctx.world.radius as f64 - dist)) as i32
        }
        None => INAPPLICABLE,
    }
}

/// Aggressive pursuit wants a clear size advantage up front, but once a
/// teleporter is already in flight the margin is waived; the charge count and
/// an in-flight teleporter both add a flat bonus so the behavior outbids the
/// plain chase when the finisher is ready.
pub(super) fn hunt(ctx: &TickContext) -> i32 {
    if ctx.state.players().is_empty() {
        return INAPPLICABLE;
    }

    let margin = if ctx.teleporter().is_some() {
        0
    } else {
        ctx.tuning.hunt_size_margin
    };
    let prey = ctx.find_players_within(ctx.bot, ctx.tuning.hunt_search_radius, |p| {
        ctx.is_enemy_player(p) && ctx.bot.size > margin + p.size
    });

    match prey.first() {
        Some(target) => {
            let dist = distance(ctx.bot.position, target.position);
            let in_flight = i32::from(ctx.teleporter().is_some());
            let bonus =
                (in_flight + ctx.bot.teleporter_charge) * ctx.tuning.hunt_teleport_bonus;
            (ctx.tuning.hunt_mult * (2.0 * ctx.world.radius as f64 - dist + bonus as f64)) as i32
        }
        None => INAPPLICABLE,
    }
}

/// The pickup rush only arms itself when a teleporter can actually deliver
/// the bot (charge in hand or one already flying); its score scales with size
/// and accumulated charge so a ready bot drops everything else.
pub(super) fn claim_pickup(ctx: &TickContext) -> i32 {
    if ctx.state.objects().is_empty() {
        return INAPPLICABLE;
    }
    if ctx.bot.teleporter_charge <= 0 && ctx.teleporter().is_none() {
        return INAPPLICABLE;
    }

    if ctx
        .find_closest(|obj| obj.kind == ObjectKind::SupernovaPickup)
        .is_some()
    {
        (ctx.tuning.pickup_mult
            * (ctx.tuning.pickup_weight_bias + ctx.bot.teleporter_charge) as f64
            * ctx.bot.size as f64) as i32
    } else {
        INAPPLICABLE
    }
}
