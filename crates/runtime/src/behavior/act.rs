//! Behavior action producers.
//!
//! Each producer writes the winning behavior's decision into the persistent
//! outgoing action. When a producer's own preconditions have evaporated
//! between evaluation and action (the snapshot is shared, so this only
//! happens when the evaluator and producer disagree about edge conditions),
//! it leaves the action untouched rather than failing.

use game_core::geometry::{heading_between, heading_diff, heading_reverse};
use game_core::{ActionKind, ObjectKind, PlayerAction};
use tracing::warn;

use super::score::feed_target;
use crate::context::TickContext;
use crate::query::is_within;

/// Drift toward the world center.
pub(super) fn idle(ctx: &mut TickContext, action: &mut PlayerAction) {
    action.action = ActionKind::Forward;
    action.heading = heading_reverse(ctx.heading_from_center(ctx.bot));
}

/// Move toward the retained food target, re-acquiring one if needed.
pub(super) fn feed(ctx: &mut TickContext, action: &mut PlayerAction) {
    if ctx.state.objects().is_empty() {
        return;
    }

    if let Some(target) = feed_target(ctx) {
        ctx.set_target(target.id);
        action.action = ActionKind::Forward;
        action.heading = heading_between(ctx.bot.position, target.position);
    }
}

/// Head away from the nearest larger opponent, preferring an escape line
/// that passes a safely reachable food object; fire torpedoes backward when
/// the threat is inside torpedo range.
pub(super) fn flee(ctx: &mut TickContext, action: &mut PlayerAction) {
    ctx.clear_target();

    if ctx.state.players().is_empty() {
        return;
    }

    let threats = ctx.find_players(|p| ctx.is_enemy_player(p) && ctx.bot.size <= p.size);
    let Some(threat) = threats.first().copied() else {
        return;
    };

    let away = heading_between(threat.position, ctx.bot.position);
    let food = ctx.find_closest_by(
        |item| heading_diff(heading_between(ctx.bot.position, item.position), away) as f64,
        |item| item.is_food() && ctx.safe_from_edge(item),
    );

    let threat_in_range = is_within(
        ctx.bot,
        threat,
        ctx.bot.size as f64 + ctx.tuning.flee_torpedo_range,
    );
    if threat_in_range && ctx.consume_torpedo() {
        action.action = ActionKind::FireTorpedoes;
        action.heading = heading_reverse(away);
    } else {
        action.action = ActionKind::Forward;
        action.heading = match food {
            Some(food) => heading_between(ctx.bot.position, food.position),
            None => away,
        };
    }
}

/// Close on the nearest smaller opponent; torpedoes in range, but only while
/// no teleporter is in flight (a stray salvo would shove the target away
/// from the arrival point).
pub(super) fn chase(ctx: &mut TickContext, action: &mut PlayerAction) {
    if ctx.state.players().is_empty() {
        return;
    }

    let prey = ctx.find_players(|p| ctx.is_enemy_player(p) && ctx.bot.size > p.size);
    let Some(target) = prey.first().copied() else {
        return;
    };

    let in_range = is_within(
        ctx.bot,
        target,
        ctx.bot.size as f64 + ctx.tuning.chase_torpedo_range,
    );
    if ctx.teleporter().is_none() && in_range && ctx.consume_torpedo() {
        action.action = ActionKind::FireTorpedoes;
    } else {
        action.action = ActionKind::Forward;
    }
    action.heading = heading_between(ctx.bot.position, target.position);
}

/// Aggressive pursuit: teleporter first when none is flying, torpedoes next,
/// plain approach otherwise.
pub(super) fn hunt(ctx: &mut TickContext, action: &mut PlayerAction) {
    if ctx.state.players().is_empty() {
        return;
    }

    let margin = if ctx.teleporter().is_some() {
        0
    } else {
        ctx.tuning.hunt_size_margin
    };
    let prey = ctx.find_players(|p| ctx.is_enemy_player(p) && ctx.bot.size > margin + p.size);
    let Some(target) = prey.first().copied() else {
        return;
    };

    let teleport_range = is_within(
        ctx.bot,
        target,
        ctx.bot.size as f64 + ctx.tuning.hunt_teleport_range,
    );
    let torpedo_range = is_within(
        ctx.bot,
        target,
        ctx.bot.size as f64 + ctx.tuning.hunt_torpedo_range,
    );

    if ctx.teleporter().is_none() && teleport_range && ctx.fire_teleporter() {
        action.action = ActionKind::FireTeleport;
    } else if torpedo_range && ctx.consume_torpedo() {
        action.action = ActionKind::FireTorpedoes;
    } else {
        action.action = ActionKind::Forward;
    }
    action.heading = heading_between(ctx.bot.position, target.position);
}

/// Secure the supernova pickup: move as if fleeing, lob a teleporter at the
/// pickup, and once inside the contested radius torpedo anyone else closing
/// in on it.
pub(super) fn claim_pickup(ctx: &mut TickContext, action: &mut PlayerAction) {
    if ctx.state.objects().is_empty() {
        return;
    }

    let Some(pickup) = ctx.find_closest(|obj| obj.kind == ObjectKind::SupernovaPickup) else {
        return;
    };

    flee(ctx, action);
    warn!(
        "supernova pickup present at ({}, {})",
        pickup.position.x, pickup.position.y
    );

    if ctx.teleporter().is_none() && ctx.fire_teleporter() {
        action.action = ActionKind::FireTeleport;
        action.heading = heading_between(ctx.bot.position, pickup.position);
    } else if is_within(ctx.bot, pickup, ctx.tuning.pickup_toxic_radius) {
        let rivals = ctx.find_players_within(
            pickup,
            ctx.bot.size as f64 + ctx.tuning.pickup_toxic_radius,
            |p| ctx.is_enemy_player(p),
        );
        if !rivals.is_empty() && ctx.consume_torpedo() {
            action.action = ActionKind::FireTorpedoes;
            action.heading = heading_between(ctx.bot.position, rivals[0].position);
        } else {
            action.action = ActionKind::Forward;
            action.heading = heading_between(ctx.bot.position, pickup.position);
        }
    }
}
