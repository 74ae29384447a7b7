//! The always-run correction pass.
//!
//! Applied after the selected behavior has produced its action, every tick,
//! unconditionally. Unlike the scored behaviors this is a *sequential
//! checklist*: each check that fires overwrites the action, and a later check
//! supersedes an earlier one within the same tick. The ordering below is
//! load-bearing — steering smoothing first, one-shot weapons in the middle,
//! and the self-preservation reactions (shield, interception) last so they
//! win over everything else.

use game_core::geometry::{heading_between, heading_diff, heading_median, heading_reverse};
use game_core::{ActionKind, ObjectKind, PlayerAction};
use tracing::{debug, info};

use crate::context::TickContext;
use crate::query::is_within;

pub fn apply(ctx: &mut TickContext, action: &mut PlayerAction) {
    let bot = ctx.bot;
    let size = bot.size as f64;

    // Gas clouds: blend the heading away while cruising. The double median
    // smooths the corrective turn against both the current travel direction
    // and the behavior's intended one, which keeps the bot from zigzagging.
    if action.action == ActionKind::Forward {
        let clouds = ctx.find_within(bot, size + ctx.tuning.gas_search_radius, |obj| {
            obj.kind == ObjectKind::GasCloud
        });
        if let Some(nearest) = clouds.first() {
            let avoidance =
                heading_median(bot.heading, heading_between(nearest.position, bot.position));
            action.heading = heading_median(action.heading, avoidance);
            debug!("steering around a gas cloud");
        }
    }

    // World edge: same smoothing, aimed back toward the center.
    if action.action == ActionKind::Forward
        && ctx.distance_from_center(bot) + size + ctx.tuning.edge_avoid_radius
            > ctx.world.radius as f64
    {
        let avoidance = heading_median(bot.heading, heading_reverse(ctx.heading_from_center(bot)));
        action.heading = heading_median(action.heading, avoidance);
        debug!("steering away from the world edge");
    }

    let opponents = ctx.find_players(|p| ctx.is_enemy_player(p));
    if !opponents.is_empty() {
        // Launch the supernova at the farthest opponent: the bomb needs
        // travel time, and anyone close is better handled by torpedoes.
        if ctx.fire_supernova() {
            let farthest = opponents[opponents.len() - 1];
            action.action = ActionKind::FireSupernova;
            action.heading = heading_between(bot.position, farthest.position);
            info!("firing the supernova");
        }

        // Detonate once the bomb is clear of us and has company.
        if let Some(bomb) = ctx.supernova() {
            let blast = 0.25 * ctx.world.radius as f64;
            let clear_of_self = !is_within(bomb, bot, blast);
            if clear_of_self
                && !ctx
                    .find_players_within(bomb, blast, |p| ctx.is_enemy_player(p))
                    .is_empty()
            {
                action.action = ActionKind::DetonateSupernova;
                info!("detonating the supernova");
            }
        }
    }

    // Trigger a chase teleporter: the far end must have a smaller opponent
    // in grabbing distance and no larger one waiting at the arrival point.
    if let Some(teleporter) = ctx.teleporter() {
        let clearance = ctx.tuning.teleport_clearance * size;
        let prey_close = !ctx
            .find_players_within(teleporter, clearance, |p| {
                ctx.is_enemy_player(p) && bot.size > p.size
            })
            .is_empty();
        let threat_close = !ctx
            .find_players_within(teleporter, clearance, |p| {
                ctx.is_enemy_player(p) && bot.size <= p.size
            })
            .is_empty();
        if prey_close && !threat_close {
            action.action = ActionKind::Teleport;
            info!("teleporting onto an opponent");
        }
    }

    // Trigger a pickup teleporter once it has drifted onto the prize and our
    // own surroundings are quiet enough to leave.
    if let Some(teleporter) = ctx.teleporter()
        && let Some(pickup) = ctx.find_closest(|obj| obj.kind == ObjectKind::SupernovaPickup)
        && is_within(teleporter, pickup, size + ctx.tuning.pickup_teleport_radius)
        && ctx
            .find_players_within(bot, size + ctx.tuning.pickup_teleport_safety_radius, |p| {
                ctx.is_enemy_player(p)
            })
            .is_empty()
    {
        action.action = ActionKind::Teleport;
        info!("teleporting onto the supernova pickup");
    }

    // Shield against a converging torpedo salvo. A salvo counts as incoming
    // when its own heading points back along its bearing from us.
    if bot.shield_charge > 0 && bot.size > ctx.tuning.shield_safe_size {
        let incoming = ctx.find_within(bot, size + ctx.tuning.shield_search_radius, |obj| {
            obj.kind == ObjectKind::TorpedoSalvo
                && heading_diff(heading_between(bot.position, obj.position), obj.heading)
                    >= ctx.tuning.shield_heading_diff
        });
        if !incoming.is_empty() {
            action.action = ActionKind::ActivateShield;
            info!("activating shield");
        }
    }

    // Last resort: counter-fire at incoming torpedoes.
    let salvoes = ctx.find_within(bot, size + ctx.tuning.intercept_search_radius, |obj| {
        obj.kind == ObjectKind::TorpedoSalvo
            && heading_diff(heading_between(bot.position, obj.position), obj.heading)
                >= ctx.tuning.intercept_heading_diff
    });
    if !salvoes.is_empty() && ctx.consume_torpedo() {
        action.action = ActionKind::FireTorpedoes;
        action.heading = heading_between(bot.position, salvoes[0].position);
        info!("intercepting incoming torpedoes");
    }
}
