//! One bot's decision state and the per-tick controller.

use std::sync::Arc;

use game_core::{GameState, ObjectId, PlayerAction, Tick};
use tracing::debug;

use crate::arsenal::Arsenal;
use crate::behavior::{Behavior, reflex};
use crate::config::Tuning;
use crate::context::TickContext;

/// Exclusive owner of everything the engine carries across ticks.
///
/// The snapshot is replaced wholesale (`Arc` swap) and never mutated; the
/// self object and all tracked references are re-resolved by id against it
/// each tick. The outgoing action record persists so that a behavior which
/// declines to write a field leaves the previous decision standing.
pub struct Session {
    bot_id: ObjectId,
    tuning: Tuning,
    snapshot: Option<Arc<GameState>>,
    action: PlayerAction,
    target: Option<ObjectId>,
    arsenal: Arsenal,
    last_tick: Option<Tick>,
}

impl Session {
    pub fn new(bot_id: ObjectId, tuning: Tuning) -> Self {
        Self {
            bot_id,
            tuning,
            snapshot: None,
            action: PlayerAction::new(bot_id),
            target: None,
            arsenal: Arsenal::new(),
            last_tick: None,
        }
    }

    pub fn bot_id(&self) -> ObjectId {
        self.bot_id
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick
    }

    /// Replaces the current snapshot. Atomic from the decision side: the new
    /// state is fully built before it lands here.
    pub fn on_snapshot(&mut self, snapshot: Arc<GameState>) {
        self.snapshot = Some(snapshot);
    }

    /// Runs the decision pipeline for the current snapshot.
    ///
    /// Exactly once per distinct tick id: a snapshot carrying the tick that
    /// was already processed is skipped outright (no recomputation, no action,
    /// no double-fired abilities). A snapshot without a world record, or one
    /// in which the self object no longer resolves, is likewise skipped.
    pub fn compute_action(&mut self) -> Option<PlayerAction> {
        let state = self.snapshot.clone()?;
        let world = state.world()?;

        if self.last_tick == Some(world.tick) {
            return None;
        }

        let Some(bot) = state.player(self.bot_id) else {
            debug!("self object {} not in snapshot, skipping tick", self.bot_id);
            return None;
        };

        debug!(
            "tick {}: size {}, pos ({}, {})",
            world.tick, bot.size, bot.position.x, bot.position.y
        );

        // Tracker update → behavior selection → behavior action → overrides.
        self.arsenal.begin_tick(&state, bot);

        let mut action = self.action;
        {
            let mut ctx = TickContext::new(
                &self.tuning,
                world,
                &state,
                bot,
                &mut self.arsenal,
                &mut self.target,
            );
            let behavior = Behavior::select(&ctx);
            behavior.act(&mut ctx, &mut action);
            reflex::apply(&mut ctx, &mut action);
        }

        self.action = action;
        self.last_tick = Some(world.tick);
        Some(action)
    }
}
