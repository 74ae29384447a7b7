//! Per-tick decision context.
//!
//! Every evaluator, action producer, and query receives a [`TickContext`] by
//! reference instead of reaching for ambient state. The context borrows the
//! immutable snapshot view (world, collections, resolved self object) and
//! carries mutable access to the two pieces of cross-tick state a behavior
//! may touch: the arsenal and the current food target.

use game_core::{GameObject, GameState, ObjectId, World};

use crate::arsenal::Arsenal;
use crate::config::Tuning;

pub struct TickContext<'a> {
    pub tuning: &'a Tuning,
    pub world: &'a World,
    pub state: &'a GameState,
    /// The self object, already resolved from the player collection.
    pub bot: &'a GameObject,
    pub arsenal: &'a mut Arsenal,
    /// Currently targeted food object, stored by id and re-resolved on read.
    pub target: &'a mut Option<ObjectId>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        tuning: &'a Tuning,
        world: &'a World,
        state: &'a GameState,
        bot: &'a GameObject,
        arsenal: &'a mut Arsenal,
        target: &'a mut Option<ObjectId>,
    ) -> Self {
        Self {
            tuning,
            world,
            state,
            bot,
            arsenal,
            target,
        }
    }

    // ========================================================================
    // Ability passthroughs
    // ========================================================================

    pub fn consume_torpedo(&mut self) -> bool {
        self.arsenal.consume_torpedo(self.bot, self.tuning)
    }

    pub fn fire_teleporter(&mut self) -> bool {
        self.arsenal.fire_teleporter(self.bot, self.tuning)
    }

    pub fn fire_supernova(&mut self) -> bool {
        self.arsenal.fire_supernova(self.bot, self.tuning)
    }

    /// The tracked teleporter object, if one is in flight and still visible.
    pub fn teleporter(&self) -> Option<&'a GameObject> {
        self.arsenal.teleporter.tracked(self.state)
    }

    /// The tracked supernova bomb, if one is in flight and still visible.
    pub fn supernova(&self) -> Option<&'a GameObject> {
        self.arsenal.supernova.tracked(self.state)
    }

    // ========================================================================
    // Target bookkeeping
    // ========================================================================

    /// Resolves the current food target against this tick's snapshot.
    pub fn current_target(&self) -> Option<&'a GameObject> {
        (*self.target).and_then(|id| self.state.object(id))
    }

    pub fn set_target(&mut self, id: ObjectId) {
        *self.target = Some(id);
    }

    pub fn clear_target(&mut self) {
        *self.target = None;
    }
}
