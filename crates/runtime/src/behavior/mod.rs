//! The scored behavior set and its selection rule.
//!
//! Each behavior pairs an evaluator (how applicable/attractive is this right
//! now?) with an action producer (what do we actually do?). Every tick all
//! behaviors are evaluated and the highest scorer acts; the always-run
//! correction pass in [`reflex`] is applied afterwards and is deliberately
//! *not* part of the scored set — it is a sequential checklist, not a
//! competitor.

mod act;
pub mod reflex;
mod score;

use game_core::PlayerAction;
use tracing::debug;

use crate::context::TickContext;

/// Sentinel evaluator result marking a behavior as inapplicable.
pub const INAPPLICABLE: i32 = i32::MIN;

/// The fixed behavior set, in declaration order.
///
/// Order matters: when two behaviors tie for the maximum score, the one
/// declared earlier wins (stable ordering, strict greater-than comparison).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Fallback; drifts toward the world center. Always barely applicable.
    Idle,
    /// Graze on the nearest safely reachable food, keeping the target sticky.
    Feed,
    /// Run from a larger opponent, grabbing food along the escape line.
    Flee,
    /// Pursue a smaller opponent with low commitment.
    Chase,
    /// Aggressive pursuit of a clearly weaker opponent, teleporter first.
    Hunt,
    /// Drop everything and secure a supernova pickup.
    ClaimPickup,
}

impl Behavior {
    /// All behaviors in priority (declaration) order.
    pub const ALL: [Behavior; 6] = [
        Behavior::Idle,
        Behavior::Feed,
        Behavior::Flee,
        Behavior::Chase,
        Behavior::Hunt,
        Behavior::ClaimPickup,
    ];

    /// Scores this behavior for the current tick.
    ///
    /// Returns [`INAPPLICABLE`] when the behavior's preconditions do not
    /// hold; absence of targets is never an error.
    pub fn evaluate(self, ctx: &TickContext) -> i32 {
        match self {
            Behavior::Idle => score::idle(ctx),
            Behavior::Feed => score::feed(ctx),
            Behavior::Flee => score::flee(ctx),
            Behavior::Chase => score::chase(ctx),
            Behavior::Hunt => score::hunt(ctx),
            Behavior::ClaimPickup => score::claim_pickup(ctx),
        }
    }

    /// Writes this behavior's decision into the outgoing action.
    ///
    /// Fields the behavior has no opinion on are left as they were.
    pub fn act(self, ctx: &mut TickContext, action: &mut PlayerAction) {
        match self {
            Behavior::Idle => act::idle(ctx, action),
            Behavior::Feed => act::feed(ctx, action),
            Behavior::Flee => act::flee(ctx, action),
            Behavior::Chase => act::chase(ctx, action),
            Behavior::Hunt => act::hunt(ctx, action),
            Behavior::ClaimPickup => act::claim_pickup(ctx, action),
        }
    }

    /// Evaluates every behavior and returns the highest scorer.
    ///
    /// Ties resolve in favor of the earlier-declared behavior: the running
    /// maximum is only replaced on a strictly greater score. Idle's constant
    /// floor guarantees a winner even on an empty snapshot.
    pub fn select(ctx: &TickContext) -> Behavior {
        let mut best = Self::ALL[0];
        let mut best_score = best.evaluate(ctx);
        debug!("  {:?}: {}", best, best_score);

        for &candidate in &Self::ALL[1..] {
            let candidate_score = candidate.evaluate(ctx);
            debug!("  {:?}: {}", candidate, candidate_score);
            if candidate_score > best_score {
                best = candidate;
                best_score = candidate_score;
            }
        }

        debug!("selected {:?} (score {})", best, best_score);
        best
    }
}
