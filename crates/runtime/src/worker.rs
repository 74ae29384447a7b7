//! Async decision loop.
//!
//! The worker polls on a fixed interval, independent of when snapshots
//! arrive. Snapshot handoff from the network side is a `watch` slot — a
//! single atomic reference swap, so the loop sees either the previous state
//! or the complete new one, never a partially built snapshot. The session's
//! tick guard turns repeated polls of the same snapshot into no-ops.

use std::sync::Arc;
use std::time::Duration;

use game_core::{GameState, PlayerAction};
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::error::{Result, RuntimeError};
use crate::session::Session;

pub struct DecisionWorker {
    session: Session,
    snapshots: watch::Receiver<Option<Arc<GameState>>>,
    actions: mpsc::Sender<PlayerAction>,
}

impl DecisionWorker {
    pub fn new(
        session: Session,
        snapshots: watch::Receiver<Option<Arc<GameState>>>,
        actions: mpsc::Sender<PlayerAction>,
    ) -> Self {
        Self {
            session,
            snapshots,
            actions,
        }
    }

    /// Runs until the snapshot publisher goes away (normal shutdown) or the
    /// action consumer hangs up.
    pub async fn run(mut self) -> Result<()> {
        let poll = Duration::from_millis(self.session.tuning().poll_interval_ms);
        let mut ticker = tokio::time::interval(poll);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("decision worker started, polling every {:?}", poll);

        loop {
            ticker.tick().await;

            let snapshot = self.snapshots.borrow().clone();
            if let Some(snapshot) = snapshot {
                self.session.on_snapshot(snapshot);
                if let Some(action) = self.session.compute_action() {
                    if self.actions.send(action).await.is_err() {
                        info!("action channel closed, stopping");
                        return Err(RuntimeError::ActionChannelClosed);
                    }
                }
            }

            if self.snapshots.has_changed().is_err() {
                info!("snapshot source closed, stopping");
                return Ok(());
            }
        }
    }
}
