//! Bot process bootstrap.
//!
//! Wires environment configuration, tracing, the decision worker, and a
//! snapshot transport together. Without a live runner connection configured,
//! the process drives the engine from a JSON-lines replay and writes the
//! actions it would have sent.

mod config;
mod transport;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use game_core::{GameState, ObjectId};
use runtime::{DecisionWorker, Session, Tuning};
use tokio::sync::{mpsc, watch};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::BotConfig;
use crate::transport::{ActionSink, JsonlReplay, JsonlWriter, SnapshotSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = BotConfig::from_env();

    let replay_path = config
        .replay_path
        .as_deref()
        .context("REPLAY_PATH is not set; no snapshot source to drive the engine")?;
    let mut source = JsonlReplay::open(replay_path)?;

    let first = source
        .next_snapshot()
        .await?
        .context("replay contains no usable snapshot")?;

    let bot_id = match config.bot_id {
        Some(id) => ObjectId(id),
        None => {
            first
                .players()
                .first()
                .context("first snapshot has no players to adopt")?
                .id
        }
    };
    info!("playing as {bot_id}");

    let mut tuning = Tuning::default();
    if let Some(ms) = config.poll_interval_ms {
        tuning.poll_interval_ms = ms;
    }
    let cadence = Duration::from_millis(tuning.poll_interval_ms);

    let (snapshot_tx, snapshot_rx) = watch::channel(None::<Arc<GameState>>);
    let (action_tx, mut action_rx) = mpsc::channel(config.action_buffer);

    let worker = DecisionWorker::new(Session::new(bot_id, tuning), snapshot_rx, action_tx);
    let worker_task = tokio::spawn(worker.run());

    // Publish snapshots at the decision cadence. Each publish is one atomic
    // swap of the watch slot; the worker always reads a complete state.
    let pump_task = tokio::spawn(async move {
        let mut next = Some(first);
        loop {
            let Some(snapshot) = next.take() else { break };
            if snapshot_tx.send(Some(snapshot)).is_err() {
                break;
            }
            tokio::time::sleep(cadence).await;
            next = match source.next_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    tracing::error!("snapshot source failed: {err:#}");
                    None
                }
            };
        }
        info!("snapshot stream ended");
    });

    let mut sink: Box<dyn ActionSink> = match config.actions_out.as_deref() {
        Some(path) => Box::new(JsonlWriter::create(path)?),
        None => Box::new(JsonlWriter::stdout()),
    };

    while let Some(action) = action_rx.recv().await {
        sink.send(&action).await?;
    }

    pump_task.await.context("snapshot pump panicked")?;
    worker_task.await.context("decision worker panicked")??;

    info!("shut down cleanly");
    Ok(())
}
