//! Transport seam between the engine and the outside world.
//!
//! The live runner connection is a separate concern; the engine only needs
//! something that produces snapshots and something that accepts actions.
//! These traits are that seam. The JSON-lines implementations below replay a
//! recorded (or hand-written) snapshot stream and write the emitted actions
//! back out, which is enough to drive the full decision pipeline offline.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use game_core::{GameState, PlayerAction, SnapshotDto};
use tracing::warn;

/// Produces snapshots in arrival order; `None` means the stream ended.
#[async_trait]
pub trait SnapshotSource: Send {
    async fn next_snapshot(&mut self) -> Result<Option<Arc<GameState>>>;
}

/// Accepts the one action emitted per processed tick.
#[async_trait]
pub trait ActionSink: Send {
    async fn send(&mut self, action: &PlayerAction) -> Result<()>;
}

/// Snapshot source reading one wire payload per line.
///
/// Undecodable lines and payloads without a world record are skipped with a
/// warning; the stream keeps going.
pub struct JsonlReplay {
    lines: std::io::Lines<BufReader<File>>,
}

impl JsonlReplay {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening replay file {}", path.display()))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

#[async_trait]
impl SnapshotSource for JsonlReplay {
    async fn next_snapshot(&mut self) -> Result<Option<Arc<GameState>>> {
        for line in self.lines.by_ref() {
            let line = line.context("reading replay line")?;
            if line.trim().is_empty() {
                continue;
            }

            let dto: SnapshotDto = match serde_json::from_str(&line) {
                Ok(dto) => dto,
                Err(err) => {
                    warn!("skipping undecodable snapshot line: {err}");
                    continue;
                }
            };

            match dto.into_state() {
                Some(state) => return Ok(Some(Arc::new(state))),
                None => warn!("skipping snapshot without a world record"),
            }
        }

        Ok(None)
    }
}

/// Action sink writing one JSON record per line.
pub struct JsonlWriter {
    out: Box<dyn Write + Send>,
}

impl JsonlWriter {
    pub fn stdout() -> Self {
        Self {
            out: Box::new(std::io::stdout()),
        }
    }

    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating action output {}", path.display()))?;
        Ok(Self {
            out: Box::new(file),
        })
    }
}

#[async_trait]
impl ActionSink for JsonlWriter {
    async fn send(&mut self, action: &PlayerAction) -> Result<()> {
        let line = serde_json::to_string(action).context("encoding action")?;
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
