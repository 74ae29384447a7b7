//! Client configuration loaded from process environment variables.
use std::env;
use std::path::PathBuf;

use uuid::Uuid;

/// Configuration required to bootstrap a bot process.
#[derive(Clone, Debug, Default)]
pub struct BotConfig {
    /// Id to play as; defaults to the first player of the first snapshot.
    pub bot_id: Option<Uuid>,
    /// Path to a JSON-lines snapshot replay to drive the engine with.
    pub replay_path: Option<PathBuf>,
    /// Where emitted actions are written; stdout when unset.
    pub actions_out: Option<PathBuf>,
    /// Decision poll interval override, in milliseconds.
    pub poll_interval_ms: Option<u64>,
    /// Outgoing action queue size.
    pub action_buffer: usize,
}

impl BotConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOT_ID` - Player id to adopt (default: first player seen)
    /// - `REPLAY_PATH` - Snapshot replay file to run against
    /// - `ACTIONS_OUT` - File to write emitted actions to (default: stdout)
    /// - `POLL_INTERVAL_MS` - Decision loop poll interval (default: tuning)
    /// - `ACTION_BUFFER` - Action queue size (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self {
            action_buffer: 16,
            ..Self::default()
        };

        config.bot_id = read_env::<Uuid>("BOT_ID");
        config.replay_path = env::var("REPLAY_PATH").ok().map(PathBuf::from);
        config.actions_out = env::var("ACTIONS_OUT").ok().map(PathBuf::from);
        config.poll_interval_ms = read_env::<u64>("POLL_INTERVAL_MS");

        if let Some(capacity) = read_env::<usize>("ACTION_BUFFER") {
            config.action_buffer = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
