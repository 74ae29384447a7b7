//! Snapshot data model and geometry shared across the bot.
//!
//! `game-core` defines the types the arena runner hands the bot every tick
//! (world record, object and player collections), the outgoing action record,
//! and the pure distance/circular-angle math every layer above builds on.
//! Nothing here performs I/O or holds state across ticks; the decision engine
//! in `runtime` consumes these types by reference.
pub mod action;
pub mod geometry;
pub mod state;
#[cfg(feature = "serde")]
pub mod wire;

pub use action::{ActionKind, PlayerAction};
pub use state::{Effects, GameObject, GameState, ObjectId, ObjectKind, Position, Tick, World};
#[cfg(feature = "serde")]
pub use wire::{SnapshotDto, WorldDto};
