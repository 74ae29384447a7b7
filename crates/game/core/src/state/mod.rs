//! Snapshot state: world record, game objects, and the per-tick collections.
mod types;

pub use types::{Effects, GameObject, GameState, ObjectId, ObjectKind, Position, Tick, World};
