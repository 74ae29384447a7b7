//! Decision engine for the arena bot.
//!
//! Each world tick the engine receives one immutable snapshot and emits one
//! action. The pipeline runs in a fixed order: ability-tracker update,
//! priority-weighted behavior selection, the winning behavior's action
//! producer, then the always-run override pass that applies emergency and
//! opportunistic corrections on top.
//!
//! Modules are organized by responsibility:
//! - [`config`] holds the tuning table every heuristic reads
//! - [`context`] carries the per-tick view passed by reference everywhere
//! - [`query`] adds the spatial lookups on top of that view
//! - [`arsenal`] tracks ability cooldowns and fire-and-reacquire state
//! - [`behavior`] hosts the scored behaviors and the override pass
//! - [`session`] sequences one tick end to end and guards against reprocessing
//! - [`worker`] drives the session from an async poll loop
pub mod arsenal;
pub mod behavior;
pub mod config;
pub mod context;
pub mod error;
pub mod query;
pub mod session;
pub mod worker;

pub use arsenal::{Arsenal, DeployState, DeployTracker, TorpedoRack};
pub use behavior::{Behavior, INAPPLICABLE};
pub use config::Tuning;
pub use context::TickContext;
pub use error::{Result, RuntimeError};
pub use session::Session;
pub use worker::DecisionWorker;
