//! Outgoing action record sent back to the runner each processed tick.

use strum::FromRepr;

use crate::state::ObjectId;

/// Player action tag as transmitted on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromRepr, strum::Display)]
#[repr(i32)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Stop = 1,
    Forward = 2,
    FireTorpedoes = 3,
    FireTeleport = 4,
    Teleport = 5,
    FireSupernova = 6,
    DetonateSupernova = 7,
    ActivateShield = 8,
}

/// One action per processed tick: a movement heading plus at most one ability
/// trigger (the tag doubles as both).
///
/// The record persists between ticks; behaviors overwrite the fields they
/// decide on and leave the rest carrying the previous values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerAction {
    pub player_id: ObjectId,
    pub action: ActionKind,
    /// Degrees, [0, 360).
    pub heading: i32,
}

impl PlayerAction {
    pub fn new(player_id: ObjectId) -> Self {
        Self {
            player_id,
            action: ActionKind::Stop,
            heading: 0,
        }
    }
}

impl Default for PlayerAction {
    fn default() -> Self {
        Self::new(ObjectId::nil())
    }
}
