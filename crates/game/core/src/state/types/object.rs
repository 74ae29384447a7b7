use strum::FromRepr;

use super::{Effects, ObjectId, Position};

/// Number of attributes carried by a player-typed wire entry.
///
/// Shorter lists are non-player objects; their trailing player fields default
/// to zero/false.
pub const PLAYER_ATTRIB_COUNT: usize = 11;

/// Object type tag as transmitted in attribute lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromRepr, strum::Display)]
#[repr(i32)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    Player = 1,
    Food = 2,
    Superfood = 3,
    GasCloud = 4,
    AsteroidField = 5,
    Teleporter = 6,
    SupernovaPickup = 7,
    SupernovaBomb = 8,
    TorpedoSalvo = 9,
}

impl ObjectKind {
    /// Food and superfood are interchangeable as feeding targets.
    pub fn is_food(self) -> bool {
        matches!(self, ObjectKind::Food | ObjectKind::Superfood)
    }

    pub fn is_player(self) -> bool {
        self == ObjectKind::Player
    }
}

/// A single visible object from a snapshot.
///
/// The player-only fields (`torpedo_charge`, `has_supernova`,
/// `teleporter_charge`, `shield_charge`) are zero/false on everything that is
/// not player-typed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameObject {
    pub id: ObjectId,
    pub size: i32,
    pub speed: i32,
    /// Current movement direction in degrees, [0, 360).
    pub heading: i32,
    pub position: Position,
    pub kind: ObjectKind,
    pub effects: Effects,
    pub torpedo_charge: i32,
    pub has_supernova: bool,
    pub teleporter_charge: i32,
    pub shield_charge: i32,
}

impl GameObject {
    /// Decodes a fixed-order wire attribute list.
    ///
    /// Layout: `[size, speed, heading, typeCode, posX, posY]`, extended to
    /// eleven entries for players: `[.., effectsBitmask, torpedoCharge,
    /// hasSupernova, teleporterCharge, shieldCharge]`. Lists of unexpected
    /// length degrade to zero/false trailing fields rather than being
    /// rejected; only an unknown type code yields `None`.
    pub fn from_attribs(id: ObjectId, attribs: &[i32]) -> Option<Self> {
        let at = |i: usize| attribs.get(i).copied().unwrap_or(0);

        let kind = ObjectKind::from_repr(at(3))?;
        let player = attribs.len() >= PLAYER_ATTRIB_COUNT;

        Some(Self {
            id,
            size: at(0),
            speed: at(1),
            heading: at(2),
            position: Position::new(at(4), at(5)),
            kind,
            effects: if player {
                Effects::from_mask(at(6))
            } else {
                Effects::empty()
            },
            torpedo_charge: if player { at(7) } else { 0 },
            has_supernova: player && at(8) != 0,
            teleporter_charge: if player { at(9) } else { 0 },
            shield_charge: if player { at(10) } else { 0 },
        })
    }

    pub fn is_food(&self) -> bool {
        self.kind.is_food()
    }

    pub fn is_player(&self) -> bool {
        self.kind.is_player()
    }
}
