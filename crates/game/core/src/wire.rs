//! Wire-format snapshot payloads.
//!
//! The runner publishes game state as a world record plus two id-keyed maps
//! of fixed-order attribute lists (all objects, player objects). Decoding
//! turns those into a typed [`GameState`]; a payload without a world record
//! yields no state at all, so the tick is skipped upstream rather than half
//! processed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::{GameObject, GameState, ObjectId, Position, Tick, World};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDto {
    pub center_point: Position,
    pub radius: i32,
    pub current_tick: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
    pub world: Option<WorldDto>,
    #[serde(default)]
    pub game_objects: HashMap<Uuid, Vec<i32>>,
    #[serde(default)]
    pub player_objects: HashMap<Uuid, Vec<i32>>,
}

impl SnapshotDto {
    /// Decodes into a typed snapshot.
    ///
    /// Returns `None` when the world record is missing. Entries with an
    /// unknown type code are dropped; every other malformed attribute list
    /// decodes with degraded defaults.
    pub fn into_state(self) -> Option<GameState> {
        let world = self.world?;
        let world = World::new(
            world.radius,
            world.center_point,
            Tick::new(world.current_tick),
        );

        let decode = |entries: HashMap<Uuid, Vec<i32>>| -> Vec<GameObject> {
            entries
                .into_iter()
                .filter_map(|(id, attribs)| GameObject::from_attribs(ObjectId(id), &attribs))
                .collect()
        };

        Some(GameState::new(
            world,
            decode(self.game_objects),
            decode(self.player_objects),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ObjectKind;

    #[test]
    fn missing_world_yields_no_state() {
        let dto = SnapshotDto {
            world: None,
            ..Default::default()
        };
        assert!(dto.into_state().is_none());
    }

    #[test]
    fn decodes_both_collections() {
        let food = Uuid::new_v4();
        let player = Uuid::new_v4();

        let mut game_objects = HashMap::new();
        game_objects.insert(food, vec![2, 0, 0, 2, 50, 60]);
        let mut player_objects = HashMap::new();
        player_objects.insert(player, vec![15, 20, 0, 1, 0, 0, 0, 1, 0, 0, 0]);

        let dto = SnapshotDto {
            world: Some(WorldDto {
                center_point: Position::ORIGIN,
                radius: 1000,
                current_tick: 7,
            }),
            game_objects,
            player_objects,
        };

        let state = dto.into_state().unwrap();
        assert_eq!(state.world().unwrap().tick, Tick(7));
        assert_eq!(state.objects().len(), 1);
        assert_eq!(state.players().len(), 1);
        assert_eq!(state.object(ObjectId(food)).unwrap().kind, ObjectKind::Food);
        assert_eq!(state.player(ObjectId(player)).unwrap().torpedo_charge, 1);
    }

    #[test]
    fn unknown_type_codes_are_dropped() {
        let mut game_objects = HashMap::new();
        game_objects.insert(Uuid::new_v4(), vec![2, 0, 0, 99, 50, 60]);

        let dto = SnapshotDto {
            world: Some(WorldDto {
                center_point: Position::ORIGIN,
                radius: 1000,
                current_tick: 1,
            }),
            game_objects,
            ..Default::default()
        };

        assert!(dto.into_state().unwrap().objects().is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let json = r#"{
            "world": {"centerPoint": {"x": 0, "y": 0}, "radius": 500, "currentTick": 3},
            "gameObjects": {},
            "playerObjects": {}
        }"#;
        let dto: SnapshotDto = serde_json::from_str(json).unwrap();
        let state = dto.into_state().unwrap();
        assert_eq!(state.world().unwrap().radius, 500);
    }
}
