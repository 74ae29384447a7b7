use std::collections::HashMap;

use super::{GameObject, ObjectId, Position, Tick};

/// Immutable per-snapshot world record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub radius: i32,
    pub center: Position,
    pub tick: Tick,
}

impl World {
    pub fn new(radius: i32, center: Position, tick: Tick) -> Self {
        Self {
            radius,
            center,
            tick,
        }
    }
}

/// One complete snapshot: the world record plus the two object collections.
///
/// Non-player objects and players live in disjoint key spaces, exactly as the
/// runner delivers them. An id→index map per collection is built once at
/// construction so references tracked across ticks (current target, fired
/// teleporter, fired supernova) re-resolve by id without scanning; a lookup
/// that misses means the object is gone from the world, never that a stale
/// handle survived.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    world: Option<World>,
    objects: Vec<GameObject>,
    players: Vec<GameObject>,
    object_index: HashMap<ObjectId, usize>,
    player_index: HashMap<ObjectId, usize>,
}

impl GameState {
    pub fn new(world: World, objects: Vec<GameObject>, players: Vec<GameObject>) -> Self {
        let object_index = objects
            .iter()
            .enumerate()
            .map(|(i, obj)| (obj.id, i))
            .collect();
        let player_index = players
            .iter()
            .enumerate()
            .map(|(i, obj)| (obj.id, i))
            .collect();

        Self {
            world: Some(world),
            objects,
            players,
            object_index,
            player_index,
        }
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// All non-player objects, in delivery order.
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// All player objects (the self object included), in delivery order.
    pub fn players(&self) -> &[GameObject] {
        &self.players
    }

    /// Resolves a non-player object by id.
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.object_index.get(&id).map(|&i| &self.objects[i])
    }

    /// Resolves a player object by id.
    pub fn player(&self, id: ObjectId) -> Option<&GameObject> {
        self.player_index.get(&id).map(|&i| &self.players[i])
    }

    /// Resolves an id against both collections, players first.
    pub fn any(&self, id: ObjectId) -> Option<&GameObject> {
        self.player(id).or_else(|| self.object(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Effects, ObjectKind};

    fn food(id: ObjectId, x: i32, y: i32) -> GameObject {
        GameObject {
            id,
            size: 3,
            speed: 0,
            heading: 0,
            position: Position::new(x, y),
            kind: ObjectKind::Food,
            effects: Effects::empty(),
            torpedo_charge: 0,
            has_supernova: false,
            teleporter_charge: 0,
            shield_charge: 0,
        }
    }

    #[test]
    fn resolves_by_id_within_each_collection() {
        let food_id = ObjectId::random();
        let world = World::new(1000, Position::ORIGIN, Tick(1));
        let state = GameState::new(world, vec![food(food_id, 10, 10)], vec![]);

        assert!(state.object(food_id).is_some());
        assert!(state.player(food_id).is_none());
        assert!(state.any(food_id).is_some());
        assert!(state.object(ObjectId::random()).is_none());
    }

    #[test]
    fn default_state_has_no_world() {
        let state = GameState::default();
        assert!(state.world().is_none());
        assert!(state.objects().is_empty());
    }
}
