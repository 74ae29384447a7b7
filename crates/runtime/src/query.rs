//! Spatial queries over the current snapshot.
//!
//! All lookups are synchronous in-memory scans over the snapshot collections,
//! exposed as [`TickContext`] methods. Results borrow from the snapshot;
//! "nothing matched" is an empty list or `None`, never an error.

use game_core::geometry::{distance, heading_between};
use game_core::{GameObject, ObjectKind};

use crate::context::TickContext;

impl<'a> TickContext<'a> {
    // ========================================================================
    // Non-player object queries
    // ========================================================================

    /// All non-player objects matching `pred`, nearest to the bot first.
    pub fn find_all(&self, pred: impl Fn(&GameObject) -> bool) -> Vec<&'a GameObject> {
        self.find_all_by(|obj| distance(self.bot.position, obj.position), pred)
    }

    /// All non-player objects matching `pred`, ascending by an arbitrary key.
    pub fn find_all_by(
        &self,
        key: impl Fn(&GameObject) -> f64,
        pred: impl Fn(&GameObject) -> bool,
    ) -> Vec<&'a GameObject> {
        let mut matches: Vec<&'a GameObject> =
            self.state.objects().iter().filter(|obj| pred(obj)).collect();
        matches.sort_by(|a, b| key(a).total_cmp(&key(b)));
        matches
    }

    /// The non-player object nearest to the bot that matches `pred`.
    pub fn find_closest(&self, pred: impl Fn(&GameObject) -> bool) -> Option<&'a GameObject> {
        self.find_closest_by(|obj| distance(self.bot.position, obj.position), pred)
    }

    /// The non-player object minimizing an arbitrary key among matches.
    pub fn find_closest_by(
        &self,
        key: impl Fn(&GameObject) -> f64,
        pred: impl Fn(&GameObject) -> bool,
    ) -> Option<&'a GameObject> {
        self.state
            .objects()
            .iter()
            .filter(|obj| pred(obj))
            .min_by(|a, b| key(a).total_cmp(&key(b)))
    }

    /// Non-player objects within `radius` of `origin`, nearest to it first.
    pub fn find_within(
        &self,
        origin: &GameObject,
        radius: f64,
        pred: impl Fn(&GameObject) -> bool,
    ) -> Vec<&'a GameObject> {
        self.find_all_by(
            |obj| distance(origin.position, obj.position),
            |obj| pred(obj) && is_within(origin, obj, radius),
        )
    }

    // ========================================================================
    // Player queries
    // ========================================================================

    /// All players matching `pred`, nearest to the bot first.
    pub fn find_players(&self, pred: impl Fn(&GameObject) -> bool) -> Vec<&'a GameObject> {
        self.find_players_by(|obj| distance(self.bot.position, obj.position), pred)
    }

    /// All players matching `pred`, ascending by an arbitrary key.
    pub fn find_players_by(
        &self,
        key: impl Fn(&GameObject) -> f64,
        pred: impl Fn(&GameObject) -> bool,
    ) -> Vec<&'a GameObject> {
        let mut matches: Vec<&'a GameObject> =
            self.state.players().iter().filter(|obj| pred(obj)).collect();
        matches.sort_by(|a, b| key(a).total_cmp(&key(b)));
        matches
    }

    /// Players within `radius` of `origin`, nearest to it first.
    pub fn find_players_within(
        &self,
        origin: &GameObject,
        radius: f64,
        pred: impl Fn(&GameObject) -> bool,
    ) -> Vec<&'a GameObject> {
        self.find_players_by(
            |obj| distance(origin.position, obj.position),
            |obj| pred(obj) && is_within(origin, obj, radius),
        )
    }

    // ========================================================================
    // Predicates and scoring helpers
    // ========================================================================

    /// Player-typed and not the self object.
    pub fn is_enemy_player(&self, obj: &GameObject) -> bool {
        obj.is_player() && obj.id != self.bot.id
    }

    pub fn distance_from_center(&self, obj: &GameObject) -> f64 {
        distance(self.world.center, obj.position)
    }

    /// Bearing of an object as seen from the world center.
    pub fn heading_from_center(&self, obj: &GameObject) -> i32 {
        heading_between(self.world.center, obj.position)
    }

    /// Whether an object can be reached without skirting the world edge.
    ///
    /// The required clearance scales with the bot's own size: a big bot
    /// steers a wide arc and clips the boundary long before its center does.
    pub fn safe_from_edge(&self, obj: &GameObject) -> bool {
        self.world.radius as f64 - self.distance_from_center(obj)
            > self.tuning.edge_avoidance * self.bot.size as f64
    }

    /// Additive penalty de-prioritizing a candidate near hazards or the edge.
    ///
    /// Food sitting next to a gas cloud or asteroid field scores worse than
    /// food in the open; anything outside the edge-safety margin is penalized
    /// hard enough to fall out of consideration.
    pub fn priority_penalty(&self, obj: &GameObject) -> i32 {
        let size = self.bot.size as f64;
        let mut total = 0;

        if self.hazard_near(obj, self.tuning.gas_cloud_avoidance * size, ObjectKind::GasCloud) {
            total += self.tuning.gas_cloud_penalty;
        }
        if self.hazard_near(
            obj,
            self.tuning.asteroid_field_avoidance * size,
            ObjectKind::AsteroidField,
        ) {
            total += self.tuning.asteroid_field_penalty;
        }
        if !self.safe_from_edge(obj) {
            total += self.tuning.edge_penalty;
        }

        total
    }

    fn hazard_near(&self, origin: &GameObject, radius: f64, kind: ObjectKind) -> bool {
        self.state
            .objects()
            .iter()
            .any(|obj| obj.kind == kind && is_within(origin, obj, radius))
    }
}

/// Whether two objects are within `radius` of each other.
pub fn is_within(a: &GameObject, b: &GameObject, radius: f64) -> bool {
    distance(a.position, b.position) <= radius
}

#[cfg(test)]
mod tests {
    use game_core::{Effects, GameState, ObjectId, Position, Tick, World};

    use super::*;
    use crate::arsenal::Arsenal;
    use crate::config::Tuning;

    fn object(kind: ObjectKind, x: i32, y: i32) -> GameObject {
        GameObject {
            id: ObjectId::random(),
            size: 5,
            speed: 0,
            heading: 0,
            position: Position::new(x, y),
            kind,
            effects: Effects::empty(),
            torpedo_charge: 0,
            has_supernova: false,
            teleporter_charge: 0,
            shield_charge: 0,
        }
    }

    fn player(size: i32, x: i32, y: i32) -> GameObject {
        GameObject {
            size,
            kind: ObjectKind::Player,
            ..object(ObjectKind::Player, x, y)
        }
    }

    struct Fixture {
        tuning: Tuning,
        world: World,
        state: GameState,
        bot: GameObject,
        arsenal: Arsenal,
        target: Option<ObjectId>,
    }

    impl Fixture {
        fn new(objects: Vec<GameObject>, mut players: Vec<GameObject>) -> Self {
            let bot = player(10, 0, 0);
            players.push(bot.clone());
            Self {
                tuning: Tuning::default(),
                world: World::new(1000, Position::ORIGIN, Tick(1)),
                state: GameState::new(
                    World::new(1000, Position::ORIGIN, Tick(1)),
                    objects,
                    players,
                ),
                bot,
                arsenal: Arsenal::new(),
                target: None,
            }
        }

        fn ctx(&mut self) -> TickContext<'_> {
            TickContext::new(
                &self.tuning,
                &self.world,
                &self.state,
                &self.bot,
                &mut self.arsenal,
                &mut self.target,
            )
        }
    }

    #[test]
    fn find_all_sorts_by_distance_to_bot() {
        let far = object(ObjectKind::Food, 300, 0);
        let near = object(ObjectKind::Food, 10, 0);
        let near_id = near.id;
        let mut fx = Fixture::new(vec![far, near], vec![]);

        let found = fx.ctx().find_all(|obj| obj.is_food());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, near_id);
    }

    #[test]
    fn find_within_measures_from_the_given_origin() {
        let anchor = object(ObjectKind::Food, 400, 0);
        let beside_anchor = object(ObjectKind::GasCloud, 410, 0);
        let beside_bot = object(ObjectKind::GasCloud, 10, 0);
        let beside_anchor_id = beside_anchor.id;
        let mut fx = Fixture::new(vec![anchor.clone(), beside_anchor, beside_bot], vec![]);

        let found = fx
            .ctx()
            .find_within(&anchor, 50.0, |obj| obj.kind == ObjectKind::GasCloud);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, beside_anchor_id);
    }

    #[test]
    fn enemy_predicate_excludes_self() {
        let rival = player(20, 100, 0);
        let mut fx = Fixture::new(vec![], vec![rival]);

        let ctx = fx.ctx();
        let bot = ctx.bot;
        assert!(!ctx.is_enemy_player(bot));
        let enemies = ctx.find_players(|p| p.id != bot.id);
        assert_eq!(enemies.len(), 1);
        assert!(ctx.is_enemy_player(enemies[0]));
    }

    #[test]
    fn edge_safety_scales_with_bot_size() {
        // Bot size 10, edge avoidance 1.5: clearance must exceed 15.
        let safe = object(ObjectKind::Food, 900, 0);
        let risky = object(ObjectKind::Food, 990, 0);
        let mut fx = Fixture::new(vec![safe.clone(), risky.clone()], vec![]);

        let ctx = fx.ctx();
        assert!(ctx.safe_from_edge(&safe));
        assert!(!ctx.safe_from_edge(&risky));
    }

    #[test]
    fn priority_penalty_accumulates_per_hazard() {
        // Gas cloud within 0.5×size = 5 of the candidate, and the candidate
        // hugs the world edge.
        let tainted = object(ObjectKind::Food, 990, 0);
        let cloud = object(ObjectKind::GasCloud, 992, 0);
        let clean = object(ObjectKind::Food, 100, 100);
        let mut fx = Fixture::new(vec![tainted.clone(), cloud, clean.clone()], vec![]);

        let ctx = fx.ctx();
        let tuning = ctx.tuning;
        assert_eq!(
            ctx.priority_penalty(&tainted),
            tuning.gas_cloud_penalty + tuning.edge_penalty
        );
        assert_eq!(ctx.priority_penalty(&clean), 0);
    }
}
