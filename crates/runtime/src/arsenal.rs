//! Ability charge, cooldown, and fire-and-reacquire tracking.
//!
//! Torpedoes are instantaneous: a charge plus a cooldown counter. Teleporters
//! and supernova bombs are asynchronous: firing one spawns an object that
//! shows up in a *later* snapshot, so each runs a small state machine that
//! searches fresh snapshots for the expected object within a bounded window,
//! then keeps re-resolving it by id for as long as it exists.

use game_core::geometry::distance;
use game_core::{GameObject, GameState, ObjectId, ObjectKind};
use tracing::{debug, warn};

use crate::config::Tuning;

/// Torpedo charge gate with an anti-spam cooldown.
#[derive(Clone, Debug, Default)]
pub struct TorpedoRack {
    cooldown: u32,
}

impl TorpedoRack {
    /// Decrements the cooldown; called once per processed tick.
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Attempts to spend a torpedo charge.
    ///
    /// Succeeds only with a charge available, the bot at or above the safe
    /// firing size (firing costs mass), and the cooldown elapsed. On success
    /// the cooldown restarts.
    pub fn consume(&mut self, bot: &GameObject, tuning: &Tuning) -> bool {
        if bot.torpedo_charge <= 0 || bot.size < tuning.torpedo_safe_size || self.cooldown > 0 {
            return false;
        }

        self.cooldown = tuning.torpedo_cooldown_ticks;
        true
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }
}

/// Lifecycle of a fired teleporter or supernova bomb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeployState {
    /// Nothing in flight; the ability may be fired.
    Available,
    /// Fired, waiting for the spawned object to appear in a snapshot.
    Searching { remaining: u32 },
    /// Spawned object found; re-resolved by id every tick.
    Tracking { id: ObjectId },
}

/// Search-window state machine for one asynchronous ability.
#[derive(Clone, Debug)]
pub struct DeployTracker {
    kind: ObjectKind,
    state: DeployState,
}

impl DeployTracker {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            state: DeployState::Available,
        }
    }

    pub fn state(&self) -> DeployState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, DeployState::Available)
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, DeployState::Tracking { .. })
    }

    /// Resolves the tracked object against the given snapshot.
    pub fn tracked<'a>(&self, state: &'a GameState) -> Option<&'a GameObject> {
        match self.state {
            DeployState::Tracking { id } => state.object(id),
            _ => None,
        }
    }

    /// Marks the ability as fired and opens the search window.
    pub fn begin_search(&mut self, window: u32) {
        self.state = DeployState::Searching { remaining: window };
    }

    /// Advances the state machine against a fresh snapshot.
    ///
    /// While searching, the nearest object of the expected kind claims the
    /// track and clears the countdown; an exhausted window falls back to
    /// available. A tracked object that is gone from the snapshot makes the
    /// reference absent without re-entering the search.
    pub fn update(&mut self, state: &GameState, bot: &GameObject) {
        match self.state {
            DeployState::Available => {}
            DeployState::Searching { remaining } => {
                let found = state
                    .objects()
                    .iter()
                    .filter(|obj| obj.kind == self.kind)
                    .min_by(|a, b| {
                        distance(bot.position, a.position)
                            .total_cmp(&distance(bot.position, b.position))
                    });

                match found {
                    Some(obj) => {
                        debug!(
                            "{} acquired at ({}, {}), heading {}",
                            self.kind, obj.position.x, obj.position.y, obj.heading
                        );
                        self.state = DeployState::Tracking { id: obj.id };
                    }
                    None if remaining <= 1 => {
                        warn!("{} search window expired, abandoning", self.kind);
                        self.state = DeployState::Available;
                    }
                    None => {
                        debug!("{} not visible yet, {} ticks left", self.kind, remaining - 1);
                        self.state = DeployState::Searching {
                            remaining: remaining - 1,
                        };
                    }
                }
            }
            DeployState::Tracking { id } => match state.object(id) {
                Some(obj) => {
                    debug!(
                        "tracking {} at ({}, {})",
                        self.kind, obj.position.x, obj.position.y
                    );
                }
                None => {
                    debug!("tracked {} is gone", self.kind);
                    self.state = DeployState::Available;
                }
            },
        }
    }
}

/// All consumable-ability state for one bot.
#[derive(Clone, Debug)]
pub struct Arsenal {
    pub torpedoes: TorpedoRack,
    pub teleporter: DeployTracker,
    pub supernova: DeployTracker,
    teleporter_cooldown: u32,
}

impl Arsenal {
    pub fn new() -> Self {
        Self {
            torpedoes: TorpedoRack::default(),
            teleporter: DeployTracker::new(ObjectKind::Teleporter),
            supernova: DeployTracker::new(ObjectKind::SupernovaBomb),
            teleporter_cooldown: 0,
        }
    }

    /// Per-tick bookkeeping: cooldown decrements and tracker updates.
    pub fn begin_tick(&mut self, state: &GameState, bot: &GameObject) {
        self.torpedoes.tick();
        self.teleporter_cooldown = self.teleporter_cooldown.saturating_sub(1);

        self.teleporter.update(state, bot);
        self.supernova.update(state, bot);
    }

    /// Attempts to spend a torpedo charge.
    pub fn consume_torpedo(&mut self, bot: &GameObject, tuning: &Tuning) -> bool {
        self.torpedoes.consume(bot, tuning)
    }

    /// Attempts to fire a teleporter, opening its search window.
    pub fn fire_teleporter(&mut self, bot: &GameObject, tuning: &Tuning) -> bool {
        if bot.teleporter_charge <= 0
            || bot.size < tuning.teleporter_safe_size
            || self.teleporter_cooldown > 0
            || !self.teleporter.is_available()
        {
            return false;
        }

        self.teleporter.begin_search(tuning.search_window_ticks);
        self.teleporter_cooldown = tuning.teleporter_cooldown_ticks;
        true
    }

    /// Attempts to fire the supernova bomb, opening its search window.
    pub fn fire_supernova(&mut self, bot: &GameObject, tuning: &Tuning) -> bool {
        if !bot.has_supernova || !self.supernova.is_available() {
            return false;
        }

        self.supernova.begin_search(tuning.search_window_ticks);
        true
    }
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Effects, Position, Tick, World};

    fn bot(size: i32, torpedo_charge: i32) -> GameObject {
        GameObject {
            id: ObjectId::random(),
            size,
            speed: 10,
            heading: 0,
            position: Position::ORIGIN,
            kind: ObjectKind::Player,
            effects: Effects::empty(),
            torpedo_charge,
            has_supernova: false,
            teleporter_charge: 1,
            shield_charge: 0,
        }
    }

    fn object(kind: ObjectKind, x: i32, y: i32) -> GameObject {
        GameObject {
            id: ObjectId::random(),
            size: 5,
            speed: 20,
            heading: 45,
            position: Position::new(x, y),
            kind,
            effects: Effects::empty(),
            torpedo_charge: 0,
            has_supernova: false,
            teleporter_charge: 0,
            shield_charge: 0,
        }
    }

    fn snapshot(objects: Vec<GameObject>) -> GameState {
        GameState::new(World::new(1000, Position::ORIGIN, Tick(1)), objects, vec![])
    }

    #[test]
    fn torpedo_consume_requires_charge_size_and_cooldown() {
        let tuning = Tuning {
            torpedo_cooldown_ticks: 3,
            ..Tuning::default()
        };
        let mut rack = TorpedoRack::default();

        assert!(!rack.consume(&bot(20, 0), &tuning), "no charge");
        assert!(!rack.consume(&bot(5, 2), &tuning), "below safe size");
        assert!(rack.consume(&bot(20, 2), &tuning));

        // Cooldown now blocks until it has ticked down.
        assert!(!rack.consume(&bot(20, 2), &tuning));
        rack.tick();
        rack.tick();
        rack.tick();
        assert!(rack.consume(&bot(20, 2), &tuning));
    }

    #[test]
    fn search_window_abandons_after_exact_count() {
        let mut tracker = DeployTracker::new(ObjectKind::Teleporter);
        let empty = snapshot(vec![]);
        let shooter = bot(40, 0);

        tracker.begin_search(3);
        tracker.update(&empty, &shooter);
        tracker.update(&empty, &shooter);
        assert_eq!(tracker.state(), DeployState::Searching { remaining: 1 });

        tracker.update(&empty, &shooter);
        assert_eq!(tracker.state(), DeployState::Available);
    }

    #[test]
    fn search_locks_onto_nearest_matching_object() {
        let far = object(ObjectKind::Teleporter, 500, 0);
        let near = object(ObjectKind::Teleporter, 50, 0);
        let near_id = near.id;
        let state = snapshot(vec![far, near, object(ObjectKind::Food, 1, 1)]);

        let mut tracker = DeployTracker::new(ObjectKind::Teleporter);
        tracker.begin_search(30);
        tracker.update(&state, &bot(40, 0));

        assert_eq!(tracker.state(), DeployState::Tracking { id: near_id });
        assert_eq!(tracker.tracked(&state).unwrap().id, near_id);
    }

    #[test]
    fn vanished_track_becomes_absent_without_research() {
        let tele = object(ObjectKind::Teleporter, 50, 0);
        let with_tele = snapshot(vec![tele.clone()]);
        let shooter = bot(40, 0);

        let mut tracker = DeployTracker::new(ObjectKind::Teleporter);
        tracker.begin_search(30);
        tracker.update(&with_tele, &shooter);
        assert!(tracker.is_tracking());

        // A later snapshot with a *different* teleporter must not be adopted.
        let other = snapshot(vec![object(ObjectKind::Teleporter, 10, 10)]);
        tracker.update(&other, &shooter);
        assert_eq!(tracker.state(), DeployState::Available);
        assert!(tracker.tracked(&other).is_none());
    }

    #[test]
    fn teleporter_fire_gates_on_charge_size_and_state() {
        let tuning = Tuning::default();
        let mut arsenal = Arsenal::new();

        let mut small = bot(10, 0);
        small.teleporter_charge = 1;
        assert!(!arsenal.fire_teleporter(&small, &tuning), "below safe size");

        let mut uncharged = bot(40, 0);
        uncharged.teleporter_charge = 0;
        assert!(!arsenal.fire_teleporter(&uncharged, &tuning), "no charge");

        let armed = bot(40, 0);
        assert!(arsenal.fire_teleporter(&armed, &tuning));
        assert!(
            !arsenal.fire_teleporter(&armed, &tuning),
            "search in progress blocks a second launch"
        );
    }

    #[test]
    fn supernova_fire_requires_the_pickup_flag() {
        let tuning = Tuning::default();
        let mut arsenal = Arsenal::new();

        assert!(!arsenal.fire_supernova(&bot(40, 0), &tuning));

        let mut carrier = bot(40, 0);
        carrier.has_supernova = true;
        assert!(arsenal.fire_supernova(&carrier, &tuning));
        assert!(!arsenal.fire_supernova(&carrier, &tuning), "already in flight");
    }
}
