//! Tuning table for the decision heuristics.

/// Behavior constants and tunable parameters.
///
/// One instance is shared by every evaluator, action producer, and query for
/// the lifetime of a session. The defaults are the tournament values; tests
/// construct modified copies where a scenario needs to pin a threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    // ----- final score multipliers per behavior -----
    pub feed_mult: f64,
    pub flee_mult: f64,
    pub chase_mult: f64,
    pub hunt_mult: f64,
    pub pickup_mult: f64,
    /// Added to the teleporter charge count before scaling the pickup score.
    pub pickup_weight_bias: i32,

    // ----- flee -----
    pub flee_search_radius: f64,
    pub flee_torpedo_range: f64,

    // ----- chase -----
    pub chase_search_radius: f64,
    pub chase_torpedo_range: f64,

    // ----- hunt (aggressive chase) -----
    /// Required size advantage over the target; waived while a teleporter is
    /// already in flight.
    pub hunt_size_margin: i32,
    pub hunt_teleport_bonus: i32,
    pub hunt_search_radius: f64,
    pub hunt_torpedo_range: f64,
    pub hunt_teleport_range: f64,

    // ----- supernova pickup -----
    pub pickup_teleport_radius: f64,
    pub pickup_toxic_radius: f64,
    pub pickup_teleport_safety_radius: f64,

    // ----- always-run corrections -----
    pub gas_search_radius: f64,
    pub edge_avoid_radius: f64,
    pub shield_search_radius: f64,
    /// Minimum angle between a salvo's bearing from us and its own heading
    /// for it to count as converging.
    pub shield_heading_diff: i32,
    pub intercept_search_radius: f64,
    pub intercept_heading_diff: i32,
    /// Size multiple around a tracked teleporter that must be clear of larger
    /// players (and contain a smaller one) before triggering.
    pub teleport_clearance: f64,

    // ----- target priority penalties -----
    pub gas_cloud_penalty: i32,
    pub asteroid_field_penalty: i32,
    /// Size multiples: hazards within `size × scale` of a candidate penalize it.
    pub gas_cloud_avoidance: f64,
    pub asteroid_field_avoidance: f64,
    /// Size multiple of clearance from the world edge an object needs to be
    /// considered safely reachable.
    pub edge_avoidance: f64,
    pub edge_penalty: i32,
    /// Maximum penalty a food object may carry and still qualify as a target.
    pub feed_penalty_limit: i32,

    // ----- ability gates -----
    pub torpedo_safe_size: i32,
    pub teleporter_safe_size: i32,
    pub shield_safe_size: i32,
    pub torpedo_cooldown_ticks: u32,
    pub teleporter_cooldown_ticks: u32,
    /// Ticks a just-fired teleporter/supernova is searched for before the
    /// attempt is written off.
    pub search_window_ticks: u32,

    // ----- decision loop -----
    pub poll_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            feed_mult: 0.875,
            flee_mult: 1.2,
            chase_mult: 1.1,
            hunt_mult: 1.0,
            pickup_mult: 150.0,
            pickup_weight_bias: 1,

            flee_search_radius: 600.0,
            flee_torpedo_range: 500.0,

            chase_search_radius: 1000.0,
            chase_torpedo_range: 600.0,

            hunt_size_margin: 30,
            hunt_teleport_bonus: 200,
            hunt_search_radius: 1000.0,
            hunt_torpedo_range: 600.0,
            hunt_teleport_range: 800.0,

            pickup_teleport_radius: 150.0,
            pickup_toxic_radius: 200.0,
            pickup_teleport_safety_radius: 150.0,

            gas_search_radius: 40.0,
            edge_avoid_radius: 60.0,
            shield_search_radius: 90.0,
            shield_heading_diff: 135,
            intercept_search_radius: 90.0,
            intercept_heading_diff: 135,
            teleport_clearance: 1.5,

            gas_cloud_penalty: 100,
            asteroid_field_penalty: 30,
            gas_cloud_avoidance: 0.5,
            asteroid_field_avoidance: 0.33,
            edge_avoidance: 1.5,
            edge_penalty: 1000,
            feed_penalty_limit: 50,

            torpedo_safe_size: 10,
            teleporter_safe_size: 30,
            shield_safe_size: 30,
            torpedo_cooldown_ticks: 0,
            teleporter_cooldown_ticks: 10,
            search_window_ticks: 30,

            poll_interval_ms: 20,
        }
    }
}
