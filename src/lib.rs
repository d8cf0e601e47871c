//! Racer Shooter - a top-down arcade racer/shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, checkpoints, collisions, game state)
//!
//! The crate is headless: a rendering layer reads `GameState` fields to draw
//! the scene and an input layer feeds `InputState` snapshots back in. The
//! simulation itself never touches a clock, a screen, or a device.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation sub-step in milliseconds (60 Hz)
    pub const SIM_STEP_MS: f32 = 1000.0 / 60.0;
    /// Time-budget residue below this is dropped rather than run as a
    /// degenerate sub-step (repeated f32 subtraction leaves sub-microsecond
    /// leftovers, and drag is applied per sub-step, not per unit time)
    pub const TIME_RESIDUE_MS: f32 = 1e-3;

    /// Track dimensions
    pub const TRACK_WIDTH: f32 = 900.0;
    pub const TRACK_HEIGHT: f32 = 650.0;
    /// Checkpoint reach radius
    pub const CHECKPOINT_RADIUS: f32 = 40.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_START_HP: i32 = 100;
    /// Thrust while a direction is held (units/s²)
    pub const PLAYER_ACCEL: f32 = 1350.0;
    /// Velocity multiplier applied every sub-step
    pub const PLAYER_DRAG: f32 = 0.96;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 620.0;
    pub const BULLET_TTL_MS: f32 = 1400.0;
    /// Bullets spawn this far past the player's rim
    pub const MUZZLE_OFFSET: f32 = 8.0;
    pub const FIRE_COOLDOWN_MS: f32 = 130.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 18.0;
    pub const ENEMY_START_HP: i32 = 2;

    /// Score bonuses
    pub const LAP_BONUS: u64 = 50;
    pub const KILL_BONUS: u64 = 100;
}
