//! Game state and core simulation types
//!
//! Everything a frontend needs to draw or inspect a session lives here and
//! serializes to JSON. The state is an owned aggregate: every operation takes
//! it as an explicit argument, there are no globals and no locking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::track::Track;
use crate::consts::*;

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// In the menu, simulation frozen
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Player archetype. Only one is exercised so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeroClass {
    #[default]
    Vanguard,
}

/// Held-direction flags, doubling as the external input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Facing angle in radians; tracks the last held movement direction
    pub angle: f32,
    pub hp: i32,
    pub hero_class: HeroClass,
    /// Currently held direction flags
    pub input: InputState,
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Removed from the roster once this reaches zero or below
    pub hp: i32,
}

/// A bullet in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Remaining time to live in milliseconds
    pub ttl_ms: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current mode
    pub mode: Mode,
    /// Track bounds and checkpoint circuit (immutable by convention)
    pub track: Track,
    /// Current lap, starting at 1
    pub lap: u32,
    /// Index of the next checkpoint to reach, always in [0, checkpoint count)
    pub next_checkpoint: usize,
    /// Score
    pub score: u64,
    /// Elapsed simulation time in milliseconds
    pub elapsed_ms: f32,
    /// Player ship
    pub player: Player,
    /// Live enemies (collection order is collision-scan order)
    pub enemies: Vec<Enemy>,
    /// Live bullets
    pub bullets: Vec<Bullet>,
    /// Remaining weapon cooldown in milliseconds, floored at zero
    pub fire_cooldown_ms: f32,
    /// Elapsed time at which the last shot was fired, `None` before the first
    pub last_shot_at_ms: Option<f32>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session in the given mode.
    ///
    /// Deterministic defaults: the standard track, the player at rest on
    /// checkpoint 0 facing +x, and the fixed two-enemy roster.
    pub fn new(mode: Mode) -> Self {
        let track = Track::default();
        let start = track.checkpoints[0].pos;

        let mut state = Self {
            mode,
            track,
            lap: 1,
            next_checkpoint: 0,
            score: 0,
            elapsed_ms: 0.0,
            player: Player {
                pos: start,
                vel: Vec2::ZERO,
                radius: PLAYER_RADIUS,
                angle: 0.0,
                hp: PLAYER_START_HP,
                hero_class: HeroClass::Vanguard,
                input: InputState::default(),
            },
            enemies: Vec::new(),
            bullets: Vec::new(),
            fire_cooldown_ms: 0.0,
            last_shot_at_ms: None,
            next_id: 1,
        };

        state.spawn_enemy(Vec2::new(260.0, 530.0));
        state.spawn_enemy(Vec2::new(620.0, 340.0));

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an enemy with default stats at the given position
    pub fn spawn_enemy(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            radius: ENEMY_RADIUS,
            hp: ENEMY_START_HP,
        });
    }

    /// Replace the player's held-direction flags with an input snapshot.
    ///
    /// Pure overwrite, no blending or queuing.
    pub fn apply_input(&mut self, snapshot: InputState) {
        self.player.input = snapshot;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::Menu)
    }
}
