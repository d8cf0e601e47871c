//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (drive it through `advance_time`)
//! - Stable iteration order (collection order, first match wins)
//! - No rendering, clock, or platform dependencies
//!
//! The public surface is four operations: `GameState::new`,
//! `GameState::apply_input`, `fire_primary`, and `advance_time`.

pub mod collision;
pub mod state;
pub mod tick;
pub mod track;
pub mod weapon;

pub use collision::circles_overlap;
pub use state::{Bullet, Enemy, GameState, HeroClass, InputState, Mode, Player};
pub use tick::{advance_time, step_game};
pub use track::{Checkpoint, Track};
pub use weapon::fire_primary;
