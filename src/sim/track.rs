//! Track geometry: rectangular bounds and the ordered checkpoint circuit
//!
//! The track is an axis-aligned rectangle with corner (0, 0); +x runs right
//! and +y runs down, matching screen coordinates. Checkpoints form a fixed
//! cyclic circuit and must be reached strictly in order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A lap checkpoint: fixed position and reach radius
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Checkpoint {
    pub pos: Vec2,
    pub radius: f32,
}

/// Immutable track definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub width: f32,
    pub height: f32,
    /// Checkpoint circuit in lap order; index 0 is the start/finish gate
    pub checkpoints: Vec<Checkpoint>,
}

impl Default for Track {
    /// The standard circuit: counter-clockwise from the bottom-left gate.
    ///
    /// The two checkpoints on the right and top sit 60 units from their walls
    /// so a ship sliding along the boundary clamp still passes within reach.
    fn default() -> Self {
        let gate = |x: f32, y: f32| Checkpoint {
            pos: Vec2::new(x, y),
            radius: CHECKPOINT_RADIUS,
        };
        Self {
            width: TRACK_WIDTH,
            height: TRACK_HEIGHT,
            checkpoints: vec![
                gate(120.0, 530.0),
                gate(780.0, 530.0),
                gate(840.0, 60.0),
                gate(120.0, 60.0),
            ],
        }
    }
}

impl Track {
    /// Check whether a point lies inside the track (bounds inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Clamp a position so a disc of the given radius stays fully in bounds
    pub fn clamp_to_bounds(&self, pos: Vec2, radius: f32) -> Vec2 {
        pos.clamp(
            Vec2::splat(radius),
            Vec2::new(self.width - radius, self.height - radius),
        )
    }
}
