//! Primary weapon fire

use glam::Vec2;

use super::state::{Bullet, GameState, Mode};
use crate::consts::*;

/// Fire the primary weapon.
///
/// Reports `false` and does nothing outside of play or while the cooldown is
/// still running. Otherwise spawns a single bullet just past the player's rim
/// along the facing direction, arms the cooldown, stamps the shot time, and
/// reports `true`.
pub fn fire_primary(state: &mut GameState) -> bool {
    match state.mode {
        Mode::Playing => {}
        Mode::Menu | Mode::GameOver => return false,
    }
    if state.fire_cooldown_ms > 0.0 {
        return false;
    }

    let aim = Vec2::from_angle(state.player.angle);
    state.bullets.push(Bullet {
        pos: state.player.pos + aim * (state.player.radius + MUZZLE_OFFSET),
        vel: aim * BULLET_SPEED,
        radius: BULLET_RADIUS,
        ttl_ms: BULLET_TTL_MS,
    });

    state.fire_cooldown_ms = FIRE_COOLDOWN_MS;
    state.last_shot_at_ms = Some(state.elapsed_ms);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_spawns_bullet_at_muzzle() {
        let mut state = GameState::new(Mode::Playing);
        state.player.angle = 0.7;

        assert!(fire_primary(&mut state));
        assert_eq!(state.bullets.len(), 1);

        let bullet = &state.bullets[0];
        let offset = bullet.pos - state.player.pos;
        assert!((offset.length() - (state.player.radius + MUZZLE_OFFSET)).abs() < 0.001);
        assert!((bullet.vel.length() - BULLET_SPEED).abs() < 0.001);
        // Velocity points along the facing angle
        assert!((bullet.vel.y.atan2(bullet.vel.x) - 0.7).abs() < 0.001);
        assert_eq!(bullet.ttl_ms, BULLET_TTL_MS);

        assert_eq!(state.fire_cooldown_ms, FIRE_COOLDOWN_MS);
        assert_eq!(state.last_shot_at_ms, Some(0.0));
    }

    #[test]
    fn test_fire_blocked_by_cooldown() {
        let mut state = GameState::new(Mode::Playing);
        assert!(fire_primary(&mut state));
        assert!(!fire_primary(&mut state));
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_fire_blocked_outside_play() {
        let mut state = GameState::new(Mode::Menu);
        assert!(!fire_primary(&mut state));
        assert!(state.bullets.is_empty());
        assert_eq!(state.last_shot_at_ms, None);

        state.mode = Mode::GameOver;
        assert!(!fire_primary(&mut state));
        assert!(state.bullets.is_empty());
    }
}
