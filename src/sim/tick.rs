//! Fixed timestep simulation tick
//!
//! `step_game` advances the state by one raw delta; `advance_time` is the
//! public driver that chops an arbitrary wall-time delta into fixed sub-steps
//! so the physics is independent of the caller's reporting cadence. Normal
//! play must always go through `advance_time`: drag is applied once per
//! sub-step, so feeding raw frame deltas to `step_game` directly changes the
//! feel with the frame rate.

use glam::Vec2;

use super::collision::circles_overlap;
use super::state::{GameState, Mode};
use crate::consts::*;

/// Advance the game state by one tick of `dt_ms` milliseconds.
///
/// No-op outside of play. Elapsed time and the fire cooldown consume the raw
/// delta; then the three sub-steps run in order: player kinematics, checkpoint
/// progress, bullet/enemy resolution.
pub fn step_game(state: &mut GameState, dt_ms: f32) {
    match state.mode {
        Mode::Playing => {}
        Mode::Menu | Mode::GameOver => return,
    }

    let dt = dt_ms / 1000.0;
    state.elapsed_ms += dt_ms;
    state.fire_cooldown_ms = (state.fire_cooldown_ms - dt_ms).max(0.0);

    update_player(state, dt);
    update_checkpoints(state);
    update_bullets_and_enemies(state, dt_ms, dt);
}

/// Advance the simulation by a total wall-time delta in milliseconds.
///
/// Consumes the budget in `min(SIM_STEP_MS, remaining)` slices, so the final
/// sub-step is clipped to the leftover. Sub-microsecond residue from repeated
/// f32 subtraction is dropped instead of run as a degenerate sub-step.
pub fn advance_time(state: &mut GameState, total_ms: f32) {
    let mut remaining = total_ms;
    while remaining > TIME_RESIDUE_MS {
        let dt = SIM_STEP_MS.min(remaining);
        step_game(state, dt);
        remaining -= dt;
    }
}

/// Player kinematics: thrust along the held axis, drag, integrate, clamp
fn update_player(state: &mut GameState, dt: f32) {
    let input = state.player.input;
    let axis = Vec2::new(
        (input.right as i8 - input.left as i8) as f32,
        (input.down as i8 - input.up as i8) as f32,
    );

    if axis != Vec2::ZERO {
        let dir = axis.normalize();
        state.player.vel += dir * PLAYER_ACCEL * dt;
        // Facing follows the held direction, not the velocity
        state.player.angle = dir.y.atan2(dir.x);
    }

    // Drag runs every sub-step whether or not a direction is held
    state.player.vel *= PLAYER_DRAG;

    let pos = state.player.pos + state.player.vel * dt;
    state.player.pos = state.track.clamp_to_bounds(pos, state.player.radius);
}

/// Checkpoint progress: only the single gate at the next index counts, so the
/// circuit is forced into its fixed cyclic order
fn update_checkpoints(state: &mut GameState) {
    let checkpoint = state.track.checkpoints[state.next_checkpoint];
    if !circles_overlap(
        state.player.pos,
        state.player.radius,
        checkpoint.pos,
        checkpoint.radius,
    ) {
        return;
    }

    state.next_checkpoint += 1;
    if state.next_checkpoint >= state.track.checkpoints.len() {
        state.next_checkpoint = 0;
        state.lap += 1;
        state.score += LAP_BONUS;
        log::info!("lap {} complete, score {}", state.lap - 1, state.score);
    }
}

/// Bullet flight, enemy damage, and lifetime pruning
fn update_bullets_and_enemies(state: &mut GameState, dt_ms: f32, dt: f32) {
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * dt;
        bullet.ttl_ms -= dt_ms;
    }

    let bullets = std::mem::take(&mut state.bullets);
    let mut live = Vec::with_capacity(bullets.len());
    for bullet in bullets {
        let mut hit_enemy = false;
        // Scan in roster order, first overlap wins: a bullet damages at most
        // one enemy per sub-step
        for enemy in &mut state.enemies {
            if circles_overlap(bullet.pos, bullet.radius, enemy.pos, enemy.radius) {
                enemy.hp -= 1;
                hit_enemy = true;
                if enemy.hp <= 0 {
                    state.score += KILL_BONUS;
                    log::debug!("enemy {} destroyed, score {}", enemy.id, state.score);
                }
                break;
            }
        }

        // A bullet survives only if it hit nothing, stayed in bounds
        // (inclusive), and still has time to live
        if !hit_enemy && state.track.contains_point(bullet.pos) && bullet.ttl_ms > 0.0 {
            live.push(bullet);
        }
    }
    state.bullets = live;

    state.enemies.retain(|enemy| enemy.hp > 0);
}
