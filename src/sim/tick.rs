//! Per-frame simulation advance
//!
//! One `tick` call per rendered frame: steer from held input, integrate
//! the ball, then resolve collisions carriage-first, world boundary,
//! bricks.

use glam::Vec2;

use super::collision;
use super::debug::DebugHits;
use super::state::GameState;
use crate::consts::{CARRIAGE_SHIFT, STEER_IMPULSE};

/// Snapshot of held inputs for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held direction keys; left/right also drive the carriage
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Re-seed the ball velocity to its initial speed
    pub reset_velocity: bool,
    /// Current display surface size, for debug-hit scaling
    pub display_size: Vec2,
}

/// Advance the simulation by `elapsed` seconds.
///
/// Collision markers are appended to `debug` in screen space; the
/// caller owns that collection and clears it between frames.
pub fn tick(state: &mut GameState, input: &TickInput, debug: &mut DebugHits, elapsed: f32) {
    // The display surface may resize at any time
    state.world_to_screen = input.display_size / state.world.size;

    // Steering nudges the ball directly; held keys stack without a cap,
    // and the reset key discards whatever has accumulated.
    if input.left {
        state.ball.vel.x -= STEER_IMPULSE;
    }
    if input.right {
        state.ball.vel.x += STEER_IMPULSE;
    }
    if input.up {
        state.ball.vel.y -= STEER_IMPULSE;
    }
    if input.down {
        state.ball.vel.y += STEER_IMPULSE;
    }
    if input.reset_velocity {
        state.ball.vel = Vec2::splat(state.ball.initial_speed);
    }

    if input.left {
        state.carriage.shift(-CARRIAGE_SHIFT, state.world.size.x);
    }
    if input.right {
        state.carriage.shift(CARRIAGE_SHIFT, state.world.size.x);
    }

    state.ball.pos += state.ball.vel * elapsed;

    // The bar sits inside the bottom boundary band, so it is tested
    // before the world edges. No marker is recorded for the bar.
    collision::resolve_carriage(&mut state.ball, &state.carriage);

    for contact in collision::resolve_world_bounds(&mut state.ball, state.world.size)
        .into_iter()
        .flatten()
    {
        debug.record(contact.point, contact.normal, state.world_to_screen);
    }

    for brick in state.bricks.iter_mut().filter(|b| b.is_alive()) {
        if let Some(contact) = collision::brick_contact(state.ball.pos, state.ball.radius, brick) {
            collision::apply_contact(&mut state.ball, &contact);
            brick.destroy();
            debug.record(contact.point, contact.normal, state.world_to_screen);
        }
    }
}
