//! Read-only mapping from world space onto the display surface
//!
//! Scale factors are computed fresh on every call since the surface may
//! resize between frames. Dead bricks are skipped entirely.

use glam::Vec2;

use crate::consts::CARRIAGE_HEIGHT;
use crate::sim::GameState;

/// Fixed per-entity colors; not configurable from within the core
pub const BALL_COLOR: Color = Color::new(100, 255, 100);
pub const CARRIAGE_COLOR: Color = Color::new(120, 170, 255);
pub const BRICK_COLOR: Color = Color::new(230, 120, 100);

/// Plain RGB triple carried by draw commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Screen-space primitive for the host drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FilledCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FilledRect {
        top_left: Vec2,
        bottom_right: Vec2,
        color: Color,
    },
}

/// Convert the current state to screen-space draw commands: the ball, the
/// carriage anchored on the bottom edge, then one rect per alive brick.
///
/// The ball radius scales by the x-axis factor alone, so a non-square
/// surface stretches positions but keeps the ball circular.
pub fn draw(state: &GameState, display_size: Vec2) -> Vec<DrawCommand> {
    let scale = display_size / state.world.size;

    let mut commands = Vec::with_capacity(2 + state.alive_bricks());

    commands.push(DrawCommand::FilledCircle {
        center: state.ball.pos * scale,
        radius: state.ball.radius * scale.x,
        color: BALL_COLOR,
    });

    let (left, right) = state.carriage.span();
    commands.push(DrawCommand::FilledRect {
        top_left: Vec2::new(left, state.carriage.pos.y - CARRIAGE_HEIGHT) * scale,
        bottom_right: Vec2::new(right, state.carriage.pos.y) * scale,
        color: CARRIAGE_COLOR,
    });

    for brick in state.bricks.iter().filter(|b| b.is_alive()) {
        commands.push(DrawCommand::FilledRect {
            top_left: brick.upper_left * scale,
            bottom_right: brick.bottom_right * scale,
            color: BRICK_COLOR,
        });
    }

    commands
}
