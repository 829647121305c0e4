//! Simulation state and core entity types
//!
//! Everything the per-tick physics reads or writes lives here. The
//! whole session is rebuilt from `Settings` on reset; nothing survives
//! across resets.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board;
use crate::settings::{ConfigError, Settings};

/// The bounded rectangular playfield
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct World {
    /// Fixed dimensions in world units, set at reset
    pub size: Vec2,
}

/// The bouncing ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed the velocity re-seeds to on the reset input
    pub initial_speed: f32,
}

/// The player-controlled bar at the world's bottom edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Carriage {
    /// Center of the bar; `pos.y` is pinned to the world's bottom edge
    pub pos: Vec2,
    pub width: f32,
}

impl Carriage {
    /// Horizontal extent as (left, right)
    #[inline]
    pub fn span(&self) -> (f32, f32) {
        (self.pos.x - self.width / 2.0, self.pos.x + self.width / 2.0)
    }

    /// Shift horizontally, clamped so the bar stays inside the world.
    pub fn shift(&mut self, dx: f32, world_width: f32) {
        let half = self.width / 2.0;
        self.pos.x = (self.pos.x + dx).clamp(half, world_width - half);
    }
}

/// A destructible axis-aligned rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub upper_left: Vec2,
    pub bottom_right: Vec2,
    pub alive: bool,
}

impl Brick {
    pub fn new(upper_left: Vec2, bottom_right: Vec2) -> Self {
        debug_assert!(upper_left.x < bottom_right.x && upper_left.y < bottom_right.y);
        Self {
            upper_left,
            bottom_right,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Terminal: a destroyed brick stays dead until the next reset.
    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    pub ball: Ball,
    pub carriage: Carriage,
    /// Row-major brick grid, rows x columns
    pub bricks: Vec<Brick>,
    /// Display scale factors, refreshed at the start of every tick
    pub world_to_screen: Vec2,
}

impl GameState {
    /// Build a fresh session from `settings`.
    ///
    /// Fails only on a degenerate brick grid; all other values are
    /// trusted per the caller contract. The ball starts at the world
    /// center moving down-right at the configured speed, the carriage
    /// centered on the bottom edge.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let world = World {
            size: settings.world_size,
        };

        let ball = Ball {
            pos: world.size * 0.5,
            vel: Vec2::splat(settings.ball_speed),
            radius: settings.ball_radius,
            initial_speed: settings.ball_speed,
        };

        let carriage = Carriage {
            pos: Vec2::new(world.size.x * 0.5, world.size.y),
            width: settings.carriage_width,
        };

        Ok(Self {
            world,
            ball,
            carriage,
            bricks: board::build_bricks(settings),
            world_to_screen: Vec2::ZERO,
        })
    }

    /// Number of bricks still alive
    pub fn alive_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }
}
