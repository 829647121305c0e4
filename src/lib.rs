//! Brickfall - a rectangular-arena brick-breaking arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, board state)
//! - `render`: World-space to screen-space draw command mapping
//! - `game`: The reset/tick/draw facade driven by the host frame loop
//! - `settings`: Session configuration
//!
//! The host owns the window, the input decoding, and the drawing
//! surface; this crate only consumes decoded input plus elapsed time and
//! produces draw commands plus debug collision markers.

pub mod game;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::{Game, GameError};
pub use settings::{ConfigError, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Carriage bar height in world units
    pub const CARRIAGE_HEIGHT: f32 = 20.0;
    /// Horizontal carriage travel per held direction key, per tick
    pub const CARRIAGE_SHIFT: f32 = 20.0;

    /// Brick row height in world units (brick width is derived from the
    /// grid configuration at reset)
    pub const BRICK_HEIGHT: f32 = 20.0;

    /// Velocity added to the ball per held steering key, per tick
    pub const STEER_IMPULSE: f32 = 1.0;
}
