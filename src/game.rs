//! The reset/tick/draw facade driven by the host frame loop
//!
//! One concrete type, constructed explicitly at the call site. The host
//! supplies decoded input plus elapsed time, and consumes draw commands
//! plus debug hits; everything else stays inside.

use glam::Vec2;
use thiserror::Error;

use crate::render::{self, DrawCommand};
use crate::settings::{ConfigError, Settings};
use crate::sim::{self, DebugHits, GameState, TickInput};

/// Errors reported synchronously by the facade
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// `tick` or `draw` before the first successful `reset`
    #[error("game is uninitialized: reset must succeed before {0}")]
    Uninitialized(&'static str),
}

/// The simulation behind the host's frame loop.
///
/// Holds no world state until `reset` succeeds; `tick` and `draw`
/// report `Uninitialized` before that.
#[derive(Debug, Default)]
pub struct Game {
    state: Option<GameState>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)build the whole session from `settings`.
    ///
    /// Idempotent: every call fully replaces the previous state and all
    /// bricks come back alive.
    pub fn reset(&mut self, settings: &Settings) -> Result<(), GameError> {
        let state = GameState::from_settings(settings)?;
        log::info!(
            "reset: world {}x{}, {} bricks",
            state.world.size.x,
            state.world.size.y,
            state.bricks.len()
        );
        self.state = Some(state);
        Ok(())
    }

    /// Advance one frame, appending this tick's collision markers to
    /// `debug` (owned and cleared by the caller).
    pub fn tick(
        &mut self,
        input: &TickInput,
        debug: &mut DebugHits,
        elapsed: f32,
    ) -> Result<(), GameError> {
        let state = self
            .state
            .as_mut()
            .ok_or(GameError::Uninitialized("tick"))?;
        sim::tick(state, input, debug, elapsed);
        Ok(())
    }

    /// Produce this frame's screen-space draw commands.
    pub fn draw(&self, display_size: Vec2) -> Result<Vec<DrawCommand>, GameError> {
        let state = self
            .state
            .as_ref()
            .ok_or(GameError::Uninitialized("draw"))?;
        Ok(render::draw(state, display_size))
    }

    /// Read access to the live state, if initialized
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }
}
