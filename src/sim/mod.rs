//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Caller-paced ticks with explicit elapsed time
//! - Stable brick iteration order (row-major)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod debug;
pub mod state;
pub mod tick;

pub use collision::{Contact, reflect};
pub use debug::{DebugHit, DebugHits};
pub use state::{Ball, Brick, Carriage, GameState, World};
pub use tick::{TickInput, tick};
