//! Per-frame collision markers for the debug overlay

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A recorded collision: screen-space position plus surface normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugHit {
    pub screen_pos: Vec2,
    pub normal: Vec2,
}

/// Append-only hit sink owned by the caller.
///
/// The simulation only appends; clearing between frames is the caller's
/// responsibility. Hits left over from earlier frames are a caller
/// error, not a simulation defect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugHits {
    pub hits: Vec<DebugHit>,
}

impl DebugHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hit, converting the world position to screen space with
    /// the current tick's scale factors.
    pub fn record(&mut self, world_pos: Vec2, normal: Vec2, world_to_screen: Vec2) {
        self.hits.push(DebugHit {
            screen_pos: world_pos * world_to_screen,
            normal,
        });
    }

    pub fn clear(&mut self) {
        self.hits.clear();
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
