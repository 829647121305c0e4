//! Session configuration supplied to `Game::reset`.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration, reported synchronously by `Game::reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("brick grid needs at least one row")]
    NoRows,
    #[error("brick grid needs at least one column")]
    NoColumns,
}

/// World and entity configuration for one session.
///
/// Values are positive by caller contract. Only the brick grid
/// dimensions are validated: a zero column count would divide by zero
/// when deriving the brick width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    /// World dimensions in world units
    pub world_size: Vec2,
    /// Speed the ball starts with (and re-seeds to) along each axis
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub carriage_width: f32,
    pub brick_rows: u32,
    pub brick_columns: u32,
    /// Vertical gap between brick rows
    pub row_padding: f32,
    /// Horizontal gap between brick columns
    pub column_padding: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(800.0, 600.0),
            ball_speed: 150.0,
            ball_radius: 10.0,
            carriage_width: 120.0,
            brick_rows: 7,
            brick_columns: 15,
            row_padding: 5.0,
            column_padding: 5.0,
        }
    }
}

impl Settings {
    /// Check the brick grid dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brick_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.brick_columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn zero_grid_dimensions_are_rejected() {
        let mut settings = Settings::default();
        settings.brick_rows = 0;
        assert_eq!(settings.validate(), Err(ConfigError::NoRows));

        let mut settings = Settings::default();
        settings.brick_columns = 0;
        assert_eq!(settings.validate(), Err(ConfigError::NoColumns));
    }
}
