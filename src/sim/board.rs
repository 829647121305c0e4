//! Brick grid layout
//!
//! The board is derived deterministically from the session settings:
//! the brick width is whatever tiles the configured column count plus
//! padding exactly across the world, rows stack from the top edge down.

use glam::Vec2;

use super::state::Brick;
use crate::consts::BRICK_HEIGHT;
use crate::settings::Settings;

/// Brick width that tiles `columns` bricks plus padding across the
/// world. Assumes a validated, non-zero column count.
#[inline]
pub fn brick_width(world_width: f32, columns: u32, column_padding: f32) -> f32 {
    (world_width - (columns - 1) as f32 * column_padding) / columns as f32
}

/// Build the row-major brick grid, all bricks alive.
pub fn build_bricks(settings: &Settings) -> Vec<Brick> {
    let width = brick_width(
        settings.world_size.x,
        settings.brick_columns,
        settings.column_padding,
    );
    let dims = Vec2::new(width, BRICK_HEIGHT);

    let mut bricks = Vec::with_capacity((settings.brick_rows * settings.brick_columns) as usize);
    for i in 0..settings.brick_rows {
        for j in 0..settings.brick_columns {
            let upper_left = Vec2::new(
                j as f32 * (settings.column_padding + width),
                i as f32 * (settings.row_padding + BRICK_HEIGHT),
            );
            bricks.push(Brick::new(upper_left, upper_left + dims));
        }
    }

    bricks
}
