//! Brickfall headless demo entry point
//!
//! Drives the simulation with a scripted input track at a fixed
//! timestep and logs what the collision markers record. A windowed host
//! would swap the script for real key state and hand the draw commands
//! to its surface.

use glam::Vec2;

use brickfall::consts::{MAX_SUBSTEPS, SIM_DT};
use brickfall::sim::{DebugHits, TickInput};
use brickfall::{Game, GameError, Settings};

const DISPLAY_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Nominal host frame cadence for the demo loop
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<(), GameError> {
    env_logger::init();
    log::info!("brickfall (headless) starting...");

    let settings = Settings::default();
    let mut game = Game::new();
    game.reset(&settings)?;

    let mut debug = DebugHits::new();
    let mut accumulator = 0.0_f32;
    let mut total_hits = 0_usize;

    // 10 simulated seconds of frames
    for frame in 0..600_u32 {
        // The marker list is caller-owned; clear it before each frame
        debug.clear();

        let input = scripted_input(frame);

        accumulator += FRAME_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            game.tick(&input, &mut debug, SIM_DT)?;
            accumulator -= SIM_DT;
            substeps += 1;
        }

        for hit in &debug.hits {
            log::debug!(
                "frame {frame}: hit at ({:.1}, {:.1}) normal ({}, {})",
                hit.screen_pos.x,
                hit.screen_pos.y,
                hit.normal.x,
                hit.normal.y
            );
        }
        total_hits += debug.len();

        let commands = game.draw(DISPLAY_SIZE)?;
        log::trace!("frame {frame}: {} draw commands", commands.len());
    }

    if let Some(state) = game.state() {
        log::info!(
            "done: {} collision markers, {}/{} bricks alive",
            total_hits,
            state.alive_bricks(),
            state.bricks.len()
        );
        match serde_json::to_string(state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("state dump failed: {err}"),
        }
    }

    Ok(())
}

/// Held keys per frame: sweep the carriage right, steer the ball around,
/// then re-seed the velocity near the end of the run.
fn scripted_input(frame: u32) -> TickInput {
    TickInput {
        right: frame < 120,
        left: (240..300).contains(&frame),
        down: (360..380).contains(&frame),
        reset_velocity: frame == 480,
        display_size: DISPLAY_SIZE,
        ..TickInput::default()
    }
}
