//! Smashaga entry point
//!
//! There is no windowed front end in this crate, so the binary runs a
//! headless demo session: the autopilot plays one game at the fixed
//! timestep and the logger reports how it went. A renderer would drive the
//! same `sim` API from its frame callback instead.

use std::time::{SystemTime, UNIX_EPOCH};

use smashaga::consts::SIM_DT;
use smashaga::settings::Tuning;
use smashaga::sim::{GameState, GameStatus, TickInput, tick};
use smashaga::view;

/// Upper bound on the demo session: two minutes at 60 Hz
const DEMO_TICKS: u64 = 2 * 60 * 60;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5eed);
    let tuning = Tuning::load();
    log::info!("starting demo session (seed {seed})");

    let mut state = GameState::with_tuning(seed, tuning);
    let input = TickInput {
        idle_mode: true,
        ..TickInput::default()
    };

    for _ in 0..DEMO_TICKS {
        tick(&mut state, &input, SIM_DT);
        if state.status != GameStatus::Playing {
            break;
        }
    }

    let frame = view::snapshot(&state);
    match frame.banner {
        Some(banner) => log::info!(
            "{banner} after {} ticks - {}",
            state.time_ticks,
            frame.score_line
        ),
        None => log::info!(
            "demo timed out after {} ticks - {}",
            state.time_ticks,
            frame.score_line
        ),
    }
}
