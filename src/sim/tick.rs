//! Fixed timestep simulation tick
//!
//! The step order inside `tick` is a behavioral contract, not an accident of
//! statement order:
//!
//! 1. movement (player, missiles, swarm, ball)
//! 2. player fire command, then front-rank invader fire attempts
//! 3. up-missiles vs invaders, plus top-edge cleanup
//! 4. down-missile bottom-edge cleanup
//! 5. ball hits from both sides (grace gate read once per tick)
//! 6. ball destruction at zero health
//! 7. ball respawn whenever none exists
//! 8. victory check (swarm cleared)
//! 9. defeat check (player struck), which never overrides a same-tick victory
//!
//! Entities hit during steps 3-5 and 9 are only marked dead; the collections
//! are compacted in one sweep at the end of the tick, so nothing is removed
//! while it is being iterated.

use glam::Vec2;
use rand::Rng;

use super::state::{BonusBall, GameState, GameStatus, Missile, MissileDir, Steer};
use crate::consts::*;

/// Input commands for a single tick. Built fresh by the input layer each
/// frame and applied atomically inside `tick`.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held-key steering state
    pub steer: Steer,
    /// Fire an up-missile this tick (edge-triggered)
    pub fire: bool,
    /// Restart from the initial configuration; only honored in Won/Lost
    pub reset: bool,
    /// Demo mode: the autopilot overrides steer/fire
    pub idle_mode: bool,
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Terminal states freeze the simulation; only reset leaves them
    if state.status != GameStatus::Playing {
        if input.reset {
            state.reset();
        }
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;

    // 1. Movement
    state
        .player
        .steer(input.steer, state.tuning.movement_speed);
    state.player.advance();
    for missile in &mut state.up_missiles {
        missile.body.advance();
    }
    for missile in &mut state.down_missiles {
        missile.body.advance();
    }
    state.swarm.advance();
    if let Some(ball) = &mut state.ball {
        ball.advance(dt);
    }

    // 2. Fire commands: player first, then the front rank of each column
    if input.fire {
        state.player.fire(&mut state.up_missiles, &state.tuning);
    }

    let front = state.swarm.front_rank();
    for invader in &mut state.swarm.invaders {
        if front.get(&invader.column) == Some(&invader.row) {
            invader.try_fire(&mut state.down_missiles, &mut state.rng, dt, &state.tuning);
        }
    }

    // 3. Up-missiles against the swarm. One missile can take out several
    // overlapping invaders, but each invader dies at most once.
    for missile in &mut state.up_missiles {
        for invader in &mut state.swarm.invaders {
            if invader.alive && missile.body.overlaps(&invader.body) {
                invader.alive = false;
                missile.alive = false;
                state.score += invader.tier.points();
            }
        }
        if missile.body.pos.y > SCREEN_HEIGHT {
            missile.alive = false;
        }
    }

    // 4. Down-missiles that left the screen
    for missile in &mut state.down_missiles {
        if missile.body.pos.y < 0.0 {
            missile.alive = false;
        }
    }

    // 5. Ball hits. The grace gate is evaluated once, so the tick on which
    // the window elapses may process a hit from each side.
    let mut volleys: Vec<MissileDir> = Vec::new();
    if let Some(ball) = &mut state.ball {
        if ball.cooldown <= 0.0 {
            let mut struck = false;
            for missile in &mut state.up_missiles {
                if missile.alive && missile.body.overlaps(&ball.body) {
                    missile.alive = false;
                    struck = true;
                }
            }
            if struck {
                ball.register_hit(&state.tuning);
                volleys.push(MissileDir::Up);
            }

            let mut struck = false;
            for missile in &mut state.down_missiles {
                if missile.alive && missile.body.overlaps(&ball.body) {
                    missile.alive = false;
                    struck = true;
                }
            }
            if struck {
                ball.register_hit(&state.tuning);
                volleys.push(MissileDir::Down);
            }
        }
    }
    for dir in volleys {
        spawn_bonus_volley(state, dir);
    }

    // 6. A drained ball is gone
    if state.ball.as_ref().is_some_and(|b| b.health <= 0) {
        state.ball = None;
    }

    // 7. Keep exactly one ball in play
    if state.ball.is_none() {
        state.ball = Some(BonusBall::spawn(&mut state.rng, &state.tuning));
    }

    // 8. Victory first...
    if state.swarm.live_count() == 0 {
        state.status = GameStatus::Won;
    }

    // 9. ...then defeat, which never overrides a same-tick victory
    let mut player_struck = false;
    for missile in &mut state.down_missiles {
        if missile.alive && missile.body.overlaps(&state.player.body) {
            missile.alive = false;
            player_struck = true;
        }
    }
    if player_struck && state.status == GameStatus::Playing {
        state.status = GameStatus::Lost;
    }

    // Sweep everything marked dead this tick
    state.up_missiles.retain(|m| m.alive);
    state.down_missiles.retain(|m| m.alive);
    state.swarm.invaders.retain(|i| i.alive);
}

/// A ball strike rewards the striking side with a volley of bonus missiles
/// along its own spawn edge: up-missiles rise from the bottom, down-missiles
/// fall from the top.
fn spawn_bonus_volley(state: &mut GameState, dir: MissileDir) {
    let edge_y = match dir {
        MissileDir::Up => 0.0,
        MissileDir::Down => SCREEN_HEIGHT,
    };
    for _ in 0..state.tuning.bonus_volley {
        let x = state.rng.random_range(0.0..=SCREEN_WIDTH);
        let missile = Missile::new(dir, Vec2::new(x, edge_y), state.tuning.missile_speed, true);
        match dir {
            MissileDir::Up => state.up_missiles.push(missile),
            MissileDir::Down => state.down_missiles.push(missile),
        }
    }
}

/// Demo-mode pilot: dodge the nearest incoming missile, otherwise line up
/// under the closest invader and keep firing. Pure function of state, so
/// idle runs stay deterministic.
fn autopilot(state: &GameState, input: &mut TickInput) {
    input.fire = true;

    let px = state.player.body.pos.x;

    // A missile low over our column is the only thing that can kill us
    let threat = state
        .down_missiles
        .iter()
        .filter(|m| {
            (m.body.pos.x - px).abs() < state.player.body.size.x
                && m.body.pos.y < SCREEN_HEIGHT * 0.4
        })
        .min_by(|a, b| {
            a.body
                .pos
                .y
                .partial_cmp(&b.body.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some(missile) = threat {
        input.steer = if missile.body.pos.x >= px {
            Steer::Left
        } else {
            Steer::Right
        };
        return;
    }

    // Otherwise close in on the nearest column of the swarm
    let target = state.swarm.invaders.iter().min_by(|a, b| {
        (a.body.pos.x - px)
            .abs()
            .partial_cmp(&(b.body.pos.x - px).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(invader) = target {
        let dx = invader.body.pos.x - px;
        input.steer = if dx > state.tuning.movement_speed {
            Steer::Right
        } else if dx < -state.tuning.movement_speed {
            Steer::Left
        } else {
            Steer::Hold
        };
    }
}
