//! Data-driven game balance
//!
//! Every balance knob the simulation reads lives in `Tuning`. Defaults
//! mirror `consts`; native builds may override them with a JSON file named
//! by the `SMASHAGA_TUNING` environment variable. Tests shrink grids and
//! silence enemy fire through the same table.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player horizontal speed (pixels per tick)
    pub movement_speed: f32,
    /// Missile vertical speed (pixels per tick)
    pub missile_speed: f32,
    /// Swarm horizontal speed magnitude (pixels per tick)
    pub swarm_speed: f32,
    /// Invader fire cooldown, in timer units
    pub enemy_shoot_cooldown: f32,
    /// Chance in 100 that an off-cooldown invader fires
    pub enemy_shoot_chance: u32,
    /// The player may fire while this many or fewer up-missiles are live
    pub max_player_bullets: usize,
    /// Upper bound on each bonus-ball velocity component
    pub max_ball_speed: f32,
    /// Hits a bonus ball absorbs before it is destroyed
    pub max_ball_health: i32,
    /// Grace window opened by each ball hit, in timer units
    pub ball_cooldown: f32,
    /// Missiles per bonus volley
    pub bonus_volley: usize,
    /// Invader grid rows
    pub rows: u32,
    /// Nominal grid columns; the layout is symmetric around zero, so the
    /// actual count is `columns / 2 * 2 + 1`
    pub columns: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            movement_speed: MOVEMENT_SPEED,
            missile_speed: MISSILE_SPEED,
            swarm_speed: SWARM_SPEED,
            enemy_shoot_cooldown: ENEMY_SHOOT_COOLDOWN,
            enemy_shoot_chance: ENEMY_SHOOT_CHANCE,
            max_player_bullets: MAX_PLAYER_BULLETS,
            max_ball_speed: MAX_BALL_SPEED,
            max_ball_health: MAX_BALL_HEALTH,
            ball_cooldown: BALL_COOLDOWN,
            bonus_volley: BONUS_VOLLEY,
            rows: ENEMY_ROWS,
            columns: ENEMY_COLUMNS,
        }
    }
}

impl Tuning {
    /// Environment variable naming a JSON override file
    const ENV_KEY: &'static str = "SMASHAGA_TUNING";

    /// Load the balance table, falling back to defaults on any failure.
    /// A malformed file is logged and ignored rather than aborting startup.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_KEY) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {}", path.to_string_lossy());
                    tuning
                }
                Err(err) => {
                    log::warn!(
                        "ignoring malformed tuning file {}: {err}",
                        path.to_string_lossy()
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read tuning file {}: {err}", path.to_string_lossy());
                Self::default()
            }
        }
    }
}
