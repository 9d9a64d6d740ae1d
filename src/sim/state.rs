//! Game state and core simulation types
//!
//! Every object the simulation owns lives here: the player ship, the invader
//! swarm, both missile collections, and the bonus ball, all built around a
//! shared positional core (`Body`). `GameState` ties them together with the
//! session RNG and the balance table.

use std::collections::HashMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::aabb_overlap;
use crate::consts::*;
use crate::settings::Tuning;

/// Current phase of play. `Won` and `Lost` are terminal: the simulation
/// freezes until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Player steering command for one tick (held-key state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    Right,
    #[default]
    Hold,
}

/// Positional core shared by every simulated object: a center point, a
/// per-tick velocity, and a bounding-box size.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Integrate one tick: velocity is a fixed per-tick delta, not scaled
    /// by dt.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        aabb_overlap(self.pos, self.size, other.pos, other.size)
    }
}

/// Fixes the sign of a missile's vertical velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileDir {
    Up,
    Down,
}

impl MissileDir {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            MissileDir::Up => 1.0,
            MissileDir::Down => -1.0,
        }
    }
}

/// A missile in flight. `bonus` only selects the art; flight and collision
/// behavior are identical to a regular shot.
#[derive(Debug, Clone)]
pub struct Missile {
    pub body: Body,
    pub dir: MissileDir,
    pub bonus: bool,
    pub alive: bool,
}

impl Missile {
    pub fn new(dir: MissileDir, pos: Vec2, speed: f32, bonus: bool) -> Self {
        let mut body = Body::new(pos, MISSILE_SIZE);
        body.vel = Vec2::new(0.0, dir.sign() * speed);
        Self {
            body,
            dir,
            bonus,
            alive: true,
        }
    }
}

/// Invader tier: one per grid row, drawn at random from a fixed table.
/// The tier selects both the sprite and the kill reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvaderTier {
    Scout,
    Cruiser,
    Dreadnought,
}

impl InvaderTier {
    pub const ALL: [InvaderTier; 3] = [
        InvaderTier::Scout,
        InvaderTier::Cruiser,
        InvaderTier::Dreadnought,
    ];

    /// Score awarded for destroying an invader of this tier
    pub fn points(self) -> u64 {
        match self {
            InvaderTier::Scout => 100,
            InvaderTier::Cruiser => 200,
            InvaderTier::Dreadnought => 300,
        }
    }
}

/// One enemy ship in the swarm. Row and column are grid coordinates assigned
/// at spawn and never change; horizontal motion is swarm-driven.
#[derive(Debug, Clone)]
pub struct Invader {
    pub body: Body,
    pub row: i32,
    pub column: i32,
    pub cooldown: f32,
    pub tier: InvaderTier,
    pub alive: bool,
}

impl Invader {
    pub fn new(row: i32, column: i32, tier: InvaderTier, pos: Vec2, cooldown: f32) -> Self {
        Self {
            body: Body::new(pos, INVADER_SIZE),
            row,
            column,
            cooldown,
            tier,
            alive: true,
        }
    }

    /// Age the fire cooldown and, once it has elapsed, roll for a shot.
    /// A successful roll resets the cooldown and fires from the ship's
    /// bottom-center. Callers gate this to the front rank of each column.
    pub fn try_fire(
        &mut self,
        missiles: &mut Vec<Missile>,
        rng: &mut impl Rng,
        dt: f32,
        tuning: &Tuning,
    ) {
        self.cooldown -= dt * COOLDOWN_RATE;
        if self.cooldown > 0.0 {
            return;
        }
        if rng.random_range(0..100u32) < tuning.enemy_shoot_chance {
            self.cooldown = tuning.enemy_shoot_cooldown;
            missiles.push(Missile::new(
                MissileDir::Down,
                Vec2::new(self.body.pos.x, self.body.bottom()),
                tuning.missile_speed,
                false,
            ));
        }
    }
}

/// The invader formation. All members share one horizontal speed; the sign
/// flips when the formation's outer edge crosses the screen-width bounds.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub invaders: Vec<Invader>,
    pub speed_x: f32,
}

impl Swarm {
    /// March one tick: pick the direction from the formation's extremes,
    /// then move every member by the same delta.
    pub fn advance(&mut self) {
        if self.invaders.is_empty() {
            return;
        }
        let leftmost = self
            .invaders
            .iter()
            .map(|i| i.body.left())
            .fold(f32::INFINITY, f32::min);
        let rightmost = self
            .invaders
            .iter()
            .map(|i| i.body.right())
            .fold(f32::NEG_INFINITY, f32::max);

        if leftmost < SCREEN_WIDTH * SWARM_LEFT_BOUND {
            self.speed_x = self.speed_x.abs();
        } else if rightmost > SCREEN_WIDTH * SWARM_RIGHT_BOUND {
            self.speed_x = -self.speed_x.abs();
        }

        for invader in &mut self.invaders {
            invader.body.pos.x += self.speed_x;
        }
    }

    /// Minimum live row per column: only these ships may attempt to fire.
    pub fn front_rank(&self) -> HashMap<i32, i32> {
        let mut front = HashMap::new();
        for invader in &self.invaders {
            front
                .entry(invader.column)
                .and_modify(|row: &mut i32| *row = (*row).min(invader.row))
                .or_insert(invader.row);
        }
        front
    }

    pub fn live_count(&self) -> usize {
        self.invaders.iter().filter(|i| i.alive).count()
    }
}

/// The bouncing bonus ball. Missiles from either side knock one point of
/// health off and open a grace window during which further hits are ignored.
#[derive(Debug, Clone)]
pub struct BonusBall {
    pub body: Body,
    pub health: i32,
    pub cooldown: f32,
}

impl BonusBall {
    /// Spawn in the central 80% of the screen, drifting up-right at a
    /// random speed.
    pub fn spawn(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let pos = Vec2::new(
            rng.random_range(SCREEN_WIDTH * 0.1..SCREEN_WIDTH * 0.9),
            rng.random_range(SCREEN_HEIGHT * 0.1..SCREEN_HEIGHT * 0.9),
        );
        let mut body = Body::new(pos, BALL_SIZE);
        body.vel = Vec2::new(
            rng.random_range(tuning.max_ball_speed / 2.0..tuning.max_ball_speed),
            rng.random_range(tuning.max_ball_speed / 2.0..tuning.max_ball_speed),
        );
        log::debug!("bonus ball spawned at ({:.0}, {:.0})", pos.x, pos.y);
        Self {
            body,
            health: tuning.max_ball_health,
            cooldown: 0.0,
        }
    }

    /// Integrate one tick, reflecting off the screen edges. Reflection flips
    /// the velocity sign without clamping position, so slight overshoot is
    /// expected.
    pub fn advance(&mut self, dt: f32) {
        self.body.advance();

        if self.body.pos.x > SCREEN_WIDTH {
            self.body.vel.x = -self.body.vel.x;
        }
        if self.body.pos.y > SCREEN_HEIGHT {
            self.body.vel.y = -self.body.vel.y;
        }
        if self.body.pos.x < 0.0 {
            self.body.vel.x = -self.body.vel.x;
        }
        if self.body.pos.y < 0.0 {
            self.body.vel.y = -self.body.vel.y;
        }

        self.cooldown -= dt * COOLDOWN_RATE;
    }

    /// Lose one point of health and open the grace window
    pub fn register_hit(&mut self, tuning: &Tuning) {
        self.health -= 1;
        self.cooldown = tuning.ball_cooldown;
    }

    /// True while the grace window is open (the renderer swaps textures on
    /// this)
    pub fn flashing(&self) -> bool {
        self.cooldown > 0.0
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
}

impl Player {
    pub fn new() -> Self {
        // Start at bottom-center, one sprite-height off the bottom edge
        Self {
            body: Body::new(Vec2::new(SCREEN_WIDTH / 2.0, PLAYER_SIZE.y), PLAYER_SIZE),
        }
    }

    pub fn steer(&mut self, dir: Steer, speed: f32) {
        self.body.vel.x = match dir {
            Steer::Left => -speed,
            Steer::Right => speed,
            Steer::Hold => 0.0,
        };
    }

    /// Integrate one tick, then clamp the bounding box to
    /// [0, SCREEN_WIDTH - 1]
    pub fn advance(&mut self) {
        self.body.advance();
        if self.body.left() < 0.0 {
            self.body.pos.x = self.body.size.x / 2.0;
        } else if self.body.right() > SCREEN_WIDTH - 1.0 {
            self.body.pos.x = SCREEN_WIDTH - 1.0 - self.body.size.x / 2.0;
        }
    }

    /// Fire an up-missile from the ship's top-center. The check is against
    /// the count observed at call time: firing is allowed while the live
    /// count is at or below the cap.
    pub fn fire(&self, missiles: &mut Vec<Missile>, tuning: &Tuning) {
        if missiles.len() <= tuning.max_player_bullets {
            missiles.push(Missile::new(
                MissileDir::Up,
                Vec2::new(self.body.pos.x, self.body.top()),
                tuning.missile_speed,
                false,
            ));
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state. Owns every entity collection, the session RNG, and
/// the balance table it was built with; mutated only by `tick` and by the
/// input commands applied inside it.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Simulation RNG; every random draw goes through here
    pub rng: Pcg32,
    /// Balance table this session was built with
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub status: GameStatus,
    pub score: u64,
    pub player: Player,
    pub swarm: Swarm,
    pub up_missiles: Vec<Missile>,
    pub down_missiles: Vec<Missile>,
    /// At most one ball exists; `tick` respawns it the moment it is gone
    pub ball: Option<BonusBall>,
}

impl GameState {
    /// Create a new session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with an explicit balance table
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let swarm = build_swarm(&mut rng, &tuning);
        Self {
            seed,
            rng,
            tuning,
            time_ticks: 0,
            status: GameStatus::Playing,
            score: 0,
            player: Player::new(),
            swarm,
            up_missiles: Vec::new(),
            down_missiles: Vec::new(),
            ball: None,
        }
    }

    /// Rebuild the initial configuration from the stored seed and tuning.
    /// For a given seed the result is identical to the session's first
    /// state: score 0, full swarm, no missiles, no ball.
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        *self = Self::with_tuning(self.seed, tuning);
    }
}

/// Lay out the invader grid around the swarm anchor. Each row gets one
/// random tier; columns are indexed symmetrically around zero. Initial
/// cooldowns are randomized so the front rank does not fire in lockstep.
pub(crate) fn build_swarm(rng: &mut impl Rng, tuning: &Tuning) -> Swarm {
    let half = (tuning.columns / 2) as i32;
    let cooldown_ceiling = (tuning.enemy_shoot_cooldown as u32).max(1);

    let mut invaders = Vec::with_capacity((tuning.rows as usize) * (2 * half as usize + 1));
    for row in 0..tuning.rows as i32 {
        let tier = InvaderTier::ALL[rng.random_range(0..InvaderTier::ALL.len())];
        for column in -half..=half {
            let pos = Vec2::new(
                SWARM_ANCHOR_X + GRID_SPACING * INVADER_SIZE.x * column as f32,
                SWARM_ANCHOR_Y + GRID_SPACING * INVADER_SIZE.y * row as f32,
            );
            let cooldown = rng.random_range(1..=cooldown_ceiling) as f32;
            invaders.push(Invader::new(row, column, tier, pos, cooldown));
        }
    }

    log::info!(
        "swarm ready: {} invaders in {} rows, columns {}..={}",
        invaders.len(),
        tuning.rows,
        -half,
        half
    );
    Swarm {
        invaders,
        speed_x: tuning.swarm_speed,
    }
}
