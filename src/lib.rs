//! Smashaga - a Space Invaders style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `view`: Read-only frame snapshots for a rendering front end
//! - `settings`: Data-driven game balance
//!
//! Rendering, windowing, and asset loading live outside this crate: a front
//! end feeds `sim::TickInput` values in and draws `view::FrameSnapshot`
//! values out, once per frame.

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Screen dimensions in logical pixels, y-up (0 = bottom edge)
    pub const SCREEN_WIDTH: f32 = 2400.0;
    pub const SCREEN_HEIGHT: f32 = 1800.0;

    /// The invader grid is laid out around this anchor point
    pub const SWARM_ANCHOR_X: f32 = SCREEN_WIDTH / 2.0;
    pub const SWARM_ANCHOR_Y: f32 = SCREEN_HEIGHT * 0.7;

    /// Player horizontal speed (pixels per tick)
    pub const MOVEMENT_SPEED: f32 = 10.0;
    /// Missile vertical speed (pixels per tick)
    pub const MISSILE_SPEED: f32 = 10.0;
    /// Swarm horizontal speed magnitude (pixels per tick)
    pub const SWARM_SPEED: f32 = 5.0;

    /// The swarm reverses at these fractions of the screen width
    pub const SWARM_LEFT_BOUND: f32 = 0.1;
    pub const SWARM_RIGHT_BOUND: f32 = 0.9;

    /// Invader fire cooldown, in timer units (see COOLDOWN_RATE)
    pub const ENEMY_SHOOT_COOLDOWN: f32 = 25.0;
    /// Chance in 100 that an off-cooldown invader fires on a given tick
    pub const ENEMY_SHOOT_CHANCE: u32 = 20;
    /// The player may fire while this many or fewer up-missiles are live
    pub const MAX_PLAYER_BULLETS: usize = 3;

    /// Every cooldown timer decrements by dt * COOLDOWN_RATE per tick
    pub const COOLDOWN_RATE: f32 = 10.0;

    /// Bonus ball defaults
    pub const MAX_BALL_SPEED: f32 = 12.0;
    pub const MAX_BALL_HEALTH: i32 = 3;
    /// Grace window after a hit, in timer units
    pub const BALL_COOLDOWN: f32 = 35.0;
    /// Missiles spawned per bonus volley
    pub const BONUS_VOLLEY: usize = 5;

    /// Default grid shape; columns are indexed symmetrically around zero,
    /// so 6 nominal columns yield -3..=3
    pub const ENEMY_ROWS: u32 = 3;
    pub const ENEMY_COLUMNS: u32 = 6;
    /// Grid spacing as a multiple of the invader sprite size
    pub const GRID_SPACING: f32 = 1.5;

    /// Sprite bounding boxes (width, height)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(99.0, 75.0);
    pub const INVADER_SIZE: Vec2 = Vec2::new(93.0, 84.0);
    pub const MISSILE_SIZE: Vec2 = Vec2::new(9.0, 54.0);
    pub const BALL_SIZE: Vec2 = Vec2::new(96.0, 96.0);
}
