//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The renderer reads `view::snapshot`; the input layer writes a `TickInput`
//! per frame. Nothing else crosses the boundary.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::aabb_overlap;
pub use state::{
    Body, BonusBall, GameState, GameStatus, Invader, InvaderTier, Missile, MissileDir, Player,
    Steer, Swarm,
};
pub use tick::{TickInput, tick};
