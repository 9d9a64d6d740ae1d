//! Read-only frame snapshots for the rendering front end
//!
//! The renderer never touches simulation state: once per frame it takes a
//! `FrameSnapshot` and draws it. Snapshot types serialize to JSON so an
//! out-of-process renderer can consume them unchanged. The asset layer maps
//! each `SpriteKind` to a named image; missing assets are its startup
//! problem, never a mid-tick one.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, GameStatus, InvaderTier, MissileDir};

/// Which image the asset layer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Invader(InvaderTier),
    Missile(MissileSkin),
    /// `flashing` is true while the ball's grace window is open; the
    /// renderer swaps to the hit texture
    Ball { flashing: bool },
}

/// Missile art variant: each side has regular and bonus-volley skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissileSkin {
    Up,
    Down,
    BonusUp,
    BonusDown,
}

impl MissileSkin {
    fn for_missile(dir: MissileDir, bonus: bool) -> Self {
        match (dir, bonus) {
            (MissileDir::Up, false) => MissileSkin::Up,
            (MissileDir::Down, false) => MissileSkin::Down,
            (MissileDir::Up, true) => MissileSkin::BonusUp,
            (MissileDir::Down, true) => MissileSkin::BonusDown,
        }
    }
}

/// One sprite to draw this frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpriteInstance {
    pub kind: SpriteKind,
    /// Center position, y-up
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    /// Sprites in draw order; empty outside of active play
    pub sprites: Vec<SpriteInstance>,
    pub score_line: String,
    /// Terminal banner, shown centered when present
    pub banner: Option<&'static str>,
}

/// Capture the current frame. Entities are only drawn during active play;
/// terminal states show the banner and the final score.
pub fn snapshot(state: &GameState) -> FrameSnapshot {
    let mut sprites = Vec::new();

    if state.status == GameStatus::Playing {
        sprites.push(SpriteInstance {
            kind: SpriteKind::Player,
            pos: state.player.body.pos,
            size: state.player.body.size,
        });
        for invader in &state.swarm.invaders {
            sprites.push(SpriteInstance {
                kind: SpriteKind::Invader(invader.tier),
                pos: invader.body.pos,
                size: invader.body.size,
            });
        }
        if let Some(ball) = &state.ball {
            sprites.push(SpriteInstance {
                kind: SpriteKind::Ball {
                    flashing: ball.flashing(),
                },
                pos: ball.body.pos,
                size: ball.body.size,
            });
        }
        for missile in state.up_missiles.iter().chain(&state.down_missiles) {
            sprites.push(SpriteInstance {
                kind: SpriteKind::Missile(MissileSkin::for_missile(missile.dir, missile.bonus)),
                pos: missile.body.pos,
                size: missile.body.size,
            });
        }
    }

    let banner = match state.status {
        GameStatus::Playing => None,
        GameStatus::Won => Some("YOU WIN"),
        GameStatus::Lost => Some("YOU LOST"),
    };

    FrameSnapshot {
        sprites,
        score_line: format!("Score: {}", state.score),
        banner,
    }
}
