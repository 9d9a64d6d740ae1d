//! Property tests for the simulation invariants.

use glam::Vec2;
use proptest::prelude::*;

use smashaga::consts::*;
use smashaga::settings::Tuning;
use smashaga::sim::{
    BonusBall, GameState, Missile, MissileDir, Player, Steer, TickInput, aabb_overlap, tick,
};

fn quiet_tuning() -> Tuning {
    Tuning {
        enemy_shoot_chance: 0,
        ..Tuning::default()
    }
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0,
        bx in -500.0f32..500.0, by in -500.0f32..500.0,
        aw in 1.0f32..200.0, ah in 1.0f32..200.0,
        bw in 1.0f32..200.0, bh in 1.0f32..200.0,
    ) {
        let a_pos = Vec2::new(ax, ay);
        let b_pos = Vec2::new(bx, by);
        let a_size = Vec2::new(aw, ah);
        let b_size = Vec2::new(bw, bh);
        prop_assert_eq!(
            aabb_overlap(a_pos, a_size, b_pos, b_size),
            aabb_overlap(b_pos, b_size, a_pos, a_size)
        );
    }

    #[test]
    fn ball_reflection_flips_exactly_the_crossed_component(
        x in (SCREEN_WIDTH + 1.0)..(SCREEN_WIDTH + 50.0),
        y in 200.0f32..1600.0,
        vx in 1.0f32..12.0,
        vy in -12.0f32..12.0,
    ) {
        let mut state = GameState::with_tuning(0, quiet_tuning());
        let mut ball = BonusBall::spawn(&mut state.rng, &state.tuning);
        ball.body.pos = Vec2::new(x, y);
        ball.body.vel = Vec2::new(vx, vy);
        ball.advance(SIM_DT);
        // Past the right edge: horizontal velocity flips, vertical is
        // untouched
        prop_assert_eq!(ball.body.vel.x, -vx);
        prop_assert_eq!(ball.body.vel.y, vy);
    }

    #[test]
    fn player_stays_on_screen(
        start in 0.0f32..SCREEN_WIDTH,
        go_left in any::<bool>(),
        steps in 1usize..300,
    ) {
        let mut player = Player::new();
        player.body.pos.x = start;
        let dir = if go_left { Steer::Left } else { Steer::Right };
        player.steer(dir, MOVEMENT_SPEED);
        for _ in 0..steps {
            player.advance();
            prop_assert!(player.body.left() >= 0.0);
            prop_assert!(player.body.right() <= SCREEN_WIDTH - 1.0);
        }
    }

    #[test]
    fn swarm_marches_right_when_past_the_left_bound(
        offset in -100.0f32..(SCREEN_WIDTH * SWARM_LEFT_BOUND - 1.0),
        going_left in any::<bool>(),
    ) {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        let leftmost = state
            .swarm
            .invaders
            .iter()
            .map(|i| i.body.left())
            .fold(f32::INFINITY, f32::min);
        let shift = offset - leftmost;
        for invader in &mut state.swarm.invaders {
            invader.body.pos.x += shift;
        }
        state.swarm.speed_x = if going_left { -SWARM_SPEED } else { SWARM_SPEED };

        state.swarm.advance();
        // Regardless of the prior direction, the swarm now marches right
        prop_assert!(state.swarm.speed_x > 0.0);
    }

    #[test]
    fn missile_sweep_removes_dead_missiles_exactly_once(
        gone in prop::collection::vec((SCREEN_HEIGHT + 1.0)..(SCREEN_HEIGHT + 200.0), 0..8),
        live in prop::collection::vec(100.0f32..1000.0, 0..8),
    ) {
        let mut state = GameState::with_tuning(2, quiet_tuning());
        // x = 50 is clear of the swarm, the player lane, and any ball spawn
        for &y in &gone {
            state
                .up_missiles
                .push(Missile::new(MissileDir::Up, Vec2::new(50.0, y), MISSILE_SPEED, false));
        }
        for &y in &live {
            state
                .up_missiles
                .push(Missile::new(MissileDir::Up, Vec2::new(50.0, y), MISSILE_SPEED, false));
        }

        tick(&mut state, &TickInput::default(), SIM_DT);

        // Every off-screen missile is discarded, every on-screen one kept
        prop_assert_eq!(state.up_missiles.len(), live.len());
        prop_assert!(state.up_missiles.iter().all(|m| m.alive));
    }
}
