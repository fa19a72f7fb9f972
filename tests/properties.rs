//! Property tests for the collision core's invariants

use glam::Vec2;
use proptest::prelude::*;

use brickfall_core::sim::{swept_circle_rect, Ball, Block, BlockKind, Paddle, Rect};
use brickfall_core::{FrameInput, GameConfig, World};

const EPS: f32 = 1e-4;

proptest! {
    /// Any launch angle yields a unit-length direction
    #[test]
    fn direction_is_always_unit_length(angle in -720.0f32..720.0) {
        let mut ball = Ball::new(Vec2::ZERO, 10.0, 6.0, 0.0);
        ball.set_direction_from_angle(angle);
        prop_assert!((ball.dir().length() - 1.0).abs() < 1e-5);
    }

    /// The committed paddle rect never leaves the field on X, whatever the
    /// input sequence
    #[test]
    fn paddle_stays_in_field(inputs in prop::collection::vec(any::<(bool, bool)>(), 1..200)) {
        let mut paddle = Paddle::new(Vec2::new(340.0, 500.0), Vec2::new(120.0, 20.0), 9.0);
        for (left, right) in inputs {
            paddle.compute_next_position(left, right, 800.0);
            paddle.apply_next_position();
            prop_assert!(paddle.rect().min().x >= 0.0);
            prop_assert!(paddle.rect().max().x <= 800.0);
        }
    }

    /// A ball already past a block and moving further away never collides
    /// with it, whatever its lateral motion
    #[test]
    fn swept_rejects_motion_away(
        below_by in 0.5f32..200.0,
        vel_away in 0.01f32..50.0,
        vel_lateral in -50.0f32..50.0,
    ) {
        let rect = Rect::new(Vec2::new(95.0, 70.0), Vec2::new(20.0, 20.0));
        let radius = 2.0;
        // Start fully below the expanded rect, moving down (+Y, away)
        let pos = Vec2::new(100.0, rect.max().y + radius + below_by);
        let hit = swept_circle_rect(pos, Vec2::new(vel_lateral, vel_away), radius, rect, EPS);
        prop_assert!(hit.is_none());
    }

    /// Slowing the ball down while keeping its direction can only delay
    /// contact, never hasten it
    #[test]
    fn entry_time_monotonic_in_speed(
        offset_x in -15.0f32..15.0,
        gap in 5.0f32..60.0,
        speed in 10.0f32..80.0,
        factor in 0.1f32..1.0,
    ) {
        let rect = Rect::new(Vec2::new(95.0, 70.0), Vec2::new(20.0, 20.0));
        let radius = 2.0;
        let pos = Vec2::new(100.0 + offset_x, rect.max().y + radius + gap);
        let vel = Vec2::new(0.0, -speed);

        if let Some(fast) = swept_circle_rect(pos, vel, radius, rect, EPS) {
            if let Some(slow) = swept_circle_rect(pos, vel * factor, radius, rect, EPS) {
                prop_assert!(slow.entry_time >= fast.entry_time - 1e-5);
            }
        }
    }

    /// A destructible block deactivates at most once no matter how many
    /// collision notifications it receives
    #[test]
    fn at_most_one_deactivation(hits in 1usize..50) {
        let mut block = Block::new(
            Rect::new(Vec2::ZERO, Vec2::new(80.0, 30.0)),
            BlockKind::Destructible,
        );
        let mut deactivations = 0;
        for _ in 0..hits {
            let was_active = block.active;
            block.on_collision_enter();
            if was_active && !block.active {
                deactivations += 1;
            }
        }
        prop_assert_eq!(deactivations, 1);
        prop_assert!(!block.active);
    }

    /// The swept loop never lets the ball tunnel out through a boundary
    /// wall, even at speeds far above the wall thickness per frame. The
    /// run stops before the ball can reach the paddle: the paddle bounce
    /// deliberately skips push-out and is allowed to overlap for a frame.
    #[test]
    fn ball_contained_by_walls(speed in 5.0f32..60.0, angle in -80.0f32..80.0) {
        let mut cfg = GameConfig::default();
        cfg.grid.rows = 0;
        cfg.ball_speed = speed;
        cfg.ball_launch_angle = angle;
        let mut world = World::new(cfg).unwrap();
        // Start mid-field so the run has room before reaching the paddle
        world.ball.pos = glam::Vec2::new(400.0, 300.0);
        world.ball.next_pos = world.ball.pos;

        for _ in 0..300 {
            world.update(FrameInput::default());
            if !world.ball.active || world.ball.pos.y > 450.0 {
                break;
            }
            let pos = world.ball.pos;
            prop_assert!(pos.x > -1.0 && pos.x < 801.0, "escaped at {pos:?}");
            prop_assert!(pos.y > -1.0, "escaped through the top at {pos:?}");
        }
    }
}
