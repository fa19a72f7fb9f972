//! Frame orchestration
//!
//! One `World::update` call per rendered frame: both bodies propose their
//! next positions, the collision pass resolves them, then both commit.
//! Single-threaded and deterministic for deterministic inputs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::blocks::{BlockField, BlockKind};
use super::collision::{resolve_frame, CollisionInfo};
use super::rect::Rect;
use super::state::{Ball, Paddle};
use crate::config::{ConfigError, GameConfig};
use crate::consts::COLLISION_EPSILON;

/// Input sampled once per frame by the external keyboard source
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
}

/// The physics world: exclusive owner of the ball, the paddle, and the
/// block field. External collaborators call [`World::update`] once per
/// frame and read committed positions back for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: BlockField,
    frame: u64,
}

impl World {
    /// Build and populate a world from a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let paddle_pos = Vec2::new(
            (config.field_width - config.paddle_width) / 2.0,
            config.field_height - 2.0 * config.paddle_height,
        );
        let paddle = Paddle::new(
            paddle_pos,
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_slide_speed,
        );

        let ball_pos = Vec2::new(
            config.field_width / 2.0,
            paddle_pos.y - 2.0 * config.ball_radius,
        );
        let ball = Ball::new(
            ball_pos,
            config.ball_radius,
            config.ball_speed,
            config.ball_launch_angle,
        );

        let mut blocks = BlockField::new();
        blocks.add_grid(&config.grid);
        place_boundary_walls(&mut blocks, &config);

        log::info!(
            "world ready: {}x{} field, {} blocks",
            config.field_width,
            config.field_height,
            blocks.blocks().len()
        );

        Ok(Self {
            config,
            ball,
            paddle,
            blocks,
            frame: 0,
        })
    }

    /// Advance the world by one frame. Returns the contacts registered
    /// during resolution, in resolution order; the slice is only valid to
    /// inspect within this frame.
    pub fn update(&mut self, input: FrameInput) -> Vec<CollisionInfo> {
        self.frame += 1;

        // Propose
        self.paddle.compute_next_position(
            input.left_held,
            input.right_held,
            self.config.field_width,
        );
        if self.ball.active {
            self.ball.compute_next_position();
        }

        // Resolve
        let contacts = resolve_frame(
            &mut self.ball,
            &self.paddle,
            &mut self.blocks,
            self.config.max_bounce_angle,
            COLLISION_EPSILON,
        );
        for contact in &contacts {
            log::debug!("frame {}: contact {contact:?}", self.frame);
        }

        // Commit
        self.paddle.apply_next_position();
        if self.ball.active {
            self.ball.apply_next_position();

            // Ball loss: fully below the open bottom edge
            if self.ball.pos.y - self.ball.radius > self.config.field_height {
                log::info!("frame {}: ball lost below the field", self.frame);
                self.ball.active = false;
            }
        }

        contacts
    }

    /// Frames stepped since construction
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True while any destructible block remains
    pub fn blocks_remaining(&self) -> bool {
        self.blocks.remaining_destructible() > 0
    }
}

/// Boundary walls: left, right, and top edges as indestructible blocks.
/// The bottom stays open - that is where the ball is lost.
fn place_boundary_walls(blocks: &mut BlockField, config: &GameConfig) {
    let t = config.wall_thickness;
    let (w, h) = (config.field_width, config.field_height);

    blocks.place(
        Rect::new(Vec2::new(-t, 0.0), Vec2::new(t, h)),
        BlockKind::Wall,
    );
    blocks.place(
        Rect::new(Vec2::new(w, 0.0), Vec2::new(t, h)),
        BlockKind::Wall,
    );
    blocks.place(
        Rect::new(Vec2::new(-t, -t), Vec2::new(w + 2.0 * t, t)),
        BlockKind::Wall,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::CollisionTarget;

    fn small_world() -> World {
        let mut cfg = GameConfig::default();
        cfg.grid.rows = 1;
        cfg.grid.cols = 2;
        World::new(cfg).expect("default-derived config is valid")
    }

    #[test]
    fn test_world_construction() {
        let world = small_world();
        // 2 grid blocks + 3 boundary walls
        assert_eq!(world.blocks.blocks().len(), 5);
        assert!(world.blocks_remaining());
        assert!(world.ball.active);
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let mut cfg = GameConfig::default();
        cfg.ball_speed = -1.0;
        assert!(World::new(cfg).is_err());
    }

    #[test]
    fn test_update_commits_both_bodies() {
        let mut world = small_world();
        let ball_before = world.ball.pos;
        let paddle_before = world.paddle.pos;

        world.update(FrameInput {
            left_held: true,
            right_held: false,
        });

        assert_ne!(world.ball.pos, ball_before);
        assert!(world.paddle.pos.x < paddle_before.x);
        assert_eq!(world.frame(), 1);
    }

    #[test]
    fn test_paddle_never_leaves_field() {
        let mut world = small_world();
        let input = FrameInput {
            left_held: false,
            right_held: true,
        };
        for _ in 0..500 {
            world.update(input);
            let rect = world.paddle.rect();
            assert!(rect.min().x >= 0.0);
            assert!(rect.max().x <= world.config.field_width);
        }
    }

    #[test]
    fn test_ball_reflects_off_side_wall() {
        let mut world = small_world();
        // Steep launch so the ball crosses toward the right wall
        let mut crossed = false;
        for _ in 0..2000 {
            let contacts = world.update(FrameInput::default());
            if contacts.iter().any(|c| {
                matches!(c.target, CollisionTarget::Block(_)) && c.normal.x != 0.0
            }) {
                crossed = true;
                break;
            }
            if !world.ball.active {
                break;
            }
        }
        assert!(crossed, "ball never reached a side wall");
        // Still inside the field horizontally
        assert!(world.ball.pos.x > 0.0);
        assert!(world.ball.pos.x < world.config.field_width);
    }

    #[test]
    fn test_ball_lost_below_field() {
        let mut world = small_world();
        // Send the ball straight down with no paddle in the way
        world.paddle.pos.x = 0.0;
        world.paddle.next_pos.x = 0.0;
        world.ball.set_direction_from_angle(180.0);
        world.ball.pos.x = world.config.field_width - 60.0;

        for _ in 0..200 {
            world.update(FrameInput::default());
            if !world.ball.active {
                break;
            }
        }
        assert!(!world.ball.active);

        // An inactive ball stays put
        let pos = world.ball.pos;
        world.update(FrameInput::default());
        assert_eq!(world.ball.pos, pos);
    }

    #[test]
    fn test_full_session_is_deterministic() {
        let script = |world: &mut World| {
            let mut trace = Vec::new();
            for i in 0..600 {
                let input = FrameInput {
                    left_held: i % 7 < 3,
                    right_held: i % 7 >= 3,
                };
                world.update(input);
                trace.push((world.ball.pos, world.paddle.pos));
            }
            trace
        };

        let mut a = small_world();
        let mut b = small_world();
        assert_eq!(script(&mut a), script(&mut b));
    }
}
