//! Brickfall - physics core for a block-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (bodies, blocks, collisions)
//! - `config`: Construction-time configuration and validation
//!
//! The crate owns no window, input, or rendering: an external frame loop
//! calls [`sim::World::update`] once per rendered frame with the sampled
//! input, then reads committed positions back for drawing.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{Ball, Block, BlockField, BlockKind, FrameInput, Paddle, Rect, World};

/// Game tuning constants
pub mod consts {
    /// Default play-field bounds
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 6.0;
    /// Launch angle in degrees, 0 = straight up, clockwise positive
    pub const BALL_LAUNCH_ANGLE: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SLIDE_SPEED: f32 = 9.0;

    /// Block grid defaults
    pub const BLOCK_ROWS: u32 = 4;
    pub const BLOCK_COLS: u32 = 8;
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_PADDING: f32 = 10.0;

    /// Boundary wall thickness
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Maximum paddle bounce deflection, degrees from straight up
    pub const MAX_BOUNCE_ANGLE: f32 = 65.0;

    /// Time/distance epsilon for the swept collision loop
    pub const COLLISION_EPSILON: f32 = 1e-4;
}

/// Convert a gameplay angle (degrees, 0 = straight up, clockwise positive)
/// to radians in standard trig convention (0 = +X axis).
///
/// Screen space has +Y down, so "straight up" is -Y, i.e. 270 degrees in
/// trig convention.
#[inline]
pub fn game_angle_to_rad(angle_deg: f32) -> f32 {
    (angle_deg + 270.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_angle_up() {
        // 0 degrees = straight up = direction (0, -1)
        let rad = game_angle_to_rad(0.0);
        assert!((rad.cos() - 0.0).abs() < 1e-6);
        assert!((rad.sin() - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_game_angle_clockwise_positive() {
        // Positive angle tilts toward +X (clockwise on screen)
        let rad = game_angle_to_rad(45.0);
        assert!(rad.cos() > 0.0);
        assert!(rad.sin() < 0.0);
    }
}
