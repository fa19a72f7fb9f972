//! Construction-time configuration for the physics core
//!
//! The play field, grid layout, and body tuning all arrive here as explicit
//! values; nothing in the simulation reads ambient globals. A bad
//! configuration is a programming defect, so validation failures are fatal
//! construction errors rather than recoverable conditions.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Fatal configuration error raised when building a [`crate::World`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f32 },
    #[error("paddle width {paddle} exceeds field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },
    #[error("block grid extends past the field edge (grid right {grid_right}, field width {field})")]
    GridOutOfBounds { grid_right: f32, field: f32 },
    #[error("max bounce angle {0} must be in (0, 90) degrees")]
    BounceAngleOutOfRange(f32),
}

/// Block grid layout parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub block_width: f32,
    pub block_height: f32,
    /// Top-left corner of the first block
    pub start: Vec2,
    /// Gap between adjacent blocks, both axes
    pub padding: f32,
}

/// Complete configuration surface accepted at world construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play-field bounds (the field spans [0, width] x [0, height])
    pub field_width: f32,
    pub field_height: f32,

    pub grid: GridConfig,

    /// Thickness of the boundary walls built around the field
    pub wall_thickness: f32,

    pub ball_radius: f32,
    /// Per-axis speed magnitude, pixels per frame
    pub ball_speed: f32,
    /// Launch angle in degrees, 0 = straight up, clockwise positive
    pub ball_launch_angle: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_slide_speed: f32,

    /// Maximum paddle bounce deflection from straight up, degrees
    pub max_bounce_angle: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            grid: GridConfig {
                rows: BLOCK_ROWS,
                cols: BLOCK_COLS,
                block_width: BLOCK_WIDTH,
                block_height: BLOCK_HEIGHT,
                start: Vec2::new(40.0, 60.0),
                padding: BLOCK_PADDING,
            },
            wall_thickness: WALL_THICKNESS,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_launch_angle: BALL_LAUNCH_ANGLE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_slide_speed: PADDLE_SLIDE_SPEED,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
        }
    }
}

impl GameConfig {
    /// Check the configuration for fatal defects
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("block_width", self.grid.block_width),
            ("block_height", self.grid.block_height),
            ("wall_thickness", self.wall_thickness),
        ];
        for (what, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { what, value });
            }
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }

        if self.grid.cols > 0 {
            let grid_right = self.grid.start.x
                + self.grid.cols as f32 * (self.grid.block_width + self.grid.padding)
                - self.grid.padding;
            if grid_right > self.field_width {
                return Err(ConfigError::GridOutOfBounds {
                    grid_right,
                    field: self.field_width,
                });
            }
        }

        if self.max_bounce_angle <= 0.0 || self.max_bounce_angle >= 90.0 {
            return Err(ConfigError::BounceAngleOutOfRange(self.max_bounce_angle));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_radius() {
        let mut cfg = GameConfig::default();
        cfg.ball_radius = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { what: "ball_radius", .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let mut cfg = GameConfig::default();
        cfg.paddle_width = cfg.field_width + 1.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::PaddleTooWide { .. })));
    }

    #[test]
    fn test_rejects_escaping_grid() {
        let mut cfg = GameConfig::default();
        cfg.grid.start.x = cfg.field_width - 10.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::GridOutOfBounds { .. })));
    }
}
