//! Movable bodies: the ball and the player paddle
//!
//! Both bodies move through a two-phase transaction each frame: a pure
//! propose step computes a tentative next position, collision resolution
//! may rewrite it, and a final commit makes it current. Nothing outside
//! this pipeline writes positions directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::game_angle_to_rad;

/// The ball - a circular, velocity-driven body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Proposed position for the next frame; valid between
    /// [`Ball::compute_next_position`] and [`Ball::apply_next_position`]
    pub next_pos: Vec2,
    /// Travel direction, always unit length
    dir: Vec2,
    /// Per-axis speed magnitude, pixels per frame
    pub speed: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, speed: f32, launch_angle_deg: f32) -> Self {
        let mut ball = Self {
            pos,
            next_pos: pos,
            dir: Vec2::new(0.0, -1.0),
            speed: Vec2::splat(speed),
            radius,
            active: true,
        };
        ball.set_direction_from_angle(launch_angle_deg);
        ball
    }

    /// Current travel direction (unit length)
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /// Velocity over one full frame: direction scaled per-axis by speed
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Point the ball along a gameplay angle (degrees, 0 = straight up,
    /// clockwise positive). The result is unit length by construction.
    pub fn set_direction_from_angle(&mut self, angle_deg: f32) {
        let rad = game_angle_to_rad(angle_deg);
        self.dir = Vec2::new(rad.cos(), rad.sin());
    }

    /// Propose the next-frame position. Pure with respect to `pos`; may be
    /// called repeatedly before a single commit.
    pub fn compute_next_position(&mut self) {
        self.next_pos = self.pos + self.velocity();
    }

    /// Commit the proposed position
    pub fn apply_next_position(&mut self) {
        self.pos = self.next_pos;
    }

    /// Reflect travel on the X axis
    pub fn invert_x_direction(&mut self) {
        self.dir.x = -self.dir.x;
    }

    /// Reflect travel on the Y axis
    pub fn invert_y_direction(&mut self) {
        self.dir.y = -self.dir.y;
    }
}

/// The player paddle - a rectangular body sliding on a fixed Y line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub next_pos: Vec2,
    pub size: Vec2,
    pub slide_speed: f32,
    /// Always true; present so the paddle can be treated like any other
    /// collidable
    pub active: bool,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, slide_speed: f32) -> Self {
        Self {
            pos,
            next_pos: pos,
            size,
            slide_speed,
            active: true,
        }
    }

    /// Paddle rect at the committed position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Paddle rect at the proposed position
    #[inline]
    pub fn next_rect(&self) -> Rect {
        Rect::new(self.next_pos, self.size)
    }

    /// Propose the next-frame position from held input, clamped so the
    /// full rect stays within [0, field_width] on X. No Y movement.
    pub fn compute_next_position(&mut self, left_held: bool, right_held: bool, field_width: f32) {
        let mut x = self.pos.x;
        if left_held {
            x -= self.slide_speed;
        } else if right_held {
            x += self.slide_speed;
        }
        x = x.clamp(0.0, field_width - self.size.x);
        self.next_pos = Vec2::new(x, self.pos.y);
    }

    /// Commit the proposed position
    pub fn apply_next_position(&mut self) {
        self.pos = self.next_pos;
    }
}
