//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One step per rendered frame
//! - Stable block iteration order (construction order)
//! - No rendering or platform dependencies

pub mod blocks;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use blocks::{Block, BlockField, BlockKind};
pub use collision::{
    circle_rect_overlap, push_out_of_rect, swept_circle_rect, CollisionInfo, CollisionTarget,
    SweepHit,
};
pub use rect::Rect;
pub use state::{Ball, Paddle};
pub use tick::{FrameInput, World};
