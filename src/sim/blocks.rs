//! Static blocks and the field that owns them
//!
//! Two variants share one struct with a kind tag: destructible bricks that
//! die on first contact, and boundary walls that never do. Response logic
//! matches on the tag rather than inspecting types at runtime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GridConfig;

/// Block variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Deactivates on the first collision it receives
    Destructible,
    /// Indestructible boundary geometry, permanently active
    Wall,
}

/// A static rectangular collidable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub kind: BlockKind,
    pub active: bool,
}

impl Block {
    pub fn new(rect: Rect, kind: BlockKind) -> Self {
        Self {
            rect,
            kind,
            active: true,
        }
    }

    /// Collision response hook, invoked once per registered contact
    pub fn on_collision_enter(&mut self) {
        match self.kind {
            BlockKind::Destructible => {
                if self.active {
                    log::debug!("block at {:?} destroyed", self.rect.pos);
                    self.active = false;
                }
            }
            BlockKind::Wall => {}
        }
    }
}

/// Owns the block collection and builds its layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockField {
    blocks: Vec<Block>,
}

impl BlockField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out a `rows x cols` grid of destructible blocks at
    /// `start + index * (block_size + padding)`. Deterministic; storage
    /// order is row-major.
    pub fn add_grid(&mut self, grid: &GridConfig) {
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let pos = grid.start
                    + Vec2::new(
                        col as f32 * (grid.block_width + grid.padding),
                        row as f32 * (grid.block_height + grid.padding),
                    );
                let rect = Rect::new(pos, Vec2::new(grid.block_width, grid.block_height));
                self.blocks.push(Block::new(rect, BlockKind::Destructible));
            }
        }
        log::info!("placed {}x{} destructible grid", grid.rows, grid.cols);
    }

    /// Place one block with explicit geometry (boundary walls and other
    /// bespoke shapes)
    pub fn place(&mut self, rect: Rect, kind: BlockKind) {
        self.blocks.push(Block::new(rect, kind));
    }

    /// All blocks, active or not (render layers may want the full set)
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Active blocks with their stable indices. Collision testing and
    /// drawing both iterate this; skipping inactive blocks is a required
    /// invariant, not an optimization.
    pub fn active_blocks(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.active)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Count of live destructible blocks (the win condition upstream)
    pub fn remaining_destructible(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.active && b.kind == BlockKind::Destructible)
            .count()
    }
}
