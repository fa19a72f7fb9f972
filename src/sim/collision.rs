//! Collision detection and response
//!
//! The tricky part of Brickfall: a fast circular ball against static
//! axis-aligned rectangles. Blocks use a swept (continuous) test so the
//! ball cannot tunnel through thin geometry in one frame, and multiple
//! contacts within a single frame are resolved in strict temporal order.
//! The paddle uses an instantaneous nearest-point test instead - it is a
//! moving body and should never time-slice the ball's frame.

use glam::Vec2;

use super::blocks::BlockField;
use super::rect::Rect;
use super::state::{Ball, Paddle};

/// Which detection path produced a collision record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionTarget {
    Paddle,
    /// Index into the block field's storage
    Block(usize),
}

/// Transient record of one resolved contact. Produced during a single
/// frame's resolution pass and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct CollisionInfo {
    pub target: CollisionTarget,
    /// Contact point at the moment of entry
    pub point: Vec2,
    /// Fraction of the frame's motion traveled before contact, in [0, 1].
    /// The paddle path reports 1.0 (it tests end-of-frame positions).
    pub entry_time: f32,
    /// Axis-aligned unit normal; exactly one component is nonzero
    pub normal: Vec2,
}

/// Raw result of one swept test against one rectangle
#[derive(Debug, Clone, Copy)]
pub struct SweepHit {
    /// Fraction of the frame's motion traveled before contact, in [0, 1]
    pub entry_time: f32,
    /// Axis-aligned unit normal of the struck face
    pub normal: Vec2,
    /// Circle center at the moment of entry
    pub point: Vec2,
}

/// Swept test of a moving circle against a static rectangle.
///
/// The rect is grown by the circle's radius on all sides (Minkowski
/// approximation), reducing the problem to a point swept along the frame's
/// full displacement `velocity`, parametrized over t in [0, 1]. Returns
/// the entry time and the axis-aligned normal of the face crossed last,
/// or `None` when the path misses, the contact lies beyond this frame, or
/// the bodies are already touching (entry below `epsilon`).
pub fn swept_circle_rect(
    pos: Vec2,
    velocity: Vec2,
    radius: f32,
    rect: Rect,
    epsilon: f32,
) -> Option<SweepHit> {
    let expanded = rect.expand(radius);
    let min = expanded.min();
    let max = expanded.max();

    // Per-axis entry/exit times. A near-zero-velocity axis imposes no
    // constraint: entry -inf, exit +inf.
    let (entry_x, exit_x) = axis_times(pos.x, velocity.x, min.x, max.x, epsilon);
    let (entry_y, exit_y) = axis_times(pos.y, velocity.y, min.y, max.y, epsilon);

    // Both axis crossings must have happened for a real 2D overlap
    let entry = entry_x.max(entry_y);
    let exit = exit_x.min(exit_y);

    if entry < epsilon || exit < epsilon || entry > 1.0 || entry > exit {
        return None;
    }

    // The later-entering axis is the face actually struck; its normal
    // opposes travel on that axis
    let normal = if entry_x > entry_y {
        Vec2::new(-velocity.x.signum(), 0.0)
    } else {
        Vec2::new(0.0, -velocity.y.signum())
    };

    Some(SweepHit {
        entry_time: entry,
        normal,
        point: pos + velocity * entry,
    })
}

/// Entry/exit times for one axis of the swept test.
///
/// `vel` below `epsilon` counts as not moving on this axis; angle-derived
/// directions carry float dust (cos of 270 degrees is not exactly zero)
/// that must not turn into astronomical entry times.
#[inline]
fn axis_times(pos: f32, vel: f32, min: f32, max: f32, epsilon: f32) -> (f32, f32) {
    if vel.abs() < epsilon {
        (f32::NEG_INFINITY, f32::INFINITY)
    } else if vel > 0.0 {
        ((min - pos) / vel, (max - pos) / vel)
    } else {
        ((max - pos) / vel, (min - pos) / vel)
    }
}

/// Instantaneous circle-vs-rect overlap via the nearest point on the rect.
/// Strict inequality: touching exactly at `radius` is not a hit.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Push an overlapping circle center out of a rectangle.
///
/// Normally separates along the center-to-closest-point vector. When that
/// vector is zero length (center inside or exactly on the rect) it falls
/// back to a minimum-translation push along the rect edge with the
/// smallest overlap, so a zero vector is never normalized.
pub fn push_out_of_rect(center: Vec2, radius: f32, rect: Rect) -> Vec2 {
    let closest = rect.closest_point(center);
    let separation = center - closest;
    let dist_sq = separation.length_squared();

    if dist_sq > f32::EPSILON {
        return closest + separation / dist_sq.sqrt() * radius;
    }

    // Degenerate: center is inside the rect. Exit through the nearest edge.
    let [left, right, top, bottom] = rect.overlap_depths(center);
    let min_depth = left.min(right).min(top).min(bottom);
    let (rmin, rmax) = (rect.min(), rect.max());
    if min_depth == left {
        Vec2::new(rmin.x - radius, center.y)
    } else if min_depth == right {
        Vec2::new(rmax.x + radius, center.y)
    } else if min_depth == top {
        Vec2::new(center.x, rmin.y - radius)
    } else {
        Vec2::new(center.x, rmax.y + radius)
    }
}

/// Resolve one frame of ball motion against the block field and paddle.
///
/// Runs after both bodies have proposed next positions and before either
/// commits. On return `ball.next_pos` holds the fully resolved end-of-frame
/// position. Returns the contacts registered this frame, in resolution
/// order; callers may log or inspect them but must not store them.
pub fn resolve_frame(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut BlockField,
    max_bounce_angle: f32,
    epsilon: f32,
) -> Vec<CollisionInfo> {
    let mut contacts = Vec::new();

    if !ball.active {
        return contacts;
    }

    // Pre-pass: expel persistent penetration left over from prior-frame
    // numerical slack. Blocks only - the paddle never pushes the ball out.
    for (index, block) in blocks.active_blocks() {
        if circle_rect_overlap(ball.pos, ball.radius, block.rect) {
            let corrected = push_out_of_rect(ball.pos, ball.radius, block.rect);
            log::debug!(
                "pre-pass push-out from block {index}: {:?} -> {corrected:?}",
                ball.pos
            );
            ball.pos = corrected;
        }
    }

    // Block sweep: consume the frame's motion in temporal order, earliest
    // contact first, until the time budget runs out or nothing is hit.
    let mut cursor = ball.pos;
    let mut remaining = 1.0_f32;
    while remaining >= epsilon {
        let velocity = ball.velocity();

        let mut best: Option<(usize, SweepHit)> = None;
        for (index, block) in blocks.active_blocks() {
            if let Some(hit) = swept_circle_rect(cursor, velocity, ball.radius, block.rect, epsilon)
            {
                // A contact at or past the remaining budget would re-trigger
                // forever; exclude it. First found wins exact ties.
                if hit.entry_time < remaining
                    && best.is_none_or(|(_, b)| hit.entry_time < b.entry_time)
                {
                    best = Some((index, hit));
                }
            }
        }

        let Some((index, hit)) = best else {
            cursor += velocity * remaining;
            break;
        };

        log::trace!(
            "sweep hit block {index} at t={} normal={:?}",
            hit.entry_time,
            hit.normal
        );

        // Stop just short of contact so the same face is not re-detected
        // on the next iteration
        cursor += velocity * (hit.entry_time - epsilon);

        if let Some(block) = blocks.get_mut(index) {
            block.on_collision_enter();
        }
        if hit.normal.x != 0.0 {
            ball.invert_x_direction();
        } else {
            ball.invert_y_direction();
        }

        contacts.push(CollisionInfo {
            target: CollisionTarget::Block(index),
            point: hit.point,
            entry_time: hit.entry_time,
            normal: hit.normal,
        });

        remaining -= hit.entry_time;
    }
    ball.next_pos = cursor;

    // Paddle pass: once per frame, at next-frame positions of both bodies,
    // after the sweep so the bounce sees the block-resolved trajectory.
    if let Some(info) = resolve_paddle_bounce(ball, paddle, max_bounce_angle) {
        contacts.push(info);
    }

    contacts
}

/// Nearest-point paddle test and bounce response.
///
/// No positional push-out: the response rewrites the outgoing angle and
/// re-proposes the ball's position, relying on the new direction to
/// separate the bodies over subsequent frames. The ball may overlap the
/// paddle for a frame; that is a known cosmetic artifact, not a physics
/// bug.
fn resolve_paddle_bounce(
    ball: &mut Ball,
    paddle: &Paddle,
    max_bounce_angle: f32,
) -> Option<CollisionInfo> {
    let paddle_rect = paddle.next_rect();
    let closest = paddle_rect.closest_point(ball.next_pos);
    if ball.next_pos.distance_squared(closest) >= ball.radius * ball.radius {
        return None;
    }

    // Contact offset from paddle center, normalized by the half width:
    // 0 at dead center, +-1 at the edges. Deliberately unclamped - a
    // near-miss center calculation may land slightly outside [-1, 1].
    let half_width = paddle.size.x / 2.0;
    let diff_x = -((paddle.next_pos.x + half_width) - ball.next_pos.x);
    let angle = diff_x / half_width * max_bounce_angle;

    log::debug!("paddle bounce at offset {}, angle {angle}", diff_x / half_width);

    ball.set_direction_from_angle(angle);
    // Re-propose so this frame already travels along the new direction
    ball.compute_next_position();

    Some(CollisionInfo {
        target: CollisionTarget::Paddle,
        point: closest,
        entry_time: 1.0,
        normal: Vec2::new(0.0, -1.0),
    })
}
