//! Axis-aligned collision tests
//!
//! Every hit check in the game reduces to rectangle overlap between
//! center-based bounding boxes; there is no finer geometry.

use glam::Vec2;

/// Overlap test between two center-based boxes.
///
/// Boxes that merely touch along an edge do not overlap.
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    (a_pos.x - b_pos.x).abs() * 2.0 < a_size.x + b_size.x
        && (a_pos.y - b_pos.y).abs() * 2.0 < a_size.y + b_size.y
}
