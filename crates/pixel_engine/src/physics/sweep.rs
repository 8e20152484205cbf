//! Narrow-phase AABB tests
//!
//! Pure geometry, independent of the ECS so it can be unit-tested and
//! reused outside the collision system. The swept test guards against
//! tunneling: instead of comparing boxes after the move, it checks the
//! vertical span a box edge traveled through during the frame.

use crate::foundation::math::{Aabb, Vec2};

/// Test whether the vertical segment at `x` spanning `[y_start, y_end]`
/// passes through `target`
///
/// The span must be ordered (`y_start <= y_end`). Touching an edge counts
/// as a hit, matching [`Aabb::intersects`].
pub fn vertical_segment_hits(x: f32, y_start: f32, y_end: f32, target: &Aabb) -> bool {
    x >= target.min.x && x <= target.max.x && y_end >= target.min.y && y_start <= target.max.y
}

/// Discrete resting-contact test
///
/// Shrinks `mover` by `inset` from its top edge and tests overlap with
/// `target`. The inset keeps ceiling grazes from reading as ground
/// contact while any positive overlap below is still detected. A box
/// shorter than the inset can never rest.
pub fn rests_on(mover: &Aabb, inset: f32, target: &Aabb) -> bool {
    let shrunk_top = mover.min.y + inset;
    if shrunk_top >= mover.max.y {
        return false;
    }
    let shrunk = Aabb::new(Vec2::new(mover.min.x, shrunk_top), mover.max);
    shrunk.intersects(target)
}
