//! Collision detection based on axis-aligned squares.

use super::Position;

/// Checks whether two squares of equal `size` anchored at `a` and `b` overlap. Touching edges
/// count as overlap.
pub fn overlaps(a: Position, b: Position, size: f64) -> bool {
    let overlap_x = a.x() + size >= b.x() && b.x() + size >= a.x();
    let overlap_y = a.y() + size >= b.y() && b.y() + size >= a.y();
    overlap_x && overlap_y
}
