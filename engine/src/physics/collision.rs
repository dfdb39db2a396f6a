//! Collision detection module
//!
//! Axis-aligned box tests in world space. Every obstacle on the island is
//! described by a center and per-axis half-extents (`bounding_box`); the mover
//! brings its own box, which is halved before the comparison so a mover with
//! a zero box (the walking camera) is treated as a point.
//!
//! Two flavors exist:
//!
//! - [`trivial_collision`] - plain symmetric overlap on all three axes.
//! - [`complex_collision`] - overlap with an interior exemption region so an
//!   aircraft can taxi into a hangar without touching its walls.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use island_flight_engine::physics::collision::trivial_collision;
//!
//! let tower = Vec3::new(-6.0, 4.0, 32.5);
//! let tower_box = Vec3::new(1.75, 4.75, 1.75);
//!
//! assert!(trivial_collision(Vec3::new(-6.0, 1.0, 34.0), Vec3::ZERO, tower, tower_box));
//! assert!(!trivial_collision(Vec3::new(-6.0, 1.0, 35.0), Vec3::ZERO, tower, tower_box));
//! ```

use glam::Vec3;

/// Interior region of a hangar that an aircraft may occupy without colliding.
pub const HANGAR_CUTOUT: Vec3 = Vec3::new(6.0, 3.0, 3.0);

/// Symmetric axis-aligned overlap test.
///
/// True iff `|Δ| - my_box / 2 <= obj_box` holds on every axis.
pub fn trivial_collision(my_pos: Vec3, my_box: Vec3, obj_pos: Vec3, obj_box: Vec3) -> bool {
    let delta = (my_pos - obj_pos).abs();
    overlaps(delta, my_box, obj_box)
}

/// Overlap test against a walk-through structure.
///
/// Height is measured as the mover's absolute altitude rather than relative
/// to the structure, so the test works for ground-level buildings whose
/// center sits above the floor. When the outer box overlaps, the mover is
/// still exempt if it fits the `cutout`:
///
/// - `|Δx| - my_box.x <= cutout.x`
/// - `|y| + my_box.y / 3 <= cutout.y`
/// - `|Δz| + my_box.z / 3 <= cutout.z`
pub fn complex_collision(
    my_pos: Vec3,
    my_box: Vec3,
    obj_pos: Vec3,
    obj_box: Vec3,
    cutout: Vec3,
) -> bool {
    let delta = Vec3::new(
        (my_pos.x - obj_pos.x).abs(),
        my_pos.y.abs(),
        (my_pos.z - obj_pos.z).abs(),
    );

    if !overlaps(delta, my_box, obj_box) {
        return false;
    }

    !is_inside_cutout(delta, my_box, cutout)
}

#[inline]
fn overlaps(delta: Vec3, my_box: Vec3, obj_box: Vec3) -> bool {
    (delta - my_box / 2.0).cmple(obj_box).all()
}

#[inline]
fn is_inside_cutout(delta: Vec3, my_box: Vec3, cutout: Vec3) -> bool {
    delta.x - my_box.x <= cutout.x
        && delta.y + my_box.y / 3.0 <= cutout.y
        && delta.z + my_box.z / 3.0 <= cutout.z
}

/// Shape of a static obstacle, selecting which predicate applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleShape {
    /// Solid box, tested with [`trivial_collision`].
    Solid,
    /// Box with a walk-through interior, tested with [`complex_collision`].
    Hollow { cutout: Vec3 },
}

impl ObstacleShape {
    /// Dispatch to the predicate for this shape.
    pub fn collides(&self, my_pos: Vec3, my_box: Vec3, obj_pos: Vec3, obj_box: Vec3) -> bool {
        match *self {
            ObstacleShape::Solid => trivial_collision(my_pos, my_box, obj_pos, obj_box),
            ObstacleShape::Hollow { cutout } => {
                complex_collision(my_pos, my_box, obj_pos, obj_box, cutout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANGAR_POS: Vec3 = Vec3::new(-14.0, 2.2, 18.5);
    const HANGAR_BOX: Vec3 = Vec3::new(5.25, 5.0, 5.0);

    #[test]
    fn test_self_collision_at_zero_offset() {
        let p = Vec3::new(3.0, -2.0, 7.5);
        let b = Vec3::new(1.0, 0.5, 2.0);
        assert!(trivial_collision(p, b, p, b));
    }

    #[test]
    fn test_point_mover_touching_face_collides() {
        let obj = Vec3::ZERO;
        let obj_box = Vec3::splat(1.0);
        assert!(trivial_collision(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, obj, obj_box));
        assert!(!trivial_collision(Vec3::new(1.01, 0.0, 0.0), Vec3::ZERO, obj, obj_box));
    }

    #[test]
    fn test_mover_box_is_halved() {
        let obj_box = Vec3::splat(1.0);
        let my_box = Vec3::new(2.0, 0.0, 0.0);
        // |dx| - 1.0 <= 1.0 -> collides up to dx = 2.0
        assert!(trivial_collision(Vec3::new(2.0, 0.0, 0.0), my_box, Vec3::ZERO, obj_box));
        assert!(!trivial_collision(Vec3::new(2.1, 0.0, 0.0), my_box, Vec3::ZERO, obj_box));
    }

    #[test]
    fn test_trivial_requires_all_axes() {
        let obj_box = Vec3::splat(1.0);
        assert!(!trivial_collision(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::ZERO, obj_box));
        assert!(!trivial_collision(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::ZERO, obj_box));
    }

    #[test]
    fn test_hangar_wall_collides() {
        // Outside the cutout along x but within the outer box
        let pos = Vec3::new(HANGAR_POS.x + 5.0, 1.0, HANGAR_POS.z + 4.0);
        assert!(complex_collision(pos, Vec3::ZERO, HANGAR_POS, HANGAR_BOX, HANGAR_CUTOUT));
    }

    #[test]
    fn test_hangar_interior_is_exempt() {
        let pos = Vec3::new(HANGAR_POS.x + 1.0, 1.0, HANGAR_POS.z + 1.0);
        let my_box = Vec3::new(2.0, 0.75, 2.0);
        // The outer test alone would report a hit
        assert!(trivial_collision(
            Vec3::new(pos.x, pos.y.abs(), pos.z),
            my_box,
            Vec3::new(HANGAR_POS.x, 0.0, HANGAR_POS.z),
            HANGAR_BOX
        ));
        assert!(!complex_collision(pos, my_box, HANGAR_POS, HANGAR_BOX, HANGAR_CUTOUT));
    }

    #[test]
    fn test_hangar_uses_absolute_height() {
        // Far above the roof: |y| - 0 > 5.0
        let pos = Vec3::new(HANGAR_POS.x, 6.0, HANGAR_POS.z + 4.0);
        assert!(!complex_collision(pos, Vec3::ZERO, HANGAR_POS, HANGAR_BOX, HANGAR_CUTOUT));
    }

    #[test]
    fn test_shape_dispatch() {
        let inside = Vec3::new(HANGAR_POS.x + 1.0, 1.0, HANGAR_POS.z + 1.0);
        let solid = ObstacleShape::Solid;
        let hollow = ObstacleShape::Hollow { cutout: HANGAR_CUTOUT };
        assert!(solid.collides(inside, Vec3::ZERO, HANGAR_POS, HANGAR_BOX));
        assert!(!hollow.collides(inside, Vec3::ZERO, HANGAR_POS, HANGAR_BOX));
    }
}
