//! Shared math constants and helpers
//!
//! The motion and collision code works in single precision world units
//! (1 unit ≈ 1 meter on the island). Angles stored on entities and the
//! camera are in degrees; conversion to radians happens at the rotation site.

use glam::Vec3;

/// World up axis.
pub const Y_AXIS: Vec3 = Vec3::Y;

/// Unit vector along the XZ diagonal, the parked heading of every aircraft.
pub const XZ_AXIS: Vec3 = Vec3::new(
    std::f32::consts::FRAC_1_SQRT_2,
    0.0,
    std::f32::consts::FRAC_1_SQRT_2,
);

/// Heading on the ground plane for a yaw angle given in degrees.
///
/// Yaw 0 points along +Z, yaw 90 along +X.
#[inline]
pub fn heading_from_yaw(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.sin(), 0.0, yaw.cos()).normalize()
}
