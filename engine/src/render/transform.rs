//! Model matrices for the draw list.
//!
//! Pure functions of an entity pose; the renderer multiplies them with its
//! own view and projection.

use glam::{Mat4, Vec3, Vec4};

/// Nose-down tilt of the helicopter model in flight, degrees.
pub const HELICOPTER_TILT: f32 = 25.0;

/// Turn that aligns the helicopter mesh's forward axis with +Z, degrees.
pub const HELICOPTER_MESH_YAW: f32 = 90.0;

/// `T · Rz · Ry · Rx · S` with Euler angles in degrees.
pub fn prop_model_matrix(position: Vec3, angle: Vec3, size: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_z(angle.z.to_radians())
        * Mat4::from_rotation_y(angle.y.to_radians())
        * Mat4::from_rotation_x(angle.x.to_radians())
        * Mat4::from_scale(size)
}

/// Frame that maps local +Z onto `front` and local +Y toward `up`, placed at
/// `position`.
///
/// Falls back to a pure translation when `front` is zero or parallel to `up`.
pub fn align_object(position: Vec3, front: Vec3, up: Vec3) -> Mat4 {
    let z = front.normalize_or_zero();
    let x = up.cross(z).normalize_or_zero();
    if x == Vec3::ZERO {
        return Mat4::from_translation(position);
    }
    let y = z.cross(x);
    Mat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        Vec4::new(position.x, position.y, position.z, 1.0),
    )
}

/// Helicopter pose: aligned with its flight direction, tilted nose-down.
pub fn helicopter_model_matrix(position: Vec3, direction: Vec3, size: Vec3) -> Mat4 {
    align_object(position, direction, Vec3::Y)
        * Mat4::from_rotation_x(-HELICOPTER_TILT.to_radians())
        * Mat4::from_rotation_y(-HELICOPTER_MESH_YAW.to_radians())
        * Mat4::from_scale(size)
}
