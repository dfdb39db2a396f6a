//! Pedestrian Movement
//!
//! One tick of walking. Grounded style moves on the horizontal plane at the
//! current height and refuses moves into obstacles or off the island; free
//! style moves along the full view and up vectors and is never blocked.

use glam::Vec3;
use tracing::debug;

use crate::camera::{Camera, WalkStyle};
use crate::config::SimConfig;
use crate::input::KeyboardState;
use crate::world::{Hit, Scene, WorldBounds};

/// What a walking tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WalkOutcome {
    /// No movement key held
    Idle,
    Moved,
    /// Move rolled back by an obstacle
    Blocked(Hit),
    /// Move rolled back at the island edge
    OutOfBounds,
}

/// Movement vector for the held keys, before scaling by speed.
pub fn walk_direction(camera: &Camera, keys: &KeyboardState, style: WalkStyle) -> Vec3 {
    let movement = &keys.movement;
    let forward = match style {
        WalkStyle::Free => camera.direction,
        WalkStyle::Grounded => Vec3::new(camera.direction.x, 0.0, camera.direction.z),
    };
    let right = camera.direction.cross(camera.up);

    let mut direction = movement.forward_axis() * forward + movement.right_axis() * right;
    if style == WalkStyle::Free {
        direction += movement.up_axis() * camera.up;
    }
    direction
}

/// Advance the walking camera by one tick.
///
/// Arrow keys adjust the look angles first; the new angles take effect on
/// the next orientation update.
pub fn walk(
    camera: &mut Camera,
    keys: &KeyboardState,
    scene: &Scene,
    bounds: &WorldBounds,
    config: &SimConfig,
) -> WalkOutcome {
    camera.apply_look_keys(&keys.look, config.look.angle_increment);

    let style = camera.mode().walk_style().unwrap_or_default();
    camera.speed = match style {
        WalkStyle::Free => config.walking.free_speed,
        WalkStyle::Grounded => config.walking.grounded_speed,
    };

    let direction = walk_direction(camera, keys, style);
    if direction == Vec3::ZERO {
        return WalkOutcome::Idle;
    }

    let previous = camera.position;
    camera.position += camera.speed * direction;

    if style == WalkStyle::Free {
        return WalkOutcome::Moved;
    }

    if let Some(hit) = scene.first_collision(camera.position, Vec3::ZERO, None) {
        debug!(obstacle = %hit.id, kind = ?hit.kind, "walk blocked");
        camera.position = previous;
        return WalkOutcome::Blocked(hit);
    }
    if bounds.is_walker_out_of_bounds(camera.position) {
        debug!(position = ?camera.position, "walk stopped at island edge");
        camera.position = previous;
        return WalkOutcome::OutOfBounds;
    }
    WalkOutcome::Moved
}
