//! Boarding and leaving aircraft.
//!
//! The camera never owns an aircraft; it holds an [`EntityId`] in its
//! piloting mode and resolves it through the scene each tick.

use glam::Vec3;
use tracing::{info, warn};

use super::controller::Camera;
use super::mode::{CameraMode, WalkStyle};
use crate::config::{FlightTuning, LookTuning};
use crate::world::{AircraftKind, Entity, EntityId, Scene};

/// Result of an interact command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Now piloting this aircraft
    Mounted(EntityId),
    /// Stepped out of this aircraft
    Unmounted(EntityId),
    /// No aircraft within reach, still walking
    NothingInRange,
}

/// Board, re-board or leave an aircraft.
///
/// - Piloting a parked aircraft (zero speed, at its parked height): step out
///   `chase_distance` behind it and resume walking in the previous style.
/// - Otherwise the first of jet, fighter and retro within reach of the camera
///   is boarded. While piloting with nothing else in reach, the current
///   aircraft is kept and the chase camera re-snapped.
///
/// Boarding snaps the camera behind and above the aircraft, sets yaw to the
/// unsigned angle between the default view direction and the heading, and
/// pitches down by `mount_pitch`.
pub fn interact(
    camera: &mut Camera,
    scene: &Scene,
    flight: &FlightTuning,
    look: &LookTuning,
) -> Interaction {
    let style = camera.mode().walk_style().unwrap_or(WalkStyle::Grounded);
    let current = camera
        .possessed()
        .and_then(|id| scene.get(id).map(|plane| (id, plane)));

    if let Some((id, plane)) = current.filter(|(_, plane)| plane.is_parked()) {
        camera.position = plane.position - flight.chase_distance * plane.direction.normalize_or_zero();
        camera.set_mode(CameraMode::Walking(style));
        info!(aircraft = %id, position = ?camera.position, "left aircraft");
        return Interaction::Unmounted(id);
    }

    let nearby = AircraftKind::BOARDING_ORDER
        .into_iter()
        .map(|kind| scene.aircraft_id(kind))
        .find_map(|id| {
            scene
                .get(id)
                .filter(|plane| plane.is_player_nearby(camera.position))
                .map(|plane| (id, plane))
        });

    let Some((id, plane)) = nearby.or(current) else {
        warn!(position = ?camera.position, "no aircraft within reach");
        return Interaction::NothingInRange;
    };

    snap_behind(camera, plane, flight, look);
    camera.set_mode(CameraMode::Piloting {
        aircraft: id,
        style,
    });
    info!(aircraft = %id, kind = ?plane.kind, "boarded aircraft");
    Interaction::Mounted(id)
}

fn snap_behind(camera: &mut Camera, plane: &Entity, flight: &FlightTuning, look: &LookTuning) {
    let heading = plane.direction.normalize_or_zero();
    camera.trail(plane.position, heading, flight.chase_distance, flight.chase_height);
    camera.yaw = unsigned_angle_degrees(camera.default_direction, heading);
    camera.pitch = look.mount_pitch;
}

/// Angle between two vectors in degrees, in `[0, 180]`.
fn unsigned_angle_degrees(a: Vec3, b: Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}
