//! Flight Controller
//!
//! One tick of piloting. The possessed aircraft is steered from the latched
//! movement keys, moved along its heading, and then validated against the
//! scene: a hit at crash speed destroys it, a slower hit stalls it, and the
//! scene bounds reflect, clamp or (off the island at ground level) destroy it.
//!
//! # Controls
//!
//! | Key | Effect |
//! |-----|--------|
//! | W / S | throttle up / down by the aircraft's acceleration |
//! | A / D | turn left / right by one angle increment |
//! | E / Q | climb / descend, only at takeoff speed |

use glam::Vec3;
use tracing::debug;

use crate::camera::Camera;
use crate::config::{FlightTuning, SimConfig};
use crate::input::{KeyboardState, MovementKeys};
use crate::physics::heading_from_yaw;
use crate::world::{Entity, EntityId, Hit, Scene, WorldBounds};

/// Why an aircraft was lost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrashCause {
    /// Hit an obstacle at or above crash speed
    Collision(Hit),
    /// Rolled off the island at ground level
    OffIsland,
}

/// What a piloting tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightOutcome {
    Cruising,
    /// Hit an obstacle below crash speed: position rolled back, engine stopped
    Stalled(Hit),
    /// The aircraft is lost at `wreck`; the caller tears down possession
    Crashed { cause: CrashCause, wreck: Vec3 },
    /// The possessed handle no longer resolves
    NoAircraft,
}

/// Apply throttle, heading and altitude input, then advance the aircraft
/// along its heading. Returns the position before the advance.
pub fn steer_aircraft(
    plane: &mut Entity,
    movement: &MovementKeys,
    flight: &FlightTuning,
    angle_increment: f32,
) -> Vec3 {
    if movement.forward {
        plane.accelerate();
    }
    if movement.backward {
        plane.decelerate();
    }

    if movement.left {
        plane.angle.y += angle_increment;
        if plane.angle.y >= 360.0 {
            plane.angle.y = 0.0;
        }
        plane.direction = heading_from_yaw(plane.angle.y);
    }
    if movement.right {
        plane.angle.y -= angle_increment;
        if plane.angle.y <= 0.0 {
            plane.angle.y = 360.0;
        }
        plane.direction = heading_from_yaw(plane.angle.y);
    }

    if plane.current_speed() >= flight.takeoff_speed {
        if movement.up {
            plane.position.y += flight.climb_rate;
        }
        if movement.down {
            plane.position.y -= flight.climb_rate;
        }
    } else {
        plane.position.y -= flight.sink_rate;
    }

    let previous = plane.position;
    plane.position += plane.current_speed() * plane.direction.normalize_or_zero();
    previous
}

/// Advance the possessed aircraft by one tick and re-derive the chase camera.
pub fn fly(
    camera: &mut Camera,
    scene: &mut Scene,
    aircraft: EntityId,
    keys: &KeyboardState,
    bounds: &WorldBounds,
    config: &SimConfig,
) -> FlightOutcome {
    camera.apply_look_keys(&keys.look, config.look.angle_increment);

    let flight = &config.flight;
    let Some(plane) = scene.get_mut(aircraft) else {
        return FlightOutcome::NoAircraft;
    };
    let previous = steer_aircraft(plane, &keys.movement, flight, config.look.angle_increment);
    let (position, heading, bounding_box, speed) = (
        plane.position,
        plane.direction,
        plane.bounding_box,
        plane.current_speed(),
    );
    camera.trail(position, heading, flight.chase_distance, flight.chase_height);

    let mut stalled = None;
    if let Some(hit) = scene.first_collision(position, bounding_box, Some(aircraft)) {
        if speed >= flight.crash_speed {
            return FlightOutcome::Crashed {
                cause: CrashCause::Collision(hit),
                wreck: position,
            };
        }
        debug!(aircraft = %aircraft, obstacle = %hit.id, speed, "aircraft stalled");
        stalled = Some(hit);
    }

    let Some(plane) = scene.get_mut(aircraft) else {
        return FlightOutcome::NoAircraft;
    };
    if stalled.is_some() {
        plane.position = previous;
        plane.set_current_speed(0.0);
    }

    let confined = bounds.confine_aircraft(plane.position, plane.default_position.y);
    plane.position = confined.position();
    if confined.is_crash() {
        return FlightOutcome::Crashed {
            cause: CrashCause::OffIsland,
            wreck: plane.position,
        };
    }

    match stalled {
        Some(hit) => FlightOutcome::Stalled(hit),
        None => FlightOutcome::Cruising,
    }
}
