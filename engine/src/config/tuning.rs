//! Tuning Sections
//!
//! Every numeric constant the motion code depends on, grouped by concern.
//! `Default` reproduces the values the island scene was designed around.

use serde::{Deserialize, Serialize};

/// Mouse and keyboard look parameters. All angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookTuning {
    /// Degrees of yaw/pitch per pixel of pointer motion
    pub sensitivity: f32,
    /// Pointer look refuses pitch updates that would reach this magnitude
    pub max_pitch: f32,
    /// Degrees per tick for arrow-key look and aircraft heading changes
    pub angle_increment: f32,
    /// Pitch the camera snaps to when boarding an aircraft
    pub mount_pitch: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            max_pitch: 80.0,
            angle_increment: 1.0,
            mount_pitch: 20.0,
        }
    }
}

/// Pedestrian camera speeds in units per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkingTuning {
    /// Grounded walking (collides, stays on the island)
    pub grounded_speed: f32,
    /// Free camera (no collision, can fly along its up vector)
    pub free_speed: f32,
}

impl Default for WalkingTuning {
    fn default() -> Self {
        Self {
            grounded_speed: 0.1,
            free_speed: 0.3,
        }
    }
}

/// Piloting parameters shared by all three aircraft.
///
/// Per-aircraft throttle envelopes (max speed, acceleration) are spawn
/// parameters of the entity, not tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    /// Minimum speed at which altitude keys take effect
    pub takeoff_speed: f32,
    /// Minimum speed at which a collision destroys the aircraft instead of stalling it
    pub crash_speed: f32,
    /// Altitude change per tick while climbing or descending
    pub climb_rate: f32,
    /// Altitude loss per tick below takeoff speed
    pub sink_rate: f32,
    /// Ceiling for any aircraft
    pub max_altitude: f32,
    /// Chase camera distance behind the aircraft
    pub chase_distance: f32,
    /// Chase camera height above the aircraft
    pub chase_height: f32,
    /// Flashlight offset ahead of the aircraft nose
    pub flashlight_offset: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            takeoff_speed: 0.15,
            crash_speed: 0.2,
            climb_rate: 0.05,
            sink_rate: 0.07,
            max_altitude: 100.0,
            chase_distance: 4.0,
            chase_height: 2.0,
            flashlight_offset: 2.0,
        }
    }
}

/// Island and scene extents (half-widths from the origin).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Pedestrians cannot reach `|x| >= island_width`
    pub island_width: f32,
    /// Pedestrians cannot reach `|z| >= island_depth`
    pub island_depth: f32,
    /// Aircraft past `|x| > scene_width` are mirrored across the origin
    pub scene_width: f32,
    /// Aircraft past `|z| > scene_depth` are mirrored across the origin
    pub scene_depth: f32,
    /// Distance beyond the island edge at which a grounded aircraft crashes
    pub crash_margin: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            island_width: 27.0,
            island_depth: 50.0,
            scene_width: 75.0,
            scene_depth: 75.0,
            crash_margin: 3.0,
        }
    }
}

/// Scripted camera and helicopter playback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptedTuning {
    /// Curve parameter units per second for the exhibition tour
    pub tour_speed: f32,
    /// Curve parameter units per second for the helicopter loop
    pub helicopter_speed: f32,
    /// Follow camera distance behind the helicopter
    pub helicopter_chase_distance: f32,
    /// Follow camera height above the helicopter
    pub helicopter_chase_height: f32,
}

impl Default for ScriptedTuning {
    fn default() -> Self {
        Self {
            tour_speed: 0.3,
            helicopter_speed: 0.3,
            helicopter_chase_distance: 4.0,
            helicopter_chase_height: 0.5,
        }
    }
}

/// Explosion and game-over billboard parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTuning {
    /// Frames in the explosion sprite sheet
    pub explosion_frames: u32,
    /// Seconds each explosion frame is shown
    pub explosion_frame_duration: f32,
    /// Billboard scale of an explosion
    pub explosion_size: f32,
    /// Billboard scale of the game-over marker
    pub game_over_size: f32,
    /// Distance in front of the camera where the game-over marker appears
    pub game_over_distance: f32,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            explosion_frames: 16,
            explosion_frame_duration: 0.1,
            explosion_size: 2.0,
            game_over_size: 1.0,
            game_over_distance: 0.975,
        }
    }
}

impl EffectTuning {
    /// Seconds an explosion stays alive.
    pub fn explosion_lifetime(&self) -> f32 {
        self.explosion_frames as f32 * self.explosion_frame_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explosion_lifetime() {
        let effects = EffectTuning::default();
        assert!((effects.explosion_lifetime() - 1.6).abs() < 1e-5);
    }

    #[test]
    fn test_crash_threshold_default() {
        assert_eq!(FlightTuning::default().crash_speed, 0.2);
    }
}
