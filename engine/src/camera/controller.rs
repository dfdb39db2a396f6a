//! Camera Controller Module
//!
//! The single viewer of the scene. In the walking modes the camera is the
//! player; while piloting it trails the possessed aircraft; in the scripted
//! modes it is placed by a fixed pose, the helicopter or the tour curve.
//!
//! ## Orientation
//!
//! Walking and piloting derive the view from two accumulated angles in
//! degrees: `yaw` turns about the default up vector, `pitch` about the
//! default right vector (`default_direction × default_up`), and positive
//! pitch looks down.
//!
//! ```text
//! direction = R(-yaw, up₀) · R(-pitch, dir₀ × up₀) · dir₀
//! up        = R(-yaw, up₀) · R(-pitch, dir₀ × up₀) · up₀
//! ```

use glam::{Mat4, Quat, Vec3};

use super::mode::{CameraMode, StaticView, WalkStyle};
use crate::config::LookTuning;
use crate::input::LookKeys;
use crate::physics::{ClosedCurve, Y_AXIS};
use crate::world::EntityId;
use crate::world::layout::{
    CAMERA_DEFAULT_DIRECTION, CAMERA_DEFAULT_POSITION, CAMERA_DEFAULT_UP, StaticPose,
};

/// Last pose of a walking style, restored when the style is re-selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavedView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// Viewer state.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    pub default_position: Vec3,
    pub default_direction: Vec3,
    pub default_up: Vec3,
    /// Degrees, positive turns right
    pub yaw: f32,
    /// Degrees, positive looks down
    pub pitch: f32,
    /// Walk speed applied on the last walking tick
    pub speed: f32,
    /// Time the current scripted playback started
    pub start_time: f32,
    mode: CameraMode,
    grounded_view: SavedView,
    free_view: SavedView,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            CAMERA_DEFAULT_POSITION,
            CAMERA_DEFAULT_DIRECTION,
            CAMERA_DEFAULT_UP,
        )
    }
}

impl Camera {
    pub fn new(position: Vec3, direction: Vec3, up: Vec3) -> Self {
        let home = SavedView {
            position,
            yaw: 0.0,
            pitch: 0.0,
        };
        Self {
            position,
            direction,
            up,
            default_position: position,
            default_direction: direction,
            default_up: up,
            yaw: 0.0,
            pitch: 0.0,
            speed: 0.0,
            start_time: 0.0,
            mode: CameraMode::default(),
            grounded_view: home,
            free_view: home,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    /// The possessed aircraft, if any.
    pub fn possessed(&self) -> Option<EntityId> {
        self.mode.possessed()
    }

    /// Recompute `direction` and `up` from `yaw` and `pitch`.
    pub fn update_orientation(&mut self) {
        let right = self.default_direction.cross(self.default_up).normalize_or_zero();
        let yaw = Quat::from_axis_angle(self.default_up.normalize_or_zero(), -self.yaw.to_radians());
        let pitch = Quat::from_axis_angle(right, -self.pitch.to_radians());
        let rotation = yaw * pitch;

        self.direction = (rotation * self.default_direction).normalize_or_zero();
        self.up = (rotation * self.default_up).normalize_or_zero();
    }

    /// Right-handed view matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, self.up)
    }

    /// Arrow-key look: one `increment` per held key per tick.
    pub fn apply_look_keys(&mut self, look: &LookKeys, increment: f32) {
        self.pitch += look.pitch_axis() * increment;
        self.yaw += look.yaw_axis() * increment;
    }

    /// Pointer look from a centered-pointer offset.
    ///
    /// A pitch update that would reach `max_pitch` in magnitude is dropped
    /// entirely rather than clamped.
    pub fn apply_pointer_look(&mut self, dx: Option<f32>, dy: Option<f32>, tuning: &LookTuning) {
        if let Some(dy) = dy {
            let pitch = self.pitch + tuning.sensitivity * dy;
            if pitch.abs() < tuning.max_pitch {
                self.pitch = pitch;
            }
        }
        if let Some(dx) = dx {
            self.yaw += tuning.sensitivity * dx;
        }
    }

    /// Place the camera on a fixed pose.
    pub fn set_pose(&mut self, pose: &StaticPose) {
        self.position = pose.position;
        self.direction = pose.direction.normalize_or_zero();
        self.up = pose.up;
    }

    /// Trail a target: `distance` behind along its heading and `height` above.
    pub fn trail(&mut self, target: Vec3, heading: Vec3, distance: f32, height: f32) {
        self.position = target - distance * heading.normalize_or_zero() + Vec3::new(0.0, height, 0.0);
    }

    /// Trail a target and look along its heading with a level horizon.
    pub fn follow(&mut self, target: Vec3, heading: Vec3, distance: f32, height: f32) {
        self.trail(target, heading, distance, height);
        self.direction = heading;
        self.up = Y_AXIS;
    }

    /// Place the camera on `curve` at `rate * (time - start_time)`, looking
    /// along the tangent with a level horizon.
    pub fn follow_curve(&mut self, curve: &ClosedCurve, time: f32, rate: f32) {
        let t = rate * (time - self.start_time);
        self.position = curve.position(t);
        self.direction = curve.tangent(t);
        self.up = Y_AXIS;
    }

    /// Apply the pose of a scripted mode that needs no world lookup.
    pub fn apply_static_view(&mut self, view: StaticView) {
        self.set_pose(&view.pose());
    }

    pub fn saved_view(&self, style: WalkStyle) -> SavedView {
        match style {
            WalkStyle::Grounded => self.grounded_view,
            WalkStyle::Free => self.free_view,
        }
    }

    /// Remember the current pose for the active walking style.
    pub fn save_walking_view(&mut self) {
        if let CameraMode::Walking(style) = self.mode {
            let view = SavedView {
                position: self.position,
                yaw: self.yaw,
                pitch: self.pitch,
            };
            match style {
                WalkStyle::Grounded => self.grounded_view = view,
                WalkStyle::Free => self.free_view = view,
            }
        }
    }

    /// Switch to a walking style at its last saved pose.
    pub fn restore_walking_view(&mut self, style: WalkStyle) {
        let view = self.saved_view(style);
        self.position = view.position;
        self.yaw = view.yaw;
        self.pitch = view.pitch;
        self.mode = CameraMode::Walking(style);
        self.update_orientation();
    }
}
