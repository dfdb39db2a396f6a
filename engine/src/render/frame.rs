//! Snapshot of everything a renderer needs for one frame.
//!
//! Building a frame only reads simulation state.

use glam::{Mat4, Vec3};

use super::draw::{BillboardKind, DrawCall, DrawItem, Renderer};
use super::transform::{helicopter_model_matrix, prop_model_matrix};
use crate::camera::Camera;
use crate::session::{ModeState, SessionState};
use crate::world::{Effects, EntityKind, Scene};

/// Where the flashlight sits and points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashlightPose {
    pub position: Vec3,
    pub direction: Vec3,
}

/// The flashlight follows the possessed aircraft, `offset` ahead of its
/// nose, or the camera when walking.
pub fn flashlight_pose(camera: &Camera, scene: &Scene, offset: f32) -> FlashlightPose {
    match camera.possessed().and_then(|id| scene.get(id)) {
        Some(plane) => {
            let direction = plane.direction.normalize_or_zero();
            FlashlightPose {
                position: plane.position + offset * direction,
                direction,
            }
        }
        None => FlashlightPose {
            position: camera.position,
            direction: camera.direction,
        },
    }
}

/// One frame of output.
#[derive(Clone, Debug)]
pub struct Frame {
    pub view: Mat4,
    pub camera_position: Vec3,
    pub draw_calls: Vec<DrawCall>,
    /// On/off per light id
    pub lights: Vec<bool>,
    pub flashlight: FlashlightPose,
    pub modes: ModeState,
    pub game_over: bool,
}

impl Frame {
    /// Collect the draw list: sky first, then every live entity, then the
    /// billboards.
    pub fn capture(
        camera: &Camera,
        scene: &Scene,
        effects: &Effects,
        session: &SessionState,
        flashlight_offset: f32,
    ) -> Self {
        let mut draw_calls = vec![DrawCall::new(DrawItem::Skybox {
            day: session.modes.day,
        })];

        draw_calls.extend(scene.iter().map(|(id, entity)| {
            let item = match entity.kind {
                EntityKind::Helicopter => DrawItem::Helicopter {
                    model: helicopter_model_matrix(entity.position, entity.direction, entity.size),
                },
                kind => DrawItem::StaticProp {
                    kind,
                    model: prop_model_matrix(entity.position, entity.angle, entity.size),
                },
            };
            DrawCall::new(item).with_pick_id(scene.pick_id(id))
        }));

        draw_calls.extend(effects.explosions().iter().map(|explosion| {
            DrawCall::new(DrawItem::Billboard {
                kind: BillboardKind::Explosion,
                position: explosion.position,
                size: explosion.size,
                age: explosion.age(),
            })
        }));

        if let Some(marker) = effects.game_over() {
            draw_calls.push(DrawCall::new(DrawItem::Billboard {
                kind: BillboardKind::GameOver,
                position: marker.position,
                size: marker.size,
                age: marker.current_time - marker.start_time,
            }));
        }

        Self {
            view: camera.view_matrix(),
            camera_position: camera.position,
            draw_calls,
            lights: session.lights().to_vec(),
            flashlight: flashlight_pose(camera, scene, flashlight_offset),
            modes: session.modes,
            game_over: session.is_game_over(),
        }
    }

    /// Hand every draw call to `renderer` in order.
    pub fn submit(&self, renderer: &mut dyn Renderer) {
        for call in &self.draw_calls {
            renderer.draw(call);
        }
    }
}
