//! Draw list types and the renderer seam.

use glam::{Mat4, Vec3};

use crate::world::EntityKind;

/// Which sprite sheet a billboard uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BillboardKind {
    Explosion,
    GameOver,
}

/// One thing to draw, with its pose already resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawItem {
    /// Mesh drawn with a plain model matrix
    StaticProp { kind: EntityKind, model: Mat4 },
    /// Helicopter mesh with its flight tilt baked into `model`
    Helicopter { model: Mat4 },
    /// Camera-facing quad; `age` in seconds selects the sprite frame
    Billboard {
        kind: BillboardKind,
        position: Vec3,
        size: f32,
        age: f32,
    },
    /// Day or night sky box around the camera
    Skybox { day: bool },
}

/// A draw item tagged with the id the renderer writes to its pick buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub item: DrawItem,
    pub pick_id: Option<u8>,
}

impl DrawCall {
    pub fn new(item: DrawItem) -> Self {
        Self {
            item,
            pick_id: None,
        }
    }

    pub fn with_pick_id(mut self, pick_id: Option<u8>) -> Self {
        self.pick_id = pick_id;
        self
    }
}

/// Consumer of the draw list. Implemented by the host's GPU backend.
pub trait Renderer {
    fn draw(&mut self, call: &DrawCall);
}

/// Renderer that keeps every call, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, call: &DrawCall) {
        self.calls.push(*call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_keeps_order() {
        let mut renderer = RecordingRenderer::default();
        renderer.draw(&DrawCall::new(DrawItem::Skybox { day: true }));
        renderer.draw(&DrawCall::new(DrawItem::Helicopter {
            model: Mat4::IDENTITY,
        })
        .with_pick_id(Some(40)));

        assert_eq!(renderer.calls.len(), 2);
        assert_eq!(renderer.calls[0].item, DrawItem::Skybox { day: true });
        assert_eq!(renderer.calls[1].pick_id, Some(40));
    }
}
