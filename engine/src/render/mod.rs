//! Render Module
//!
//! The seam between the simulation and a GPU backend. The simulation never
//! touches meshes, textures or shaders; it produces a [`Frame`] of pose-resolved
//! [`DrawCall`]s that a host [`Renderer`] consumes in order.
//!
//! # Submodules
//!
//! - [`draw`] - Draw items, pick tags and the [`Renderer`] trait
//! - [`transform`] - Model matrix helpers
//! - [`frame`] - Per-frame snapshot: view, draw list, lights, flashlight

pub mod draw;
pub mod frame;
pub mod transform;

pub use draw::{BillboardKind, DrawCall, DrawItem, RecordingRenderer, Renderer};
pub use frame::{FlashlightPose, Frame, flashlight_pose};
pub use transform::{align_object, helicopter_model_matrix, prop_model_matrix};
