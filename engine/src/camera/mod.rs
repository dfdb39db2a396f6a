//! Camera Module
//!
//! Viewer pose, the camera mode state machine and aircraft possession.
//! Window-system agnostic: it only deals with camera state and math.

pub mod controller;
pub mod mode;
pub mod possession;

pub use controller::{Camera, SavedView};
pub use mode::{CameraMode, StaticView, WalkStyle};
pub use possession::{Interaction, interact};
