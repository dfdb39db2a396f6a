//! World Module
//!
//! Everything that exists on the island: the entity table, spawn layout,
//! transient effects and the island/scene extents.
//!
//! ## Island
//! A flat rectangle around the origin, roughly 54 x 100 units of walkable
//! ground, inside a 150 x 150 unit scene that aircraft may roam.

pub mod bounds;
pub mod effects;
pub mod entity;
pub mod layout;
pub mod scene;

pub use bounds::{BoundsOutcome, WorldBounds};
pub use effects::{Effects, Explosion, GameOverMarker};
pub use entity::{AircraftKind, Entity, EntityId, EntityKind};
pub use layout::{LIGHT_COUNT, StaticPose};
pub use scene::{Hit, Scene, SceneSlots, obstacle_shape};
