//! Island Flight Engine
//!
//! Motion, possession and collision core of a small island flight
//! simulation: a pedestrian camera, three flyable aircraft, a helicopter on a
//! scripted loop, crash handling and several scripted camera views. The crate
//! renders nothing itself; it hands pose-resolved draw calls to a host
//! [`render::Renderer`] and consumes latched input.
//!
//! # Modules
//!
//! - [`physics`] - Closed Catmull-Rom curves and box collision predicates
//! - [`world`] - Entities, spawn layout, bounds and transient effects
//! - [`camera`] - Viewer pose, camera mode state machine, aircraft possession
//! - [`player`] - Walking and flying ticks
//! - [`input`] - Key latches, command bindings, pointer look, winit adapter
//! - [`session`] - Per-run state: lights, clock, game over, display toggles
//! - [`config`] - Serde tuning with JSON loading and validation
//! - [`render`] - Draw list, model matrices and the renderer seam
//! - [`sim`] - The orchestrator tying everything together
//!
//! # Example
//!
//! ```
//! use island_flight_engine::config::SimConfig;
//! use island_flight_engine::input::KeyCode;
//! use island_flight_engine::render::RecordingRenderer;
//! use island_flight_engine::sim::{Simulation, TickEvent};
//!
//! let mut sim = Simulation::new(SimConfig::default()).unwrap();
//! sim.key_pressed(KeyCode::W);
//! assert!(matches!(sim.tick(0.033), TickEvent::Walked(_)));
//!
//! let mut renderer = RecordingRenderer::default();
//! sim.render(&mut renderer);
//! assert!(!renderer.calls.is_empty());
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod session;
pub mod sim;
pub mod world;

// Re-export the types a host needs to drive a simulation
pub use config::{ConfigError, SimConfig};
pub use input::{KeyCode, KeyboardState};
pub use render::{DrawCall, DrawItem, Frame, Renderer};
pub use sim::{Control, SimError, Simulation, TickEvent};
