//! Input Module
//!
//! Platform-agnostic input for the simulation: latched key tables, one-shot
//! command bindings and the centered-pointer look tracker. The winit adapter
//! translates physical keys into [`KeyCode`].
//!
//! # Example
//!
//! ```
//! use island_flight_engine::input::{Command, CommandKeys, KeyBindings, KeyCode, KeyboardState};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.movement.handle_key(KeyCode::W, true);
//! assert_eq!(keyboard.movement.forward_axis(), 1.0);
//!
//! let bindings = KeyBindings::from_config(&CommandKeys::default());
//! assert_eq!(bindings.command(KeyCode::Escape), Some(Command::Exit));
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;
pub mod winit_keys;

pub use bindings::{CameraSlot, Command, CommandKeys, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState, LookKeys, MovementKeys};
pub use mouse_state::CenteredPointer;
pub use winit_keys::from_physical_key;
