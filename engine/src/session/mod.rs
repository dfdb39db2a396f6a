//! Session Module
//!
//! Input latches, light switches, the clock and the game-over gate for one
//! run of the simulation.

pub mod state;

pub use state::{ModeState, SessionState};
