//! Player Module
//!
//! Per-tick movement of whatever the player controls: the camera itself while
//! walking, or the possessed aircraft while piloting.
//!
//! # Components
//!
//! - [`walk`] - Grounded and free walking with obstacle and edge rollback
//! - [`fly`] - Throttle, turn, altitude, chase camera, stall and crash
//!
//! Both ticks apply the arrow-key look first and read only latched keys.

pub mod flight;
pub mod walking;

pub use flight::{CrashCause, FlightOutcome, fly, steer_aircraft};
pub use walking::{WalkOutcome, walk, walk_direction};
