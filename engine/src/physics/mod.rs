//! Physics module
//!
//! Motion math shared by every actor on the island. Built by hand on top of
//! glam, no external physics library.
//!
//! # Unit System
//!
//! - Distances in world units (roughly meters)
//! - Speeds in world units per tick (the simulation runs at a fixed tick)
//! - Angles in degrees wherever they are stored, radians only inside rotations
//!
//! # Submodules
//!
//! - [`types`] - Axis constants and heading helpers
//! - [`spline`] - Closed Catmull-Rom curves for scripted motion
//! - [`collision`] - Axis-aligned box tests (trivial and hollow structures)

pub mod collision;
pub mod spline;
pub mod types;

pub use collision::{HANGAR_CUTOUT, ObstacleShape, complex_collision, trivial_collision};
pub use spline::{
    ClosedCurve, CurveError, MIN_CONTROL_POINTS, evaluate_closed_curve,
    evaluate_closed_curve_derivative,
};
pub use types::{XZ_AXIS, Y_AXIS, heading_from_yaw};
