//! Camera Mode State Machine
//!
//! Exactly one mode is active at a time. Only the walking and piloting
//! modes consume movement input; the scripted modes drive the camera pose
//! themselves.

use std::fmt;

use crate::input::CameraSlot;
use crate::world::layout::{self, StaticPose};
use crate::world::EntityId;

/// How the pedestrian camera moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WalkStyle {
    /// Stays at its height, collides with obstacles, cannot leave the island
    #[default]
    Grounded,
    /// Flies along its view and up vectors, ignores obstacles and edges
    Free,
}

/// Fixed camera placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StaticView {
    Tower,
    Runway,
}

impl StaticView {
    pub fn pose(&self) -> StaticPose {
        match self {
            StaticView::Tower => layout::TOWER_VIEW,
            StaticView::Runway => layout::RUNWAY_VIEW,
        }
    }
}

/// Active camera mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Walking(WalkStyle),
    /// Possessing an aircraft. `style` is the walking style to return to.
    Piloting {
        aircraft: EntityId,
        style: WalkStyle,
    },
    ScriptedStatic(StaticView),
    /// Following a moving entity (the helicopter).
    ScriptedDynamic(EntityId),
    ScriptedTour,
}

impl Default for CameraMode {
    fn default() -> Self {
        CameraMode::Walking(WalkStyle::Grounded)
    }
}

impl CameraMode {
    /// The possessed aircraft, if piloting.
    pub fn possessed(&self) -> Option<EntityId> {
        match *self {
            CameraMode::Piloting { aircraft, .. } => Some(aircraft),
            _ => None,
        }
    }

    /// Walking style while walking or piloting.
    pub fn walk_style(&self) -> Option<WalkStyle> {
        match *self {
            CameraMode::Walking(style) | CameraMode::Piloting { style, .. } => Some(style),
            _ => None,
        }
    }

    /// Walking and piloting accept movement keys and player commands.
    pub fn is_interactive(&self) -> bool {
        self.walk_style().is_some()
    }

    /// Whether this mode is the one `slot` selects.
    pub fn matches_slot(&self, slot: CameraSlot) -> bool {
        matches!(
            (self, slot),
            (CameraMode::Walking(WalkStyle::Grounded), CameraSlot::GroundedWalk)
                | (CameraMode::Walking(WalkStyle::Free), CameraSlot::FreeWalk)
                | (CameraMode::ScriptedStatic(StaticView::Tower), CameraSlot::Tower)
                | (CameraMode::ScriptedStatic(StaticView::Runway), CameraSlot::Runway)
                | (CameraMode::ScriptedDynamic(_), CameraSlot::Helicopter)
                | (CameraMode::ScriptedTour, CameraSlot::Tour)
        )
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraMode::Walking(WalkStyle::Grounded) => write!(f, "grounded walk"),
            CameraMode::Walking(WalkStyle::Free) => write!(f, "free walk"),
            CameraMode::Piloting { aircraft, .. } => write!(f, "piloting {aircraft}"),
            CameraMode::ScriptedStatic(StaticView::Tower) => write!(f, "tower view"),
            CameraMode::ScriptedStatic(StaticView::Runway) => write!(f, "runway view"),
            CameraMode::ScriptedDynamic(target) => write!(f, "following {target}"),
            CameraMode::ScriptedTour => write!(f, "exhibition tour"),
        }
    }
}
