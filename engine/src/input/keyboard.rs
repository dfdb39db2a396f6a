//! Keyboard Input Module
//!
//! Latched key tables for movement and look. A key stays "pressed" from its
//! press event until its release event; the simulation samples the tables
//! once per tick.

use serde::{Deserialize, Serialize};

/// Logical keys the simulation reacts to, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement / throttle / altitude
    W,
    A,
    S,
    D,
    Q,
    E,

    // Look
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Camera modes
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,

    // Commands
    Enter,
    Escape,
    F,
    L,
    M,
    R,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Keys held down for movement or look rather than pressed once.
    pub fn is_latched(&self) -> bool {
        matches!(
            self,
            KeyCode::W
                | KeyCode::A
                | KeyCode::S
                | KeyCode::D
                | KeyCode::Q
                | KeyCode::E
                | KeyCode::ArrowUp
                | KeyCode::ArrowDown
                | KeyCode::ArrowLeft
                | KeyCode::ArrowRight
        )
    }
}

/// Latched state of the six movement keys.
///
/// While walking W/S move, A/D strafe and E/Q rise/sink (free style only).
/// While piloting W/S are throttle, A/D turn and E/Q climb/descend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W
    pub forward: bool,
    /// S
    pub backward: bool,
    /// A
    pub left: bool,
    /// D
    pub right: bool,
    /// E
    pub up: bool,
    /// Q
    pub down: bool,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the latch for `key`.
    ///
    /// Returns `true` if `key` is a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let latch = match key {
            KeyCode::W => &mut self.forward,
            KeyCode::S => &mut self.backward,
            KeyCode::A => &mut self.left,
            KeyCode::D => &mut self.right,
            KeyCode::E => &mut self.up,
            KeyCode::Q => &mut self.down,
            _ => return false,
        };
        *latch = pressed;
        true
    }

    /// Forward minus backward (-1, 0 or 1).
    pub fn forward_axis(&self) -> f32 {
        self.forward as i32 as f32 - self.backward as i32 as f32
    }

    /// Right minus left (-1, 0 or 1).
    pub fn right_axis(&self) -> f32 {
        self.right as i32 as f32 - self.left as i32 as f32
    }

    /// Up minus down (-1, 0 or 1).
    pub fn up_axis(&self) -> f32 {
        self.up as i32 as f32 - self.down as i32 as f32
    }
}

/// Latched state of the arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl LookKeys {
    /// Returns `true` if `key` is an arrow key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let latch = match key {
            KeyCode::ArrowUp => &mut self.up,
            KeyCode::ArrowDown => &mut self.down,
            KeyCode::ArrowLeft => &mut self.left,
            KeyCode::ArrowRight => &mut self.right,
            _ => return false,
        };
        *latch = pressed;
        true
    }

    /// Pitch change direction: arrow up looks up (negative pitch).
    pub fn pitch_axis(&self) -> f32 {
        self.down as i32 as f32 - self.up as i32 as f32
    }

    /// Yaw change direction: arrow right turns right (positive yaw).
    pub fn yaw_axis(&self) -> f32 {
        self.right as i32 as f32 - self.left as i32 as f32
    }
}

/// Complete latched keyboard state.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pub movement: MovementKeys,
    pub look: LookKeys,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }
}
