//! Session State
//!
//! Per-run state that is not part of the world: latched keys, the light
//! switch table, the simulation clock, the game-over gate, window size and
//! the display toggles.

use crate::input::{CenteredPointer, KeyboardState};

/// Display toggles driven by single key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    pub day: bool,
    pub mist: bool,
    pub flashlight: bool,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            day: true,
            mist: false,
            flashlight: false,
        }
    }
}

/// Mutable state of one simulation run. Rebuilt on restart.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub keys: KeyboardState,
    pub modes: ModeState,
    pointer: CenteredPointer,
    lights: Vec<bool>,
    elapsed_time: f32,
    game_over: bool,
}

impl SessionState {
    /// Fresh session: every light on, clock at zero, all keys released.
    pub fn new(light_count: usize, window_width: u32, window_height: u32) -> Self {
        Self {
            keys: KeyboardState::new(),
            modes: ModeState::default(),
            pointer: CenteredPointer::new(window_width, window_height),
            lights: vec![true; light_count],
            elapsed_time: 0.0,
            game_over: false,
        }
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Advance the clock. Time never runs backwards.
    pub fn set_elapsed_time(&mut self, time: f32) {
        if time > self.elapsed_time {
            self.elapsed_time = time;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
    }

    /// Whether light `id` is switched on. Unknown ids read as off.
    pub fn light(&self, id: usize) -> bool {
        self.lights.get(id).copied().unwrap_or(false)
    }

    /// Flip light `id`, returning its new state.
    pub fn toggle_light(&mut self, id: usize) -> Option<bool> {
        let light = self.lights.get_mut(id)?;
        *light = !*light;
        Some(*light)
    }

    pub fn lights(&self) -> &[bool] {
        &self.lights
    }

    pub fn pointer(&self) -> &CenteredPointer {
        &self.pointer
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pointer.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lights_start_on() {
        let session = SessionState::new(18, 800, 600);
        assert_eq!(session.lights().len(), 18);
        assert!(session.lights().iter().all(|&on| on));
        assert!(!session.light(18));
    }

    #[test]
    fn test_toggle_light() {
        let mut session = SessionState::new(18, 800, 600);
        assert_eq!(session.toggle_light(5), Some(false));
        assert!(!session.light(5));
        assert_eq!(session.toggle_light(5), Some(true));
        assert_eq!(session.toggle_light(99), None);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let mut session = SessionState::new(1, 800, 600);
        session.set_elapsed_time(2.0);
        session.set_elapsed_time(1.0);
        assert_eq!(session.elapsed_time(), 2.0);
    }

    #[test]
    fn test_default_modes() {
        let modes = ModeState::default();
        assert!(modes.day);
        assert!(!modes.mist);
        assert!(!modes.flashlight);
    }
}
