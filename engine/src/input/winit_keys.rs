//! winit key translation
//!
//! Hosts driving the simulation from a winit event loop translate physical
//! keys here. Everything the simulation does not use maps to
//! [`KeyCode::Unknown`].

use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use super::KeyCode;

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyD => KeyCode::D,
            WinitKeyCode::KeyQ => KeyCode::Q,
            WinitKeyCode::KeyE => KeyCode::E,
            WinitKeyCode::KeyF => KeyCode::F,
            WinitKeyCode::KeyL => KeyCode::L,
            WinitKeyCode::KeyM => KeyCode::M,
            WinitKeyCode::KeyR => KeyCode::R,
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::F1 => KeyCode::F1,
            WinitKeyCode::F2 => KeyCode::F2,
            WinitKeyCode::F3 => KeyCode::F3,
            WinitKeyCode::F4 => KeyCode::F4,
            WinitKeyCode::F5 => KeyCode::F5,
            WinitKeyCode::F6 => KeyCode::F6,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

/// Translate a winit physical key.
pub fn from_physical_key(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => code.into(),
        PhysicalKey::Unidentified(_) => KeyCode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Q);
    }

    #[test]
    fn test_both_enter_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::Enter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
    }

    #[test]
    fn test_unused_key_is_unknown() {
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Unknown);
        assert_eq!(
            from_physical_key(PhysicalKey::Code(WinitKeyCode::F6)),
            KeyCode::F6
        );
    }
}
