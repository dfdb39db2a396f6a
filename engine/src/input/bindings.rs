//! Command Bindings Module
//!
//! Maps physical keys to one-shot commands (as opposed to the latched
//! movement and look keys). The key for every command comes from the
//! `bindings` section of the config, so a key can be rebound without
//! touching simulation code.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Camera a function key selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraSlot {
    GroundedWalk,
    FreeWalk,
    Tower,
    Runway,
    Helicopter,
    Tour,
}

/// One-shot commands triggered on key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Exit,
    Restart,
    /// Board or leave an aircraft
    Interact,
    ToggleFlashlight,
    ToggleDay,
    ToggleMist,
    SelectCamera(CameraSlot),
}

impl Command {
    /// Commands that work even after a crash or in a scripted camera.
    pub fn is_global(&self) -> bool {
        matches!(self, Command::Exit | Command::Restart)
    }
}

/// Key assigned to each command. Movement and look keys are fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandKeys {
    pub exit: KeyCode,
    pub restart: KeyCode,
    pub interact: KeyCode,
    pub flashlight: KeyCode,
    pub day: KeyCode,
    pub mist: KeyCode,
    pub grounded_walk: KeyCode,
    pub free_walk: KeyCode,
    pub tower: KeyCode,
    pub runway: KeyCode,
    pub helicopter: KeyCode,
    pub tour: KeyCode,
}

impl Default for CommandKeys {
    fn default() -> Self {
        Self {
            exit: KeyCode::Escape,
            restart: KeyCode::R,
            interact: KeyCode::Enter,
            flashlight: KeyCode::F,
            day: KeyCode::L,
            mist: KeyCode::M,
            grounded_walk: KeyCode::F1,
            free_walk: KeyCode::F2,
            tower: KeyCode::F3,
            runway: KeyCode::F4,
            helicopter: KeyCode::F5,
            tour: KeyCode::F6,
        }
    }
}

impl CommandKeys {
    /// Every (key, command) pair, in declaration order.
    pub fn entries(&self) -> [(KeyCode, Command); 12] {
        [
            (self.exit, Command::Exit),
            (self.restart, Command::Restart),
            (self.interact, Command::Interact),
            (self.flashlight, Command::ToggleFlashlight),
            (self.day, Command::ToggleDay),
            (self.mist, Command::ToggleMist),
            (self.grounded_walk, Command::SelectCamera(CameraSlot::GroundedWalk)),
            (self.free_walk, Command::SelectCamera(CameraSlot::FreeWalk)),
            (self.tower, Command::SelectCamera(CameraSlot::Tower)),
            (self.runway, Command::SelectCamera(CameraSlot::Runway)),
            (self.helicopter, Command::SelectCamera(CameraSlot::Helicopter)),
            (self.tour, Command::SelectCamera(CameraSlot::Tour)),
        ]
    }

    /// First key that cannot serve as a command key, with the reason.
    ///
    /// A key is rejected if it is `Unknown`, latched for movement or look,
    /// or assigned to two commands.
    pub fn conflict(&self) -> Option<(KeyCode, &'static str)> {
        let mut seen = HashSet::new();
        for (key, _) in self.entries() {
            if key == KeyCode::Unknown {
                return Some((key, "is not a bindable key"));
            }
            if key.is_latched() {
                return Some((key, "is reserved for movement or look"));
            }
            if !seen.insert(key) {
                return Some((key, "is bound to more than one command"));
            }
        }
        None
    }
}

/// Key to command lookup.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    commands: HashMap<KeyCode, Command>,
}

impl KeyBindings {
    /// Build the lookup from the configured keys. Assumes
    /// [`CommandKeys::conflict`] found nothing; a duplicated key keeps the
    /// later command.
    pub fn from_config(keys: &CommandKeys) -> Self {
        Self {
            commands: keys.entries().into_iter().collect(),
        }
    }

    pub fn command(&self, key: KeyCode) -> Option<Command> {
        self.commands.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::from_config(&CommandKeys::default());

        assert_eq!(bindings.command(KeyCode::Escape), Some(Command::Exit));
        assert_eq!(bindings.command(KeyCode::R), Some(Command::Restart));
        assert_eq!(bindings.command(KeyCode::Enter), Some(Command::Interact));
        assert_eq!(
            bindings.command(KeyCode::F5),
            Some(Command::SelectCamera(CameraSlot::Helicopter))
        );
        assert_eq!(bindings.command(KeyCode::W), None);
        assert_eq!(CommandKeys::default().conflict(), None);
    }

    #[test]
    fn test_rebound_key_replaces_default() {
        let keys = CommandKeys {
            flashlight: KeyCode::F6,
            tour: KeyCode::F,
            ..CommandKeys::default()
        };
        assert_eq!(keys.conflict(), None);

        let bindings = KeyBindings::from_config(&keys);
        assert_eq!(bindings.command(KeyCode::F6), Some(Command::ToggleFlashlight));
        assert_eq!(
            bindings.command(KeyCode::F),
            Some(Command::SelectCamera(CameraSlot::Tour))
        );
    }

    #[test]
    fn test_duplicate_key_conflicts() {
        let keys = CommandKeys {
            mist: KeyCode::L,
            ..CommandKeys::default()
        };
        assert_eq!(
            keys.conflict(),
            Some((KeyCode::L, "is bound to more than one command"))
        );
    }

    #[test]
    fn test_latched_key_conflicts() {
        let keys = CommandKeys {
            interact: KeyCode::E,
            ..CommandKeys::default()
        };
        assert_eq!(keys.conflict().map(|(key, _)| key), Some(KeyCode::E));

        let keys = CommandKeys {
            exit: KeyCode::ArrowLeft,
            ..CommandKeys::default()
        };
        assert_eq!(keys.conflict().map(|(key, _)| key), Some(KeyCode::ArrowLeft));
    }

    #[test]
    fn test_global_commands() {
        assert!(Command::Exit.is_global());
        assert!(Command::Restart.is_global());
        assert!(!Command::Interact.is_global());
        assert!(!Command::SelectCamera(CameraSlot::Tour).is_global());
    }
}
