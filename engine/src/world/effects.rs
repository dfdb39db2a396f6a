//! Transient billboards: explosions and the game-over marker.

use glam::Vec3;

use crate::config::EffectTuning;

/// Camera-facing sprite animation at a fixed point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Explosion {
    pub position: Vec3,
    pub size: f32,
    pub start_time: f32,
    pub current_time: f32,
}

impl Explosion {
    pub fn new(position: Vec3, size: f32, start_time: f32) -> Self {
        Self {
            position,
            size,
            start_time,
            current_time: start_time,
        }
    }

    /// Seconds since the explosion started. Drives the sprite frame.
    pub fn age(&self) -> f32 {
        self.current_time - self.start_time
    }
}

/// The "game over" sign placed just in front of the camera on a crash.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameOverMarker {
    pub position: Vec3,
    pub size: f32,
    pub start_time: f32,
    pub current_time: f32,
}

/// Live effects of the current scene.
#[derive(Clone, Debug, Default)]
pub struct Effects {
    explosions: Vec<Explosion>,
    game_over: Option<GameOverMarker>,
    tuning: EffectTuning,
}

impl Effects {
    pub fn new(tuning: EffectTuning) -> Self {
        Self {
            explosions: Vec::new(),
            game_over: None,
            tuning,
        }
    }

    pub fn spawn_explosion(&mut self, position: Vec3, time: f32) {
        self.explosions
            .push(Explosion::new(position, self.tuning.explosion_size, time));
    }

    /// Place the game-over marker `game_over_distance` along the view direction.
    pub fn show_game_over(&mut self, camera_position: Vec3, camera_direction: Vec3, time: f32) {
        self.game_over = Some(GameOverMarker {
            position: camera_position + self.tuning.game_over_distance * camera_direction,
            size: self.tuning.game_over_size,
            start_time: time,
            current_time: time,
        });
    }

    /// Advance every effect's clock and drop finished explosions.
    pub fn update(&mut self, time: f32) {
        let lifetime = self.tuning.explosion_lifetime();
        for explosion in &mut self.explosions {
            explosion.current_time = time;
        }
        self.explosions
            .retain(|e| e.current_time < e.start_time + lifetime);

        if let Some(marker) = &mut self.game_over {
            marker.current_time = time;
        }
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn game_over(&self) -> Option<&GameOverMarker> {
        self.game_over.as_ref()
    }

    pub fn clear(&mut self) {
        self.explosions.clear();
        self.game_over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explosion_expires_after_lifetime() {
        let mut effects = Effects::new(EffectTuning::default());
        effects.spawn_explosion(Vec3::ZERO, 10.0);

        effects.update(11.5);
        assert_eq!(effects.explosions().len(), 1);
        assert!((effects.explosions()[0].age() - 1.5).abs() < 1e-5);

        effects.update(11.7);
        assert!(effects.explosions().is_empty());
    }

    #[test]
    fn test_game_over_persists() {
        let mut effects = Effects::new(EffectTuning::default());
        effects.show_game_over(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 3.0);
        effects.update(1000.0);

        let marker = effects.game_over().unwrap();
        assert!((marker.position - Vec3::new(0.0, 1.0, -0.975)).length() < 1e-6);
        assert_eq!(marker.current_time, 1000.0);

        effects.clear();
        assert!(effects.game_over().is_none());
    }
}
