//! World Bounds Module
//!
//! The island is a flat rectangle centered on the origin. Pedestrians hit a
//! hard wall at its edge; aircraft may leave the island but not the scene,
//! and crossing a scene edge mirrors them to the opposite side.
//!
//! ## Extents
//! - Island: `|x| < island_width`, `|z| < island_depth`
//! - Scene: `|x| <= scene_width`, `|z| <= scene_depth`, `y ∈ [ground, max_altitude]`

use glam::Vec3;

use crate::config::BoundsConfig;

/// Result of confining an aircraft to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundsOutcome {
    /// Position (possibly reflected or clamped) is fine
    Inside(Vec3),
    /// The aircraft rolled off the island at ground level
    OffIsland(Vec3),
}

impl BoundsOutcome {
    pub fn position(&self) -> Vec3 {
        match *self {
            BoundsOutcome::Inside(pos) | BoundsOutcome::OffIsland(pos) => pos,
        }
    }

    pub fn is_crash(&self) -> bool {
        matches!(self, BoundsOutcome::OffIsland(_))
    }
}

/// World extents used by the walking and flight controllers.
#[derive(Clone, Copy, Debug)]
pub struct WorldBounds {
    pub island_width: f32,
    pub island_depth: f32,
    pub scene_width: f32,
    pub scene_depth: f32,
    /// Distance past the island edge where a grounded aircraft is lost
    pub crash_margin: f32,
    /// Ceiling for aircraft
    pub max_altitude: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::from_config(&BoundsConfig::default(), 100.0)
    }
}

impl WorldBounds {
    pub fn from_config(bounds: &BoundsConfig, max_altitude: f32) -> Self {
        Self {
            island_width: bounds.island_width,
            island_depth: bounds.island_depth,
            scene_width: bounds.scene_width,
            scene_depth: bounds.scene_depth,
            crash_margin: bounds.crash_margin,
            max_altitude,
        }
    }

    /// Whether a pedestrian at `pos` has walked off the island.
    ///
    /// The edge itself already counts as outside.
    pub fn is_walker_out_of_bounds(&self, pos: Vec3) -> bool {
        pos.x.abs() >= self.island_width || pos.z.abs() >= self.island_depth
    }

    /// Keep an aircraft inside the scene.
    ///
    /// Crossing the side walls mirrors the coordinate through the origin,
    /// altitude is clamped between `ground_y` (the aircraft's parked height)
    /// and the ceiling. An aircraft that ends up at ground level beyond the
    /// crash margin has left the runway area and is reported as lost.
    pub fn confine_aircraft(&self, pos: Vec3, ground_y: f32) -> BoundsOutcome {
        let mut confined = pos;

        if confined.x.abs() > self.scene_width {
            confined.x = -confined.x;
        }
        confined.y = confined.y.clamp(ground_y, self.max_altitude.max(ground_y));
        if confined.z.abs() > self.scene_depth {
            confined.z = -confined.z;
        }

        let beyond_island = confined.x.abs() >= self.island_width + self.crash_margin
            || confined.z.abs() >= self.island_depth + self.crash_margin;

        if beyond_island && confined.y == ground_y {
            BoundsOutcome::OffIsland(confined)
        } else {
            BoundsOutcome::Inside(confined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walker_edge_is_outside() {
        let bounds = WorldBounds::default();
        assert!(!bounds.is_walker_out_of_bounds(Vec3::new(26.9, 1.0, 49.9)));
        assert!(bounds.is_walker_out_of_bounds(Vec3::new(27.0, 1.0, 0.0)));
        assert!(bounds.is_walker_out_of_bounds(Vec3::new(0.0, 1.0, -50.0)));
    }

    #[test]
    fn test_walker_ignores_height() {
        let bounds = WorldBounds::default();
        assert!(!bounds.is_walker_out_of_bounds(Vec3::new(0.0, 500.0, 0.0)));
    }

    #[test]
    fn test_aircraft_reflects_at_scene_edge() {
        let bounds = WorldBounds::default();
        let out = bounds.confine_aircraft(Vec3::new(75.5, 10.0, -76.0), 0.6);
        assert_eq!(out, BoundsOutcome::Inside(Vec3::new(-75.5, 10.0, 76.0)));
    }

    #[test]
    fn test_aircraft_altitude_clamped() {
        let bounds = WorldBounds::default();
        let low = bounds.confine_aircraft(Vec3::new(0.0, 0.2, 0.0), 0.6);
        assert_eq!(low.position().y, 0.6);
        assert!(!low.is_crash());

        let high = bounds.confine_aircraft(Vec3::new(0.0, 120.0, 0.0), 0.6);
        assert_eq!(high.position().y, 100.0);
    }

    #[test]
    fn test_grounded_aircraft_past_margin_is_lost() {
        let bounds = WorldBounds::default();
        let out = bounds.confine_aircraft(Vec3::new(30.0, 0.6, 0.0), 0.6);
        assert!(out.is_crash());
    }

    #[test]
    fn test_airborne_aircraft_past_margin_survives() {
        let bounds = WorldBounds::default();
        let out = bounds.confine_aircraft(Vec3::new(30.0, 5.0, 0.0), 0.6);
        assert!(!out.is_crash());
    }

    #[test]
    fn test_grounded_aircraft_inside_margin_survives() {
        let bounds = WorldBounds::default();
        let out = bounds.confine_aircraft(Vec3::new(29.5, 0.6, 0.0), 0.6);
        assert!(!out.is_crash());
    }
}
