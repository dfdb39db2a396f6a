//! Entity Model
//!
//! Every actor on the island (buildings, props, aircraft, the helicopter)
//! shares one pose record. Static props never move; aircraft are moved by
//! the flight controller while possessed; the helicopter follows a closed
//! curve on its own clock.

use std::fmt;

use glam::Vec3;

use crate::physics::ClosedCurve;

/// Handle into the scene's entity table.
///
/// Handles stay valid for the lifetime of a scene; a destroyed entity simply
/// resolves to `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three flyable aircraft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AircraftKind {
    Jet,
    Fighter,
    Retro,
}

impl AircraftKind {
    /// Order in which boarding looks for a nearby aircraft.
    pub const BOARDING_ORDER: [AircraftKind; 3] =
        [AircraftKind::Jet, AircraftKind::Fighter, AircraftKind::Retro];

    pub fn name(&self) -> &'static str {
        match self {
            AircraftKind::Jet => "jet",
            AircraftKind::Fighter => "fighter",
            AircraftKind::Retro => "retro",
        }
    }
}

/// What an entity is. Drives collision shape and drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Island,
    Runway,
    Tower,
    Antenna,
    Hangar,
    Stone,
    Lamp,
    SpotLight,
    Aircraft(AircraftKind),
    Helicopter,
}

impl EntityKind {
    /// Aircraft and the helicopter are destroyed when rammed at crash speed.
    pub fn is_vehicle(&self) -> bool {
        matches!(self, EntityKind::Aircraft(_) | EntityKind::Helicopter)
    }

    pub fn aircraft(&self) -> Option<AircraftKind> {
        match *self {
            EntityKind::Aircraft(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Pose and motion state of one actor.
///
/// `bounding_box` holds half-extents. `angle` holds Euler angles in degrees
/// (x pitch, y yaw, z roll) used only for drawing; aircraft heading lives in
/// `direction` and `angle.y` together.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub default_position: Vec3,
    pub direction: Vec3,
    pub default_direction: Vec3,
    pub size: Vec3,
    pub bounding_box: Vec3,
    pub angle: Vec3,
    pub default_angle: Vec3,
    current_speed: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub start_time: f32,
    pub current_time: f32,
}

impl Entity {
    /// A static prop: no speed, no acceleration.
    pub fn new(
        kind: EntityKind,
        position: Vec3,
        direction: Vec3,
        size: Vec3,
        bounding_box: Vec3,
        angle: Vec3,
    ) -> Self {
        Self {
            kind,
            position,
            default_position: position,
            direction,
            default_direction: direction,
            size,
            bounding_box,
            angle,
            default_angle: angle,
            current_speed: 0.0,
            max_speed: 0.0,
            acceleration: 0.0,
            start_time: 0.0,
            current_time: 0.0,
        }
    }

    /// Give the entity a throttle envelope. Speed starts at zero.
    pub fn with_engine(mut self, max_speed: f32, acceleration: f32) -> Self {
        self.max_speed = max_speed.max(0.0);
        self.acceleration = acceleration;
        self
    }

    /// Drive the entity along a curve at a constant parameter rate
    /// starting at `start_time`.
    pub fn with_schedule(mut self, speed: f32, start_time: f32) -> Self {
        self.max_speed = speed.max(0.0);
        self.acceleration = speed;
        self.current_speed = self.max_speed;
        self.start_time = start_time;
        self.current_time = start_time;
        self
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Set speed, clamped to `[0, max_speed]`.
    pub fn set_current_speed(&mut self, speed: f32) {
        self.current_speed = speed.clamp(0.0, self.max_speed);
    }

    /// One throttle step up, saturating at `max_speed`.
    pub fn accelerate(&mut self) {
        self.set_current_speed((self.current_speed + self.acceleration).min(self.max_speed));
    }

    /// One throttle step down, saturating at zero.
    pub fn decelerate(&mut self) {
        self.set_current_speed((self.current_speed - self.acceleration).max(0.0));
    }

    /// Whether the entity sits at its parked altitude.
    pub fn is_grounded(&self) -> bool {
        self.position.y == self.default_position.y
    }

    /// Whether the entity is stopped on the ground.
    pub fn is_parked(&self) -> bool {
        self.current_speed == 0.0 && self.is_grounded()
    }

    /// Per-axis proximity: `|Δ| <= bounding_box + 0.5` on every axis.
    pub fn is_player_nearby(&self, pos: Vec3) -> bool {
        let delta = (pos - self.position).abs();
        delta.cmple(self.bounding_box + Vec3::splat(0.5)).all()
    }

    /// Place the entity on `curve` at `time`.
    ///
    /// The curve parameter is `current_speed * (time - start_time)`;
    /// direction is the normalized tangent there.
    pub fn follow_curve(&mut self, curve: &ClosedCurve, time: f32) {
        self.current_time = time;
        let t = self.current_speed * (self.current_time - self.start_time);
        self.position = curve.position(t);
        self.direction = curve.tangent(t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::XZ_AXIS;

    fn jet() -> Entity {
        Entity::new(
            EntityKind::Aircraft(AircraftKind::Jet),
            Vec3::new(-5.25, 0.6, 18.9),
            XZ_AXIS,
            Vec3::splat(2.5),
            Vec3::new(2.75, 0.75, 2.75),
            Vec3::new(0.0, 45.0, 0.0),
        )
        .with_engine(0.5, 0.001)
    }

    #[test]
    fn test_speed_setter_clamps() {
        let mut e = jet();
        e.set_current_speed(2.0);
        assert_eq!(e.current_speed(), 0.5);
        e.set_current_speed(-1.0);
        assert_eq!(e.current_speed(), 0.0);
    }

    #[test]
    fn test_throttle_saturates() {
        let mut e = jet();
        for _ in 0..1000 {
            e.accelerate();
        }
        assert_eq!(e.current_speed(), 0.5);
        for _ in 0..1000 {
            e.decelerate();
        }
        assert_eq!(e.current_speed(), 0.0);
    }

    #[test]
    fn test_static_prop_cannot_move() {
        let mut e = Entity::new(
            EntityKind::Tower,
            Vec3::ZERO,
            Vec3::Z,
            Vec3::ONE,
            Vec3::ONE,
            Vec3::ZERO,
        );
        e.set_current_speed(1.0);
        assert_eq!(e.current_speed(), 0.0);
    }

    #[test]
    fn test_player_nearby_is_per_axis() {
        let e = jet();
        assert!(e.is_player_nearby(Vec3::new(-5.25 + 3.25, 1.6, 18.9)));
        assert!(!e.is_player_nearby(Vec3::new(-5.25 + 3.3, 0.6, 18.9)));
        assert!(!e.is_player_nearby(Vec3::new(-5.25, 1.9, 18.9)));
    }

    #[test]
    fn test_parked_requires_ground_and_zero_speed() {
        let mut e = jet();
        assert!(e.is_parked());
        e.set_current_speed(0.1);
        assert!(!e.is_parked());
        e.set_current_speed(0.0);
        e.position.y += 0.5;
        assert!(!e.is_parked());
    }

    #[test]
    fn test_follow_curve_uses_own_clock() {
        let curve = ClosedCurve::new(vec![
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(10.0, 5.0, 0.0),
            Vec3::new(10.0, 5.0, 10.0),
            Vec3::new(0.0, 5.0, 10.0),
        ])
        .unwrap();
        let mut heli = Entity::new(
            EntityKind::Helicopter,
            Vec3::ZERO,
            Vec3::Z,
            Vec3::splat(2.5),
            Vec3::new(2.5, 1.25, 2.5),
            Vec3::ZERO,
        )
        .with_schedule(0.5, 10.0);

        heli.follow_curve(&curve, 12.0);
        let expected = curve.position(1.0);
        assert!((heli.position - expected).length() < 1e-5);
        assert!((heli.direction.length() - 1.0).abs() < 1e-5);
        assert_eq!(heli.current_time, 12.0);
    }
}
