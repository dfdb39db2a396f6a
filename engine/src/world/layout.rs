//! Island Layout
//!
//! Spawn literals for every actor, scripted camera poses and the two closed
//! curves (helicopter loop, exhibition tour). Restart rebuilds the scene from
//! these tables.

use glam::Vec3;
use static_assertions::const_assert;

use super::entity::{AircraftKind, Entity, EntityKind};
use crate::physics::{MIN_CONTROL_POINTS, XZ_AXIS};

/// Size of the light on/off table: sun, flashlight, 3 lamps, 3 spot lights,
/// 10 runway lights.
pub const LIGHT_COUNT: usize = 18;

/// Light index of the sun.
pub const SUN_LIGHT: usize = 0;
/// Light index of the flashlight.
pub const FLASHLIGHT: usize = 1;
/// First pickable light id (the first lamp).
pub const FIRST_PICKABLE_LIGHT: u8 = 2;
/// Last pickable light id (the last runway light).
pub const LAST_PICKABLE_LIGHT: u8 = 17;

const_assert!(LAST_PICKABLE_LIGHT as usize == LIGHT_COUNT - 1);

/// Pick ids of the destructible vehicles.
pub const HELICOPTER_PICK_ID: u8 = 40;
pub const JET_PICK_ID: u8 = 41;
pub const FIGHTER_PICK_ID: u8 = 42;
pub const RETRO_PICK_ID: u8 = 43;

/// Default walking camera pose.
pub const CAMERA_DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 1.0, 25.0);
pub const CAMERA_DEFAULT_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const CAMERA_DEFAULT_UP: Vec3 = Vec3::Y;

/// A fixed camera pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticPose {
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
}

/// View from the control tower balcony over the parking apron.
pub const TOWER_VIEW: StaticPose = StaticPose {
    position: Vec3::new(-6.0, 9.5, 30.0),
    direction: Vec3::new(0.38, -0.27, -0.88),
    up: Vec3::Y,
};

/// View from the far runway threshold looking back toward the tower.
pub const RUNWAY_VIEW: StaticPose = StaticPose {
    position: Vec3::new(11.0, 1.5, -44.0),
    direction: Vec3::new(-0.12, 0.05, 0.99),
    up: Vec3::Y,
};

/// Helicopter loop: takes off over the heliport, circles the antenna hill,
/// sweeps down the runway and turns back past the hangars.
pub const HELICOPTER_CURVE: [Vec3; 12] = [
    Vec3::new(-9.75, 6.0, -10.25),
    Vec3::new(-2.0, 9.0, -20.0),
    Vec3::new(-6.0, 14.0, -40.0),
    Vec3::new(-20.0, 12.0, -42.0),
    Vec3::new(-24.0, 10.0, -28.0),
    Vec3::new(-18.0, 9.0, -12.0),
    Vec3::new(-4.0, 10.0, 2.0),
    Vec3::new(10.0, 12.0, 20.0),
    Vec3::new(12.0, 14.0, 40.0),
    Vec3::new(0.0, 12.0, 46.0),
    Vec3::new(-20.0, 11.0, 30.0),
    Vec3::new(-22.0, 8.0, 4.0),
];

/// Exhibition tour: a slow lap at eye-to-roof height around the airport.
pub const TOUR_CURVE: [Vec3; 10] = [
    Vec3::new(0.0, 3.0, 38.0),
    Vec3::new(11.0, 4.0, 30.0),
    Vec3::new(20.0, 5.0, 10.0),
    Vec3::new(20.0, 5.0, -15.0),
    Vec3::new(10.0, 6.0, -38.0),
    Vec3::new(-8.0, 8.0, -42.0),
    Vec3::new(-22.0, 6.0, -22.0),
    Vec3::new(-22.0, 5.0, 0.0),
    Vec3::new(-20.0, 6.0, 22.0),
    Vec3::new(-12.0, 4.0, 40.0),
];

const_assert!(HELICOPTER_CURVE.len() >= MIN_CONTROL_POINTS);
const_assert!(TOUR_CURVE.len() >= MIN_CONTROL_POINTS);

/// Spacing of the runway edge lights along z.
const RUNWAY_LIGHT_SPACING: f32 = 19.76;
const RUNWAY_LIGHT_FIRST_Z: f32 = 39.55;
const RUNWAY_LIGHTS_PER_SIDE: usize = 5;
const RUNWAY_LIGHT_LEFT_X: f32 = 7.6;
const RUNWAY_LIGHT_RIGHT_X: f32 = 14.25;

const LAMP_Z: [f32; 3] = [3.0, 13.25, 23.5];

/// Spot lights on the tower, the heliport and the antenna.
const SPOT_LIGHTS: [Vec3; 3] = [
    Vec3::new(-6.0, 7.4, 32.6),
    Vec3::new(-9.75, 0.0, -10.25),
    Vec3::new(-6.1, 7.89, -33.51),
];

const_assert!(LAMP_Z.len() + SPOT_LIGHTS.len() + 2 * RUNWAY_LIGHTS_PER_SIDE == LIGHT_COUNT - 2);

fn prop(kind: EntityKind, position: Vec3, size: f32, bounding_box: Vec3, yaw: f32) -> Entity {
    Entity::new(
        kind,
        position,
        Vec3::ZERO,
        Vec3::splat(size),
        bounding_box,
        Vec3::new(0.0, yaw, 0.0),
    )
}

pub fn island() -> Entity {
    Entity::new(
        EntityKind::Island,
        Vec3::new(0.0, -6.0, 0.0),
        Vec3::ZERO,
        Vec3::new(75.5, 67.5, 75.5),
        Vec3::ZERO,
        Vec3::ZERO,
    )
}

pub fn runway() -> Entity {
    prop(EntityKind::Runway, Vec3::new(-3.0, 0.0, 0.0), 41.0, Vec3::ZERO, 0.0)
}

pub fn tower() -> Entity {
    prop(
        EntityKind::Tower,
        Vec3::new(-6.0, 4.0, 32.5),
        4.0,
        Vec3::new(1.75, 4.75, 1.75),
        0.0,
    )
}

pub fn antenna() -> Entity {
    prop(
        EntityKind::Antenna,
        Vec3::new(-6.0, 3.95, -33.5),
        4.0,
        Vec3::new(0.5, 4.25, 0.5),
        0.0,
    )
}

/// Front and back hangar.
pub fn hangars() -> [Entity; 2] {
    let bounding_box = Vec3::new(5.25, 5.0, 5.0);
    [
        prop(EntityKind::Hangar, Vec3::new(-14.0, 2.2, 18.5), 5.0, bounding_box, 90.0),
        prop(EntityKind::Hangar, Vec3::new(-14.0, 2.2, 8.0), 5.0, bounding_box, 90.0),
    ]
}

/// Front and back rock formation.
pub fn stones() -> [Entity; 2] {
    [
        prop(
            EntityKind::Stone,
            Vec3::new(-0.5, 0.0, 45.0),
            6.0,
            Vec3::new(5.5, 3.25, 6.25),
            225.0,
        ),
        prop(
            EntityKind::Stone,
            Vec3::new(-17.0, -2.5, -29.5),
            9.0,
            Vec3::new(7.0, 5.25, 9.25),
            10.0,
        ),
    ]
}

/// Parked aircraft, all facing down the XZ diagonal.
pub fn aircraft(kind: AircraftKind) -> Entity {
    let (position, size, bounding_box, angle, max_speed, acceleration) = match kind {
        AircraftKind::Jet => (
            Vec3::new(-5.25, 0.6, 18.9),
            2.5,
            Vec3::new(2.75, 0.75, 2.75),
            Vec3::new(0.0, 45.0, 0.0),
            0.5,
            0.001,
        ),
        AircraftKind::Fighter => (
            Vec3::new(-5.25, 0.81, 12.9),
            2.5,
            Vec3::new(2.5, 0.75, 2.5),
            Vec3::new(0.0, 45.0, 0.0),
            0.7,
            0.002,
        ),
        AircraftKind::Retro => (
            Vec3::new(-5.25, 0.5, 6.9),
            1.5,
            Vec3::new(2.0, 0.75, 2.0),
            Vec3::new(3.0, 45.0, 0.0),
            0.3,
            0.0015,
        ),
    };
    Entity::new(
        EntityKind::Aircraft(kind),
        position,
        XZ_AXIS,
        Vec3::splat(size),
        bounding_box,
        angle,
    )
    .with_engine(max_speed, acceleration)
}

/// The helicopter, scheduled to start its loop at `start_time`.
///
/// Its pose is placed on the curve by the first update.
pub fn helicopter(speed: f32, start_time: f32) -> Entity {
    Entity::new(
        EntityKind::Helicopter,
        Vec3::ZERO,
        Vec3::ZERO,
        Vec3::splat(2.5),
        Vec3::new(2.5, 1.25, 2.5),
        Vec3::ZERO,
    )
    .with_schedule(speed, start_time)
}

/// Lamp posts along the apron. Light ids 2..=4.
pub fn lamps() -> Vec<Entity> {
    LAMP_Z
        .iter()
        .map(|&z| prop(EntityKind::Lamp, Vec3::new(-8.0, 2.0, z), 2.5, Vec3::ZERO, 0.0))
        .collect()
}

/// Spot lights (tower, heliport, antenna) followed by the left and right
/// runway edge lights. Light ids 5..=17.
pub fn spot_lights() -> Vec<Entity> {
    let runway_side = |x: f32| {
        (0..RUNWAY_LIGHTS_PER_SIDE)
            .map(move |i| Vec3::new(x, 0.0, RUNWAY_LIGHT_FIRST_Z - i as f32 * RUNWAY_LIGHT_SPACING))
    };

    SPOT_LIGHTS
        .iter()
        .copied()
        .chain(runway_side(RUNWAY_LIGHT_LEFT_X))
        .chain(runway_side(RUNWAY_LIGHT_RIGHT_X))
        .map(|pos| prop(EntityKind::SpotLight, pos, 0.05, Vec3::ZERO, 0.0))
        .collect()
}
