//! Camera Tests - Walking, Possession and Mode Switching
//!
//! Drives the simulation through its public event API and checks the camera
//! and mode state after each tick.

use glam::Vec3;
use island_flight_engine::camera::{CameraMode, StaticView, WalkStyle};
use island_flight_engine::input::KeyCode;
use island_flight_engine::player::WalkOutcome;
use island_flight_engine::sim::{Control, Simulation, TickEvent};
use island_flight_engine::world::layout::{TOWER_VIEW, RUNWAY_VIEW};
use island_flight_engine::world::{AircraftKind, EntityKind};
use island_flight_engine::SimConfig;

fn sim() -> Simulation {
    Simulation::new(SimConfig::default()).unwrap()
}

fn place_camera(sim: &mut Simulation, position: Vec3) {
    sim.camera_mut().position = position;
}

// ============================================================================
// Walking
// ============================================================================

#[test]
fn test_walk_forward_from_spawn() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::W);
    let event = sim.tick(0.033);

    assert_eq!(event, TickEvent::Walked(WalkOutcome::Moved));
    assert!((sim.camera().position - Vec3::new(0.0, 1.0, 24.9)).length() < 1e-4);
}

#[test]
fn test_wall_rollback_at_tower() {
    let mut sim = sim();
    let start = Vec3::new(-6.0, 1.0, 34.3);
    place_camera(&mut sim, start);
    sim.key_pressed(KeyCode::W);

    match sim.tick(0.033) {
        TickEvent::Walked(WalkOutcome::Blocked(hit)) => assert_eq!(hit.kind, EntityKind::Tower),
        other => panic!("expected a blocked walk, got {other:?}"),
    }
    assert_eq!(sim.camera().position, start);
}

#[test]
fn test_boundary_rejection() {
    let mut sim = sim();
    let start = Vec3::new(26.95, 1.0, 0.0);
    place_camera(&mut sim, start);
    sim.key_pressed(KeyCode::D);

    assert_eq!(sim.tick(0.033), TickEvent::Walked(WalkOutcome::OutOfBounds));
    assert_eq!(sim.camera().position, start);
}

#[test]
fn test_free_walk_ignores_edge() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::F2);
    place_camera(&mut sim, Vec3::new(26.95, 1.0, 0.0));
    sim.key_pressed(KeyCode::D);

    assert_eq!(sim.tick(0.033), TickEvent::Walked(WalkOutcome::Moved));
    assert!(sim.camera().position.x > 27.0);
}

#[test]
fn test_release_stops_walking() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::W);
    sim.tick(0.033);
    sim.key_released(KeyCode::W);
    let before = sim.camera().position;

    assert_eq!(sim.tick(0.066), TickEvent::Walked(WalkOutcome::Idle));
    assert_eq!(sim.camera().position, before);
}

#[test]
fn test_pointer_look() {
    let mut sim = sim();
    let (cx, cy) = sim.pointer_center();
    sim.pointer_at(cx + 10, cy);
    assert!((sim.camera().yaw - 1.0).abs() < 1e-5);
    assert_eq!(sim.camera().pitch, 0.0);

    sim.pointer_at(cx, cy + 50);
    assert!((sim.camera().pitch - 5.0).abs() < 1e-5);
}

#[test]
fn test_pointer_look_frozen_after_game_over() {
    let mut sim = sim();
    let (cx, cy) = sim.pointer_center();
    place_camera(&mut sim, Vec3::new(-5.25, 1.0, 21.0));
    sim.key_pressed(KeyCode::Enter);

    let jet = sim.scene().aircraft_id(AircraftKind::Jet);
    let plane = sim.scene_mut().get_mut(jet).unwrap();
    plane.position = Vec3::new(30.5, 0.6, 0.0);
    plane.direction = Vec3::X;
    plane.set_current_speed(0.2);
    sim.tick(0.033);
    assert!(sim.is_game_over());

    let yaw = sim.camera().yaw;
    sim.pointer_at(cx + 40, cy);
    assert_eq!(sim.camera().yaw, yaw);
}

// ============================================================================
// Possession
// ============================================================================

#[test]
fn test_mount_unmount_round_trip() {
    let mut sim = sim();
    place_camera(&mut sim, Vec3::new(-5.25, 1.0, 21.0));
    let jet = sim.scene().aircraft_id(AircraftKind::Jet);

    sim.key_pressed(KeyCode::Enter);
    assert_eq!(sim.camera().possessed(), Some(jet));
    assert!((sim.camera().yaw - 135.0).abs() < 1e-3);

    // Idle ticks keep the jet parked
    for i in 1..=5 {
        sim.tick(i as f32 * 0.033);
    }
    assert!(sim.scene().get(jet).unwrap().is_parked());

    sim.key_pressed(KeyCode::Enter);
    assert_eq!(sim.mode(), CameraMode::Walking(WalkStyle::Grounded));

    let plane = sim.scene().get(jet).unwrap();
    let expected = plane.position - 4.0 * plane.direction;
    assert!((sim.camera().position - expected).length() < 1e-4);
}

#[test]
fn test_mount_from_free_walk_returns_to_free_walk() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::F2);
    place_camera(&mut sim, Vec3::new(-5.25, 1.0, 21.0));

    sim.key_pressed(KeyCode::Enter);
    assert!(sim.camera().possessed().is_some());
    sim.key_pressed(KeyCode::Enter);
    assert_eq!(sim.mode(), CameraMode::Walking(WalkStyle::Free));
}

#[test]
fn test_interact_out_of_range_keeps_walking() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::Enter);
    assert_eq!(sim.mode(), CameraMode::Walking(WalkStyle::Grounded));
}

#[test]
fn test_boarding_order_prefers_jet_over_fighter() {
    let mut sim = sim();
    // Between jet (z 18.9) and fighter (z 12.9): both in reach
    place_camera(&mut sim, Vec3::new(-5.25, 1.0, 15.8));
    sim.key_pressed(KeyCode::Enter);
    let jet = sim.scene().aircraft_id(AircraftKind::Jet);
    assert_eq!(sim.camera().possessed(), Some(jet));
}

#[test]
fn test_board_retro() {
    let mut sim = sim();
    place_camera(&mut sim, Vec3::new(-5.25, 1.0, 8.0));
    sim.key_pressed(KeyCode::Enter);
    let retro = sim.scene().aircraft_id(AircraftKind::Retro);
    assert_eq!(sim.camera().possessed(), Some(retro));
}

// ============================================================================
// Camera modes
// ============================================================================

#[test]
fn test_static_views() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::F3);
    assert_eq!(sim.mode(), CameraMode::ScriptedStatic(StaticView::Tower));
    assert_eq!(sim.tick(0.033), TickEvent::Scripted);
    assert_eq!(sim.camera().position, TOWER_VIEW.position);

    sim.key_pressed(KeyCode::F4);
    sim.tick(0.066);
    assert_eq!(sim.camera().position, RUNWAY_VIEW.position);
}

#[test]
fn test_walking_pose_survives_scripted_detour() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::W);
    for i in 1..=10 {
        sim.tick(i as f32 * 0.033);
    }
    sim.key_released(KeyCode::W);
    let walked_to = sim.camera().position;

    sim.key_pressed(KeyCode::F6);
    sim.tick(0.5);
    assert_ne!(sim.camera().position, walked_to);

    sim.key_pressed(KeyCode::F1);
    assert_eq!(sim.mode(), CameraMode::Walking(WalkStyle::Grounded));
    assert_eq!(sim.camera().position, walked_to);
}

#[test]
fn test_mode_keys_ignored_while_piloting() {
    let mut sim = sim();
    place_camera(&mut sim, Vec3::new(-5.25, 1.0, 21.0));
    sim.key_pressed(KeyCode::Enter);
    let mode = sim.mode();

    sim.key_pressed(KeyCode::F3);
    sim.key_pressed(KeyCode::F6);
    assert_eq!(sim.mode(), mode);
}

#[test]
fn test_reselecting_active_mode_is_noop() {
    let mut sim = sim();
    sim.tick(2.0);
    sim.key_pressed(KeyCode::F6);
    let start = sim.camera().start_time;
    sim.tick(4.0);
    sim.key_pressed(KeyCode::F6);
    assert_eq!(sim.camera().start_time, start);
}

#[test]
fn test_player_commands_ignored_in_scripted_mode() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::F3);
    sim.key_pressed(KeyCode::F);
    assert!(!sim.session().modes.flashlight);
}

#[test]
fn test_global_commands_run_in_scripted_mode() {
    let mut sim = sim();
    sim.key_pressed(KeyCode::F6);
    assert_eq!(sim.mode(), CameraMode::ScriptedTour);

    assert_eq!(sim.key_pressed(KeyCode::R), Control::Continue);
    assert_eq!(sim.mode(), CameraMode::Walking(WalkStyle::Grounded));

    sim.key_pressed(KeyCode::F3);
    assert_eq!(sim.key_pressed(KeyCode::Escape), Control::Exit);
}

// ============================================================================
// Configured bindings
// ============================================================================

#[test]
fn test_configured_bindings_drive_commands() {
    let config =
        SimConfig::from_json_str(r#"{ "bindings": { "flashlight": "F6", "tour": "F" } }"#).unwrap();
    let mut sim = Simulation::new(config).unwrap();

    sim.key_pressed(KeyCode::F6);
    assert!(sim.session().modes.flashlight);
    assert_eq!(sim.mode(), CameraMode::Walking(WalkStyle::Grounded));

    sim.key_pressed(KeyCode::F);
    assert_eq!(sim.mode(), CameraMode::ScriptedTour);
}
