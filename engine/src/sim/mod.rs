//! Simulation Orchestrator
//!
//! Owns the scene, the camera, the session and the effects, and drives them
//! one tick at a time from host events:
//!
//! - [`Simulation::tick`] advances the clock, effects and helicopter, then
//!   walks, flies or plays back the scripted camera
//! - [`Simulation::key_pressed`] / [`Simulation::key_released`] latch keys
//!   and run one-shot commands
//! - [`Simulation::pointer_at`] applies mouse look
//! - [`Simulation::pick`] toggles lights and destroys vehicles
//! - [`Simulation::frame`] snapshots the draw list without mutating anything
//!
//! Destroying the possessed aircraft always clears possession in the same
//! call, so the camera never holds a dangling handle.

use glam::Vec3;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::camera::{Camera, CameraMode, Interaction, StaticView, WalkStyle, interact};
use crate::config::{ConfigError, SimConfig};
use crate::input::{CameraSlot, Command, KeyBindings, KeyCode};
use crate::physics::{ClosedCurve, CurveError};
use crate::player::{CrashCause, FlightOutcome, WalkOutcome, fly, walk};
use crate::render::{FlashlightPose, Frame, Renderer, flashlight_pose};
use crate::session::SessionState;
use crate::world::layout::{self, FIRST_PICKABLE_LIGHT, LAST_PICKABLE_LIGHT};
use crate::world::{Effects, Entity, EntityId, Scene, WorldBounds};

/// Window size assumed until the host reports one.
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (800, 600);

/// Errors raised while building a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid scripted curve: {0}")]
    Curve(#[from] CurveError),
}

/// Whether the host should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// What the camera did during a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickEvent {
    Walked(WalkOutcome),
    Flew(FlightOutcome),
    /// A scripted mode placed the camera
    Scripted,
    /// Game over: nothing moved
    Frozen,
}

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    LightToggled { id: u8, on: bool },
    VehicleDestroyed(EntityId),
    Ignored,
}

/// The island simulation.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    bounds: WorldBounds,
    bindings: KeyBindings,
    initial_scene: Scene,
    tour_curve: ClosedCurve,
    scene: Scene,
    camera: Camera,
    session: SessionState,
    effects: Effects,
}

impl Simulation {
    /// Validate `config` and build the island at time zero.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let initial_scene = Scene::new(config.scripted.helicopter_speed, 0.0)?;
        let tour_curve = ClosedCurve::from_slice(&layout::TOUR_CURVE)?;
        let (width, height) = DEFAULT_WINDOW_SIZE;

        let mut camera = Camera::default();
        camera.update_orientation();

        info!(
            entities = initial_scene.iter().count(),
            lights = config.light_count,
            "simulation ready"
        );

        Ok(Self {
            bounds: WorldBounds::from_config(&config.bounds, config.flight.max_altitude),
            bindings: KeyBindings::from_config(&config.bindings),
            scene: initial_scene.clone(),
            initial_scene,
            tour_curve,
            camera,
            session: SessionState::new(config.light_count, width, height),
            effects: Effects::new(config.effects.clone()),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn mode(&self) -> CameraMode {
        self.camera.mode()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn elapsed_time(&self) -> f32 {
        self.session.elapsed_time()
    }

    /// Advance the simulation to `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f32) -> TickEvent {
        self.session.set_elapsed_time(elapsed);
        let now = self.session.elapsed_time();
        self.effects.update(now);
        self.scene.update_helicopter(now);

        match self.camera.mode() {
            CameraMode::Walking(_) => {
                self.camera.update_orientation();
                if self.session.is_game_over() {
                    return TickEvent::Frozen;
                }
                TickEvent::Walked(walk(
                    &mut self.camera,
                    &self.session.keys,
                    &self.scene,
                    &self.bounds,
                    &self.config,
                ))
            }
            CameraMode::Piloting { aircraft, .. } => {
                self.camera.update_orientation();
                if self.session.is_game_over() {
                    return TickEvent::Frozen;
                }
                let outcome = fly(
                    &mut self.camera,
                    &mut self.scene,
                    aircraft,
                    &self.session.keys,
                    &self.bounds,
                    &self.config,
                );
                self.resolve_flight(aircraft, outcome);
                TickEvent::Flew(outcome)
            }
            CameraMode::ScriptedStatic(view) => {
                self.camera.apply_static_view(view);
                TickEvent::Scripted
            }
            CameraMode::ScriptedDynamic(target) => {
                match self.scene.get(target).map(|e| (e.position, e.direction)) {
                    Some((position, heading)) => self.camera.follow(
                        position,
                        heading,
                        self.config.scripted.helicopter_chase_distance,
                        self.config.scripted.helicopter_chase_height,
                    ),
                    None => {
                        self.camera.restore_walking_view(WalkStyle::Grounded);
                        info!(target = %target, "followed entity gone, back to walking");
                    }
                }
                TickEvent::Scripted
            }
            CameraMode::ScriptedTour => {
                self.camera
                    .follow_curve(&self.tour_curve, now, self.config.scripted.tour_speed);
                TickEvent::Scripted
            }
        }
    }

    fn resolve_flight(&mut self, aircraft: EntityId, outcome: FlightOutcome) {
        match outcome {
            FlightOutcome::Crashed { cause, wreck } => {
                self.crash(aircraft, wreck);
                if let CrashCause::Collision(hit) = cause {
                    if hit.kind.is_vehicle() {
                        self.explode(hit.id);
                    }
                }
            }
            FlightOutcome::NoAircraft => {
                let style = self.camera.mode().walk_style().unwrap_or_default();
                self.camera.set_mode(CameraMode::Walking(style));
                warn!(aircraft = %aircraft, "possessed aircraft missing, back to walking");
            }
            FlightOutcome::Stalled(_) | FlightOutcome::Cruising => {}
        }
    }

    /// Lose the possessed aircraft: explosion at the wreck, game-over sign in
    /// front of the camera, flashlight off, motion frozen.
    fn crash(&mut self, aircraft: EntityId, wreck: Vec3) {
        let now = self.session.elapsed_time();
        self.effects.spawn_explosion(wreck, now);
        self.effects
            .show_game_over(self.camera.position, self.camera.direction, now);
        self.session.set_game_over(true);
        self.session.modes.flashlight = false;
        self.destroy_entity(aircraft);
        info!(aircraft = %aircraft, wreck = ?wreck, time = now, "aircraft crashed, game over");
    }

    /// Remove an entity from the scene, ending possession if it was being
    /// flown.
    pub fn destroy_entity(&mut self, id: EntityId) -> Option<Entity> {
        if let CameraMode::Piloting { aircraft, style } = self.camera.mode() {
            if aircraft == id {
                self.camera.set_mode(CameraMode::Walking(style));
            }
        }
        self.scene.destroy(id)
    }

    /// Destroy an entity and leave an explosion where it was.
    fn explode(&mut self, id: EntityId) -> bool {
        match self.destroy_entity(id) {
            Some(entity) => {
                self.effects
                    .spawn_explosion(entity.position, self.session.elapsed_time());
                info!(entity = %id, kind = ?entity.kind, "entity destroyed");
                true
            }
            None => false,
        }
    }

    /// Handle a key press.
    pub fn key_pressed(&mut self, key: KeyCode) -> Control {
        if let Some(command) = self.bindings.command(key) {
            return self.run_command(command);
        }

        if self.accepts_player_input() {
            self.session.keys.movement.handle_key(key, true);
        }
        self.session.keys.look.handle_key(key, true);
        Control::Continue
    }

    /// Handle a key release. Releases always unlatch.
    pub fn key_released(&mut self, key: KeyCode) {
        self.session.keys.movement.handle_key(key, false);
        self.session.keys.look.handle_key(key, false);
    }

    fn accepts_player_input(&self) -> bool {
        self.camera.mode().is_interactive() && !self.session.is_game_over()
    }

    /// Run a one-shot command.
    ///
    /// Exit and restart always run. Camera switches apply their own rules in
    /// [`Simulation::select_camera`]. Everything else needs an interactive
    /// camera and a live session.
    pub fn run_command(&mut self, command: Command) -> Control {
        let camera_switch = matches!(command, Command::SelectCamera(_));
        if !command.is_global() && !camera_switch && !self.accepts_player_input() {
            warn!(?command, mode = %self.camera.mode(), "command ignored");
            return Control::Continue;
        }

        match command {
            Command::Exit => {
                info!("exit requested");
                return Control::Exit;
            }
            Command::Restart => self.restart(),
            Command::SelectCamera(slot) => {
                self.select_camera(slot);
            }
            Command::Interact => {
                let result = interact(
                    &mut self.camera,
                    &self.scene,
                    &self.config.flight,
                    &self.config.look,
                );
                if let Interaction::Mounted(_) = result {
                    self.camera.update_orientation();
                }
            }
            Command::ToggleFlashlight => {
                self.session.modes.flashlight = !self.session.modes.flashlight;
                debug!(on = self.session.modes.flashlight, "flashlight toggled");
            }
            Command::ToggleDay => {
                self.session.modes.day = !self.session.modes.day;
                debug!(day = self.session.modes.day, "day toggled");
            }
            Command::ToggleMist => {
                self.session.modes.mist = !self.session.modes.mist;
                debug!(mist = self.session.modes.mist, "mist toggled");
            }
        }
        Control::Continue
    }

    /// Switch camera mode. Returns whether the mode changed.
    ///
    /// Ignored while piloting or after a crash, when `slot` is already active,
    /// and for the helicopter view once the helicopter is gone.
    pub fn select_camera(&mut self, slot: CameraSlot) -> bool {
        let current = self.camera.mode();
        if current.possessed().is_some() || self.session.is_game_over() {
            warn!(?slot, mode = %current, "camera switch ignored");
            return false;
        }
        if current.matches_slot(slot) {
            return false;
        }
        let helicopter = self.scene.helicopter_id();
        if slot == CameraSlot::Helicopter && !self.scene.contains(helicopter) {
            warn!("helicopter destroyed, follow view unavailable");
            return false;
        }

        self.camera.save_walking_view();
        match slot {
            CameraSlot::GroundedWalk => self.camera.restore_walking_view(WalkStyle::Grounded),
            CameraSlot::FreeWalk => self.camera.restore_walking_view(WalkStyle::Free),
            CameraSlot::Tower => self.enter_static_view(StaticView::Tower),
            CameraSlot::Runway => self.enter_static_view(StaticView::Runway),
            CameraSlot::Helicopter => self
                .camera
                .set_mode(CameraMode::ScriptedDynamic(helicopter)),
            CameraSlot::Tour => {
                self.camera.start_time = self.session.elapsed_time();
                self.camera.set_mode(CameraMode::ScriptedTour);
            }
        }
        info!(from = %current, to = %self.camera.mode(), "camera mode changed");
        true
    }

    fn enter_static_view(&mut self, view: StaticView) {
        self.camera.set_mode(CameraMode::ScriptedStatic(view));
        self.camera.apply_static_view(view);
    }

    /// Mouse look from an absolute pointer position; the host warps the
    /// pointer back to the window center afterwards.
    pub fn pointer_at(&mut self, x: i32, y: i32) {
        let (dx, dy) = self.session.pointer().offset(x, y);
        self.look(dx, dy);
    }

    /// Mouse look from a relative motion event.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) {
        self.look((dx != 0.0).then_some(dx), (dy != 0.0).then_some(dy));
    }

    fn look(&mut self, dx: Option<f32>, dy: Option<f32>) {
        if self.session.is_game_over() {
            return;
        }
        self.camera.apply_pointer_look(dx, dy, &self.config.look);
    }

    /// Window center the host should warp the pointer to.
    pub fn pointer_center(&self) -> (i32, i32) {
        self.session.pointer().center()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.session.resize(width, height);
    }

    /// Act on the pick id the renderer found under the cursor.
    ///
    /// Light ids toggle their light; vehicle ids destroy the vehicle. Ignored
    /// while piloting.
    pub fn pick(&mut self, pick_id: u8) -> PickOutcome {
        if self.camera.possessed().is_some() {
            debug!(pick_id, "pick ignored while piloting");
            return PickOutcome::Ignored;
        }

        if (FIRST_PICKABLE_LIGHT..=LAST_PICKABLE_LIGHT).contains(&pick_id) {
            return match self.session.toggle_light(pick_id as usize) {
                Some(on) => {
                    info!(light = pick_id, on, "light toggled");
                    PickOutcome::LightToggled { id: pick_id, on }
                }
                None => PickOutcome::Ignored,
            };
        }

        let Some(id) = self.scene.vehicle_for_pick(pick_id) else {
            return PickOutcome::Ignored;
        };
        if self.explode(id) {
            PickOutcome::VehicleDestroyed(id)
        } else {
            PickOutcome::Ignored
        }
    }

    /// Tear everything down and rebuild the island.
    ///
    /// The session clock is not reset: elapsed time carries over and the
    /// helicopter loop restarts from the current time.
    pub fn restart(&mut self) {
        let now = self.session.elapsed_time();
        let (width, height) = self.session.pointer().size();

        self.scene = self.initial_scene.clone();
        let helicopter = self.scene.helicopter_id();
        if let Some(entity) = self.scene.get_mut(helicopter) {
            entity.start_time = now;
        }
        self.scene.update_helicopter(now);

        self.camera = Camera::default();
        self.camera.update_orientation();
        self.session = SessionState::new(self.config.light_count, width, height);
        self.session.set_elapsed_time(now);
        self.effects.clear();
        info!(time = now, "simulation restarted");
    }

    pub fn flashlight_pose(&self) -> FlashlightPose {
        flashlight_pose(&self.camera, &self.scene, self.config.flight.flashlight_offset)
    }

    /// Snapshot the current frame.
    pub fn frame(&self) -> Frame {
        Frame::capture(
            &self.camera,
            &self.scene,
            &self.effects,
            &self.session,
            self.config.flight.flashlight_offset,
        )
    }

    /// Capture the current frame and submit it to `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Frame {
        let frame = self.frame();
        frame.submit(renderer);
        frame
    }
}
