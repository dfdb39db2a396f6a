//! Headless Island Flight Driver
//!
//! Run with: `cargo run --bin island_flight [config.json]`
//!
//! Plays a fixed input timeline against the simulation at the configured
//! tick rate: a look from the tower, a walk to the jet, boarding, a
//! full-throttle takeoff and a climbing turn, until the flight ends or the
//! timeline runs out. Frames go to a renderer that only logs what it would
//! draw.
//!
//! Logging: `RUST_LOG` sets the filter (default `info`), `LOG_FORMAT=json`
//! switches to JSON lines.

use std::collections::BTreeMap;
use std::error::Error;

use island_flight_engine::input::KeyCode;
use island_flight_engine::render::{BillboardKind, DrawCall, DrawItem, Renderer};
use island_flight_engine::sim::{Control, Simulation, TickEvent};
use island_flight_engine::player::FlightOutcome;
use island_flight_engine::SimConfig;

/// Ticks to run before giving up on the timeline.
const MAX_TICKS: u32 = 3000;

/// Render (and log) one frame out of this many ticks.
const RENDER_EVERY: u32 = 60;

#[derive(Clone, Copy, Debug)]
enum Input {
    Press(KeyCode),
    Release(KeyCode),
}

/// Inputs keyed by the tick they fire on.
const TIMELINE: &[(u32, Input)] = &[
    (0, Input::Press(KeyCode::F3)),
    (30, Input::Press(KeyCode::F1)),
    (31, Input::Press(KeyCode::A)),
    (61, Input::Release(KeyCode::A)),
    (61, Input::Press(KeyCode::W)),
    (91, Input::Release(KeyCode::W)),
    (92, Input::Press(KeyCode::Enter)),
    (93, Input::Press(KeyCode::W)),
    (320, Input::Press(KeyCode::E)),
    (420, Input::Release(KeyCode::E)),
    (420, Input::Press(KeyCode::D)),
    (510, Input::Release(KeyCode::D)),
];

/// Renderer that tallies draw calls by category.
#[derive(Default)]
struct LoggingRenderer {
    counts: BTreeMap<&'static str, usize>,
    pickable: usize,
}

impl LoggingRenderer {
    fn flush(&mut self, tick: u32) {
        tracing::debug!(tick, pickable = self.pickable, counts = ?self.counts, "frame drawn");
        self.counts.clear();
        self.pickable = 0;
    }
}

impl Renderer for LoggingRenderer {
    fn draw(&mut self, call: &DrawCall) {
        let category = match call.item {
            DrawItem::StaticProp { .. } => "prop",
            DrawItem::Helicopter { .. } => "helicopter",
            DrawItem::Billboard {
                kind: BillboardKind::Explosion,
                ..
            } => "explosion",
            DrawItem::Billboard {
                kind: BillboardKind::GameOver,
                ..
            } => "game_over",
            DrawItem::Skybox { .. } => "skybox",
        };
        *self.counts.entry(category).or_default() += 1;
        if call.pick_id.is_some() {
            self.pickable += 1;
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_config() -> Result<SimConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading config");
            Ok(SimConfig::from_file(&path)?)
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = load_config()?;
    let tick_seconds = config.tick_interval_ms as f32 / 1000.0;
    let mut sim = Simulation::new(config)?;
    let mut renderer = LoggingRenderer::default();

    for tick in 0..MAX_TICKS {
        for (_, input) in TIMELINE.iter().filter(|(at, _)| *at == tick) {
            match *input {
                Input::Press(key) => {
                    if sim.key_pressed(key) == Control::Exit {
                        return Ok(());
                    }
                }
                Input::Release(key) => sim.key_released(key),
            }
        }

        let event = sim.tick(tick as f32 * tick_seconds);

        if tick % RENDER_EVERY == 0 {
            sim.render(&mut renderer);
            renderer.flush(tick);
            tracing::info!(
                tick,
                mode = %sim.mode(),
                position = ?sim.camera().position,
                "status"
            );
        }

        match event {
            TickEvent::Flew(FlightOutcome::Crashed { cause, wreck }) => {
                tracing::info!(tick, ?cause, ?wreck, "flight ended");
                break;
            }
            TickEvent::Frozen => break,
            _ => {}
        }
    }

    sim.render(&mut renderer);
    renderer.flush(MAX_TICKS);
    tracing::info!(
        game_over = sim.is_game_over(),
        explosions = sim.effects().explosions().len(),
        elapsed = sim.elapsed_time(),
        "timeline finished"
    );
    Ok(())
}
