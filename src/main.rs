//! Grove Dash entry point
//!
//! Startup order matters: settings, then the asset preload gate, then level
//! catalog validation - only after all three succeed does the terminal flip
//! into raw mode and the tick loop start.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor, event, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use grove_dash::input::KeyTracker;
use grove_dash::renderer::{AsciiRenderer, Renderer};
use grove_dash::scheduler::FixedStep;
use grove_dash::sim::{self, Catalog, GameEvent, GameState};
use grove_dash::{Settings, assets, autopilot};

const SETTINGS_PATH: &str = "settings.json";
const ASSETS_DIR: &str = "assets";
const LEVELS_PATH: &str = "levels.json";

fn main() {
    env_logger::init();
    log::info!("Grove Dash starting...");

    let settings = Settings::load_from(Path::new(SETTINGS_PATH));

    // Fail closed: the tick loop never starts with a broken asset set
    let assets = match assets::preload(Path::new(ASSETS_DIR)) {
        Ok(assets) => assets,
        Err(err) => fatal(&err),
    };
    log::info!(
        "{} assets loaded ({} bytes)",
        assets.len(),
        assets.total_bytes()
    );

    let state = GameState::new(load_catalog(Path::new(LEVELS_PATH)));

    let mut out = io::stdout();
    if let Err(err) = terminal::enable_raw_mode() {
        fatal(&err);
    }
    let _ = execute!(out, EnterAlternateScreen, cursor::Hide);

    let result = run(state, &settings);

    // Restore the terminal before reporting anything
    let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = result {
        fatal(&err);
    }
    log::info!("Grove Dash exiting");
}

/// Surface a startup or terminal failure and exit nonzero
fn fatal(err: &dyn std::fmt::Display) -> ! {
    log::error!("{err}");
    eprintln!("could not start: {err}");
    std::process::exit(1);
}

/// Built-in levels, unless a levels.json sits next to the binary.
/// Malformed level data is a configuration error, reported before play.
fn load_catalog(path: &Path) -> Catalog {
    if !path.exists() {
        return Catalog::builtin();
    }
    match fs::read_to_string(path) {
        Ok(json) => match Catalog::from_json(&json) {
            Ok(catalog) => {
                log::info!("loaded {} levels from {}", catalog.len(), path.display());
                catalog
            }
            Err(err) => fatal(&err),
        },
        Err(err) => fatal(&err),
    }
}

fn run(mut state: GameState, settings: &Settings) -> io::Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut renderer = AsciiRenderer::new(settings, seed);
    let mut keys = KeyTracker::default();
    let mut clock = FixedStep::new();
    let mut autopilot_on = false;

    let mut last = Instant::now();
    let mut frames = 0u32;
    let mut fps_window = Instant::now();

    loop {
        while event::poll(Duration::from_millis(0))? {
            keys.handle(&event::read()?);
        }
        if keys.quit_requested() {
            return Ok(());
        }
        if keys.take_autopilot_toggle() {
            autopilot_on = !autopilot_on;
            log::info!("autopilot: {autopilot_on}");
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        for _ in 0..clock.advance(dt) {
            let input = if autopilot_on {
                autopilot::drive(&state.snapshot())
            } else {
                keys.sample()
            };
            let result = sim::tick(&mut state, &input);
            for event in &result.events {
                announce(&mut renderer, event);
            }
        }

        frames += 1;
        if fps_window.elapsed() >= Duration::from_secs(1) {
            renderer.set_fps(frames);
            frames = 0;
            fps_window = now;
        }

        renderer.render(&state.snapshot());
        std::thread::sleep(Duration::from_millis(2));
    }
}

/// Turn tick events into HUD notices. Later events in one tick win, so a
/// catalog clear overrides its own level-complete notice.
fn announce(renderer: &mut AsciiRenderer, event: &GameEvent) {
    match event {
        GameEvent::ExitOpened => renderer.notify("The door is open!"),
        GameEvent::LevelComplete { level } => {
            renderer.notify(&format!("Level {level} complete!"));
        }
        GameEvent::CatalogCleared => {
            renderer.notify("All levels cleared! Starting over...");
        }
        GameEvent::Caught => renderer.notify("Caught! Your acorns scattered..."),
        GameEvent::Collected { .. } => {}
    }
}
