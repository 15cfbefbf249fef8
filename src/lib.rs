//! Grove Dash - a forest collect-and-evade platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collection, pursuit, levels)
//! - `renderer`: Terminal rendering of world-state snapshots
//! - `assets`: One-time sprite preload gate (fail closed)
//! - `settings`: Data-driven presentation preferences
//! - `scheduler`: Fixed-timestep accumulator
//! - `input` / `autopilot`: Producers of per-tick input snapshots

pub mod assets;
pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate (Hz). All speeds below are world units per tick.
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical impulse applied on jump (negative = up)
    pub const JUMP_FORCE: f32 = -15.0;
    /// Player horizontal speed while a move key is held
    pub const MOVE_SPEED: f32 = 5.0;

    /// Entity sizes
    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 60.0);
    pub const PURSUER_SIZE: Vec2 = Vec2::new(80.0, 80.0);
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const EXIT_SIZE: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Pursuer tuning
    pub const PURSUER_SPEED: f32 = 2.0;
    /// Horizontal distance below which the pursuer idles
    pub const PURSUIT_DEADZONE: f32 = 50.0;

    /// Fixed spawn points, shared by every level
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 300.0);
    pub const PURSUER_SPAWN: Vec2 = Vec2::new(700.0, 300.0);

    /// Exit inset from the right world edge
    pub const EXIT_MARGIN: f32 = 20.0;
}

/// Axis-aligned rectangle overlap test used for all collision checks
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}
