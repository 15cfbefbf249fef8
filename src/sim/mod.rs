//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, no wall-clock reads
//! - No RNG (decorative randomness belongs to the renderer)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod pursuit;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{advance, clamp_to_bounds, resolve_landings};
pub use level::{Catalog, CollectibleSpawn, LevelDef, LevelError};
pub use pursuit::pursue;
pub use snapshot::{EntityPose, ExitPose, Snapshot};
pub use state::{
    Collectible, Entity, ExitDoor, Facing, GameState, Platform, PlatformKind, Pursuer,
};
pub use tick::{GameEvent, InputSnapshot, TickResult, tick};
