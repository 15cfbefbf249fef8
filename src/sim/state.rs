//! Game state and core simulation types
//!
//! Everything the per-tick pipeline reads and writes lives here. All state
//! is plain data with serde derives so runs can be captured for diagnosis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{self, Catalog};
use crate::consts::*;

/// Horizontal facing, used by renderers for sprite flipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Static level geometry. Unobstructive sideways; entities land on top only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: PlatformKind,
}

/// Each level has exactly one `Ground` platform; it anchors the exit door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Ground,
    Floating,
}

impl Platform {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// A live collectible. `collected` flips to true on pickup and reverts only
/// through the capture penalty or a level (re)load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub collected: bool,
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            collected: false,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::splat(COLLECTIBLE_SIZE)
    }
}

/// The level exit. Hidden until every collectible is taken, then latched
/// visible until the next level loads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExitDoor {
    pub pos: Vec2,
    pub visible: bool,
}

impl ExitDoor {
    /// Anchor the door on the ground platform, inset from the right edge
    pub fn place(&mut self, ground_y: f32) {
        self.pos = Vec2::new(WORLD_WIDTH - EXIT_SIZE - EXIT_MARGIN, ground_y - EXIT_SIZE);
        self.visible = false;
    }
}

/// A moving body: the player or the pursuer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    /// Set while off the ground; gates the jump impulse
    pub airborne: bool,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, facing: Facing) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            facing,
            airborne: false,
        }
    }

    /// Apply the jump impulse if grounded. Called before gravity integration
    /// within the same tick.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel.y = JUMP_FORCE;
            self.airborne = true;
        }
    }
}

/// The chasing NPC: an entity plus its pursuit tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pursuer {
    pub body: Entity,
    pub speed: f32,
    pub deadzone: f32,
}

impl Pursuer {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Entity::new(pos, PURSUER_SIZE, Facing::Left),
            speed: PURSUER_SPEED,
            deadzone: PURSUIT_DEADZONE,
        }
    }
}

/// Complete simulation state, advanced once per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Validated level templates; read-only after construction
    pub catalog: Catalog,
    /// Current level number (1-based, wraps past the catalog end)
    pub level_index: usize,
    /// Collectibles taken in the current attempt
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live copy of the active level's platforms
    pub platforms: Vec<Platform>,
    /// Live copy of the active level's collectibles
    pub collectibles: Vec<Collectible>,
    pub exit: ExitDoor,
    pub player: Entity,
    pub pursuer: Pursuer,
}

impl GameState {
    /// Create a new game on level 1 of the given catalog
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            catalog,
            level_index: 1,
            score: 0,
            time_ticks: 0,
            platforms: Vec::new(),
            collectibles: Vec::new(),
            exit: ExitDoor::default(),
            player: Entity::new(PLAYER_SPAWN, PLAYER_SIZE, Facing::Right),
            pursuer: Pursuer::new(PURSUER_SPAWN),
        };
        level::load_level(&mut state, 1);
        state
    }

    /// Number of collectibles not yet taken this attempt
    pub fn remaining(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_only_when_grounded() {
        let mut e = Entity::new(Vec2::new(0.0, 0.0), PLAYER_SIZE, Facing::Right);
        e.jump();
        assert_eq!(e.vel.y, JUMP_FORCE);
        assert!(e.airborne);

        // A second jump mid-air must not re-apply the impulse
        e.vel.y = -3.0;
        e.jump();
        assert_eq!(e.vel.y, -3.0);
    }

    #[test]
    fn test_exit_door_placement() {
        let mut door = ExitDoor {
            pos: Vec2::ZERO,
            visible: true,
        };
        door.place(500.0);
        assert_eq!(door.pos.x, WORLD_WIDTH - EXIT_SIZE - EXIT_MARGIN);
        assert_eq!(door.pos.y, 500.0 - EXIT_SIZE);
        assert!(!door.visible);
    }

    #[test]
    fn test_new_game_starts_on_level_one() {
        let state = GameState::new(Catalog::builtin());
        assert_eq!(state.level_index, 1);
        assert_eq!(state.score, 0);
        assert!(!state.exit.visible);
        assert_eq!(state.player.pos, PLAYER_SPAWN);
        assert_eq!(state.pursuer.body.pos, PURSUER_SPAWN);
        assert!(!state.platforms.is_empty());
        assert!(state.collectibles.iter().all(|c| !c.collected));
    }
}
