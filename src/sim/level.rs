//! Level catalog: hand-authored geometry templates and level switching
//!
//! Levels are read-only templates. Loading one copies its platforms and
//! collectibles into the live state so a later replay starts fresh.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Collectible, Entity, Facing, GameState, Platform, PlatformKind, Pursuer};
use crate::consts::*;

/// Configuration errors, raised when a catalog is built - never mid-tick
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {index} has {count} ground platforms, expected exactly one")]
    GroundCount { index: usize, count: usize },
    #[error("level catalog has no levels")]
    Empty,
    #[error("malformed level catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Spawn position of a collectible within a level template
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectibleSpawn {
    pub x: f32,
    pub y: f32,
}

impl CollectibleSpawn {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One level template: ordered platforms plus collectible spawn points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<CollectibleSpawn>,
}

impl LevelDef {
    /// The unique ground platform, if the template is well-formed
    pub fn ground(&self) -> Option<&Platform> {
        self.platforms
            .iter()
            .find(|p| p.kind == PlatformKind::Ground)
    }
}

/// A validated, ordered sequence of level templates.
///
/// Construction checks every template (exactly one ground platform each), so
/// level loading never has to handle malformed geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelDef>", into = "Vec<LevelDef>")]
pub struct Catalog {
    levels: Vec<LevelDef>,
    /// Ground-platform y per level, resolved during validation
    ground_ys: Vec<f32>,
}

impl TryFrom<Vec<LevelDef>> for Catalog {
    type Error = LevelError;

    fn try_from(levels: Vec<LevelDef>) -> Result<Self, Self::Error> {
        Catalog::new(levels)
    }
}

impl From<Catalog> for Vec<LevelDef> {
    fn from(catalog: Catalog) -> Self {
        catalog.levels
    }
}

impl Catalog {
    /// Validate a set of level templates
    pub fn new(levels: Vec<LevelDef>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        let mut ground_ys = Vec::with_capacity(levels.len());
        for (i, level) in levels.iter().enumerate() {
            let grounds: Vec<&Platform> = level
                .platforms
                .iter()
                .filter(|p| p.kind == PlatformKind::Ground)
                .collect();
            match grounds.as_slice() {
                [only] => ground_ys.push(only.y),
                _ => {
                    return Err(LevelError::GroundCount {
                        index: i + 1,
                        count: grounds.len(),
                    });
                }
            }
        }
        Ok(Self { levels, ground_ys })
    }

    /// Parse a catalog from its JSON form (an array of level records).
    /// Validation runs as part of deserialization.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Template for a 1-based level number
    pub fn level(&self, index: usize) -> &LevelDef {
        &self.levels[index - 1]
    }

    /// Ground-platform y for a 1-based level number
    pub fn ground_y(&self, index: usize) -> f32 {
        self.ground_ys[index - 1]
    }

    /// The three built-in forest levels
    pub fn builtin() -> Self {
        let levels = vec![
            LevelDef {
                platforms: vec![
                    ground(0.0, 500.0, 800.0),
                    floating(300.0, 400.0, 200.0),
                    floating(100.0, 300.0, 200.0),
                    floating(500.0, 200.0, 200.0),
                ],
                collectibles: spawns(&[(350.0, 350.0), (150.0, 250.0), (550.0, 150.0)]),
            },
            LevelDef {
                platforms: vec![
                    ground(0.0, 500.0, 800.0),
                    floating(200.0, 400.0, 150.0),
                    floating(450.0, 400.0, 150.0),
                    floating(100.0, 300.0, 150.0),
                    floating(550.0, 300.0, 150.0),
                    floating(325.0, 200.0, 150.0),
                ],
                collectibles: spawns(&[
                    (275.0, 350.0),
                    (525.0, 350.0),
                    (175.0, 250.0),
                    (625.0, 250.0),
                    (400.0, 150.0),
                ]),
            },
            LevelDef {
                platforms: vec![
                    ground(0.0, 500.0, 800.0),
                    floating(150.0, 400.0, 100.0),
                    floating(350.0, 400.0, 100.0),
                    floating(550.0, 400.0, 100.0),
                    floating(250.0, 300.0, 100.0),
                    floating(450.0, 300.0, 100.0),
                    floating(350.0, 200.0, 100.0),
                ],
                collectibles: spawns(&[
                    (200.0, 350.0),
                    (400.0, 350.0),
                    (600.0, 350.0),
                    (300.0, 250.0),
                    (500.0, 250.0),
                    (400.0, 150.0),
                ]),
            },
        ];
        Self::new(levels).expect("built-in levels are well-formed")
    }
}

fn ground(x: f32, y: f32, width: f32) -> Platform {
    Platform {
        x,
        y,
        width,
        height: PLATFORM_HEIGHT,
        kind: PlatformKind::Ground,
    }
}

fn floating(x: f32, y: f32, width: f32) -> Platform {
    Platform {
        x,
        y,
        width,
        height: PLATFORM_HEIGHT,
        kind: PlatformKind::Floating,
    }
}

fn spawns(points: &[(f32, f32)]) -> Vec<CollectibleSpawn> {
    points
        .iter()
        .map(|&(x, y)| CollectibleSpawn { x, y })
        .collect()
}

/// Load a level (1-based) into the live state: fresh geometry copy, fresh
/// collectibles, entities back at their spawns, exit hidden and re-anchored.
pub fn load_level(state: &mut GameState, index: usize) {
    let def = state.catalog.level(index);
    state.platforms = def.platforms.clone();
    state.collectibles = def
        .collectibles
        .iter()
        .map(|s| Collectible::new(s.pos()))
        .collect();
    state.level_index = index;
    state.score = 0;
    state.player = Entity::new(PLAYER_SPAWN, PLAYER_SIZE, Facing::Right);
    state.pursuer = Pursuer::new(PURSUER_SPAWN);
    state.exit.place(state.catalog.ground_y(index));
    log::info!(
        "level {} loaded: {} platforms, {} collectibles",
        index,
        state.platforms.len(),
        state.collectibles.len()
    );
}

/// Advance to the next level, wrapping to level 1 past the catalog end.
/// Returns true when the wrap happened (the whole catalog was cleared).
pub fn advance_level(state: &mut GameState) -> bool {
    let mut next = state.level_index + 1;
    let wrapped = next > state.catalog.len();
    if wrapped {
        next = 1;
    }
    load_level(state, next);
    wrapped
}
