//! Read-only world-state snapshot handed to renderers
//!
//! An owned copy, taken after the tick pipeline runs. Renderers (and any
//! future render thread) see a consistent frame with no way to mutate the
//! live simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Collectible, Entity, Facing, GameState, Platform};

/// Pose of a moving entity as the renderer needs it
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityPose {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub airborne: bool,
}

impl From<&Entity> for EntityPose {
    fn from(entity: &Entity) -> Self {
        Self {
            pos: entity.pos,
            size: entity.size,
            facing: entity.facing,
            airborne: entity.airborne,
        }
    }
}

/// Exit door pose and visibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExitPose {
    pub pos: Vec2,
    pub visible: bool,
}

/// One frame of world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current level number (1-based)
    pub level: usize,
    pub score: u32,
    /// Tick counter; renderers derive cosmetic animation phases from it
    pub time_ticks: u64,
    pub player: EntityPose,
    pub pursuer: EntityPose,
    pub exit: ExitPose,
    /// Platforms in catalog order
    pub platforms: Vec<Platform>,
    /// Collectibles in catalog order, with their collected flags
    pub collectibles: Vec<Collectible>,
}

impl GameState {
    /// Copy the current world state for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            level: self.level_index,
            score: self.score,
            time_ticks: self.time_ticks,
            player: EntityPose::from(&self.player),
            pursuer: EntityPose::from(&self.pursuer.body),
            exit: ExitPose {
                pos: self.exit.pos,
                visible: self.exit.visible,
            },
            platforms: self.platforms.clone(),
            collectibles: self.collectibles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Catalog;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(Catalog::builtin());
        state.score = 2;
        state.collectibles[1].collected = true;
        state.exit.visible = true;

        let snap = state.snapshot();
        assert_eq!(snap.level, 1);
        assert_eq!(snap.score, 2);
        assert_eq!(snap.platforms.len(), state.platforms.len());
        assert!(snap.collectibles[1].collected);
        assert!(snap.exit.visible);
        assert_eq!(snap.player.pos, state.player.pos);

        // Mutating the snapshot leaves the live state untouched
        let mut snap = snap;
        snap.collectibles[0].collected = true;
        snap.platforms.clear();
        assert!(!state.collectibles[0].collected);
        assert!(!state.platforms.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Catalog::builtin());
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level, 1);
        assert_eq!(back.collectibles.len(), 3);
    }
}
