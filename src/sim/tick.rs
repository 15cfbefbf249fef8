//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one tick, in a fixed order:
//! player intent, physics for both entities, pursuit steering, then
//! collection / exit / capture outcomes. Deterministic: same state plus the
//! same inputs always produces the same world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Entity, ExitDoor, Facing, GameState};
use super::{collision, level, pursuit};
use crate::aabb_overlap;
use crate::consts::*;

/// Player controls sampled once per tick by the input collaborator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Notable happenings of one tick, surfaced for the presentation layer.
/// All authoritative state lives in `GameState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A collectible was picked up; `score` is the new total
    Collected { index: usize, score: u32 },
    /// Every collectible is taken and the exit just became visible
    ExitOpened,
    /// The given level was finished through the exit
    LevelComplete { level: usize },
    /// The last catalog level was finished; play wrapped back to level 1
    CatalogCleared,
    /// The pursuer caught the player; collection progress was reset
    Caught,
}

/// Result of a tick
#[derive(Debug, Default)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &InputSnapshot) -> TickResult {
    let mut events = Vec::new();
    state.time_ticks += 1;

    apply_intent(state, input);

    let bounds = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
    collision::advance(&mut state.player, &state.platforms, GRAVITY, bounds);
    collision::advance(&mut state.pursuer.body, &state.platforms, GRAVITY, bounds);

    // Steering sets velocity for the next integration step
    pursuit::pursue(&mut state.pursuer, state.player.pos.x);

    resolve_outcomes(state, &mut events);

    TickResult { events }
}

/// Translate the input snapshot into player velocity, facing, and jump.
/// Left wins when both directions are held.
fn apply_intent(state: &mut GameState, input: &InputSnapshot) {
    let player = &mut state.player;
    if input.left {
        player.vel.x = -MOVE_SPEED;
        player.facing = Facing::Left;
    } else if input.right {
        player.vel.x = MOVE_SPEED;
        player.facing = Facing::Right;
    } else {
        player.vel.x = 0.0;
    }
    if input.jump {
        player.jump();
    }
}

/// Collection, exit exposure, transition, and capture - in that order.
/// A transition ends the tick: the capture check never runs against
/// freshly respawned entities.
fn resolve_outcomes(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for (index, collectible) in state.collectibles.iter_mut().enumerate() {
        if !collectible.collected
            && aabb_overlap(
                state.player.pos,
                state.player.size,
                collectible.pos,
                collectible.size(),
            )
        {
            collectible.collected = true;
            state.score += 1;
            log::debug!("collected item {index}, score {}", state.score);
            events.push(GameEvent::Collected {
                index,
                score: state.score,
            });
        }
    }

    // Visibility latches until the next level load; a capture reset while
    // the door is open does not close it again
    let all_collected = state.collectibles.iter().all(|c| c.collected);
    if all_collected && !state.exit.visible {
        state.exit.visible = true;
        log::debug!("all items collected, exit open");
        events.push(GameEvent::ExitOpened);
    }

    if state.exit.visible && door_reached(&state.player, &state.exit) {
        let completed = state.level_index;
        log::info!("level {completed} complete");
        let wrapped = level::advance_level(state);
        events.push(GameEvent::LevelComplete { level: completed });
        if wrapped {
            log::info!("catalog cleared, wrapping to level 1");
            events.push(GameEvent::CatalogCleared);
        }
        return;
    }

    if aabb_overlap(
        state.player.pos,
        state.player.size,
        state.pursuer.body.pos,
        state.pursuer.body.size,
    ) {
        let had_progress = state.score > 0 || state.collectibles.iter().any(|c| c.collected);
        for collectible in &mut state.collectibles {
            collectible.collected = false;
        }
        state.score = 0;
        if had_progress {
            log::debug!("caught by the pursuer, progress reset");
            events.push(GameEvent::Caught);
        }
    }
}

/// The door test compares top-left corner deltas against the player's own
/// size - slightly more permissive than a true AABB overlap. Kept exactly:
/// it sets the observable win-trigger timing.
fn door_reached(player: &Entity, exit: &ExitDoor) -> bool {
    (player.pos.x - exit.pos.x).abs() < player.size.x
        && (player.pos.y - exit.pos.y).abs() < player.size.y
}
