//! Autopilot: demo-mode steering
//!
//! Plays from snapshots only, through the same three-boolean input the
//! keyboard produces. Heads for the nearest uncollected collectible, then
//! the exit once it opens, jumping to climb and to slip over the pursuer.

use glam::Vec2;

use crate::sim::{InputSnapshot, Snapshot};

/// Horizontal slack around the target before steering kicks in; prevents
/// oscillating across the target point at full speed
const STEER_SLACK: f32 = 10.0;

/// Jump when the pursuer is this close horizontally
const EVADE_RANGE: f32 = 100.0;

/// Produce this tick's input from the current world snapshot
pub fn drive(snapshot: &Snapshot) -> InputSnapshot {
    let player = &snapshot.player;

    let target = nearest_goal(snapshot);
    let Some(target) = target else {
        return InputSnapshot::default();
    };

    let mut input = InputSnapshot::default();
    let dx = target.x - player.pos.x;
    if dx < -STEER_SLACK {
        input.left = true;
    } else if dx > STEER_SLACK {
        input.right = true;
    }

    // Climb toward targets above; platforms never block from below, so
    // repeated jumps while closing in always find a foothold
    if target.y < player.pos.y && !player.airborne {
        input.jump = true;
    }

    // Hop over the pursuer instead of running through it
    let pursuer_dx = snapshot.pursuer.pos.x - player.pos.x;
    if pursuer_dx.abs() < EVADE_RANGE && !player.airborne {
        input.jump = true;
    }

    input
}

/// Nearest uncollected collectible by horizontal distance, or the exit once
/// everything is collected and it is visible
fn nearest_goal(snapshot: &Snapshot) -> Option<Vec2> {
    let px = snapshot.player.pos.x;
    snapshot
        .collectibles
        .iter()
        .filter(|c| !c.collected)
        .min_by(|a, b| {
            (a.pos.x - px)
                .abs()
                .partial_cmp(&(b.pos.x - px).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| c.pos)
        .or_else(|| snapshot.exit.visible.then_some(snapshot.exit.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Catalog, GameState};

    #[test]
    fn test_steers_toward_nearest_collectible() {
        let mut state = GameState::new(Catalog::builtin());
        // Level 1 collectibles sit at x = 350, 150, 550; from x=100 the
        // nearest is 150, slightly to the right
        state.player.pos = Vec2::new(100.0, 440.0);
        state.pursuer.body.pos = Vec2::new(700.0, 300.0);

        let input = drive(&state.snapshot());
        assert!(input.right);
        assert!(!input.left);
        // Collectible is above: climb
        assert!(input.jump);
    }

    #[test]
    fn test_heads_for_open_exit() {
        let mut state = GameState::new(Catalog::builtin());
        for c in &mut state.collectibles {
            c.collected = true;
        }
        state.exit.visible = true;
        state.player.pos = Vec2::new(100.0, 440.0);
        state.pursuer.body.pos = Vec2::new(400.0, 300.0);

        let input = drive(&state.snapshot());
        // Exit sits near the right world edge
        assert!(input.right);
    }

    #[test]
    fn test_idles_with_nothing_to_do() {
        let mut state = GameState::new(Catalog::builtin());
        for c in &mut state.collectibles {
            c.collected = true;
        }
        // Exit not yet visible this tick
        state.player.pos = Vec2::new(100.0, 440.0);

        let input = drive(&state.snapshot());
        assert_eq!(input, InputSnapshot::default());
    }

    #[test]
    fn test_evade_jump_near_pursuer() {
        let mut state = GameState::new(Catalog::builtin());
        state.player.pos = Vec2::new(300.0, 440.0);
        state.player.airborne = false;
        state.pursuer.body.pos = Vec2::new(360.0, 420.0);

        let input = drive(&state.snapshot());
        assert!(input.jump);
    }
}
