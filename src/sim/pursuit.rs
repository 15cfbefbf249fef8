//! Pursuit behavior for the chasing NPC
//!
//! Pure horizontal steering: gravity and landings are handled by the shared
//! collision engine, and the pursuer never jumps.

use super::state::{Facing, Pursuer};

/// Steer the pursuer toward the target's x position.
///
/// Inside the dead-zone the pursuer idles. Facing is mirrored relative to
/// travel (the chaser sprite is drawn pre-flipped), so it faces Left while
/// moving right and vice versa.
pub fn pursue(pursuer: &mut Pursuer, target_x: f32) {
    let distance = target_x - pursuer.body.pos.x;
    if distance.abs() <= pursuer.deadzone {
        pursuer.body.vel.x = 0.0;
    } else if distance > 0.0 {
        pursuer.body.vel.x = pursuer.speed;
        pursuer.body.facing = Facing::Left;
    } else {
        pursuer.body.vel.x = -pursuer.speed;
        pursuer.body.facing = Facing::Right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn pursuer_at(x: f32) -> Pursuer {
        Pursuer::new(Vec2::new(x, 300.0))
    }

    #[test]
    fn test_dead_zone_idles() {
        let mut p = pursuer_at(400.0);
        pursue(&mut p, 400.0 + 49.0);
        assert_eq!(p.body.vel.x, 0.0);

        // Exactly on the threshold still idles
        pursue(&mut p, 400.0 + PURSUIT_DEADZONE);
        assert_eq!(p.body.vel.x, 0.0);
    }

    #[test]
    fn test_chases_outside_dead_zone() {
        let mut p = pursuer_at(400.0);
        pursue(&mut p, 400.0 + 51.0);
        assert_eq!(p.body.vel.x, PURSUER_SPEED);

        pursue(&mut p, 400.0 - 51.0);
        assert_eq!(p.body.vel.x, -PURSUER_SPEED);
    }

    #[test]
    fn test_facing_is_mirrored_from_travel() {
        let mut p = pursuer_at(400.0);
        pursue(&mut p, 600.0);
        assert_eq!(p.body.vel.x, PURSUER_SPEED);
        assert_eq!(p.body.facing, Facing::Left);

        pursue(&mut p, 100.0);
        assert_eq!(p.body.vel.x, -PURSUER_SPEED);
        assert_eq!(p.body.facing, Facing::Right);
    }
}
