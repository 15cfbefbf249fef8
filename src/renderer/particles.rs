//! Decorative drifting motes and spin phases
//!
//! Renderer-local effects seeded from, but never owned by, the simulation.
//! The random walk uses its own seeded RNG so the core stays RNG-free and a
//! given seed replays the same drift.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Base mote size in world units
pub const MOTE_SIZE: f32 = 30.0;

/// One drifting mote
#[derive(Debug, Clone, Copy)]
pub struct Mote {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub angle: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
}

/// A field of motes wandering across the sky
#[derive(Debug)]
pub struct MoteField {
    motes: Vec<Mote>,
    rng: Pcg32,
}

impl MoteField {
    pub fn new(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let motes = (0..count)
            .map(|_| Mote {
                pos: Vec2::new(
                    rng.random_range(0.0..WORLD_WIDTH),
                    rng.random_range(0.0..WORLD_HEIGHT * 0.7),
                ),
                size: MOTE_SIZE + rng.random_range(0.0..10.0),
                speed: 0.2 + rng.random_range(0.0..0.3),
                angle: rng.random_range(0.0..TAU),
                rotation: rng.random_range(0.0..TAU),
                rotation_speed: rng.random_range(-0.01..0.01),
                opacity: 0.6 + rng.random_range(0.0..0.4),
            })
            .collect();
        Self { motes, rng }
    }

    /// Gentle random-walk drift with wrap-around at the world edges
    pub fn update(&mut self) {
        for mote in self.motes.iter_mut() {
            mote.angle += self.rng.random_range(-0.05..0.05);
            mote.pos.x += mote.angle.cos() * mote.speed;
            mote.pos.y += mote.angle.sin() * mote.speed;
            mote.rotation += mote.rotation_speed;

            if mote.pos.x < -mote.size {
                mote.pos.x = WORLD_WIDTH;
            }
            if mote.pos.x > WORLD_WIDTH {
                mote.pos.x = -mote.size;
            }
            if mote.pos.y < -mote.size {
                mote.pos.y = WORLD_HEIGHT;
            }
            if mote.pos.y > WORLD_HEIGHT {
                mote.pos.y = -mote.size;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mote> {
        self.motes.iter()
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }
}

/// Spin phase for uncollected collectibles, derived from the tick counter
/// so every renderer agrees on it without owning animation state
pub fn collectible_spin(time_ticks: u64) -> f32 {
    (time_ticks as f32 * 0.05) % TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_drift() {
        let mut a = MoteField::new(7, 10);
        let mut b = MoteField::new(7, 10);
        for _ in 0..50 {
            a.update();
            b.update();
        }
        for (ma, mb) in a.iter().zip(b.iter()) {
            assert_eq!(ma.pos, mb.pos);
            assert_eq!(ma.rotation, mb.rotation);
        }
    }

    #[test]
    fn test_motes_stay_near_world() {
        let mut field = MoteField::new(42, 15);
        for _ in 0..1000 {
            field.update();
        }
        for mote in field.iter() {
            assert!(mote.pos.x >= -mote.size - 1.0 && mote.pos.x <= WORLD_WIDTH + 1.0);
            assert!(mote.pos.y >= -mote.size - 1.0 && mote.pos.y <= WORLD_HEIGHT + 1.0);
        }
    }

    #[test]
    fn test_spin_phase_advances() {
        let a = collectible_spin(10);
        let b = collectible_spin(11);
        assert!(b > a);
        assert!(collectible_spin(0) == 0.0);
        // Phase stays within one turn
        assert!(collectible_spin(1_000_000) < TAU);
    }
}
