//! Rendering of world-state snapshots
//!
//! Renderers are read-only consumers: the simulation hands each frame over
//! as an owned `Snapshot` and nothing flows back. Decorative state (drift
//! motes, spin phases) lives entirely on this side of the seam.

pub mod ascii;
pub mod particles;

pub use ascii::AsciiRenderer;
pub use particles::{Mote, MoteField, collectible_spin};

use crate::sim::Snapshot;

/// Draws one snapshot per frame; must not touch the simulation
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}
