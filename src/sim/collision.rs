//! Physics integration and collision resolution
//!
//! Movement is discrete Euler in world units per tick. Platform resolution
//! is vertical-only and landing-only: a falling entity snaps onto the first
//! platform top it overlaps; platforms never obstruct sideways movement.

use glam::Vec2;

use super::state::{Entity, Platform};
use crate::aabb_overlap;

/// Advance one entity by one tick: gravity, velocity integration, platform
/// landings in catalog order, then the world-bounds clamp.
pub fn advance(entity: &mut Entity, platforms: &[Platform], gravity: f32, bounds: Vec2) {
    entity.vel.y += gravity;
    entity.pos += entity.vel;
    resolve_landings(entity, platforms);
    clamp_to_bounds(entity, bounds);
}

/// Snap a falling entity onto any platform top it overlaps. The first
/// landing zeroes vertical velocity, so later platforms in the list are
/// naturally skipped; level geometry keeps platform tops from overlapping
/// at the same x-range anyway.
pub fn resolve_landings(entity: &mut Entity, platforms: &[Platform]) {
    for platform in platforms {
        if entity.vel.y > 0.0
            && aabb_overlap(entity.pos, entity.size, platform.pos(), platform.size())
        {
            entity.pos.y = platform.y - entity.size.y;
            entity.vel.y = 0.0;
            entity.airborne = false;
        }
    }
}

/// Keep an entity inside the world. The floor behaves like a landing:
/// vertical velocity is zeroed and the airborne flag cleared. The ceiling
/// and side walls only clamp position.
pub fn clamp_to_bounds(entity: &mut Entity, bounds: Vec2) {
    entity.pos.x = entity.pos.x.clamp(0.0, bounds.x - entity.size.x);
    if entity.pos.y < 0.0 {
        entity.pos.y = 0.0;
    }
    if entity.pos.y + entity.size.y > bounds.y {
        entity.pos.y = bounds.y - entity.size.y;
        entity.vel.y = 0.0;
        entity.airborne = false;
    }
}
