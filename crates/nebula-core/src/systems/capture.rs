//! Orbit capture state machine.
//!
//! Free bodies that linger close to a heavier body get captured into an orbit
//! around it. Capture is probabilistic (a small chance per step while in
//! range) and one-way: there is no escape. A captured body can still be
//! stolen by a third body heavier than its current parent, which is how
//! passing giants strip planets from smaller stars.

use glam::Vec2;

use crate::api::types::BodyId;
use crate::core::arena::BodyArena;
use crate::core::rng::Rng;

/// Capture range as a multiple of the attractor's radius.
pub const CAPTURE_RANGE_FACTOR: f32 = 3.5;
/// Probability per step that an in-range pair transitions to captured.
pub const CAPTURE_CHANCE: f32 = 0.05;
/// Fraction of the distance to the orbit target covered each step.
pub const ORBIT_SMOOTHING: f32 = 0.25;
/// Base angular rate; scaled by 1/sqrt(orbit_radius) so wide orbits turn slower.
pub const ORBIT_RATE: f32 = 0.4;

/// Roll the capture check for the body at `index` against every eligible
/// attractor. Returns the winning attractor's id, or None.
///
/// Eligible means: live, strictly heavier than the body, within
/// `CAPTURE_RANGE_FACTOR` times the attractor's radius, and, if the body is
/// already captured, strictly heavier than its current parent.
pub fn roll_capture(arena: &BodyArena, index: usize, rng: &mut Rng) -> Option<BodyId> {
    let body = arena.at(index);
    let floor_mass = body
        .parent
        .and_then(|pid| arena.get(pid))
        .map(|p| p.mass)
        .unwrap_or(body.mass);

    for other in arena.live() {
        if other.id == body.id || other.mass <= body.mass || other.mass <= floor_mass {
            continue;
        }
        let range = CAPTURE_RANGE_FACTOR * other.radius;
        let dist_sq = (other.pos - body.pos).length_squared();
        if dist_sq < range * range && rng.chance(CAPTURE_CHANCE) {
            return Some(other.id);
        }
    }
    None
}

/// Move `child_id` into orbit around `parent_id`.
///
/// The current separation becomes the orbit radius and the current bearing
/// the starting angle, so the transition is visually seamless. Any previous
/// parent's child list is updated.
pub fn capture(arena: &mut BodyArena, child_id: BodyId, parent_id: BodyId) {
    let old_parent = arena.get(child_id).and_then(|b| b.parent);
    if let Some(old_id) = old_parent {
        if let Some(old) = arena.get_mut(old_id) {
            old.children.retain(|&c| c != child_id);
        }
    }

    let parent_pos = match arena.get(parent_id) {
        Some(p) => p.pos,
        None => return,
    };
    if let Some(child) = arena.get_mut(child_id) {
        let rel = child.pos - parent_pos;
        child.parent = Some(parent_id);
        child.captured = true;
        child.orbit_radius = rel.length();
        child.orbit_angle = rel.y.atan2(rel.x);
    }
    if let Some(parent) = arena.get_mut(parent_id) {
        parent.children.push(child_id);
    }
}

/// Advance the body at `index` along its orbit.
///
/// The angle advances by `ORBIT_RATE / sqrt(orbit_radius)` and the position
/// is smoothed a quarter of the way toward the orbit target each step. A
/// missing or tombstoned parent skips the step; the sweep between frames
/// releases such bodies back to free flight.
pub fn follow_orbit(arena: &mut BodyArena, index: usize) {
    let parent_pos = match arena
        .at(index)
        .parent
        .and_then(|pid| arena.get(pid))
        .filter(|p| !p.removed)
    {
        Some(p) => p.pos,
        None => return,
    };

    let body = arena.at_mut(index);
    body.orbit_angle += ORBIT_RATE / body.orbit_radius.max(1.0).sqrt();
    let target =
        parent_pos + Vec2::new(body.orbit_angle.cos(), body.orbit_angle.sin()) * body.orbit_radius;
    body.pos += (target - body.pos) * ORBIT_SMOOTHING;
}
