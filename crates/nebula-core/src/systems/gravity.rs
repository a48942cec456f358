use glam::Vec2;

use crate::core::arena::BodyArena;

/// Gravitational constant, tuned for pixel-scale masses.
pub const G: f32 = 0.04;
/// Attractors beyond this distance contribute nothing.
pub const FORCE_CUTOFF: f32 = 500.0;
/// Added to the squared distance so close passes stay bounded.
pub const SOFTENING: f32 = 150.0;
/// Per-step velocity damping applied to free-flying bodies.
pub const VELOCITY_DECAY: f32 = 0.999;

/// Squared distances below this are treated as coincident and skipped.
const MIN_DISTANCE_SQ: f32 = 1e-8;

/// Sum the gravitational pull on the body at `index` from every live body
/// strictly more massive than it, within the force cutoff.
///
/// Attraction is one-way: lighter bodies chase heavier ones, heavier bodies
/// ignore lighter ones. This keeps systems hierarchical instead of collapsing
/// into a mutual tangle.
pub fn gravity_pull(arena: &BodyArena, index: usize) -> Vec2 {
    let body = arena.at(index);
    let mut pull = Vec2::ZERO;

    for other in arena.live() {
        if other.id == body.id || other.mass <= body.mass {
            continue;
        }
        let delta = other.pos - body.pos;
        let dist_sq = delta.length_squared();
        if dist_sq < MIN_DISTANCE_SQ || dist_sq > FORCE_CUTOFF * FORCE_CUTOFF {
            continue;
        }
        let strength = G * body.mass * other.mass / (dist_sq + SOFTENING);
        pull += delta / dist_sq.sqrt() * strength;
    }

    pull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::{Body, BodyKind, SpawnOrigin};

    fn body_at(arena: &mut BodyArena, pos: Vec2, mass: f32) -> usize {
        let id = arena.next_id();
        arena.spawn(
            Body::new(id, BodyKind::Planet, SpawnOrigin::Initial)
                .with_pos(pos)
                .with_mass(mass),
        );
        arena.len() - 1
    }

    #[test]
    fn lighter_body_is_pulled_toward_heavier() {
        let mut arena = BodyArena::new();
        let light = body_at(&mut arena, Vec2::ZERO, 5.0);
        body_at(&mut arena, Vec2::new(100.0, 0.0), 80.0);

        let pull = gravity_pull(&arena, light);
        assert!(pull.x > 0.0);
        assert_eq!(pull.y, 0.0);
    }

    #[test]
    fn heavier_body_ignores_lighter() {
        let mut arena = BodyArena::new();
        let heavy = body_at(&mut arena, Vec2::ZERO, 80.0);
        body_at(&mut arena, Vec2::new(100.0, 0.0), 5.0);

        assert_eq!(gravity_pull(&arena, heavy), Vec2::ZERO);
    }

    #[test]
    fn equal_mass_does_not_attract() {
        let mut arena = BodyArena::new();
        let a = body_at(&mut arena, Vec2::ZERO, 10.0);
        body_at(&mut arena, Vec2::new(50.0, 0.0), 10.0);

        assert_eq!(gravity_pull(&arena, a), Vec2::ZERO);
    }

    #[test]
    fn attractor_beyond_cutoff_ignored() {
        let mut arena = BodyArena::new();
        let light = body_at(&mut arena, Vec2::ZERO, 5.0);
        body_at(&mut arena, Vec2::new(FORCE_CUTOFF + 1.0, 0.0), 80.0);

        assert_eq!(gravity_pull(&arena, light), Vec2::ZERO);
    }

    #[test]
    fn coincident_bodies_stay_finite() {
        let mut arena = BodyArena::new();
        let light = body_at(&mut arena, Vec2::new(7.0, 7.0), 5.0);
        body_at(&mut arena, Vec2::new(7.0, 7.0), 80.0);

        let pull = gravity_pull(&arena, light);
        assert!(pull.is_finite());
        assert_eq!(pull, Vec2::ZERO);
    }

    #[test]
    fn removed_attractor_is_skipped() {
        let mut arena = BodyArena::new();
        let light = body_at(&mut arena, Vec2::ZERO, 5.0);
        let heavy = body_at(&mut arena, Vec2::new(100.0, 0.0), 80.0);
        let heavy_id = arena.at(heavy).id;
        arena.tombstone(heavy_id);

        assert_eq!(gravity_pull(&arena, light), Vec2::ZERO);
    }

    #[test]
    fn softening_bounds_close_pass() {
        let mut arena = BodyArena::new();
        let light = body_at(&mut arena, Vec2::ZERO, 5.0);
        body_at(&mut arena, Vec2::new(0.1, 0.0), 80.0);

        let pull = gravity_pull(&arena, light);
        // At near-zero distance the softening term dominates the denominator.
        let bound = G * 5.0 * 80.0 / SOFTENING;
        assert!(pull.length() <= bound);
    }
}
