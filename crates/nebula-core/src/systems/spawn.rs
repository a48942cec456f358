//! System spawning and cap eviction.
//!
//! A "system" is one star plus its starting planets, created in a single
//! call: 6 planets for the startup system, 2..=5 for pointer spawns. Planets
//! begin already captured, parked on distinct orbit rings around their star.
//! When a spawn would push the arena over the configured body cap, the oldest
//! pointer-spawned system is tombstoned whole to make room; the startup
//! system is never evicted.

use glam::Vec2;

use crate::api::config::SimConfig;
use crate::api::types::BodyId;
use crate::core::arena::BodyArena;
use crate::core::body::{Body, BodyKind, SpawnOrigin};
use crate::core::rng::Rng;
use crate::render::canvas::Rgba;

/// Planet count for the startup system.
pub const INITIAL_PLANETS: u32 = 6;
/// Planet count range for pointer spawns (inclusive).
pub const MIN_PLANETS: u32 = 2;
pub const MAX_PLANETS: u32 = 5;
/// Probability that a planet rolls the giant profile.
pub const GIANT_CHANCE: f32 = 0.35;
/// Innermost orbit ring.
pub const ORBIT_BASE: f32 = 44.0;
/// Spacing between consecutive orbit rings.
pub const ORBIT_STEP: f32 = 16.0;

const STAR_GOLD: Rgba = Rgba::rgb(1.0, 0.82, 0.45);
const STAR_ICE: Rgba = Rgba::rgb(0.75, 0.85, 1.0);
const GIANT_AMBER: Rgba = Rgba::rgb(0.93, 0.62, 0.35);
const TERRAN_BLUE: Rgba = Rgba::rgb(0.45, 0.65, 0.95);
const TERRAN_GREEN: Rgba = Rgba::rgb(0.5, 0.85, 0.55);

/// Spawn a star system at (x, y). Returns the star's id, or None when the
/// position lies in the header exclusion band or the body cap blocks it.
pub fn spawn_system(
    arena: &mut BodyArena,
    rng: &mut Rng,
    cfg: &SimConfig,
    x: f32,
    y: f32,
    origin: SpawnOrigin,
) -> Option<BodyId> {
    if y < cfg.header_height {
        log::debug!("spawn at ({:.0}, {:.0}) rejected: header band", x, y);
        return None;
    }

    let planet_count = match origin {
        SpawnOrigin::Initial => INITIAL_PLANETS,
        SpawnOrigin::Pointer => MIN_PLANETS + rng.next_int(MAX_PLANETS - MIN_PLANETS + 1),
    };
    let needed = 1 + planet_count as usize;

    while arena.live_count() + needed > cfg.max_bodies {
        if !evict_oldest_system(arena) {
            log::warn!(
                "spawn at ({:.0}, {:.0}) rejected: body cap {} reached",
                x,
                y,
                cfg.max_bodies
            );
            return None;
        }
    }

    let star_pos = Vec2::new(x, y);
    let star_id = arena.next_id();
    arena.spawn(
        Body::new(star_id, BodyKind::Star, origin)
            .with_pos(star_pos)
            .with_vel(Vec2::new(rng.range_f32(-0.3, 0.3), rng.range_f32(-0.3, 0.3)))
            .with_mass(rng.range_f32(70.0, 95.0))
            .with_radius(rng.range_f32(11.0, 16.0))
            .with_color(match origin {
                SpawnOrigin::Initial => STAR_GOLD,
                SpawnOrigin::Pointer => STAR_ICE,
            }),
    );

    for i in 0..planet_count {
        let giant = rng.chance(GIANT_CHANCE);
        let (mass, radius, color) = if giant {
            (rng.range_f32(10.0, 16.0), rng.range_f32(5.0, 8.0), GIANT_AMBER)
        } else {
            let color = if rng.chance(0.5) { TERRAN_BLUE } else { TERRAN_GREEN };
            (rng.range_f32(3.0, 6.0), rng.range_f32(2.0, 4.0), color)
        };
        let orbit_radius = ORBIT_BASE + i as f32 * ORBIT_STEP;
        let orbit_angle = rng.range_f32(0.0, std::f32::consts::TAU);

        let planet_id = arena.next_id();
        let mut planet = Body::new(planet_id, BodyKind::Planet, origin)
            .with_pos(star_pos + Vec2::new(orbit_angle.cos(), orbit_angle.sin()) * orbit_radius)
            .with_mass(mass)
            .with_radius(radius)
            .with_color(color);
        planet.captured = true;
        planet.parent = Some(star_id);
        planet.orbit_radius = orbit_radius;
        planet.orbit_angle = orbit_angle;
        arena.spawn(planet);

        if let Some(star) = arena.get_mut(star_id) {
            star.children.push(planet_id);
        }
    }

    log::info!(
        "spawned system at ({:.0}, {:.0}): {} planets, {} bodies live",
        x,
        y,
        planet_count,
        arena.live_count()
    );
    Some(star_id)
}

/// Tombstone the oldest live pointer-spawned star together with everything
/// currently orbiting it. Returns false when only the startup system is left.
fn evict_oldest_system(arena: &mut BodyArena) -> bool {
    let root = arena
        .live()
        .filter(|b| b.kind == BodyKind::Star && b.origin == SpawnOrigin::Pointer)
        .min_by_key(|b| b.id.0)
        .map(|b| b.id);
    let root = match root {
        Some(id) => id,
        None => return false,
    };

    let mut queue = vec![root];
    while let Some(id) = queue.pop() {
        if let Some(body) = arena.get(id) {
            queue.extend(body.children.iter().copied());
        }
        arena.tombstone(id);
    }
    log::info!("evicted system rooted at {:?}", root);
    true
}
