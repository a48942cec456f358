//! Drifting background starfield.
//!
//! Decorative points behind the physics bodies: they drift slowly, wrap back
//! in by re-randomizing when they leave the viewport, and twinkle on a
//! per-point phase. They never interact with gravity or input.

use glam::Vec2;

use crate::core::rng::Rng;
use crate::render::canvas::{Canvas, Rgba};

/// Upper bound on starfield points regardless of viewport width.
pub const MAX_POINTS: usize = 150;
/// Twinkle frequency in radians per second of elapsed time.
pub const TWINKLE_SPEED: f32 = 2.0;

const TINT: Rgba = Rgba::new(88.0 / 255.0, 101.0 / 255.0, 242.0 / 255.0, 1.0);

/// One background point.
#[derive(Debug, Clone)]
struct StarPoint {
    pos: Vec2,
    radius: f32,
    drift: Vec2,
    opacity: f32,
    phase: f32,
}

impl StarPoint {
    fn random(width: f32, height: f32, rng: &mut Rng) -> Self {
        Self {
            pos: Vec2::new(rng.range_f32(0.0, width), rng.range_f32(0.0, height)),
            radius: rng.range_f32(0.5, 2.0),
            drift: Vec2::new(rng.range_f32(-0.25, 0.25), rng.range_f32(-0.25, 0.25)),
            opacity: rng.range_f32(0.1, 0.6),
            phase: rng.range_f32(0.0, std::f32::consts::TAU),
        }
    }
}

/// The full point set, sized from the viewport width.
pub struct Starfield {
    points: Vec<StarPoint>,
}

impl Starfield {
    pub fn new(width: f32, height: f32, rng: &mut Rng) -> Self {
        let count = Self::target_count(width);
        let points = (0..count).map(|_| StarPoint::random(width, height, rng)).collect();
        Self { points }
    }

    /// One point per 10 units of width, capped.
    fn target_count(width: f32) -> usize {
        ((width / 10.0) as usize).min(MAX_POINTS)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drift all points; points that left the viewport are re-rolled inside it.
    pub fn tick(&mut self, width: f32, height: f32, rng: &mut Rng) {
        for p in &mut self.points {
            p.pos += p.drift;
            let out = p.pos.x < 0.0 || p.pos.x > width || p.pos.y < 0.0 || p.pos.y > height;
            if out {
                *p = StarPoint::random(width, height, rng);
            }
        }
    }

    /// Adjust the point count to a new viewport. Surviving points keep their
    /// state; out-of-bounds ones are recycled by the next tick.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut Rng) {
        let target = Self::target_count(width);
        self.points.truncate(target);
        while self.points.len() < target {
            self.points.push(StarPoint::random(width, height, rng));
        }
    }

    /// Draw every point as a filled disc, twinkling on the elapsed clock.
    pub fn draw(&self, canvas: &mut Canvas, elapsed: f32) {
        for p in &self.points {
            let twinkle = 0.6 + 0.4 * (elapsed * TWINKLE_SPEED + p.phase).sin();
            canvas.fill_circle(p.pos, p.radius, TINT.with_alpha(p.opacity * twinkle));
        }
    }
}
