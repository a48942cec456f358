//! The simulation context: owns the arena, the RNG, the draw surface and the
//! per-frame step that ties every system together.

use glam::Vec2;

use crate::api::config::SimConfig;
use crate::api::types::{ToneEvent, Waveform};
use crate::core::arena::BodyArena;
use crate::core::body::{BodyKind, SpawnOrigin};
use crate::core::rng::Rng;
use crate::input::queue::InputEvent;
use crate::render::canvas::Canvas;
use crate::systems::{boundary, capture, draw, gravity, pointer, spawn, starfield::Starfield};

/// Key code that drives the pointer attraction field (spacebar).
pub const BOOST_KEY: u32 = 32;

/// The whole simulation. Created once at init; the host feeds it input
/// events and calls `step` at the fixed cadence.
pub struct Galaxy {
    config: SimConfig,
    arena: BodyArena,
    rng: Rng,
    canvas: Canvas,
    starfield: Starfield,
    /// Last known pointer position, world coordinates.
    pointer: Vec2,
    /// Whether the boost key is currently held.
    boost: bool,
    tones: Vec<ToneEvent>,
    /// Monotonic clock, advanced by `fixed_dt` per step. Drives the twinkle.
    elapsed: f32,
    frame: u64,
}

impl Galaxy {
    pub fn new(config: SimConfig) -> Self {
        let mut rng = Rng::new(config.seed);
        let starfield = Starfield::new(config.width, config.height, &mut rng);
        let mut galaxy = Self {
            pointer: Vec2::new(config.width * 0.5, config.height * 0.5),
            boost: false,
            arena: BodyArena::new(),
            canvas: Canvas::new(),
            tones: Vec::new(),
            elapsed: 0.0,
            frame: 0,
            starfield,
            rng,
            config,
        };
        galaxy.spawn_initial_system();
        galaxy
    }

    fn spawn_initial_system(&mut self) {
        let x = self.config.width * 0.5;
        let y = self.config.height * 0.45;
        spawn::spawn_system(
            &mut self.arena,
            &mut self.rng,
            &self.config,
            x,
            y,
            SpawnOrigin::Initial,
        );
    }

    /// Apply one input event. Called for each drained event before stepping.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer = Vec2::new(x, y);
                let spawned = spawn::spawn_system(
                    &mut self.arena,
                    &mut self.rng,
                    &self.config,
                    x,
                    y,
                    SpawnOrigin::Pointer,
                );
                if spawned.is_some() {
                    let freq = 220.0 + self.rng.range_f32(0.0, 220.0);
                    self.emit_tone(ToneEvent::new(freq, Waveform::Triangle, 0.2, 0.8));
                }
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::PointerUp { .. } => {}
            InputEvent::KeyDown { key_code } => {
                if key_code == BOOST_KEY {
                    self.boost = true;
                }
            }
            InputEvent::KeyUp { key_code } => {
                if key_code == BOOST_KEY {
                    self.boost = false;
                }
            }
            InputEvent::Resize { width, height } => {
                self.config.width = width;
                self.config.height = height;
                self.starfield.resize(width, height, &mut self.rng);
                log::info!("resized to {}x{}", width, height);
            }
        }
    }

    /// Run one fixed simulation step and rebuild the draw buffer.
    pub fn step(&mut self) {
        self.frame += 1;
        self.elapsed += self.config.fixed_dt;
        let (width, height) = (self.config.width, self.config.height);

        self.arena.prune();

        self.canvas.clear();
        draw::paint_background(&mut self.canvas, width, height);

        self.starfield.tick(width, height, &mut self.rng);
        self.starfield.draw(&mut self.canvas, self.elapsed);

        self.physics_pass();

        draw::draw_bodies(&mut self.canvas, &self.arena);
        draw::draw_header_band(&mut self.canvas, width, self.config.header_height);
    }

    /// One pass over the live bodies, in place over the current collection.
    fn physics_pass(&mut self) {
        let (width, height) = (self.config.width, self.config.height);
        let field_on = pointer::field_active(self.boost, self.pointer, self.config.header_height);

        for index in 0..self.arena.len() {
            if self.arena.at(index).removed {
                continue;
            }

            if self.arena.at(index).captured {
                capture::follow_orbit(&mut self.arena, index);
            } else {
                let pull = gravity::gravity_pull(&self.arena, index);
                self.arena.at_mut(index).vel += pull;
            }

            if field_on {
                if let Some(nudge) = pointer::nudge(self.arena.at(index).pos, self.pointer) {
                    self.arena.at_mut(index).vel += nudge;
                }
            }

            if !self.arena.at(index).captured {
                let body = self.arena.at_mut(index);
                body.pos += body.vel;
                body.vel *= gravity::VELOCITY_DECAY;
            }

            if let Some(parent_id) = capture::roll_capture(&self.arena, index, &mut self.rng) {
                let child_id = self.arena.at(index).id;
                capture::capture(&mut self.arena, child_id, parent_id);
                self.emit_tone(ToneEvent::new(660.0, Waveform::Sine, 0.15, 1.2));
                log::info!("{:?} captured by {:?}", child_id, parent_id);
            }

            let body = self.arena.at_mut(index);
            boundary::apply_boundaries(body, width, height);
            if body.kind == BodyKind::Star {
                body.push_trail();
            }
        }
    }

    fn emit_tone(&mut self, tone: ToneEvent) {
        self.tones.push(tone);
    }

    /// Tones emitted since the last `clear_tones`.
    pub fn tones(&self) -> &[ToneEvent] {
        &self.tones
    }

    /// Clear per-tick transient data. Called by the runner before stepping.
    pub fn clear_tones(&mut self) {
        self.tones.clear();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn arena(&self) -> &BodyArena {
        &self.arena
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SimConfig {
        SimConfig {
            width: 800.0,
            height: 600.0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn init_seeds_one_system() {
        let galaxy = Galaxy::new(small_config());
        assert_eq!(galaxy.arena.live_count(), 7);
        assert_eq!(galaxy.canvas.vertex_count(), 0);
    }

    #[test]
    fn step_rebuilds_the_draw_buffer() {
        let mut galaxy = Galaxy::new(small_config());
        galaxy.step();
        let first = galaxy.canvas.vertex_count();
        assert!(first > 0);
        assert_eq!(galaxy.frame(), 1);

        galaxy.step();
        // The buffer is rebuilt, not appended to.
        let second = galaxy.canvas.vertex_count();
        assert!(second > 0);
        assert!(second < first * 2);
    }

    #[test]
    fn pointer_down_spawns_system_and_tone() {
        let mut galaxy = Galaxy::new(small_config());
        let before = galaxy.arena.live_count();

        galaxy.handle_event(InputEvent::PointerDown { x: 200.0, y: 400.0 });
        assert!(galaxy.arena.live_count() > before);
        assert_eq!(galaxy.tones().len(), 1);
        assert_eq!(galaxy.tones()[0].waveform, Waveform::Triangle);
    }

    #[test]
    fn pointer_down_in_header_is_ignored() {
        let mut galaxy = Galaxy::new(small_config());
        let before = galaxy.arena.live_count();

        galaxy.handle_event(InputEvent::PointerDown { x: 200.0, y: 30.0 });
        assert_eq!(galaxy.arena.live_count(), before);
        assert!(galaxy.tones().is_empty());
    }

    #[test]
    fn boost_key_toggles_field_flag() {
        let mut galaxy = Galaxy::new(small_config());
        assert!(!galaxy.boost);
        galaxy.handle_event(InputEvent::KeyDown { key_code: 32 });
        assert!(galaxy.boost);
        galaxy.handle_event(InputEvent::KeyDown { key_code: 65 });
        assert!(galaxy.boost);
        galaxy.handle_event(InputEvent::KeyUp { key_code: 32 });
        assert!(!galaxy.boost);
    }

    #[test]
    fn active_field_pulls_free_bodies_toward_pointer() {
        let mut galaxy = Galaxy::new(small_config());
        // Park the pointer right of the initial star, hold boost.
        galaxy.handle_event(InputEvent::PointerMove { x: 700.0, y: 270.0 });
        galaxy.handle_event(InputEvent::KeyDown { key_code: 32 });

        let star_id = galaxy
            .arena
            .live()
            .find(|b| b.kind == BodyKind::Star)
            .unwrap()
            .id;
        let vx_before = galaxy.arena.get(star_id).unwrap().vel.x;
        galaxy.step();
        let vx_after = galaxy.arena.get(star_id).unwrap().vel.x;
        assert!(vx_after > vx_before);
    }

    #[test]
    fn resize_updates_bounds_and_starfield() {
        let mut galaxy = Galaxy::new(small_config());
        galaxy.handle_event(InputEvent::Resize { width: 400.0, height: 300.0 });
        assert_eq!(galaxy.config.width, 400.0);
        assert_eq!(galaxy.starfield.len(), 40);
    }

    #[test]
    fn stars_grow_trails_capped() {
        let mut galaxy = Galaxy::new(small_config());
        for _ in 0..40 {
            galaxy.step();
        }
        let star = galaxy
            .arena
            .live()
            .find(|b| b.kind == BodyKind::Star)
            .unwrap();
        assert_eq!(star.trail.len(), crate::core::body::TRAIL_CAP);
    }

    #[test]
    fn same_seed_same_trajectories() {
        let mut a = Galaxy::new(small_config());
        let mut b = Galaxy::new(small_config());
        for _ in 0..120 {
            a.step();
            b.step();
        }
        for (x, y) in a.arena.iter().zip(b.arena.iter()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
    }

    #[test]
    fn long_run_stays_finite_and_in_walls() {
        let mut galaxy = Galaxy::new(small_config());
        galaxy.handle_event(InputEvent::PointerDown { x: 600.0, y: 500.0 });
        for _ in 0..600 {
            galaxy.step();
        }
        for body in galaxy.arena.live() {
            assert!(body.pos.is_finite());
            assert!(body.vel.is_finite());
            assert!(body.pos.x >= boundary::EDGE_MARGIN - 1e-3);
            assert!(body.pos.x <= 800.0 - boundary::EDGE_MARGIN + 1e-3);
            assert!(body.pos.y <= 600.0 - boundary::EDGE_MARGIN + 1e-3);
        }
    }
}
