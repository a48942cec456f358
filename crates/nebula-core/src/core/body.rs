use std::collections::VecDeque;

use glam::Vec2;

use crate::api::types::BodyId;
use crate::render::canvas::Rgba;

/// Maximum number of stored trail points per body.
pub const TRAIL_CAP: usize = 20;

/// How a body entered the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOrigin {
    /// Part of the system seeded at startup. Never evicted.
    Initial,
    /// Spawned from a pointer press. Evicted oldest-first under cap pressure.
    Pointer,
}

/// Coarse body class. Stars anchor systems and draw glow + trails,
/// planets are the small bodies that get captured into orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

/// Fat body record: one struct carrying motion state, capture state and
/// render attributes.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier. Ids are handed out monotonically and never reused,
    /// so a smaller id always means an earlier spawn.
    pub id: BodyId,
    pub kind: BodyKind,
    pub origin: SpawnOrigin,
    /// Position in world space.
    pub pos: Vec2,
    /// Velocity in world units per step. Only meaningful while free-flying.
    pub vel: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub color: Rgba,
    /// Tombstone flag. Removed bodies are skipped everywhere and swept out
    /// by the arena at the start of the next step.
    pub removed: bool,
    /// True once the body orbits a parent instead of integrating forces.
    pub captured: bool,
    /// Current orbit anchor, if captured.
    pub parent: Option<BodyId>,
    /// Bodies currently orbiting this one.
    pub children: Vec<BodyId>,
    /// Target orbit distance from the parent.
    pub orbit_radius: f32,
    /// Current angle on the orbit, radians.
    pub orbit_angle: f32,
    /// Recent positions, oldest first.
    pub trail: VecDeque<Vec2>,
}

impl Body {
    pub fn new(id: BodyId, kind: BodyKind, origin: SpawnOrigin) -> Self {
        Self {
            id,
            kind,
            origin,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            mass: 1.0,
            radius: 1.0,
            color: Rgba::WHITE,
            removed: false,
            captured: false,
            parent: None,
            children: Vec::new(),
            orbit_radius: 0.0,
            orbit_angle: 0.0,
            trail: VecDeque::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Record the current position in the trail, dropping the oldest point
    /// once the cap is reached.
    pub fn push_trail(&mut self) {
        if self.trail.len() == TRAIL_CAP {
            self.trail.pop_front();
        }
        self.trail.push_back(self.pos);
    }
}
