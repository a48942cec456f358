use crate::api::types::BodyId;
use crate::core::body::Body;

/// Flat body storage backed by a Vec.
/// Designed for small-to-medium body counts (hundreds, not millions).
pub struct BodyArena {
    bodies: Vec<Body>,
    next_id: u32,
}

impl BodyArena {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(256),
            next_id: 0,
        }
    }

    /// Hand out the next body id. Ids grow monotonically and are never
    /// reused, even after removal.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a body to the arena.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Get a reference to a body by id.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by id.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Index of a body in the backing Vec, if present.
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn at(&self, index: usize) -> &Body {
        &self.bodies[index]
    }

    pub fn at_mut(&mut self, index: usize) -> &mut Body {
        &mut self.bodies[index]
    }

    /// Iterate over all bodies, tombstoned ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably, tombstoned ones included.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Iterate over bodies that have not been tombstoned.
    pub fn live(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| !b.removed)
    }

    /// Number of bodies that have not been tombstoned.
    pub fn live_count(&self) -> usize {
        self.bodies.iter().filter(|b| !b.removed).count()
    }

    /// Number of stored bodies, tombstoned ones included.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Mark a body as removed. The slot stays in place until the next
    /// `prune`, so indices held by an in-flight pass stay valid. The parent's
    /// child list is cleaned up immediately.
    pub fn tombstone(&mut self, id: BodyId) {
        let parent = match self.get_mut(id) {
            Some(body) => {
                body.removed = true;
                body.parent.take()
            }
            None => None,
        };
        if let Some(pid) = parent {
            if let Some(parent_body) = self.get_mut(pid) {
                parent_body.children.retain(|&c| c != id);
            }
        }
    }

    /// Drop tombstoned bodies and scrub dangling references: children lists
    /// keep only live ids, and a parent link to a dead body becomes None.
    pub fn prune(&mut self) {
        let mut i = 0;
        while i < self.bodies.len() {
            if self.bodies[i].removed {
                self.bodies.swap_remove(i);
            } else {
                i += 1;
            }
        }
        let live: Vec<BodyId> = self.bodies.iter().map(|b| b.id).collect();
        for body in &mut self.bodies {
            body.children.retain(|c| live.contains(c));
            if let Some(pid) = body.parent {
                if !live.contains(&pid) {
                    body.parent = None;
                    body.captured = false;
                }
            }
        }
    }
}

impl Default for BodyArena {
    fn default() -> Self {
        Self::new()
    }
}
