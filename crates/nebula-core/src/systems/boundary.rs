use crate::core::body::Body;

/// Inset from the left/right/bottom edges where bodies bounce.
pub const EDGE_MARGIN: f32 = 20.0;
/// Velocity kept after a bounce.
pub const RESTITUTION: f32 = 0.8;
/// Bodies may fly this far above the visible top before being pushed back.
pub const CEILING_OVERSHOOT: f32 = -200.0;
/// Downward acceleration applied per step past the overshoot line.
pub const CEILING_PUSHBACK: f32 = 0.5;

/// Apply the asymmetric world bounds to one body.
///
/// Left, right and bottom are hard walls: the position clamps to the margin
/// and the crossing velocity component reflects, damped by restitution. The
/// top is soft: bodies may overshoot far above the viewport (so orbits are
/// not visually truncated and the header band stays reachable) and only past
/// the overshoot line a gentle constant pushback accrues, with no clamp.
pub fn apply_boundaries(body: &mut Body, width: f32, height: f32) {
    if body.pos.x < EDGE_MARGIN {
        body.pos.x = EDGE_MARGIN;
        body.vel.x = -body.vel.x * RESTITUTION;
    } else if body.pos.x > width - EDGE_MARGIN {
        body.pos.x = width - EDGE_MARGIN;
        body.vel.x = -body.vel.x * RESTITUTION;
    }

    if body.pos.y > height - EDGE_MARGIN {
        body.pos.y = height - EDGE_MARGIN;
        body.vel.y = -body.vel.y * RESTITUTION;
    } else if body.pos.y < CEILING_OVERSHOOT {
        body.vel.y += CEILING_PUSHBACK;
    }
}
