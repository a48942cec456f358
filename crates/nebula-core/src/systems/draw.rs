use glam::Vec2;

use crate::core::arena::BodyArena;
use crate::core::body::BodyKind;
use crate::render::canvas::{Canvas, Rgba};

/// Near-black space backdrop.
pub const BACKGROUND: Rgba = Rgba::new(0.01, 0.01, 0.03, 1.0);
/// Translucent scrim under the page header.
pub const HEADER_OVERLAY: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.35);
/// Trail stroke width.
pub const TRAIL_WIDTH: f32 = 2.0;
/// Trail alpha relative to the body color.
pub const TRAIL_ALPHA: f32 = 0.25;

/// Star glow: radius padding and alpha per layer, outermost first.
const GLOW_LAYERS: [(f32, f32); 3] = [(12.0, 0.03), (8.0, 0.06), (4.0, 0.10)];

pub fn paint_background(canvas: &mut Canvas, width: f32, height: f32) {
    canvas.fill_rect(Vec2::ZERO, width, height, BACKGROUND);
}

/// Draw every live body: trail polyline first, then glow for stars, then the
/// body disc on top.
pub fn draw_bodies(canvas: &mut Canvas, arena: &BodyArena) {
    for body in arena.live() {
        if body.kind == BodyKind::Star && body.trail.len() >= 2 {
            let points: Vec<Vec2> = body.trail.iter().copied().collect();
            canvas.stroke_polyline(&points, TRAIL_WIDTH, body.color.with_alpha(TRAIL_ALPHA));
        }
        if body.kind == BodyKind::Star {
            for (pad, alpha) in GLOW_LAYERS {
                canvas.fill_circle(body.pos, body.radius + pad, body.color.with_alpha(alpha));
            }
        }
        canvas.fill_circle(body.pos, body.radius, body.color);
    }
}

pub fn draw_header_band(canvas: &mut Canvas, width: f32, header_height: f32) {
    canvas.fill_rect(Vec2::ZERO, width, header_height, HEADER_OVERLAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::core::body::{Body, SpawnOrigin};

    fn arena_with(kind: BodyKind) -> BodyArena {
        let mut arena = BodyArena::new();
        let id = arena.next_id();
        arena.spawn(
            Body::new(id, kind, SpawnOrigin::Initial)
                .with_pos(Vec2::new(100.0, 100.0))
                .with_radius(10.0),
        );
        arena
    }

    #[test]
    fn background_and_header_are_one_rect_each() {
        let mut canvas = Canvas::new();
        paint_background(&mut canvas, 1280.0, 720.0);
        assert_eq!(canvas.vertex_count(), 6);
        draw_header_band(&mut canvas, 1280.0, 64.0);
        assert_eq!(canvas.vertex_count(), 12);
    }

    #[test]
    fn empty_arena_draws_nothing() {
        let mut canvas = Canvas::new();
        draw_bodies(&mut canvas, &BodyArena::new());
        assert_eq!(canvas.vertex_count(), 0);
    }

    #[test]
    fn star_draws_more_than_planet() {
        let mut canvas = Canvas::new();
        draw_bodies(&mut canvas, &arena_with(BodyKind::Planet));
        let planet_verts = canvas.vertex_count();
        assert!(planet_verts > 0);

        canvas.clear();
        draw_bodies(&mut canvas, &arena_with(BodyKind::Star));
        assert!(canvas.vertex_count() > planet_verts);
    }

    #[test]
    fn trail_needs_two_points() {
        let mut arena = arena_with(BodyKind::Star);
        arena.at_mut(0).push_trail();

        let mut canvas = Canvas::new();
        draw_bodies(&mut canvas, &arena);
        let one_point = canvas.vertex_count();

        arena.at_mut(0).pos = Vec2::new(120.0, 100.0);
        arena.at_mut(0).push_trail();
        canvas.clear();
        draw_bodies(&mut canvas, &arena);
        assert!(canvas.vertex_count() > one_point);
    }

    #[test]
    fn removed_body_is_not_drawn() {
        let mut arena = arena_with(BodyKind::Planet);
        arena.tombstone(BodyId(0));

        let mut canvas = Canvas::new();
        draw_bodies(&mut canvas, &arena);
        assert_eq!(canvas.vertex_count(), 0);
    }
}
