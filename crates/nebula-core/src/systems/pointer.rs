use glam::Vec2;

/// Bodies within this distance of the pointer feel the field.
pub const FIELD_RADIUS: f32 = 400.0;
/// Velocity added per step toward the pointer, independent of mass.
pub const FIELD_STRENGTH: f32 = 0.2;

/// The field is live only while the boost key is held and the pointer sits
/// below the header band.
pub fn field_active(boost: bool, pointer: Vec2, header_height: f32) -> bool {
    boost && pointer.y > header_height
}

/// Velocity nudge the field applies to a body at `body_pos`, if any.
/// Fixed magnitude toward the pointer; None outside the radius or when the
/// body sits on the pointer.
pub fn nudge(body_pos: Vec2, pointer: Vec2) -> Option<Vec2> {
    let delta = pointer - body_pos;
    let dist_sq = delta.length_squared();
    if dist_sq < 1e-8 || dist_sq > FIELD_RADIUS * FIELD_RADIUS {
        return None;
    }
    Some(delta / dist_sq.sqrt() * FIELD_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_requires_boost_and_clear_of_header() {
        let below = Vec2::new(100.0, 200.0);
        let inside_header = Vec2::new(100.0, 30.0);
        assert!(field_active(true, below, 64.0));
        assert!(!field_active(false, below, 64.0));
        assert!(!field_active(true, inside_header, 64.0));
    }

    #[test]
    fn nudge_has_fixed_magnitude_toward_pointer() {
        let n = nudge(Vec2::new(0.0, 0.0), Vec2::new(300.0, 0.0)).unwrap();
        assert!((n.length() - FIELD_STRENGTH).abs() < 1e-6);
        assert!(n.x > 0.0);
        assert_eq!(n.y, 0.0);
    }

    #[test]
    fn no_nudge_outside_radius() {
        assert!(nudge(Vec2::ZERO, Vec2::new(FIELD_RADIUS + 1.0, 0.0)).is_none());
    }

    #[test]
    fn no_nudge_on_top_of_pointer() {
        assert!(nudge(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)).is_none());
    }
}
