//! Collision detection and response for the rectangular arena
//!
//! Every surface here is axis-aligned, so a resolution is always a sign
//! flip on one velocity component plus a positional mirror across the
//! contact line: `coord' = 2 * line - coord`. Both axes use the same
//! mirroring formula.

use glam::Vec2;

use super::state::{Ball, Brick, Carriage};
use crate::consts::CARRIAGE_HEIGHT;

/// A resolved contact against an axis-aligned surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point on the surface, world space
    pub point: Vec2,
    /// Outward unit normal at the contact
    pub normal: Vec2,
    /// Line the ball center mirrors across on the contact axis
    pub mirror_line: f32,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Mirror a coordinate across a line on its axis
#[inline]
pub fn mirror(coord: f32, line: f32) -> f32 {
    2.0 * line - coord
}

/// Apply a contact to the ball: positional mirror on the contact axis
/// plus velocity reflection.
pub fn apply_contact(ball: &mut Ball, contact: &Contact) {
    if contact.normal.x == 0.0 {
        ball.pos.y = mirror(ball.pos.y, contact.mirror_line);
    } else {
        ball.pos.x = mirror(ball.pos.x, contact.mirror_line);
    }
    ball.vel = reflect(ball.vel, contact.normal);
}

/// Deflect the ball off the carriage, if it has reached the bar.
///
/// Triggers once the ball center crosses the line one radius above the
/// bar's top edge while horizontally within the bar's span. The
/// y-velocity reflects and the position mirrors back across the trigger
/// line; the x-velocity is forced away from the bar center, with an
/// exact-center hit classified as the left half.
pub fn resolve_carriage(ball: &mut Ball, carriage: &Carriage) -> bool {
    let line = carriage.pos.y - CARRIAGE_HEIGHT - ball.radius;
    let (left, right) = carriage.span();
    if ball.pos.y < line || ball.pos.x < left || ball.pos.x > right {
        return false;
    }

    ball.pos.y = mirror(ball.pos.y, line);
    ball.vel = reflect(ball.vel, Vec2::new(0.0, -1.0));
    ball.vel.x = if ball.pos.x <= carriage.pos.x {
        -ball.vel.x.abs()
    } else {
        ball.vel.x.abs()
    };
    true
}

/// Resolve the four world edges against the ball.
///
/// Left/right and top/bottom are mutually exclusive pairs, so at most
/// one correction fires per axis per tick; a corner resolves only the
/// first-tested edge of each pair. Returned contacts carry the boundary
/// point and the inward unit normal.
pub fn resolve_world_bounds(ball: &mut Ball, world_size: Vec2) -> [Option<Contact>; 2] {
    let r = ball.radius;

    let x_hit = if ball.pos.x < r {
        ball.pos.x = mirror(ball.pos.x, r);
        ball.vel = reflect(ball.vel, Vec2::new(1.0, 0.0));
        Some(Contact {
            point: Vec2::new(0.0, ball.pos.y),
            normal: Vec2::new(1.0, 0.0),
            mirror_line: r,
        })
    } else if ball.pos.x > world_size.x - r {
        ball.pos.x = mirror(ball.pos.x, world_size.x - r);
        ball.vel = reflect(ball.vel, Vec2::new(-1.0, 0.0));
        Some(Contact {
            point: Vec2::new(world_size.x, ball.pos.y),
            normal: Vec2::new(-1.0, 0.0),
            mirror_line: world_size.x - r,
        })
    } else {
        None
    };

    let y_hit = if ball.pos.y < r {
        ball.pos.y = mirror(ball.pos.y, r);
        ball.vel = reflect(ball.vel, Vec2::new(0.0, 1.0));
        Some(Contact {
            point: Vec2::new(ball.pos.x, 0.0),
            normal: Vec2::new(0.0, 1.0),
            mirror_line: r,
        })
    } else if ball.pos.y > world_size.y - r {
        ball.pos.y = mirror(ball.pos.y, world_size.y - r);
        ball.vel = reflect(ball.vel, Vec2::new(0.0, -1.0));
        Some(Contact {
            point: Vec2::new(ball.pos.x, world_size.y),
            normal: Vec2::new(0.0, -1.0),
            mirror_line: world_size.y - r,
        })
    } else {
        None
    };

    [x_hit, y_hit]
}

/// Test an alive brick against the ball, checking the four approach
/// directions in order: from below, above, left, right. The first match
/// wins.
///
/// Each direction is a half-open band test: the ball center sits within
/// the brick's span on the perpendicular axis and within one radius of
/// the nearest edge on the contact axis, outside the brick. Returned
/// contacts carry the edge point and the outward normal.
pub fn brick_contact(pos: Vec2, radius: f32, brick: &Brick) -> Option<Contact> {
    let ul = brick.upper_left;
    let br = brick.bottom_right;
    let in_x_span = pos.x >= ul.x && pos.x <= br.x;
    let in_y_span = pos.y >= ul.y && pos.y <= br.y;

    if in_x_span && pos.y >= br.y && pos.y < br.y + radius {
        // from below
        Some(Contact {
            point: Vec2::new(pos.x, br.y),
            normal: Vec2::new(0.0, 1.0),
            mirror_line: br.y + radius,
        })
    } else if in_x_span && pos.y <= ul.y && pos.y > ul.y - radius {
        // from above
        Some(Contact {
            point: Vec2::new(pos.x, ul.y),
            normal: Vec2::new(0.0, -1.0),
            mirror_line: ul.y - radius,
        })
    } else if in_y_span && pos.x <= ul.x && pos.x > ul.x - radius {
        // from the left
        Some(Contact {
            point: Vec2::new(ul.x, pos.y),
            normal: Vec2::new(-1.0, 0.0),
            mirror_line: ul.x - radius,
        })
    } else if in_y_span && pos.x >= br.x && pos.x < br.x + radius {
        // from the right
        Some(Contact {
            point: Vec2::new(br.x, pos.y),
            normal: Vec2::new(1.0, 0.0),
            mirror_line: br.x + radius,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: 10.0,
            initial_speed: 150.0,
        }
    }

    #[test]
    fn test_reflect() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);

        // Axis normals flip exactly one component
        let reflected = reflect(Vec2::new(30.0, -40.0), Vec2::new(0.0, 1.0));
        assert_eq!(reflected, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn left_wall_mirrors_past_the_boundary() {
        let mut ball = ball_at(Vec2::new(4.0, 300.0), Vec2::new(-50.0, 0.0));
        let [x_hit, y_hit] = resolve_world_bounds(&mut ball, Vec2::new(800.0, 600.0));

        assert_eq!(ball.pos.x, 16.0);
        assert_eq!(ball.vel.x, 50.0);
        let hit = x_hit.unwrap();
        assert_eq!(hit.point, Vec2::new(0.0, 300.0));
        assert_eq!(hit.normal, Vec2::new(1.0, 0.0));
        assert!(y_hit.is_none());
    }

    #[test]
    fn ball_clear_of_all_edges_is_untouched() {
        let mut ball = ball_at(Vec2::new(400.0, 300.0), Vec2::new(50.0, 50.0));
        let hits = resolve_world_bounds(&mut ball, Vec2::new(800.0, 600.0));

        assert!(hits.iter().all(|h| h.is_none()));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn corner_resolves_one_edge_per_axis_pair() {
        let mut ball = ball_at(Vec2::new(5.0, 5.0), Vec2::new(-30.0, -30.0));
        let [x_hit, y_hit] = resolve_world_bounds(&mut ball, Vec2::new(800.0, 600.0));

        assert!(x_hit.is_some());
        assert!(y_hit.is_some());
        assert_eq!(ball.pos, Vec2::new(15.0, 15.0));
        assert_eq!(ball.vel, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn carriage_deflects_away_from_center() {
        let carriage = Carriage {
            pos: Vec2::new(400.0, 600.0),
            width: 100.0,
        };

        // Left half: outgoing x-velocity is negative even when incoming
        // velocity points right
        let mut ball = ball_at(Vec2::new(360.0, 575.0), Vec2::new(30.0, 50.0));
        assert!(resolve_carriage(&mut ball, &carriage));
        assert_eq!(ball.vel, Vec2::new(-30.0, -50.0));
        assert_eq!(ball.pos.y, 565.0);

        // Right half deflects right even when incoming velocity points left
        let mut ball = ball_at(Vec2::new(440.0, 575.0), Vec2::new(-30.0, 50.0));
        assert!(resolve_carriage(&mut ball, &carriage));
        assert_eq!(ball.vel, Vec2::new(30.0, -50.0));
    }

    #[test]
    fn carriage_center_hit_counts_as_left() {
        let carriage = Carriage {
            pos: Vec2::new(400.0, 600.0),
            width: 100.0,
        };
        let mut ball = ball_at(Vec2::new(400.0, 575.0), Vec2::new(30.0, 50.0));

        assert!(resolve_carriage(&mut ball, &carriage));
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn carriage_misses_outside_span_or_above_line() {
        let carriage = Carriage {
            pos: Vec2::new(400.0, 600.0),
            width: 100.0,
        };

        let mut ball = ball_at(Vec2::new(200.0, 575.0), Vec2::new(0.0, 50.0));
        assert!(!resolve_carriage(&mut ball, &carriage));

        let mut ball = ball_at(Vec2::new(400.0, 500.0), Vec2::new(0.0, 50.0));
        assert!(!resolve_carriage(&mut ball, &carriage));
    }

    #[test]
    fn brick_contact_from_each_side() {
        let brick = Brick::new(Vec2::new(100.0, 50.0), Vec2::new(150.0, 70.0));

        let below = brick_contact(Vec2::new(120.0, 75.0), 10.0, &brick).unwrap();
        assert_eq!(below.normal, Vec2::new(0.0, 1.0));
        assert_eq!(below.point, Vec2::new(120.0, 70.0));

        let above = brick_contact(Vec2::new(120.0, 45.0), 10.0, &brick).unwrap();
        assert_eq!(above.normal, Vec2::new(0.0, -1.0));
        assert_eq!(above.point, Vec2::new(120.0, 50.0));

        let left = brick_contact(Vec2::new(95.0, 60.0), 10.0, &brick).unwrap();
        assert_eq!(left.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(left.point, Vec2::new(100.0, 60.0));

        let right = brick_contact(Vec2::new(155.0, 60.0), 10.0, &brick).unwrap();
        assert_eq!(right.normal, Vec2::new(1.0, 0.0));
        assert_eq!(right.point, Vec2::new(150.0, 60.0));
    }

    #[test]
    fn brick_band_is_half_open() {
        let brick = Brick::new(Vec2::new(100.0, 50.0), Vec2::new(150.0, 70.0));

        // Exactly on the edge: inside the band
        assert!(brick_contact(Vec2::new(120.0, 70.0), 10.0, &brick).is_some());
        // Exactly one radius out: past the band
        assert!(brick_contact(Vec2::new(120.0, 80.0), 10.0, &brick).is_none());
        // In the band vertically but outside the horizontal span
        assert!(brick_contact(Vec2::new(160.0, 75.0), 10.0, &brick).is_none());
    }

    #[test]
    fn apply_contact_mirrors_and_reflects() {
        let brick = Brick::new(Vec2::new(100.0, 50.0), Vec2::new(150.0, 70.0));
        let mut ball = ball_at(Vec2::new(120.0, 75.0), Vec2::new(0.0, -40.0));

        let contact = brick_contact(ball.pos, ball.radius, &brick).unwrap();
        apply_contact(&mut ball, &contact);

        // Mirrored across y = 80, velocity flipped downward
        assert_eq!(ball.pos, Vec2::new(120.0, 85.0));
        assert_eq!(ball.vel, Vec2::new(0.0, 40.0));
    }
}
