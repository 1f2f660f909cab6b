//! Collision tests for the ball against walls, paddle and bricks
//!
//! Everything is axis-aligned: the ball is treated as its bounding box for
//! bricks, and as a point (its center x) across the paddle width.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::MIN_BOUNCE_DX;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Ball's leading edge past the left or right wall
pub fn hits_side_wall(ball: &Ball, surface_width: f32) -> bool {
    ball.left() < 0.0 || ball.right() > surface_width
}

pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.top() < 0.0
}

/// Ball bottom past the baseline
pub fn crossed_baseline(ball: &Ball, surface_height: f32) -> bool {
    ball.bottom() > surface_height
}

/// Fraction across the paddle width where the ball lands, if it does
///
/// The ball must have reached the paddle's top edge and its center must lie
/// strictly between the paddle's left and right edges.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> Option<f32> {
    let reached = ball.bottom() > paddle.pos.y;
    let over = ball.pos.x > paddle.pos.x && ball.pos.x < paddle.right();
    if reached && over {
        Some((ball.pos.x - paddle.pos.x) / paddle.size.x)
    } else {
        None
    }
}

/// New velocity after a paddle bounce
///
/// Horizontal speed follows the hit position (zero at the paddle center,
/// ±speed at the edges) but never drops below `MIN_BOUNCE_DX`. The ball
/// always leaves upward.
pub fn paddle_bounce(vel: Vec2, hit_pos: f32, speed: f32) -> Vec2 {
    let mut dx = (hit_pos - 0.5) * speed * 2.0;
    if dx.abs() < MIN_BOUNCE_DX {
        dx = if dx >= 0.0 { MIN_BOUNCE_DX } else { -MIN_BOUNCE_DX };
    }
    Vec2::new(dx, -vel.y.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::spawn(&GameConfig::default());
        ball.pos = Vec2::new(x, y);
        ball
    }

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let inside = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_brick_overlap_region() {
        // Brick 55x20 at (15, 60), ball radius 8: hits iff center is inside
        // the open box (7, 52)-(78, 88)
        let brick = Aabb::from_origin_size(Vec2::new(15.0, 60.0), Vec2::new(55.0, 20.0));
        let hit = |x: f32, y: f32| Aabb::around_circle(Vec2::new(x, y), 8.0).overlaps(&brick);

        assert!(hit(7.5, 52.5));
        assert!(hit(77.5, 87.5));
        assert!(hit(40.0, 70.0));
        assert!(!hit(7.0, 70.0));
        assert!(!hit(78.0, 70.0));
        assert!(!hit(40.0, 52.0));
        assert!(!hit(40.0, 88.0));
    }

    #[test]
    fn test_walls() {
        assert!(hits_side_wall(&ball_at(7.0, 300.0), 400.0));
        assert!(hits_side_wall(&ball_at(393.0, 300.0), 400.0));
        assert!(!hits_side_wall(&ball_at(8.0, 300.0), 400.0));
        assert!(hits_ceiling(&ball_at(200.0, 7.0)));
        assert!(!hits_ceiling(&ball_at(200.0, 8.0)));
        assert!(crossed_baseline(&ball_at(200.0, 593.0), 600.0));
        assert!(!crossed_baseline(&ball_at(200.0, 592.0), 600.0));
    }

    #[test]
    fn test_paddle_contact() {
        let config = GameConfig::with_surface(400.0, 600.0);
        let paddle = Paddle::new(&config); // x = 160, y = 560, width 80

        assert_eq!(paddle_contact(&ball_at(200.0, 553.0), &paddle), Some(0.5));
        // Not low enough yet
        assert_eq!(paddle_contact(&ball_at(200.0, 552.0), &paddle), None);
        // Center exactly on an edge does not count
        assert_eq!(paddle_contact(&ball_at(160.0, 555.0), &paddle), None);
        assert_eq!(paddle_contact(&ball_at(240.0, 555.0), &paddle), None);
        assert_eq!(paddle_contact(&ball_at(180.0, 555.0), &paddle), Some(0.25));
    }

    #[test]
    fn test_paddle_bounce_center_clamps_to_one() {
        let vel = paddle_bounce(Vec2::new(3.0, 3.0), 0.5, 3.0);
        assert_eq!(vel, Vec2::new(1.0, -3.0));
    }

    #[test]
    fn test_paddle_bounce_edges() {
        let vel = paddle_bounce(Vec2::new(3.0, 3.0), 0.0, 3.0);
        assert_eq!(vel, Vec2::new(-3.0, -3.0));
        let vel = paddle_bounce(Vec2::new(-3.0, 3.0), 1.0, 3.0);
        assert_eq!(vel, Vec2::new(3.0, -3.0));
        // Slightly left of center keeps its sign
        let vel = paddle_bounce(Vec2::new(3.0, 3.0), 0.45, 3.0);
        assert_eq!(vel.x, -1.0);
    }

    #[test]
    fn test_paddle_bounce_always_up() {
        // Already moving up stays up
        let vel = paddle_bounce(Vec2::new(3.0, -2.0), 0.8, 3.0);
        assert_eq!(vel.y, -2.0);
    }
}
