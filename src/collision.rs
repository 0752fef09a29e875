//! Narrow-phase collision response for balls and the rectangular boundary.

use crate::ball::Ball;
use crate::scene::WorldSize;

/// Resolves a collision between two balls.
///
/// Overlap is split equally between the two balls regardless of mass, then the
/// velocity components along the contact normal are replaced by the 1-D
/// collision result for restitution `restitution`. Tangential components are left
/// alone. Returns `false` when the balls do not touch or their centers coincide.
pub fn resolve_ball_collision(a: &mut Ball, b: &mut Ball, restitution: f64) -> bool {
    let dir = b.position - a.position;
    let d = dir.mag();
    // coincident centers have no usable normal
    if d == 0.0 || d > a.radius + b.radius {
        return false;
    }
    let dir = dir / d;

    let corr = (a.radius + b.radius - d) / 2.0;
    a.position -= dir * corr;
    b.position += dir * corr;

    let v1 = a.velocity.dot(dir);
    let v2 = b.velocity.dot(dir);

    let m1 = a.mass;
    let m2 = b.mass;
    let total = m1 + m2;

    let new_v1 = (m1 * v1 + m2 * v2 - m2 * (v1 - v2) * restitution) / total;
    let new_v2 = (m1 * v1 + m2 * v2 - m1 * (v2 - v1) * restitution) / total;

    a.velocity += dir * (new_v1 - v1);
    b.velocity += dir * (new_v2 - v2);

    true
}

/// Which boundaries a ball was pushed back from during one wall pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }
}

/// Clamps a ball back inside `[0, width] x [0, height]` and reflects the velocity
/// component of every boundary it crossed, scaled by `restitution`.
pub fn resolve_wall_collision(ball: &mut Ball, world: WorldSize, restitution: f64) -> WallHits {
    let r = ball.radius;
    let mut hits = WallHits::default();

    if ball.position.y < r {
        ball.position.y = r;
        ball.velocity.y = -ball.velocity.y * restitution;
        hits.bottom = true;
    }

    if ball.position.x < r {
        ball.position.x = r;
        ball.velocity.x = -ball.velocity.x * restitution;
        hits.left = true;
    }

    if ball.position.x > world.width - r {
        ball.position.x = world.width - r;
        ball.velocity.x = -ball.velocity.x * restitution;
        hits.right = true;
    }

    if ball.position.y > world.height - r {
        ball.position.y = world.height - r;
        ball.velocity.y = -ball.velocity.y * restitution;
        hits.top = true;
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{VectorExt, vec2};

    fn ball(x: f64, y: f64, vx: f64, vy: f64) -> Ball {
        Ball::new(0.5, 1.0, vec2(x, y), vec2(vx, vy))
    }

    #[test]
    fn separated_balls_are_untouched() {
        let mut a = ball(0.0, 0.0, 1.0, 0.0);
        let mut b = ball(2.0, 0.0, -1.0, 0.0);
        let (a0, b0) = (a, b);
        assert!(!resolve_ball_collision(&mut a, &mut b, 1.0));
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut a = ball(1.0, 1.0, 1.0, 0.0);
        let mut b = ball(1.0, 1.0, -1.0, 0.0);
        assert!(!resolve_ball_collision(&mut a, &mut b, 1.0));
        assert_eq!(a.velocity, vec2(1.0, 0.0));
        assert_eq!(b.velocity, vec2(-1.0, 0.0));
        assert!(a.position.x.is_finite() && b.position.x.is_finite());
    }

    #[test]
    fn overlap_is_split_equally() {
        let mut a = ball(0.0, 0.0, 0.0, 0.0);
        let mut b = Ball {
            mass: 50.0,
            ..ball(0.8, 0.0, 0.0, 0.0)
        };

        assert!(resolve_ball_collision(&mut a, &mut b, 1.0));
        assert!((a.position.x - -0.1).abs() < 1e-12);
        assert!((b.position.x - 0.9).abs() < 1e-12);
        assert!((a.position.distance(b.position) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn equal_masses_swap_normal_velocity() {
        let mut a = ball(0.0, 0.0, 2.0, 0.5);
        let mut b = ball(0.9, 0.0, -1.0, -0.25);
        resolve_ball_collision(&mut a, &mut b, 1.0);

        assert!((a.velocity.x - -1.0).abs() < 1e-12);
        assert!((b.velocity.x - 2.0).abs() < 1e-12);
        // tangential components are untouched
        assert_eq!(a.velocity.y, 0.5);
        assert_eq!(b.velocity.y, -0.25);
    }

    #[test]
    fn perfectly_inelastic_collision_matches_normal_velocities() {
        let mut a = Ball::new(0.5, 1.0, vec2(0.0, 0.0), vec2(0.0, 3.0));
        let mut b = Ball::new(0.5, 3.0, vec2(0.0, 0.9), vec2(0.0, 0.0));
        resolve_ball_collision(&mut a, &mut b, 0.0);

        let common = 3.0 / 4.0;
        assert!((a.velocity.y - common).abs() < 1e-12);
        assert!((b.velocity.y - common).abs() < 1e-12);
    }

    #[test]
    fn collision_conserves_momentum() {
        let mut a = Ball::new(0.6, 2.0, vec2(1.0, 1.0), vec2(1.5, -0.5));
        let mut b = Ball::new(0.7, 5.0, vec2(2.0, 1.5), vec2(-2.0, 0.25));
        let before = a.momentum() + b.momentum();
        assert!(resolve_ball_collision(&mut a, &mut b, 0.7));
        let after = a.momentum() + b.momentum();
        assert!((before - after).mag() < 1e-12);
    }

    #[test]
    fn wall_clamps_and_reflects() {
        let world = WorldSize::new(10.0, 10.0);
        let mut b = ball(0.3, 5.0, -4.0, 0.0);
        let hits = resolve_wall_collision(&mut b, world, 0.5);

        assert!(hits.left && !hits.right && !hits.top && !hits.bottom);
        assert_eq!(b.position.x, 0.5);
        assert_eq!(b.velocity.x, 2.0);
    }

    #[test]
    fn corner_triggers_both_axes() {
        let world = WorldSize::new(10.0, 8.0);
        let mut b = ball(9.9, 7.7, 3.0, 2.0);
        let hits = resolve_wall_collision(&mut b, world, 1.0);

        assert!(hits.right && hits.top);
        assert_eq!(b.position, vec2(9.5, 7.5));
        assert_eq!(b.velocity, vec2(-3.0, -2.0));
    }

    #[test]
    fn ball_inside_is_untouched() {
        let world = WorldSize::new(10.0, 10.0);
        let mut b = ball(5.0, 5.0, 1.0, 1.0);
        assert!(!resolve_wall_collision(&mut b, world, 0.9).any());
        assert_eq!(b.velocity, vec2(1.0, 1.0));
        assert_eq!(b.position, vec2(5.0, 5.0));
    }
}
