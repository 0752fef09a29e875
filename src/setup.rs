use crate::ball::Ball;
use crate::error::{Result, SimulationError};
use crate::scene::WorldSize;
use crate::vector::vec2;

use std::ops::Range;

/// Radii drawn by [`random_balls`] when nothing else is configured.
pub const DEFAULT_RADIUS_RANGE: Range<f64> = 0.5..0.8;

/// Generates `count` balls scattered uniformly over the world.
/// - Radius is uniform in `radii` (half-open), mass is that of a unit-density disc.
/// - Position keeps the whole disc inside the world on both axes.
/// - Velocity is uniform in `[-1, 1)` per axis.
///
/// Balls may overlap each other; the first steps push them apart.
pub fn random_balls(
    count: usize,
    world: WorldSize,
    radii: Range<f64>,
    rng: &mut fastrand::Rng,
) -> Result<Vec<Ball>> {
    if !(radii.start > 0.0 && radii.start < radii.end && radii.end.is_finite()) {
        return Err(SimulationError::InvalidRadiusRange {
            min: radii.start,
            max: radii.end,
        });
    }
    world.validate()?;
    if world.width < 2.0 * radii.end || world.height < 2.0 * radii.end {
        return Err(SimulationError::WorldTooSmall {
            width: world.width,
            height: world.height,
            radius: radii.end,
        });
    }

    let span = radii.end - radii.start;
    let balls = (0..count)
        .map(|_| {
            let radius = radii.start + rng.f64() * span;
            let position = vec2(
                rng.f64() * (world.width - 2.0 * radius) + radius,
                rng.f64() * (world.height - 2.0 * radius) + radius,
            );
            let velocity = vec2(-1.0 + 2.0 * rng.f64(), -1.0 + 2.0 * rng.f64());

            Ball::with_unit_density(radius, position, velocity)
        })
        .collect();

    Ok(balls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn generated_balls_fit_the_world() {
        let world = WorldSize::new(12.0, 4.0);
        let mut rng = fastrand::Rng::with_seed(42);
        let balls = random_balls(500, world, DEFAULT_RADIUS_RANGE, &mut rng).unwrap();

        assert_eq!(balls.len(), 500);
        for b in &balls {
            assert!((0.5..0.8).contains(&b.radius));
            assert!((b.mass - PI * b.radius * b.radius).abs() < 1e-12);
            assert!(b.position.x >= b.radius && b.position.x <= world.width - b.radius);
            assert!(b.position.y >= b.radius && b.position.y <= world.height - b.radius);
            assert!((-1.0..=1.0).contains(&b.velocity.x));
            assert!((-1.0..=1.0).contains(&b.velocity.y));
        }
    }

    #[test]
    fn same_seed_same_balls() {
        let world = WorldSize::new(20.0, 20.0);
        let a = random_balls(20, world, DEFAULT_RADIUS_RANGE, &mut fastrand::Rng::with_seed(3));
        let b = random_balls(20, world, DEFAULT_RADIUS_RANGE, &mut fastrand::Rng::with_seed(3));
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn rejects_bad_ranges_and_tiny_worlds() {
        let mut rng = fastrand::Rng::with_seed(1);
        let world = WorldSize::new(20.0, 20.0);
        assert!(matches!(
            random_balls(1, world, Range { start: 0.8, end: 0.5 }, &mut rng),
            Err(SimulationError::InvalidRadiusRange { .. })
        ));
        assert!(matches!(
            random_balls(1, world, 0.0..0.5, &mut rng),
            Err(SimulationError::InvalidRadiusRange { .. })
        ));
        assert!(matches!(
            random_balls(1, WorldSize::new(20.0, 1.0), DEFAULT_RADIUS_RANGE, &mut rng),
            Err(SimulationError::WorldTooSmall { .. })
        ));
    }
}
