use crate::error::{Result, SimulationError};
use crate::vector::Vector2;

use std::f64::consts::PI;

/// A circular particle in the simulation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    /// Radius of the disc.
    pub radius: f64,
    /// Mass of the ball. Stored rather than derived so callers may override it.
    pub mass: f64,
    /// Position of the center.
    pub position: Vector2,
    /// Velocity vector.
    pub velocity: Vector2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::with_unit_density(1.0, Vector2::zero(), Vector2::zero())
    }
}

impl Ball {
    /// Creates a new Ball with the given properties.
    /// Position and velocity are copied in; the ball shares nothing with the caller.
    pub fn new(radius: f64, mass: f64, position: Vector2, velocity: Vector2) -> Self {
        Self {
            radius,
            mass,
            position,
            velocity,
        }
    }

    /// Creates a ball whose mass is the area of a unit-density disc, `π·r²`.
    pub fn with_unit_density(radius: f64, position: Vector2, velocity: Vector2) -> Self {
        Self::new(radius, disc_mass(radius), position, velocity)
    }

    /// Advances the ball by `dt` under constant acceleration `gravity`.
    /// Uses semi-implicit Euler integration (velocity update first, then position).
    #[inline]
    pub fn integrate(&mut self, gravity: Vector2, dt: f64) {
        self.velocity += gravity * dt;
        self.position += self.velocity * dt;
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.mag_sq()
    }

    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    /// Rejects balls the solver cannot handle. `index` is only used for reporting.
    pub fn validate(&self, index: usize) -> Result<()> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(SimulationError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(SimulationError::InvalidMass {
                index,
                mass: self.mass,
            });
        }
        let finite = [self.position, self.velocity]
            .iter()
            .all(|v| v.x.is_finite() && v.y.is_finite());
        if !finite {
            return Err(SimulationError::NonFiniteState { index });
        }
        Ok(())
    }
}

/// Mass of a disc of unit density.
#[inline]
pub fn disc_mass(radius: f64) -> f64 {
    PI * radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    #[test]
    fn unit_density_mass_is_disc_area() {
        let ball = Ball::with_unit_density(0.5, Vector2::zero(), Vector2::zero());
        assert!((ball.mass - PI * 0.25).abs() < 1e-15);
    }

    #[test]
    fn construction_copies_initial_vectors() {
        let mut start = vec2(1.0, 2.0);
        let ball = Ball::new(0.5, 1.0, start, start);
        start += vec2(10.0, 10.0);
        assert_eq!(ball.position, vec2(1.0, 2.0));
        assert_eq!(ball.velocity, vec2(1.0, 2.0));
    }

    #[test]
    fn integrate_updates_velocity_before_position() {
        let mut ball = Ball::new(0.2, 1.0, vec2(0.0, 0.0), vec2(1.0, 0.0));
        ball.integrate(vec2(0.0, -10.0), 0.1);
        assert_eq!(ball.velocity, vec2(1.0, -1.0));
        // explicit Euler would leave y at 0.0
        assert!((ball.position.y - -0.1).abs() < 1e-15);
        assert!((ball.position.x - 0.1).abs() < 1e-15);
    }

    #[test]
    fn validate_rejects_bad_bodies() {
        let ok = Ball::default();
        assert!(ok.validate(0).is_ok());

        let bad_radius = Ball { radius: -1.0, ..ok };
        assert!(matches!(
            bad_radius.validate(3),
            Err(SimulationError::InvalidRadius { index: 3, .. })
        ));

        let bad_mass = Ball { mass: 0.0, ..ok };
        assert!(matches!(
            bad_mass.validate(0),
            Err(SimulationError::InvalidMass { .. })
        ));

        let nan_pos = Ball {
            position: vec2(f64::NAN, 0.0),
            ..ok
        };
        assert!(matches!(
            nan_pos.validate(1),
            Err(SimulationError::NonFiniteState { index: 1 })
        ));
    }
}
