use thiserror::Error;

/// Everything that can go wrong while building or configuring a [`Scene`](crate::Scene).
///
/// Stepping never fails; invalid values are rejected before they reach the solver.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("ball {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("ball {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("ball {index}: position and velocity must be finite")]
    NonFiniteState { index: usize },

    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidRestitution { name: &'static str, value: f64 },

    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),

    #[error("gravity must be finite")]
    NonFiniteGravity,

    #[error("world size must be positive and finite, got {width} x {height}")]
    InvalidWorldSize { width: f64, height: f64 },

    #[error("radius range {min}..{max} is empty or not positive")]
    InvalidRadiusRange { min: f64, max: f64 },

    #[error("world {width} x {height} cannot hold a ball of radius up to {radius}")]
    WorldTooSmall { width: f64, height: f64, radius: f64 },

    #[error("failed to read scene config")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene config")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = SimulationError> = std::result::Result<T, E>;

/// Checks a restitution coefficient, reporting `name` on failure.
pub(crate) fn check_restitution(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SimulationError::InvalidRestitution { name, value })
    }
}
