//! Scene descriptions loaded from YAML.
//!
//! A scene file either lists its balls explicitly or asks for a number of
//! random ones. Everything except `world` has a default:
//!
//! ```yaml
//! world:
//!   width: 20.0
//!   height: 12.0
//! gravity: [0.0, -9.81]
//! dt: 0.016666666666666666
//! restitution: 0.9        # ball-ball
//! wall_restitution: 0.99  # ball-wall
//! paused: false
//! seed: 42                # only used for random balls
//! ball_count: 20
//! radius_range: [0.5, 0.8]
//!
//! # when present, replaces ball_count
//! balls:
//!   - radius: 0.5
//!     position: [2.0, 3.0]
//!     velocity: [1.0, 0.0]
//!   - radius: 0.5
//!     mass: 4.0           # defaults to pi * r^2
//!     position: [6.0, 3.0]
//!     velocity: [-1.0, 0.0]
//! ```

use crate::ball::Ball;
use crate::error::Result;
use crate::scene::{Scene, SceneParams, WorldSize};
use crate::setup;
use crate::vector::vec2;

use serde::Deserialize;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Initial state of one explicitly placed ball.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BallConfig {
    pub radius: f64,
    /// Mass of the ball; unit density when omitted.
    #[serde(default)]
    pub mass: Option<f64>,
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
}

impl BallConfig {
    pub fn to_ball(&self) -> Ball {
        let position = vec2(self.position[0], self.position[1]);
        let velocity = vec2(self.velocity[0], self.velocity[1]);
        match self.mass {
            Some(mass) => Ball::new(self.radius, mass, position, velocity),
            None => Ball::with_unit_density(self.radius, position, velocity),
        }
    }
}

/// Top-level scene configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub world: WorldSize,
    #[serde(default = "default_gravity")]
    pub gravity: [f64; 2],
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_restitution")]
    pub restitution: f64,
    #[serde(default = "default_wall_restitution")]
    pub wall_restitution: f64,
    #[serde(default)]
    pub paused: bool,
    /// Seed for random ball generation; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_ball_count")]
    pub ball_count: usize,
    #[serde(default = "default_radius_range")]
    pub radius_range: [f64; 2],
    #[serde(default)]
    pub balls: Vec<BallConfig>,
}

fn default_gravity() -> [f64; 2] {
    [0.0, Scene::DEFAULT_GRAVITY_Y]
}

fn default_dt() -> f64 {
    Scene::DEFAULT_DT
}

fn default_restitution() -> f64 {
    Scene::DEFAULT_RESTITUTION
}

fn default_wall_restitution() -> f64 {
    Scene::DEFAULT_WALL_RESTITUTION
}

fn default_ball_count() -> usize {
    Scene::DEFAULT_BALL_COUNT
}

fn default_radius_range() -> [f64; 2] {
    [setup::DEFAULT_RADIUS_RANGE.start, setup::DEFAULT_RADIUS_RANGE.end]
}

impl SceneConfig {
    /// A config for `ball_count` random balls in `world`, everything else default.
    pub fn random(world: WorldSize, ball_count: usize, seed: Option<u64>) -> Self {
        Self {
            world,
            gravity: default_gravity(),
            dt: default_dt(),
            restitution: default_restitution(),
            wall_restitution: default_wall_restitution(),
            paused: false,
            seed,
            ball_count,
            radius_range: default_radius_range(),
            balls: Vec::new(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn params(&self) -> SceneParams {
        SceneParams {
            gravity: vec2(self.gravity[0], self.gravity[1]),
            dt: self.dt,
            restitution: self.restitution,
            wall_restitution: self.wall_restitution,
        }
    }

    /// Builds and validates the scene this config describes.
    pub fn build(&self) -> Result<Scene> {
        let balls = if self.balls.is_empty() {
            let mut rng = match self.seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let radii = self.radius_range[0]..self.radius_range[1];
            setup::random_balls(self.ball_count, self.world, radii, &mut rng)?
        } else {
            self.balls.iter().map(BallConfig::to_ball).collect()
        };

        let mut scene = Scene::with_balls(balls, self.world, self.params())?;
        scene.paused = self.paused;
        log::debug!(
            "built scene from config: {} balls, dt {}, restitution {}/{}",
            scene.balls.len(),
            scene.dt,
            scene.restitution,
            scene.wall_restitution
        );
        Ok(scene)
    }
}
