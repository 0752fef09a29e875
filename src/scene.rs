use crate::{
    ball::Ball,
    collision::{resolve_ball_collision, resolve_wall_collision},
    error::{Result, SimulationError, check_restitution},
    setup::{self, DEFAULT_RADIUS_RANGE},
    vector::{Vector2, vec2},
};

use rayon::prelude::*;
use serde::Deserialize;

/// Extents of the simulated box. The world spans `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WorldSize {
    pub width: f64,
    pub height: f64,
}

impl WorldSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v > 0.0 && v.is_finite();
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(SimulationError::InvalidWorldSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Rejects a ball whose diameter does not fit on both axes.
    pub fn check_fits(&self, radius: f64) -> Result<()> {
        if 2.0 * radius > self.width || 2.0 * radius > self.height {
            return Err(SimulationError::WorldTooSmall {
                width: self.width,
                height: self.height,
                radius,
            });
        }
        Ok(())
    }
}

/// Tunable physical parameters of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    /// Constant acceleration applied to every ball.
    pub gravity: Vector2,
    /// Fixed time step per frame.
    pub dt: f64,
    /// Restitution for ball-ball contacts.
    pub restitution: f64,
    /// Restitution for ball-wall contacts.
    pub wall_restitution: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            gravity: vec2(0.0, Scene::DEFAULT_GRAVITY_Y),
            dt: Scene::DEFAULT_DT,
            restitution: Scene::DEFAULT_RESTITUTION,
            wall_restitution: Scene::DEFAULT_WALL_RESTITUTION,
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.gravity.x.is_finite() && self.gravity.y.is_finite()) {
            return Err(SimulationError::NonFiniteGravity);
        }
        check_timestep(self.dt)?;
        check_restitution("restitution", self.restitution)?;
        check_restitution("wall restitution", self.wall_restitution)?;
        Ok(())
    }
}

/// Owns every ball of one simulation together with its parameters.
///
/// The configuration fields are public so a driver can tweak them between
/// steps; the setters below validate before assigning.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Constant acceleration applied to every ball.
    pub gravity: Vector2,
    /// Time step per frame.
    pub dt: f64,
    /// Extents of the box the balls live in.
    pub world_size: WorldSize,
    /// Restitution for ball-ball contacts.
    pub restitution: f64,
    /// Restitution for ball-wall contacts.
    pub wall_restitution: f64,
    /// While set, [`Scene::step`] leaves the state untouched.
    pub paused: bool,
    /// All balls, in collision-pair enumeration order.
    pub balls: Vec<Ball>,
    /// Number of steps taken since the last reset.
    pub frame: usize,
    /// Integrate on the rayon pool instead of the calling thread.
    pub use_rayon: bool,
}

impl Scene {
    /// Default constants.
    pub const DEFAULT_DT: f64 = 1.0 / 60.0;
    pub const DEFAULT_GRAVITY_Y: f64 = -9.81;
    pub const DEFAULT_RESTITUTION: f64 = 0.9;
    pub const DEFAULT_WALL_RESTITUTION: f64 = 0.99;
    pub const DEFAULT_BALL_COUNT: usize = 20;

    /// Creates an empty scene with default parameters.
    pub fn new(world_size: WorldSize) -> Result<Self> {
        Self::with_balls(Vec::new(), world_size, SceneParams::default())
    }

    /// Creates a scene from explicit balls. Every ball and parameter is validated.
    pub fn with_balls(
        balls: Vec<Ball>,
        world_size: WorldSize,
        params: SceneParams,
    ) -> Result<Self> {
        world_size.validate()?;
        params.validate()?;
        for (i, ball) in balls.iter().enumerate() {
            ball.validate(i)?;
            world_size.check_fits(ball.radius)?;
        }

        Ok(Self {
            gravity: params.gravity,
            dt: params.dt,
            world_size,
            restitution: params.restitution,
            wall_restitution: params.wall_restitution,
            paused: false,
            balls,
            frame: 0,
            use_rayon: false,
        })
    }

    /// Creates a scene of `count` random balls with default parameters.
    pub fn setup(count: usize, world_size: WorldSize, rng: &mut fastrand::Rng) -> Result<Self> {
        world_size.validate()?;
        let balls = setup::random_balls(count, world_size, DEFAULT_RADIUS_RANGE, rng)?;
        log::debug!(
            "set up scene with {} balls in {} x {}",
            balls.len(),
            world_size.width,
            world_size.height
        );
        Self::with_balls(balls, world_size, SceneParams::default())
    }

    /// Replaces the balls with `count` freshly generated ones and rewinds the frame counter.
    pub fn reset(&mut self, count: usize, rng: &mut fastrand::Rng) -> Result<()> {
        self.balls = setup::random_balls(count, self.world_size, DEFAULT_RADIUS_RANGE, rng)?;
        self.frame = 0;
        Ok(())
    }

    /// Current parameters as a bundle.
    pub fn params(&self) -> SceneParams {
        SceneParams {
            gravity: self.gravity,
            dt: self.dt,
            restitution: self.restitution,
            wall_restitution: self.wall_restitution,
        }
    }

    /// Appends a ball after validating it.
    pub fn add_ball(&mut self, ball: Ball) -> Result<()> {
        ball.validate(self.balls.len())?;
        self.world_size.check_fits(ball.radius)?;
        self.balls.push(ball);
        Ok(())
    }

    pub fn set_restitution(&mut self, restitution: f64) -> Result<()> {
        self.restitution = check_restitution("restitution", restitution)?;
        Ok(())
    }

    pub fn set_wall_restitution(&mut self, restitution: f64) -> Result<()> {
        self.wall_restitution = check_restitution("wall restitution", restitution)?;
        Ok(())
    }

    pub fn set_dt(&mut self, dt: f64) -> Result<()> {
        self.dt = check_timestep(dt)?;
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flips between running and paused, returning the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::debug!("scene {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Sets whether to use Rayon for the integration phase.
    pub fn set_use_rayon(&mut self, use_rayon: bool) {
        self.use_rayon = use_rayon;
    }

    /// Advances the simulation by one step.
    /// Integrates every ball, then resolves ball-ball contacts, then wall contacts.
    /// Does nothing while paused.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        self.integrate();
        self.collide();
        self.collide_walls();
        self.frame += 1;
    }

    /// Applies gravity and moves every ball by one time step.
    pub fn integrate(&mut self) {
        let dt = self.dt;
        let gravity = self.gravity;

        if self.use_rayon {
            self.balls.par_iter_mut().for_each(|ball| {
                ball.integrate(gravity, dt);
            });
        } else {
            self.balls.iter_mut().for_each(|ball| {
                ball.integrate(gravity, dt);
            });
        }
    }

    /// Resolves every overlapping pair `(i, j)` with `i < j` once, in order.
    /// Later pairs see the corrections made by earlier ones.
    /// Returns the number of pairs that were in contact.
    pub fn collide(&mut self) -> usize {
        let restitution = self.restitution;
        let mut contacts = 0usize;

        for i in 0..self.balls.len() {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if resolve_ball_collision(a, b, restitution) {
                    contacts += 1;
                }
            }
        }

        if contacts > 0 {
            log::trace!("frame {}: resolved {} ball contacts", self.frame, contacts);
        }
        contacts
    }

    /// Pushes balls back inside the world and reflects their velocity.
    /// Returns the number of balls that touched at least one wall.
    pub fn collide_walls(&mut self) -> usize {
        let world = self.world_size;
        let restitution = self.wall_restitution;
        let mut hits = 0usize;

        for ball in &mut self.balls {
            if resolve_wall_collision(ball, world, restitution).any() {
                hits += 1;
            }
        }

        if hits > 0 {
            log::trace!("frame {}: {} balls bounced off a wall", self.frame, hits);
        }
        hits
    }

    /// Total kinetic energy of all balls.
    pub fn kinetic_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Total linear momentum of all balls.
    pub fn momentum(&self) -> Vector2 {
        self.balls
            .iter()
            .fold(Vector2::zero(), |acc, ball| acc + ball.momentum())
    }
}

/// Advances `scene` by one frame. See [`Scene::step`].
pub fn step_scene(scene: &mut Scene) {
    scene.step();
}

/// Builds a scene of `count` random balls. See [`Scene::setup`].
pub fn setup_scene(count: usize, world_size: WorldSize, rng: &mut fastrand::Rng) -> Result<Scene> {
    Scene::setup(count, world_size, rng)
}

fn check_timestep(dt: f64) -> Result<f64> {
    if dt > 0.0 && dt.is_finite() {
        Ok(dt)
    } else {
        Err(SimulationError::InvalidTimestep(dt))
    }
}
