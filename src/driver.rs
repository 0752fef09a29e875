//! Frame loop plumbing between a wall clock, the physics and a renderer.
//!
//! The physics always advances in whole steps of `scene.dt`. Real frame times
//! go through [`FixedTimestep`], which banks the leftover fraction for the next
//! frame so runs stay reproducible no matter how irregular the clock is.

use crate::scene::Scene;
use crate::viewport::{Renderer, Viewport};

/// Accumulates elapsed time and converts it into fixed simulation steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTimestep {
    /// Unsimulated time carried over from previous frames.
    pub accumulator: f64,
    /// Upper bound on steps per call; older backlog is dropped.
    pub max_steps_per_frame: usize,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_STEPS)
    }
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: usize = 8;

    pub fn new(max_steps_per_frame: usize) -> Self {
        Self {
            accumulator: 0.0,
            max_steps_per_frame,
        }
    }

    /// Feeds `elapsed` seconds of wall-clock time and runs as many whole steps as fit.
    /// Returns the number of steps taken. Paused scenes bank nothing.
    pub fn advance(&mut self, scene: &mut Scene, elapsed: f64) -> usize {
        if scene.paused {
            self.accumulator = 0.0;
            return 0;
        }
        if !(scene.dt > 0.0 && scene.dt.is_finite()) {
            log::warn!("scene timestep {} is not positive, not stepping", scene.dt);
            self.accumulator = 0.0;
            return 0;
        }
        if !self.accumulator.is_finite() {
            self.accumulator = 0.0;
        }
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let mut steps = 0;
        while self.accumulator >= scene.dt && steps < self.max_steps_per_frame {
            scene.step();
            self.accumulator -= scene.dt;
            steps += 1;
        }

        if self.accumulator >= scene.dt {
            log::warn!(
                "simulation fell behind by {:.3}s, dropping backlog",
                self.accumulator
            );
            self.accumulator %= scene.dt;
        }

        steps
    }
}

/// Owns a renderer and drives step-then-draw frames over a scene.
#[derive(Debug)]
pub struct FrameLoop<R: Renderer> {
    pub viewport: Viewport,
    pub renderer: R,
    pub timestep: FixedTimestep,
    /// Frames drawn so far.
    pub frames: usize,
}

impl<R: Renderer> FrameLoop<R> {
    pub fn new(viewport: Viewport, renderer: R) -> Self {
        Self {
            viewport,
            renderer,
            timestep: FixedTimestep::default(),
            frames: 0,
        }
    }

    /// One wall-clock frame: advance by `elapsed` seconds, then draw once.
    /// Drawing happens even while the scene is paused.
    pub fn frame(&mut self, scene: &mut Scene, elapsed: f64) -> usize {
        let steps = self.timestep.advance(scene, elapsed);
        self.draw(scene);
        steps
    }

    /// Runs `frames` frames of exactly one step each, independent of any clock.
    pub fn run_fixed(&mut self, scene: &mut Scene, frames: usize) {
        for _ in 0..frames {
            scene.step();
            self.draw(scene);
        }
    }

    fn draw(&mut self, scene: &Scene) {
        self.renderer.draw(&scene.balls, &self.viewport);
        self.frames += 1;
    }
}
