//! Mapping between simulation space and a drawing surface.
//!
//! The physics never draws anything. A front end implements [`Renderer`] and
//! receives the balls together with a [`Viewport`] that converts world
//! coordinates (y up, meters) into surface coordinates (y down, pixels).

use crate::ball::Ball;
use crate::scene::WorldSize;
use crate::vector::Vector2;

/// Draws the current state of a scene.
pub trait Renderer {
    fn draw(&mut self, balls: &[Ball], viewport: &Viewport);
}

/// Uniform scale from world units to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Canvas width in logical pixels.
    pub canvas_width: f64,
    /// Canvas height in logical pixels.
    pub canvas_height: f64,
    /// Pixels per world unit.
    pub scale: f64,
}

impl Viewport {
    /// Fits `sim_min_width` world units across the shorter side of the canvas.
    pub fn fit(canvas_width: f64, canvas_height: f64, sim_min_width: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            scale: canvas_width.min(canvas_height) / sim_min_width,
        }
    }

    /// The world extents visible on this canvas.
    pub fn world_size(&self) -> WorldSize {
        WorldSize::new(self.canvas_width / self.scale, self.canvas_height / self.scale)
    }

    #[inline]
    pub fn world_to_screen_x(&self, pos: Vector2) -> f64 {
        pos.x * self.scale
    }

    /// World y grows upwards, screen y grows downwards.
    #[inline]
    pub fn world_to_screen_y(&self, pos: Vector2) -> f64 {
        self.canvas_height - pos.y * self.scale
    }

    #[inline]
    pub fn radius_to_screen(&self, radius: f64) -> f64 {
        radius * self.scale
    }

    /// Backing-store size in physical pixels for a display with the given device pixel ratio.
    /// Ratios at or below 1 keep the logical size.
    pub fn with_pixel_ratio(&self, ratio: f64) -> (u32, u32) {
        let ratio = if ratio > 1.0 { ratio } else { 1.0 };
        (
            (self.canvas_width * ratio).round() as u32,
            (self.canvas_height * ratio).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    #[test]
    fn fit_uses_the_shorter_side() {
        let vp = Viewport::fit(800.0, 400.0, 20.0);
        assert_eq!(vp.scale, 20.0);
        assert_eq!(vp.world_size(), WorldSize::new(40.0, 20.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::fit(400.0, 400.0, 20.0);
        let p = vec2(1.0, 0.0);
        assert_eq!(vp.world_to_screen_x(p), 20.0);
        assert_eq!(vp.world_to_screen_y(p), 400.0);
        assert_eq!(vp.world_to_screen_y(vec2(0.0, 20.0)), 0.0);
        assert_eq!(vp.radius_to_screen(0.5), 10.0);
    }

    #[test]
    fn pixel_ratio_scales_backing_store() {
        let vp = Viewport::fit(300.0, 200.0, 20.0);
        assert_eq!(vp.with_pixel_ratio(2.0), (600, 400));
        assert_eq!(vp.with_pixel_ratio(0.5), (300, 200));
    }
}
