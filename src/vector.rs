//! 2D vector algebra for the simulation.
//!
//! Vectors are `ultraviolet::DVec2` values. The basic operations come
//! straight from ultraviolet's operator impls:
//!
//! | operation      | expression        |
//! |----------------|-------------------|
//! | add / iadd     | `a + b` / `a += b` |
//! | sub / isub     | `a - b` / `a -= b` |
//! | smul / ismul   | `s * v` / `v *= s` |
//! | mag, dot       | `v.mag()`, `a.dot(b)` |
//!
//! `DVec2` is `Copy`, so every ball owns its own position and velocity and
//! an in-place update can never leak into another ball.

use ultraviolet::DVec2;

pub type Vector2 = DVec2;

/// Shorthand constructor.
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// Guarded helpers on top of the ultraviolet vector API.
pub trait VectorExt: Sized {
    /// Euclidean distance between two points.
    fn distance(self, other: Self) -> f64;

    /// Angle in radians between two vectors, `None` if either one has zero length.
    fn angle(self, other: Self) -> Option<f64>;

    /// Unit vector in the same direction, `None` for a zero or non-finite length.
    fn try_normalized(self) -> Option<Self>;
}

impl VectorExt for Vector2 {
    #[inline]
    fn distance(self, other: Self) -> f64 {
        (self - other).mag()
    }

    fn angle(self, other: Self) -> Option<f64> {
        let denom = self.mag() * other.mag();
        if denom == 0.0 || !denom.is_finite() {
            return None;
        }
        // rounding can push the cosine a hair outside [-1, 1]
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        Some(cos.acos())
    }

    #[inline]
    fn try_normalized(self) -> Option<Self> {
        let len = self.mag();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(self / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn operators_cover_the_basic_algebra() {
        let a = vec2(1.0, 2.0);
        let b = vec2(3.0, -4.0);

        assert_eq!(a + b, vec2(4.0, -2.0));
        assert_eq!(a - b, vec2(-2.0, 6.0));
        assert_eq!(2.0 * a, vec2(2.0, 4.0));
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(b.mag(), 5.0);

        let mut c = a;
        c += b;
        c -= a;
        c *= 0.5;
        assert_eq!(c, vec2(1.5, -2.0));
        // the copy was mutated, not the original
        assert_eq!(a, vec2(1.0, 2.0));
    }

    #[test]
    fn distance_is_magnitude_of_difference() {
        assert_eq!(vec2(0.0, 0.0).distance(vec2(3.0, 4.0)), 5.0);
        assert_eq!(vec2(-1.0, 1.0).distance(vec2(-1.0, 1.0)), 0.0);
    }

    #[test]
    fn angle_between_vectors() {
        let right = vec2(1.0, 0.0);
        let up = vec2(0.0, 2.0);
        assert!((right.angle(up).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((right.angle(-right).unwrap() - PI).abs() < 1e-12);
        assert_eq!(right.angle(right * 3.0), Some(0.0));
    }

    #[test]
    fn angle_with_zero_vector_is_none() {
        assert_eq!(Vector2::zero().angle(vec2(1.0, 1.0)), None);
        assert_eq!(vec2(1.0, 1.0).angle(Vector2::zero()), None);
    }

    #[test]
    fn normalize_guards_zero_length() {
        assert_eq!(Vector2::zero().try_normalized(), None);
        let n = vec2(0.0, -3.0).try_normalized().unwrap();
        assert_eq!(n, vec2(0.0, -1.0));
    }
}
