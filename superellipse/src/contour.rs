//! Superellipse contour evaluation.
//!
//! The contour is parameterized by an angle `omega` in [-pi, pi]:
//!
//! ```text
//! C(omega) = (a1 * signed_pow(cos(omega), epsilon), a2 * signed_pow(sin(omega), epsilon))
//! ```
//!
//! `epsilon` controls how sharp the corners are (1 is an ellipse, values approaching 0 give a
//! rectangle, 2 gives a diamond) and `a1`/`a2` are the half-extents along the x and y axes.

use crate::{ErrorStack, Vec2};

/// Raises `x` to the power `p` while preserving the sign of `x`: `sign(x) * |x|^p`.
///
/// A plain `powf` returns NaN for negative bases with fractional exponents, which would make
/// every point outside of the first quadrant unusable.  `signed_pow(0, p)` is 0 for any `p`.
#[inline]
pub fn signed_pow(x: f64, p: f64) -> f64 {
  if x == 0. {
    return 0.;
  }
  x.signum() * x.abs().powf(p)
}

/// Shape of a superellipse.  Always valid once constructed; use `ShapeParams::new` to build one
/// from untrusted values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
  epsilon: f64,
  a1: f64,
  a2: f64,
}

impl Default for ShapeParams {
  /// The unit circle.
  fn default() -> Self {
    ShapeParams {
      epsilon: 1.,
      a1: 1.,
      a2: 1.,
    }
  }
}

impl ShapeParams {
  pub fn new(epsilon: f64, a1: f64, a2: f64) -> Result<Self, ErrorStack> {
    for (name, val) in [("epsilon", epsilon), ("a1", a1), ("a2", a2)] {
      if !val.is_finite() || val <= 0. {
        return Err(ErrorStack::new(format!(
          "`{name}` must be a finite number > 0, found: {val}"
        )));
      }
    }

    Ok(ShapeParams { epsilon, a1, a2 })
  }

  #[inline]
  pub fn epsilon(&self) -> f64 {
    self.epsilon
  }

  #[inline]
  pub fn a1(&self) -> f64 {
    self.a1
  }

  #[inline]
  pub fn a2(&self) -> f64 {
    self.a2
  }

  /// Returns the same shape with the x and y axis scales exchanged.  The first quadrant of the
  /// swapped shape is the mirror image of the original across the line `theta = pi / 4`.
  pub fn swapped(&self) -> Self {
    ShapeParams {
      epsilon: self.epsilon,
      a1: self.a2,
      a2: self.a1,
    }
  }
}

/// Evaluates the contour at angle `omega`.
#[inline]
pub fn contour_point(omega: f64, shape: &ShapeParams) -> Vec2 {
  Vec2::new(
    shape.a1 * signed_pow(omega.cos(), shape.epsilon),
    shape.a2 * signed_pow(omega.sin(), shape.epsilon),
  )
}

/// Evaluates the contour at each of the provided angles.
pub fn contour_points(omegas: &[f64], shape: &ShapeParams) -> Vec<Vec2> {
  omegas
    .iter()
    .map(|&omega| contour_point(omega, shape))
    .collect()
}

/// Returns the distance between each pair of consecutive points.
pub fn chord_lengths(points: &[Vec2]) -> Vec<f64> {
  points.windows(2).map(|w| (w[1] - w[0]).norm()).collect()
}
