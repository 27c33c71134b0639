//! Builds samples for larger parts of the contour out of first-quadrant marching passes.
//!
//! The first quadrant is sampled as two halves that meet at pi/4: the lower half is marched
//! directly, and the upper half is marched on the axis-swapped shape and mirrored back via
//! `theta -> pi/2 - theta`.  This way both ends of the quadrant are approached from an axis,
//! where the near-zero formula handles the degenerate part of the parameterization.  The other
//! three quadrants are reflections and shifts of the first.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::{
  contour::contour_points,
  marcher::{sample_quadrant, AngleSamples, SamplingConfig},
  ShapeParams, Vec2,
};

/// Samples the first quadrant, [0, pi/2].
///
/// `config.theta_max` is ignored; each of the two passes stops at pi/4.  The output starts at
/// exactly 0 and ends at exactly pi/2.  There is no entry in `deltas` for the gap between the
/// two passes, so `deltas.len() == thetas.len() - 2`.
pub fn sample_half(shape: &ShapeParams, config: &SamplingConfig) -> AngleSamples {
  let half_config = config.with_theta_max(FRAC_PI_4);
  let forward = sample_quadrant(shape, &half_config);
  let backward = sample_quadrant(&shape.swapped(), &half_config);

  let mut thetas = forward.thetas;
  thetas.extend(backward.thetas.iter().rev().map(|theta| FRAC_PI_2 - theta));

  let mut deltas = forward.deltas;
  deltas.extend(backward.deltas.iter().rev());

  let mut regimes = forward.regimes;
  regimes.extend(backward.regimes.iter().rev());

  AngleSamples {
    thetas,
    deltas,
    regimes,
    reached_theta_max: forward.reached_theta_max && backward.reached_theta_max,
  }
}

/// Samples the whole contour, [-pi, pi].
///
/// Given the first-quadrant angles `q1` from `sample_half`, the output is the concatenation of
/// quadrants 3, 4, 1, and 2:
///
/// ```text
/// q3 = -reverse(q1 + pi/2)
/// q4 = -reverse(q1)
/// q2 = q1 + pi/2
/// ```
///
/// Every quadrant contributes the same number of angles, so the seams at -pi/2, 0, and pi/2 each
/// appear twice.
pub fn sample_full_circle(shape: &ShapeParams, config: &SamplingConfig) -> Vec<f64> {
  let q1 = sample_half(shape, config).thetas;
  compose_full_circle(&q1)
}

fn compose_full_circle(q1: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(q1.len() * 4);
  // q3
  out.extend(q1.iter().rev().map(|theta| -(theta + FRAC_PI_2)));
  // q4
  out.extend(q1.iter().rev().map(|theta| -theta));
  // q1
  out.extend_from_slice(q1);
  // q2
  out.extend(q1.iter().map(|theta| theta + FRAC_PI_2));
  out
}

/// Samples the whole contour and evaluates it, producing points spaced roughly `config.k` apart.
pub fn sample_contour(shape: &ShapeParams, config: &SamplingConfig) -> Vec<Vec2> {
  contour_points(&sample_full_circle(shape, config), shape)
}
