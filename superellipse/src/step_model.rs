//! Local step-size model.
//!
//! Given the current angle `theta` in the first quadrant, computes the angular step that
//! advances the contour by an arc length of roughly `k`.  The general formula divides `k` by
//! the local speed of the parameterization, which is 0/0 at both ends of the quadrant, so the
//! angles within `theta_threshold` of 0 and pi/2 use closed-form inversions of the contour
//! equation instead.

use std::f64::consts::FRAC_PI_2;

use crate::{contour::signed_pow, ShapeParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
  /// `theta < theta_threshold`
  NearZero,
  /// `pi/2 - theta < theta_threshold`
  NearBoundary,
  Interior,
}

impl Regime {
  /// Picks the step formula to use at `theta`.  The distance to 0 is checked first, so a
  /// threshold wide enough to cover the whole quadrant resolves to `NearZero`.
  pub fn classify(theta: f64, theta_threshold: f64) -> Self {
    if theta < theta_threshold {
      Regime::NearZero
    } else if FRAC_PI_2 - theta < theta_threshold {
      Regime::NearBoundary
    } else {
      Regime::Interior
    }
  }

  pub fn step(self, theta: f64, shape: &ShapeParams, k: f64) -> f64 {
    match self {
      Regime::NearZero => near_zero_step(theta, shape, k),
      Regime::NearBoundary => near_boundary_step(theta, shape, k),
      Regime::Interior => interior_step(theta, shape, k),
    }
  }
}

/// `|k / epsilon * sqrt(a / (b + c))|`.  Undefined (NaN) at exactly 0 and pi/2.
pub fn interior_step(theta: f64, shape: &ShapeParams, k: f64) -> f64 {
  let (sin, cos) = theta.sin_cos();
  let epsilon = shape.epsilon();

  let a = cos.powi(2) * sin.powi(2);
  let b = shape.a1().powi(2) * signed_pow(cos, epsilon).powi(2) * sin.powi(4);
  let c = shape.a2().powi(2) * signed_pow(sin, epsilon).powi(2) * cos.powi(4);

  (k / epsilon * (a / (b + c)).sqrt()).abs()
}

pub fn near_zero_step(theta: f64, shape: &ShapeParams, k: f64) -> f64 {
  let epsilon = shape.epsilon();
  let target = k / shape.a2() - signed_pow(theta, epsilon);
  (signed_pow(target, 1. / epsilon) - theta).abs()
}

/// Mirror image of `near_zero_step` under `theta -> pi/2 - theta`, `a2 -> a1`.
pub fn near_boundary_step(theta: f64, shape: &ShapeParams, k: f64) -> f64 {
  let epsilon = shape.epsilon();
  let remaining = FRAC_PI_2 - theta;
  let target = k / shape.a1() - signed_pow(remaining, epsilon);
  (signed_pow(target, 1. / epsilon) - remaining).abs()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scenario_shape() -> ShapeParams {
    ShapeParams::new(0.2, 20., 20.).unwrap()
  }

  #[test]
  fn test_classify() {
    assert_eq!(Regime::classify(0., 0.02), Regime::NearZero);
    assert_eq!(Regime::classify(0.019, 0.02), Regime::NearZero);
    assert_eq!(Regime::classify(0.02, 0.02), Regime::Interior);
    assert_eq!(Regime::classify(0.5, 0.02), Regime::Interior);
    assert_eq!(Regime::classify(FRAC_PI_2 - 0.03, 0.02), Regime::Interior);
    assert_eq!(Regime::classify(FRAC_PI_2 - 0.019, 0.02), Regime::NearBoundary);
  }

  /// The distance to the upper end of the quadrant is measured from pi/2, not from pi.
  #[test]
  fn test_near_boundary_fires_close_to_right_angle() {
    for theta in [FRAC_PI_2 - 0.001, FRAC_PI_2 - 0.015, FRAC_PI_2] {
      assert_eq!(
        Regime::classify(theta, 0.02),
        Regime::NearBoundary,
        "theta={theta}"
      );
    }
    // measured from pi this would be `pi - theta ~= 1.59`, well outside the threshold, and the
    // interior formula would be used instead
    let theta = FRAC_PI_2 - 0.019;
    assert!(std::f64::consts::PI - theta > 0.02);
    assert_eq!(Regime::classify(theta, 0.02), Regime::NearBoundary);
  }

  #[test]
  fn test_zero_threshold_is_always_interior_inside_quadrant() {
    assert_eq!(Regime::classify(1e-9, 0.), Regime::Interior);
    assert_eq!(Regime::classify(FRAC_PI_2 - 1e-9, 0.), Regime::Interior);
  }

  #[test]
  fn test_interior_step_undefined_at_zero() {
    let shape = scenario_shape();
    assert!(interior_step(0., &shape, 1.).is_nan());
  }

  #[test]
  fn test_near_zero_step_at_origin() {
    // (k / a2)^(1 / epsilon) = 0.05^5
    let step = near_zero_step(0., &scenario_shape(), 1.);
    assert!((step - 3.125e-7).abs() < 1e-18, "step={step}");
    assert_eq!(Regime::NearZero.step(0., &scenario_shape(), 1.), step);
  }

  #[test]
  fn test_near_zero_step_negative_target_stays_real() {
    // theta^epsilon > k / a2 here, so the base of the outer power is negative
    let shape = scenario_shape();
    let theta = 0.001;
    let step = near_zero_step(theta, &shape, 1.);
    assert!(step.is_finite());
    assert!(step > 0.);

    let target: f64 = 0.05 - theta.powf(0.2);
    assert!(target < 0.);
    let expected = (-(-target).powf(5.) - theta).abs();
    assert!((step - expected).abs() < 1e-15);
  }

  #[test]
  fn test_near_boundary_step_mirrors_near_zero() {
    let shape = ShapeParams::new(0.4, 3., 7.).unwrap();
    for offset in [0., 1e-4, 0.01] {
      let near_zero = near_zero_step(offset, &shape.swapped(), 0.5);
      let near_boundary = near_boundary_step(FRAC_PI_2 - offset, &shape, 0.5);
      assert!(
        (near_zero - near_boundary).abs() < 1e-12,
        "offset={offset}: {near_zero} vs {near_boundary}"
      );
    }
  }

  #[test]
  fn test_interior_step_circle_is_arc_length() {
    // unit circle: speed is 1 everywhere so the step is exactly k
    let shape = ShapeParams::default();
    for theta in [0.1, 0.5, 1.2] {
      let step = interior_step(theta, &shape, 0.025);
      assert!((step - 0.025).abs() < 1e-12, "theta={theta} step={step}");
    }
  }

  #[test]
  fn test_interior_step_symmetric_for_equal_axes() {
    let shape = scenario_shape();
    for theta in [0.05, 0.3, 0.7] {
      let lo = interior_step(theta, &shape, 1.);
      let hi = interior_step(FRAC_PI_2 - theta, &shape, 1.);
      assert!((lo - hi).abs() < 1e-9 * lo.max(1.), "{lo} vs {hi}");
    }
  }
}
