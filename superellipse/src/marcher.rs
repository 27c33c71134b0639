//! Single-quadrant marcher.
//!
//! Starting from `theta = 0`, repeatedly classifies the current angle, takes the step computed
//! by that regime's formula, and accepts the new angle as long as it stays below `theta_max`.
//! The first step that would reach `theta_max` is discarded and ends the pass.

use std::f64::consts::FRAC_PI_2;

use crate::{step_model::Regime, ErrorStack, ShapeParams};

pub const DEFAULT_K: f64 = 0.025;
pub const DEFAULT_THETA_THRESHOLD: f64 = 0.02;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_THETA_MAX: f64 = FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingConfig {
  /// Target arc length between consecutive samples
  pub k: f64,
  /// Angular distance from 0 or pi/2 inside of which the closed-form step formulas are used
  pub theta_threshold: f64,
  /// Upper bound on the number of steps taken by a single marching pass
  pub max_iterations: usize,
  /// Exclusive upper bound for the angles produced by a single marching pass
  pub theta_max: f64,
}

impl Default for SamplingConfig {
  fn default() -> Self {
    SamplingConfig {
      k: DEFAULT_K,
      theta_threshold: DEFAULT_THETA_THRESHOLD,
      max_iterations: DEFAULT_MAX_ITERATIONS,
      theta_max: DEFAULT_THETA_MAX,
    }
  }
}

impl SamplingConfig {
  pub fn new(
    k: f64,
    theta_threshold: f64,
    max_iterations: usize,
    theta_max: f64,
  ) -> Result<Self, ErrorStack> {
    if !k.is_finite() || k <= 0. {
      return Err(ErrorStack::new(format!(
        "`k` must be a finite number > 0, found: {k}"
      )));
    }
    if !theta_threshold.is_finite() || theta_threshold < 0. {
      return Err(ErrorStack::new(format!(
        "`theta_threshold` must be a finite number >= 0, found: {theta_threshold}"
      )));
    }
    if !theta_max.is_finite() || theta_max <= 0. {
      return Err(ErrorStack::new(format!(
        "`theta_max` must be a finite number > 0, found: {theta_max}"
      )));
    }

    Ok(SamplingConfig {
      k,
      theta_threshold,
      max_iterations,
      theta_max,
    })
  }

  pub fn with_theta_max(self, theta_max: f64) -> Self {
    SamplingConfig { theta_max, ..self }
  }
}

/// Output of a marching pass or of a composition of several passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngleSamples {
  pub thetas: Vec<f64>,
  /// Accepted step sizes, in the same order as the angles they separate.  For a single pass
  /// `deltas[i] == thetas[i + 1] - thetas[i]` and there is one fewer delta than angles.  Composed
  /// outputs only carry deltas for steps taken within a pass; there is no delta for a seam
  /// between passes, so indices after a seam no longer line up with `thetas`.
  pub deltas: Vec<f64>,
  /// The regime used to compute each entry of `deltas`
  pub regimes: Vec<Regime>,
  /// `false` if a pass ran out of iterations before its next step reached `theta_max`, in which
  /// case the samples stop short of the requested range.
  pub reached_theta_max: bool,
}

impl AngleSamples {
  pub fn len(&self) -> usize {
    self.thetas.len()
  }

  pub fn is_empty(&self) -> bool {
    self.thetas.is_empty()
  }

  pub fn count_regime(&self, regime: Regime) -> usize {
    self.regimes.iter().filter(|&&r| r == regime).count()
  }
}

/// Marches through the first quadrant from `theta = 0` towards `config.theta_max`, producing
/// angles whose contour points are spaced roughly `config.k` apart.
///
/// The returned angles are strictly increasing, start at exactly 0, and are all below
/// `config.theta_max`.  At most `config.max_iterations` steps are taken.
pub fn sample_quadrant(shape: &ShapeParams, config: &SamplingConfig) -> AngleSamples {
  let mut thetas = Vec::with_capacity(config.max_iterations.min(4096) + 1);
  let mut deltas = Vec::with_capacity(config.max_iterations.min(4096));
  let mut regimes = Vec::with_capacity(config.max_iterations.min(4096));

  let mut theta = 0.;
  thetas.push(theta);
  let mut reached_theta_max = false;

  for _ in 0..config.max_iterations {
    let regime = Regime::classify(theta, config.theta_threshold);
    let delta = regime.step(theta, shape, config.k);
    let next_theta = theta + delta;

    if next_theta >= config.theta_max {
      reached_theta_max = true;
      break;
    }
    // A NaN step (interior formula evaluated exactly at an axis) or a step that no longer moves
    // the angle can never make progress.
    if !(next_theta > theta) {
      log::warn!(
        "Marching stalled at theta={theta} using {regime:?} step (delta={delta}); stopping early"
      );
      break;
    }

    thetas.push(next_theta);
    deltas.push(delta);
    regimes.push(regime);
    theta = next_theta;
  }

  if !reached_theta_max {
    log::warn!(
      "Quadrant marching stopped at theta={theta} after {} samples without reaching \
       theta_max={}; increase `max_iterations` or `k`",
      thetas.len(),
      config.theta_max
    );
  }

  let samples = AngleSamples {
    thetas,
    deltas,
    regimes,
    reached_theta_max,
  };
  log::debug!(
    "Sampled quadrant of {shape:?}: {} angles ({} near zero, {} near boundary, {} interior)",
    samples.len(),
    samples.count_regime(Regime::NearZero),
    samples.count_regime(Regime::NearBoundary),
    samples.count_regime(Regime::Interior),
  );
  samples
}
