//! JSON sampler parameters, as sent over from the JS side.
//!
//! Every field is optional; missing fields fall back to the unit circle and the default
//! sampling config.

use nanoserde::DeJson;

use crate::{
  marcher::{
    DEFAULT_K, DEFAULT_MAX_ITERATIONS, DEFAULT_THETA_MAX, DEFAULT_THETA_THRESHOLD,
  },
  ErrorStack, SamplingConfig, ShapeParams,
};

#[derive(Clone, Debug, Default, DeJson)]
pub struct SamplerParams {
  pub epsilon: Option<f64>,
  pub a1: Option<f64>,
  pub a2: Option<f64>,
  pub k: Option<f64>,
  pub theta_threshold: Option<f64>,
  pub max_iterations: Option<usize>,
  pub theta_max: Option<f64>,
}

impl SamplerParams {
  pub fn from_json(json: &str) -> Result<Self, ErrorStack> {
    SamplerParams::deserialize_json(json).map_err(|err| {
      ErrorStack::new(format!("{err:?}")).wrap("Failed to parse sampler params JSON")
    })
  }

  pub fn shape(&self) -> Result<ShapeParams, ErrorStack> {
    ShapeParams::new(
      self.epsilon.unwrap_or(1.),
      self.a1.unwrap_or(1.),
      self.a2.unwrap_or(1.),
    )
    .map_err(|err| err.wrap("Invalid shape parameters"))
  }

  pub fn config(&self) -> Result<SamplingConfig, ErrorStack> {
    SamplingConfig::new(
      self.k.unwrap_or(DEFAULT_K),
      self.theta_threshold.unwrap_or(DEFAULT_THETA_THRESHOLD),
      self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
      self.theta_max.unwrap_or(DEFAULT_THETA_MAX),
    )
    .map_err(|err| err.wrap("Invalid sampling config"))
  }

  pub fn build(&self) -> Result<(ShapeParams, SamplingConfig), ErrorStack> {
    Ok((self.shape()?, self.config()?))
  }
}

/// Parses and validates sampler params in one go.
pub fn parse_sampler_params(json: &str) -> Result<(ShapeParams, SamplingConfig), ErrorStack> {
  SamplerParams::from_json(json)?
    .build()
    .map_err(|err| err.wrap("Error building sampler params"))
}
