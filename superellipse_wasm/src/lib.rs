use std::ptr::{addr_of, addr_of_mut};

use superellipse::{
  parse_sampler_params, sample_contour, sample_full_circle, sample_half, sample_quadrant,
  AngleSamples, ErrorStack,
};
use wasm_bindgen::prelude::*;

static mut DID_INIT: bool = false;

fn maybe_init() {
  unsafe {
    if DID_INIT {
      return;
    }
    DID_INIT = true;
  }

  console_error_panic_hook::set_once();
  wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

static mut SUPERELLIPSE_ERR: String = String::new();

fn set_err(err: ErrorStack) {
  log::error!("{err}");
  unsafe {
    let old = std::mem::replace(&mut *addr_of_mut!(SUPERELLIPSE_ERR), err.to_string());
    drop(old);
  }
}

fn clear_err() {
  unsafe {
    (*addr_of_mut!(SUPERELLIPSE_ERR)).clear();
  }
}

fn get_err() -> &'static String {
  unsafe { &*addr_of!(SUPERELLIPSE_ERR) }
}

/// Returns the error from the last call that failed, or an empty string if the last call
/// succeeded.
#[wasm_bindgen]
pub fn get_superellipse_error() -> String {
  get_err().clone()
}

pub struct AngleSamplesOutput {
  pub samples: AngleSamples,
}

fn build_samples_output(
  params_json: &str,
  sample: impl Fn(&superellipse::ShapeParams, &superellipse::SamplingConfig) -> AngleSamples,
) -> *mut AngleSamplesOutput {
  maybe_init();

  let (shape, config) = match parse_sampler_params(params_json) {
    Ok(parsed) => parsed,
    Err(err) => {
      set_err(err);
      return std::ptr::null_mut();
    }
  };
  clear_err();

  let samples = sample(&shape, &config);
  Box::into_raw(Box::new(AngleSamplesOutput { samples }))
}

/// Runs a single marching pass from 0 to `theta_max`.  Returns null if the params are invalid;
/// see `get_superellipse_error`.
#[wasm_bindgen]
pub fn superellipse_sample_quadrant(params_json: &str) -> *mut AngleSamplesOutput {
  build_samples_output(params_json, sample_quadrant)
}

/// Samples the first quadrant as two mirrored passes meeting at pi/4.  Returns null if the
/// params are invalid; see `get_superellipse_error`.
#[wasm_bindgen]
pub fn superellipse_sample_half(params_json: &str) -> *mut AngleSamplesOutput {
  build_samples_output(params_json, sample_half)
}

#[wasm_bindgen]
pub fn take_angle_samples_thetas(output: *mut AngleSamplesOutput) -> Vec<f64> {
  let out = unsafe { &mut *output };
  std::mem::take(&mut out.samples.thetas)
}

#[wasm_bindgen]
pub fn take_angle_samples_deltas(output: *mut AngleSamplesOutput) -> Vec<f64> {
  let out = unsafe { &mut *output };
  std::mem::take(&mut out.samples.deltas)
}

#[wasm_bindgen]
pub fn angle_samples_reached_theta_max(output: *const AngleSamplesOutput) -> bool {
  unsafe { (*output).samples.reached_theta_max }
}

#[wasm_bindgen]
pub fn free_angle_samples(output: *mut AngleSamplesOutput) {
  if output.is_null() {
    return;
  }
  unsafe {
    drop(Box::from_raw(output));
  }
}

/// Returns angles covering [-pi, pi], or an empty vec if the params are invalid.
#[wasm_bindgen]
pub fn superellipse_sample_full_circle(params_json: &str) -> Vec<f64> {
  maybe_init();

  match parse_sampler_params(params_json) {
    Ok((shape, config)) => {
      clear_err();
      sample_full_circle(&shape, &config)
    }
    Err(err) => {
      set_err(err);
      Vec::new()
    }
  }
}

/// Returns contour points as `[x0, y0, x1, y1, ...]`, or an empty vec if the params are invalid.
#[wasm_bindgen]
pub fn superellipse_sample_contour(params_json: &str) -> Vec<f64> {
  maybe_init();

  match parse_sampler_params(params_json) {
    Ok((shape, config)) => {
      clear_err();
      sample_contour(&shape, &config)
        .into_iter()
        .flat_map(|p| [p.x, p.y])
        .collect()
    }
    Err(err) => {
      set_err(err);
      Vec::new()
    }
  }
}
