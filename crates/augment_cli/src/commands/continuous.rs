//! Continuous distribution commands: uniform, beta, normal, rand, randn, random.

use augment_random::sampling::{
    beta_with, normal_with, rand_with, randn_with, random_with, uniform_with, BetaParams,
    NormalParams, UniformParams,
};
use augment_random::{RandomState, Sample, Shape};
use tracing::debug;

use crate::config::CliConfig;
use crate::output::render;
use crate::Result;

/// Run the uniform command
pub fn uniform(
    rng: &mut RandomState,
    low: f64,
    high: f64,
    size: Option<Shape>,
    config: &CliConfig,
) -> Result<String> {
    debug!(low, high, ?size, "uniform");
    let params = UniformParams { low, high, size };
    render(&uniform_with(rng, &params)?, config)
}

/// Run the beta command
pub fn beta(rng: &mut RandomState, alpha: f64, beta: f64, config: &CliConfig) -> Result<String> {
    debug!(alpha, beta, "beta");
    let value = beta_with(rng, &BetaParams::new(alpha, beta))?;
    render(&Sample::Scalar(value), config)
}

/// Run the rand command
pub fn rand(rng: &mut RandomState, dims: Vec<usize>, config: &CliConfig) -> Result<String> {
    debug!(?dims, "rand");
    let grid = rand_with(rng, &Shape::new(dims))?;
    render(&Sample::Array(grid), config)
}

/// Run the randn command
pub fn randn(rng: &mut RandomState, dims: Vec<usize>, config: &CliConfig) -> Result<String> {
    debug!(?dims, "randn");
    let grid = randn_with(rng, &Shape::new(dims))?;
    render(&Sample::Array(grid), config)
}

/// Run the normal command
pub fn normal(
    rng: &mut RandomState,
    loc: f64,
    scale: f64,
    size: Option<Shape>,
    config: &CliConfig,
) -> Result<String> {
    debug!(loc, scale, ?size, "normal");
    let params = NormalParams { loc, scale, size };
    render(&normal_with(rng, &params)?, config)
}

/// Run the random command
pub fn random(rng: &mut RandomState, size: Option<Shape>, config: &CliConfig) -> Result<String> {
    debug!(?size, "random");
    render(&random_with(rng, size.as_ref())?, config)
}
