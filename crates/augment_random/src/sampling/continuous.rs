//! Continuous distributions: uniform, beta, normal and the shaped
//! `rand`/`randn`/`random` helpers.

use ndarray::ArrayD;
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Beta, BetaError, Distribution, Normal, StandardNormal};

use super::shape::{fill, Sample, Shape};
use crate::error::{RandomError, RandomResult};
use crate::rng::new_source;

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> RandomResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RandomError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Parameters for [`uniform`].
#[derive(Debug, Clone, PartialEq)]
pub struct UniformParams {
    /// Inclusive lower bound
    pub low: f64,
    /// Exclusive upper bound
    pub high: f64,
    /// Output shape; `None` draws a single value
    pub size: Option<Shape>,
}

impl Default for UniformParams {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
            size: None,
        }
    }
}

impl UniformParams {
    /// Creates parameters for a single draw from `[low, high)`.
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            size: None,
        }
    }

    /// Requests an array of the given shape.
    pub fn with_size(mut self, size: impl Into<Shape>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Checks the bounds without drawing.
    pub fn validate(&self) -> RandomResult<()> {
        ensure_finite("low", self.low)?;
        ensure_finite("high", self.high)?;
        if self.low > self.high {
            return Err(RandomError::invalid(
                "high",
                format!("must be >= low ({}), got {}", self.low, self.high),
            ));
        }
        if !(self.high - self.low).is_finite() {
            return Err(RandomError::invalid(
                "high",
                format!("range [{}, {}) overflows", self.low, self.high),
            ));
        }
        Ok(())
    }
}

/// Samples `[low, high)` uniformly using `rng`.
///
/// A degenerate range (`low == high`) yields `low`.
///
/// # Examples
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use augment_random::sampling::{uniform_with, UniformParams};
///
/// let mut rng = RandomState::from_seed(7);
/// let v = uniform_with(&mut rng, &UniformParams::new(-1.0, 1.0))
///     .unwrap()
///     .scalar()
///     .unwrap();
/// assert!((-1.0..1.0).contains(&v));
/// ```
pub fn uniform_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: &UniformParams,
) -> RandomResult<Sample<f64>> {
    params.validate()?;
    if params.low == params.high {
        let low = params.low;
        return fill(params.size.as_ref(), || low);
    }
    let dist = Uniform::new(params.low, params.high);
    fill(params.size.as_ref(), || dist.sample(rng))
}

/// Samples `[low, high)` uniformly from a freshly seeded source.
pub fn uniform(params: &UniformParams) -> RandomResult<Sample<f64>> {
    uniform_with(&mut new_source()?, params)
}

/// Parameters for [`beta`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaParams {
    /// First shape parameter, > 0
    pub alpha: f64,
    /// Second shape parameter, > 0
    pub beta: f64,
}

impl Default for BetaParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }
}

impl BetaParams {
    /// Creates parameters from the two shape values.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    fn distribution(&self) -> RandomResult<Beta<f64>> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            ensure_finite(name, value)?;
            if value <= 0.0 {
                return Err(RandomError::invalid(
                    name,
                    format!("must be positive, got {}", value),
                ));
            }
        }
        Beta::new(self.alpha, self.beta)
            .map_err(|e| RandomError::invalid(beta_error_parameter(&e), e.to_string()))
    }
}

/// Name of the shape parameter a [`BetaError`] refers to.
fn beta_error_parameter(err: &BetaError) -> &'static str {
    match err {
        BetaError::AlphaTooSmall => "alpha",
        BetaError::BetaTooSmall => "beta",
    }
}

/// Draws one value from Beta(alpha, beta) using `rng`.
///
/// Values lie in the open interval (0, 1) in exact arithmetic. For shape
/// parameters far below 1 most of the mass sits within `f64` resolution of
/// the ends, so draws can round to exactly 0.0 or 1.0.
pub fn beta_with<R: Rng + ?Sized>(rng: &mut R, params: &BetaParams) -> RandomResult<f64> {
    let dist = params.distribution()?;
    Ok(dist.sample(rng))
}

/// Draws one value from Beta(alpha, beta) using a freshly seeded source.
pub fn beta(params: &BetaParams) -> RandomResult<f64> {
    beta_with(&mut new_source()?, params)
}

/// `rand`/`randn` take at least two strictly positive axis lengths.
fn ensure_grid(dims: &Shape) -> RandomResult<()> {
    if dims.ndim() < 2 {
        return Err(RandomError::invalid(
            "dims",
            format!("expected at least 2 dimensions, got {}", dims.ndim()),
        ));
    }
    if let Some(axis) = dims.dims().iter().position(|&d| d == 0) {
        return Err(RandomError::invalid(
            "dims",
            format!("dimension {} must be positive", axis),
        ));
    }
    Ok(())
}

fn grid<F>(dims: &Shape, draw: F) -> RandomResult<ArrayD<f64>>
where
    F: FnMut() -> f64,
{
    ensure_grid(dims)?;
    Ok(fill(Some(dims), draw)?.into_array())
}

/// Array of the given dimensions filled with values from `[0, 1)`.
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use augment_random::sampling::rand_with;
/// use augment_random::Shape;
///
/// let mut rng = RandomState::from_seed(1);
/// let grid = rand_with(&mut rng, &Shape::from((3usize, 2usize))).unwrap();
/// assert_eq!(grid.shape(), &[3, 2]);
/// ```
pub fn rand_with<R: Rng + ?Sized>(rng: &mut R, dims: &Shape) -> RandomResult<ArrayD<f64>> {
    grid(dims, || rng.gen::<f64>())
}

/// [`rand_with`] on a freshly seeded source.
pub fn rand(dims: &Shape) -> RandomResult<ArrayD<f64>> {
    rand_with(&mut new_source()?, dims)
}

/// Array of the given dimensions filled with standard normal variates.
pub fn randn_with<R: Rng + ?Sized>(rng: &mut R, dims: &Shape) -> RandomResult<ArrayD<f64>> {
    grid(dims, || StandardNormal.sample(rng))
}

/// [`randn_with`] on a freshly seeded source.
pub fn randn(dims: &Shape) -> RandomResult<ArrayD<f64>> {
    randn_with(&mut new_source()?, dims)
}

/// Parameters for [`normal`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalParams {
    /// Mean
    pub loc: f64,
    /// Standard deviation, >= 0
    pub scale: f64,
    /// Output shape; `None` draws a single value
    pub size: Option<Shape>,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
            size: None,
        }
    }
}

impl NormalParams {
    /// Creates parameters for a single draw from N(loc, scale²).
    pub fn new(loc: f64, scale: f64) -> Self {
        Self {
            loc,
            scale,
            size: None,
        }
    }

    /// Requests an array of the given shape.
    pub fn with_size(mut self, size: impl Into<Shape>) -> Self {
        self.size = Some(size.into());
        self
    }

    fn distribution(&self) -> RandomResult<Normal<f64>> {
        ensure_finite("loc", self.loc)?;
        ensure_finite("scale", self.scale)?;
        if self.scale < 0.0 {
            return Err(RandomError::invalid(
                "scale",
                format!("must be non-negative, got {}", self.scale),
            ));
        }
        Normal::new(self.loc, self.scale).map_err(|e| RandomError::invalid("scale", e.to_string()))
    }
}

/// Draws from N(loc, scale²) using `rng`.
///
/// `scale == 0` returns `loc` exactly.
pub fn normal_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: &NormalParams,
) -> RandomResult<Sample<f64>> {
    let dist = params.distribution()?;
    fill(params.size.as_ref(), || dist.sample(rng))
}

/// Draws from N(loc, scale²) using a freshly seeded source.
pub fn normal(params: &NormalParams) -> RandomResult<Sample<f64>> {
    normal_with(&mut new_source()?, params)
}

/// Draws from `[0, 1)` using `rng`.
pub fn random_with<R: Rng + ?Sized>(
    rng: &mut R,
    size: Option<&Shape>,
) -> RandomResult<Sample<f64>> {
    fill(size, || rng.gen::<f64>())
}

/// Draws from `[0, 1)` using a freshly seeded source.
pub fn random(size: Option<&Shape>) -> RandomResult<Sample<f64>> {
    random_with(&mut new_source()?, size)
}
