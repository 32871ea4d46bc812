//! Integer-valued draws: Poisson counts and bounded integer ranges.

use std::fmt::Display;

use num_traits::PrimInt;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Poisson};

use super::continuous::ensure_finite;
use super::shape::{fill, Sample, Shape};
use crate::error::{RandomError, RandomResult};
use crate::rng::new_source;

/// Largest rate whose draws still fit in an `i64` with overwhelming probability.
pub const POISSON_LAM_MAX: f64 = i64::MAX as f64 - 10.0 * 3_037_000_499.976_05;

/// Parameters for [`poisson`].
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonParams {
    /// Expected number of events, >= 0
    pub lam: f64,
    /// Output shape; `None` draws a single value
    pub size: Option<Shape>,
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self {
            lam: 1.0,
            size: None,
        }
    }
}

impl PoissonParams {
    /// Creates parameters for a single draw with rate `lam`.
    pub fn new(lam: f64) -> Self {
        Self { lam, size: None }
    }

    /// Requests an array of the given shape.
    pub fn with_size(mut self, size: impl Into<Shape>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Checks the rate without drawing.
    pub fn validate(&self) -> RandomResult<()> {
        ensure_finite("lam", self.lam)?;
        if self.lam < 0.0 {
            return Err(RandomError::invalid(
                "lam",
                format!("must be non-negative, got {}", self.lam),
            ));
        }
        if self.lam > POISSON_LAM_MAX {
            return Err(RandomError::invalid(
                "lam",
                format!("value too large, got {}", self.lam),
            ));
        }
        Ok(())
    }
}

/// Draws Poisson(lam) counts using `rng`.
///
/// `lam == 0` always yields 0.
pub fn poisson_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PoissonParams,
) -> RandomResult<Sample<u64>> {
    params.validate()?;
    if params.lam == 0.0 {
        return fill(params.size.as_ref(), || 0);
    }
    let dist: Poisson<f64> =
        Poisson::new(params.lam).map_err(|e| RandomError::invalid("lam", e.to_string()))?;
    fill(params.size.as_ref(), || {
        let count: f64 = dist.sample(rng);
        count as u64
    })
}

/// Draws Poisson(lam) counts using a freshly seeded source.
pub fn poisson(params: &PoissonParams) -> RandomResult<Sample<u64>> {
    poisson_with(&mut new_source()?, params)
}

/// Parameters for [`randint`].
///
/// The integer type `T` plays the role of the output dtype and defaults to
/// `i32`. With `high` set the range is `[low, high)`; without it the range is
/// `[0, low)`.
///
/// ```rust
/// use augment_random::sampling::RandintParams;
///
/// let dice = RandintParams::new(1, Some(7));
/// let bytes = RandintParams::<u8>::new(0, None::<u8>).with_size(16usize);
/// # let _ = (dice, bytes);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandintParams<T = i32> {
    /// Lower bound, or the exclusive upper bound when `high` is `None`
    pub low: T,
    /// Exclusive upper bound
    pub high: Option<T>,
    /// Output shape; `None` draws a single value
    pub size: Option<Shape>,
}

impl<T> RandintParams<T>
where
    T: PrimInt + SampleUniform + Display,
{
    /// Creates parameters for a single draw; see the type docs for the bounds.
    pub fn new(low: T, high: Option<T>) -> Self {
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

    /// Resolves the half-open range `[lo, hi)` to draw from.
    pub fn range(&self) -> RandomResult<(T, T)> {
        match self.high {
            Some(high) if self.low >= high => Err(RandomError::invalid(
                "high",
                format!("low >= high ({} >= {})", self.low, high),
            )),
            Some(high) => Ok((self.low, high)),
            None if self.low <= T::zero() => Err(RandomError::invalid(
                "low",
                format!("must be positive when high is omitted, got {}", self.low),
            )),
            None => Ok((T::zero(), self.low)),
        }
    }
}

/// Draws integers from the resolved half-open range using `rng`.
///
/// # Examples
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use augment_random::sampling::{randint_with, RandintParams};
///
/// let mut rng = RandomState::from_seed(2024);
/// let v: i32 = randint_with(&mut rng, &RandintParams::new(0, Some(10)))
///     .unwrap()
///     .scalar()
///     .unwrap();
/// assert!((0..10).contains(&v));
/// ```
pub fn randint_with<R, T>(rng: &mut R, params: &RandintParams<T>) -> RandomResult<Sample<T>>
where
    R: Rng + ?Sized,
    T: PrimInt + SampleUniform + Display,
{
    let (lo, hi) = params.range()?;
    let dist = Uniform::new(lo, hi);
    fill(params.size.as_ref(), || dist.sample(rng))
}

/// Draws integers from the resolved half-open range using a freshly seeded source.
pub fn randint<T>(params: &RandintParams<T>) -> RandomResult<Sample<T>>
where
    T: PrimInt + SampleUniform + Display,
{
    randint_with(&mut new_source()?, params)
}
