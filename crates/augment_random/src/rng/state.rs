//! Seeded generator provisioning.
//!
//! This module provides [`RandomState`], the randomness source handed to every
//! sampling operation, together with the helpers that seed a fresh instance
//! from operating system entropy.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::error::{RandomError, RandomResult};

/// Randomness source for augmentation parameter sampling.
///
/// Wraps a [`StdRng`] initialised from a 32-bit seed. The seed is consumed at
/// construction and is not retained. Every draw takes `&mut self`, so a single
/// instance has exactly one writer at a time.
///
/// `RandomState` implements [`RngCore`], so it also works with any `rand` or
/// `rand_distr` API directly.
///
/// # Examples
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use rand::Rng;
///
/// let mut rng1 = RandomState::from_seed(12345);
/// let mut rng2 = RandomState::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen::<f64>(), rng2.gen::<f64>());
/// ```
#[derive(Debug)]
pub struct RandomState {
    /// The underlying PRNG instance.
    inner: StdRng,
}

impl RandomState {
    /// Creates a new source initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u32) -> Self {
        Self {
            inner: StdRng::seed_from_u64(u64::from(seed)),
        }
    }

    /// Creates a new source seeded from operating system entropy.
    ///
    /// Equivalent to [`new_source`].
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyUnavailable`] if the entropy source fails.
    pub fn from_entropy() -> RandomResult<Self> {
        new_source()
    }
}

impl RngCore for RandomState {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Draws a uniformly distributed 32-bit seed from the operating system.
///
/// # Errors
///
/// Returns [`RandomError::EntropyUnavailable`] when the OS source cannot be
/// read. No fallback to a weaker source is attempted.
///
/// # Examples
///
/// ```rust
/// use augment_random::rng::acquire_seed;
///
/// let seed: u32 = acquire_seed().unwrap();
/// # let _ = seed;
/// ```
pub fn acquire_seed() -> RandomResult<u32> {
    let mut bytes = [0u8; 4];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| RandomError::EntropyUnavailable(e.to_string()))?;
    Ok(u32::from_le_bytes(bytes))
}

/// Provisions a fresh [`RandomState`] seeded via [`acquire_seed`].
///
/// Each call yields an independent, unshared source. Two sources created this
/// way share a seed with probability about 2^-32.
///
/// # Errors
///
/// Returns [`RandomError::EntropyUnavailable`] if seeding fails.
pub fn new_source() -> RandomResult<RandomState> {
    let seed = acquire_seed()?;
    tracing::trace!("provisioned fresh random state");
    Ok(RandomState::from_seed(seed))
}
