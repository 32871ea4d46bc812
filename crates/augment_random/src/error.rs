//! Error types for the sampling facade.
//!
//! Two failure modes exist:
//! - `InvalidArgument`: a distribution parameter is outside its domain
//! - `EntropyUnavailable`: the host could not provide seed material

use thiserror::Error;

/// Errors raised while provisioning a generator or drawing samples.
///
/// # Examples
/// ```
/// use augment_random::RandomError;
///
/// let err = RandomError::invalid("scale", "must be non-negative, got -1");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument `scale`: must be non-negative, got -1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// A parameter was rejected before any sample was drawn.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Human-readable description of the violated constraint
        reason: String,
    },

    /// The operating system entropy source failed.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

impl RandomError {
    /// Builds an [`RandomError::InvalidArgument`] and records the rejection.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(parameter = name, %reason, "rejected sampling argument");
        RandomError::InvalidArgument { name, reason }
    }

    /// Returns `true` for parameter validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RandomError::InvalidArgument { .. })
    }
}

/// Result alias used throughout the crate.
pub type RandomResult<T> = Result<T, RandomError>;
