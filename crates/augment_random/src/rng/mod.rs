//! # Random Number Generation Infrastructure
//!
//! This module provisions the randomness source used by every sampling
//! operation in [`crate::sampling`].
//!
//! - **Caller-owned reproducibility**: [`RandomState::from_seed`] gives a
//!   deterministic sequence for a fixed seed
//! - **Fresh by default**: [`new_source`] seeds a new generator from OS entropy
//!   whenever the caller has none to supply
//! - **No global state**: every source is an independent, exclusively owned
//!   value; nothing is cached between calls
//!
//! ## Module Structure
//!
//! - `state`: the [`RandomState`] wrapper and the seeding helpers
//!
//! ## Usage Example
//!
//! ```rust
//! use augment_random::rng::{new_source, RandomState};
//! use rand::Rng;
//!
//! // Reproducible: the caller fixes the seed
//! let mut fixed = RandomState::from_seed(12345);
//! let flip: bool = fixed.gen_bool(0.5);
//!
//! // Unpredictable: seeded from the operating system
//! let mut fresh = new_source().unwrap();
//! let brightness: f64 = fresh.gen_range(0.8..1.2);
//! # let _ = (flip, brightness);
//! ```

mod state;

// Public re-exports
pub use state::{acquire_seed, new_source, RandomState};
