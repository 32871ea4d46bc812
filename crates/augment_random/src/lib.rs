//! # augment_random
//!
//! Randomised parameter sampling for image augmentation pipelines.
//!
//! The crate is a thin layer over `rand` / `rand_distr`:
//!
//! - [`rng`]: seeded generator provisioning ([`RandomState`], [`new_source`])
//! - [`sampling`]: uniform, beta, normal, Poisson, integer ranges, random
//!   choice, permutations and shuffling, each with an explicit-generator form
//!   (`*_with`) and a fresh-generator form
//! - [`error`]: [`RandomError`], returned by every fallible operation
//!
//! ## Usage Example
//!
//! ```rust
//! use augment_random::rng::RandomState;
//! use augment_random::sampling::{choice_with, randint_with, ChoiceParams, RandintParams};
//!
//! let mut rng = RandomState::from_seed(7);
//!
//! let crop_x: i32 = randint_with(&mut rng, &RandintParams::new(0, Some(224)))
//!     .unwrap()
//!     .scalar()
//!     .unwrap();
//! assert!((0..224).contains(&crop_x));
//!
//! let flips = ["none", "horizontal", "vertical"];
//! let flip = choice_with(&mut rng, &flips, &ChoiceParams::default()).unwrap();
//! assert!(flip.is_scalar());
//! ```
//!
//! ## Reproducibility
//!
//! Functions without the `_with` suffix seed a new generator on every call, so
//! their results cannot be replayed. Pipelines that must be reproducible
//! create one [`RandomState`] and pass it to the `_with` variants.

pub mod error;
pub mod rng;
pub mod sampling;

pub use error::{RandomError, RandomResult};
pub use rng::{acquire_seed, new_source, RandomState};
pub use sampling::{Sample, Shape};
