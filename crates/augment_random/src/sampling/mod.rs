//! # Sampling Facade
//!
//! Each sampling operation comes in two forms:
//!
//! - `op_with(rng, ..)` draws from a caller-supplied generator. Threading one
//!   [`RandomState`](crate::rng::RandomState) through every call makes a whole
//!   augmentation run reproducible.
//! - `op(..)` provisions a fresh, entropy-seeded generator for that single
//!   call. Two such calls are independent and cannot be replayed.
//!
//! Parameters are passed as explicit structs whose `Default` values match the
//! conventional defaults (uniform on `[0, 1)`, standard normal, `lam = 1`,
//! sampling with replacement). Invalid parameters are rejected with
//! [`RandomError::InvalidArgument`](crate::RandomError::InvalidArgument)
//! before anything is drawn.
//!
//! ## Module Structure
//!
//! - [`shape`]: output shapes and the scalar-or-array [`Sample`] container
//! - `continuous`: uniform, beta, normal, rand, randn, random
//! - `discrete`: poisson, randint
//! - `sequence`: permutation, choice, shuffle
//!
//! ## Usage Example
//!
//! ```rust
//! use augment_random::rng::RandomState;
//! use augment_random::sampling::{normal_with, uniform_with, NormalParams, UniformParams};
//!
//! let mut rng = RandomState::from_seed(2024);
//!
//! // Rotation angle in degrees
//! let angle = uniform_with(&mut rng, &UniformParams::new(-30.0, 30.0))
//!     .unwrap()
//!     .scalar()
//!     .unwrap();
//!
//! // Per-pixel gaussian noise for a 4x4 patch
//! let noise = normal_with(&mut rng, &NormalParams::new(0.0, 0.1).with_size((4usize, 4usize)))
//!     .unwrap();
//! assert_eq!(noise.shape(), &[4, 4]);
//! # let _ = angle;
//! ```

mod continuous;
mod discrete;
mod sequence;
pub mod shape;

pub use continuous::{
    beta, beta_with, normal, normal_with, rand, rand_with, randn, randn_with, random, random_with,
    uniform, uniform_with, BetaParams, NormalParams, UniformParams,
};
pub use discrete::{
    poisson, poisson_with, randint, randint_with, PoissonParams, RandintParams, POISSON_LAM_MAX,
};
pub use sequence::{
    choice, choice_index, choice_index_with, choice_with, permutation, permutation_of,
    permutation_of_array, permutation_of_array_with, permutation_of_with, permutation_with,
    shuffle, shuffle_rows, shuffle_rows_with, shuffle_with, ChoiceParams,
};
pub use shape::{Sample, Shape};
