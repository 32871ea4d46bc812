//! Sequence commands: permutation, choice and shuffle.

use augment_random::sampling::{
    choice_with, permutation_of_with, permutation_with, shuffle_with, ChoiceParams,
};
use augment_random::{RandomState, Shape};
use tracing::debug;

use crate::config::CliConfig;
use crate::output::{render, render_list};
use crate::{CliError, Result};

/// Run the permutation command
///
/// Permutes `0..n` when `n` is given, otherwise the supplied items.
pub fn permutation(
    rng: &mut RandomState,
    n: Option<usize>,
    items: Vec<String>,
    config: &CliConfig,
) -> Result<String> {
    match n {
        Some(n) => {
            debug!(n, "permutation of range");
            render_list(permutation_with(rng, n), config)
        }
        None if !items.is_empty() => {
            debug!(count = items.len(), "permutation of items");
            render_list(permutation_of_with(rng, &items), config)
        }
        None => Err(CliError::InvalidArgument(
            "permutation needs either N or --items".to_string(),
        )),
    }
}

/// Run the choice command
pub fn choice(
    rng: &mut RandomState,
    items: Vec<String>,
    size: Option<Shape>,
    replace: bool,
    p: Option<Vec<f64>>,
    config: &CliConfig,
) -> Result<String> {
    debug!(count = items.len(), ?size, replace, "choice");
    let params = ChoiceParams { size, replace, p };
    render(&choice_with(rng, &items, &params)?, config)
}

/// Run the shuffle command
pub fn shuffle(rng: &mut RandomState, mut items: Vec<String>, config: &CliConfig) -> Result<String> {
    debug!(count = items.len(), "shuffle");
    shuffle_with(rng, &mut items);
    render_list(items, config)
}
