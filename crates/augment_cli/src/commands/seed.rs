//! Seed command implementation
//!
//! Prints a fresh 32-bit seed from the operating system entropy source.

use augment_random::{acquire_seed, Sample};
use tracing::info;

use crate::config::CliConfig;
use crate::output::render;
use crate::Result;

/// Run the seed command
pub fn run(config: &CliConfig) -> Result<String> {
    let seed = acquire_seed()?;
    info!("Acquired seed from OS entropy");
    render(&Sample::Scalar(u64::from(seed)), config)
}
