//! Integer distribution commands: poisson and randint.

use std::fmt::Display;

use augment_random::sampling::{poisson_with, randint_with, PoissonParams, RandintParams};
use augment_random::{RandomState, Shape};
use clap::ValueEnum;
use num_traits::PrimInt;
use rand::distributions::uniform::SampleUniform;
use serde::Serialize;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::{render, PlainValue};
use crate::{CliError, Result};

/// Output integer type for randint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IntDtype {
    I8,
    I16,
    #[default]
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

/// Run the poisson command
pub fn poisson(
    rng: &mut RandomState,
    lam: f64,
    size: Option<Shape>,
    config: &CliConfig,
) -> Result<String> {
    debug!(lam, ?size, "poisson");
    let params = PoissonParams { lam, size };
    render(&poisson_with(rng, &params)?, config)
}

/// Run the randint command
pub fn randint(
    rng: &mut RandomState,
    low: i64,
    high: Option<i64>,
    size: Option<Shape>,
    dtype: IntDtype,
    config: &CliConfig,
) -> Result<String> {
    debug!(low, ?high, ?size, ?dtype, "randint");
    match dtype {
        IntDtype::I8 => randint_as::<i8>(rng, low, high, size, config),
        IntDtype::I16 => randint_as::<i16>(rng, low, high, size, config),
        IntDtype::I32 => randint_as::<i32>(rng, low, high, size, config),
        IntDtype::I64 => randint_as::<i64>(rng, low, high, size, config),
        IntDtype::U8 => randint_as::<u8>(rng, low, high, size, config),
        IntDtype::U16 => randint_as::<u16>(rng, low, high, size, config),
        IntDtype::U32 => randint_as::<u32>(rng, low, high, size, config),
        IntDtype::U64 => randint_as::<u64>(rng, low, high, size, config),
    }
}

fn randint_as<T>(
    rng: &mut RandomState,
    low: i64,
    high: Option<i64>,
    size: Option<Shape>,
    config: &CliConfig,
) -> Result<String>
where
    T: PrimInt + SampleUniform + Display + TryFrom<i64> + Serialize + PlainValue,
{
    let cast = |name: &str, value: i64| -> Result<T> {
        T::try_from(value).map_err(|_| {
            CliError::InvalidArgument(format!(
                "{} = {} does not fit the requested dtype",
                name, value
            ))
        })
    };
    let params = RandintParams {
        low: cast("low", low)?,
        high: high.map(|h| cast("high", h)).transpose()?,
        size,
    };
    render(&randint_with(rng, &params)?, config)
}
