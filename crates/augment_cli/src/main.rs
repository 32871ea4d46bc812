//! augment-random CLI - command line access to the sampling facade
//!
//! Draws augmentation parameters from the terminal, mainly for inspecting
//! distributions and scripting.
//!
//! # Commands
//!
//! - `augment-random seed` - Print a fresh 32-bit seed
//! - `augment-random uniform --low 0 --high 1 --size 3,4` - Uniform draws
//! - `augment-random choice a b c --size 5 --no-replace` - Random choice
//!
//! Every sampling command uses a fresh entropy-seeded generator unless
//! `--seed` is given, in which case the output is repeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use augment_random::{new_source, RandomState, Shape};

mod commands;
mod config;
mod error;
mod output;

use commands::discrete::IntDtype;
use commands::parse_shape;
use config::{build_config, CliArgs, CliConfig};
pub use error::{CliError, Result};

/// Randomised parameter sampling for image augmentation
#[derive(Parser)]
#[command(name = "augment-random")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed the generator explicitly instead of using OS entropy
    #[arg(short, long, global = true)]
    seed: Option<u32>,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (json, plain)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Decimal places for floats in plain output
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh seed from OS entropy
    Seed,

    #[command(flatten)]
    Sample(SampleCommand),
}

/// Commands that draw from a generator
#[derive(Subcommand)]
enum SampleCommand {
    /// Uniform draws from [low, high)
    Uniform {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        low: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        high: f64,
        /// Output shape, e.g. 3,4
        #[arg(long, value_parser = parse_shape)]
        size: Option<Shape>,
    },

    /// One draw from Beta(alpha, beta)
    Beta {
        #[arg(long, default_value_t = 0.5)]
        alpha: f64,
        #[arg(long, default_value_t = 0.5)]
        beta: f64,
    },

    /// Array of uniform [0, 1) values with the given dimensions
    Rand {
        #[arg(required = true, num_args = 2..)]
        dims: Vec<usize>,
    },

    /// Array of standard normal values with the given dimensions
    Randn {
        #[arg(required = true, num_args = 2..)]
        dims: Vec<usize>,
    },

    /// Draws from N(loc, scale^2)
    Normal {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        loc: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        scale: f64,
        #[arg(long, value_parser = parse_shape)]
        size: Option<Shape>,
    },

    /// Poisson counts
    Poisson {
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        lam: f64,
        #[arg(long, value_parser = parse_shape)]
        size: Option<Shape>,
    },

    /// Random permutation of 0..N or of the given items
    Permutation {
        #[arg(conflicts_with = "items")]
        n: Option<usize>,
        /// Comma separated items to permute
        #[arg(long, value_delimiter = ',')]
        items: Vec<String>,
    },

    /// Integers from [low, high), or [0, low) when high is omitted
    Randint {
        #[arg(allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: Option<i64>,
        #[arg(long, value_parser = parse_shape)]
        size: Option<Shape>,
        #[arg(long, value_enum, default_value_t = IntDtype::I32)]
        dtype: IntDtype,
    },

    /// Uniform draws from [0, 1)
    Random {
        #[arg(long, value_parser = parse_shape)]
        size: Option<Shape>,
    },

    /// Random choice from the given items
    Choice {
        #[arg(required = true)]
        items: Vec<String>,
        #[arg(long, value_parser = parse_shape)]
        size: Option<Shape>,
        /// Sample without replacement
        #[arg(long)]
        no_replace: bool,
        /// Comma separated probabilities, one per item
        #[arg(long, value_delimiter = ',')]
        p: Option<Vec<f64>>,
    },

    /// Shuffle the given items
    Shuffle {
        #[arg(required = true)]
        items: Vec<String>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Seeded generator when `--seed` is given, otherwise a fresh entropy source.
fn generator(seed: Option<u32>) -> Result<RandomState> {
    match seed {
        Some(seed) => {
            info!(seed, "Using caller-supplied seed");
            Ok(RandomState::from_seed(seed))
        }
        None => Ok(new_source()?),
    }
}

fn sample(command: SampleCommand, rng: &mut RandomState, config: &CliConfig) -> Result<String> {
    match command {
        SampleCommand::Uniform { low, high, size } => {
            commands::continuous::uniform(rng, low, high, size, config)
        }
        SampleCommand::Beta { alpha, beta } => commands::continuous::beta(rng, alpha, beta, config),
        SampleCommand::Rand { dims } => commands::continuous::rand(rng, dims, config),
        SampleCommand::Randn { dims } => commands::continuous::randn(rng, dims, config),
        SampleCommand::Normal { loc, scale, size } => {
            commands::continuous::normal(rng, loc, scale, size, config)
        }
        SampleCommand::Poisson { lam, size } => commands::discrete::poisson(rng, lam, size, config),
        SampleCommand::Permutation { n, items } => {
            commands::sequence::permutation(rng, n, items, config)
        }
        SampleCommand::Randint {
            low,
            high,
            size,
            dtype,
        } => commands::discrete::randint(rng, low, high, size, dtype, config),
        SampleCommand::Random { size } => commands::continuous::random(rng, size, config),
        SampleCommand::Choice {
            items,
            size,
            no_replace,
            p,
        } => commands::sequence::choice(rng, items, size, !no_replace, p, config),
        SampleCommand::Shuffle { items } => commands::sequence::shuffle(rng, items, config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
        precision: cli.precision,
    })?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        format = %config.format,
        precision = config.precision,
        "Configuration loaded"
    );

    let rendered = match cli.command {
        Commands::Seed => commands::seed::run(&config)?,
        Commands::Sample(command) => sample(command, &mut generator(cli.seed)?, &config)?,
    };

    println!("{}", rendered);
    Ok(())
}
