//! CLI command implementations
//!
//! Each submodule implements a group of sampling commands. Commands draw from
//! the `RandomState` built in `main` and return the rendered output.

pub mod continuous;
pub mod discrete;
pub mod seed;
pub mod sequence;

use augment_random::Shape;

/// Parses a comma separated list of axis lengths such as `3,4`.
pub fn parse_shape(s: &str) -> std::result::Result<Shape, String> {
    let dims = s
        .split(',')
        .map(|d| {
            d.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid axis length `{}`", d.trim()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Shape::new(dims))
}
