//! Rendering of samples for stdout.

use augment_random::Sample;
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Text form of a single value in plain output.
pub trait PlainValue {
    fn render(&self, precision: usize) -> String;
}

impl PlainValue for f64 {
    fn render(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl PlainValue for String {
    fn render(&self, _precision: usize) -> String {
        self.clone()
    }
}

macro_rules! impl_plain_value_for_int {
    ($($t:ty),*) => {
        $(
            impl PlainValue for $t {
                fn render(&self, _precision: usize) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_plain_value_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

#[derive(Serialize)]
struct Report<'a, T> {
    shape: &'a [usize],
    values: Vec<&'a T>,
}

/// Renders a sample according to the configured output format.
///
/// Plain output puts each run of the last axis on its own line; a scalar or
/// 1-D sample is a single line.
pub fn render<T>(sample: &Sample<T>, config: &CliConfig) -> Result<String>
where
    T: Serialize + PlainValue,
{
    match config.format {
        OutputFormat::Json => {
            let report = Report {
                shape: sample.shape(),
                values: sample.iter().collect(),
            };
            Ok(serde_json::to_string(&report)?)
        }
        OutputFormat::Plain => {
            let cells: Vec<String> = sample
                .iter()
                .map(|v| v.render(config.precision))
                .collect();
            let row_len = match sample.shape() {
                [] | [_] => cells.len().max(1),
                [.., last] => (*last).max(1),
            };
            let lines: Vec<String> = cells.chunks(row_len).map(|row| row.join(" ")).collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Renders a flat list of values as a 1-D sample.
pub fn render_list<T>(values: Vec<T>, config: &CliConfig) -> Result<String>
where
    T: Serialize + PlainValue,
{
    render(&Sample::from(values), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(precision: usize) -> CliConfig {
        CliConfig {
            format: OutputFormat::Plain,
            precision,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_render_json_scalar() {
        let out = render(&Sample::Scalar(3_i32), &CliConfig::default()).unwrap();
        assert_eq!(out, r#"{"shape":[],"values":[3]}"#);
    }

    #[test]
    fn test_render_json_array() {
        let out = render_list(vec![1_u64, 2, 3], &CliConfig::default()).unwrap();
        assert_eq!(out, r#"{"shape":[3],"values":[1,2,3]}"#);
    }

    #[test]
    fn test_render_plain_rows() {
        let sample = Sample::from(vec![0.5_f64, 1.0, 1.5, 2.0])
            .into_array()
            .into_shape(vec![2, 2])
            .map(Sample::Array)
            .unwrap();
        let out = render(&sample, &plain(1)).unwrap();
        assert_eq!(out, "0.5 1.0\n1.5 2.0");
    }

    #[test]
    fn test_render_plain_strings() {
        let out = render_list(vec!["b".to_string(), "a".to_string()], &plain(3)).unwrap();
        assert_eq!(out, "b a");
    }

    #[test]
    fn test_render_plain_empty() {
        let out = render_list(Vec::<i32>::new(), &plain(3)).unwrap();
        assert_eq!(out, "");
    }
}
