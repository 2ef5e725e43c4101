use std::io::{self, Read};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use sparsevec_core::{SparseVector, Value};

/// Placeholder argument value that means "read this vector from stdin".
pub const STDIN_ARG: &str = "-";

/// Value type selected with `--dtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    F32,
    F64,
    I32,
    I64,
}

impl FromStr for DType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f32" => Ok(DType::F32),
            "f64" => Ok(DType::F64),
            "i32" => Ok(DType::I32),
            "i64" => Ok(DType::I64),
            _ => anyhow::bail!("Unknown value type: {}. Valid options are f32, f64, i32, i64", s),
        }
    }
}

/// Run a generic function with the value type picked by a [`DType`].
macro_rules! with_dtype {
    ($dtype:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $dtype {
            $crate::input::DType::F32 => $func::<f32>($($arg),*),
            $crate::input::DType::F64 => $func::<f64>($($arg),*),
            $crate::input::DType::I32 => $func::<i32>($($arg),*),
            $crate::input::DType::I64 => $func::<i64>($($arg),*),
        }
    };
}

///
/// Fetch the raw text of a vector argument, reading stdin when it is `-`.
///
pub fn read_arg(matches: &ArgMatches, name: &str) -> Result<String> {
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("Missing required argument: {}", name))?;

    if raw == STDIN_ARG {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read vector from stdin")?;
        debug!("read {} bytes for '{}' from stdin", buffer.len(), name);
        Ok(buffer)
    } else {
        Ok(raw.to_string())
    }
}

/// Parse a sparse vector in `{index:value,...}` form.
pub fn parse_sparse<V: Value>(text: &str) -> Result<SparseVector<V>> {
    SparseVector::from_text(text).with_context(|| format!("Invalid sparse vector: {}", text.trim()))
}

/// Parse a comma separated dense list such as `1, 0, 2.5`.
pub fn parse_dense<V: Value>(text: &str) -> Result<SparseVector<V>> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '[' && *c != ']')
        .collect();
    if cleaned.is_empty() {
        return Ok(SparseVector::empty());
    }

    let values = cleaned
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<V>()
                .map_err(|_| anyhow::anyhow!("Invalid value at position {}: '{}'", i, token))
        })
        .collect::<Result<Vec<V>>>()?;

    Ok(SparseVector::from_dense(&values))
}
