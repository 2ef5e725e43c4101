use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use serde::Serialize;

use sparsevec_core::{SparseVector, Value};

use crate::convert::cli::MAX_DENSE_DIM;
use crate::input::{DType, parse_dense, parse_sparse, read_arg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Dense,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "dense" => Ok(OutputFormat::Dense),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

pub fn run_convert(matches: &ArgMatches, dtype: DType) -> Result<()> {
    let input = read_arg(matches, "input")?;
    let format: OutputFormat = matches
        .get_one::<String>("to")
        .map(|s| s.as_str())
        .unwrap_or("text")
        .parse()?;
    let from_dense = matches.get_flag("dense");

    let output = with_dtype!(dtype, convert(&input, from_dense, format))?;
    info!("converted {} bytes of input to {:?}", input.len(), format);
    println!("{}", output);

    Ok(())
}

/// Read `input` (sparse text, or a dense list when `from_dense` is set) and render it as `format`.
pub fn convert<V>(input: &str, from_dense: bool, format: OutputFormat) -> Result<String>
where
    V: Value + Serialize,
{
    let sv: SparseVector<V> = if from_dense {
        parse_dense(input)?
    } else {
        parse_sparse(input)?
    };
    debug!("parsed {} entries, dim {}", sv.len(), sv.dim());

    match format {
        OutputFormat::Text => Ok(sv.to_text()),
        OutputFormat::Dense => {
            if sv.dim() > MAX_DENSE_DIM {
                anyhow::bail!(
                    "Vector dimension {} is too large for dense output (limit {})",
                    sv.dim(),
                    MAX_DENSE_DIM
                );
            }
            Ok(sv
                .to_dense()
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>()
                .join(","))
        }
        OutputFormat::Json => {
            serde_json::to_string(&sv).context("Failed to serialize vector to JSON")
        }
    }
}
