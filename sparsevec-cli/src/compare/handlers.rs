use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;
use log::{debug, info};

use sparsevec_core::Value;

use crate::input::{DType, parse_sparse, read_arg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl FromStr for CompareOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(CompareOp::Eq),
            "ne" => Ok(CompareOp::Ne),
            "le" => Ok(CompareOp::Le),
            "ge" => Ok(CompareOp::Ge),
            "lt" => Ok(CompareOp::Lt),
            "gt" => Ok(CompareOp::Gt),
            _ => anyhow::bail!("Unknown comparison: {}", s),
        }
    }
}

pub fn run_compare(matches: &ArgMatches, dtype: DType) -> Result<()> {
    let op: CompareOp = matches
        .get_one::<String>("op")
        .expect("--op is required")
        .parse()?;
    let a = read_arg(matches, "VEC_A")?;
    let b = read_arg(matches, "VEC_B")?;

    let holds = with_dtype!(dtype, apply_compare(op, &a, &b))?;
    info!("{:?} is {}", op, holds);

    if matches.get_flag("exit-code") {
        if !holds {
            std::process::exit(1);
        }
    } else {
        println!("{}", holds);
    }

    Ok(())
}

/// Evaluate `a <op> b` on two vectors in text form.
pub fn apply_compare<V: Value>(op: CompareOp, a: &str, b: &str) -> Result<bool> {
    let a = parse_sparse::<V>(a)?;
    let b = parse_sparse::<V>(b)?;
    debug!("a = {}, b = {}", a, b);

    Ok(match op {
        CompareOp::Eq => a.equals(&b),
        CompareOp::Ne => a.not_equals(&b),
        CompareOp::Le => a.less_or_equal(&b),
        CompareOp::Ge => a.greater_or_equal(&b),
        CompareOp::Lt => a.less_than(&b),
        CompareOp::Gt => a.greater_than(&b),
    })
}
