use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;
use log::{debug, info};

use sparsevec_core::Value;

use crate::input::{DType, parse_sparse, read_arg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl FromStr for ArithOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ArithOp::Add),
            "sub" => Ok(ArithOp::Sub),
            "mul" => Ok(ArithOp::Mul),
            _ => anyhow::bail!("Unknown arithmetic operation: {}", s),
        }
    }
}

pub fn run_arith(matches: &ArgMatches, dtype: DType) -> Result<()> {
    let op: ArithOp = matches
        .get_one::<String>("op")
        .expect("--op is required")
        .parse()?;
    let a = read_arg(matches, "VEC_A")?;
    let b = read_arg(matches, "VEC_B")?;

    let result = with_dtype!(dtype, apply_arith(op, &a, &b))?;
    info!("{:?} produced {}", op, result);
    println!("{}", result);

    Ok(())
}

/// Apply `op` to two vectors in text form and return the canonical text of the result.
pub fn apply_arith<V: Value>(op: ArithOp, a: &str, b: &str) -> Result<String> {
    let a = parse_sparse::<V>(a)?;
    let b = parse_sparse::<V>(b)?;
    debug!("a = {}, b = {}", a, b);

    let result = match op {
        ArithOp::Add => a.add(&b),
        ArithOp::Sub => a.subtract(&b),
        ArithOp::Mul => a.multiply(&b),
    };

    Ok(result.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(ArithOp::Add, "{0:1,2:6,5:1}")]
    #[case(ArithOp::Sub, "{0:1,5:-1}")]
    #[case(ArithOp::Mul, "{0:1,2:9}")]
    fn test_apply_arith(#[case] op: ArithOp, #[case] expected: &str) {
        let result = apply_arith::<i64>(op, "{0:1,2:3}", "{2:3,5:1}").unwrap();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_apply_arith_float() {
        let result = apply_arith::<f64>(ArithOp::Add, "{0:0.5}", "{0:0.25,1:2}").unwrap();
        assert_eq!(result, "{0:0.75,1:2}");
    }

    #[rstest]
    fn test_apply_arith_bad_input() {
        assert!(apply_arith::<f32>(ArithOp::Add, "{abc:2}", "{}").is_err());
    }

    #[rstest]
    fn test_unknown_op() {
        assert!("div".parse::<ArithOp>().is_err());
    }
}
