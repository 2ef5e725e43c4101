#[macro_use]
mod input;
mod arith;
mod compare;
mod convert;

use anyhow::Result;
use clap::{Command, arg};
use log::debug;

use input::DType;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "sparsevec";
    pub const BIN_NAME: &str = "sparsevec";
    pub const DTYPE_ARG: &str = "dtype";
    pub const DEFAULT_DTYPE: &str = "f32";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Arithmetic, Pareto comparison and format conversion for sparse vectors written as {index:value,...}.")
        .subcommand_required(true)
        .arg(
            arg!(--dtype <DTYPE> "Value type of the vectors")
                .value_parser(["f32", "f64", "i32", "i64"])
                .default_value(consts::DEFAULT_DTYPE)
                .global(true),
        )
        .arg(arg!(-v --verbose "Log debug output to stderr").global(true))
        .subcommand(arith::cli::create_arith_cli())
        .subcommand(compare::cli::create_compare_cli())
        .subcommand(convert::cli::create_convert_cli())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    let dtype: DType = matches
        .get_one::<String>(consts::DTYPE_ARG)
        .map(|s| s.as_str())
        .unwrap_or(consts::DEFAULT_DTYPE)
        .parse()?;
    debug!("{} {} using value type {:?}", consts::PKG_NAME, consts::VERSION, dtype);

    match matches.subcommand() {
        //
        // ARITHMETIC
        //
        Some((arith::cli::ARITH_CMD, matches)) => {
            arith::handlers::run_arith(matches, dtype)?;
        }

        //
        // COMPARISON
        //
        Some((compare::cli::COMPARE_CMD, matches)) => {
            compare::handlers::run_compare(matches, dtype)?;
        }

        //
        // CONVERSION
        //
        Some((convert::cli::CONVERT_CMD, matches)) => {
            convert::handlers::run_convert(matches, dtype)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
