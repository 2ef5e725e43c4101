use clap::{Arg, ArgAction, Command, arg};

pub const CONVERT_CMD: &str = "convert";

/// Largest dimension `--to dense` will materialize.
pub const MAX_DENSE_DIM: usize = 100_000_000;

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Convert a vector between the sparse text, dense list and JSON map forms.")
        .arg_required_else_help(true)
        .arg(
            arg!(-i --input <VEC> "Vector to convert (use - for stdin)")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            arg!(--to <FORMAT> "Output format")
                .value_parser(["text", "dense", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("dense")
                .long("dense")
                .action(ArgAction::SetTrue)
                .help("Read the input as a comma separated dense list, e.g. 1,0,2.5"),
        )
}
