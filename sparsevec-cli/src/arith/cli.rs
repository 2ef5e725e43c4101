use clap::{Command, arg};

pub const ARITH_CMD: &str = "arith";

pub fn create_arith_cli() -> Command {
    Command::new(ARITH_CMD)
        .about("Combine two sparse vectors element-wise. Only indices stored in B are visited.")
        .arg_required_else_help(true)
        .arg(
            arg!(--op <OP> "Operation to apply")
                .value_parser(["add", "sub", "mul"])
                .required(true),
        )
        .arg(
            arg!(-a <VEC_A> "Left vector, e.g. {0:1,2:3} (use - for stdin)")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            arg!(-b <VEC_B> "Right vector, e.g. {2:3,5:1} (use - for stdin)")
                .required(true)
                .allow_hyphen_values(true),
        )
}
