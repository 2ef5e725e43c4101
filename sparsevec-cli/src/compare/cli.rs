use clap::{Arg, ArgAction, Command, arg};

pub const COMPARE_CMD: &str = "compare";

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .about("Compare two sparse vectors over the indices stored in A and the non-zero indices of B. Prints true or false.")
        .arg_required_else_help(true)
        .arg(
            arg!(--op <OP> "Relation to test (le/ge are Pareto dominance tests)")
                .value_parser(["eq", "ne", "le", "ge", "lt", "gt"])
                .required(true),
        )
        .arg(
            arg!(-a <VEC_A> "Left vector (use - for stdin)")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            arg!(-b <VEC_B> "Right vector (use - for stdin)")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("exit-code")
                .long("exit-code")
                .action(ArgAction::SetTrue)
                .help("Print nothing and exit with status 1 when the relation does not hold"),
        )
}
