use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const RANK_CMD: &str = "rank";

pub fn create_rank_cli() -> Command {
    Command::new(RANK_CMD)
        .about("Rank reference BED files by Jaccard similarity to a query BED file.")
        .arg_required_else_help(true)
        .arg(arg!(-q --query <QUERY> "Query BED file (.bed or .bed.gz)").required(true))
        .arg(
            arg!(-d --database <DATABASE> "Directory of reference BED files [default: database/]")
                .required(false),
        )
        .arg(
            Arg::new("top-n")
                .short('n')
                .long("top-n")
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Number of matches to report [default: 3]"),
        )
        .arg(arg!(-c --config <CONFIG> "TOML file with search settings").required(false))
        .arg(
            arg!(-f --format <FORMAT> "Output format")
                .required(false)
                .value_parser(["json", "tsv"])
                .default_value("json"),
        )
        .arg(arg!(-o --output <OUTPUT> "Output path (default: stdout)").required(false))
        .arg(
            arg!(-t --threads <THREADS> "Number of worker threads")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-references")
                .long("max-references")
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Only load the first N reference files (in file name order)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Hide the progress bar"),
        )
}
