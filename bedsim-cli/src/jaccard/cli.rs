use clap::{Command, arg};

pub const JACCARD_CMD: &str = "jaccard";

pub fn create_jaccard_cli() -> Command {
    Command::new(JACCARD_CMD)
        .about("Jaccard similarity of the coverage of two BED files.")
        .arg_required_else_help(true)
        .arg(arg!(-a <bed_a> "First BED file").required(true))
        .arg(arg!(-b <bed_b> "Second BED file").required(true))
}
