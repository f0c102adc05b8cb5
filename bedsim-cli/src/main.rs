mod config;
mod database;
mod jaccard;
mod rank;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "bedsim";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find the reference BED files whose coverage is most similar to a query BED file.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase logging verbosity (-v info, -vv debug)"),
        )
        .subcommand(rank::cli::create_rank_cli())
        .subcommand(jaccard::cli::create_jaccard_cli())
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // RANK
        //
        Some((rank::cli::RANK_CMD, matches)) => {
            rank::handlers::run_rank(matches)?;
        }

        //
        // JACCARD
        //
        Some((jaccard::cli::JACCARD_CMD, matches)) => {
            jaccard::handlers::run_jaccard(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
