use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};
use serde::Serialize;

use bedsim_core::models::IntervalSet;
use bedsim_rank::{ComparisonResult, rank};

use crate::config::SearchConfig;
use crate::database::{list_reference_files, load_references};

/// JSON body of `rank`. Entries are objects with the base-pair counts, not
/// `[name, score]` pairs.
#[derive(Serialize)]
struct RankOutput<'a> {
    top_matches: &'a [ComparisonResult],
}

enum OutputFormat {
    Json,
    Tsv,
}

pub fn run_rank(matches: &ArgMatches) -> Result<()> {
    let query_path = matches
        .get_one::<String>("query")
        .expect("A path to a query file is required.");

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("tsv") => OutputFormat::Tsv,
        _ => OutputFormat::Json,
    };
    let output_path = matches.get_one::<String>("output");
    let show_progress = !matches.get_flag("quiet");

    let config = resolve_config(matches)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()
        .context("Failed to build worker pool")?;

    let results = pool.install(|| search(Path::new(query_path), &config, show_progress))?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&RankOutput {
            top_matches: &results,
        })
        .context("Failed to serialize output to JSON")?,
        OutputFormat::Tsv => render_tsv(&results)?,
    };

    match output_path {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(rendered.as_bytes())?;
            info!("Output written to {}", p);
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
            println!(); // trailing newline
        }
    }

    Ok(())
}

///
/// Build the effective settings: the TOML file when `--config` is given,
/// defaults otherwise, then any explicit command line flag on top.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SearchConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => SearchConfig::default(),
    };

    if let Some(database) = matches.get_one::<String>("database") {
        config.database = PathBuf::from(database);
    }
    if let Some(top_n) = matches.get_one::<usize>("top-n") {
        config.top_n = *top_n;
    }
    if let Some(threads) = matches.get_one::<usize>("threads") {
        config.threads = Some(*threads);
    }
    if let Some(max_references) = matches.get_one::<usize>("max-references") {
        config.max_references = Some(*max_references);
    }

    Ok(config)
}

///
/// Load the query and the reference collection, then rank.
///
pub fn search(query_path: &Path, config: &SearchConfig, show_progress: bool) -> Result<Vec<ComparisonResult>> {
    let query = IntervalSet::try_from(query_path)
        .with_context(|| format!("Failed to load query BED file: {}", query_path.display()))?;
    info!("Query: {}", query);

    let mut files = list_reference_files(&config.database, &config.extensions)?;
    if let Some(max) = config.max_references {
        if files.len() > max {
            warn!(
                "Found {} reference files, only the first {} will be compared",
                files.len(),
                max
            );
            files.truncate(max);
        }
    }
    if files.is_empty() {
        warn!("No reference files found in {}", config.database.display());
    }

    let references = load_references(&files, show_progress)?;
    info!(
        "Loaded {} references from {}",
        references.len(),
        config.database.display()
    );

    let results = rank(&query, &references, config.top_n).context("Failed to rank references")?;

    Ok(results)
}

fn render_tsv(results: &[ComparisonResult]) -> Result<String> {
    let mut out = String::from("identifier\tjaccard\tintersection\tunion");
    for r in results {
        write!(
            &mut out,
            "\n{}\t{}\t{}\t{}",
            r.identifier, r.jaccard, r.intersection, r.union
        )?;
    }
    Ok(out)
}
