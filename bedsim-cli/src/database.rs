use std::fs::read_dir;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use bedsim_core::models::IntervalSet;

///
/// List reference files in `dir` whose names end with one of `extensions`,
/// sorted by file name so the reference order is reproducible.
///
pub fn list_reference_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let suffixes: Vec<String> = extensions.iter().map(|ext| format!(".{}", ext)).collect();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in read_dir(dir)
        .with_context(|| format!("Failed to read reference directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())));
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

///
/// Name reported for a reference: its file name.
///
pub fn reference_identifier(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

///
/// Load every reference file into an [IntervalSet], in parallel, keeping the
/// order of `paths`. The first file that fails to load aborts the whole run.
///
pub fn load_references(paths: &[PathBuf], show_progress: bool) -> Result<Vec<(String, IntervalSet)>> {
    let pb = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
        );
        pb.set_message("Loading references");
        pb
    } else {
        ProgressBar::hidden()
    };

    let references = paths
        .par_iter()
        .map(|path| {
            let set = IntervalSet::try_from(path.as_path())
                .with_context(|| format!("Failed to load reference BED file: {}", path.display()))?;
            pb.inc(1);
            Ok((reference_identifier(path), set))
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();
    Ok(references)
}
