use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use bedsim_core::models::IntervalSet;
use bedsim_rank::{ComparisonResult, compare};

use crate::database::reference_identifier;

pub fn run_jaccard(matches: &ArgMatches) -> Result<()> {
    let bed_a = matches
        .get_one::<String>("bed_a")
        .expect("A path to the first BED file is required.");
    let bed_b = matches
        .get_one::<String>("bed_b")
        .expect("A path to the second BED file is required.");

    let result = jaccard_files(Path::new(bed_a), Path::new(bed_b))?;

    println!("intersection\tunion\tjaccard");
    println!("{}\t{}\t{}", result.intersection, result.union, result.jaccard);

    Ok(())
}

///
/// Compare two BED files; `a` plays the query, `b` the reference.
///
pub fn jaccard_files(a: &Path, b: &Path) -> Result<ComparisonResult> {
    let set_a = IntervalSet::try_from(a)
        .with_context(|| format!("Failed to load BED file: {}", a.display()))?;
    let set_b = IntervalSet::try_from(b)
        .with_context(|| format!("Failed to load BED file: {}", b.display()))?;

    Ok(compare(&set_a, &reference_identifier(b), &set_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_jaccard_files() {
        let result = jaccard_files(
            Path::new("../tests/data/regionset/query.bed"),
            Path::new("../tests/data/database/r1.bed"),
        )
        .unwrap();

        assert_eq!(result.identifier, "r1.bed");
        assert_eq!(result.intersection, 50);
        assert_eq!(result.union, 150);
    }

    #[rstest]
    fn test_jaccard_files_is_symmetric() {
        let a = Path::new("../tests/data/regionset/dummy.bed");
        let b = Path::new("../tests/data/regionset/dummy_headers.bed");
        let ab = jaccard_files(a, b).unwrap();
        let ba = jaccard_files(b, a).unwrap();
        assert_eq!(ab.jaccard, ba.jaccard);
        assert_eq!(ab.intersection, 2);
    }
}
