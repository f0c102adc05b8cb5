use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "database/";
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

///
/// Settings for a similarity search over a directory of reference BED files.
///
/// Every field is optional in the TOML file; missing ones take the defaults.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Directory holding the reference collection
    pub database: PathBuf,
    /// Number of matches to report
    pub top_n: usize,
    /// File name suffixes that mark a reference file, without the leading dot
    pub extensions: Vec<String>,
    /// Load at most this many references (in file name order)
    pub max_references: Option<usize>,
    /// Size of the worker pool; the rayon default when unset
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            database: PathBuf::from(DEFAULT_DATABASE),
            top_n: DEFAULT_TOP_N,
            extensions: vec!["bed".to_string(), "bed.gz".to_string()],
            max_references: None,
            threads: None,
        }
    }
}

impl TryFrom<&Path> for SearchConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config/search.toml");
        let config = SearchConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.database, PathBuf::from("../tests/data/database"));
        assert_eq!(config.top_n, 2);
        assert_eq!(config.max_references, Some(10));
        // not set in the file
        assert_eq!(config.extensions, SearchConfig::default().extensions);
        assert_eq!(config.threads, None);
    }

    #[rstest]
    fn test_empty_toml_is_default() {
        let config: SearchConfig = toml::from_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[rstest]
    fn test_unknown_key_is_rejected() {
        let result = toml::from_str::<SearchConfig>("top_m = 4");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/config/missing.toml");
        let result = SearchConfig::try_from(path.as_path());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
