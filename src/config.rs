//! Configuration file handling.
//!
//! Settings come from an optional TOML file, then command-line flags
//! override them. Lookup order for the file:
//! 1. `--config <path>` (must exist)
//! 2. `<config_dir>/activity-guide/config.toml` (used when present)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Args;
use crate::error::{GuideError, Result};
use crate::models::DataSource;

pub const DEFAULT_COLUMNS: usize = 3;
pub const MAX_COLUMNS: usize = 4;
pub const DEFAULT_CARD_HEIGHT: u16 = 10;
/// Two border rows plus at least two item rows
pub const MIN_CARD_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Activity data file; the embedded dataset is used when unset
    pub data_path: Option<PathBuf>,
    /// Reject datasets with duplicate phase or category names
    pub strict: bool,
    /// Category cards per row on wide terminals
    pub columns: usize,
    /// Height of a category card in rows, borders included
    pub card_height: u16,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            strict: false,
            columns: DEFAULT_COLUMNS,
            card_height: DEFAULT_CARD_HEIGHT,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("activity-guide").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| GuideError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    /// Find and load the config file. Returns the path that was used, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Ok((Self::load(&path)?, Some(path))),
            _ => Ok((Self::default(), None)),
        }
    }

    /// Apply command-line overrides
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(ref data) = args.data {
            self.data_path = Some(data.clone());
        }
        if args.strict {
            self.strict = true;
        }
        if let Some(ref log_file) = args.log_file {
            self.log_file = Some(log_file.clone());
        }
        match args.verbose {
            0 => {}
            1 => self.log_level = "debug".to_string(),
            _ => self.log_level = "trace".to_string(),
        }
        self.normalized()
    }

    pub fn data_source(&self) -> DataSource {
        match self.data_path {
            Some(ref path) => DataSource::File(path.clone()),
            None => DataSource::Embedded,
        }
    }

    fn normalized(mut self) -> Self {
        self.columns = self.columns.clamp(1, MAX_COLUMNS);
        self.card_height = self.card_height.max(MIN_CARD_HEIGHT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn create_temp_config(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.columns, 3);
        assert_eq!(config.card_height, 10);
        assert_eq!(config.log_level, "info");
        assert!(!config.strict);
        assert_eq!(config.data_source(), DataSource::Embedded);
    }

    #[test]
    fn test_load_partial_file() {
        let (_file, path) = create_temp_config("strict = true\ncolumns = 2\n");
        let config = Config::load(&path).unwrap();
        assert!(config.strict);
        assert_eq!(config.columns, 2);
        assert_eq!(config.card_height, DEFAULT_CARD_HEIGHT);
    }

    #[test]
    fn test_load_clamps_layout_values() {
        let (_file, path) = create_temp_config("columns = 9\ncard_height = 1\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.columns, MAX_COLUMNS);
        assert_eq!(config.card_height, MIN_CARD_HEIGHT);

        let (_file, path) = create_temp_config("columns = 0\n");
        assert_eq!(Config::load(&path).unwrap().columns, 1);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let (_file, path) = create_temp_config("colums = 2\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, GuideError::Config { .. }));
    }

    #[test]
    fn test_resolve_explicit_missing_file() {
        let err = Config::resolve(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(matches!(err, GuideError::Io { .. }));
    }

    #[test]
    fn test_resolve_explicit_file() {
        let (_file, path) = create_temp_config("data_path = \"guide.json\"\n");
        let (config, used) = Config::resolve(Some(&path)).unwrap();
        assert_eq!(used, Some(path));
        assert_eq!(
            config.data_source(),
            DataSource::File(PathBuf::from("guide.json"))
        );
    }

    #[test]
    fn test_merge_args_overrides_file() {
        let (_file, path) = create_temp_config("data_path = \"guide.json\"\nlog_level = \"warn\"\n");
        let config = Config::load(&path).unwrap();
        let args = Args::parse_from([
            "activity-guide",
            "--data",
            "other.json",
            "--strict",
            "-vv",
        ]);

        let merged = config.merge_args(&args);
        assert_eq!(merged.data_path, Some(PathBuf::from("other.json")));
        assert!(merged.strict);
        assert_eq!(merged.log_level, "trace");
    }

    #[test]
    fn test_merge_args_keeps_file_values() {
        let (_file, path) = create_temp_config("strict = true\nlog_level = \"warn\"\n");
        let config = Config::load(&path).unwrap();
        let args = Args::parse_from(["activity-guide"]);

        let merged = config.merge_args(&args);
        assert!(merged.strict);
        assert_eq!(merged.log_level, "warn");
        assert_eq!(merged.data_path, None);
    }
}
