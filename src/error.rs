//! Error types for loading the activity guide.
//!
//! Browsing never fails. Only reading the dataset and the config file can.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GuideError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid activity data in {path}: {source}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("duplicate phase name: {0}")]
    DuplicatePhase(String),
    #[error("duplicate category name {category:?} in phase {phase:?}")]
    DuplicateCategory { phase: String, category: String },
}

pub type Result<T> = std::result::Result<T, GuideError>;
