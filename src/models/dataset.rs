//! Activity dataset structures
//!
//! The dataset is a read-only tree of phases, categories and activity
//! strings. It is loaded once at startup and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};

/// Dataset compiled into the binary, used when no data file is configured
pub const EMBEDDED_DATA: &str = include_str!("../../data/activities.json");

/// A named subgrouping of activity items within a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Category {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A top-level construction phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Phase {
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Sum of item counts across all categories
    pub fn total_activities(&self) -> usize {
        self.categories.iter().map(Category::item_count).sum()
    }
}

/// Where the dataset was read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Embedded => f.write_str("<embedded>"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The whole activity document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityData {
    pub phases: Vec<Phase>,
}

impl ActivityData {
    /// Load the dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse the dataset compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_DATA, Path::new("<embedded>"))
    }

    pub fn from_source(source: &DataSource) -> Result<Self> {
        match source {
            DataSource::Embedded => Self::embedded(),
            DataSource::File(path) => Self::load(path),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| GuideError::Dataset {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn category_count(&self) -> usize {
        self.phases.iter().map(Phase::category_count).sum()
    }

    pub fn total_activities(&self) -> usize {
        self.phases.iter().map(Phase::total_activities).sum()
    }

    /// First phase carrying the given name
    pub fn find_phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == name)
    }

    /// Every repeated phase name and every category name repeated within
    /// its phase, in document order. Each repeat is reported once.
    pub fn duplicate_names(&self) -> Vec<GuideError> {
        let mut problems = Vec::new();
        let mut phase_names = HashSet::new();
        let mut reported_phases = HashSet::new();

        for phase in &self.phases {
            if !phase_names.insert(phase.name.as_str())
                && reported_phases.insert(phase.name.as_str())
            {
                problems.push(GuideError::DuplicatePhase(phase.name.clone()));
            }

            let mut category_names = HashSet::new();
            let mut reported_categories = HashSet::new();
            for category in &phase.categories {
                if !category_names.insert(category.name.as_str())
                    && reported_categories.insert(category.name.as_str())
                {
                    problems.push(GuideError::DuplicateCategory {
                        phase: phase.name.clone(),
                        category: category.name.clone(),
                    });
                }
            }
        }

        problems
    }

    /// Fail on the first duplicate name
    pub fn ensure_unique_names(&self) -> Result<()> {
        match self.duplicate_names().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
