//! Enums used throughout the activity guide
//!
//! This module contains the selection state and the outcome of handling
//! a key press.

use super::dataset::Phase;

/// Which phases the browser is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    AllPhases,
    SinglePhase(String),
}

impl Selection {
    /// `None` is the "all phases" sentinel
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) => Selection::SinglePhase(name.to_string()),
            None => Selection::AllPhases,
        }
    }

    pub fn phase_name(&self) -> Option<&str> {
        match self {
            Selection::AllPhases => None,
            Selection::SinglePhase(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::AllPhases)
    }

    pub fn matches(&self, phase: &Phase) -> bool {
        match self {
            Selection::AllPhases => true,
            Selection::SinglePhase(name) => phase.name == *name,
        }
    }

    /// Line shown under the navigation title
    pub fn subtitle(&self) -> String {
        match self {
            Selection::AllPhases => "Select a phase to view its activities".to_string(),
            Selection::SinglePhase(name) => format!("Viewing {}", name),
        }
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}
